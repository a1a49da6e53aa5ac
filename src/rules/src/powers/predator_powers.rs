// Copyright © aviary 2024-present
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use data::core::primitives::FoodMap;
use data::effects::effect::{Effect, FoodSource, SkipReason};
use data::events::engine_event::EngineEvent;
use data::game_states::birdfeeder::FEEDER_DICE;
use utils::fail;
use utils::outcome::OK;

use crate::powers::context::PowerCtx;
use crate::powers::registry::PowerFuture;

/// Rolls the dice outside the feeder; on any face paying the parameter food,
/// caches one such token on this bird.
pub fn predator_roll_dice<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("predator_roll_dice requires a bird");
        };
        let Some(food) = ctx.params.food else {
            fail!("predator_roll_dice requires a food parameter");
        };
        if ctx.game.birdfeeder.len() == FEEDER_DICE {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }

        let effect = ctx.apply(Effect::RollDice { player: ctx.owner, rolled: vec![] })?;
        let Effect::RollDice { rolled, .. } = effect else {
            fail!("Applier returned a different effect variant");
        };
        let succeeded = rolled.iter().any(|face| face.can_pay(food));
        if succeeded {
            let mut cached = FoodMap::default();
            cached[food] = 1;
            ctx.apply(Effect::CacheFood {
                player: ctx.owner,
                instance,
                food: cached,
                source: FoodSource::Supply,
                dice: vec![],
            })?;
        }
        ctx.emit(EngineEvent::PredatorResolved { player: ctx.owner, instance, succeeded });
        OK
    })
}

/// Reveals the top deck card; birds under the wingspan threshold are tucked
/// under this bird, anything else goes to the discard when the handler's
/// revealed cards are flushed.
pub fn predator_hunt_small_bird<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("predator_hunt_small_bird requires a bird");
        };
        let threshold = ctx.params.max_wingspan.unwrap_or(75);
        if ctx.game.bird_supply.deck_size() == 0 {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }

        let effect =
            ctx.apply(Effect::RevealCards { player: ctx.owner, count: 1, revealed: vec![] })?;
        let Effect::RevealCards { revealed, .. } = effect else {
            fail!("Applier returned a different effect variant");
        };
        let succeeded = match revealed.first() {
            // Flightless birds have no wingspan and always escape.
            Some(&card) => {
                ctx.card(card)?.wingspan_cm.map_or(false, |wingspan| wingspan < threshold)
            }
            None => false,
        };
        if succeeded {
            ctx.apply(Effect::TuckCards {
                player: ctx.owner,
                target: instance,
                from_hand: vec![],
                from_deck: 0,
                from_revealed: revealed,
                tucked_from_deck: vec![],
            })?;
        }
        ctx.emit(EngineEvent::PredatorResolved { player: ctx.owner, instance, succeeded });
        OK
    })
}
