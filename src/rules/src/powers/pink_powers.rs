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

//! Once-between-turns handlers. Each receives the triggering event through
//! its context; the orchestrator has already matched the event against the
//! power's declared trigger set and skipped forfeited owners.

use data::core::primitives::{FoodMap, FoodType};
use data::effects::effect::{Effect, FoodSource, SkipReason};
use data::events::engine_event::EngineEvent;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{PlaceEggsPrompt, PromptKind};
use utils::fail;
use utils::outcome::OK;

use crate::powers::context::PowerCtx;
use crate::powers::registry::PowerFuture;
use crate::queries::board_queries;

/// Gains food from the supply when an opponent plays a bird, optionally only
/// in a specific habitat.
pub fn gain_food_when_bird_played<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(EngineEvent::BirdPlayed { habitat, .. }) = ctx.trigger.clone() else {
            return ctx.skip(SkipReason::ConditionNotMet);
        };
        if let Some(required) = ctx.params.habitat {
            if habitat != required {
                return ctx.skip(SkipReason::ConditionNotMet);
            }
        }
        if !ctx.offer().await? {
            return OK;
        }
        let food = ctx.params.food.unwrap_or(FoodType::Wild);
        let mut gain = FoodMap::default();
        gain[food] = ctx.params.count_or(1);
        ctx.apply(Effect::GainFood {
            player: ctx.owner,
            food: gain,
            source: FoodSource::Supply,
            dice: vec![],
        })?;
        OK
    })
}

/// Gains food from the supply when an opponent's habitat activation gains
/// food.
pub fn gain_food_when_food_gained<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        if !matches!(ctx.trigger, Some(EngineEvent::FoodGained { .. })) {
            return ctx.skip(SkipReason::ConditionNotMet);
        }
        if !ctx.offer().await? {
            return OK;
        }
        let food = ctx.params.food.unwrap_or(FoodType::Wild);
        let mut gain = FoodMap::default();
        gain[food] = ctx.params.count_or(1);
        ctx.apply(Effect::GainFood {
            player: ctx.owner,
            food: gain,
            source: FoodSource::Supply,
            dice: vec![],
        })?;
        OK
    })
}

/// Lays one egg on an eligible bird when an opponent's habitat activation
/// lays eggs.
pub fn lay_egg_when_eggs_laid<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        if !matches!(ctx.trigger, Some(EngineEvent::EggsLaid { .. })) {
            return ctx.skip(SkipReason::ConditionNotMet);
        }
        if board_queries::egg_slots(ctx.game, ctx.registry, ctx.owner, ctx.params.nest)?
            .is_empty()
        {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        let eligible =
            board_queries::egg_slots(ctx.game, ctx.registry, ctx.owner, ctx.params.nest)?;
        let choice = ctx
            .prompt(
                "Lay 1 egg",
                PromptKind::PlaceEggs(PlaceEggsPrompt { count: 1, eligible }),
            )
            .await?;
        let PromptChoice::Eggs { placements } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::LayEggs { player: ctx.owner, placements })?;
        OK
    })
}

/// Tucks a card from the deck under this bird when an opponent's predator
/// power succeeds.
pub fn tuck_when_predator<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("pink_tuck_when_predator requires a bird");
        };
        let succeeded = match &ctx.trigger {
            Some(EngineEvent::PredatorResolved { succeeded, .. }) => *succeeded,
            _ => return ctx.skip(SkipReason::ConditionNotMet),
        };
        if !succeeded {
            return ctx.skip(SkipReason::ConditionNotMet);
        }
        if ctx.game.bird_supply.deck_size() == 0 {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        ctx.apply(Effect::TuckCards {
            player: ctx.owner,
            target: instance,
            from_hand: vec![],
            from_deck: ctx.params.count_or(1),
            from_revealed: vec![],
            tucked_from_deck: vec![],
        })?;
        OK
    })
}
