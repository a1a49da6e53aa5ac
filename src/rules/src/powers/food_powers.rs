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

use data::core::primitives::{DieFace, FoodMap, FoodType};
use data::effects::effect::{Effect, FoodSource, SkipReason};
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{PromptKind, SelectDicePrompt};
use enumset::EnumSet;
use utils::fail;
use utils::outcome::OK;

use crate::powers::context::PowerCtx;
use crate::powers::registry::PowerFuture;

/// Gains food directly from the supply. A missing food parameter means "any"
/// and gains into the wild bucket.
pub fn gain_food_from_supply<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        let food = ctx.params.food.unwrap_or(FoodType::Wild);
        if !ctx.offer().await? {
            return OK;
        }
        let mut gain = FoodMap::default();
        gain[food] = count;
        ctx.apply(Effect::GainFood {
            player: ctx.owner,
            food: gain,
            source: FoodSource::Supply,
            dice: vec![],
        })?;
        OK
    })
}

/// Picks dice from the feeder one at a time, re-reading the feeder between
/// picks.
pub fn gain_food_from_feeder<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        if ctx.game.birdfeeder.is_empty() {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        for _ in 0..count {
            if ctx.game.birdfeeder.is_empty() {
                break;
            }
            let faces: EnumSet<DieFace> =
                ctx.game.birdfeeder.dice().iter().copied().collect();
            let choice = ctx
                .prompt(
                    "Take a die from the birdfeeder",
                    PromptKind::SelectDice(SelectDicePrompt {
                        count: 1,
                        faces,
                        reroll_allowed: false,
                    }),
                )
                .await?;
            let PromptChoice::Dice(dice) = choice else {
                fail!("Validated choice does not match prompt kind");
            };
            let mut food = FoodMap::default();
            for selection in &dice.selections {
                food[selection.resolved] += 1;
            }
            ctx.apply(Effect::GainFood {
                player: ctx.owner,
                food,
                source: FoodSource::Birdfeeder,
                dice: dice.selections,
            })?;
        }
        OK
    })
}

/// Gains every feeder die that can pay the parameter food type, dual faces
/// included. The selector resolves each dual die.
pub fn gain_food_from_feeder_matching<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(food) = ctx.params.food else {
            fail!("gain_food_from_feeder_matching requires a food parameter");
        };
        let matching = |feeder: &[DieFace]| {
            feeder.iter().copied().filter(|face| face.can_pay(food)).collect::<Vec<_>>()
        };
        if matching(ctx.game.birdfeeder.dice()).is_empty() {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }

        let eligible = matching(ctx.game.birdfeeder.dice());
        let faces: EnumSet<DieFace> = eligible.iter().copied().collect();
        let choice = ctx
            .prompt(
                format!("Take all {food:?} dice from the birdfeeder"),
                PromptKind::SelectDice(SelectDicePrompt {
                    count: eligible.len() as u32,
                    faces,
                    reroll_allowed: false,
                }),
            )
            .await?;
        let PromptChoice::Dice(dice) = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        let mut gained = FoodMap::default();
        for selection in &dice.selections {
            gained[selection.resolved] += 1;
        }
        ctx.apply(Effect::GainFood {
            player: ctx.owner,
            food: gained,
            source: FoodSource::Birdfeeder,
            dice: dice.selections,
        })?;
        OK
    })
}

/// Every participating player gains the parameter food from the supply.
pub fn all_players_gain_food<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(food) = ctx.params.food else {
            fail!("all_players_gain_food requires a food parameter");
        };
        let count = ctx.params.count_or(1);
        ctx.activate()?;
        let gains = ctx
            .game
            .active_players()
            .map(|player| {
                let mut gain = FoodMap::default();
                gain[food] = count;
                (player.id, gain)
            })
            .collect();
        ctx.apply(Effect::AllPlayersGainFood { gains })?;
        OK
    })
}

/// Caches the parameter food from the supply onto this bird.
pub fn cache_food_from_supply<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("cache_food_from_supply requires a bird");
        };
        let Some(food) = ctx.params.food else {
            fail!("cache_food_from_supply requires a food parameter");
        };
        let count = ctx.params.count_or(1);
        if !ctx.offer().await? {
            return OK;
        }
        let mut cached = FoodMap::default();
        cached[food] = count;
        ctx.apply(Effect::CacheFood {
            player: ctx.owner,
            instance,
            food: cached,
            source: FoodSource::Supply,
            dice: vec![],
        })?;
        OK
    })
}
