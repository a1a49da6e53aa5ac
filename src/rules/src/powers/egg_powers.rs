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

use data::effects::effect::{Effect, EggPlacement, SkipReason};
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{PlaceEggsPrompt, PromptKind};
use utils::fail;
use utils::outcome::OK;

use crate::powers::context::PowerCtx;
use crate::powers::registry::PowerFuture;
use crate::queries::board_queries;

/// Lays eggs on the bird whose power is running, up to its capacity.
pub fn lay_eggs_on_this<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("lay_eggs_on_this requires a bird");
        };
        let count = ctx.params.count_or(1);
        let remaining = {
            let bird = ctx.this_bird()?;
            ctx.card(bird.card)?.egg_capacity - bird.eggs
        };
        if remaining == 0 {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        ctx.apply(Effect::LayEggs {
            player: ctx.owner,
            placements: vec![EggPlacement { instance, count: count.min(remaining) }],
        })?;
        OK
    })
}

/// Lays eggs on any of the owner's birds, optionally restricted by nest
/// type. The owner distributes them.
pub fn lay_eggs_on_any<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        let nest = ctx.params.nest;
        if board_queries::egg_slots(ctx.game, ctx.registry, ctx.owner, nest)?.is_empty() {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }

        let eligible = board_queries::egg_slots(ctx.game, ctx.registry, ctx.owner, nest)?;
        let capacity: u32 = eligible.iter().map(|slot| slot.limit).sum();
        let choice = ctx
            .prompt(
                format!("Lay {} eggs", count.min(capacity)),
                PromptKind::PlaceEggs(PlaceEggsPrompt {
                    count: count.min(capacity),
                    eligible,
                }),
            )
            .await?;
        let PromptChoice::Eggs { placements } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::LayEggs { player: ctx.owner, placements })?;
        OK
    })
}

/// Every participating player lays one egg on a bird of their choice.
/// Players with no capacity are passed over.
pub fn all_players_lay_eggs<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        ctx.activate()?;

        let mut order = vec![ctx.owner];
        order.extend(ctx.game.opponents_clockwise_of(ctx.owner));

        let mut all_placements = Vec::new();
        for player in order {
            if ctx.game.player(player).forfeited {
                continue;
            }
            let eligible = board_queries::egg_slots(ctx.game, ctx.registry, player, None)?;
            if eligible.is_empty() {
                continue;
            }
            let capacity: u32 = eligible.iter().map(|slot| slot.limit).sum();
            let to_lay = count.min(capacity);
            let choice = ctx
                .prompt_player(
                    player,
                    format!("Lay {to_lay} eggs"),
                    PromptKind::PlaceEggs(PlaceEggsPrompt { count: to_lay, eligible }),
                )
                .await?;
            let PromptChoice::Eggs { placements } = choice else {
                fail!("Validated choice does not match prompt kind");
            };
            all_placements.push((player, placements));
        }
        ctx.apply(Effect::AllPlayersLayEggs { placements: all_placements })?;
        OK
    })
}
