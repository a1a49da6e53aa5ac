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

use data::core::primitives::{FoodType, Habitat};
use data::effects::effect::Effect;
use data::events::engine_event::EngineEvent;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{PlaceEggsPrompt, PromptKind, SelectFoodPrompt};
use enumset::EnumSet;
use utils::fail;
use utils::outcome::{Outcome, OK};

use crate::powers::context::PowerCtx;
use crate::queries::board_queries;

/// The lay-eggs turn action: grassland-row strength, an optional
/// food-for-egg conversion, and a single distribution prompt.
pub async fn run(ctx: &mut PowerCtx<'_>, take_bonus: bool) -> Outcome {
    let birds = ctx.player().board.row(Habitat::Grassland).bird_count() as u32;
    let mut count = 2 + birds / 2;

    // Bonus conversion: pay 1 food for 1 extra egg. Silently skipped when
    // the player holds no food.
    if take_bonus && ctx.player().total_food() > 0 {
        let options: EnumSet<FoodType> = enum_iterator::all::<FoodType>()
            .filter(|&food| ctx.player().food[food] > 0)
            .collect();
        let choice = ctx
            .prompt(
                "Pay 1 food for 1 extra egg",
                PromptKind::SelectFood(SelectFoodPrompt { count: 1, options }),
            )
            .await?;
        let PromptChoice::Food { food } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::DiscardFood { player: ctx.owner, food })?;
        count += 1;
    }

    let eligible = board_queries::egg_slots(ctx.game, ctx.registry, ctx.owner, None)?;
    let capacity: u32 = eligible.iter().map(|slot| slot.limit).sum();
    let to_lay = count.min(capacity);
    if to_lay > 0 {
        let choice = ctx
            .prompt(
                format!("Lay {to_lay} eggs"),
                PromptKind::PlaceEggs(PlaceEggsPrompt { count: to_lay, eligible }),
            )
            .await?;
        let PromptChoice::Eggs { placements } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::LayEggs { player: ctx.owner, placements })?;
        ctx.emit(EngineEvent::EggsLaid { player: ctx.owner, count: to_lay });
    }

    ctx.emit(EngineEvent::HabitatActivated { player: ctx.owner, habitat: Habitat::Grassland });
    OK
}
