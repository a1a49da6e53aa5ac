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

use data::core::primitives::{DieFace, FoodMap, Habitat};
use data::effects::effect::{Effect, FoodSource};
use data::events::engine_event::EngineEvent;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{CardSource, PromptKind, SelectCardsPrompt, SelectDicePrompt};
use enumset::EnumSet;
use utils::fail;
use utils::outcome::{Outcome, OK};

use crate::powers::context::PowerCtx;

/// The gain-food turn action: dice picked from the feeder one at a time,
/// with the forest-row strength and an optional card-for-die conversion.
pub async fn run(ctx: &mut PowerCtx<'_>, take_bonus: bool) -> Outcome {
    let birds = ctx.player().board.row(Habitat::Forest).bird_count() as u32;
    let mut picks = 1 + birds / 2;

    // Bonus conversion: discard 1 card from hand for 1 extra die. Silently
    // skipped without a card to discard.
    if take_bonus && !ctx.player().hand.is_empty() {
        let options = ctx.player().hand.clone();
        let choice = ctx
            .prompt(
                "Discard a card for 1 extra die",
                PromptKind::SelectCards(SelectCardsPrompt {
                    source: CardSource::Hand,
                    count: 1,
                    options,
                    deck_available: 0,
                    allow_fewer: false,
                }),
            )
            .await?;
        let PromptChoice::Cards(cards) = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::DiscardCards {
            player: ctx.owner,
            cards: cards.cards,
            from_revealed: false,
        })?;
        picks += 1;
    }

    let mut total = 0;
    while picks > 0 {
        if ctx.game.birdfeeder.is_empty() {
            ctx.apply(Effect::RefillBirdfeeder { dice: vec![] })?;
        }
        let faces: EnumSet<DieFace> = ctx.game.birdfeeder.dice().iter().copied().collect();
        let reroll_allowed = ctx.game.birdfeeder.is_homogeneous();
        let choice = ctx
            .prompt(
                "Take a die from the birdfeeder",
                PromptKind::SelectDice(SelectDicePrompt { count: 1, faces, reroll_allowed }),
            )
            .await?;
        let PromptChoice::Dice(dice) = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        if dice.reroll {
            ctx.apply(Effect::RerollBirdfeeder { dice: vec![] })?;
            continue;
        }
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
        total += 1;
        picks -= 1;
    }

    if total > 0 {
        ctx.emit(EngineEvent::FoodGained {
            player: ctx.owner,
            total,
            source: FoodSource::Birdfeeder,
        });
    }
    ctx.emit(EngineEvent::HabitatActivated { player: ctx.owner, habitat: Habitat::Forest });
    OK
}
