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

use data::core::primitives::Habitat;
use data::effects::effect::Effect;
use data::events::engine_event::EngineEvent;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{
    CardSource, PromptKind, RemoveEggsPrompt, SelectCardsPrompt,
};
use utils::fail;
use utils::outcome::{Outcome, OK};

use crate::powers::context::PowerCtx;
use crate::queries::board_queries;

/// The draw-cards turn action: wetland-row strength, an optional
/// egg-for-card conversion, and one pick across tray and deck.
pub async fn run(ctx: &mut PowerCtx<'_>, take_bonus: bool) -> Outcome {
    let birds = ctx.player().board.row(Habitat::Wetland).bird_count() as u32;
    let mut count = 1 + birds / 2;

    // Bonus conversion: discard 1 egg for 1 extra card. Silently skipped
    // when no bird holds an egg.
    if take_bonus && ctx.player().total_eggs() > 0 {
        let eligible = board_queries::birds_with_eggs(ctx.game, ctx.owner);
        let choice = ctx
            .prompt(
                "Discard an egg for 1 extra card",
                PromptKind::RemoveEggs(RemoveEggsPrompt { count: 1, eligible }),
            )
            .await?;
        let PromptChoice::Eggs { placements } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::DiscardEggs { player: ctx.owner, removals: placements })?;
        count += 1;
    }

    let options = ctx.game.bird_supply.tray.clone();
    let deck_available = ctx.game.bird_supply.deck_size() as u32;
    let take = count.min(options.len() as u32 + deck_available);
    if take > 0 {
        let choice = ctx
            .prompt(
                format!("Draw {take} cards"),
                PromptKind::SelectCards(SelectCardsPrompt {
                    source: CardSource::TrayOrDeck,
                    count: take,
                    options,
                    deck_available,
                    allow_fewer: false,
                }),
            )
            .await?;
        let PromptChoice::Cards(cards) = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::DrawCards {
            player: ctx.owner,
            from_deck: cards.from_deck,
            from_tray: cards.cards,
            from_revealed: vec![],
            drawn: vec![],
        })?;
    }

    ctx.emit(EngineEvent::HabitatActivated { player: ctx.owner, habitat: Habitat::Wetland });
    OK
}
