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

use std::collections::HashSet;

use data::card_definitions::registry::CardRegistry;
use data::core::primitives::HABITAT_COLUMNS;
use data::game_states::birdfeeder::FEEDER_DICE;
use data::game_states::game_state::GameState;
use utils::outcome::{Outcome, OK};
use utils::verify;

/// Checks every structural invariant of a reachable state. Used by tests and
/// by the orchestrator's debug assertions.
pub fn check(game: &GameState, registry: &CardRegistry) -> Outcome {
    verify!(
        game.birdfeeder.len() <= FEEDER_DICE,
        "Birdfeeder holds {} dice",
        game.birdfeeder.len()
    );

    let mut seen_instances = HashSet::new();
    let mut cards_on_boards = 0usize;
    for player in &game.players {
        for habitat in enum_iterator::all() {
            let row = game.player(player.id).board.row(habitat);
            verify!(
                row.slots().len() == HABITAT_COLUMNS,
                "{} row {:?} has {} slots",
                player.id,
                habitat,
                row.slots().len()
            );
            // The occupied prefix must be contiguous.
            let mut seen_empty = false;
            for slot in row.slots() {
                match slot {
                    Some(bird) => {
                        verify!(
                            !seen_empty,
                            "{} row {:?} has a gap before {:?}",
                            player.id,
                            habitat,
                            bird.id
                        );
                        verify!(
                            seen_instances.insert(bird.id),
                            "Bird instance {:?} appears on more than one board",
                            bird.id
                        );
                        let capacity = registry.bird(bird.card)?.egg_capacity;
                        verify!(
                            bird.eggs <= capacity,
                            "Bird {:?} holds {} eggs over capacity {}",
                            bird.id,
                            bird.eggs,
                            capacity
                        );
                        cards_on_boards += 1 + bird.tucked.len();
                    }
                    None => seen_empty = true,
                }
            }
        }

        let mut hand_set = HashSet::new();
        for &card in &player.hand {
            verify!(hand_set.insert(card), "{} holds duplicate card {:?}", player.id, card);
        }
    }

    let total = game.bird_supply.deck.len()
        + game.bird_supply.tray.len()
        + game.bird_supply.discard.len()
        + game.revealed.len()
        + cards_on_boards
        + game.players.iter().map(|player| player.hand.len()).sum::<usize>();
    verify!(
        total == registry.bird_count(),
        "Card conservation violated: {} cards accounted for, universe holds {}",
        total,
        registry.bird_count()
    );

    OK
}
