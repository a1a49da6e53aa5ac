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

use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{BirdInstanceId, Habitat, NestType, PlayerId};
use data::game_states::game_state::GameState;
use data::prompts::prompt::EggSlot;
use utils::outcome::Value;

/// Birds of the given player with remaining egg capacity, optionally
/// filtered by nest type. Star nests match any filter.
pub fn egg_slots(
    game: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
    nest: Option<NestType>,
) -> Value<Vec<EggSlot>> {
    let mut slots = Vec::new();
    for bird in game.player(player).board.birds() {
        let card = registry.bird(bird.card)?;
        if let Some(required) = nest {
            if card.nest != required && card.nest != NestType::Wild {
                continue;
            }
        }
        if bird.eggs < card.egg_capacity {
            slots.push(EggSlot { instance: bird.id, limit: card.egg_capacity - bird.eggs });
        }
    }
    Ok(slots)
}

/// Birds of the given player currently holding at least one egg.
pub fn birds_with_eggs(game: &GameState, player: PlayerId) -> Vec<EggSlot> {
    game.player(player)
        .board
        .birds()
        .filter(|bird| bird.eggs > 0)
        .map(|bird| EggSlot { instance: bird.id, limit: bird.eggs })
        .collect()
}

/// Birds in the given player's habitat row, rightmost first. The activation
/// order of a brown-power chain.
pub fn row_right_to_left(
    game: &GameState,
    player: PlayerId,
    habitat: Habitat,
) -> Vec<BirdInstanceId> {
    game.player(player).board.row(habitat).birds().rev().map(|bird| bird.id).collect()
}
