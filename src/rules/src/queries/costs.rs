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

use data::card_definitions::bird_card::FoodCost;
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{BirdCardId, FoodMap, FoodType, Habitat, PlayerId, HABITAT_COLUMNS};
use data::game_states::game_state::GameState;
use data::player_states::player_state::PlayerState;
use data::prompts::prompt::PlayableBird;
use enumset::EnumSet;
use utils::outcome::Value;

/// Egg cost of playing into each column, leftmost to rightmost.
pub const COLUMN_EGG_COST: [u32; HABITAT_COLUMNS] = [0, 1, 1, 2, 2];

/// Whether the given food counters can cover the cost. Wild tokens stand in
/// for anything; wild cost entries accept any token.
pub fn can_afford(held: &FoodMap, cost: &FoodCost) -> bool {
    let total: u32 = held.values().sum();
    match cost {
        FoodCost::All(counts) => {
            let mut required = FoodMap::default();
            for entry in counts {
                required[entry.food] += entry.count;
            }
            let mut deficit = 0;
            let mut surplus = 0;
            for food in FoodType::specific() {
                if held[food] >= required[food] {
                    surplus += held[food] - required[food];
                } else {
                    deficit += required[food] - held[food];
                }
            }
            deficit <= held[FoodType::Wild]
                && required[FoodType::Wild] <= surplus + (held[FoodType::Wild] - deficit)
        }
        FoodCost::Any(counts) => {
            counts.is_empty()
                || counts.iter().any(|entry| {
                    if entry.food.is_specific() {
                        held[entry.food] + held[FoodType::Wild] >= entry.count
                    } else {
                        total >= entry.count
                    }
                })
        }
    }
}

/// A concrete payment covering the cost from the player's supply, preferring
/// specific tokens and spending wild tokens last. Used by baseline agents.
pub fn suggest_payment(held: &FoodMap, cost: &FoodCost) -> Option<FoodMap> {
    match cost {
        FoodCost::All(counts) => {
            let mut payment = FoodMap::default();
            let mut available = *held;
            let mut wild_slots = 0;
            for entry in counts {
                if entry.food.is_specific() {
                    let from_specific = entry.count.min(available[entry.food]);
                    payment[entry.food] += from_specific;
                    available[entry.food] -= from_specific;
                    let shortfall = entry.count - from_specific;
                    if available[FoodType::Wild] < shortfall {
                        return None;
                    }
                    payment[FoodType::Wild] += shortfall;
                    available[FoodType::Wild] -= shortfall;
                } else {
                    wild_slots += entry.count;
                }
            }
            // Wild cost entries take whatever is left, specific tokens first.
            for _ in 0..wild_slots {
                let food = FoodType::specific()
                    .find(|&f| available[f] > 0)
                    .or_else(|| (available[FoodType::Wild] > 0).then_some(FoodType::Wild))?;
                payment[food] += 1;
                available[food] -= 1;
            }
            Some(payment)
        }
        FoodCost::Any(counts) => {
            if counts.is_empty() {
                return Some(FoodMap::default());
            }
            for entry in counts {
                let mut payment = FoodMap::default();
                if entry.food.is_specific() {
                    let from_specific = entry.count.min(held[entry.food]);
                    let shortfall = entry.count - from_specific;
                    if held[FoodType::Wild] >= shortfall {
                        payment[entry.food] = from_specific;
                        payment[FoodType::Wild] = shortfall;
                        return Some(payment);
                    }
                } else {
                    let mut remaining = entry.count;
                    let mut available = *held;
                    for food in enum_iterator::all::<FoodType>() {
                        let take = remaining.min(available[food]);
                        payment[food] += take;
                        available[food] -= take;
                        remaining -= take;
                    }
                    if remaining == 0 {
                        return Some(payment);
                    }
                }
            }
            None
        }
    }
}

/// Total eggs the player can spend on column costs.
pub fn spendable_eggs(player: &PlayerState) -> u32 {
    player.total_eggs()
}

/// Habitats the given card could legally be played into right now.
pub fn playable_habitats(
    game: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
    card: BirdCardId,
) -> Value<EnumSet<Habitat>> {
    let state = game.player(player);
    let definition = registry.bird(card)?;
    let mut habitats = EnumSet::empty();
    if !can_afford(&state.food, &definition.cost) {
        return Ok(habitats);
    }
    for habitat in definition.habitats {
        let Some(column) = state.board.row(habitat).leftmost_empty() else {
            continue;
        };
        if spendable_eggs(state) >= COLUMN_EGG_COST[column] {
            habitats.insert(habitat);
        }
    }
    Ok(habitats)
}

/// Cards in hand that are playable somewhere, with their legal habitats.
pub fn playable_birds(
    game: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
) -> Value<Vec<PlayableBird>> {
    let mut playable = Vec::new();
    for &card in &game.player(player).hand {
        let habitats = playable_habitats(game, registry, player, card)?;
        if !habitats.is_empty() {
            playable.push(PlayableBird { card, habitats });
        }
    }
    Ok(playable)
}
