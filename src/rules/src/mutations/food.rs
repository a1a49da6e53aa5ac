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

use data::core::primitives::{BirdInstanceId, DieSelection, FoodMap, PlayerId};
use data::effects::effect::FoodSource;
use data::game_states::game_state::GameState;
use utils::outcome::{Outcome, OK};
use utils::with_error::WithError;
use utils::verify;

/// Removes the selected dice from the feeder and checks that they pay
/// exactly the declared food. No-op for supply-sourced gains.
fn take_dice(
    game: &mut GameState,
    source: FoodSource,
    food: &FoodMap,
    dice: &[DieSelection],
) -> Outcome {
    match source {
        FoodSource::Supply => {
            verify!(dice.is_empty(), "Supply-sourced food gain names birdfeeder dice");
            OK
        }
        FoodSource::Birdfeeder => {
            let mut paid = FoodMap::default();
            for selection in dice {
                verify!(
                    selection.face.can_pay(selection.resolved),
                    "Die face {:?} cannot resolve to {:?}",
                    selection.face,
                    selection.resolved
                );
                verify!(
                    game.birdfeeder.remove(selection.face),
                    "Die face {:?} is not in the birdfeeder",
                    selection.face
                );
                paid[selection.resolved] += 1;
            }
            verify!(&paid == food, "Selected dice do not pay the declared food");
            OK
        }
    }
}

/// Gains food into the player's supply.
pub fn gain(
    game: &mut GameState,
    player: PlayerId,
    food: &FoodMap,
    source: FoodSource,
    dice: &[DieSelection],
) -> Outcome {
    take_dice(game, source, food, dice)?;
    let state = game.player_mut(player);
    for (food_type, count) in food.iter() {
        state.food[food_type] += count;
    }
    OK
}

/// Gains food for several players at once, always from the supply.
pub fn gain_all(game: &mut GameState, gains: &[(PlayerId, FoodMap)]) -> Outcome {
    for (player, food) in gains {
        gain(game, *player, food, FoodSource::Supply, &[])?;
    }
    OK
}

/// Discards food from the player's supply.
pub fn discard(game: &mut GameState, player: PlayerId, food: &FoodMap) -> Outcome {
    let state = game.player_mut(player);
    for (food_type, count) in food.iter() {
        verify!(
            state.food[food_type] >= *count,
            "{} holds {} {:?}, cannot discard {}",
            player,
            state.food[food_type],
            food_type,
            count
        );
    }
    let state = game.player_mut(player);
    for (food_type, count) in food.iter() {
        state.food[food_type] -= count;
    }
    OK
}

/// Caches food onto a bird. Cached food is scored, never spent.
pub fn cache(
    game: &mut GameState,
    player: PlayerId,
    instance: BirdInstanceId,
    food: &FoodMap,
    source: FoodSource,
    dice: &[DieSelection],
) -> Outcome {
    take_dice(game, source, food, dice)?;
    let bird = game
        .player_mut(player)
        .bird_mut(instance)
        .with_error(|| format!("{player} has no bird instance {instance:?}"))?;
    for (food_type, count) in food.iter() {
        bird.cached_food[food_type] += count;
    }
    OK
}
