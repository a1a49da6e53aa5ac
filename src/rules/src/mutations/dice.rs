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

use data::core::primitives::DieFace;
use data::game_states::birdfeeder::FEEDER_DICE;
use data::game_states::game_state::GameState;
use rand::Rng;
use utils::outcome::Value;

const FACES: [DieFace; 6] = [
    DieFace::Invertebrate,
    DieFace::Seed,
    DieFace::Fish,
    DieFace::Fruit,
    DieFace::Rodent,
    DieFace::InvertebrateSeed,
];

/// Rolls `count` dice from the match rng.
pub fn roll(game: &mut GameState, count: usize) -> Vec<DieFace> {
    (0..count).map(|_| FACES[game.rng.gen_range(0..FACES.len())]).collect()
}

/// Rerolls the dice currently in the feeder, returning the new faces.
pub fn reroll_birdfeeder(game: &mut GameState) -> Value<Vec<DieFace>> {
    let count = game.birdfeeder.len();
    let dice = roll(game, count);
    game.birdfeeder.set_dice(dice.clone());
    Ok(dice)
}

/// Rolls all five dice back into the feeder, returning the new faces.
pub fn refill_birdfeeder(game: &mut GameState) -> Value<Vec<DieFace>> {
    let dice = roll(game, FEEDER_DICE);
    game.birdfeeder.set_dice(dice.clone());
    Ok(dice)
}

/// Rolls the dice currently outside the feeder without touching the feeder.
/// Used by predator powers.
pub fn roll_outside_feeder(game: &mut GameState) -> Value<Vec<DieFace>> {
    let count = FEEDER_DICE - game.birdfeeder.len();
    Ok(roll(game, count))
}
