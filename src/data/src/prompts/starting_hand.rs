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

use serde::{Deserialize, Serialize};

use crate::core::primitives::{BirdCardId, BonusCardId, FoodType};

/// The starting-hand decision surface: the five dealt birds and two dealt
/// bonus cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingHandPrompt {
    pub birds: Vec<BirdCardId>,
    pub bonus_cards: Vec<BonusCardId>,
}

/// A player's starting-hand selection: birds to keep, exactly one bonus card
/// to keep, and one starting food token discarded per bird kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingHandChoice {
    pub keep_birds: Vec<BirdCardId>,
    pub keep_bonus: BonusCardId,
    pub discard_food: Vec<FoodType>,
}
