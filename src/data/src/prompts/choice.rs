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

use crate::core::primitives::{
    BirdCardId, BirdInstanceId, BonusCardId, DieSelection, FoodMap, Habitat,
};
use crate::effects::effect::EggPlacement;

/// An agent's answer to a [Prompt]. The variant must match the prompt's
/// [PromptKind] tag.
///
/// [Prompt]: crate::prompts::prompt::Prompt
/// [PromptKind]: crate::prompts::prompt::PromptKind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PromptChoice {
    Activate { activate: bool },

    Food { food: FoodMap },

    Dice(DiceChoice),

    Eggs { placements: Vec<EggPlacement> },

    Cards(CardsChoice),

    Bird { instance: Option<BirdInstanceId> },

    Habitat { habitat: Habitat },

    BonusCards { cards: Vec<BonusCardId> },

    PlayBird(PlayBirdChoice),
}

impl PromptChoice {
    /// Shared discriminant tag, matched against
    /// [PromptKind::tag].
    ///
    /// [PromptKind::tag]: crate::prompts::prompt::PromptKind::tag
    pub fn tag(&self) -> &'static str {
        match self {
            PromptChoice::Activate { .. } => "activate",
            PromptChoice::Food { .. } => "select_food",
            PromptChoice::Dice(_) => "select_dice",
            PromptChoice::Eggs { .. } => "eggs",
            PromptChoice::Cards(_) => "select_cards",
            PromptChoice::Bird { .. } => "select_bird",
            PromptChoice::Habitat { .. } => "select_habitat",
            PromptChoice::BonusCards { .. } => "select_bonus_cards",
            PromptChoice::PlayBird(_) => "play_bird",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiceChoice {
    /// Request a reroll instead of picking. Valid only when the prompt
    /// offered it.
    pub reroll: bool,

    pub selections: Vec<DieSelection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardsChoice {
    /// Identified cards chosen from the prompt's options.
    pub cards: Vec<BirdCardId>,

    /// Number of blind deck draws taken.
    pub from_deck: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayBirdChoice {
    pub card: BirdCardId,
    pub habitat: Habitat,

    /// Food tokens paid from the player's supply.
    pub food: FoodMap,

    /// Eggs discarded from birds to pay the column cost.
    pub egg_payment: Vec<EggPlacement>,
}
