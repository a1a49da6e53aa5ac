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

use crate::core::primitives::BonusCardId;

/// Immutable definition of a bonus card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCard {
    pub id: BonusCardId,
    pub name: String,
    pub criterion: BonusCriterion,
    pub scoring: BonusScoring,
}

/// How qualifying birds (or another quantity) are counted for a bonus card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCriterion {
    /// Birds on the board whose definition carries the given affiliation tag.
    Tag(String),

    /// Birds on the board holding at least this many eggs.
    BirdsWithEggsAtLeast(u32),

    /// Cards remaining in hand at game end.
    CardsInHand,

    /// Birds in the habitat row holding the fewest birds.
    BirdsInSmallestHabitat,
}

/// Scoring mode of a bonus card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusScoring {
    /// A flat number of points per qualifying bird.
    PerBird { points: u32 },

    /// The unique tier whose `[min, max]` bracket contains the qualifying
    /// count determines the score. Counts matching no tier score zero.
    Tiered { tiers: Vec<BonusTier> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTier {
    pub min: u32,

    /// Inclusive upper bound; None means unbounded.
    #[serde(default)]
    pub max: Option<u32>,

    pub points: u32,
}

impl BonusScoring {
    /// Points awarded for the given qualifying count.
    pub fn score(&self, count: u32) -> u32 {
        match self {
            BonusScoring::PerBird { points } => points * count,
            BonusScoring::Tiered { tiers } => tiers
                .iter()
                .find(|tier| count >= tier.min && tier.max.map_or(true, |max| count <= max))
                .map(|tier| tier.points)
                .unwrap_or(0),
        }
    }
}
