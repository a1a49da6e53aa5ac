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

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::card_definitions::power_definition::PowerDefinition;
use crate::core::primitives::{BirdCardId, FoodMap, FoodType, Habitat, NestType};

/// Immutable definition of a bird card, shared by reference across matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirdCard {
    pub id: BirdCardId,
    pub name: String,

    /// Habitats this bird may be played into. Never empty.
    pub habitats: EnumSet<Habitat>,

    pub cost: FoodCost,

    /// Maximum number of eggs this bird can hold.
    pub egg_capacity: u32,

    /// Victory points scored for the bird itself.
    pub points: u32,

    /// Wingspan in centimeters. None for flightless birds, which predator
    /// powers treat as unbounded.
    pub wingspan_cm: Option<u32>,

    pub nest: NestType,

    /// Bonus-card affiliation tags, matched against [BonusCriterion::Tag].
    ///
    /// [BonusCriterion::Tag]: crate::card_definitions::bonus_card::BonusCriterion::Tag
    #[serde(default)]
    pub bonus_tags: Vec<String>,

    #[serde(default)]
    pub power: Option<PowerDefinition>,
}

/// A per-type food requirement entry within a [FoodCost].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCount {
    pub food: FoodType,
    pub count: u32,
}

/// Food cost of a bird card: either every listed count must be paid, or
/// exactly one of the listed alternatives.
///
/// A [FoodType::Wild] entry is satisfied by any concrete token.
///
/// [FoodType::Wild]: crate::core::primitives::FoodType::Wild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCost {
    All(Vec<FoodCount>),
    Any(Vec<FoodCount>),
}

impl FoodCost {
    /// Cost of a bird with no food requirement.
    pub fn free() -> Self {
        FoodCost::All(vec![])
    }

    /// Total number of tokens this cost requires. For [FoodCost::Any] this is
    /// the size of the cheapest alternative.
    pub fn total(&self) -> u32 {
        match self {
            FoodCost::All(counts) => counts.iter().map(|e| e.count).sum(),
            FoodCost::Any(counts) => counts.iter().map(|e| e.count).min().unwrap_or(0),
        }
    }

    /// Checks whether the given payment satisfies this cost exactly, with no
    /// excess tokens.
    ///
    /// A cost entry of [FoodType::Wild] accepts any token; a paid wild token
    /// stands in for any cost entry.
    ///
    /// [FoodType::Wild]: crate::core::primitives::FoodType::Wild
    pub fn is_satisfied_by(&self, payment: &FoodMap) -> bool {
        let paid: u32 = payment.values().sum();
        match self {
            FoodCost::All(counts) => {
                let mut required = FoodMap::default();
                for entry in counts {
                    required[entry.food] += entry.count;
                }
                let total_required: u32 = required.values().sum();
                if paid != total_required {
                    return false;
                }
                // Match specific tokens to their own slots; leftover specific
                // tokens must fit in wild slots, leftover specific slots must
                // be covered by wild tokens.
                let mut specific_excess = 0;
                let mut specific_deficit = 0;
                for food in FoodType::specific() {
                    let matched = payment[food].min(required[food]);
                    specific_excess += payment[food] - matched;
                    specific_deficit += required[food] - matched;
                }
                specific_excess <= required[FoodType::Wild]
                    && specific_deficit <= payment[FoodType::Wild]
            }
            FoodCost::Any(counts) => {
                if counts.is_empty() {
                    return paid == 0;
                }
                counts.iter().any(|entry| {
                    if paid != entry.count {
                        return false;
                    }
                    if entry.food.is_specific() {
                        payment[entry.food] + payment[FoodType::Wild] == entry.count
                    } else {
                        true
                    }
                })
            }
        }
    }
}
