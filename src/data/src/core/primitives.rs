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

use std::fmt;

use enum_iterator::Sequence;
use enum_map::{Enum, EnumMap};
use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three rows of a player board, each holding up to
/// [HABITAT_COLUMNS] birds.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Enum, Sequence, Ord, PartialOrd)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "snake_case")]
pub enum Habitat {
    Forest,
    Grassland,
    Wetland,
}

/// Number of board slots in each habitat row.
pub const HABITAT_COLUMNS: usize = 5;

/// Food token types.
///
/// [FoodType::Wild] is a distinct counter used only by powers that grant "any"
/// food; it never appears on dice or in card costs as a payable token type.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Enum, Sequence, Ord, PartialOrd)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    Invertebrate,
    Seed,
    Fish,
    Fruit,
    Rodent,
    Wild,
}

impl FoodType {
    /// True for the five concrete token types, false for [FoodType::Wild].
    pub fn is_specific(self) -> bool {
        self != FoodType::Wild
    }

    /// The five concrete token types, in canonical order.
    pub fn specific() -> impl Iterator<Item = FoodType> {
        enum_iterator::all::<FoodType>().filter(|f| f.is_specific())
    }
}

/// Per-food-type counters. Used for player supplies, effect payloads and food
/// payments.
pub type FoodMap = EnumMap<FoodType, u32>;

/// Sums a food counter map.
pub fn food_total(food: &FoodMap) -> u32 {
    food.values().sum()
}

/// Nest types printed on bird cards. [NestType::Wild] is the star nest, which
/// matches any nest type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
#[serde(rename_all = "snake_case")]
pub enum NestType {
    Bowl,
    Cavity,
    Ground,
    Platform,
    Wild,
}

/// Faces of a birdfeeder die.
///
/// [DieFace::InvertebrateSeed] is the dual face; a selector taking it must
/// resolve which of the two food types it pays.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Enum, Sequence, Ord, PartialOrd)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "snake_case")]
pub enum DieFace {
    Invertebrate,
    Seed,
    Fish,
    Fruit,
    Rodent,
    InvertebrateSeed,
}

impl DieFace {
    pub fn is_dual(self) -> bool {
        self == DieFace::InvertebrateSeed
    }

    /// Food types this face can resolve to.
    pub fn food_options(self) -> EnumSet<FoodType> {
        match self {
            DieFace::Invertebrate => EnumSet::only(FoodType::Invertebrate),
            DieFace::Seed => EnumSet::only(FoodType::Seed),
            DieFace::Fish => EnumSet::only(FoodType::Fish),
            DieFace::Fruit => EnumSet::only(FoodType::Fruit),
            DieFace::Rodent => EnumSet::only(FoodType::Rodent),
            DieFace::InvertebrateSeed => FoodType::Invertebrate | FoodType::Seed,
        }
    }

    pub fn can_pay(self, food: FoodType) -> bool {
        self.food_options().contains(food)
    }
}

/// A die taken from the birdfeeder together with the food type it resolves
/// to. For single-food faces the resolution is implied; for the dual face it
/// records the selector's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieSelection {
    pub face: DieFace,
    pub resolved: FoodType,
}

impl DieSelection {
    /// Selection of a single-food face, resolving to that face's food.
    pub fn plain(face: DieFace) -> Option<Self> {
        let mut options = face.food_options().iter();
        let resolved = options.next()?;
        if options.next().is_some() {
            return None;
        }
        Some(Self { face, resolved })
    }
}

/// Identifies a seat within a match. Seats are assigned in turn order at
/// setup and never change.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub fn seat(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Identifies a struct that is 1:1 associated with a given [PlayerId].
pub trait HasPlayerId {
    fn player_id(&self) -> PlayerId;
}

impl HasPlayerId for PlayerId {
    fn player_id(&self) -> PlayerId {
        *self
    }
}

/// Identifies a bird card definition.
///
/// The base dataset contains exactly one physical copy of each card, so this
/// also identifies the physical card within the deck/tray/hand/discard flow.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BirdCardId(pub u32);

/// Identifies a bonus card definition.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BonusCardId(pub u32);

/// Identifies a round goal definition.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GoalId(pub u32);

/// Identifies a bird instance placed on some player's board.
///
/// Allocated from a per-match counter, so no instance id ever appears on more
/// than one board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BirdInstanceId(pub u32);

/// Unique identifier for a match
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

/// Monotonic turn counter, incremented once per player turn across the whole
/// match.
pub type TurnNumber = u32;

/// Round number, 1 through 4.
pub type RoundNumber = u8;
