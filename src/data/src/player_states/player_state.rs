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

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    BirdCardId, BirdInstanceId, BonusCardId, FoodMap, Habitat, PlayerId, HABITAT_COLUMNS,
};

/// A bird placed on a board.
///
/// Owned by value by its board slot; everything else refers to it through its
/// [BirdInstanceId].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdInstance {
    pub id: BirdInstanceId,
    pub card: BirdCardId,

    /// Eggs currently on this bird. Never exceeds the card's egg capacity.
    pub eggs: u32,

    /// Food tokens cached on this bird. Scored at 1 VP each, never spendable.
    pub cached_food: FoodMap,

    /// Cards tucked under this bird, each worth 1 VP.
    pub tucked: Vec<BirdCardId>,
}

impl BirdInstance {
    pub fn new(id: BirdInstanceId, card: BirdCardId) -> Self {
        Self { id, card, eggs: 0, cached_food: FoodMap::default(), tucked: Vec::new() }
    }

    pub fn cached_total(&self) -> u32 {
        self.cached_food.values().sum()
    }
}

/// One habitat row: five ordered slots filled left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitatRow {
    slots: Vec<Option<BirdInstance>>,
}

impl Default for HabitatRow {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitatRow {
    pub fn new() -> Self {
        Self { slots: vec![None; HABITAT_COLUMNS] }
    }

    pub fn slots(&self) -> &[Option<BirdInstance>] {
        &self.slots
    }

    /// Index of the leftmost empty slot, if the row is not full.
    pub fn leftmost_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn bird_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.bird_count() == HABITAT_COLUMNS
    }

    /// Birds in this row, leftmost first.
    pub fn birds(&self) -> impl DoubleEndedIterator<Item = &BirdInstance> {
        self.slots.iter().flatten()
    }

    pub fn birds_mut(&mut self) -> impl Iterator<Item = &mut BirdInstance> {
        self.slots.iter_mut().flatten()
    }

    /// Places a bird into the leftmost empty slot, returning its column.
    /// Returns None when the row is full.
    pub fn place(&mut self, bird: BirdInstance) -> Option<usize> {
        let column = self.leftmost_empty()?;
        self.slots[column] = Some(bird);
        Some(column)
    }

    /// Removes the bird with the given id, shifting later birds left so the
    /// occupied prefix stays contiguous.
    pub fn remove(&mut self, id: BirdInstanceId) -> Option<BirdInstance> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().map_or(false, |bird| bird.id == id))?;
        let bird = self.slots.remove(index);
        self.slots.push(None);
        bird
    }
}

/// A player's three-row board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    rows: EnumMap<Habitat, HabitatRow>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self { rows: EnumMap::from_fn(|_| HabitatRow::new()) }
    }

    pub fn row(&self, habitat: Habitat) -> &HabitatRow {
        &self.rows[habitat]
    }

    pub fn row_mut(&mut self, habitat: Habitat) -> &mut HabitatRow {
        &mut self.rows[habitat]
    }

    /// All birds on the board, forest → grassland → wetland, left to right
    /// within each row.
    pub fn birds(&self) -> impl Iterator<Item = &BirdInstance> {
        enum_iterator::all::<Habitat>().flat_map(move |habitat| self.rows[habitat].birds())
    }

    pub fn birds_mut(&mut self) -> impl Iterator<Item = &mut BirdInstance> {
        self.rows.values_mut().flat_map(HabitatRow::birds_mut)
    }

    pub fn bird(&self, id: BirdInstanceId) -> Option<&BirdInstance> {
        self.birds().find(|bird| bird.id == id)
    }

    pub fn bird_mut(&mut self, id: BirdInstanceId) -> Option<&mut BirdInstance> {
        self.birds_mut().find(|bird| bird.id == id)
    }

    /// The habitat row holding the bird with the given id.
    pub fn habitat_of(&self, id: BirdInstanceId) -> Option<Habitat> {
        enum_iterator::all::<Habitat>()
            .find(|&habitat| self.rows[habitat].birds().any(|bird| bird.id == id))
    }

    pub fn total_birds(&self) -> usize {
        self.rows.values().map(HabitatRow::bird_count).sum()
    }
}

/// Mutable per-player state. Constructed at setup, mutated only through the
/// effect applier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub board: Board,
    pub hand: Vec<BirdCardId>,
    pub bonus_cards: Vec<BonusCardId>,

    /// Spendable food supply, including the wild bucket.
    pub food: FoodMap,

    /// Turns left in the current round.
    pub turns_remaining: u32,

    /// Set when the player's agent exhausts the retry budget. Forfeited
    /// players are skipped in turn order and cannot win.
    pub forfeited: bool,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            board: Board::new(),
            hand: Vec::new(),
            bonus_cards: Vec::new(),
            food: EnumMap::default(),
            turns_remaining: 0,
            forfeited: false,
        }
    }

    pub fn bird(&self, id: BirdInstanceId) -> Option<&BirdInstance> {
        self.board.bird(id)
    }

    pub fn bird_mut(&mut self, id: BirdInstanceId) -> Option<&mut BirdInstance> {
        self.board.bird_mut(id)
    }

    pub fn total_food(&self) -> u32 {
        self.food.values().sum()
    }

    pub fn total_eggs(&self) -> u32 {
        self.board.birds().map(|bird| bird.eggs).sum()
    }
}
