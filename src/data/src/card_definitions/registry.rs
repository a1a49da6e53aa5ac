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

use std::collections::HashMap;

use utils::outcome::Value;
use utils::{fail, verify};

use crate::card_definitions::bird_card::BirdCard;
use crate::card_definitions::bonus_card::BonusCard;
use crate::card_definitions::round_goal::RoundGoal;
use crate::core::primitives::{BirdCardId, BonusCardId, GoalId};

/// Immutable registry of all card definitions for one dataset.
///
/// Built once at startup and shared by reference across matches. Lookup by id
/// plus deterministic iteration in id order for deck construction.
#[derive(Debug)]
pub struct CardRegistry {
    birds: Vec<BirdCard>,
    bird_index: HashMap<BirdCardId, usize>,
    bonus_cards: Vec<BonusCard>,
    bonus_index: HashMap<BonusCardId, usize>,
    goals: Vec<RoundGoal>,
}

impl CardRegistry {
    pub fn new(
        mut birds: Vec<BirdCard>,
        mut bonus_cards: Vec<BonusCard>,
        goals: Vec<RoundGoal>,
    ) -> Value<Self> {
        birds.sort_by_key(|card| card.id);
        bonus_cards.sort_by_key(|card| card.id);

        let mut bird_index = HashMap::new();
        for (i, card) in birds.iter().enumerate() {
            verify!(!card.habitats.is_empty(), "Bird {:?} allows no habitats", card.name);
            if bird_index.insert(card.id, i).is_some() {
                fail!("Duplicate bird card id {:?}", card.id);
            }
        }

        let mut bonus_index = HashMap::new();
        for (i, card) in bonus_cards.iter().enumerate() {
            if bonus_index.insert(card.id, i).is_some() {
                fail!("Duplicate bonus card id {:?}", card.id);
            }
        }

        Ok(Self { birds, bird_index, bonus_cards, bonus_index, goals })
    }

    pub fn bird(&self, id: BirdCardId) -> Value<&BirdCard> {
        match self.bird_index.get(&id) {
            Some(&i) => Ok(&self.birds[i]),
            None => fail!("Unknown bird card id {:?}", id),
        }
    }

    pub fn get_bird(&self, id: BirdCardId) -> Option<&BirdCard> {
        self.bird_index.get(&id).map(|&i| &self.birds[i])
    }

    pub fn bonus(&self, id: BonusCardId) -> Value<&BonusCard> {
        match self.bonus_index.get(&id) {
            Some(&i) => Ok(&self.bonus_cards[i]),
            None => fail!("Unknown bonus card id {:?}", id),
        }
    }

    pub fn goal(&self, id: GoalId) -> Option<&RoundGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// All bird cards in id order. The full card universe of a match.
    pub fn birds(&self) -> &[BirdCard] {
        &self.birds
    }

    pub fn bonus_cards(&self) -> &[BonusCard] {
        &self.bonus_cards
    }

    pub fn goals(&self) -> &[RoundGoal] {
        &self.goals
    }

    /// Size of the bird card universe, used by the conservation invariant.
    pub fn bird_count(&self) -> usize {
        self.birds.len()
    }
}
