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

use crate::core::primitives::{BirdCardId, BonusCardId};

/// Number of face-up tray slots.
pub const TRAY_SIZE: usize = 3;

/// The bird card supply: face-down deck, face-up tray, discard pile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirdSupply {
    /// Face-down deck; the last element is the top card.
    pub deck: Vec<BirdCardId>,

    /// Face-up tray, at most [TRAY_SIZE] cards.
    pub tray: Vec<BirdCardId>,

    pub discard: Vec<BirdCardId>,
}

impl BirdSupply {
    /// Removes and returns the top card of the deck.
    pub fn draw_top(&mut self) -> Option<BirdCardId> {
        self.deck.pop()
    }

    /// Removes the given card from the tray. Returns false if absent.
    pub fn take_from_tray(&mut self, card: BirdCardId) -> bool {
        match self.tray.iter().position(|&c| c == card) {
            Some(index) => {
                self.tray.remove(index);
                true
            }
            None => false,
        }
    }

    /// Fills empty tray slots from the top of the deck.
    pub fn refill_tray(&mut self) {
        while self.tray.len() < TRAY_SIZE {
            match self.deck.pop() {
                Some(card) => self.tray.push(card),
                None => break,
            }
        }
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }
}

/// The bonus card supply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusSupply {
    /// Face-down deck; the last element is the top card.
    pub deck: Vec<BonusCardId>,

    pub discard: Vec<BonusCardId>,
}

impl BonusSupply {
    pub fn draw_top(&mut self) -> Option<BonusCardId> {
        self.deck.pop()
    }
}
