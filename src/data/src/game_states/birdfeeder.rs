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

use crate::core::primitives::DieFace;

/// Number of dice in the game.
pub const FEEDER_DICE: usize = 5;

/// The birdfeeder: an unordered multiset of up to five dice faces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Birdfeeder {
    dice: Vec<DieFace>,
}

impl Birdfeeder {
    pub fn dice(&self) -> &[DieFace] {
        &self.dice
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// True when every die in the feeder shows the same face. The dual face
    /// counts as its own face. False for an empty feeder.
    pub fn is_homogeneous(&self) -> bool {
        match self.dice.split_first() {
            Some((first, rest)) => rest.iter().all(|face| face == first),
            None => false,
        }
    }

    pub fn contains(&self, face: DieFace) -> bool {
        self.dice.contains(&face)
    }

    /// Removes one die showing the given face. Returns false if absent.
    pub fn remove(&mut self, face: DieFace) -> bool {
        match self.dice.iter().position(|&f| f == face) {
            Some(index) => {
                self.dice.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the feeder contents. Callers are responsible for keeping the
    /// count within [FEEDER_DICE].
    pub fn set_dice(&mut self, dice: Vec<DieFace>) {
        self.dice = dice;
    }
}
