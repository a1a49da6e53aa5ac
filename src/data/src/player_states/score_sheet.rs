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

use crate::core::primitives::PlayerId;

/// Final score breakdown for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub player: PlayerId,
    pub bird_points: u32,
    pub egg_points: u32,
    pub cached_food_points: u32,
    pub tucked_points: u32,
    pub bonus_points: u32,

    /// Forfeited players are scored but cannot win.
    pub forfeited: bool,
}

impl ScoreSheet {
    pub fn total(&self) -> u32 {
        self.bird_points
            + self.egg_points
            + self.cached_food_points
            + self.tucked_points
            + self.bonus_points
    }
}
