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

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use crate::core::primitives::Habitat;

/// The four turn actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
#[serde(rename_all = "snake_case")]
pub enum TurnAction {
    PlayBird,
    GainFood,
    LayEggs,
    DrawCards,
}

impl TurnAction {
    /// The habitat row a resource action activates. None for play-bird.
    pub fn habitat(self) -> Option<Habitat> {
        match self {
            TurnAction::PlayBird => None,
            TurnAction::GainFood => Some(Habitat::Forest),
            TurnAction::LayEggs => Some(Habitat::Grassland),
            TurnAction::DrawCards => Some(Habitat::Wetland),
        }
    }
}

/// An agent's turn decision: which action to take and whether to use the
/// action's bonus conversion if its prerequisite is met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnActionChoice {
    pub action: TurnAction,
    pub take_bonus: bool,
}
