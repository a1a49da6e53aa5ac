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

use crate::core::primitives::{GoalId, Habitat, NestType};

/// A round goal tile. Goals are informational: they are shown in views and
/// evaluated into the event stream at round end, but contribute no points to
/// final scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundGoal {
    pub id: GoalId,
    pub name: String,
    pub metric: GoalMetric,
}

/// The quantity a round goal measures per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalMetric {
    BirdsInHabitat(Habitat),
    EggsInHabitat(Habitat),
    EggsOnNest(NestType),
    TotalBirds,
}
