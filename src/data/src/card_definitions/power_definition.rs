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

use crate::core::primitives::{FoodType, Habitat, NestType};
use crate::events::engine_event::TriggerEvent;

/// When a bird's power fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerTrigger {
    /// White power: fires once when the bird is played.
    WhenPlayed,

    /// Brown power: fires when the bird's habitat is activated.
    WhenActivated,

    /// Pink power: fires on qualifying events during other players' turns.
    OnceBetweenTurns,
}

/// The power printed on a bird card: a trigger, the identifier of a
/// registered handler, and the handler's parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerDefinition {
    pub trigger: PowerTrigger,

    /// Identifier resolved against the handler registry.
    pub handler: String,

    #[serde(default)]
    pub params: PowerParams,

    /// For [PowerTrigger::OnceBetweenTurns] powers, the events this power
    /// reacts to. Empty for white and brown powers.
    #[serde(default)]
    pub triggers_on: EnumSet<TriggerEvent>,

    /// Rules text, cosmetic pass-through.
    #[serde(default)]
    pub text: String,
}

/// Parameter bag for power handlers. Handlers read the fields they need and
/// fall back to their documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerParams {
    #[serde(default)]
    pub count: Option<u32>,

    #[serde(default)]
    pub food: Option<FoodType>,

    #[serde(default)]
    pub habitat: Option<Habitat>,

    #[serde(default)]
    pub nest: Option<NestType>,

    /// Wingspan threshold in centimeters for predator hunts.
    #[serde(default)]
    pub max_wingspan: Option<u32>,
}

impl PowerParams {
    pub fn count_or(&self, default: u32) -> u32 {
        self.count.unwrap_or(default)
    }
}
