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

use std::str::FromStr;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use data::agents::agent::Agent;
use data::card_definitions::registry::CardRegistry;

use crate::random_agent::RandomAgent;

/// Registered agent implementations, selectable by name from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentName {
    Random,
}

impl FromStr for AgentName {
    type Err = color_eyre::Report;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "random" => Ok(AgentName::Random),
            other => Err(eyre!("Unknown agent name {other:?}")),
        }
    }
}

impl AgentName {
    /// Instantiates the named agent with its own seeded rng.
    pub fn create(self, seed: u64, registry: &'static CardRegistry) -> Box<dyn Agent> {
        match self {
            AgentName::Random => Box::new(RandomAgent::new(seed, registry)),
        }
    }
}
