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

use crate::card_definitions::power_definition::PowerParams;
use crate::core::primitives::{BirdInstanceId, PlayerId};

/// A handler invocation queued for end-of-turn execution.
///
/// Stored as data rather than as a closure: the handler re-reads live state
/// through its context when it eventually runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Continuation {
    /// The player whose turn spawned this continuation.
    pub player: PlayerId,

    /// The bird whose power spawned this continuation, if any.
    pub instance: Option<BirdInstanceId>,

    /// Handler identifier resolved against the handler registry.
    pub handler: String,

    pub params: PowerParams,
}
