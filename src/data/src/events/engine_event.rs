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

use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    BirdInstanceId, GoalId, Habitat, PlayerId, RoundNumber, TurnNumber,
};
use crate::effects::effect::FoodSource;
use crate::player_states::score_sheet::ScoreSheet;

/// Event kinds that once-between-turns powers can declare as triggers.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    FoodGained,
    EggsLaid,
    PredatorResolved,
    BirdPlayed,
}

/// Semantic notifications emitted during a match.
///
/// Events drive reactive power resolution and are forwarded to observers;
/// they never mutate state themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    GameStarted {
        players: Vec<PlayerId>,
    },
    RoundStarted {
        round: RoundNumber,
    },
    RoundEnded {
        round: RoundNumber,
        goal: GoalId,
        /// Per-player value of the round's goal metric, in seat order.
        standings: Vec<(PlayerId, u32)>,
    },
    TurnStarted {
        player: PlayerId,
        turn: TurnNumber,
    },
    TurnEnded {
        player: PlayerId,
        turn: TurnNumber,
    },

    /// A turn action activated a habitat row; the orchestrator responds by
    /// running the row's brown powers right to left.
    HabitatActivated {
        player: PlayerId,
        habitat: Habitat,
    },

    /// Food was gained through a habitat activation. Pink trigger.
    FoodGained {
        player: PlayerId,
        total: u32,
        source: FoodSource,
    },

    /// Eggs were laid through a habitat activation. Pink trigger.
    EggsLaid {
        player: PlayerId,
        count: u32,
    },

    /// A predator power finished hunting. Pink trigger.
    PredatorResolved {
        player: PlayerId,
        instance: BirdInstanceId,
        succeeded: bool,
    },

    /// A bird was played onto a board. Pink trigger.
    BirdPlayed {
        player: PlayerId,
        instance: BirdInstanceId,
        habitat: Habitat,
    },

    PlayerForfeited {
        player: PlayerId,
        remaining: u32,
        /// Last validation or agent error, for diagnostics.
        reason: String,
    },
    GameEnded {
        winner: PlayerId,
        scores: Vec<ScoreSheet>,
    },
}

impl EngineEvent {
    /// The pink-power trigger kind of this event, if it has one.
    pub fn trigger(&self) -> Option<TriggerEvent> {
        match self {
            EngineEvent::FoodGained { .. } => Some(TriggerEvent::FoodGained),
            EngineEvent::EggsLaid { .. } => Some(TriggerEvent::EggsLaid),
            EngineEvent::PredatorResolved { .. } => Some(TriggerEvent::PredatorResolved),
            EngineEvent::BirdPlayed { .. } => Some(TriggerEvent::BirdPlayed),
            _ => None,
        }
    }
}
