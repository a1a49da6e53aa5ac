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

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    BirdCardId, BirdInstanceId, BonusCardId, DieFace, FoodMap, GoalId, Habitat, PlayerId,
    RoundNumber, TurnNumber,
};

/// A read-only snapshot of the match from one player's perspective.
///
/// Views are the only channel through which agents observe state: opponents'
/// hands and the deck order are absent by construction, never merely hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub round: RoundNumber,
    pub turn_number: TurnNumber,
    pub active_player: PlayerId,

    /// The viewer's turns left in the current round.
    pub turns_remaining: u32,

    pub hand: Vec<BirdCardId>,
    pub bonus_cards: Vec<BonusCardId>,
    pub food: FoodMap,

    /// The viewer's own board, including tucked-card identities.
    pub board: BoardView,

    /// Opponents in clockwise order starting left of the viewer.
    pub opponents: Vec<OpponentView>,

    /// The face-up tray.
    pub tray: Vec<BirdCardId>,

    /// Cards currently in the revealed holding area. Public while they last.
    pub revealed: Vec<BirdCardId>,

    /// The birdfeeder's dice multiset.
    pub birdfeeder: Vec<DieFace>,

    /// Size of the bird deck. Its order is never exposed.
    pub deck_size: u32,

    /// The four round goals in round order.
    pub goals: Vec<GoalId>,
}

/// Public information about an opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentView {
    pub player: PlayerId,
    pub name: String,
    pub board: BoardView,
    pub hand_size: u32,
    pub bonus_card_count: u32,
    pub food: FoodMap,
    pub turns_remaining: u32,
    pub forfeited: bool,
}

/// One board as seen by some viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: EnumMap<Habitat, Vec<BirdSlotView>>,
}

impl BoardView {
    pub fn bird(&self, instance: BirdInstanceId) -> Option<&BirdSlotView> {
        self.rows.values().flatten().find(|slot| slot.instance == instance)
    }
}

/// One occupied board slot as seen by some viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdSlotView {
    pub instance: BirdInstanceId,
    pub card: BirdCardId,
    pub eggs: u32,

    /// Count of cached food tokens. Identities of cached tokens are public
    /// but only the total is scored, so only the total is shown.
    pub cached_food: u32,

    /// Count of tucked cards.
    pub tucked: u32,

    /// Tucked-card identities, populated only on the viewer's own board.
    pub tucked_cards: Vec<BirdCardId>,
}
