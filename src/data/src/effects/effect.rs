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

use crate::core::primitives::{
    BirdCardId, BirdInstanceId, BonusCardId, DieFace, DieSelection, FoodMap, Habitat, PlayerId,
};

/// Where gained food comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSource {
    Supply,
    Birdfeeder,
}

/// Why an optional power did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    ResourceUnavailable,
    AgentDeclined,
    ConditionNotMet,
}

/// An egg count addressed to a specific bird instance. Used both for laying
/// and for discarding eggs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggPlacement {
    pub instance: BirdInstanceId,
    pub count: u32,
}

/// A typed mutation record, the sole pathway by which game state changes.
///
/// Input fields describe the requested change; fields documented as results
/// are populated by the effect applier so that handlers can observe the
/// outcome of randomized effects. Applied effects are appended, fully
/// populated, to the state's effect log: the log plus the seed plus the
/// ordered agent choices form a perfect replay transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Records the decision to run or skip a power. Purely informational.
    ActivatePower {
        player: PlayerId,
        instance: Option<BirdInstanceId>,
        handler: String,
        activated: bool,
        skip: Option<SkipReason>,
    },

    /// Gains food into the player's supply. When the source is the
    /// birdfeeder, `dice` names the dice removed and their resolved food
    /// types, which must agree with `food`.
    GainFood {
        player: PlayerId,
        food: FoodMap,
        source: FoodSource,
        dice: Vec<DieSelection>,
    },

    LayEggs {
        player: PlayerId,
        placements: Vec<EggPlacement>,
    },

    /// Draws cards into the player's hand: named tray cards, blind deck
    /// draws, and named cards from the revealed holding area. `drawn` is the
    /// result sequence (tray, then deck, then revealed). The tray is refilled
    /// to capacity at completion.
    DrawCards {
        player: PlayerId,
        from_deck: u32,
        from_tray: Vec<BirdCardId>,
        from_revealed: Vec<BirdCardId>,
        drawn: Vec<BirdCardId>,
    },

    DiscardFood {
        player: PlayerId,
        food: FoodMap,
    },

    DiscardEggs {
        player: PlayerId,
        removals: Vec<EggPlacement>,
    },

    /// Discards cards from the hand, or from the revealed holding area when
    /// `from_revealed` is set (which bypasses the hand check).
    DiscardCards {
        player: PlayerId,
        cards: Vec<BirdCardId>,
        from_revealed: bool,
    },

    /// Tucks cards under the target bird. `tucked_from_deck` is the result of
    /// the blind deck portion.
    TuckCards {
        player: PlayerId,
        target: BirdInstanceId,
        from_hand: Vec<BirdCardId>,
        from_deck: u32,
        from_revealed: Vec<BirdCardId>,
        tucked_from_deck: Vec<BirdCardId>,
    },

    /// Caches food onto a bird. Mirrors [Effect::GainFood]'s birdfeeder
    /// handling; cached food is scored but can never be spent.
    CacheFood {
        player: PlayerId,
        instance: BirdInstanceId,
        food: FoodMap,
        source: FoodSource,
        dice: Vec<DieSelection>,
    },

    /// Places a bird from hand into the leftmost empty slot of the habitat,
    /// paying the declared food and egg costs. `instance` and `column` are
    /// results.
    PlayBird {
        player: PlayerId,
        card: BirdCardId,
        habitat: Habitat,
        food_paid: FoodMap,
        egg_payment: Vec<EggPlacement>,
        instance: Option<BirdInstanceId>,
        column: Option<usize>,
    },

    /// Rerolls the dice currently in the feeder. `dice` is the result.
    RerollBirdfeeder {
        dice: Vec<DieFace>,
    },

    /// Rolls all five dice back into the feeder. `dice` is the result.
    RefillBirdfeeder {
        dice: Vec<DieFace>,
    },

    /// Rolls the dice currently outside the feeder. `rolled` is the result;
    /// the feeder itself is unchanged.
    RollDice {
        player: PlayerId,
        rolled: Vec<DieFace>,
    },

    /// Moves cards from the top of the deck into the revealed holding area.
    /// `revealed` is the result.
    RevealCards {
        player: PlayerId,
        count: u32,
        revealed: Vec<BirdCardId>,
    },

    /// Draws bonus cards from the bonus deck for inspection. `revealed` is
    /// the result; retention is applied by [Effect::DrawBonusCards].
    RevealBonusCards {
        player: PlayerId,
        count: u32,
        revealed: Vec<BonusCardId>,
    },

    /// Applies the retention choice after a bonus-card reveal.
    DrawBonusCards {
        player: PlayerId,
        kept: Vec<BonusCardId>,
        discarded: Vec<BonusCardId>,
    },

    /// Moves a bird to the leftmost empty slot of another habitat. `column`
    /// is the result.
    MoveBird {
        player: PlayerId,
        instance: BirdInstanceId,
        from: Habitat,
        to: Habitat,
        column: Option<usize>,
    },

    AllPlayersGainFood {
        gains: Vec<(PlayerId, FoodMap)>,
    },

    /// Every listed player draws blind from the deck; the tray is refilled
    /// once at the end. `drawn` is the result.
    AllPlayersDrawCards {
        draws: Vec<(PlayerId, u32)>,
        drawn: Vec<(PlayerId, Vec<BirdCardId>)>,
    },

    AllPlayersLayEggs {
        placements: Vec<(PlayerId, Vec<EggPlacement>)>,
    },

    /// Records that the target bird's when-activated power is re-run. The
    /// action processor performs the actual re-invocation.
    RepeatBrownPower {
        player: PlayerId,
        target: BirdInstanceId,
    },
}

impl Effect {
    /// The player this effect belongs to, where one exists.
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Effect::ActivatePower { player, .. }
            | Effect::GainFood { player, .. }
            | Effect::LayEggs { player, .. }
            | Effect::DrawCards { player, .. }
            | Effect::DiscardFood { player, .. }
            | Effect::DiscardEggs { player, .. }
            | Effect::DiscardCards { player, .. }
            | Effect::TuckCards { player, .. }
            | Effect::CacheFood { player, .. }
            | Effect::PlayBird { player, .. }
            | Effect::RollDice { player, .. }
            | Effect::RevealCards { player, .. }
            | Effect::RevealBonusCards { player, .. }
            | Effect::DrawBonusCards { player, .. }
            | Effect::MoveBird { player, .. }
            | Effect::RepeatBrownPower { player, .. } => Some(*player),
            Effect::RerollBirdfeeder { .. }
            | Effect::RefillBirdfeeder { .. }
            | Effect::AllPlayersGainFood { .. }
            | Effect::AllPlayersDrawCards { .. }
            | Effect::AllPlayersLayEggs { .. } => None,
        }
    }
}
