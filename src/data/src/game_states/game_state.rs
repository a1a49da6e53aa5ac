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

use std::collections::VecDeque;

use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    BirdCardId, BirdInstanceId, GoalId, MatchId, PlayerId, RoundNumber, TurnNumber,
};
use crate::effects::effect::Effect;
use crate::game_states::birdfeeder::Birdfeeder;
use crate::game_states::card_piles::{BirdSupply, BonusSupply};
use crate::game_states::continuation::Continuation;
use crate::player_states::player_state::PlayerState;

/// Per-round turn budgets, indexed by round number minus one.
pub const ROUND_TURNS: [u32; 4] = [8, 7, 6, 5];

/// The authoritative state of one match. The only component whose fields are
/// mutated, and mutated exclusively through the effect applier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Unique ID for this match
    pub id: MatchId,

    /// Whether the match is in setup, ongoing, or finished.
    pub status: GameStatus,

    /// Current round, 1 through 4. Zero before the first round starts.
    pub round: RoundNumber,

    /// Monotonic turn counter across the whole match.
    pub turn_number: TurnNumber,

    /// Seat of the player currently taking a turn.
    pub active_player: PlayerId,

    /// Players in seat order. Seat order is turn order.
    pub players: Vec<PlayerState>,

    pub birdfeeder: Birdfeeder,

    pub bird_supply: BirdSupply,

    pub bonus_supply: BonusSupply,

    /// The four round goals drawn at setup, in round order.
    pub goals: Vec<GoalId>,

    /// Transient holding area for cards revealed from the deck mid-handler.
    /// Drained to the discard pile when the running handler completes.
    pub revealed: Vec<BirdCardId>,

    /// Continuations queued for execution at the end of the current turn,
    /// drained in FIFO order.
    pub deferred: VecDeque<Continuation>,

    /// Random number generator to use for this match. All in-match
    /// randomness flows through this stream.
    pub rng: Xoshiro256StarStar,

    /// Every applied effect with its populated result fields, in application
    /// order. Together with the seed and the ordered agent choices this is a
    /// perfect replay transcript.
    pub effect_log: Vec<Effect>,

    /// Allocator for bird instance ids.
    pub next_instance: u32,

    pub configuration: GameConfiguration,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.seat()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.seat()]
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Players still participating (not forfeited), in seat order.
    pub fn active_players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().filter(|player| !player.forfeited)
    }

    /// The owner of the given bird instance, if it is on any board.
    pub fn owner_of(&self, instance: BirdInstanceId) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|player| player.bird(instance).is_some())
            .map(|player| player.id)
    }

    pub fn allocate_instance_id(&mut self) -> BirdInstanceId {
        let id = BirdInstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Opponent seats in clockwise order starting left of the given player.
    pub fn opponents_clockwise_of(&self, player: PlayerId) -> Vec<PlayerId> {
        let count = self.players.len();
        (1..count)
            .map(|offset| PlayerId(((player.seat() + offset) % count) as u8))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }
}

/// Status of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Decks are being built and starting hands selected.
    Setup,

    /// The match is ongoing.
    Playing,

    /// The match has ended and the given player has won.
    GameOver { winner: PlayerId },
}

/// Immutable per-match options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfiguration {
    /// Seed for the match PRNG. Identical seed, dataset and agent choices
    /// reproduce the effect log bit for bit.
    pub seed: u64,

    pub player_count: u8,
}
