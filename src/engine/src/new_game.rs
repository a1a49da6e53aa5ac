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
use std::time::Duration;

use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{FoodType, MatchId, PlayerId};
use data::game_states::birdfeeder::Birdfeeder;
use data::game_states::card_piles::{BirdSupply, BonusSupply};
use data::game_states::game_state::{GameConfiguration, GameState, GameStatus};
use data::player_states::player_state::PlayerState;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use utils::outcome::Value;
use utils::verify;
use uuid::Uuid;

/// Number of bird cards dealt to each player at setup.
pub const STARTING_BIRDS: usize = 5;

/// Number of bonus cards dealt to each player at setup.
pub const STARTING_BONUS_CARDS: usize = 2;

/// Options for one match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub seed: u64,

    /// Display names, one per seat. Seat order is turn order.
    pub player_names: Vec<String>,

    /// Per-prompt budget enforced by the agent wrapper.
    pub prompt_timeout: Duration,
}

impl MatchConfig {
    pub fn new(seed: u64, player_names: Vec<String>) -> Self {
        Self { seed, player_names, prompt_timeout: Duration::from_secs(30) }
    }

    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }
}

/// Builds the initial state for a match: shuffled decks, dealt hands,
/// starting food, drawn goals, filled tray. The birdfeeder starts empty and
/// is filled by the orchestrator's first logged effect, so the returned
/// state is the replay baseline.
pub fn create(config: &MatchConfig, registry: &CardRegistry) -> Value<GameState> {
    verify!(
        (2..=5).contains(&config.player_count()),
        "Player count {} is out of range 2-5",
        config.player_count()
    );

    let mut rng = Xoshiro256StarStar::seed_from_u64(config.seed);

    let mut deck: Vec<_> = registry.birds().iter().map(|card| card.id).collect();
    deck.shuffle(&mut rng);
    let mut bonus_deck: Vec<_> = registry.bonus_cards().iter().map(|card| card.id).collect();
    bonus_deck.shuffle(&mut rng);
    let mut goals: Vec<_> = registry.goals().iter().map(|goal| goal.id).collect();
    goals.shuffle(&mut rng);
    goals.truncate(4);
    verify!(goals.len() == 4, "Dataset holds fewer than four round goals");

    let mut bird_supply = BirdSupply { deck, tray: Vec::new(), discard: Vec::new() };
    let mut bonus_supply = BonusSupply { deck: bonus_deck, discard: Vec::new() };

    let mut players = Vec::new();
    for (seat, name) in config.player_names.iter().enumerate() {
        let mut player = PlayerState::new(PlayerId(seat as u8), name.clone());
        for _ in 0..STARTING_BIRDS {
            match bird_supply.draw_top() {
                Some(card) => player.hand.push(card),
                None => verify!(false, "Deck exhausted while dealing starting hands"),
            }
        }
        for _ in 0..STARTING_BONUS_CARDS {
            match bonus_supply.draw_top() {
                Some(card) => player.bonus_cards.push(card),
                None => verify!(false, "Bonus deck exhausted while dealing"),
            }
        }
        for food in FoodType::specific() {
            player.food[food] = 1;
        }
        players.push(player);
    }

    bird_supply.refill_tray();

    Ok(GameState {
        // Derived from the seed so that a rebuilt initial state is identical.
        id: MatchId(Uuid::from_u64_pair(config.seed, config.player_count() as u64)),
        status: GameStatus::Setup,
        round: 0,
        turn_number: 0,
        active_player: PlayerId(0),
        players,
        birdfeeder: Birdfeeder::default(),
        bird_supply,
        bonus_supply,
        goals,
        revealed: Vec::new(),
        deferred: VecDeque::new(),
        rng,
        effect_log: Vec::new(),
        next_instance: 0,
        configuration: GameConfiguration {
            seed: config.seed,
            player_count: config.player_count() as u8,
        },
    })
}
