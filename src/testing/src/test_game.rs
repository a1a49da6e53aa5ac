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

use async_trait::async_trait;
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{BirdCardId, BirdInstanceId, DieFace, Habitat, PlayerId};
use data::effects::effect::Effect;
use data::events::engine_event::EngineEvent;
use data::game_states::game_state::{GameState, GameStatus};
use data::player_states::player_state::BirdInstance;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::Prompt;
use engine::new_game::{self, MatchConfig};
use rules::powers::context::Prompter;
use utils::fail;
use utils::outcome::Value;

/// Dynamic response function for a [TestPrompter].
pub type Responder = Box<dyn FnMut(&GameState, &Prompt) -> PromptChoice + Send>;

/// A small arena for arranging mid-game situations directly.
///
/// Card movements preserve the conservation invariant: cards placed on
/// boards or into hands are removed from wherever they currently live.
pub struct TestGame {
    pub game: GameState,
    pub registry: &'static CardRegistry,
}

impl TestGame {
    pub fn new(seed: u64, players: usize) -> Self {
        let registry = dataset::card_json::registry().expect("Base dataset loads");
        let config = Self::config(seed, players);
        let mut game = new_game::create(&config, registry).expect("Initial state builds");
        game.status = GameStatus::Playing;
        game.round = 1;
        Self { game, registry }
    }

    pub fn config(seed: u64, players: usize) -> MatchConfig {
        MatchConfig::new(seed, (0..players).map(|seat| format!("P{}", seat + 1)).collect())
    }

    /// Places a card straight onto a player's board, returning the new
    /// instance id.
    pub fn place_bird(
        &mut self,
        player: PlayerId,
        habitat: Habitat,
        card: BirdCardId,
    ) -> BirdInstanceId {
        self.remove_card(card);
        let instance = self.game.allocate_instance_id();
        self.game
            .player_mut(player)
            .board
            .row_mut(habitat)
            .place(BirdInstance::new(instance, card))
            .expect("Habitat row has space");
        instance
    }

    /// Moves a card into a player's hand.
    pub fn give_card(&mut self, player: PlayerId, card: BirdCardId) {
        self.remove_card(card);
        self.game.player_mut(player).hand.push(card);
    }

    /// Moves a player's whole hand to the discard pile.
    pub fn discard_hand(&mut self, player: PlayerId) {
        let hand = std::mem::take(&mut self.game.player_mut(player).hand);
        self.game.bird_supply.discard.extend(hand);
    }

    pub fn set_feeder(&mut self, dice: Vec<DieFace>) {
        self.game.birdfeeder.set_dice(dice);
    }

    fn remove_card(&mut self, card: BirdCardId) {
        self.game.bird_supply.deck.retain(|&c| c != card);
        self.game.bird_supply.tray.retain(|&c| c != card);
        self.game.bird_supply.discard.retain(|&c| c != card);
        self.game.revealed.retain(|&c| c != card);
        for player in &mut self.game.players {
            player.hand.retain(|&c| c != card);
        }
    }
}

/// A [Prompter] for driving handlers directly in tests: answers prompts
/// from a fixed queue or a dynamic responder, and records everything it
/// sees.
#[derive(Default)]
pub struct TestPrompter {
    responses: VecDeque<PromptChoice>,
    responder: Option<Responder>,
    pub prompts: Vec<Prompt>,
    pub effects: Vec<Effect>,
    pub events: Vec<EngineEvent>,
}

impl TestPrompter {
    pub fn with_responses(responses: Vec<PromptChoice>) -> Self {
        Self { responses: responses.into(), ..Self::default() }
    }

    pub fn with_responder(
        responder: impl FnMut(&GameState, &Prompt) -> PromptChoice + Send + 'static,
    ) -> Self {
        Self { responder: Some(Box::new(responder)), ..Self::default() }
    }
}

#[async_trait]
impl Prompter for TestPrompter {
    async fn choose(&mut self, game: &GameState, prompt: Prompt) -> Value<PromptChoice> {
        self.prompts.push(prompt.clone());
        if let Some(choice) = self.responses.pop_front() {
            return Ok(choice);
        }
        if let Some(responder) = &mut self.responder {
            return Ok(responder(game, &prompt));
        }
        fail!("No scripted response for {prompt:?}");
    }

    fn on_effect_applied(&mut self, effect: &Effect) {
        self.effects.push(effect.clone());
    }

    fn on_event(&mut self, event: &EngineEvent) {
        self.events.push(event.clone());
    }
}
