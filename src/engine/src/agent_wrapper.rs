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

use std::time::Duration;

use async_trait::async_trait;
use data::actions::turn_action::TurnActionChoice;
use data::agents::agent::Agent;
use data::agents::observer::Observer;
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::PlayerId;
use data::effects::effect::Effect;
use data::events::engine_event::EngineEvent;
use data::game_states::game_state::GameState;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::Prompt;
use data::prompts::starting_hand::{StartingHandChoice, StartingHandPrompt};
use rules::legality::validators;
use rules::powers::context::Prompter;
use rules::queries::views;
use tracing::{debug, warn};
use utils::outcome::{StopCondition, Value};

/// Attempts before a seat is forfeited.
pub const MAX_ATTEMPTS: u32 = 3;

/// Wraps the per-seat agents and the registered observers behind the
/// three-strike policy: every agent call is validated, failures are
/// re-prompted with an error hint, and the third consecutive failure
/// surfaces as a [StopCondition::Forfeit].
///
/// Timeouts, thrown agent errors and invalid choices are equivalent failure
/// modes.
pub struct AgentWrapper<'a> {
    registry: &'a CardRegistry,
    agents: Vec<Box<dyn Agent>>,
    observers: Vec<Box<dyn Observer>>,
    timeout: Duration,

    /// Every event seen so far, in emission order.
    events: Vec<EngineEvent>,
}

impl<'a> AgentWrapper<'a> {
    pub fn new(
        registry: &'a CardRegistry,
        agents: Vec<Box<dyn Agent>>,
        observers: Vec<Box<dyn Observer>>,
        timeout: Duration,
    ) -> Self {
        Self { registry, agents, observers, timeout, events: Vec::new() }
    }

    /// Forwards an engine event to every agent and observer and records it.
    pub fn notify_event(&mut self, event: &EngineEvent) {
        for agent in &mut self.agents {
            agent.on_event(event);
        }
        for observer in &mut self.observers {
            observer.on_event(event);
        }
        self.events.push(event.clone());
    }

    /// Hands back the recorded event history.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify_prompt(&mut self, prompt: &Prompt) {
        for observer in &mut self.observers {
            observer.on_prompt_issued(prompt);
        }
    }

    pub async fn choose_starting_hand(
        &mut self,
        game: &GameState,
        player: PlayerId,
        prompt: &StartingHandPrompt,
    ) -> Value<StartingHandChoice> {
        let mut hint: Option<String> = None;
        for _ in 0..MAX_ATTEMPTS {
            let view = views::build(game, player);
            let agent = &mut self.agents[player.seat()];
            let response = tokio::time::timeout(
                self.timeout,
                agent.choose_starting_hand(&view, prompt, hint.as_deref()),
            )
            .await;
            match response {
                Err(_) => hint = Some("Timed out".to_string()),
                Ok(Err(report)) => hint = Some(report.to_string()),
                Ok(Ok(choice)) => {
                    match validators::validate_starting_hand(game, player, prompt, &choice) {
                        Ok(()) => return Ok(choice),
                        Err(reason) => hint = Some(reason),
                    }
                }
            }
            warn!(%player, hint = hint.as_deref().unwrap_or_default(), "Rejected starting hand");
        }
        Err(forfeit(player, hint))
    }

    pub async fn choose_turn_action(
        &mut self,
        game: &GameState,
        player: PlayerId,
    ) -> Value<TurnActionChoice> {
        let mut hint: Option<String> = None;
        for _ in 0..MAX_ATTEMPTS {
            let view = views::build(game, player);
            let agent = &mut self.agents[player.seat()];
            let response =
                tokio::time::timeout(self.timeout, agent.choose_turn_action(&view, hint.as_deref()))
                    .await;
            match response {
                Err(_) => hint = Some("Timed out".to_string()),
                Ok(Err(report)) => hint = Some(report.to_string()),
                Ok(Ok(choice)) => {
                    match validators::validate_turn_action(game, self.registry, player, &choice) {
                        Ok(()) => {
                            debug!(%player, ?choice, "Chose turn action");
                            return Ok(choice);
                        }
                        Err(reason) => hint = Some(reason),
                    }
                }
            }
            warn!(%player, hint = hint.as_deref().unwrap_or_default(), "Rejected turn action");
        }
        Err(forfeit(player, hint))
    }
}

#[async_trait]
impl Prompter for AgentWrapper<'_> {
    async fn choose(&mut self, game: &GameState, prompt: Prompt) -> Value<PromptChoice> {
        let player = prompt.player;
        let mut hint: Option<String> = None;
        for _ in 0..MAX_ATTEMPTS {
            self.notify_prompt(&prompt);
            let view = views::build(game, player);
            let agent = &mut self.agents[player.seat()];
            let response = tokio::time::timeout(
                self.timeout,
                agent.choose_option(&view, &prompt, hint.as_deref()),
            )
            .await;
            match response {
                Err(_) => hint = Some("Timed out".to_string()),
                Ok(Err(report)) => hint = Some(report.to_string()),
                Ok(Ok(choice)) => {
                    match validators::validate_choice(game, self.registry, &prompt, &choice) {
                        Ok(()) => return Ok(choice),
                        Err(reason) => hint = Some(reason),
                    }
                }
            }
            warn!(%player, hint = hint.as_deref().unwrap_or_default(), "Rejected choice");
        }
        Err(forfeit(player, hint))
    }

    fn on_effect_applied(&mut self, effect: &Effect) {
        for observer in &mut self.observers {
            observer.on_effect_applied(effect);
        }
    }

    fn on_event(&mut self, event: &EngineEvent) {
        self.notify_event(event);
    }
}

fn forfeit(player: PlayerId, hint: Option<String>) -> StopCondition {
    StopCondition::Forfeit {
        seat: player.0,
        reason: hint.unwrap_or_else(|| "No response".to_string()),
    }
}
