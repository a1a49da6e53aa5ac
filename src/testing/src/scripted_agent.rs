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
use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;
use data::actions::turn_action::{TurnAction, TurnActionChoice};
use data::agents::agent::Agent;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::Prompt;
use data::prompts::starting_hand::{StartingHandChoice, StartingHandPrompt};
use data::views::player_view::PlayerView;

/// A queued response for one agent call.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    StartingHand(StartingHandChoice),
    TurnAction(TurnActionChoice),
    Choice(PromptChoice),
}

/// An agent that replays a fixed script of responses.
///
/// When asked for a starting hand without a scripted answer it keeps no
/// birds and the first dealt bonus card, which is always legal. Any other
/// unscripted call is an error, which counts as a strike.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    responses: VecDeque<ScriptedResponse>,
}

impl ScriptedAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_hand(mut self, choice: StartingHandChoice) -> Self {
        self.responses.push_back(ScriptedResponse::StartingHand(choice));
        self
    }

    pub fn turn_action(mut self, action: TurnAction, take_bonus: bool) -> Self {
        self.responses.push_back(ScriptedResponse::TurnAction(TurnActionChoice {
            action,
            take_bonus,
        }));
        self
    }

    pub fn choice(mut self, choice: PromptChoice) -> Self {
        self.responses.push_back(ScriptedResponse::Choice(choice));
        self
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    async fn choose_starting_hand(
        &mut self,
        _view: &PlayerView,
        prompt: &StartingHandPrompt,
        _hint: Option<&str>,
    ) -> Result<StartingHandChoice> {
        if matches!(self.responses.front(), Some(ScriptedResponse::StartingHand(_))) {
            let Some(ScriptedResponse::StartingHand(choice)) = self.responses.pop_front()
            else {
                bail!("Script out of sync");
            };
            return Ok(choice);
        }
        let keep_bonus = *prompt
            .bonus_cards
            .first()
            .ok_or_else(|| eyre!("No bonus cards were dealt"))?;
        Ok(StartingHandChoice { keep_birds: vec![], keep_bonus, discard_food: vec![] })
    }

    async fn choose_turn_action(
        &mut self,
        _view: &PlayerView,
        _hint: Option<&str>,
    ) -> Result<TurnActionChoice> {
        match self.responses.pop_front() {
            Some(ScriptedResponse::TurnAction(choice)) => Ok(choice),
            other => bail!("Expected a scripted turn action, found {other:?}"),
        }
    }

    async fn choose_option(
        &mut self,
        _view: &PlayerView,
        prompt: &Prompt,
        _hint: Option<&str>,
    ) -> Result<PromptChoice> {
        match self.responses.pop_front() {
            Some(ScriptedResponse::Choice(choice)) => Ok(choice),
            other => bail!("Expected a scripted choice for {prompt:?}, found {other:?}"),
        }
    }
}

/// An agent whose every call fails, for exercising the forfeit path.
#[derive(Debug, Default)]
pub struct FailingAgent;

#[async_trait]
impl Agent for FailingAgent {
    async fn choose_starting_hand(
        &mut self,
        _view: &PlayerView,
        _prompt: &StartingHandPrompt,
        _hint: Option<&str>,
    ) -> Result<StartingHandChoice> {
        bail!("Agent offline")
    }

    async fn choose_turn_action(
        &mut self,
        _view: &PlayerView,
        _hint: Option<&str>,
    ) -> Result<TurnActionChoice> {
        bail!("Agent offline")
    }

    async fn choose_option(
        &mut self,
        _view: &PlayerView,
        _prompt: &Prompt,
        _hint: Option<&str>,
    ) -> Result<PromptChoice> {
        bail!("Agent offline")
    }
}
