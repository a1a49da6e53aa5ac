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

use std::fmt::Debug;

use async_trait::async_trait;
use color_eyre::Result;

use crate::actions::turn_action::TurnActionChoice;
use crate::events::engine_event::EngineEvent;
use crate::prompts::choice::PromptChoice;
use crate::prompts::prompt::Prompt;
use crate::prompts::starting_hand::{StartingHandChoice, StartingHandPrompt};
use crate::views::player_view::PlayerView;

/// Trait representing a decision-maker for one seat in a match.
///
/// This is the sole contract between the core and external decision-makers.
/// Agents only ever see [PlayerView]s; the raw state is never passed out.
/// All three choice operations are awaitable so that implementations may
/// block on external transports. Failures (errors, timeouts, invalid
/// choices) count against the engine's retry budget and eventually forfeit
/// the seat, so implementations can simply return errors when confused.
///
/// Lives in `data` rather than the agents crate to avoid a circular crate
/// dependency with the engine.
#[async_trait]
pub trait Agent: Debug + Send {
    /// Choose which dealt birds to keep, which single bonus card to keep,
    /// and one starting food token to discard per bird kept.
    ///
    /// On a retry, `hint` carries the reason the previous answer was
    /// rejected.
    async fn choose_starting_hand(
        &mut self,
        view: &PlayerView,
        prompt: &StartingHandPrompt,
        hint: Option<&str>,
    ) -> Result<StartingHandChoice>;

    /// Choose one of the four turn actions.
    async fn choose_turn_action(
        &mut self,
        view: &PlayerView,
        hint: Option<&str>,
    ) -> Result<TurnActionChoice>;

    /// Answer a mid-handler prompt. The returned choice must match the
    /// prompt's kind tag.
    async fn choose_option(
        &mut self,
        view: &PlayerView,
        prompt: &Prompt,
        hint: Option<&str>,
    ) -> Result<PromptChoice>;

    /// Observer-style callback receiving every engine event, for agents that
    /// build a narrative of the match. Default implementation ignores it.
    fn on_event(&mut self, _event: &EngineEvent) {}
}
