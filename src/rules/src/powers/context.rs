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

use async_trait::async_trait;
use data::card_definitions::bird_card::BirdCard;
use data::card_definitions::power_definition::{PowerDefinition, PowerParams};
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{BirdCardId, BirdInstanceId, PlayerId};
use data::effects::effect::{Effect, SkipReason};
use data::events::engine_event::EngineEvent;
use data::game_states::continuation::Continuation;
use data::game_states::game_state::GameState;
use data::player_states::player_state::{BirdInstance, PlayerState};
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{ActivatePrompt, Prompt, PromptKind};
use utils::outcome::{Outcome, Value, OK};
use utils::with_error::WithError;
use utils::{fail, verify};

use crate::mutations::apply;
use crate::powers::registry;

/// Port through which handlers solicit agent decisions and report applied
/// effects. Implemented by the engine's agent wrapper.
#[async_trait]
pub trait Prompter: Send {
    /// Solicits a validated choice from the prompt's addressee. The
    /// implementation owns retries and the forfeit policy; an error return
    /// unwinds the running handler.
    async fn choose(&mut self, game: &GameState, prompt: Prompt) -> Value<PromptChoice>;

    /// Called once for every applied effect, in application order.
    fn on_effect_applied(&mut self, effect: &Effect);

    /// Called once for every engine event, in emission order.
    fn on_event(&mut self, event: &EngineEvent);
}

/// Execution context for one handler invocation.
///
/// Handlers interleave immediate state mutation ([PowerCtx::apply]) with
/// agent decision points ([PowerCtx::prompt]); suspension happens exactly at
/// prompt awaits. State reads go through the live context, never through
/// references captured across an await.
pub struct PowerCtx<'a> {
    pub game: &'a mut GameState,
    pub registry: &'a CardRegistry,
    pub prompter: &'a mut dyn Prompter,

    /// The player whose power or turn action is running.
    pub owner: PlayerId,

    /// The bird whose power is running. None for turn actions.
    pub instance: Option<BirdInstanceId>,

    /// Handler identifier, recorded in activate-power effects.
    pub handler: String,

    pub params: PowerParams,

    /// For pink powers, the event that triggered this invocation.
    pub trigger: Option<EngineEvent>,

    /// Events emitted by this handler, processed after it completes.
    pub events: Vec<EngineEvent>,

    /// Set while running a deferred continuation; continuations must not
    /// defer again within the same turn.
    pub in_continuation: bool,
}

impl<'a> PowerCtx<'a> {
    pub fn player(&self) -> &PlayerState {
        self.game.player(self.owner)
    }

    pub fn card(&self, id: BirdCardId) -> Value<&BirdCard> {
        self.registry.bird(id)
    }

    /// The bird whose power is running.
    pub fn this_bird(&self) -> Value<&BirdInstance> {
        let instance = self.instance.with_error(|| "No bird in this context".to_string())?;
        self.player()
            .bird(instance)
            .with_error(|| format!("Bird instance {instance:?} is no longer on the board"))
    }

    /// Applies an effect immediately and returns the fully populated record.
    pub fn apply(&mut self, mut effect: Effect) -> Value<Effect> {
        apply::apply(self.game, self.registry, &mut effect)?;
        self.prompter.on_effect_applied(&effect);
        Ok(effect)
    }

    /// Queues an event for processing after this handler completes.
    pub fn emit(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    /// Queues a continuation for end-of-turn execution.
    pub fn defer(&mut self, handler: &str, params: PowerParams) -> Outcome {
        verify!(
            !self.in_continuation,
            "Continuation attempted to defer within the same turn"
        );
        self.game.deferred.push_back(Continuation {
            player: self.owner,
            instance: self.instance,
            handler: handler.to_string(),
            params,
        });
        OK
    }

    /// Prompts the owner of this context.
    pub async fn prompt(
        &mut self,
        text: impl Into<String>,
        kind: PromptKind,
    ) -> Value<PromptChoice> {
        self.prompt_player(self.owner, text, kind).await
    }

    /// Prompts an arbitrary player. Used by all-player powers.
    pub async fn prompt_player(
        &mut self,
        player: PlayerId,
        text: impl Into<String>,
        kind: PromptKind,
    ) -> Value<PromptChoice> {
        let prompt = Prompt { player, text: text.into(), kind };
        self.prompter.choose(&*self.game, prompt).await
    }

    fn record_activation(&mut self, activated: bool, skip: Option<SkipReason>) -> Outcome {
        self.apply(Effect::ActivatePower {
            player: self.owner,
            instance: self.instance,
            handler: self.handler.clone(),
            activated,
            skip,
        })?;
        OK
    }

    /// Records that this power did not run. Handlers call this in tail
    /// position when a precondition fails.
    pub fn skip(&mut self, reason: SkipReason) -> Outcome {
        self.record_activation(false, Some(reason))
    }

    /// Records that this power runs without asking. For mandatory powers and
    /// powers whose only decisions come later.
    pub fn activate(&mut self) -> Outcome {
        self.record_activation(true, None)
    }

    /// Asks the owner whether to run this optional power and records the
    /// decision. Preconditions must already have been checked: a player is
    /// never asked when no execution path exists.
    pub async fn offer(&mut self) -> Value<bool> {
        let Some(instance) = self.instance else {
            fail!("offer() called outside a bird power");
        };
        let power_text = self
            .this_bird()
            .and_then(|bird| self.card(bird.card))
            .map(|card| card.power.as_ref().map(|p| p.text.clone()).unwrap_or_default())?;
        let choice = self
            .prompt(
                format!("Activate power: {power_text}"),
                PromptKind::Activate(ActivatePrompt { instance, power_text: power_text.clone() }),
            )
            .await?;
        let PromptChoice::Activate { activate } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        if activate {
            self.record_activation(true, None)?;
        } else {
            self.record_activation(false, Some(SkipReason::AgentDeclined))?;
        }
        Ok(activate)
    }

    /// Runs another bird's handler inline with a fresh context, appending its
    /// events to this one.
    pub async fn invoke_power(
        &mut self,
        owner: PlayerId,
        instance: BirdInstanceId,
        definition: &PowerDefinition,
        trigger: Option<EngineEvent>,
    ) -> Outcome {
        let handler = registry::lookup(&definition.handler)?;
        let mut child = PowerCtx {
            game: &mut *self.game,
            registry: self.registry,
            prompter: &mut *self.prompter,
            owner,
            instance: Some(instance),
            handler: definition.handler.clone(),
            params: definition.params.clone(),
            trigger,
            events: Vec::new(),
            in_continuation: self.in_continuation,
        };
        handler(&mut child).await?;
        let events = child.events;
        self.events.extend(events);
        OK
    }

    /// Re-runs the when-activated power of another bird the owner controls.
    pub async fn repeat_power(&mut self, target: BirdInstanceId) -> Outcome {
        self.apply(Effect::RepeatBrownPower { player: self.owner, target })?;
        let registry = self.registry;
        let card = self
            .player()
            .bird(target)
            .with_error(|| format!("Bird instance {target:?} is not on the owner's board"))?
            .card;
        let definition = registry
            .bird(card)?
            .power
            .as_ref()
            .with_error(|| format!("Bird {card:?} has no power"))?;
        self.invoke_power(self.owner, target, definition, None).await
    }
}
