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

use std::future::Future;
use std::pin::Pin;

use data::actions::turn_action::{TurnAction, TurnActionChoice};
use data::card_definitions::power_definition::{PowerDefinition, PowerParams, PowerTrigger};
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{BirdInstanceId, Habitat, PlayerId};
use data::effects::effect::{Effect, SkipReason};
use data::events::engine_event::EngineEvent;
use data::game_states::continuation::Continuation;
use data::game_states::game_state::GameState;
use tracing::{error, instrument};
use utils::outcome::{Outcome, Value, OK};

use crate::mutations::apply;
use crate::powers::context::{PowerCtx, Prompter};
use crate::powers::registry;
use crate::queries::board_queries;
use crate::turn_actions;

/// Runs one bird power through the handler protocol, returning the events it
/// emitted.
///
/// Unknown handler identifiers in card data are programmer errors: they are
/// logged, preserved in the effect log as a skipped activation, and never
/// fatal to the match.
#[instrument(level = "debug", skip(game, registry, prompter, definition, trigger))]
pub async fn run_power(
    game: &mut GameState,
    registry: &CardRegistry,
    prompter: &mut dyn Prompter,
    owner: PlayerId,
    instance: BirdInstanceId,
    definition: &PowerDefinition,
    trigger: Option<EngineEvent>,
) -> Value<Vec<EngineEvent>> {
    if !registry::is_registered(&definition.handler) {
        error!(handler = %definition.handler, "Unknown power handler");
        let mut effect = Effect::ActivatePower {
            player: owner,
            instance: Some(instance),
            handler: definition.handler.clone(),
            activated: false,
            skip: Some(SkipReason::ConditionNotMet),
        };
        apply::apply(game, registry, &mut effect)?;
        prompter.on_effect_applied(&effect);
        return Ok(vec![]);
    }

    let handler = registry::lookup(&definition.handler)?;
    let mut ctx = PowerCtx {
        game: &mut *game,
        registry,
        prompter: &mut *prompter,
        owner,
        instance: Some(instance),
        handler: definition.handler.clone(),
        params: definition.params.clone(),
        trigger,
        events: Vec::new(),
        in_continuation: false,
    };
    handler(&mut ctx).await?;
    let events = ctx.events;

    flush_revealed(game, registry, prompter, owner)?;
    Ok(events)
}

/// Runs one of the four turn actions, returning the events it emitted.
#[instrument(level = "debug", skip(game, registry, prompter))]
pub async fn run_turn_action(
    game: &mut GameState,
    registry: &CardRegistry,
    prompter: &mut dyn Prompter,
    player: PlayerId,
    choice: TurnActionChoice,
) -> Value<Vec<EngineEvent>> {
    let mut ctx = PowerCtx {
        game: &mut *game,
        registry,
        prompter: &mut *prompter,
        owner: player,
        instance: None,
        handler: format!("action:{:?}", choice.action),
        params: PowerParams::default(),
        trigger: None,
        events: Vec::new(),
        in_continuation: false,
    };
    match choice.action {
        TurnAction::PlayBird => turn_actions::play_bird::run(&mut ctx).await?,
        TurnAction::GainFood => turn_actions::gain_food::run(&mut ctx, choice.take_bonus).await?,
        TurnAction::LayEggs => turn_actions::lay_eggs::run(&mut ctx, choice.take_bonus).await?,
        TurnAction::DrawCards => {
            turn_actions::draw_cards::run(&mut ctx, choice.take_bonus).await?
        }
    }
    let events = ctx.events;

    flush_revealed(game, registry, prompter, player)?;
    Ok(events)
}

/// Runs a deferred continuation at end of turn, returning the events it
/// emitted. Continuations read live state and must not defer again.
#[instrument(level = "debug", skip(game, registry, prompter, continuation))]
pub async fn run_continuation(
    game: &mut GameState,
    registry: &CardRegistry,
    prompter: &mut dyn Prompter,
    continuation: &Continuation,
) -> Value<Vec<EngineEvent>> {
    let handler = registry::lookup(&continuation.handler)?;
    let mut ctx = PowerCtx {
        game: &mut *game,
        registry,
        prompter: &mut *prompter,
        owner: continuation.player,
        instance: continuation.instance,
        handler: continuation.handler.clone(),
        params: continuation.params.clone(),
        trigger: None,
        events: Vec::new(),
        in_continuation: true,
    };
    handler(&mut ctx).await?;
    let events = ctx.events;

    flush_revealed(game, registry, prompter, continuation.player)?;
    Ok(events)
}

/// Processes a batch of handler events in emission order. When `reactive`
/// is set, habitat activations run brown chains and trigger events run pink
/// powers; events emitted by pink powers themselves are forwarded to the
/// prompter's event hook but never cascade.
pub fn dispatch_events<'a>(
    game: &'a mut GameState,
    registry: &'a CardRegistry,
    prompter: &'a mut dyn Prompter,
    events: Vec<EngineEvent>,
    reactive: bool,
) -> Pin<Box<dyn Future<Output = Outcome> + Send + 'a>> {
    Box::pin(async move {
        for event in events {
            prompter.on_event(&event);
            if !reactive {
                continue;
            }
            if let EngineEvent::HabitatActivated { player, habitat } = event {
                run_brown_chain(game, registry, prompter, player, habitat).await?;
            } else if event.trigger().is_some() {
                run_pink_powers(game, registry, prompter, &event).await?;
            }
        }
        OK
    })
}

/// Runs the when-activated powers of a habitat row right to left. The pink
/// powers triggered by each bird resolve fully before the next bird runs.
async fn run_brown_chain(
    game: &mut GameState,
    registry: &CardRegistry,
    prompter: &mut dyn Prompter,
    player: PlayerId,
    habitat: Habitat,
) -> Outcome {
    let order = board_queries::row_right_to_left(game, player, habitat);
    for instance in order {
        // A bird may have been moved out of the row mid-chain.
        let Some(card) = game.player(player).bird(instance).map(|bird| bird.card) else {
            continue;
        };
        let Some(power) = registry.bird(card)?.power.clone() else {
            continue;
        };
        if power.trigger != PowerTrigger::WhenActivated {
            continue;
        }
        let events =
            run_power(&mut *game, registry, &mut *prompter, player, instance, &power, None)
                .await?;
        dispatch_events(&mut *game, registry, &mut *prompter, events, true).await?;
    }
    OK
}

/// Runs every eligible once-between-turns power for one trigger event.
/// Non-active players are enumerated clockwise starting left of the active
/// player; each board is walked forest → grassland → wetland, right to left
/// within each habitat. Each eligible handler runs exactly once per event,
/// and reactions do not cascade.
async fn run_pink_powers(
    game: &mut GameState,
    registry: &CardRegistry,
    prompter: &mut dyn Prompter,
    event: &EngineEvent,
) -> Outcome {
    let Some(trigger) = event.trigger() else {
        return OK;
    };
    let active = game.active_player;
    for opponent in game.opponents_clockwise_of(active) {
        if game.player(opponent).forfeited {
            continue;
        }
        let mut birds = Vec::new();
        for habitat in enum_iterator::all::<Habitat>() {
            birds.extend(board_queries::row_right_to_left(game, opponent, habitat));
        }
        for instance in birds {
            let Some(card) = game.player(opponent).bird(instance).map(|bird| bird.card)
            else {
                continue;
            };
            let Some(power) = registry.bird(card)?.power.clone() else {
                continue;
            };
            if power.trigger != PowerTrigger::OnceBetweenTurns
                || !power.triggers_on.contains(trigger)
            {
                continue;
            }
            let events = run_power(
                &mut *game,
                registry,
                &mut *prompter,
                opponent,
                instance,
                &power,
                Some(event.clone()),
            )
            .await?;
            dispatch_events(&mut *game, registry, &mut *prompter, events, false).await?;
        }
    }
    OK
}

/// Discards any cards left in the revealed holding area once a handler has
/// completed.
fn flush_revealed(
    game: &mut GameState,
    registry: &CardRegistry,
    prompter: &mut dyn Prompter,
    owner: PlayerId,
) -> Outcome {
    if game.revealed.is_empty() {
        return OK;
    }
    let cards = game.revealed.clone();
    let mut effect = Effect::DiscardCards { player: owner, cards, from_revealed: true };
    apply::apply(game, registry, &mut effect)?;
    prompter.on_effect_applied(&effect);
    OK
}
