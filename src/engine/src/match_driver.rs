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

use color_eyre::eyre::eyre;
use color_eyre::Result;
use data::agents::agent::Agent;
use data::agents::observer::Observer;
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{FoodMap, PlayerId};
use data::effects::effect::Effect;
use data::events::engine_event::EngineEvent;
use data::game_states::game_state::{GameState, GameStatus, ROUND_TURNS};
use data::player_states::score_sheet::ScoreSheet;
use data::prompts::starting_hand::StartingHandPrompt;
use rules::mutations::apply;
use rules::powers::context::Prompter;
use rules::powers::processor;
use rules::queries::scoring;
use tracing::{info, instrument, warn};
use utils::outcome::{Outcome, StopCondition, Value, OK};

use crate::agent_wrapper::AgentWrapper;
use crate::new_game::{self, MatchConfig};

/// The result of a completed match.
pub struct MatchOutcome {
    pub state: GameState,
    pub scores: Vec<ScoreSheet>,
    pub winner: PlayerId,

    /// Every engine event in emission order.
    pub events: Vec<EngineEvent>,
}

/// Runs one match to completion.
///
/// Matches are fully isolated: callers may run many concurrently, sharing
/// only the immutable registry by reference.
pub async fn run_match(
    config: MatchConfig,
    registry: &CardRegistry,
    agents: Vec<Box<dyn Agent>>,
    observers: Vec<Box<dyn Observer>>,
) -> Result<MatchOutcome> {
    let game = new_game::create(&config, registry).map_err(into_report)?;
    let wrapper = AgentWrapper::new(registry, agents, observers, config.prompt_timeout);
    let driver = MatchDriver { game, registry, wrapper };
    driver.run().await.map_err(into_report)
}

fn into_report(stop: StopCondition) -> color_eyre::Report {
    match stop {
        StopCondition::Error(report) => report,
        other => eyre!("Match halted unexpectedly: {other:?}"),
    }
}

struct MatchDriver<'a> {
    game: GameState,
    registry: &'a CardRegistry,
    wrapper: AgentWrapper<'a>,
}

impl<'a> MatchDriver<'a> {
    #[instrument(name = "match_run", level = "info", skip(self), fields(seed = self.game.configuration.seed))]
    async fn run(mut self) -> Value<MatchOutcome> {
        let players: Vec<_> = self.game.players.iter().map(|player| player.id).collect();
        self.emit(EngineEvent::GameStarted { players });

        self.starting_hands().await?;
        self.game.status = GameStatus::Playing;
        self.apply_effect(Effect::RefillBirdfeeder { dice: vec![] })?;

        for round in 1..=4u8 {
            if self.game.is_over() {
                break;
            }
            self.game.round = round;
            let budget = ROUND_TURNS[round as usize - 1];
            for player in &mut self.game.players {
                player.turns_remaining = if player.forfeited { 0 } else { budget };
            }
            self.emit(EngineEvent::RoundStarted { round });

            let count = self.game.player_count();
            let mut seat = (round as usize - 1) % count;
            while let Some(player) = self.next_to_act(seat) {
                match self.take_turn(player).await {
                    Ok(()) => {}
                    Err(StopCondition::Forfeit { seat, reason }) => {
                        self.handle_forfeit(PlayerId(seat), reason, Some(player))?;
                    }
                    Err(stop) => return Err(stop),
                }
                if self.game.is_over() {
                    break;
                }
                seat = (player.seat() + 1) % count;
            }
            if self.game.is_over() {
                break;
            }

            let goal = self.game.goals[round as usize - 1];
            let standings = scoring::goal_standings(&self.game, self.registry, goal)?;
            self.emit(EngineEvent::RoundEnded { round, goal, standings });
        }

        self.finish()
    }

    /// Simultaneous starting-hand selection, resolved in seat order.
    async fn starting_hands(&mut self) -> Outcome {
        for seat in 0..self.game.player_count() {
            let player = PlayerId(seat as u8);
            let state = self.game.player(player);
            let prompt = StartingHandPrompt {
                birds: state.hand.clone(),
                bonus_cards: state.bonus_cards.clone(),
            };
            match self.wrapper.choose_starting_hand(&self.game, player, &prompt).await {
                Ok(choice) => {
                    let discard_birds: Vec<_> = prompt
                        .birds
                        .iter()
                        .copied()
                        .filter(|card| !choice.keep_birds.contains(card))
                        .collect();
                    if !discard_birds.is_empty() {
                        self.apply_effect(Effect::DiscardCards {
                            player,
                            cards: discard_birds,
                            from_revealed: false,
                        })?;
                    }
                    let mut food = FoodMap::default();
                    for &token in &choice.discard_food {
                        food[token] += 1;
                    }
                    self.apply_effect(Effect::DiscardFood { player, food })?;
                    let discard_bonus: Vec<_> = prompt
                        .bonus_cards
                        .iter()
                        .copied()
                        .filter(|&card| card != choice.keep_bonus)
                        .collect();
                    self.apply_effect(Effect::DrawBonusCards {
                        player,
                        kept: vec![choice.keep_bonus],
                        discarded: discard_bonus,
                    })?;
                }
                Err(StopCondition::Forfeit { seat, reason }) => {
                    self.handle_forfeit(PlayerId(seat), reason, None)?;
                    if self.game.is_over() {
                        return OK;
                    }
                }
                Err(stop) => return Err(stop),
            }
        }
        OK
    }

    /// Next seat with turns remaining, searching cyclically from `seat`.
    fn next_to_act(&self, seat: usize) -> Option<PlayerId> {
        let count = self.game.player_count();
        (0..count).map(|offset| PlayerId(((seat + offset) % count) as u8)).find(|&id| {
            let player = self.game.player(id);
            !player.forfeited && player.turns_remaining > 0
        })
    }

    #[instrument(level = "debug", skip(self))]
    async fn take_turn(&mut self, player: PlayerId) -> Outcome {
        self.game.active_player = player;
        self.game.turn_number += 1;
        let turn = self.game.turn_number;
        self.emit(EngineEvent::TurnStarted { player, turn });

        let choice = self.wrapper.choose_turn_action(&self.game, player).await?;
        let events = processor::run_turn_action(
            &mut self.game,
            self.registry,
            &mut self.wrapper,
            player,
            choice,
        )
        .await?;
        processor::dispatch_events(&mut self.game, self.registry, &mut self.wrapper, events, true)
            .await?;

        // End of turn: drain deferred continuations in FIFO order.
        while let Some(continuation) = self.game.deferred.pop_front() {
            let events = processor::run_continuation(
                &mut self.game,
                self.registry,
                &mut self.wrapper,
                &continuation,
            )
            .await?;
            processor::dispatch_events(
                &mut self.game,
                self.registry,
                &mut self.wrapper,
                events,
                true,
            )
            .await?;
        }

        self.game.player_mut(player).turns_remaining -= 1;
        self.emit(EngineEvent::TurnEnded { player, turn });
        OK
    }

    /// Marks a seat as forfeited and ends the game immediately when only one
    /// participant remains. `active` is the player whose turn was
    /// interrupted, if any; their turn is consumed and the turn's pending
    /// continuations are dropped.
    fn handle_forfeit(
        &mut self,
        player: PlayerId,
        reason: String,
        active: Option<PlayerId>,
    ) -> Outcome {
        warn!(%player, %reason, "Player forfeited");
        {
            let state = self.game.player_mut(player);
            state.forfeited = true;
            state.turns_remaining = 0;
        }
        self.game.deferred.clear();

        let remaining = self.game.active_players().count() as u32;
        self.emit(EngineEvent::PlayerForfeited { player, remaining, reason });

        if let Some(active) = active {
            let state = self.game.player_mut(active);
            if state.turns_remaining > 0 {
                state.turns_remaining -= 1;
            }
        }

        if remaining <= 1 {
            let survivor = self.game.active_players().next().map(|state| state.id);
            if let Some(survivor) = survivor {
                self.game.status = GameStatus::GameOver { winner: survivor };
            }
        }
        OK
    }

    /// Computes final scores, declares the winner and closes the match.
    fn finish(mut self) -> Value<MatchOutcome> {
        let scores = scoring::score_sheets(&self.game, self.registry)?;
        let winner = match self.game.status {
            GameStatus::GameOver { winner } => winner,
            _ => scoring::winner(&scores)?,
        };
        self.game.status = GameStatus::GameOver { winner };
        info!(%winner, "Match finished");
        self.emit(EngineEvent::GameEnded { winner, scores: scores.clone() });
        let events = self.wrapper.take_events();
        Ok(MatchOutcome { state: self.game, scores, winner, events })
    }

    fn emit(&mut self, event: EngineEvent) {
        self.wrapper.notify_event(&event);
    }

    /// Applies an orchestrator-level effect outside any handler.
    fn apply_effect(&mut self, mut effect: Effect) -> Outcome {
        apply::apply(&mut self.game, self.registry, &mut effect)?;
        self.wrapper.on_effect_applied(&effect);
        OK
    }
}
