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

use data::agents::observer::Observer;
use data::effects::effect::Effect;
use data::events::engine_event::EngineEvent;
use tracing::info;

/// An observer that renders engine events into a human-readable match log.
pub struct NarrativeObserver {
    match_label: String,
}

impl NarrativeObserver {
    pub fn new(match_label: impl Into<String>) -> Self {
        Self { match_label: match_label.into() }
    }
}

impl Observer for NarrativeObserver {
    fn on_event(&mut self, event: &EngineEvent) {
        let label = &self.match_label;
        match event {
            EngineEvent::GameStarted { players } => {
                info!("[{label}] Game started with {} players", players.len());
            }
            EngineEvent::RoundStarted { round } => info!("[{label}] Round {round} begins"),
            EngineEvent::RoundEnded { round, standings, .. } => {
                info!("[{label}] Round {round} ends, goal standings {standings:?}");
            }
            EngineEvent::TurnStarted { player, turn } => {
                info!("[{label}] Turn {turn}: {player} to act");
            }
            EngineEvent::BirdPlayed { player, habitat, .. } => {
                info!("[{label}] {player} played a bird into {habitat:?}");
            }
            EngineEvent::FoodGained { player, total, .. } => {
                info!("[{label}] {player} gained {total} food");
            }
            EngineEvent::EggsLaid { player, count } => {
                info!("[{label}] {player} laid {count} eggs");
            }
            EngineEvent::PredatorResolved { player, succeeded, .. } => {
                info!("[{label}] {player}'s predator {}", if *succeeded { "succeeded" } else { "missed" });
            }
            EngineEvent::PlayerForfeited { player, remaining, reason } => {
                info!("[{label}] {player} forfeited ({reason}); {remaining} players remain");
            }
            EngineEvent::GameEnded { winner, scores } => {
                for sheet in scores {
                    info!(
                        "[{label}] {}: {} points ({} birds, {} eggs, {} cached, {} tucked, {} bonus)",
                        sheet.player,
                        sheet.total(),
                        sheet.bird_points,
                        sheet.egg_points,
                        sheet.cached_food_points,
                        sheet.tucked_points,
                        sheet.bonus_points
                    );
                }
                info!("[{label}] Winner: {winner}");
            }
            _ => {}
        }
    }

    fn on_effect_applied(&mut self, _effect: &Effect) {}
}
