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

use data::card_definitions::bonus_card::BonusCriterion;
use data::card_definitions::registry::CardRegistry;
use data::card_definitions::round_goal::GoalMetric;
use data::core::primitives::{GoalId, NestType, PlayerId};
use data::game_states::game_state::GameState;
use data::player_states::player_state::PlayerState;
use data::player_states::score_sheet::ScoreSheet;
use utils::outcome::Value;
use utils::with_error::WithError;

/// Computes the final score breakdown for every player.
pub fn score_sheets(game: &GameState, registry: &CardRegistry) -> Value<Vec<ScoreSheet>> {
    game.players.iter().map(|player| score_player(player, registry)).collect()
}

/// The winner: the non-forfeited player with the highest total. Ties go to
/// the earlier seat, deterministically.
pub fn winner(sheets: &[ScoreSheet]) -> Value<PlayerId> {
    let mut best: Option<&ScoreSheet> = None;
    for sheet in sheets.iter().filter(|sheet| !sheet.forfeited) {
        if best.map_or(true, |current| sheet.total() > current.total()) {
            best = Some(sheet);
        }
    }
    best.map(|sheet| sheet.player)
        .with_error(|| "No non-forfeited player to declare winner".to_string())
}

fn score_player(player: &PlayerState, registry: &CardRegistry) -> Value<ScoreSheet> {
    let mut bird_points = 0;
    let mut egg_points = 0;
    let mut cached_food_points = 0;
    let mut tucked_points = 0;
    for bird in player.board.birds() {
        bird_points += registry.bird(bird.card)?.points;
        egg_points += bird.eggs;
        cached_food_points += bird.cached_total();
        tucked_points += bird.tucked.len() as u32;
    }

    let mut bonus_points = 0;
    for &bonus in &player.bonus_cards {
        let card = registry.bonus(bonus)?;
        let count = bonus_count(player, registry, &card.criterion)?;
        bonus_points += card.scoring.score(count);
    }

    Ok(ScoreSheet {
        player: player.id,
        bird_points,
        egg_points,
        cached_food_points,
        tucked_points,
        bonus_points,
        forfeited: player.forfeited,
    })
}

/// Counts the qualifying quantity for a bonus criterion.
pub fn bonus_count(
    player: &PlayerState,
    registry: &CardRegistry,
    criterion: &BonusCriterion,
) -> Value<u32> {
    Ok(match criterion {
        BonusCriterion::Tag(tag) => {
            let mut count = 0;
            for bird in player.board.birds() {
                if registry.bird(bird.card)?.bonus_tags.iter().any(|t| t == tag) {
                    count += 1;
                }
            }
            count
        }
        BonusCriterion::BirdsWithEggsAtLeast(min) => {
            player.board.birds().filter(|bird| bird.eggs >= *min).count() as u32
        }
        BonusCriterion::CardsInHand => player.hand.len() as u32,
        BonusCriterion::BirdsInSmallestHabitat => enum_iterator::all()
            .map(|habitat| player.board.row(habitat).bird_count() as u32)
            .min()
            .unwrap_or(0),
    })
}

/// Per-player standings for a round goal, in seat order.
pub fn goal_standings(
    game: &GameState,
    registry: &CardRegistry,
    goal: GoalId,
) -> Value<Vec<(PlayerId, u32)>> {
    let metric = registry
        .goal(goal)
        .map(|definition| definition.metric)
        .with_error(|| format!("Unknown round goal {goal:?}"))?;
    let mut standings = Vec::new();
    for player in &game.players {
        standings.push((player.id, goal_metric(player, registry, metric)?));
    }
    Ok(standings)
}

fn goal_metric(
    player: &PlayerState,
    registry: &CardRegistry,
    metric: GoalMetric,
) -> Value<u32> {
    Ok(match metric {
        GoalMetric::BirdsInHabitat(habitat) => player.board.row(habitat).bird_count() as u32,
        GoalMetric::EggsInHabitat(habitat) => {
            player.board.row(habitat).birds().map(|bird| bird.eggs).sum()
        }
        GoalMetric::EggsOnNest(nest) => {
            let mut eggs = 0;
            for bird in player.board.birds() {
                let bird_nest = registry.bird(bird.card)?.nest;
                if bird_nest == nest || bird_nest == NestType::Wild {
                    eggs += bird.eggs;
                }
            }
            eggs
        }
        GoalMetric::TotalBirds => player.board.total_birds() as u32,
    })
}
