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

use data::actions::turn_action::TurnAction;
use data::agents::agent::Agent;
use data::core::primitives::PlayerId;
use data::events::engine_event::EngineEvent;
use data::game_states::game_state::GameStatus;
use engine::match_driver;
use testing::scripted_agent::{FailingAgent, ScriptedAgent};
use testing::test_game::TestGame;

const ALICE: PlayerId = PlayerId(0);
const BOB: PlayerId = PlayerId(1);

#[tokio::test]
async fn three_invalid_turn_actions_forfeit_and_end_a_two_player_game() {
    let registry = dataset::card_json::registry().expect("Base dataset loads");
    let config = TestGame::config(31, 2);

    // Alice keeps no birds, then insists on playing a bird from an empty
    // hand three times.
    let alice = ScriptedAgent::new()
        .turn_action(TurnAction::PlayBird, false)
        .turn_action(TurnAction::PlayBird, false)
        .turn_action(TurnAction::PlayBird, false);
    let bob = ScriptedAgent::new();
    let agents: Vec<Box<dyn Agent>> = vec![Box::new(alice), Box::new(bob)];

    let outcome = match_driver::run_match(config, registry, agents, vec![])
        .await
        .expect("Match completes despite the forfeit");

    assert_eq!(outcome.winner, BOB);
    assert!(matches!(outcome.state.status, GameStatus::GameOver { winner } if winner == BOB));
    assert!(outcome.state.player(ALICE).forfeited);
    assert_eq!(outcome.state.player(ALICE).turns_remaining, 0);
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(
            event,
            EngineEvent::PlayerForfeited { player, remaining: 1, .. } if *player == ALICE
        )));

    // Forfeited players are still scored but cannot win.
    let alice_sheet =
        outcome.scores.iter().find(|sheet| sheet.player == ALICE).expect("Alice is scored");
    assert!(alice_sheet.forfeited);
}

#[tokio::test]
async fn failing_agent_forfeits_during_setup() {
    let registry = dataset::card_json::registry().expect("Base dataset loads");
    let config = TestGame::config(37, 2);

    let agents: Vec<Box<dyn Agent>> =
        vec![Box::new(FailingAgent), Box::new(ScriptedAgent::new())];
    let outcome = match_driver::run_match(config, registry, agents, vec![])
        .await
        .expect("Match completes despite the forfeit");

    assert_eq!(outcome.winner, BOB);
    assert!(outcome.state.player(ALICE).forfeited);
    let forfeit = outcome.events.iter().find_map(|event| match event {
        EngineEvent::PlayerForfeited { player, remaining, reason } => {
            Some((*player, *remaining, reason.clone()))
        }
        _ => None,
    });
    let (player, remaining, reason) = forfeit.expect("Forfeit event emitted");
    assert_eq!(player, ALICE);
    assert_eq!(remaining, 1);
    assert!(reason.contains("Agent offline"));
}

#[tokio::test]
async fn forfeit_with_three_players_continues_the_match() {
    let registry = dataset::card_json::registry().expect("Base dataset loads");
    let config = TestGame::config(41, 3);

    let agents: Vec<Box<dyn Agent>> = vec![
        Box::new(FailingAgent),
        Box::new(scripted_resource_turns()),
        Box::new(scripted_resource_turns()),
    ];
    let outcome = match_driver::run_match(config, registry, agents, vec![])
        .await
        .expect("Match completes");

    assert!(outcome.state.player(ALICE).forfeited);
    assert!(!outcome.state.player(BOB).forfeited);
    // The remaining players played all four rounds.
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, EngineEvent::RoundEnded { round: 4, .. })));
    assert_ne!(outcome.winner, ALICE);
}

/// A script of lay-eggs turns, which are always legal and (with no birds on
/// the board) never prompt.
fn scripted_resource_turns() -> ScriptedAgent {
    let mut agent = ScriptedAgent::new();
    for _ in 0..26 {
        agent = agent.turn_action(TurnAction::LayEggs, false);
    }
    agent
}
