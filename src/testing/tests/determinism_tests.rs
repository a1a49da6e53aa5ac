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

use agents::random_agent::RandomAgent;
use data::agents::agent::Agent;
use data::agents::observer::Observer;
use data::events::engine_event::EngineEvent;
use engine::match_driver::{self, MatchOutcome};
use engine::replay;
use rules::queries::invariants;
use testing::test_game::TestGame;

async fn run(seed: u64, observers: Vec<Box<dyn Observer>>) -> MatchOutcome {
    let registry = dataset::card_json::registry().expect("Base dataset loads");
    let config = TestGame::config(seed, 3);
    let agents: Vec<Box<dyn Agent>> = (0..3)
        .map(|seat| {
            Box::new(RandomAgent::new(seed.wrapping_add(100 + seat), registry)) as Box<dyn Agent>
        })
        .collect();
    match_driver::run_match(config, registry, agents, observers)
        .await
        .expect("Match runs to completion")
}

#[tokio::test]
async fn game_is_deterministic() {
    let first = run(424242, vec![]).await;
    for _ in 0..3 {
        let again = run(424242, vec![]).await;
        assert_eq!(first.state.effect_log, again.state.effect_log);
        assert_eq!(first.events, again.events);
        assert_eq!(first.winner, again.winner);
        assert_eq!(first.scores, again.scores);
    }
}

#[tokio::test]
async fn final_state_satisfies_invariants() {
    let registry = dataset::card_json::registry().expect("Base dataset loads");
    for seed in [1u64, 7, 99, 1234] {
        let outcome = run(seed, vec![]).await;
        invariants::check(&outcome.state, registry).expect("Invariants hold at game end");
    }
}

#[tokio::test]
async fn replaying_the_effect_log_reproduces_the_final_state() {
    let registry = dataset::card_json::registry().expect("Base dataset loads");
    let outcome = run(77, vec![]).await;

    let config = TestGame::config(77, 3);
    let replayed = replay::replay(&config, registry, &outcome.state.effect_log)
        .expect("Replay applies cleanly");

    assert_eq!(replayed.effect_log, outcome.state.effect_log);
    assert_eq!(replayed.bird_supply, outcome.state.bird_supply);
    assert_eq!(replayed.bonus_supply, outcome.state.bonus_supply);
    assert_eq!(replayed.birdfeeder, outcome.state.birdfeeder);
    assert_eq!(replayed.revealed, outcome.state.revealed);
    assert_eq!(replayed.next_instance, outcome.state.next_instance);
    for (a, b) in replayed.players.iter().zip(&outcome.state.players) {
        assert_eq!(a.board, b.board);
        assert_eq!(a.hand, b.hand);
        assert_eq!(a.food, b.food);
        assert_eq!(a.bonus_cards, b.bonus_cards);
    }
}

struct CountingObserver {
    label: &'static str,
    seen: usize,
}

impl Observer for CountingObserver {
    fn on_event(&mut self, _event: &EngineEvent) {
        self.seen += 1;
        let _ = self.label;
    }
}

#[tokio::test]
async fn observer_registration_order_does_not_alter_the_log() {
    let forward = run(
        55,
        vec![
            Box::new(CountingObserver { label: "a", seen: 0 }),
            Box::new(CountingObserver { label: "b", seen: 0 }),
        ],
    )
    .await;
    let reversed = run(
        55,
        vec![
            Box::new(CountingObserver { label: "b", seen: 0 }),
            Box::new(CountingObserver { label: "a", seen: 0 }),
        ],
    )
    .await;
    let bare = run(55, vec![]).await;

    assert_eq!(forward.state.effect_log, reversed.state.effect_log);
    assert_eq!(forward.state.effect_log, bare.state.effect_log);
    assert_eq!(forward.events, reversed.events);
}
