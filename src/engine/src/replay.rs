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

use data::card_definitions::registry::CardRegistry;
use data::effects::effect::Effect;
use data::game_states::game_state::GameState;
use rules::mutations::apply;
use utils::outcome::Value;
use utils::verify;

use crate::new_game::{self, MatchConfig};

/// Rebuilds the initial state from the same configuration and re-applies a
/// recorded effect log.
///
/// Because all in-match randomness flows through the state rng and effects
/// are applied in log order, the applier consumes the same random stream as
/// the original run: every result field is reproduced bit for bit, which is
/// verified against the recorded log as the replay proceeds.
pub fn replay(config: &MatchConfig, registry: &CardRegistry, log: &[Effect]) -> Value<GameState> {
    let mut game = new_game::create(config, registry)?;
    for recorded in log {
        let mut effect = recorded.clone();
        apply::apply(&mut game, registry, &mut effect)?;
        verify!(
            &effect == recorded,
            "Replay diverged from the recorded log at {recorded:?}"
        );
    }
    Ok(game)
}
