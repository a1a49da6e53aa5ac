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
use data::core::primitives::PlayerId;
use data::effects::effect::EggPlacement;
use data::game_states::game_state::GameState;
use utils::outcome::{Outcome, OK};
use utils::verify;
use utils::with_error::WithError;

/// Lays eggs according to the placement mapping. Placements may address any
/// board; eligibility is the prompting handler's concern, capacity is
/// enforced here.
pub fn lay(game: &mut GameState, registry: &CardRegistry, placements: &[EggPlacement]) -> Outcome {
    for placement in placements {
        let owner = game
            .owner_of(placement.instance)
            .with_error(|| format!("Unknown bird instance {:?}", placement.instance))?;
        let card = game.player(owner).bird(placement.instance).map(|bird| bird.card);
        let card = card.with_error(|| format!("Unknown bird instance {:?}", placement.instance))?;
        let capacity = registry.bird(card)?.egg_capacity;

        let bird = game
            .player_mut(owner)
            .bird_mut(placement.instance)
            .with_error(|| format!("Unknown bird instance {:?}", placement.instance))?;
        verify!(
            bird.eggs + placement.count <= capacity,
            "Laying {} eggs would overflow capacity {} on {:?}",
            placement.count,
            capacity,
            placement.instance
        );
        bird.eggs += placement.count;
    }
    OK
}

/// Lays eggs for several players at once.
pub fn lay_all(
    game: &mut GameState,
    registry: &CardRegistry,
    placements: &[(PlayerId, Vec<EggPlacement>)],
) -> Outcome {
    for (_, player_placements) in placements {
        lay(game, registry, player_placements)?;
    }
    OK
}

/// Discards eggs from birds.
pub fn discard(game: &mut GameState, player: PlayerId, removals: &[EggPlacement]) -> Outcome {
    for removal in removals {
        let bird = game
            .player_mut(player)
            .bird_mut(removal.instance)
            .with_error(|| format!("{player} has no bird instance {:?}", removal.instance))?;
        verify!(
            bird.eggs >= removal.count,
            "{:?} holds {} eggs, cannot discard {}",
            removal.instance,
            bird.eggs,
            removal.count
        );
        bird.eggs -= removal.count;
    }
    OK
}
