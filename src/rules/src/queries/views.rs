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

use data::core::primitives::PlayerId;
use data::game_states::game_state::GameState;
use data::player_states::player_state::PlayerState;
use data::views::player_view::{BirdSlotView, BoardView, OpponentView, PlayerView};
use enum_map::EnumMap;

/// Builds the read-only view of the match for one recipient.
///
/// Hand privacy holds by construction: opponents' hands and the deck order
/// never enter the returned structure.
pub fn build(game: &GameState, viewer: PlayerId) -> PlayerView {
    let state = game.player(viewer);
    PlayerView {
        viewer,
        round: game.round,
        turn_number: game.turn_number,
        active_player: game.active_player,
        turns_remaining: state.turns_remaining,
        hand: state.hand.clone(),
        bonus_cards: state.bonus_cards.clone(),
        food: state.food,
        board: board_view(state, true),
        opponents: game
            .opponents_clockwise_of(viewer)
            .into_iter()
            .map(|id| opponent_view(game.player(id)))
            .collect(),
        tray: game.bird_supply.tray.clone(),
        revealed: game.revealed.clone(),
        birdfeeder: game.birdfeeder.dice().to_vec(),
        deck_size: game.bird_supply.deck_size() as u32,
        goals: game.goals.clone(),
    }
}

fn opponent_view(state: &PlayerState) -> OpponentView {
    OpponentView {
        player: state.id,
        name: state.name.clone(),
        board: board_view(state, false),
        hand_size: state.hand.len() as u32,
        bonus_card_count: state.bonus_cards.len() as u32,
        food: state.food,
        turns_remaining: state.turns_remaining,
        forfeited: state.forfeited,
    }
}

fn board_view(state: &PlayerState, own: bool) -> BoardView {
    BoardView {
        rows: EnumMap::from_fn(|habitat| {
            state
                .board
                .row(habitat)
                .birds()
                .map(|bird| BirdSlotView {
                    instance: bird.id,
                    card: bird.card,
                    eggs: bird.eggs,
                    cached_food: bird.cached_total(),
                    tucked: bird.tucked.len() as u32,
                    tucked_cards: if own { bird.tucked.clone() } else { Vec::new() },
                })
                .collect()
        }),
    }
}
