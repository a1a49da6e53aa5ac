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

use data::core::primitives::{BirdCardId, BirdInstanceId, FoodMap, Habitat, PlayerId};
use data::effects::effect::EggPlacement;
use data::game_states::game_state::GameState;
use data::player_states::player_state::BirdInstance;
use utils::outcome::Value;
use utils::verify;
use utils::with_error::WithError;

use crate::mutations::{eggs, food};

/// Places a bird from the player's hand into the leftmost empty slot of the
/// habitat, paying the declared food and egg costs. Returns the new instance
/// id and its column.
///
/// Cost satisfaction and habitat legality are the validator's concern; this
/// enforces occupancy and resource sufficiency.
pub fn play_bird(
    game: &mut GameState,
    player: PlayerId,
    card: BirdCardId,
    habitat: Habitat,
    food_paid: &FoodMap,
    egg_payment: &[EggPlacement],
) -> Value<(BirdInstanceId, usize)> {
    verify!(
        game.player(player).hand.contains(&card),
        "{} does not hold card {:?}",
        player,
        card
    );
    verify!(
        !game.player(player).board.row(habitat).is_full(),
        "{} has no space in {:?}",
        player,
        habitat
    );
    for payment in egg_payment {
        verify!(
            game.player(player).bird(payment.instance).is_some(),
            "Egg payment names a bird {} does not own",
            player
        );
    }

    food::discard(game, player, food_paid)?;
    eggs::discard(game, player, egg_payment)?;

    let hand = &mut game.player_mut(player).hand;
    let index = hand.iter().position(|&c| c == card);
    let index = index.with_error(|| format!("{player} does not hold card {card:?}"))?;
    hand.remove(index);

    let instance = game.allocate_instance_id();
    let column = game
        .player_mut(player)
        .board
        .row_mut(habitat)
        .place(BirdInstance::new(instance, card))
        .with_error(|| format!("{player} has no space in {habitat:?}"))?;
    Ok((instance, column))
}

/// Moves a bird to the leftmost empty slot of another habitat. Returns the
/// destination column.
pub fn move_bird(
    game: &mut GameState,
    player: PlayerId,
    instance: BirdInstanceId,
    from: Habitat,
    to: Habitat,
) -> Value<usize> {
    verify!(from != to, "Bird {:?} is already in {:?}", instance, to);
    verify!(
        !game.player(player).board.row(to).is_full(),
        "{} has no space in {:?}",
        player,
        to
    );

    let board = &mut game.player_mut(player).board;
    let bird = board
        .row_mut(from)
        .remove(instance)
        .with_error(|| format!("{player} has no bird instance {instance:?} in {from:?}"))?;
    let column = board
        .row_mut(to)
        .place(bird)
        .with_error(|| format!("{player} has no space in {to:?}"))?;
    Ok(column)
}
