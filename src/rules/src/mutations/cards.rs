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

use data::core::primitives::{BirdCardId, BirdInstanceId, BonusCardId, PlayerId};
use data::game_states::game_state::GameState;
use utils::outcome::{Outcome, Value, OK};
use utils::verify;
use utils::with_error::WithError;

/// Removes a named card from the revealed holding area.
fn take_revealed(game: &mut GameState, card: BirdCardId) -> Outcome {
    let index = game.revealed.iter().position(|&c| c == card);
    let index = index.with_error(|| format!("Card {card:?} is not revealed"))?;
    game.revealed.remove(index);
    OK
}

/// Removes a named card from a player's hand.
fn take_from_hand(game: &mut GameState, player: PlayerId, card: BirdCardId) -> Outcome {
    let hand = &mut game.player_mut(player).hand;
    let index = hand.iter().position(|&c| c == card);
    let index = index.with_error(|| format!("{player} does not hold card {card:?}"))?;
    hand.remove(index);
    OK
}

/// Draws cards into the player's hand: named tray cards first, then blind
/// deck draws, then named revealed cards. Returns the drawn sequence. The
/// tray is refilled to capacity at completion.
pub fn draw(
    game: &mut GameState,
    player: PlayerId,
    from_deck: u32,
    from_tray: &[BirdCardId],
    from_revealed: &[BirdCardId],
) -> Value<Vec<BirdCardId>> {
    let mut drawn = Vec::new();
    for &card in from_tray {
        verify!(game.bird_supply.take_from_tray(card), "Card {:?} is not in the tray", card);
        drawn.push(card);
    }
    for _ in 0..from_deck {
        match game.bird_supply.draw_top() {
            Some(card) => drawn.push(card),
            None => break,
        }
    }
    for &card in from_revealed {
        take_revealed(game, card)?;
        drawn.push(card);
    }
    game.player_mut(player).hand.extend(drawn.iter().copied());
    game.bird_supply.refill_tray();
    Ok(drawn)
}

/// Draws blind deck cards for several players; the tray is refilled once at
/// the end.
pub fn draw_all(
    game: &mut GameState,
    draws: &[(PlayerId, u32)],
) -> Value<Vec<(PlayerId, Vec<BirdCardId>)>> {
    let mut results = Vec::new();
    for &(player, count) in draws {
        let mut drawn = Vec::new();
        for _ in 0..count {
            match game.bird_supply.draw_top() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        game.player_mut(player).hand.extend(drawn.iter().copied());
        results.push((player, drawn));
    }
    game.bird_supply.refill_tray();
    Ok(results)
}

/// Discards cards from the hand, or from the revealed holding area.
pub fn discard(
    game: &mut GameState,
    player: PlayerId,
    cards: &[BirdCardId],
    from_revealed: bool,
) -> Outcome {
    for &card in cards {
        if from_revealed {
            take_revealed(game, card)?;
        } else {
            take_from_hand(game, player, card)?;
        }
        game.bird_supply.discard.push(card);
    }
    OK
}

/// Tucks cards under the target bird from the hand, the deck top, and the
/// revealed holding area. Returns the cards tucked from the deck.
pub fn tuck(
    game: &mut GameState,
    player: PlayerId,
    target: BirdInstanceId,
    from_hand: &[BirdCardId],
    from_deck: u32,
    from_revealed: &[BirdCardId],
) -> Value<Vec<BirdCardId>> {
    verify!(
        game.player(player).bird(target).is_some(),
        "{} has no bird instance {:?}",
        player,
        target
    );

    let mut tucked = Vec::new();
    for &card in from_hand {
        take_from_hand(game, player, card)?;
        tucked.push(card);
    }
    let mut tucked_from_deck = Vec::new();
    for _ in 0..from_deck {
        match game.bird_supply.draw_top() {
            Some(card) => {
                tucked.push(card);
                tucked_from_deck.push(card);
            }
            None => break,
        }
    }
    for &card in from_revealed {
        take_revealed(game, card)?;
        tucked.push(card);
    }

    let bird = game
        .player_mut(player)
        .bird_mut(target)
        .with_error(|| format!("{player} has no bird instance {target:?}"))?;
    bird.tucked.extend(tucked);
    Ok(tucked_from_deck)
}

/// Moves cards from the top of the deck into the revealed holding area.
pub fn reveal(game: &mut GameState, count: u32) -> Value<Vec<BirdCardId>> {
    let mut revealed = Vec::new();
    for _ in 0..count {
        match game.bird_supply.draw_top() {
            Some(card) => {
                game.revealed.push(card);
                revealed.push(card);
            }
            None => break,
        }
    }
    Ok(revealed)
}

/// Draws bonus cards from the bonus deck for inspection.
pub fn reveal_bonus(game: &mut GameState, count: u32) -> Value<Vec<BonusCardId>> {
    let mut revealed = Vec::new();
    for _ in 0..count {
        match game.bonus_supply.draw_top() {
            Some(card) => revealed.push(card),
            None => break,
        }
    }
    Ok(revealed)
}

/// Applies a bonus-card retention choice: kept cards join the player's set,
/// discarded cards leave it (or the reveal limbo) for the bonus discard.
pub fn keep_bonus(
    game: &mut GameState,
    player: PlayerId,
    kept: &[BonusCardId],
    discarded: &[BonusCardId],
) -> Outcome {
    for &card in kept {
        let state = game.player_mut(player);
        if !state.bonus_cards.contains(&card) {
            state.bonus_cards.push(card);
        }
    }
    for &card in discarded {
        let state = game.player_mut(player);
        if let Some(index) = state.bonus_cards.iter().position(|&c| c == card) {
            state.bonus_cards.remove(index);
        }
        game.bonus_supply.discard.push(card);
    }
    OK
}
