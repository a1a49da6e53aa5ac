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

use data::core::primitives::{BirdCardId, FoodType, Habitat, PlayerId};
use data::prompts::starting_hand::{StartingHandChoice, StartingHandPrompt};
use rules::legality::validators;
use rules::queries::views;
use testing::test_game::TestGame;

const HOUSE_WREN: BirdCardId = BirdCardId(18);
const ALICE: PlayerId = PlayerId(0);
const BOB: PlayerId = PlayerId(1);

#[tokio::test]
async fn views_hide_opponent_hands_and_deck_order() {
    let mut game = TestGame::new(211, 3);
    let wren = game.place_bird(BOB, Habitat::Forest, HOUSE_WREN);
    let tucked: Vec<_> = (0..2).filter_map(|_| game.game.bird_supply.deck.pop()).collect();
    game.game.player_mut(BOB).bird_mut(wren).unwrap().tucked.extend(tucked);

    let view = views::build(&game.game, ALICE);

    assert_eq!(view.viewer, ALICE);
    assert_eq!(view.hand, game.game.player(ALICE).hand);
    assert_eq!(view.deck_size as usize, game.game.bird_supply.deck_size());

    // Opponents appear clockwise starting left of the viewer, with hand
    // sizes but no card identities.
    assert_eq!(view.opponents.len(), 2);
    assert_eq!(view.opponents[0].player, BOB);
    assert_eq!(view.opponents[0].hand_size as usize, game.game.player(BOB).hand.len());

    // Tucked counts are public, tucked identities are not.
    let slot = view.opponents[0].board.bird(wren).expect("Bird is visible");
    assert_eq!(slot.tucked, 2);
    assert!(slot.tucked_cards.is_empty());
}

#[tokio::test]
async fn own_board_shows_tucked_identities() {
    let mut game = TestGame::new(223, 2);
    let wren = game.place_bird(ALICE, Habitat::Forest, HOUSE_WREN);
    let tucked: Vec<_> = (0..2).filter_map(|_| game.game.bird_supply.deck.pop()).collect();
    game.game.player_mut(ALICE).bird_mut(wren).unwrap().tucked.extend(tucked.clone());

    let view = views::build(&game.game, ALICE);
    let slot = view.board.bird(wren).expect("Bird is visible");
    assert_eq!(slot.tucked_cards, tucked);
}

#[tokio::test]
async fn views_expose_the_shared_surfaces() {
    let game = TestGame::new(227, 2);
    let view = views::build(&game.game, BOB);

    assert_eq!(view.tray, game.game.bird_supply.tray);
    assert_eq!(view.birdfeeder, game.game.birdfeeder.dice().to_vec());
    assert_eq!(view.goals, game.game.goals);
    assert_eq!(view.round, game.game.round);
    assert_eq!(view.active_player, game.game.active_player);
}

#[tokio::test]
async fn starting_hand_choices_are_validated() {
    let game = TestGame::new(229, 2);
    let state = game.game.player(ALICE);
    let prompt =
        StartingHandPrompt { birds: state.hand.clone(), bonus_cards: state.bonus_cards.clone() };

    let keep_two = StartingHandChoice {
        keep_birds: prompt.birds[..2].to_vec(),
        keep_bonus: prompt.bonus_cards[0],
        discard_food: vec![FoodType::Seed, FoodType::Fish],
    };
    assert!(validators::validate_starting_hand(&game.game, ALICE, &prompt, &keep_two).is_ok());

    // One discard short for two kept birds.
    let short_discard = StartingHandChoice {
        keep_birds: prompt.birds[..2].to_vec(),
        keep_bonus: prompt.bonus_cards[0],
        discard_food: vec![FoodType::Seed],
    };
    assert!(
        validators::validate_starting_hand(&game.game, ALICE, &prompt, &short_discard).is_err()
    );

    // A bird that was never dealt.
    let deck_card = *game.game.bird_supply.deck.first().expect("Deck is not empty");
    let undealt = StartingHandChoice {
        keep_birds: vec![deck_card],
        keep_bonus: prompt.bonus_cards[0],
        discard_food: vec![FoodType::Seed],
    };
    assert!(validators::validate_starting_hand(&game.game, ALICE, &prompt, &undealt).is_err());

    // Duplicate starting food discards the player does not hold.
    let double_seed = StartingHandChoice {
        keep_birds: prompt.birds[..2].to_vec(),
        keep_bonus: prompt.bonus_cards[0],
        discard_food: vec![FoodType::Seed, FoodType::Seed],
    };
    assert!(
        validators::validate_starting_hand(&game.game, ALICE, &prompt, &double_seed).is_err()
    );
}
