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

use data::core::primitives::{
    BirdCardId, DieFace, DieSelection, FoodMap, FoodType, Habitat, PlayerId,
};
use data::effects::effect::{Effect, EggPlacement, FoodSource};
use data::game_states::card_piles::TRAY_SIZE;
use rules::mutations::apply;
use rules::queries::invariants;
use testing::test_game::TestGame;

const HOUSE_WREN: BirdCardId = BirdCardId(18);
const MALLARD: BirdCardId = BirdCardId(20);
const ALICE: PlayerId = PlayerId(0);

#[tokio::test]
async fn feeder_gain_removes_the_selected_dice() {
    let mut game = TestGame::new(101, 2);
    game.set_feeder(vec![DieFace::Seed, DieFace::Fish]);

    let mut food = FoodMap::default();
    food[FoodType::Seed] = 1;
    let mut effect = Effect::GainFood {
        player: ALICE,
        food,
        source: FoodSource::Birdfeeder,
        dice: vec![DieSelection::plain(DieFace::Seed).unwrap()],
    };
    apply::apply(&mut game.game, game.registry, &mut effect).expect("Gain applies");
    assert_eq!(game.game.player(ALICE).food[FoodType::Seed], 2);
    assert_eq!(game.game.birdfeeder.dice(), &[DieFace::Fish]);

    // The selected die is no longer present.
    let mut again = Effect::GainFood {
        player: ALICE,
        food,
        source: FoodSource::Birdfeeder,
        dice: vec![DieSelection::plain(DieFace::Seed).unwrap()],
    };
    assert!(apply::apply(&mut game.game, game.registry, &mut again).is_err());
}

#[tokio::test]
async fn egg_capacity_is_enforced() {
    let mut game = TestGame::new(103, 2);
    let wren = game.place_bird(ALICE, Habitat::Forest, HOUSE_WREN);

    let mut fill = Effect::LayEggs {
        player: ALICE,
        placements: vec![EggPlacement { instance: wren, count: 4 }],
    };
    apply::apply(&mut game.game, game.registry, &mut fill).expect("Within capacity");

    let mut overflow = Effect::LayEggs {
        player: ALICE,
        placements: vec![EggPlacement { instance: wren, count: 1 }],
    };
    assert!(apply::apply(&mut game.game, game.registry, &mut overflow).is_err());
    assert_eq!(game.game.player(ALICE).bird(wren).unwrap().eggs, 4);
}

#[tokio::test]
async fn drawing_from_the_tray_refills_it() {
    let mut game = TestGame::new(107, 2);
    let taken = game.game.bird_supply.tray[0];
    let deck_before = game.game.bird_supply.deck_size();

    let mut effect = Effect::DrawCards {
        player: ALICE,
        from_deck: 1,
        from_tray: vec![taken],
        from_revealed: vec![],
        drawn: vec![],
    };
    apply::apply(&mut game.game, game.registry, &mut effect).expect("Draw applies");

    let Effect::DrawCards { drawn, .. } = &effect else { unreachable!() };
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0], taken);
    assert!(game.game.player(ALICE).hand.contains(&taken));
    assert_eq!(game.game.bird_supply.tray.len(), TRAY_SIZE);
    // One blind draw plus one tray refill.
    assert_eq!(game.game.bird_supply.deck_size(), deck_before - 2);

    invariants::check(&game.game, game.registry).expect("Conservation holds");
}

#[tokio::test]
async fn tucking_from_the_deck_populates_the_result() {
    let mut game = TestGame::new(109, 2);
    let wren = game.place_bird(ALICE, Habitat::Forest, HOUSE_WREN);

    let mut effect = Effect::TuckCards {
        player: ALICE,
        target: wren,
        from_hand: vec![],
        from_deck: 2,
        from_revealed: vec![],
        tucked_from_deck: vec![],
    };
    apply::apply(&mut game.game, game.registry, &mut effect).expect("Tuck applies");

    let Effect::TuckCards { tucked_from_deck, .. } = &effect else { unreachable!() };
    assert_eq!(tucked_from_deck.len(), 2);
    assert_eq!(game.game.player(ALICE).bird(wren).unwrap().tucked, *tucked_from_deck);
    invariants::check(&game.game, game.registry).expect("Conservation holds");
}

#[tokio::test]
async fn playing_a_bird_pays_costs_and_takes_the_leftmost_slot() {
    let mut game = TestGame::new(113, 2);
    game.give_card(ALICE, MALLARD);

    let mut seed = FoodMap::default();
    seed[FoodType::Seed] = 1;
    let mut effect = Effect::PlayBird {
        player: ALICE,
        card: MALLARD,
        habitat: Habitat::Wetland,
        food_paid: seed,
        egg_payment: vec![],
        instance: None,
        column: None,
    };
    apply::apply(&mut game.game, game.registry, &mut effect).expect("Play applies");

    let Effect::PlayBird { instance: Some(instance), column: Some(column), .. } = effect else {
        unreachable!()
    };
    assert_eq!(column, 0);
    assert_eq!(game.game.player(ALICE).food[FoodType::Seed], 0);
    assert!(game.game.player(ALICE).bird(instance).is_some());
    assert!(!game.game.player(ALICE).hand.contains(&MALLARD));
    invariants::check(&game.game, game.registry).expect("Conservation holds");
}

#[tokio::test]
async fn insufficient_food_discard_is_an_invariant_violation() {
    let mut game = TestGame::new(127, 2);
    let mut food = FoodMap::default();
    food[FoodType::Fish] = 3;
    let mut effect = Effect::DiscardFood { player: ALICE, food };
    assert!(apply::apply(&mut game.game, game.registry, &mut effect).is_err());
}

#[tokio::test]
async fn moving_a_bird_keeps_rows_contiguous() {
    let mut game = TestGame::new(131, 2);
    let first = game.place_bird(ALICE, Habitat::Forest, HOUSE_WREN);
    let second = game.place_bird(ALICE, Habitat::Forest, BirdCardId(5));

    let mut effect = Effect::MoveBird {
        player: ALICE,
        instance: first,
        from: Habitat::Forest,
        to: Habitat::Grassland,
        column: None,
    };
    apply::apply(&mut game.game, game.registry, &mut effect).expect("Move applies");

    let board = &game.game.player(ALICE).board;
    assert_eq!(board.row(Habitat::Forest).bird_count(), 1);
    assert_eq!(board.row(Habitat::Forest).slots()[0].as_ref().unwrap().id, second);
    assert_eq!(board.row(Habitat::Grassland).slots()[0].as_ref().unwrap().id, first);
    invariants::check(&game.game, game.registry).expect("Rows stay contiguous");
}
