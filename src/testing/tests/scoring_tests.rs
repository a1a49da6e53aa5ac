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
use data::core::primitives::{BirdCardId, BonusCardId, FoodType, Habitat, PlayerId};
use rules::queries::scoring;
use testing::test_game::TestGame;

const BARN_OWL: BirdCardId = BirdCardId(3);
const RED_TAILED_HAWK: BirdCardId = BirdCardId(28);
const AMERICAN_KESTREL: BirdCardId = BirdCardId(36);
const MALLARD: BirdCardId = BirdCardId(20);

const RODENTOLOGIST: BonusCardId = BonusCardId(5);
const BREEDING_MANAGER: BonusCardId = BonusCardId(2);
const VISIONARY_LEADER: BonusCardId = BonusCardId(3);
const ECOLOGIST: BonusCardId = BonusCardId(4);

const ALICE: PlayerId = PlayerId(0);
const BOB: PlayerId = PlayerId(1);

#[tokio::test]
async fn score_sheet_sums_every_component() {
    let mut game = TestGame::new(51, 2);
    for player in &mut game.game.players {
        player.bonus_cards.clear();
        player.hand.clear();
    }

    // Barn Owl (5) and Red-tailed Hawk (6) with eggs, cache and tucked
    // cards.
    let owl = game.place_bird(ALICE, Habitat::Forest, BARN_OWL);
    let hawk = game.place_bird(ALICE, Habitat::Grassland, RED_TAILED_HAWK);
    {
        let state = game.game.player_mut(ALICE);
        state.bird_mut(owl).unwrap().eggs = 2;
        state.bird_mut(hawk).unwrap().cached_food[FoodType::Rodent] = 1;
    }
    let tucked: Vec<_> =
        (0..2).filter_map(|_| game.game.bird_supply.deck.pop()).collect();
    game.game.player_mut(ALICE).bird_mut(hawk).unwrap().tucked.extend(tucked);
    // Two rodent eaters: the Rodentologist's 1-2 tier pays 3.
    game.game.player_mut(ALICE).bonus_cards.push(RODENTOLOGIST);

    let sheets = scoring::score_sheets(&game.game, game.registry).expect("Scores compute");
    let alice = &sheets[ALICE.seat()];
    assert_eq!(alice.bird_points, 11);
    assert_eq!(alice.egg_points, 2);
    assert_eq!(alice.cached_food_points, 1);
    assert_eq!(alice.tucked_points, 2);
    assert_eq!(alice.bonus_points, 3);
    assert_eq!(alice.total(), 19);
}

#[tokio::test]
async fn winner_ties_break_to_the_earlier_seat() {
    let mut game = TestGame::new(53, 2);
    for player in &mut game.game.players {
        player.bonus_cards.clear();
        player.hand.clear();
    }
    let sheets = scoring::score_sheets(&game.game, game.registry).expect("Scores compute");
    assert_eq!(sheets[0].total(), sheets[1].total());
    assert_eq!(scoring::winner(&sheets).expect("A winner exists"), ALICE);
}

#[tokio::test]
async fn forfeited_players_never_win() {
    let mut game = TestGame::new(57, 2);
    for player in &mut game.game.players {
        player.bonus_cards.clear();
        player.hand.clear();
    }
    // Alice has the higher score but forfeited.
    game.place_bird(ALICE, Habitat::Forest, BARN_OWL);
    game.game.player_mut(ALICE).forfeited = true;

    let sheets = scoring::score_sheets(&game.game, game.registry).expect("Scores compute");
    assert!(sheets[ALICE.seat()].total() > sheets[BOB.seat()].total());
    assert_eq!(scoring::winner(&sheets).expect("A winner exists"), BOB);
}

#[tokio::test]
async fn bonus_criteria_count_the_right_birds() {
    let mut game = TestGame::new(59, 2);
    let owl = game.place_bird(ALICE, Habitat::Forest, BARN_OWL);
    game.place_bird(ALICE, Habitat::Grassland, AMERICAN_KESTREL);
    let mallard = game.place_bird(ALICE, Habitat::Wetland, MALLARD);
    game.game.player_mut(ALICE).bird_mut(owl).unwrap().eggs = 2;
    game.game.player_mut(ALICE).bird_mut(mallard).unwrap().eggs = 4;

    let state = game.game.player(ALICE);
    let tag_count = scoring::bonus_count(
        state,
        game.registry,
        &BonusCriterion::Tag("rodent_eater".to_string()),
    )
    .expect("Counts");
    assert_eq!(tag_count, 2);

    let heavy_nests = scoring::bonus_count(
        state,
        game.registry,
        &BonusCriterion::BirdsWithEggsAtLeast(4),
    )
    .expect("Counts");
    assert_eq!(heavy_nests, 1);

    let any_eggs = scoring::bonus_count(
        state,
        game.registry,
        &BonusCriterion::BirdsWithEggsAtLeast(1),
    )
    .expect("Counts");
    assert_eq!(any_eggs, 2);

    // One bird per habitat: the smallest habitat holds one bird.
    let smallest = scoring::bonus_count(
        state,
        game.registry,
        &BonusCriterion::BirdsInSmallestHabitat,
    )
    .expect("Counts");
    assert_eq!(smallest, 1);
}

#[tokio::test]
async fn tiered_bonus_cards_score_their_bracket() {
    let game = TestGame::new(61, 2);
    let breeding = game.registry.bonus(BREEDING_MANAGER).expect("Card exists");
    assert_eq!(breeding.scoring.score(0), 0);
    assert_eq!(breeding.scoring.score(2), 2);
    assert_eq!(breeding.scoring.score(3), 6);

    let visionary = game.registry.bonus(VISIONARY_LEADER).expect("Card exists");
    assert_eq!(visionary.scoring.score(1), 0);
    assert_eq!(visionary.scoring.score(3), 3);
    assert_eq!(visionary.scoring.score(7), 6);

    let ecologist = game.registry.bonus(ECOLOGIST).expect("Card exists");
    assert_eq!(ecologist.scoring.score(3), 6);
}
