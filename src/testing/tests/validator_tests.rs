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
use data::effects::effect::EggPlacement;
use data::prompts::choice::{CardsChoice, DiceChoice, PlayBirdChoice, PromptChoice};
use data::prompts::prompt::{
    CardSource, EggSlot, PlaceEggsPrompt, PlayBirdPrompt, PlayableBird, Prompt, PromptKind,
    SelectCardsPrompt, SelectDicePrompt,
};
use enumset::EnumSet;
use rules::legality::validators;
use testing::test_game::TestGame;

const MALLARD: BirdCardId = BirdCardId(20);
const HOUSE_WREN: BirdCardId = BirdCardId(18);
const ALICE: PlayerId = PlayerId(0);

fn dice_prompt(count: u32, reroll_allowed: bool) -> Prompt {
    Prompt {
        player: ALICE,
        text: "Take dice".to_string(),
        kind: PromptKind::SelectDice(SelectDicePrompt {
            count,
            faces: EnumSet::all(),
            reroll_allowed,
        }),
    }
}

#[tokio::test]
async fn reroll_is_accepted_only_for_a_homogeneous_feeder() {
    let mut game = TestGame::new(71, 2);
    let reroll = PromptChoice::Dice(DiceChoice { reroll: true, selections: vec![] });

    game.set_feeder(vec![DieFace::Seed, DieFace::Seed, DieFace::Seed]);
    assert!(validators::validate_choice(
        &game.game,
        game.registry,
        &dice_prompt(1, true),
        &reroll
    )
    .is_ok());

    game.set_feeder(vec![DieFace::Seed, DieFace::Fish, DieFace::Seed]);
    assert!(validators::validate_choice(
        &game.game,
        game.registry,
        &dice_prompt(1, true),
        &reroll
    )
    .is_err());

    // An empty feeder never offers a reroll.
    game.set_feeder(vec![]);
    assert!(validators::validate_choice(
        &game.game,
        game.registry,
        &dice_prompt(1, true),
        &reroll
    )
    .is_err());
}

#[tokio::test]
async fn dice_selections_must_exist_and_resolve_legally() {
    let mut game = TestGame::new(73, 2);
    game.set_feeder(vec![DieFace::Seed, DieFace::InvertebrateSeed]);

    let absent = PromptChoice::Dice(DiceChoice {
        reroll: false,
        selections: vec![DieSelection::plain(DieFace::Fish).unwrap()],
    });
    assert!(validators::validate_choice(
        &game.game,
        game.registry,
        &dice_prompt(1, false),
        &absent
    )
    .is_err());

    let bad_resolution = PromptChoice::Dice(DiceChoice {
        reroll: false,
        selections: vec![DieSelection {
            face: DieFace::InvertebrateSeed,
            resolved: FoodType::Fish,
        }],
    });
    assert!(validators::validate_choice(
        &game.game,
        game.registry,
        &dice_prompt(1, false),
        &bad_resolution
    )
    .is_err());

    let dual_as_seed = PromptChoice::Dice(DiceChoice {
        reroll: false,
        selections: vec![DieSelection {
            face: DieFace::InvertebrateSeed,
            resolved: FoodType::Seed,
        }],
    });
    assert!(validators::validate_choice(
        &game.game,
        game.registry,
        &dice_prompt(1, false),
        &dual_as_seed
    )
    .is_ok());
}

#[tokio::test]
async fn egg_placements_respect_totals_and_capacity() {
    let mut game = TestGame::new(79, 2);
    let wren = game.place_bird(ALICE, Habitat::Forest, HOUSE_WREN);
    let prompt = Prompt {
        player: ALICE,
        text: "Lay eggs".to_string(),
        kind: PromptKind::PlaceEggs(PlaceEggsPrompt {
            count: 2,
            eligible: vec![EggSlot { instance: wren, limit: 2 }],
        }),
    };

    let valid =
        PromptChoice::Eggs { placements: vec![EggPlacement { instance: wren, count: 2 }] };
    assert!(validators::validate_choice(&game.game, game.registry, &prompt, &valid).is_ok());

    let over_limit =
        PromptChoice::Eggs { placements: vec![EggPlacement { instance: wren, count: 3 }] };
    assert!(
        validators::validate_choice(&game.game, game.registry, &prompt, &over_limit).is_err()
    );

    let wrong_total =
        PromptChoice::Eggs { placements: vec![EggPlacement { instance: wren, count: 1 }] };
    assert!(
        validators::validate_choice(&game.game, game.registry, &prompt, &wrong_total).is_err()
    );
}

#[tokio::test]
async fn card_selections_stay_within_the_offer() {
    let game = TestGame::new(83, 2);
    let offered = game.game.bird_supply.tray.clone();
    let prompt = Prompt {
        player: ALICE,
        text: "Draw".to_string(),
        kind: PromptKind::SelectCards(SelectCardsPrompt {
            source: CardSource::Tray,
            count: 1,
            options: offered.clone(),
            deck_available: 0,
            allow_fewer: false,
        }),
    };

    let valid = PromptChoice::Cards(CardsChoice { cards: vec![offered[0]], from_deck: 0 });
    assert!(validators::validate_choice(&game.game, game.registry, &prompt, &valid).is_ok());

    // A card that was never offered, e.g. from the deck's hidden order.
    let unoffered_card = *game.game.bird_supply.deck.first().expect("Deck is not empty");
    let unoffered =
        PromptChoice::Cards(CardsChoice { cards: vec![unoffered_card], from_deck: 0 });
    assert!(
        validators::validate_choice(&game.game, game.registry, &prompt, &unoffered).is_err()
    );

    let blind_draw = PromptChoice::Cards(CardsChoice { cards: vec![], from_deck: 1 });
    assert!(
        validators::validate_choice(&game.game, game.registry, &prompt, &blind_draw).is_err()
    );
}

#[tokio::test]
async fn play_bird_validates_habitat_column_and_payment() {
    let mut game = TestGame::new(89, 2);
    game.give_card(ALICE, MALLARD);
    let prompt = Prompt {
        player: ALICE,
        text: "Play a bird".to_string(),
        kind: PromptKind::PlayBird(PlayBirdPrompt {
            options: vec![PlayableBird {
                card: MALLARD,
                habitats: EnumSet::only(Habitat::Wetland),
            }],
        }),
    };

    let mut seed = FoodMap::default();
    seed[FoodType::Seed] = 1;
    let valid = PromptChoice::PlayBird(PlayBirdChoice {
        card: MALLARD,
        habitat: Habitat::Wetland,
        food: seed,
        egg_payment: vec![],
    });
    assert!(validators::validate_choice(&game.game, game.registry, &prompt, &valid).is_ok());

    let wrong_habitat = PromptChoice::PlayBird(PlayBirdChoice {
        card: MALLARD,
        habitat: Habitat::Forest,
        food: seed,
        egg_payment: vec![],
    });
    assert!(
        validators::validate_choice(&game.game, game.registry, &prompt, &wrong_habitat).is_err()
    );

    let mut fish = FoodMap::default();
    fish[FoodType::Fish] = 1;
    let wrong_food = PromptChoice::PlayBird(PlayBirdChoice {
        card: MALLARD,
        habitat: Habitat::Wetland,
        food: fish,
        egg_payment: vec![],
    });
    assert!(
        validators::validate_choice(&game.game, game.registry, &prompt, &wrong_food).is_err()
    );

    // Fill the wetland row: the play is rejected at validation.
    for card in [BirdCardId(6), BirdCardId(16), BirdCardId(24), BirdCardId(31), BirdCardId(35)] {
        game.place_bird(ALICE, Habitat::Wetland, card);
    }
    assert!(validators::validate_choice(&game.game, game.registry, &prompt, &valid).is_err());
}
