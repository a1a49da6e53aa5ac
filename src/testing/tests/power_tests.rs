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

use data::actions::turn_action::{TurnAction, TurnActionChoice};
use data::card_definitions::power_definition::PowerDefinition;
use data::core::primitives::{
    BirdCardId, DieFace, DieSelection, FoodMap, FoodType, Habitat, PlayerId,
};
use data::effects::effect::{Effect, SkipReason};
use data::events::engine_event::EngineEvent;
use data::prompts::choice::{DiceChoice, PlayBirdChoice, PromptChoice};
use rules::powers::processor;
use testing::test_game::{TestGame, TestPrompter};

// Dataset cards used by these scenarios.
const NIGHT_HERON: BirdCardId = BirdCardId(6);
const COMMON_YELLOWTHROAT: BirdCardId = BirdCardId(11);
const MALLARD: BirdCardId = BirdCardId(20);
const NORTHERN_CARDINAL: BirdCardId = BirdCardId(22);
const NORTHERN_MOCKINGBIRD: BirdCardId = BirdCardId(23);
const PINE_SISKIN: BirdCardId = BirdCardId(25);
const RED_HEADED_WOODPECKER: BirdCardId = BirdCardId(27);
const AMERICAN_GOLDFINCH: BirdCardId = BirdCardId(1);

const ALICE: PlayerId = PlayerId(0);
const BOB: PlayerId = PlayerId(1);

fn power_of(game: &TestGame, card: BirdCardId) -> PowerDefinition {
    game.registry.bird(card).expect("Card exists").power.clone().expect("Card has a power")
}

fn seed_die(resolved: FoodType) -> DieSelection {
    DieSelection::plain(match resolved {
        FoodType::Seed => DieFace::Seed,
        FoodType::Fish => DieFace::Fish,
        FoodType::Fruit => DieFace::Fruit,
        FoodType::Invertebrate => DieFace::Invertebrate,
        FoodType::Rodent => DieFace::Rodent,
        FoodType::Wild => unreachable!(),
    })
    .expect("Single-food face")
}

#[tokio::test]
async fn feeder_matching_power_collects_all_seed_dice() {
    let mut game = TestGame::new(11, 2);
    let siskin = game.place_bird(ALICE, Habitat::Forest, PINE_SISKIN);
    game.set_feeder(vec![
        DieFace::Seed,
        DieFace::Seed,
        DieFace::InvertebrateSeed,
        DieFace::Fish,
        DieFace::Fruit,
    ]);
    let power = power_of(&game, PINE_SISKIN);

    let mut prompter = TestPrompter::with_responses(vec![
        PromptChoice::Activate { activate: true },
        PromptChoice::Dice(DiceChoice {
            reroll: false,
            selections: vec![
                seed_die(FoodType::Seed),
                seed_die(FoodType::Seed),
                DieSelection { face: DieFace::InvertebrateSeed, resolved: FoodType::Seed },
            ],
        }),
    ]);
    processor::run_power(&mut game.game, game.registry, &mut prompter, ALICE, siskin, &power, None)
        .await
        .expect("Power runs");

    // One starting seed plus three from the feeder.
    assert_eq!(game.game.player(ALICE).food[FoodType::Seed], 4);
    let mut feeder = game.game.birdfeeder.dice().to_vec();
    feeder.sort();
    assert_eq!(feeder, vec![DieFace::Fish, DieFace::Fruit]);
}

#[tokio::test]
async fn pink_power_triggers_after_wetland_play() {
    let mut game = TestGame::new(13, 2);
    game.place_bird(BOB, Habitat::Wetland, NIGHT_HERON);
    game.give_card(ALICE, MALLARD);
    game.game.active_player = ALICE;

    let mut food = FoodMap::default();
    food[FoodType::Seed] = 1;
    let mut prompter = TestPrompter::with_responses(vec![
        PromptChoice::PlayBird(PlayBirdChoice {
            card: MALLARD,
            habitat: Habitat::Wetland,
            food,
            egg_payment: vec![],
        }),
        // Mallard's when-played power lays two eggs on itself.
        PromptChoice::Activate { activate: true },
        // Bob's night-heron reacts to the wetland play.
        PromptChoice::Activate { activate: true },
    ]);

    let events = processor::run_turn_action(
        &mut game.game,
        game.registry,
        &mut prompter,
        ALICE,
        TurnActionChoice { action: TurnAction::PlayBird, take_bonus: false },
    )
    .await
    .expect("Action runs");
    processor::dispatch_events(&mut game.game, game.registry, &mut prompter, events, true)
        .await
        .expect("Events dispatch");

    assert_eq!(game.game.player(BOB).food[FoodType::Fish], 2);
}

#[tokio::test]
async fn declined_pink_power_changes_nothing() {
    let mut game = TestGame::new(13, 2);
    let heron = game.place_bird(BOB, Habitat::Wetland, NIGHT_HERON);
    game.game.active_player = ALICE;

    let mut prompter =
        TestPrompter::with_responses(vec![PromptChoice::Activate { activate: false }]);
    let event = EngineEvent::BirdPlayed { player: ALICE, instance: heron, habitat: Habitat::Wetland };
    processor::dispatch_events(&mut game.game, game.registry, &mut prompter, vec![event], true)
        .await
        .expect("Events dispatch");

    assert_eq!(game.game.player(BOB).food[FoodType::Fish], 1);
    let declined = game.game.effect_log.iter().any(|effect| {
        matches!(
            effect,
            Effect::ActivatePower {
                activated: false,
                skip: Some(SkipReason::AgentDeclined),
                ..
            }
        )
    });
    assert!(declined);
}

#[tokio::test]
async fn forfeited_pink_owner_does_not_trigger() {
    let mut game = TestGame::new(13, 2);
    let heron = game.place_bird(BOB, Habitat::Wetland, NIGHT_HERON);
    game.game.player_mut(BOB).forfeited = true;
    game.game.active_player = ALICE;

    let mut prompter = TestPrompter::default();
    let event = EngineEvent::BirdPlayed { player: ALICE, instance: heron, habitat: Habitat::Wetland };
    processor::dispatch_events(&mut game.game, game.registry, &mut prompter, vec![event], true)
        .await
        .expect("Events dispatch");

    assert!(prompter.prompts.is_empty());
    assert_eq!(game.game.player(BOB).food[FoodType::Fish], 1);
}

#[tokio::test]
async fn brown_chain_runs_right_to_left() {
    let mut game = TestGame::new(17, 2);
    let woodpecker = game.place_bird(ALICE, Habitat::Forest, RED_HEADED_WOODPECKER);
    game.place_bird(ALICE, Habitat::Forest, NORTHERN_CARDINAL);
    game.game.active_player = ALICE;

    let mut prompter = TestPrompter::with_responses(vec![
        PromptChoice::Activate { activate: true },
        PromptChoice::Activate { activate: true },
    ]);
    let event = EngineEvent::HabitatActivated { player: ALICE, habitat: Habitat::Forest };
    processor::dispatch_events(&mut game.game, game.registry, &mut prompter, vec![event], true)
        .await
        .expect("Events dispatch");

    let activations: Vec<_> = game
        .game
        .effect_log
        .iter()
        .filter_map(|effect| match effect {
            Effect::ActivatePower { handler, activated: true, .. } => Some(handler.clone()),
            _ => None,
        })
        .collect();
    // The cardinal sits in the rightmost occupied column and fires first.
    assert_eq!(activations, vec!["gain_food_from_supply", "cache_food_from_supply"]);
    assert_eq!(game.game.player(ALICE).food[FoodType::Fruit], 2);
    let cached = game.game.player(ALICE).bird(woodpecker).expect("On board").cached_total();
    assert_eq!(cached, 1);
}

#[tokio::test]
async fn repeat_power_reruns_another_brown_bird() {
    let mut game = TestGame::new(19, 2);
    let goldfinch = game.place_bird(ALICE, Habitat::Grassland, AMERICAN_GOLDFINCH);
    let mockingbird = game.place_bird(ALICE, Habitat::Grassland, NORTHERN_MOCKINGBIRD);
    let power = power_of(&game, NORTHERN_MOCKINGBIRD);

    let mut prompter = TestPrompter::with_responses(vec![
        PromptChoice::Activate { activate: true },
        PromptChoice::Bird { instance: Some(goldfinch) },
        PromptChoice::Activate { activate: true },
    ]);
    processor::run_power(
        &mut game.game,
        game.registry,
        &mut prompter,
        ALICE,
        mockingbird,
        &power,
        None,
    )
    .await
    .expect("Power runs");

    assert_eq!(game.game.player(ALICE).food[FoodType::Seed], 2);
    assert!(game
        .game
        .effect_log
        .iter()
        .any(|effect| matches!(effect, Effect::RepeatBrownPower { target, .. } if *target == goldfinch)));
}

#[tokio::test]
async fn deferred_discard_fires_at_end_of_turn() {
    let mut game = TestGame::new(23, 2);
    let yellowthroat = game.place_bird(ALICE, Habitat::Grassland, COMMON_YELLOWTHROAT);
    let power = power_of(&game, COMMON_YELLOWTHROAT);
    let hand_before = game.game.player(ALICE).hand.len();

    let mut prompter =
        TestPrompter::with_responses(vec![PromptChoice::Activate { activate: true }]);
    processor::run_power(
        &mut game.game,
        game.registry,
        &mut prompter,
        ALICE,
        yellowthroat,
        &power,
        None,
    )
    .await
    .expect("Power runs");

    assert_eq!(game.game.player(ALICE).hand.len(), hand_before + 1);
    assert_eq!(game.game.deferred.len(), 1);

    let continuation = game.game.deferred.pop_front().expect("Continuation queued");
    let discard = game.game.player(ALICE).hand[0];
    let mut prompter = TestPrompter::with_responses(vec![PromptChoice::Cards(
        data::prompts::choice::CardsChoice { cards: vec![discard], from_deck: 0 },
    )]);
    processor::run_continuation(&mut game.game, game.registry, &mut prompter, &continuation)
        .await
        .expect("Continuation runs");
    assert_eq!(game.game.player(ALICE).hand.len(), hand_before);
}

#[tokio::test]
async fn deferred_discard_with_empty_hand_is_a_no_op() {
    let mut game = TestGame::new(23, 2);
    let yellowthroat = game.place_bird(ALICE, Habitat::Grassland, COMMON_YELLOWTHROAT);
    let power = power_of(&game, COMMON_YELLOWTHROAT);

    let mut prompter =
        TestPrompter::with_responses(vec![PromptChoice::Activate { activate: true }]);
    processor::run_power(
        &mut game.game,
        game.registry,
        &mut prompter,
        ALICE,
        yellowthroat,
        &power,
        None,
    )
    .await
    .expect("Power runs");

    game.discard_hand(ALICE);
    let continuation = game.game.deferred.pop_front().expect("Continuation queued");
    let mut prompter = TestPrompter::default();
    processor::run_continuation(&mut game.game, game.registry, &mut prompter, &continuation)
        .await
        .expect("Continuation runs without discarding");
    assert!(prompter.prompts.is_empty());
}

#[tokio::test]
async fn gain_food_refills_an_empty_feeder_and_skips_missing_bonus() {
    let mut game = TestGame::new(29, 2);
    game.discard_hand(ALICE);
    game.set_feeder(vec![]);
    game.game.active_player = ALICE;

    // Pick whichever die the refill produced.
    let mut prompter = TestPrompter::with_responder(|state, _prompt| {
        let face = state.birdfeeder.dice()[0];
        let resolved = face.food_options().iter().next().expect("Face pays something");
        PromptChoice::Dice(DiceChoice {
            reroll: false,
            selections: vec![DieSelection { face, resolved }],
        })
    });

    let events = processor::run_turn_action(
        &mut game.game,
        game.registry,
        &mut prompter,
        ALICE,
        TurnActionChoice { action: TurnAction::GainFood, take_bonus: true },
    )
    .await
    .expect("Action runs");
    processor::dispatch_events(&mut game.game, game.registry, &mut prompter, events, true)
        .await
        .expect("Events dispatch");

    // The conversion prerequisite (a card to discard) was missing, so only
    // the single base die was gathered after an automatic refill.
    assert!(game.game.effect_log.iter().any(|e| matches!(e, Effect::RefillBirdfeeder { .. })));
    assert!(!game.game.effect_log.iter().any(|e| matches!(e, Effect::DiscardCards { .. })));
    let total_food: u32 = game.game.player(ALICE).food.values().sum();
    assert_eq!(total_food, 6);
}
