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

//! Per-prompt-variant validators. A rejection returns a human-readable
//! reason which becomes part of the reprompt hint; three rejections forfeit
//! the player.

use std::collections::HashMap;

use data::actions::turn_action::{TurnAction, TurnActionChoice};
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{BirdCardId, BonusCardId, DieFace, FoodMap, PlayerId};
use data::effects::effect::EggPlacement;
use data::game_states::game_state::GameState;
use data::prompts::choice::{CardsChoice, DiceChoice, PlayBirdChoice, PromptChoice};
use data::prompts::prompt::{
    CardSource, EggSlot, PlayBirdPrompt, Prompt, PromptKind, RemoveEggsPrompt,
    SelectBonusCardsPrompt, SelectCardsPrompt, SelectDicePrompt, SelectFoodPrompt,
};
use data::prompts::starting_hand::{StartingHandChoice, StartingHandPrompt};

use crate::queries::costs;

/// Validates an agent choice against the prompt that solicited it and the
/// current state.
pub fn validate_choice(
    game: &GameState,
    registry: &CardRegistry,
    prompt: &Prompt,
    choice: &PromptChoice,
) -> Result<(), String> {
    if prompt.kind.tag() != choice.tag() {
        return Err(format!(
            "Expected a {} choice, got {}",
            prompt.kind.tag(),
            choice.tag()
        ));
    }
    match (&prompt.kind, choice) {
        (PromptKind::Activate(_), PromptChoice::Activate { .. }) => Ok(()),
        (PromptKind::SelectFood(p), PromptChoice::Food { food }) => {
            validate_food(p, food)
        }
        (PromptKind::SelectDice(p), PromptChoice::Dice(dice)) => {
            validate_dice(game, p, dice)
        }
        (PromptKind::PlaceEggs(p), PromptChoice::Eggs { placements }) => {
            validate_egg_distribution(placements, p.count, &placement_limits(&p.eligible))
        }
        (PromptKind::RemoveEggs(p), PromptChoice::Eggs { placements }) => {
            validate_egg_distribution(placements, p.count, &removal_limits(p))
        }
        (PromptKind::SelectCards(p), PromptChoice::Cards(cards)) => {
            validate_cards(p, cards)
        }
        (PromptKind::SelectBird(p), PromptChoice::Bird { instance }) => match instance {
            Some(instance) if p.eligible.contains(instance) => Ok(()),
            Some(instance) => Err(format!("Bird {instance:?} is not eligible")),
            None if p.optional => Ok(()),
            None => Err("A bird must be selected".to_string()),
        },
        (PromptKind::SelectHabitat(p), PromptChoice::Habitat { habitat }) => {
            if p.options.contains(*habitat) {
                Ok(())
            } else {
                Err(format!("{habitat:?} is not an offered habitat"))
            }
        }
        (PromptKind::SelectBonusCards(p), PromptChoice::BonusCards { cards }) => {
            validate_bonus_cards(p, cards)
        }
        (PromptKind::PlayBird(p), PromptChoice::PlayBird(play)) => {
            validate_play_bird(game, registry, prompt.player, p, play)
        }
        _ => Err("Choice does not match the prompt".to_string()),
    }
}

/// Validates a turn-action selection before its handler runs.
pub fn validate_turn_action(
    game: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
    choice: &TurnActionChoice,
) -> Result<(), String> {
    match choice.action {
        TurnAction::PlayBird => {
            let playable = costs::playable_birds(game, registry, player)
                .map_err(|_| "Card registry lookup failed".to_string())?;
            if playable.is_empty() {
                Err("No bird is currently playable".to_string())
            } else {
                Ok(())
            }
        }
        // Resource actions are always legal; empty rewards are permitted.
        TurnAction::GainFood | TurnAction::LayEggs | TurnAction::DrawCards => Ok(()),
    }
}

/// Validates a starting-hand selection.
pub fn validate_starting_hand(
    game: &GameState,
    player: PlayerId,
    prompt: &StartingHandPrompt,
    choice: &StartingHandChoice,
) -> Result<(), String> {
    let mut seen = Vec::new();
    for card in &choice.keep_birds {
        if !prompt.birds.contains(card) {
            return Err(format!("Card {card:?} was not dealt to you"));
        }
        if seen.contains(card) {
            return Err(format!("Card {card:?} selected twice"));
        }
        seen.push(*card);
    }
    if !prompt.bonus_cards.contains(&choice.keep_bonus) {
        return Err(format!("Bonus card {:?} was not dealt to you", choice.keep_bonus));
    }
    if choice.discard_food.len() != choice.keep_birds.len() {
        return Err(format!(
            "Keeping {} birds requires discarding {} food",
            choice.keep_birds.len(),
            choice.keep_birds.len()
        ));
    }
    let mut discards = FoodMap::default();
    for &food in &choice.discard_food {
        discards[food] += 1;
    }
    let state = game.player(player);
    for (food, count) in discards.iter() {
        if state.food[food] < *count {
            return Err(format!("You do not hold {count} {food:?} to discard"));
        }
    }
    Ok(())
}

fn validate_food(
    prompt: &SelectFoodPrompt,
    food: &FoodMap,
) -> Result<(), String> {
    let total: u32 = food.values().sum();
    if total != prompt.count {
        return Err(format!("Select exactly {} food", prompt.count));
    }
    for (food_type, count) in food.iter() {
        if *count > 0 && !prompt.options.contains(food_type) {
            return Err(format!("{food_type:?} is not an offered food type"));
        }
    }
    Ok(())
}

fn validate_dice(
    game: &GameState,
    prompt: &SelectDicePrompt,
    dice: &DiceChoice,
) -> Result<(), String> {
    if dice.reroll {
        if !prompt.reroll_allowed {
            return Err("A reroll was not offered".to_string());
        }
        if game.birdfeeder.is_empty() || !game.birdfeeder.is_homogeneous() {
            return Err("The birdfeeder dice are not all showing the same face".to_string());
        }
        if !dice.selections.is_empty() {
            return Err("A reroll cannot also select dice".to_string());
        }
        return Ok(());
    }

    if dice.selections.len() as u32 != prompt.count {
        return Err(format!("Select exactly {} dice", prompt.count));
    }
    let mut requested: HashMap<DieFace, usize> = HashMap::new();
    for selection in &dice.selections {
        if !prompt.faces.contains(selection.face) {
            return Err(format!("Die face {:?} is not selectable", selection.face));
        }
        if !selection.face.can_pay(selection.resolved) {
            return Err(format!(
                "Die face {:?} cannot resolve to {:?}",
                selection.face, selection.resolved
            ));
        }
        *requested.entry(selection.face).or_default() += 1;
    }
    for (face, count) in requested {
        let in_feeder = game.birdfeeder.dice().iter().filter(|&&f| f == face).count();
        if count > in_feeder {
            return Err(format!(
                "Only {in_feeder} dice show {face:?} in the birdfeeder"
            ));
        }
    }
    Ok(())
}

fn placement_limits(eligible: &[EggSlot]) -> HashMap<u32, u32> {
    eligible.iter().map(|slot| (slot.instance.0, slot.limit)).collect()
}

fn removal_limits(prompt: &RemoveEggsPrompt) -> HashMap<u32, u32> {
    prompt.eligible.iter().map(|slot| (slot.instance.0, slot.limit)).collect()
}

fn validate_egg_distribution(
    placements: &[EggPlacement],
    count: u32,
    limits: &HashMap<u32, u32>,
) -> Result<(), String> {
    let total: u32 = placements.iter().map(|placement| placement.count).sum();
    if total != count {
        return Err(format!("Distribute exactly {count} eggs"));
    }
    let mut per_bird: HashMap<u32, u32> = HashMap::new();
    for placement in placements {
        *per_bird.entry(placement.instance.0).or_default() += placement.count;
    }
    for (instance, placed) in per_bird {
        match limits.get(&instance) {
            Some(&limit) if placed <= limit => {}
            Some(&limit) => {
                return Err(format!(
                    "Bird can take at most {limit} eggs, {placed} requested"
                ));
            }
            None => return Err("An addressed bird is not eligible".to_string()),
        }
    }
    Ok(())
}

fn validate_cards(prompt: &SelectCardsPrompt, cards: &CardsChoice) -> Result<(), String> {
    if prompt.source != CardSource::TrayOrDeck && cards.from_deck > 0 {
        return Err("Blind deck draws were not offered".to_string());
    }
    if cards.from_deck > prompt.deck_available {
        return Err(format!("Only {} deck cards are available", prompt.deck_available));
    }
    let mut seen: Vec<BirdCardId> = Vec::new();
    for card in &cards.cards {
        if !prompt.options.contains(card) {
            return Err(format!("Card {card:?} is not an offered option"));
        }
        if seen.contains(card) {
            return Err(format!("Card {card:?} selected twice"));
        }
        seen.push(*card);
    }
    let total = cards.cards.len() as u32 + cards.from_deck;
    if total > prompt.count || (!prompt.allow_fewer && total != prompt.count) {
        return Err(format!("Select exactly {} cards", prompt.count));
    }
    Ok(())
}

fn validate_bonus_cards(
    prompt: &SelectBonusCardsPrompt,
    cards: &[BonusCardId],
) -> Result<(), String> {
    if cards.len() as u32 != prompt.count {
        return Err(format!("Select exactly {} bonus cards", prompt.count));
    }
    let mut seen = Vec::new();
    for card in cards {
        if !prompt.options.contains(card) {
            return Err(format!("Bonus card {card:?} is not an offered option"));
        }
        if seen.contains(card) {
            return Err(format!("Bonus card {card:?} selected twice"));
        }
        seen.push(*card);
    }
    Ok(())
}

fn validate_play_bird(
    game: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
    prompt: &PlayBirdPrompt,
    play: &PlayBirdChoice,
) -> Result<(), String> {
    let Some(option) = prompt.options.iter().find(|option| option.card == play.card) else {
        return Err(format!("Card {:?} is not playable", play.card));
    };
    if !option.habitats.contains(play.habitat) {
        return Err(format!("Card {:?} cannot be played into {:?}", play.card, play.habitat));
    }

    let state = game.player(player);
    for (food, count) in play.food.iter() {
        if state.food[food] < *count {
            return Err(format!("You do not hold {count} {food:?}"));
        }
    }
    let cost = registry
        .bird(play.card)
        .map(|card| card.cost.clone())
        .map_err(|_| "Card registry lookup failed".to_string())?;
    if !cost.is_satisfied_by(&play.food) {
        return Err("The declared food does not pay the card's cost".to_string());
    }

    let Some(column) = state.board.row(play.habitat).leftmost_empty() else {
        return Err(format!("Your {:?} row is full", play.habitat));
    };
    let egg_cost = costs::COLUMN_EGG_COST[column];
    let total_eggs: u32 = play.egg_payment.iter().map(|payment| payment.count).sum();
    if total_eggs != egg_cost {
        return Err(format!("Playing in column {} costs {egg_cost} eggs", column + 1));
    }
    let mut per_bird: HashMap<u32, u32> = HashMap::new();
    for payment in &play.egg_payment {
        *per_bird.entry(payment.instance.0).or_default() += payment.count;
    }
    for (instance, requested) in per_bird {
        let Some(bird) = state
            .board
            .birds()
            .find(|bird| bird.id.0 == instance)
        else {
            return Err("An egg payment names a bird you do not own".to_string());
        };
        if bird.eggs < requested {
            return Err(format!("Bird {:?} holds only {} eggs", bird.id, bird.eggs));
        }
    }
    Ok(())
}
