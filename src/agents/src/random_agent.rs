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

use async_trait::async_trait;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use data::actions::turn_action::{TurnAction, TurnActionChoice};
use data::agents::agent::Agent;
use data::card_definitions::registry::CardRegistry;
use data::core::primitives::{
    BirdCardId, DieSelection, FoodMap, FoodType, Habitat, HABITAT_COLUMNS,
};
use data::effects::effect::EggPlacement;
use data::prompts::choice::{
    CardsChoice, DiceChoice, PlayBirdChoice, PromptChoice,
};
use data::prompts::prompt::{Prompt, PromptKind};
use data::prompts::starting_hand::{StartingHandChoice, StartingHandPrompt};
use data::views::player_view::{BoardView, PlayerView};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::SplitMix64;
use rules::queries::costs;

/// A baseline agent that picks uniformly among the options a prompt offers.
///
/// Because prompts carry pre-filtered choice surfaces, a uniform picker can
/// play full games without ever being reprompted. Carries its own rng so
/// that matches stay reproducible independent of the engine stream.
#[derive(Debug)]
pub struct RandomAgent {
    rng: SplitMix64,
    registry: &'static CardRegistry,
}

impl RandomAgent {
    pub fn new(seed: u64, registry: &'static CardRegistry) -> Self {
        Self { rng: SplitMix64::seed_from_u64(seed), registry }
    }

    fn pick<'a, T>(&mut self, options: &'a [T]) -> Result<&'a T> {
        options.choose(&mut self.rng).ok_or_else(|| eyre!("No options to choose from"))
    }

    /// Eggs available on the viewer's board, one entry per bird with eggs.
    fn eggs_by_bird(board: &BoardView) -> Vec<EggPlacement> {
        board
            .rows
            .values()
            .flatten()
            .filter(|slot| slot.eggs > 0)
            .map(|slot| EggPlacement { instance: slot.instance, count: slot.eggs })
            .collect()
    }
}

#[async_trait]
impl Agent for RandomAgent {
    async fn choose_starting_hand(
        &mut self,
        _view: &PlayerView,
        prompt: &StartingHandPrompt,
        _hint: Option<&str>,
    ) -> Result<StartingHandChoice> {
        let keep_count = self.rng.gen_range(0..=prompt.birds.len().min(5));
        let mut birds = prompt.birds.clone();
        birds.shuffle(&mut self.rng);
        birds.truncate(keep_count);

        let mut foods: Vec<FoodType> = FoodType::specific().collect();
        foods.shuffle(&mut self.rng);
        foods.truncate(keep_count);

        let keep_bonus = *self.pick(&prompt.bonus_cards)?;
        Ok(StartingHandChoice { keep_birds: birds, keep_bonus, discard_food: foods })
    }

    async fn choose_turn_action(
        &mut self,
        view: &PlayerView,
        _hint: Option<&str>,
    ) -> Result<TurnActionChoice> {
        let mut actions = vec![TurnAction::GainFood, TurnAction::LayEggs, TurnAction::DrawCards];
        if playable_from_view(self.registry, view)?.iter().any(|option| option.1) {
            actions.push(TurnAction::PlayBird);
        }
        let action = *self.pick(&actions)?;
        Ok(TurnActionChoice { action, take_bonus: self.rng.gen_bool(0.5) })
    }

    async fn choose_option(
        &mut self,
        view: &PlayerView,
        prompt: &Prompt,
        _hint: Option<&str>,
    ) -> Result<PromptChoice> {
        match &prompt.kind {
            PromptKind::Activate(_) => {
                Ok(PromptChoice::Activate { activate: self.rng.gen_bool(0.8) })
            }
            PromptKind::SelectFood(p) => {
                let options: Vec<FoodType> = p.options.iter().collect();
                let mut food = FoodMap::default();
                for _ in 0..p.count {
                    food[*self.pick(&options)?] += 1;
                }
                Ok(PromptChoice::Food { food })
            }
            PromptKind::SelectDice(p) => {
                let mut available: Vec<_> = view
                    .birdfeeder
                    .iter()
                    .copied()
                    .filter(|face| p.faces.contains(*face))
                    .collect();
                available.shuffle(&mut self.rng);
                available.truncate(p.count as usize);
                let mut selections = Vec::new();
                for face in available {
                    let resolutions: Vec<FoodType> = face.food_options().iter().collect();
                    let resolved = *self.pick(&resolutions)?;
                    selections.push(DieSelection { face, resolved });
                }
                Ok(PromptChoice::Dice(DiceChoice { reroll: false, selections }))
            }
            PromptKind::PlaceEggs(p) => {
                let mut placements: Vec<EggPlacement> = Vec::new();
                let mut remaining = p.count;
                let mut slots = p.eligible.clone();
                slots.shuffle(&mut self.rng);
                for slot in slots {
                    if remaining == 0 {
                        break;
                    }
                    let count = remaining.min(slot.limit);
                    placements.push(EggPlacement { instance: slot.instance, count });
                    remaining -= count;
                }
                Ok(PromptChoice::Eggs { placements })
            }
            PromptKind::RemoveEggs(p) => {
                let mut placements: Vec<EggPlacement> = Vec::new();
                let mut remaining = p.count;
                for slot in &p.eligible {
                    if remaining == 0 {
                        break;
                    }
                    let count = remaining.min(slot.limit);
                    placements.push(EggPlacement { instance: slot.instance, count });
                    remaining -= count;
                }
                Ok(PromptChoice::Eggs { placements })
            }
            PromptKind::SelectCards(p) => {
                let mut cards = p.options.clone();
                cards.shuffle(&mut self.rng);
                cards.truncate(p.count as usize);
                let from_deck =
                    (p.count - cards.len() as u32).min(p.deck_available);
                Ok(PromptChoice::Cards(CardsChoice { cards, from_deck }))
            }
            PromptKind::SelectBird(p) => {
                Ok(PromptChoice::Bird { instance: Some(*self.pick(&p.eligible)?) })
            }
            PromptKind::SelectHabitat(p) => {
                let options: Vec<Habitat> = p.options.iter().collect();
                Ok(PromptChoice::Habitat { habitat: *self.pick(&options)? })
            }
            PromptKind::SelectBonusCards(p) => {
                let mut cards = p.options.clone();
                cards.shuffle(&mut self.rng);
                cards.truncate(p.count as usize);
                Ok(PromptChoice::BonusCards { cards })
            }
            PromptKind::PlayBird(p) => {
                let option = self.pick(&p.options)?.clone();
                let habitats: Vec<Habitat> = option.habitats.iter().collect();
                let habitat = *self.pick(&habitats)?;
                let cost = &self.registry.bird(option.card).map_err(|_| {
                    eyre!("Unknown card {:?}", option.card)
                })?.cost;
                let food = costs::suggest_payment(&view.food, cost)
                    .ok_or_else(|| eyre!("Cannot pay for {:?}", option.card))?;

                let column = view.board.rows[habitat].len().min(HABITAT_COLUMNS - 1);
                let mut egg_cost = costs::COLUMN_EGG_COST[column];
                let mut egg_payment = Vec::new();
                for source in Self::eggs_by_bird(&view.board) {
                    if egg_cost == 0 {
                        break;
                    }
                    let count = egg_cost.min(source.count);
                    egg_payment.push(EggPlacement { instance: source.instance, count });
                    egg_cost -= count;
                }
                Ok(PromptChoice::PlayBird(PlayBirdChoice {
                    card: option.card,
                    habitat,
                    food,
                    egg_payment,
                }))
            }
        }
    }
}

/// Per-hand-card playability computed from the view alone.
fn playable_from_view(
    registry: &CardRegistry,
    view: &PlayerView,
) -> Result<Vec<(BirdCardId, bool)>> {
    let total_eggs: u32 =
        view.board.rows.values().flatten().map(|slot| slot.eggs).sum();
    let mut result = Vec::new();
    for &card in &view.hand {
        let definition =
            registry.bird(card).map_err(|_| eyre!("Unknown card {card:?}"))?;
        let playable = costs::can_afford(&view.food, &definition.cost)
            && definition.habitats.iter().any(|habitat| {
                let occupied = view.board.rows[habitat].len();
                occupied < HABITAT_COLUMNS
                    && total_eggs >= costs::COLUMN_EGG_COST[occupied]
            });
        result.push((card, playable));
    }
    Ok(result)
}
