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

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    BirdCardId, BirdInstanceId, BonusCardId, DieFace, FoodType, Habitat, PlayerId,
};

/// Data for soliciting a choice from a player.
///
/// Prompts carry the full pre-filtered choice surface: every option listed is
/// legal at the time the prompt is issued, and validators reject anything
/// outside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Player who is being prompted
    pub player: PlayerId,

    /// Human-readable description of the choice being made.
    pub text: String,

    /// Which type of choice is requested.
    pub kind: PromptKind,
}

/// Possible types of prompts. Each variant has a matching
/// [PromptChoice] variant and a validator.
///
/// [PromptChoice]: crate::prompts::choice::PromptChoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PromptKind {
    /// Yes/no decision to run an optional power.
    Activate(ActivatePrompt),

    /// Pick food types from the supply.
    SelectFood(SelectFoodPrompt),

    /// Pick dice from the birdfeeder, or request a reroll when offered.
    SelectDice(SelectDicePrompt),

    /// Distribute eggs onto eligible birds.
    PlaceEggs(PlaceEggsPrompt),

    /// Remove eggs from eligible birds.
    RemoveEggs(RemoveEggsPrompt),

    /// Pick cards from a hand, tray, revealed set, or blind deck draws.
    SelectCards(SelectCardsPrompt),

    /// Pick a bird instance from an eligibility list.
    SelectBird(SelectBirdPrompt),

    /// Pick a habitat row.
    SelectHabitat(SelectHabitatPrompt),

    /// Pick bonus cards to keep after a bonus-card reveal.
    SelectBonusCards(SelectBonusCardsPrompt),

    /// Pick a bird card to play, with habitat and payment.
    PlayBird(PlayBirdPrompt),
}

impl PromptKind {
    /// Shared discriminant tag, used to match choices to prompts.
    pub fn tag(&self) -> &'static str {
        match self {
            PromptKind::Activate(_) => "activate",
            PromptKind::SelectFood(_) => "select_food",
            PromptKind::SelectDice(_) => "select_dice",
            PromptKind::PlaceEggs(_) | PromptKind::RemoveEggs(_) => "eggs",
            PromptKind::SelectCards(_) => "select_cards",
            PromptKind::SelectBird(_) => "select_bird",
            PromptKind::SelectHabitat(_) => "select_habitat",
            PromptKind::SelectBonusCards(_) => "select_bonus_cards",
            PromptKind::PlayBird(_) => "play_bird",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivatePrompt {
    /// The bird whose power is offered.
    pub instance: BirdInstanceId,

    /// The power's rules text.
    pub power_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectFoodPrompt {
    /// Number of tokens to pick.
    pub count: u32,

    /// Token types on offer.
    pub options: EnumSet<FoodType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectDicePrompt {
    /// Number of dice to pick.
    pub count: u32,

    /// Faces eligible for selection. Dice showing other faces are in the
    /// feeder but not selectable for this prompt.
    pub faces: EnumSet<DieFace>,

    /// Whether a reroll may be requested instead of picking. Only offered
    /// when the feeder is non-empty and homogeneous.
    pub reroll_allowed: bool,
}

/// Remaining egg capacity of an eligible bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggSlot {
    pub instance: BirdInstanceId,

    /// Upper bound for this bird: remaining capacity when placing, current
    /// egg count when removing.
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceEggsPrompt {
    /// Total eggs to place.
    pub count: u32,

    pub eligible: Vec<EggSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveEggsPrompt {
    /// Total eggs to remove.
    pub count: u32,

    pub eligible: Vec<EggSlot>,
}

/// Where a card selection draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSource {
    Hand,
    Tray,
    Revealed,

    /// Face-up tray cards by id, or blind draws from the deck top.
    TrayOrDeck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectCardsPrompt {
    pub source: CardSource,

    /// Number of cards to select.
    pub count: u32,

    /// Identified cards on offer. For [CardSource::TrayOrDeck] this is the
    /// current tray.
    pub options: Vec<BirdCardId>,

    /// Cards available as blind deck draws. Zero unless the source is
    /// [CardSource::TrayOrDeck].
    pub deck_available: u32,

    /// Whether selecting fewer than `count` cards is accepted.
    pub allow_fewer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectBirdPrompt {
    pub eligible: Vec<BirdInstanceId>,

    /// When set, an empty selection declines the choice.
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectHabitatPrompt {
    pub options: EnumSet<Habitat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectBonusCardsPrompt {
    pub options: Vec<BonusCardId>,

    /// Number of cards to keep.
    pub count: u32,
}

/// A playable card and the habitats it could legally enter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableBird {
    pub card: BirdCardId,
    pub habitats: EnumSet<Habitat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayBirdPrompt {
    /// Cards in hand that are currently playable somewhere.
    pub options: Vec<PlayableBird>,
}
