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

use data::card_definitions::bird_card::BirdCard;
use data::card_definitions::bonus_card::BonusCard;
use data::card_definitions::registry::CardRegistry;
use data::card_definitions::round_goal::RoundGoal;
use once_cell::sync::Lazy;
use serde_json::de;
use utils::fail;
use utils::outcome::Value;
use utils::with_error::WithError;

static BIRDS_JSON: &str = include_str!("./birds.json");
static BONUS_JSON: &str = include_str!("./bonus_cards.json");
static GOALS_JSON: &str = include_str!("./goals.json");

static REGISTRY: Lazy<Value<CardRegistry>> = Lazy::new(build_registry);

/// The base dataset registry, built once per process.
pub fn registry() -> Value<&'static CardRegistry> {
    match &*REGISTRY {
        Ok(registry) => Ok(registry),
        Err(error) => fail!("Base dataset failed to load: {error:?}"),
    }
}

fn build_registry() -> Value<CardRegistry> {
    let birds: Vec<BirdCard> =
        de::from_str(BIRDS_JSON).with_error(|| "Error deserializing birds.json".to_string())?;
    let bonus_cards: Vec<BonusCard> = de::from_str(BONUS_JSON)
        .with_error(|| "Error deserializing bonus_cards.json".to_string())?;
    let goals: Vec<RoundGoal> =
        de::from_str(GOALS_JSON).with_error(|| "Error deserializing goals.json".to_string())?;
    CardRegistry::new(birds, bonus_cards, goals)
}
