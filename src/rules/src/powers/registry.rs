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

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use once_cell::sync::Lazy;
use utils::fail;
use utils::outcome::{Outcome, Value};

use crate::powers::context::PowerCtx;
use crate::powers::{
    card_powers, egg_powers, food_powers, misc_powers, pink_powers, predator_powers,
};

/// The suspended remainder of a running handler.
pub type PowerFuture<'a> = Pin<Box<dyn Future<Output = Outcome> + Send + 'a>>;

/// A power handler: a suspendable routine over a [PowerCtx].
pub type PowerFn = for<'a, 'b> fn(&'a mut PowerCtx<'b>) -> PowerFuture<'a>;

/// Process-wide immutable handler registry, populated at startup. Card
/// definitions reference handlers by these names.
static HANDLERS: Lazy<HashMap<&'static str, PowerFn>> = Lazy::new(|| {
    let mut handlers: HashMap<&'static str, PowerFn> = HashMap::new();

    handlers.insert("gain_food_from_supply", food_powers::gain_food_from_supply);
    handlers.insert("gain_food_from_feeder", food_powers::gain_food_from_feeder);
    handlers.insert(
        "gain_food_from_feeder_matching",
        food_powers::gain_food_from_feeder_matching,
    );
    handlers.insert("all_players_gain_food", food_powers::all_players_gain_food);
    handlers.insert("cache_food_from_supply", food_powers::cache_food_from_supply);

    handlers.insert("lay_eggs_on_this", egg_powers::lay_eggs_on_this);
    handlers.insert("lay_eggs_on_any", egg_powers::lay_eggs_on_any);
    handlers.insert("all_players_lay_eggs", egg_powers::all_players_lay_eggs);

    handlers.insert("draw_cards", card_powers::draw_cards);
    handlers.insert("draw_from_tray", card_powers::draw_from_tray);
    handlers.insert("tuck_from_hand_then_draw", card_powers::tuck_from_hand_then_draw);
    handlers.insert(
        "tuck_from_hand_then_gain_food",
        card_powers::tuck_from_hand_then_gain_food,
    );
    handlers.insert("tuck_from_deck", card_powers::tuck_from_deck);
    handlers.insert("draw_then_discard_deferred", card_powers::draw_then_discard_deferred);
    handlers.insert("discard_from_hand", card_powers::discard_from_hand);
    handlers.insert("all_players_draw_cards", card_powers::all_players_draw_cards);
    handlers.insert("draw_bonus_cards", card_powers::draw_bonus_cards);

    handlers.insert("predator_roll_dice", predator_powers::predator_roll_dice);
    handlers.insert("predator_hunt_small_bird", predator_powers::predator_hunt_small_bird);

    handlers.insert("repeat_brown_power", misc_powers::repeat_brown_power);
    handlers.insert("move_to_another_habitat", misc_powers::move_to_another_habitat);

    handlers.insert("pink_gain_food_when_bird_played", pink_powers::gain_food_when_bird_played);
    handlers.insert("pink_gain_food_when_food_gained", pink_powers::gain_food_when_food_gained);
    handlers.insert("pink_lay_egg_when_eggs_laid", pink_powers::lay_egg_when_eggs_laid);
    handlers.insert("pink_tuck_when_predator", pink_powers::tuck_when_predator);

    handlers
});

pub fn lookup(name: &str) -> Value<PowerFn> {
    match HANDLERS.get(name) {
        Some(&handler) => Ok(handler),
        None => fail!("Unknown power handler {name:?}"),
    }
}

pub fn is_registered(name: &str) -> bool {
    HANDLERS.contains_key(name)
}
