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

use data::card_definitions::power_definition::PowerTrigger;
use data::card_definitions::registry::CardRegistry;
use data::effects::effect::Effect;
use data::game_states::game_state::GameState;
use tracing::{debug, instrument};
use utils::outcome::{Outcome, OK};
use utils::verify;
use utils::with_error::WithError;

use crate::mutations::{board, cards, dice, eggs, food};

/// Applies a typed effect to the game state. The sole mutation pathway.
///
/// Result fields of the effect are populated in place, then the fully
/// populated record is appended to the state's effect log. On failure the
/// state may be partially mutated; failures here are invariant violations
/// that end the match, so no rollback is attempted.
#[instrument(level = "debug", skip(game, registry))]
pub fn apply(game: &mut GameState, registry: &CardRegistry, effect: &mut Effect) -> Outcome {
    match effect {
        Effect::ActivatePower { .. } => {
            // Informational record only.
        }
        Effect::GainFood { player, food, source, dice } => {
            food::gain(game, *player, food, *source, dice)?;
        }
        Effect::LayEggs { placements, .. } => {
            eggs::lay(game, registry, placements)?;
        }
        Effect::DrawCards { player, from_deck, from_tray, from_revealed, drawn } => {
            *drawn = cards::draw(game, *player, *from_deck, from_tray, from_revealed)?;
        }
        Effect::DiscardFood { player, food } => {
            food::discard(game, *player, food)?;
        }
        Effect::DiscardEggs { player, removals } => {
            eggs::discard(game, *player, removals)?;
        }
        Effect::DiscardCards { player, cards, from_revealed } => {
            cards::discard(game, *player, cards, *from_revealed)?;
        }
        Effect::TuckCards {
            player,
            target,
            from_hand,
            from_deck,
            from_revealed,
            tucked_from_deck,
        } => {
            *tucked_from_deck =
                cards::tuck(game, *player, *target, from_hand, *from_deck, from_revealed)?;
        }
        Effect::CacheFood { player, instance, food, source, dice } => {
            food::cache(game, *player, *instance, food, *source, dice)?;
        }
        Effect::PlayBird { player, card, habitat, food_paid, egg_payment, instance, column } => {
            let (id, col) =
                board::play_bird(game, *player, *card, *habitat, food_paid, egg_payment)?;
            *instance = Some(id);
            *column = Some(col);
        }
        Effect::RerollBirdfeeder { dice } => {
            *dice = dice::reroll_birdfeeder(game)?;
        }
        Effect::RefillBirdfeeder { dice } => {
            *dice = dice::refill_birdfeeder(game)?;
        }
        Effect::RollDice { rolled, .. } => {
            *rolled = dice::roll_outside_feeder(game)?;
        }
        Effect::RevealCards { count, revealed, .. } => {
            *revealed = cards::reveal(game, *count)?;
        }
        Effect::RevealBonusCards { count, revealed, .. } => {
            *revealed = cards::reveal_bonus(game, *count)?;
        }
        Effect::DrawBonusCards { player, kept, discarded } => {
            cards::keep_bonus(game, *player, kept, discarded)?;
        }
        Effect::MoveBird { player, instance, from, to, column } => {
            *column = Some(board::move_bird(game, *player, *instance, *from, *to)?);
        }
        Effect::AllPlayersGainFood { gains } => {
            food::gain_all(game, gains)?;
        }
        Effect::AllPlayersDrawCards { draws, drawn } => {
            *drawn = cards::draw_all(game, draws)?;
        }
        Effect::AllPlayersLayEggs { placements } => {
            eggs::lay_all(game, registry, placements)?;
        }
        Effect::RepeatBrownPower { player, target } => {
            // The re-invocation itself is routed through the action
            // processor; this records it and checks the target.
            let owner = game
                .owner_of(*target)
                .with_error(|| format!("Unknown bird instance {target:?}"))?;
            verify!(owner == *player, "Bird {:?} is not owned by {}", target, player);
            let card = game.player(owner).bird(*target).map(|bird| bird.card);
            let card = card.with_error(|| format!("Unknown bird instance {target:?}"))?;
            let power = registry.bird(card)?.power.as_ref();
            let is_brown = power.map_or(false, |p| p.trigger == PowerTrigger::WhenActivated);
            verify!(is_brown, "Bird {:?} has no when-activated power to repeat", target);
        }
    }

    debug!(?effect, "Applied effect");
    game.effect_log.push(effect.clone());
    OK
}
