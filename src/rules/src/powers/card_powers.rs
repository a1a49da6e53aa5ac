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

use data::card_definitions::power_definition::PowerParams;
use data::core::primitives::{FoodMap, FoodType};
use data::effects::effect::{Effect, FoodSource, SkipReason};
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{
    CardSource, PromptKind, SelectBonusCardsPrompt, SelectCardsPrompt,
};
use utils::fail;
use utils::outcome::{Value, OK};

use crate::powers::context::PowerCtx;
use crate::powers::registry::PowerFuture;

/// Draws blind from the deck.
pub fn draw_cards<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        if ctx.game.bird_supply.deck_size() == 0 {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        ctx.apply(Effect::DrawCards {
            player: ctx.owner,
            from_deck: count,
            from_tray: vec![],
            from_revealed: vec![],
            drawn: vec![],
        })?;
        OK
    })
}

/// Draws chosen cards from the face-up tray.
pub fn draw_from_tray<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        if ctx.game.bird_supply.tray.is_empty() {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        let options = ctx.game.bird_supply.tray.clone();
        let take = count.min(options.len() as u32);
        let choice = ctx
            .prompt(
                format!("Draw {take} cards from the tray"),
                PromptKind::SelectCards(SelectCardsPrompt {
                    source: CardSource::Tray,
                    count: take,
                    options,
                    deck_available: 0,
                    allow_fewer: false,
                }),
            )
            .await?;
        let PromptChoice::Cards(cards) = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::DrawCards {
            player: ctx.owner,
            from_deck: 0,
            from_tray: cards.cards,
            from_revealed: vec![],
            drawn: vec![],
        })?;
        OK
    })
}

async fn tuck_from_hand(ctx: &mut PowerCtx<'_>) -> Value<u32> {
    let Some(instance) = ctx.instance else {
        fail!("tuck power requires a bird");
    };
    let count = ctx.params.count_or(1);
    let options = ctx.player().hand.clone();
    let take = count.min(options.len() as u32);
    let choice = ctx
        .prompt(
            format!("Tuck {take} cards from your hand"),
            PromptKind::SelectCards(SelectCardsPrompt {
                source: CardSource::Hand,
                count: take,
                options,
                deck_available: 0,
                allow_fewer: false,
            }),
        )
        .await?;
    let PromptChoice::Cards(cards) = choice else {
        fail!("Validated choice does not match prompt kind");
    };
    let tucked = cards.cards.len() as u32;
    ctx.apply(Effect::TuckCards {
        player: ctx.owner,
        target: instance,
        from_hand: cards.cards,
        from_deck: 0,
        from_revealed: vec![],
        tucked_from_deck: vec![],
    })?;
    Ok(tucked)
}

/// Tucks cards from hand under this bird, then draws as many from the deck.
pub fn tuck_from_hand_then_draw<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        if ctx.player().hand.is_empty() {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        let tucked = tuck_from_hand(ctx).await?;
        if tucked > 0 {
            ctx.apply(Effect::DrawCards {
                player: ctx.owner,
                from_deck: tucked,
                from_tray: vec![],
                from_revealed: vec![],
                drawn: vec![],
            })?;
        }
        OK
    })
}

/// Tucks cards from hand under this bird, then gains the parameter food from
/// the supply per card tucked.
pub fn tuck_from_hand_then_gain_food<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let food = ctx.params.food.unwrap_or(FoodType::Wild);
        if ctx.player().hand.is_empty() {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        let tucked = tuck_from_hand(ctx).await?;
        if tucked > 0 {
            let mut gain = FoodMap::default();
            gain[food] = tucked;
            ctx.apply(Effect::GainFood {
                player: ctx.owner,
                food: gain,
                source: FoodSource::Supply,
                dice: vec![],
            })?;
        }
        OK
    })
}

/// Tucks cards blind from the deck under this bird.
pub fn tuck_from_deck<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("tuck_from_deck requires a bird");
        };
        // The printed text of this power family says two cards; the count
        // parameter only overrides it when card data names another value.
        let count = ctx.params.count_or(2);
        if ctx.game.bird_supply.deck_size() == 0 {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        ctx.apply(Effect::TuckCards {
            player: ctx.owner,
            target: instance,
            from_hand: vec![],
            from_deck: count,
            from_revealed: vec![],
            tucked_from_deck: vec![],
        })?;
        OK
    })
}

/// Draws now and queues a discard for end of turn.
pub fn draw_then_discard_deferred<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        if ctx.game.bird_supply.deck_size() == 0 {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        ctx.apply(Effect::DrawCards {
            player: ctx.owner,
            from_deck: count,
            from_tray: vec![],
            from_revealed: vec![],
            drawn: vec![],
        })?;
        ctx.defer(
            "discard_from_hand",
            PowerParams { count: Some(count), ..PowerParams::default() },
        )?;
        OK
    })
}

/// End-of-turn continuation: discards from hand. Returns without discarding
/// when the hand is already empty.
pub fn discard_from_hand<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        let options = ctx.player().hand.clone();
        if options.is_empty() {
            return OK;
        }
        let take = count.min(options.len() as u32);
        let choice = ctx
            .prompt(
                format!("Discard {take} cards"),
                PromptKind::SelectCards(SelectCardsPrompt {
                    source: CardSource::Hand,
                    count: take,
                    options,
                    deck_available: 0,
                    allow_fewer: false,
                }),
            )
            .await?;
        let PromptChoice::Cards(cards) = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::DiscardCards {
            player: ctx.owner,
            cards: cards.cards,
            from_revealed: false,
        })?;
        OK
    })
}

/// Every participating player draws blind from the deck.
pub fn all_players_draw_cards<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(1);
        ctx.activate()?;
        let draws = ctx.game.active_players().map(|player| (player.id, count)).collect();
        ctx.apply(Effect::AllPlayersDrawCards { draws, drawn: vec![] })?;
        OK
    })
}

/// Reveals bonus cards and keeps one.
pub fn draw_bonus_cards<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let count = ctx.params.count_or(2);
        if ctx.game.bonus_supply.deck.is_empty() {
            return ctx.skip(SkipReason::ResourceUnavailable);
        }
        if !ctx.offer().await? {
            return OK;
        }
        let effect = ctx.apply(Effect::RevealBonusCards {
            player: ctx.owner,
            count,
            revealed: vec![],
        })?;
        let Effect::RevealBonusCards { revealed, .. } = effect else {
            fail!("Applier returned a different effect variant");
        };
        if revealed.is_empty() {
            return OK;
        }
        let choice = ctx
            .prompt(
                "Keep 1 bonus card",
                PromptKind::SelectBonusCards(SelectBonusCardsPrompt {
                    options: revealed.clone(),
                    count: 1,
                }),
            )
            .await?;
        let PromptChoice::BonusCards { cards: kept } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        let discarded =
            revealed.iter().copied().filter(|card| !kept.contains(card)).collect();
        ctx.apply(Effect::DrawBonusCards { player: ctx.owner, kept, discarded })?;
        OK
    })
}
