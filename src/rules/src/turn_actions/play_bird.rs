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
use data::effects::effect::Effect;
use data::events::engine_event::EngineEvent;
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{PlayBirdPrompt, PromptKind};
use tracing::debug;
use utils::outcome::{Outcome, OK};
use utils::{fail, verify};

use crate::powers::context::PowerCtx;
use crate::queries::costs;

/// The play-a-bird turn action: choose a playable card, pay its food cost
/// and the column egg cost, place it, and run its when-played power.
pub async fn run(ctx: &mut PowerCtx<'_>) -> Outcome {
    let options = costs::playable_birds(ctx.game, ctx.registry, ctx.owner)?;
    verify!(!options.is_empty(), "Play-bird action taken with no playable bird");

    let choice =
        ctx.prompt("Play a bird", PromptKind::PlayBird(PlayBirdPrompt { options })).await?;
    let PromptChoice::PlayBird(play) = choice else {
        fail!("Validated choice does not match prompt kind");
    };
    debug!(card = ?play.card, habitat = ?play.habitat, "Playing bird");

    let effect = ctx.apply(Effect::PlayBird {
        player: ctx.owner,
        card: play.card,
        habitat: play.habitat,
        food_paid: play.food,
        egg_payment: play.egg_payment,
        instance: None,
        column: None,
    })?;
    let Effect::PlayBird { instance: Some(instance), .. } = effect else {
        fail!("Applier did not populate the played bird instance");
    };

    let registry = ctx.registry;
    if let Some(power) = &registry.bird(play.card)?.power {
        if power.trigger == PowerTrigger::WhenPlayed {
            ctx.invoke_power(ctx.owner, instance, power, None).await?;
        }
    }

    ctx.emit(EngineEvent::BirdPlayed { player: ctx.owner, instance, habitat: play.habitat });
    OK
}
