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
use data::effects::effect::{Effect, SkipReason};
use data::prompts::choice::PromptChoice;
use data::prompts::prompt::{
    PromptKind, SelectBirdPrompt, SelectHabitatPrompt,
};
use enumset::EnumSet;
use utils::fail;
use utils::outcome::OK;
use utils::with_error::WithError;

use crate::powers::context::PowerCtx;
use crate::powers::registry::PowerFuture;

/// Repeats the when-activated power of another bird in this bird's habitat.
/// Repeater powers cannot copy each other, which keeps the chain finite.
pub fn repeat_brown_power<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("repeat_brown_power requires a bird");
        };
        let habitat = ctx
            .player()
            .board
            .habitat_of(instance)
            .with_error(|| format!("Bird instance {instance:?} is not on the board"))?;

        let mut eligible = Vec::new();
        for bird in ctx.player().board.row(habitat).birds() {
            if bird.id == instance {
                continue;
            }
            let Some(power) = &ctx.card(bird.card)?.power else {
                continue;
            };
            if power.trigger == PowerTrigger::WhenActivated
                && power.handler != "repeat_brown_power"
            {
                eligible.push(bird.id);
            }
        }
        if eligible.is_empty() {
            return ctx.skip(SkipReason::ConditionNotMet);
        }
        if !ctx.offer().await? {
            return OK;
        }

        let choice = ctx
            .prompt(
                "Choose a brown power to repeat",
                PromptKind::SelectBird(SelectBirdPrompt { eligible, optional: false }),
            )
            .await?;
        let PromptChoice::Bird { instance: Some(target) } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.repeat_power(target).await
    })
}

/// Moves this bird to another habitat its card allows.
pub fn move_to_another_habitat<'a>(ctx: &'a mut PowerCtx<'_>) -> PowerFuture<'a> {
    Box::pin(async move {
        let Some(instance) = ctx.instance else {
            fail!("move_to_another_habitat requires a bird");
        };
        let current = ctx
            .player()
            .board
            .habitat_of(instance)
            .with_error(|| format!("Bird instance {instance:?} is not on the board"))?;
        let allowed = {
            let bird = ctx.this_bird()?;
            ctx.card(bird.card)?.habitats
        };

        let mut options = EnumSet::empty();
        for habitat in allowed {
            if habitat != current && !ctx.player().board.row(habitat).is_full() {
                options.insert(habitat);
            }
        }
        if options.is_empty() {
            return ctx.skip(SkipReason::ConditionNotMet);
        }
        if !ctx.offer().await? {
            return OK;
        }

        let choice = ctx
            .prompt(
                "Move this bird to another habitat",
                PromptKind::SelectHabitat(SelectHabitatPrompt { options }),
            )
            .await?;
        let PromptChoice::Habitat { habitat } = choice else {
            fail!("Validated choice does not match prompt kind");
        };
        ctx.apply(Effect::MoveBird {
            player: ctx.owner,
            instance,
            from: current,
            to: habitat,
            column: None,
        })?;
        OK
    })
}
