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

use crate::effects::effect::Effect;
use crate::events::engine_event::EngineEvent;
use crate::prompts::prompt::Prompt;

/// Side-effect-only hooks invoked during match execution.
///
/// Observers may not mutate state; they receive applied effects with their
/// populated result fields, every engine event, and every issued prompt.
/// Registration order does not affect the match outcome.
pub trait Observer: Send {
    fn on_event(&mut self, _event: &EngineEvent) {}

    fn on_effect_applied(&mut self, _effect: &Effect) {}

    fn on_prompt_issued(&mut self, _prompt: &Prompt) {}
}
