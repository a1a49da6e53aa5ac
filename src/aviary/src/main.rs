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

use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use agents::agent_name::AgentName;
use clap::Parser;
use color_eyre::Result;
use data::agents::agent::Agent;
use data::agents::observer::Observer;
use data::card_definitions::registry::CardRegistry;
use engine::match_driver::{self, MatchOutcome};
use engine::new_game::MatchConfig;
use rules::powers::registry as power_registry;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::command_line_parser::CommandLineParser;
use crate::narrative::NarrativeObserver;

mod command_line_parser;
mod logging;
mod narrative;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    logging::initialize();
    let args = CommandLineParser::parse();

    let registry = match dataset::card_json::registry() {
        Ok(registry) => registry,
        Err(stop) => {
            error!("Failed to load the base dataset: {stop:?}");
            return Ok(ExitCode::FAILURE);
        }
    };
    check_handlers(registry);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "Using seed");

    let mut agent_names = Vec::new();
    for seat in 0..args.players as usize {
        let name = args.agents.get(seat).or_else(|| args.agents.last());
        let name = name.map(String::as_str).unwrap_or("random");
        agent_names.push(AgentName::from_str(name)?);
    }

    let mut join_set: JoinSet<(u32, Result<MatchOutcome>)> = JoinSet::new();
    for index in 0..args.matches {
        let match_seed = seed.wrapping_add(index as u64);
        let mut config = MatchConfig::new(
            match_seed,
            (0..args.players).map(|seat| format!("P{}", seat + 1)).collect(),
        );
        config.prompt_timeout = Duration::from_secs(args.prompt_timeout);

        let match_agents: Vec<Box<dyn Agent>> = agent_names
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                name.create(match_seed.wrapping_add(1000 + seat as u64), registry)
            })
            .collect();
        let observers: Vec<Box<dyn Observer>> = if args.narrate {
            vec![Box::new(NarrativeObserver::new(format!("match {index}")))]
        } else {
            vec![]
        };

        join_set.spawn(async move {
            (index, match_driver::run_match(config, registry, match_agents, observers).await)
        });
    }

    let mut failed = false;
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, Ok(outcome))) => {
                let totals: Vec<_> = outcome
                    .scores
                    .iter()
                    .map(|sheet| format!("{}={}", sheet.player, sheet.total()))
                    .collect();
                info!(
                    "Match {index}: winner {} with scores [{}]",
                    outcome.winner,
                    totals.join(", ")
                );
            }
            Ok((index, Err(report))) => {
                error!("Match {index} failed: {report:?}");
                failed = true;
            }
            Err(join_error) => {
                error!("Match task panicked: {join_error}");
                failed = true;
            }
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Warns about card data referencing unregistered power handlers.
fn check_handlers(registry: &CardRegistry) {
    for card in registry.birds() {
        if let Some(power) = &card.power {
            if !power_registry::is_registered(&power.handler) {
                warn!(card = %card.name, handler = %power.handler, "Unregistered power handler");
            }
        }
    }
}
