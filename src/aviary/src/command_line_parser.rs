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

use clap::Parser;

/// Headless bird-tableau engine simulator.
#[derive(Parser, Debug)]
#[command(name = "aviary", about = "Runs headless simulated matches")]
pub struct CommandLineParser {
    /// Seed for the match PRNG. Auto-generated and logged if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of players per match.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=5))]
    pub players: u8,

    /// Number of matches to run concurrently.
    #[arg(long, default_value_t = 1)]
    pub matches: u32,

    /// Agent names in seat order, comma separated. The last entry is
    /// repeated when fewer names than seats are given.
    #[arg(long, default_value = "random", value_delimiter = ',')]
    pub agents: Vec<String>,

    /// Per-prompt timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub prompt_timeout: u64,

    /// Print a narrative log of every match event.
    #[arg(long)]
    pub narrate: bool,
}
