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

/// Returns a [StopCondition::Error] from the enclosing function with the
/// provided format string.
///
/// [StopCondition::Error]: crate::outcome::StopCondition::Error
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        return Err($crate::outcome::StopCondition::Error(
            ::color_eyre::eyre::eyre!($($arg)*),
        ))
    };
}

/// Returns a [StopCondition::Error] from the enclosing function unless the
/// provided condition holds.
///
/// [StopCondition::Error]: crate::outcome::StopCondition::Error
#[macro_export]
macro_rules! verify {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::fail!($($arg)*);
        }
    };
}
