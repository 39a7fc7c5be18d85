// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Condition checks for function and constructor arguments.
//!
//! Checked constructors (`new_checked`) surface these as errors; the panicking
//! `new` variants unwrap with the [`FAILED`] message.

/// Standard expect message for unwrapping a checked constructor result.
pub const FAILED: &str = "Condition check failed";

/// Checks the string `value` is valid for the named parameter.
///
/// A valid string is non-empty and carries no leading or trailing whitespace.
///
/// # Errors
///
/// Returns an error if `value` is empty or has surrounding whitespace.
pub fn check_valid_string(value: &str, param: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }
    if value.trim() != value {
        anyhow::bail!("invalid string for '{param}', had leading or trailing whitespace: '{value}'");
    }
    Ok(())
}

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if the predicate is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}");
    }
    Ok(())
}

/// Checks the `predicate` is false.
///
/// # Errors
///
/// Returns an error with `fail_msg` if the predicate is true.
pub fn check_predicate_false(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    check_predicate_true(!predicate, fail_msg)
}
