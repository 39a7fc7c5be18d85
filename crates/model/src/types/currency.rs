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

//! A currency code.

use execstate_core::correctness::{check_predicate_true, check_valid_string, FAILED};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// An ISO 4217-style currency code (fiat or crypto).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency(Ustr);

impl Currency {
    /// Creates a new [`Currency`], validating the code.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is empty or not uppercase ASCII
    /// alphanumeric.
    pub fn new_checked<T: AsRef<str>>(code: T) -> anyhow::Result<Self> {
        let code = code.as_ref();
        check_valid_string(code, stringify!(code))?;
        check_predicate_true(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "currency code must be uppercase ASCII alphanumeric",
        )?;
        Ok(Self(Ustr::from(code)))
    }

    /// Creates a new [`Currency`].
    ///
    /// # Panics
    ///
    /// Panics if `code` is not a valid currency code.
    pub fn new<T: AsRef<str>>(code: T) -> Self {
        Self::new_checked(code).expect(FAILED)
    }

    /// Returns the currency code as a string slice.
    #[must_use]
    pub fn code(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
