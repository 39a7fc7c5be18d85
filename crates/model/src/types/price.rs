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

//! A price in an instrument's quote currency.

use std::str::FromStr;

use execstate_core::correctness::FAILED;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with a fixed decimal precision.
///
/// Negative values are permitted (spreads and certain derivatives quote
/// through zero).
#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a new [`Price`] from the given decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns the decimal precision (number of fractional digits).
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.0.scale()
    }

    /// Returns `true` if the price is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(Decimal::from_str_exact(value)?))
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        value.parse().expect(FAILED)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_price_parse_and_display() {
        let price = Price::from("150.25");
        assert_eq!(price.precision(), 2);
        assert!(price.is_positive());
        assert_eq!(price.to_string(), "150.25");
    }

    #[rstest]
    fn test_price_negative_permitted() {
        let price = Price::from("-0.50");
        assert!(!price.is_positive());
    }

    #[rstest]
    fn test_price_from_str_invalid() {
        assert!("1.2.3".parse::<Price>().is_err());
    }
}
