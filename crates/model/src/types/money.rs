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

//! A monetary amount in a specific currency.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ConversionError, types::Currency};

/// A currency-tagged decimal amount.
///
/// The canonical string form is `"{amount} {currency}"`, e.g. `"1.50 USD"`.
/// A commission of zero is represented as a zero amount in the commission
/// currency, never as an absent value.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The decimal amount.
    pub amount: Decimal,
    /// The currency the amount is denominated in.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] from an amount and currency.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl FromStr for Money {
    type Err = ConversionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConversionError::InvalidMoney {
            field: "money",
            value: value.to_string(),
        };
        let (amount, code) = value.rsplit_once(' ').ok_or_else(invalid)?;
        let amount = Decimal::from_str_exact(amount).map_err(|_| invalid())?;
        let currency = Currency::new_checked(code).map_err(|_| invalid())?;
        Ok(Self::new(amount, currency))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
