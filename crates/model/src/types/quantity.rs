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

//! An order or position quantity.

use std::str::FromStr;

use execstate_core::correctness::FAILED;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A quantity with a fixed decimal precision.
///
/// The wrapper itself places no sign restriction; sign invariants (positive
/// order quantity, non-negative filled quantity) belong to the report
/// constructors which enforce them via [`check_positive_quantity`] and
/// [`check_non_negative_quantity`].
#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Creates a new [`Quantity`] from the given decimal value.
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

    /// Returns `true` if the quantity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the quantity is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the quantity is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

/// Checks the quantity is positive (> 0) for the named constraint.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `value` is zero or negative.
pub fn check_positive_quantity(
    value: Quantity,
    constraint: &'static str,
) -> Result<(), ValidationError> {
    if !value.is_positive() {
        return Err(ValidationError::new(constraint, value.to_string()));
    }
    Ok(())
}

/// Checks the quantity is non-negative (>= 0) for the named constraint.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `value` is negative.
pub fn check_non_negative_quantity(
    value: Quantity,
    constraint: &'static str,
) -> Result<(), ValidationError> {
    if value.is_negative() {
        return Err(ValidationError::new(constraint, value.to_string()));
    }
    Ok(())
}

impl FromStr for Quantity {
    type Err = rust_decimal::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(Decimal::from_str_exact(value)?))
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        value.parse().expect(FAILED)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn test_quantity_precision_follows_scale() {
        assert_eq!(Quantity::from("100").precision(), 0);
        assert_eq!(Quantity::from("0.250").precision(), 3);
    }

    #[rstest]
    fn test_quantity_sign_predicates() {
        assert!(Quantity::from("1.5").is_positive());
        assert!(Quantity::from("0").is_zero());
        assert!(Quantity::from("-2").is_negative());
    }

    #[rstest]
    fn test_check_positive_quantity() {
        assert!(check_positive_quantity(Quantity::from("10"), "quantity").is_ok());

        let error = check_positive_quantity(Quantity::from("0"), "quantity").unwrap_err();
        assert_eq!(error.constraint, "quantity");
        assert_eq!(error.value, "0");
    }

    #[rstest]
    fn test_check_non_negative_quantity() {
        assert!(check_non_negative_quantity(Quantity::from("0"), "filled_qty").is_ok());
        assert!(check_non_negative_quantity(Quantity::new(dec!(-0.1)), "filled_qty").is_err());
    }

    #[rstest]
    fn test_quantity_from_str_invalid() {
        assert!("ten".parse::<Quantity>().is_err());
    }
}
