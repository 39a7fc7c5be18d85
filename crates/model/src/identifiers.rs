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

//! Identifier types for accounts, clients, instruments, orders, trades and
//! venues.
//!
//! Identifiers are interned strings (`Ustr`), so they are `Copy` and cheap to
//! hash and compare as map keys.

use std::str::FromStr;

use execstate_core::correctness::{check_valid_string, FAILED};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::errors::ConversionError;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name(Ustr);

        impl $name {
            /// Creates a new identifier, validating the string.
            ///
            /// # Errors
            ///
            /// Returns an error if `value` is empty or has surrounding
            /// whitespace.
            pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
                check_valid_string(value.as_ref(), stringify!($name))?;
                Ok(Self(Ustr::from(value.as_ref())))
            }

            /// Creates a new identifier.
            ///
            /// # Panics
            ///
            /// Panics if `value` is not a valid identifier string.
            pub fn new<T: AsRef<str>>(value: T) -> Self {
                Self::new_checked(value).expect(FAILED)
            }

            /// Returns the inner interned string.
            #[must_use]
            pub const fn inner(&self) -> Ustr {
                self.0
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier!(
    /// A venue account identifier.
    AccountId
);
identifier!(
    /// An execution client identifier.
    ClientId
);
identifier!(
    /// A client-assigned order identifier.
    ClientOrderId
);
identifier!(
    /// A client-assigned order list identifier.
    OrderListId
);
identifier!(
    /// A position identifier (assigned by the venue).
    PositionId
);
identifier!(
    /// A trade match identifier (assigned by the venue).
    TradeId
);
identifier!(
    /// A venue-assigned order identifier.
    VenueOrderId
);
identifier!(
    /// An instrument ticker symbol.
    Symbol
);
identifier!(
    /// A trading venue identifier.
    Venue
);

/// An instrument identifier, a symbol qualified by its venue.
///
/// The canonical string form is `"{symbol}.{venue}"`; the venue is everything
/// after the last dot, so dotted symbols remain representable.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct InstrumentId {
    /// The instrument ticker symbol.
    pub symbol: Symbol,
    /// The venue the symbol trades on.
    pub venue: Venue,
}

impl InstrumentId {
    /// Creates a new [`InstrumentId`] from a symbol and venue.
    #[must_use]
    pub const fn new(symbol: Symbol, venue: Venue) -> Self {
        Self { symbol, venue }
    }
}

impl FromStr for InstrumentId {
    type Err = ConversionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConversionError::InvalidIdentifier {
            field: "instrument_id",
            value: value.to_string(),
        };
        let (symbol, venue) = value.rsplit_once('.').ok_or_else(invalid)?;
        let symbol = Symbol::new_checked(symbol).map_err(|_| invalid())?;
        let venue = Venue::new_checked(venue).map_err(|_| invalid())?;
        Ok(Self::new(symbol, venue))
    }
}

impl From<&str> for InstrumentId {
    fn from(value: &str) -> Self {
        value.parse().expect(FAILED)
    }
}

impl std::fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.symbol, self.venue)
    }
}

impl Serialize for InstrumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InstrumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
