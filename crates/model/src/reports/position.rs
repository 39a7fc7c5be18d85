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

//! A snapshot of the venue's view of net position in one instrument.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use execstate_core::{UUID4, UnixNanos};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    enums::PositionSide,
    identifiers::{AccountId, InstrumentId, PositionId},
    reports::ExecutionReport,
    types::Quantity,
};

/// Represents a position status at a point in time, as reported by the venue.
///
/// `quantity` is a magnitude; callers supply zero for a flat side (not
/// independently validated here). Equality and hashing are identity-based
/// over `(account_id, instrument_id, ts_last)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PositionStatusReport {
    /// The account ID for the report.
    pub account_id: AccountId,
    /// The instrument ID for the position.
    pub instrument_id: InstrumentId,
    /// The reported position side at the venue.
    pub position_side: PositionSide,
    /// The reported position quantity (unsigned magnitude).
    pub quantity: Quantity,
    /// The signed position quantity: negated for SHORT, as-is otherwise.
    pub signed_decimal_qty: Decimal,
    /// The report ID.
    pub report_id: UUID4,
    /// UNIX timestamp (nanoseconds) of the last position change.
    pub ts_last: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the report was initialized.
    pub ts_init: UnixNanos,
    /// The venue position ID (`None` if not assigned).
    pub venue_position_id: Option<PositionId>,
}

impl PositionStatusReport {
    /// Creates a new [`PositionStatusReport`], computing the signed quantity
    /// from the position side.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        account_id: AccountId,
        instrument_id: InstrumentId,
        position_side: PositionSide,
        quantity: Quantity,
        ts_last: UnixNanos,
        ts_init: UnixNanos,
        report_id: Option<UUID4>,
        venue_position_id: Option<PositionId>,
    ) -> Self {
        let signed_decimal_qty = if position_side == PositionSide::Short {
            -quantity.as_decimal()
        } else {
            quantity.as_decimal()
        };

        Self {
            account_id,
            instrument_id,
            position_side,
            quantity,
            signed_decimal_qty,
            report_id: report_id.unwrap_or_default(),
            ts_last,
            ts_init,
            venue_position_id,
        }
    }

    /// Returns the identity key for deduplication of position snapshots.
    #[must_use]
    pub const fn identity(&self) -> (AccountId, InstrumentId, UnixNanos) {
        (self.account_id, self.instrument_id, self.ts_last)
    }

    /// Returns `true` if the reported position is flat.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.position_side == PositionSide::Flat
    }

    /// Returns `true` if the reported position is net long.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.position_side == PositionSide::Long
    }

    /// Returns `true` if the reported position is net short.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.position_side == PositionSide::Short
    }
}

impl PartialEq for PositionStatusReport {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for PositionStatusReport {}

impl Hash for PositionStatusReport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl ExecutionReport for PositionStatusReport {
    fn account_id(&self) -> AccountId {
        self.account_id
    }

    fn instrument_id(&self) -> InstrumentId {
        self.instrument_id
    }

    fn report_id(&self) -> UUID4 {
        self.report_id
    }

    fn ts_init(&self) -> UnixNanos {
        self.ts_init
    }
}

impl Display for PositionStatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PositionStatusReport(account_id={}, instrument_id={}, venue_position_id={:?}, \
             position_side={}, quantity={}, signed_decimal_qty={}, report_id={}, ts_last={}, \
             ts_init={})",
            self.account_id,
            self.instrument_id,
            self.venue_position_id,
            self.position_side,
            self.quantity,
            self.signed_decimal_qty,
            self.report_id,
            self.ts_last,
            self.ts_init,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_position(side: PositionSide, quantity: &str, ts_last: u64) -> PositionStatusReport {
        PositionStatusReport::new(
            AccountId::from("SIM-001"),
            InstrumentId::from("AAPL.NASDAQ"),
            side,
            Quantity::from(quantity),
            UnixNanos::from(ts_last),
            UnixNanos::from(ts_last + 1),
            None,
            None,
        )
    }

    #[rstest]
    #[case(PositionSide::Long, "5", dec!(5))]
    #[case(PositionSide::Short, "5", dec!(-5))]
    #[case(PositionSide::Flat, "0", dec!(0))]
    fn test_signed_decimal_qty(
        #[case] side: PositionSide,
        #[case] quantity: &str,
        #[case] expected: Decimal,
    ) {
        let report = test_position(side, quantity, 1_000);
        assert_eq!(report.signed_decimal_qty, expected);
    }

    #[rstest]
    fn test_side_predicates() {
        assert!(test_position(PositionSide::Long, "1", 1).is_long());
        assert!(test_position(PositionSide::Short, "1", 1).is_short());
        assert!(test_position(PositionSide::Flat, "0", 1).is_flat());
    }

    #[rstest]
    fn test_equality_is_identity_based() {
        let report1 = test_position(PositionSide::Long, "5", 1_000);
        let report2 = test_position(PositionSide::Short, "9", 1_000);
        assert_eq!(report1, report2);

        let report3 = test_position(PositionSide::Long, "5", 2_000);
        assert_ne!(report1, report3);
    }

    #[rstest]
    fn test_display() {
        let display = test_position(PositionSide::Short, "5", 1_000).to_string();
        assert!(display.starts_with("PositionStatusReport("));
        assert!(display.contains("signed_decimal_qty=-5"));
    }
}
