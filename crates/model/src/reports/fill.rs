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

//! A report of a single trade execution against an order.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use execstate_core::{correctness::FAILED, UUID4, UnixNanos};
use serde::{Deserialize, Serialize};

use crate::{
    enums::{LiquiditySide, OrderSide},
    errors::ValidationError,
    identifiers::{AccountId, ClientOrderId, InstrumentId, PositionId, TradeId, VenueOrderId},
    reports::ExecutionReport,
    types::{quantity::check_positive_quantity, Money, Price, Quantity},
};

/// Represents a single fill (trade execution) reported by the venue.
///
/// Equality and hashing are identity-based over
/// `(account_id, instrument_id, venue_order_id, trade_id, ts_event)`, which
/// guards against double-booking the same fill across repeated venue polls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FillReport {
    /// The account ID for the report.
    pub account_id: AccountId,
    /// The instrument ID for the trade.
    pub instrument_id: InstrumentId,
    /// The venue-assigned order ID for the trade.
    pub venue_order_id: VenueOrderId,
    /// The trade match ID (assigned by the venue).
    pub trade_id: TradeId,
    /// The reported order side for the trade.
    pub order_side: OrderSide,
    /// The reported quantity of the trade.
    pub last_qty: Quantity,
    /// The reported price of the trade.
    pub last_px: Price,
    /// The commission for the trade (a zero amount in the commission currency
    /// if none was charged).
    pub commission: Money,
    /// The reported liquidity side for the trade.
    pub liquidity_side: LiquiditySide,
    /// The report ID.
    pub report_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the trade occurred.
    pub ts_event: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the report was initialized.
    pub ts_init: UnixNanos,
    /// The client order ID for the trade (`None` for an external order).
    pub client_order_id: Option<ClientOrderId>,
    /// The venue position ID for the trade (`None` if not assigned).
    pub venue_position_id: Option<PositionId>,
}

impl FillReport {
    /// Creates a new [`FillReport`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `last_qty` is not positive (> 0).
    #[allow(clippy::too_many_arguments)]
    pub fn new_checked(
        account_id: AccountId,
        instrument_id: InstrumentId,
        venue_order_id: VenueOrderId,
        trade_id: TradeId,
        order_side: OrderSide,
        last_qty: Quantity,
        last_px: Price,
        commission: Money,
        liquidity_side: LiquiditySide,
        client_order_id: Option<ClientOrderId>,
        venue_position_id: Option<PositionId>,
        ts_event: UnixNanos,
        ts_init: UnixNanos,
        report_id: Option<UUID4>,
    ) -> Result<Self, ValidationError> {
        check_positive_quantity(last_qty, "last_qty")?;

        Ok(Self {
            account_id,
            instrument_id,
            venue_order_id,
            trade_id,
            order_side,
            last_qty,
            last_px,
            commission,
            liquidity_side,
            report_id: report_id.unwrap_or_default(),
            ts_event,
            ts_init,
            client_order_id,
            venue_position_id,
        })
    }

    /// Creates a new [`FillReport`].
    ///
    /// # Panics
    ///
    /// Panics if `last_qty` is not positive (> 0).
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        account_id: AccountId,
        instrument_id: InstrumentId,
        venue_order_id: VenueOrderId,
        trade_id: TradeId,
        order_side: OrderSide,
        last_qty: Quantity,
        last_px: Price,
        commission: Money,
        liquidity_side: LiquiditySide,
        client_order_id: Option<ClientOrderId>,
        venue_position_id: Option<PositionId>,
        ts_event: UnixNanos,
        ts_init: UnixNanos,
        report_id: Option<UUID4>,
    ) -> Self {
        Self::new_checked(
            account_id,
            instrument_id,
            venue_order_id,
            trade_id,
            order_side,
            last_qty,
            last_px,
            commission,
            liquidity_side,
            client_order_id,
            venue_position_id,
            ts_event,
            ts_init,
            report_id,
        )
        .expect(FAILED)
    }

    /// Returns the identity key for deduplication of fills.
    #[must_use]
    pub const fn identity(
        &self,
    ) -> (AccountId, InstrumentId, VenueOrderId, TradeId, UnixNanos) {
        (
            self.account_id,
            self.instrument_id,
            self.venue_order_id,
            self.trade_id,
            self.ts_event,
        )
    }

    /// Returns `true` if the fill has a client order ID.
    #[must_use]
    pub const fn has_client_order_id(&self) -> bool {
        self.client_order_id.is_some()
    }

    /// Returns `true` if the fill has a venue position ID.
    #[must_use]
    pub const fn has_venue_position_id(&self) -> bool {
        self.venue_position_id.is_some()
    }
}

impl PartialEq for FillReport {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for FillReport {}

impl Hash for FillReport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl ExecutionReport for FillReport {
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

impl Display for FillReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FillReport(account_id={}, instrument_id={}, venue_order_id={}, trade_id={}, \
             order_side={}, last_qty={}, last_px={}, commission={}, liquidity_side={}, \
             client_order_id={:?}, venue_position_id={:?}, report_id={}, ts_event={}, \
             ts_init={})",
            self.account_id,
            self.instrument_id,
            self.venue_order_id,
            self.trade_id,
            self.order_side,
            self.last_qty,
            self.last_px,
            self.commission,
            self.liquidity_side,
            self.client_order_id,
            self.venue_position_id,
            self.report_id,
            self.ts_event,
            self.ts_init,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::Currency;

    fn test_fill(trade_id: &str, ts_event: u64) -> FillReport {
        FillReport::new(
            AccountId::from("SIM-001"),
            InstrumentId::from("AAPL.NASDAQ"),
            VenueOrderId::from("V-1"),
            TradeId::from(trade_id),
            OrderSide::Buy,
            Quantity::from("50"),
            Price::from("150.00"),
            Money::new(dec!(1.00), Currency::from("USD")),
            LiquiditySide::Taker,
            None,
            None,
            UnixNanos::from(ts_event),
            UnixNanos::from(ts_event + 1),
            None,
        )
    }

    #[rstest]
    fn test_last_qty_must_be_positive() {
        let error = FillReport::new_checked(
            AccountId::from("SIM-001"),
            InstrumentId::from("AAPL.NASDAQ"),
            VenueOrderId::from("V-1"),
            TradeId::from("T-1"),
            OrderSide::Buy,
            Quantity::from("0"),
            Price::from("150.00"),
            Money::zero(Currency::from("USD")),
            LiquiditySide::Maker,
            None,
            None,
            UnixNanos::from(1),
            UnixNanos::from(2),
            None,
        )
        .unwrap_err();
        assert_eq!(error.constraint, "last_qty");
    }

    #[rstest]
    fn test_equality_is_identity_based() {
        let fill1 = test_fill("T-1", 1_000);
        let mut fill2 = test_fill("T-1", 1_000);
        fill2.last_qty = Quantity::from("25");
        fill2.liquidity_side = LiquiditySide::Maker;
        assert_eq!(fill1, fill2);

        let fill3 = test_fill("T-2", 1_000);
        assert_ne!(fill1, fill3);

        let fill4 = test_fill("T-1", 2_000);
        assert_ne!(fill1, fill4);
    }

    #[rstest]
    fn test_optional_id_helpers() {
        let mut fill = test_fill("T-1", 1_000);
        assert!(!fill.has_client_order_id());
        assert!(!fill.has_venue_position_id());

        fill.client_order_id = Some(ClientOrderId::from("O-1"));
        fill.venue_position_id = Some(PositionId::from("P-1"));
        assert!(fill.has_client_order_id());
        assert!(fill.has_venue_position_id());
    }

    #[rstest]
    fn test_display() {
        let display = test_fill("T-1", 1_000).to_string();
        assert!(display.starts_with("FillReport("));
        assert!(display.contains("trade_id=T-1"));
        assert!(display.contains("commission=1.00 USD"));
    }
}
