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

//! A snapshot of one venue order's lifecycle state.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use execstate_core::{correctness::FAILED, UUID4, UnixNanos};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    enums::{
        ContingencyType, OrderSide, OrderStatus, OrderType, TimeInForce, TrailingOffsetType,
        TriggerType,
    },
    errors::ValidationError,
    identifiers::{
        AccountId, ClientOrderId, InstrumentId, OrderListId, PositionId, VenueOrderId,
    },
    reports::ExecutionReport,
    types::{
        quantity::{check_non_negative_quantity, check_positive_quantity},
        Price, Quantity,
    },
};

/// Represents an order status at a point in time, as reported by the venue.
///
/// Equality and hashing are identity-based over
/// `(account_id, instrument_id, venue_order_id, ts_accepted)`, so repeated
/// polls of the same venue order deduplicate regardless of field drift.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderStatusReport {
    /// The account ID for the report.
    pub account_id: AccountId,
    /// The instrument ID for the report.
    pub instrument_id: InstrumentId,
    /// The venue-assigned order ID.
    pub venue_order_id: VenueOrderId,
    /// The reported order side.
    pub order_side: OrderSide,
    /// The reported order type.
    pub order_type: OrderType,
    /// The reported time in force.
    pub time_in_force: TimeInForce,
    /// The reported order status at the venue.
    pub order_status: OrderStatus,
    /// The reported original order quantity.
    pub quantity: Quantity,
    /// The reported filled quantity.
    pub filled_qty: Quantity,
    /// The remaining unfilled quantity, `quantity - filled_qty`.
    pub leaves_qty: Quantity,
    /// The report ID.
    pub report_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the order was accepted.
    pub ts_accepted: UnixNanos,
    /// UNIX timestamp (nanoseconds) of the last order status change.
    pub ts_last: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the report was initialized.
    pub ts_init: UnixNanos,
    /// The client order ID (`None` for an external order).
    pub client_order_id: Option<ClientOrderId>,
    /// The order list ID associated with the order.
    pub order_list_id: Option<OrderListId>,
    /// The venue position ID for the order (`None` if not assigned).
    pub venue_position_id: Option<PositionId>,
    /// The reported contingency type.
    pub contingency_type: ContingencyType,
    /// The order expiration (nanoseconds).
    pub expire_time: Option<UnixNanos>,
    /// The reported order price (LIMIT).
    pub price: Option<Price>,
    /// The reported trigger price (STOP).
    pub trigger_price: Option<Price>,
    /// The reported trigger type.
    pub trigger_type: TriggerType,
    /// The trailing offset for the order price (LIMIT).
    pub limit_offset: Option<Decimal>,
    /// The trailing offset for the trigger price (STOP).
    pub trailing_offset: Option<Decimal>,
    /// The reported trailing offset type.
    pub trailing_offset_type: TrailingOffsetType,
    /// The reported average fill price.
    pub avg_px: Option<Decimal>,
    /// The displayed (iceberg) quantity.
    pub display_qty: Option<Quantity>,
    /// If the order only provides liquidity.
    pub post_only: bool,
    /// If the order carries the reduce-only instruction.
    pub reduce_only: bool,
    /// The reported cancel reason.
    pub cancel_reason: Option<String>,
    /// UNIX timestamp (nanoseconds) when the order was triggered (zero if
    /// never triggered).
    pub ts_triggered: UnixNanos,
}

impl OrderStatusReport {
    /// Returns a builder for a report with the given required fields.
    ///
    /// Optional fields default per the venue report contract: identifiers to
    /// `None`, contingency/trigger/trailing-offset types to their unset
    /// variants, flags to `false`, `ts_triggered` to zero, and `report_id` to
    /// a freshly generated value.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn builder(
        account_id: AccountId,
        instrument_id: InstrumentId,
        venue_order_id: VenueOrderId,
        order_side: OrderSide,
        order_type: OrderType,
        time_in_force: TimeInForce,
        order_status: OrderStatus,
        quantity: Quantity,
        filled_qty: Quantity,
        ts_accepted: UnixNanos,
        ts_last: UnixNanos,
        ts_init: UnixNanos,
    ) -> OrderStatusReportBuilder {
        OrderStatusReportBuilder {
            account_id,
            instrument_id,
            venue_order_id,
            order_side,
            order_type,
            time_in_force,
            order_status,
            quantity,
            filled_qty,
            ts_accepted,
            ts_last,
            ts_init,
            report_id: None,
            client_order_id: None,
            order_list_id: None,
            venue_position_id: None,
            contingency_type: ContingencyType::NoContingency,
            expire_time: None,
            price: None,
            trigger_price: None,
            trigger_type: TriggerType::NoTrigger,
            limit_offset: None,
            trailing_offset: None,
            trailing_offset_type: TrailingOffsetType::NoTrailingOffset,
            avg_px: None,
            display_qty: None,
            post_only: false,
            reduce_only: false,
            cancel_reason: None,
            ts_triggered: UnixNanos::default(),
        }
    }

    /// Creates a new [`OrderStatusReport`] with required fields only.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if:
    /// - `quantity` is not positive (> 0).
    /// - `filled_qty` is negative (< 0).
    /// - `filled_qty` exceeds `quantity` (`leaves_qty` would be negative).
    #[allow(clippy::too_many_arguments)]
    pub fn new_checked(
        account_id: AccountId,
        instrument_id: InstrumentId,
        client_order_id: Option<ClientOrderId>,
        venue_order_id: VenueOrderId,
        order_side: OrderSide,
        order_type: OrderType,
        time_in_force: TimeInForce,
        order_status: OrderStatus,
        quantity: Quantity,
        filled_qty: Quantity,
        ts_accepted: UnixNanos,
        ts_last: UnixNanos,
        ts_init: UnixNanos,
        report_id: Option<UUID4>,
    ) -> Result<Self, ValidationError> {
        let mut builder = Self::builder(
            account_id,
            instrument_id,
            venue_order_id,
            order_side,
            order_type,
            time_in_force,
            order_status,
            quantity,
            filled_qty,
            ts_accepted,
            ts_last,
            ts_init,
        );
        if let Some(client_order_id) = client_order_id {
            builder = builder.with_client_order_id(client_order_id);
        }
        if let Some(report_id) = report_id {
            builder = builder.with_report_id(report_id);
        }
        builder.build()
    }

    /// Creates a new [`OrderStatusReport`] with required fields only.
    ///
    /// # Panics
    ///
    /// Panics on any condition in [`Self::new_checked`].
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        account_id: AccountId,
        instrument_id: InstrumentId,
        client_order_id: Option<ClientOrderId>,
        venue_order_id: VenueOrderId,
        order_side: OrderSide,
        order_type: OrderType,
        time_in_force: TimeInForce,
        order_status: OrderStatus,
        quantity: Quantity,
        filled_qty: Quantity,
        ts_accepted: UnixNanos,
        ts_last: UnixNanos,
        ts_init: UnixNanos,
        report_id: Option<UUID4>,
    ) -> Self {
        Self::new_checked(
            account_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            order_side,
            order_type,
            time_in_force,
            order_status,
            quantity,
            filled_qty,
            ts_accepted,
            ts_last,
            ts_init,
            report_id,
        )
        .expect(FAILED)
    }

    /// Returns the identity key for deduplication by venue assignment.
    #[must_use]
    pub const fn identity(&self) -> (AccountId, InstrumentId, VenueOrderId, UnixNanos) {
        (
            self.account_id,
            self.instrument_id,
            self.venue_order_id,
            self.ts_accepted,
        )
    }

    /// Returns `true` if the reported order status is open at the venue.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.order_status.is_open()
    }
}

impl PartialEq for OrderStatusReport {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for OrderStatusReport {}

impl Hash for OrderStatusReport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl ExecutionReport for OrderStatusReport {
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

impl Display for OrderStatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OrderStatusReport(account_id={}, instrument_id={}, venue_order_id={}, \
             order_side={}, order_type={}, time_in_force={}, order_status={}, \
             quantity={}, filled_qty={}, leaves_qty={}, client_order_id={:?}, \
             order_list_id={:?}, venue_position_id={:?}, contingency_type={}, \
             expire_time={:?}, price={:?}, trigger_price={:?}, trigger_type={}, \
             limit_offset={:?}, trailing_offset={:?}, trailing_offset_type={}, \
             avg_px={:?}, display_qty={:?}, post_only={}, reduce_only={}, \
             cancel_reason={:?}, report_id={}, ts_accepted={}, ts_triggered={}, \
             ts_last={}, ts_init={})",
            self.account_id,
            self.instrument_id,
            self.venue_order_id,
            self.order_side,
            self.order_type,
            self.time_in_force,
            self.order_status,
            self.quantity,
            self.filled_qty,
            self.leaves_qty,
            self.client_order_id,
            self.order_list_id,
            self.venue_position_id,
            self.contingency_type,
            self.expire_time,
            self.price,
            self.trigger_price,
            self.trigger_type,
            self.limit_offset,
            self.trailing_offset,
            self.trailing_offset_type,
            self.avg_px,
            self.display_qty,
            self.post_only,
            self.reduce_only,
            self.cancel_reason,
            self.report_id,
            self.ts_accepted,
            self.ts_triggered,
            self.ts_last,
            self.ts_init,
        )
    }
}

/// Builder for [`OrderStatusReport`], carrying the optional fields.
#[derive(Clone, Debug)]
pub struct OrderStatusReportBuilder {
    account_id: AccountId,
    instrument_id: InstrumentId,
    venue_order_id: VenueOrderId,
    order_side: OrderSide,
    order_type: OrderType,
    time_in_force: TimeInForce,
    order_status: OrderStatus,
    quantity: Quantity,
    filled_qty: Quantity,
    ts_accepted: UnixNanos,
    ts_last: UnixNanos,
    ts_init: UnixNanos,
    report_id: Option<UUID4>,
    client_order_id: Option<ClientOrderId>,
    order_list_id: Option<OrderListId>,
    venue_position_id: Option<PositionId>,
    contingency_type: ContingencyType,
    expire_time: Option<UnixNanos>,
    price: Option<Price>,
    trigger_price: Option<Price>,
    trigger_type: TriggerType,
    limit_offset: Option<Decimal>,
    trailing_offset: Option<Decimal>,
    trailing_offset_type: TrailingOffsetType,
    avg_px: Option<Decimal>,
    display_qty: Option<Quantity>,
    post_only: bool,
    reduce_only: bool,
    cancel_reason: Option<String>,
    ts_triggered: UnixNanos,
}

impl OrderStatusReportBuilder {
    /// Sets the report ID (defaults to a generated value).
    #[must_use]
    pub const fn with_report_id(mut self, report_id: UUID4) -> Self {
        self.report_id = Some(report_id);
        self
    }

    /// Sets the client order ID.
    #[must_use]
    pub const fn with_client_order_id(mut self, client_order_id: ClientOrderId) -> Self {
        self.client_order_id = Some(client_order_id);
        self
    }

    /// Sets the order list ID.
    #[must_use]
    pub const fn with_order_list_id(mut self, order_list_id: OrderListId) -> Self {
        self.order_list_id = Some(order_list_id);
        self
    }

    /// Sets the venue position ID.
    #[must_use]
    pub const fn with_venue_position_id(mut self, venue_position_id: PositionId) -> Self {
        self.venue_position_id = Some(venue_position_id);
        self
    }

    /// Sets the contingency type.
    #[must_use]
    pub const fn with_contingency_type(mut self, contingency_type: ContingencyType) -> Self {
        self.contingency_type = contingency_type;
        self
    }

    /// Sets the expire time.
    #[must_use]
    pub const fn with_expire_time(mut self, expire_time: UnixNanos) -> Self {
        self.expire_time = Some(expire_time);
        self
    }

    /// Sets the order price.
    #[must_use]
    pub const fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the trigger price.
    #[must_use]
    pub const fn with_trigger_price(mut self, trigger_price: Price) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Sets the trigger type.
    #[must_use]
    pub const fn with_trigger_type(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = trigger_type;
        self
    }

    /// Sets the limit offset.
    #[must_use]
    pub const fn with_limit_offset(mut self, limit_offset: Decimal) -> Self {
        self.limit_offset = Some(limit_offset);
        self
    }

    /// Sets the trailing offset.
    #[must_use]
    pub const fn with_trailing_offset(mut self, trailing_offset: Decimal) -> Self {
        self.trailing_offset = Some(trailing_offset);
        self
    }

    /// Sets the trailing offset type.
    #[must_use]
    pub const fn with_trailing_offset_type(
        mut self,
        trailing_offset_type: TrailingOffsetType,
    ) -> Self {
        self.trailing_offset_type = trailing_offset_type;
        self
    }

    /// Sets the average fill price.
    #[must_use]
    pub const fn with_avg_px(mut self, avg_px: Decimal) -> Self {
        self.avg_px = Some(avg_px);
        self
    }

    /// Sets the displayed (iceberg) quantity.
    #[must_use]
    pub const fn with_display_qty(mut self, display_qty: Quantity) -> Self {
        self.display_qty = Some(display_qty);
        self
    }

    /// Sets the `post_only` flag.
    #[must_use]
    pub const fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = post_only;
        self
    }

    /// Sets the `reduce_only` flag.
    #[must_use]
    pub const fn with_reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = reduce_only;
        self
    }

    /// Sets the cancel reason.
    #[must_use]
    pub fn with_cancel_reason(mut self, cancel_reason: impl Into<String>) -> Self {
        self.cancel_reason = Some(cancel_reason.into());
        self
    }

    /// Sets the triggered timestamp.
    #[must_use]
    pub const fn with_ts_triggered(mut self, ts_triggered: UnixNanos) -> Self {
        self.ts_triggered = ts_triggered;
        self
    }

    /// Validates the invariants and builds the report.
    ///
    /// Checks are applied in order: quantity positivity, filled quantity
    /// non-negativity, trigger consistency, trailing consistency; the derived
    /// `leaves_qty` is then computed at the quantity's precision and must be
    /// non-negative.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first violated constraint.
    pub fn build(self) -> Result<OrderStatusReport, ValidationError> {
        check_positive_quantity(self.quantity, "quantity")?;
        check_non_negative_quantity(self.filled_qty, "filled_qty")?;

        if let Some(trigger_price) = self.trigger_price {
            if trigger_price.is_positive() && self.trigger_type == TriggerType::NoTrigger {
                return Err(ValidationError::new(
                    "trigger_type",
                    self.trigger_type.to_string(),
                ));
            }
        }
        if (self.limit_offset.is_some() || self.trailing_offset.is_some())
            && self.trailing_offset_type == TrailingOffsetType::NoTrailingOffset
        {
            return Err(ValidationError::new(
                "trailing_offset_type",
                self.trailing_offset_type.to_string(),
            ));
        }

        let mut leaves = self.quantity.as_decimal() - self.filled_qty.as_decimal();
        leaves.rescale(self.quantity.precision());
        if leaves < Decimal::ZERO {
            return Err(ValidationError::new("leaves_qty", leaves.to_string()));
        }

        Ok(OrderStatusReport {
            account_id: self.account_id,
            instrument_id: self.instrument_id,
            venue_order_id: self.venue_order_id,
            order_side: self.order_side,
            order_type: self.order_type,
            time_in_force: self.time_in_force,
            order_status: self.order_status,
            quantity: self.quantity,
            filled_qty: self.filled_qty,
            leaves_qty: Quantity::new(leaves),
            report_id: self.report_id.unwrap_or_default(),
            ts_accepted: self.ts_accepted,
            ts_last: self.ts_last,
            ts_init: self.ts_init,
            client_order_id: self.client_order_id,
            order_list_id: self.order_list_id,
            venue_position_id: self.venue_position_id,
            contingency_type: self.contingency_type,
            expire_time: self.expire_time,
            price: self.price,
            trigger_price: self.trigger_price,
            trigger_type: self.trigger_type,
            limit_offset: self.limit_offset,
            trailing_offset: self.trailing_offset,
            trailing_offset_type: self.trailing_offset_type,
            avg_px: self.avg_px,
            display_qty: self.display_qty,
            post_only: self.post_only,
            reduce_only: self.reduce_only,
            cancel_reason: self.cancel_reason,
            ts_triggered: self.ts_triggered,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_builder() -> OrderStatusReportBuilder {
        OrderStatusReport::builder(
            AccountId::from("SIM-001"),
            InstrumentId::from("AAPL.NASDAQ"),
            VenueOrderId::from("V-1"),
            OrderSide::Buy,
            OrderType::Limit,
            TimeInForce::Gtc,
            OrderStatus::PartiallyFilled,
            Quantity::from("10"),
            Quantity::from("3"),
            UnixNanos::from(1_000_000_000),
            UnixNanos::from(2_000_000_000),
            UnixNanos::from(3_000_000_000),
        )
    }

    #[rstest]
    fn test_leaves_qty_derived_at_construction() {
        let report = test_builder().build().unwrap();
        assert_eq!(report.leaves_qty, Quantity::from("7"));
        assert_eq!(report.leaves_qty.precision(), report.quantity.precision());
        assert!(report.is_open());
    }

    #[rstest]
    fn test_leaves_qty_uses_quantity_precision() {
        let report = OrderStatusReport::builder(
            AccountId::from("SIM-001"),
            InstrumentId::from("ETH-PERP.DERIBIT"),
            VenueOrderId::from("V-2"),
            OrderSide::Sell,
            OrderType::Limit,
            TimeInForce::Gtc,
            OrderStatus::PartiallyFilled,
            Quantity::from("2.50"),
            Quantity::from("1.0"),
            UnixNanos::from(1),
            UnixNanos::from(2),
            UnixNanos::from(3),
        )
        .build()
        .unwrap();
        assert_eq!(report.leaves_qty, Quantity::from("1.50"));
        assert_eq!(report.leaves_qty.precision(), 2);
    }

    #[rstest]
    fn test_quantity_must_be_positive() {
        let mut builder = test_builder();
        builder.quantity = Quantity::from("0");
        let error = builder.build().unwrap_err();
        assert_eq!(error.constraint, "quantity");
    }

    #[rstest]
    fn test_filled_qty_must_be_non_negative() {
        let mut builder = test_builder();
        builder.filled_qty = Quantity::new(dec!(-1));
        let error = builder.build().unwrap_err();
        assert_eq!(error.constraint, "filled_qty");
    }

    #[rstest]
    fn test_overfill_rejected() {
        let mut builder = test_builder();
        builder.filled_qty = Quantity::from("11");
        let error = builder.build().unwrap_err();
        assert_eq!(error.constraint, "leaves_qty");
    }

    #[rstest]
    fn test_trigger_price_requires_trigger_type() {
        let error = test_builder()
            .with_trigger_price(Price::from("105.00"))
            .build()
            .unwrap_err();
        assert_eq!(error.constraint, "trigger_type");

        let report = test_builder()
            .with_trigger_price(Price::from("105.00"))
            .with_trigger_type(TriggerType::LastPrice)
            .build()
            .unwrap();
        assert_eq!(report.trigger_type, TriggerType::LastPrice);
    }

    #[rstest]
    fn test_trailing_offset_requires_offset_type() {
        let error = test_builder()
            .with_trailing_offset(dec!(0.5))
            .build()
            .unwrap_err();
        assert_eq!(error.constraint, "trailing_offset_type");

        let error = test_builder()
            .with_limit_offset(dec!(0.25))
            .build()
            .unwrap_err();
        assert_eq!(error.constraint, "trailing_offset_type");

        assert!(test_builder()
            .with_trailing_offset(dec!(0.5))
            .with_trailing_offset_type(TrailingOffsetType::BasisPoints)
            .build()
            .is_ok());
    }

    #[rstest]
    fn test_equality_is_identity_based() {
        let report1 = test_builder().build().unwrap();
        let mut report2 = test_builder()
            .with_cancel_reason("user requested")
            .build()
            .unwrap();
        report2.order_side = OrderSide::Sell;
        report2.filled_qty = Quantity::from("9");

        // Same (account, instrument, venue order, ts_accepted) => equal
        assert_eq!(report1, report2);

        let mut report3 = test_builder().build().unwrap();
        report3.venue_order_id = VenueOrderId::from("V-99");
        assert_ne!(report1, report3);

        let mut report4 = test_builder().build().unwrap();
        report4.ts_accepted = UnixNanos::from(9);
        assert_ne!(report1, report4);
    }

    #[rstest]
    #[case(OrderStatus::Accepted, true)]
    #[case(OrderStatus::PartiallyFilled, true)]
    #[case(OrderStatus::Filled, false)]
    #[case(OrderStatus::Canceled, false)]
    #[case(OrderStatus::Rejected, false)]
    fn test_is_open(#[case] status: OrderStatus, #[case] expected: bool) {
        let mut builder = test_builder();
        builder.order_status = status;
        builder.filled_qty = Quantity::from("0");
        let report = builder.build().unwrap();
        assert_eq!(report.is_open(), expected);
    }

    #[rstest]
    fn test_new_checked_defaults() {
        let report = OrderStatusReport::new_checked(
            AccountId::from("SIM-001"),
            InstrumentId::from("AAPL.NASDAQ"),
            None,
            VenueOrderId::from("V-1"),
            OrderSide::Buy,
            OrderType::Market,
            TimeInForce::Ioc,
            OrderStatus::Filled,
            Quantity::from("5"),
            Quantity::from("5"),
            UnixNanos::from(1),
            UnixNanos::from(2),
            UnixNanos::from(3),
            None,
        )
        .unwrap();
        assert_eq!(report.leaves_qty, Quantity::from("0"));
        assert_eq!(report.contingency_type, ContingencyType::NoContingency);
        assert_eq!(report.trigger_type, TriggerType::NoTrigger);
        assert_eq!(
            report.trailing_offset_type,
            TrailingOffsetType::NoTrailingOffset,
        );
        assert!(report.ts_triggered.is_zero());
        assert!(!report.post_only);
        assert!(!report.reduce_only);
    }

    #[rstest]
    fn test_display() {
        let report = test_builder().build().unwrap();
        let display = report.to_string();
        assert!(display.starts_with("OrderStatusReport("));
        assert!(display.contains("venue_order_id=V-1"));
        assert!(display.contains("leaves_qty=7"));
    }
}
