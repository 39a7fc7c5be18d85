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

//! Consolidated execution state for one (client, account, venue) tuple.

use std::fmt::Display;

use execstate_core::{UUID4, UnixNanos};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    identifiers::{AccountId, ClientId, InstrumentId, Venue, VenueOrderId},
    reports::{FillReport, OrderStatusReport, PositionStatusReport},
};

/// An execution mass status for one execution client: the status of all its
/// orders, the trades for those orders, and its open positions.
///
/// Follows a single-writer-then-multi-reader lifecycle per reconciliation
/// cycle: the ingestion adapter populates it via the `add_*` operations, then
/// hands it over as a read-only snapshot. No internal locking is provided;
/// the handoff must establish the memory-visibility boundary, and `add_*`
/// must not be called after it.
///
/// Aggregation policy is per report kind: order reports are keyed by venue
/// order ID with last-write-wins; fill and position reports are appended in
/// arrival order under their venue order ID / instrument ID respectively.
/// There is no removal or update operation; a correction is a fresh add.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionMassStatus {
    /// The client ID for the report.
    pub client_id: ClientId,
    /// The account ID for the report.
    pub account_id: AccountId,
    /// The venue for the report.
    pub venue: Venue,
    /// The report ID.
    pub report_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the object was initialized.
    pub ts_init: UnixNanos,
    order_reports: IndexMap<VenueOrderId, OrderStatusReport>,
    fill_reports: IndexMap<VenueOrderId, Vec<FillReport>>,
    position_reports: IndexMap<InstrumentId, Vec<PositionStatusReport>>,
}

impl ExecutionMassStatus {
    /// Creates a new, empty [`ExecutionMassStatus`].
    #[must_use]
    pub fn new(
        client_id: ClientId,
        account_id: AccountId,
        venue: Venue,
        ts_init: UnixNanos,
        report_id: Option<UUID4>,
    ) -> Self {
        Self {
            client_id,
            account_id,
            venue,
            report_id: report_id.unwrap_or_default(),
            ts_init,
            order_reports: IndexMap::new(),
            fill_reports: IndexMap::new(),
            position_reports: IndexMap::new(),
        }
    }

    /// Returns a copy of the order reports map.
    ///
    /// The copy is shallow at the mapping level: mutating it never affects
    /// this mass status; report values are immutable and safely shared.
    #[must_use]
    pub fn order_reports(&self) -> IndexMap<VenueOrderId, OrderStatusReport> {
        self.order_reports.clone()
    }

    /// Returns a copy of the fill reports map.
    #[must_use]
    pub fn fill_reports(&self) -> IndexMap<VenueOrderId, Vec<FillReport>> {
        self.fill_reports.clone()
    }

    /// Returns a copy of the position reports map.
    #[must_use]
    pub fn position_reports(&self) -> IndexMap<InstrumentId, Vec<PositionStatusReport>> {
        self.position_reports.clone()
    }

    /// Adds order reports, keyed by venue order ID.
    ///
    /// A later report for the same venue order ID replaces the earlier one
    /// (last write wins); the caller supplies reports in venue-freshness
    /// order.
    pub fn add_order_reports(&mut self, reports: Vec<OrderStatusReport>) {
        for report in reports {
            self.order_reports.insert(report.venue_order_id, report);
        }
    }

    /// Adds fill reports, appended in arrival order under their venue order
    /// ID.
    ///
    /// Duplicates are not reconciled here; that judgment belongs to the
    /// consumer.
    pub fn add_fill_reports(&mut self, reports: Vec<FillReport>) {
        for report in reports {
            self.fill_reports
                .entry(report.venue_order_id)
                .or_default()
                .push(report);
        }
    }

    /// Adds position reports, appended in arrival order under their
    /// instrument ID.
    pub fn add_position_reports(&mut self, reports: Vec<PositionStatusReport>) {
        for report in reports {
            self.position_reports
                .entry(report.instrument_id)
                .or_default()
                .push(report);
        }
    }
}

impl Display for ExecutionMassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ExecutionMassStatus(client_id={}, account_id={}, venue={}, order_reports={:?}, \
             fill_reports={:?}, position_reports={:?}, report_id={}, ts_init={})",
            self.client_id,
            self.account_id,
            self.venue,
            self.order_reports,
            self.fill_reports,
            self.position_reports,
            self.report_id,
            self.ts_init,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        enums::{
            LiquiditySide, OrderSide, OrderStatus, OrderType, PositionSide, TimeInForce,
        },
        identifiers::TradeId,
        types::{Currency, Money, Price, Quantity},
    };

    fn test_mass_status() -> ExecutionMassStatus {
        ExecutionMassStatus::new(
            ClientId::from("SIM"),
            AccountId::from("SIM-001"),
            Venue::from("NASDAQ"),
            UnixNanos::from(1_000_000_000),
            None,
        )
    }

    fn test_order_report(venue_order_id: &str, side: OrderSide) -> OrderStatusReport {
        OrderStatusReport::new(
            AccountId::from("SIM-001"),
            InstrumentId::from("AAPL.NASDAQ"),
            None,
            VenueOrderId::from(venue_order_id),
            side,
            OrderType::Limit,
            TimeInForce::Gtc,
            OrderStatus::Accepted,
            Quantity::from("100"),
            Quantity::from("0"),
            UnixNanos::from(1_000_000_000),
            UnixNanos::from(2_000_000_000),
            UnixNanos::from(3_000_000_000),
            None,
        )
    }

    fn test_fill_report(venue_order_id: &str, trade_id: &str, last_qty: &str) -> FillReport {
        FillReport::new(
            AccountId::from("SIM-001"),
            InstrumentId::from("AAPL.NASDAQ"),
            VenueOrderId::from(venue_order_id),
            TradeId::from(trade_id),
            OrderSide::Buy,
            Quantity::from(last_qty),
            Price::from("150.00"),
            Money::new(dec!(1.00), Currency::from("USD")),
            LiquiditySide::Taker,
            None,
            None,
            UnixNanos::from(1_500_000_000),
            UnixNanos::from(2_500_000_000),
            None,
        )
    }

    fn test_position_report(instrument_id: &str, ts_last: u64) -> PositionStatusReport {
        PositionStatusReport::new(
            AccountId::from("SIM-001"),
            InstrumentId::from(instrument_id),
            PositionSide::Long,
            Quantity::from("50"),
            UnixNanos::from(ts_last),
            UnixNanos::from(ts_last + 1),
            None,
            None,
        )
    }

    #[rstest]
    fn test_new_is_empty_with_generated_report_id() {
        let mass_status = test_mass_status();
        assert!(mass_status.order_reports().is_empty());
        assert!(mass_status.fill_reports().is_empty());
        assert!(mass_status.position_reports().is_empty());
        assert_ne!(
            mass_status.report_id.to_string(),
            "00000000-0000-0000-0000-000000000000",
        );
    }

    #[rstest]
    fn test_order_reports_last_write_wins() {
        let mut mass_status = test_mass_status();
        let first = test_order_report("V-1", OrderSide::Buy);
        let second = test_order_report("V-1", OrderSide::Sell);

        mass_status.add_order_reports(vec![first]);
        mass_status.add_order_reports(vec![second.clone()]);

        let order_reports = mass_status.order_reports();
        assert_eq!(order_reports.len(), 1);
        assert_eq!(
            order_reports
                .get(&VenueOrderId::from("V-1"))
                .unwrap()
                .order_side,
            OrderSide::Sell,
        );
        assert_eq!(order_reports.get(&VenueOrderId::from("V-1")), Some(&second));
    }

    #[rstest]
    fn test_fill_reports_append_in_arrival_order() {
        let mut mass_status = test_mass_status();
        let fill1 = test_fill_report("V-1", "T-1", "2");
        let fill2 = test_fill_report("V-1", "T-2", "1");

        mass_status.add_fill_reports(vec![fill1.clone(), fill2.clone()]);

        let fill_reports = mass_status.fill_reports();
        assert_eq!(fill_reports.len(), 1);
        let fills = fill_reports.get(&VenueOrderId::from("V-1")).unwrap();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].trade_id, fill1.trade_id);
        assert_eq!(fills[1].trade_id, fill2.trade_id);
    }

    #[rstest]
    fn test_fill_reports_group_by_venue_order_id() {
        let mut mass_status = test_mass_status();
        mass_status.add_fill_reports(vec![
            test_fill_report("V-1", "T-1", "2"),
            test_fill_report("V-2", "T-2", "1"),
        ]);

        let fill_reports = mass_status.fill_reports();
        assert_eq!(fill_reports.len(), 2);
        assert_eq!(fill_reports.get(&VenueOrderId::from("V-1")).unwrap().len(), 1);
        assert_eq!(fill_reports.get(&VenueOrderId::from("V-2")).unwrap().len(), 1);
    }

    #[rstest]
    fn test_position_reports_group_by_instrument() {
        let mut mass_status = test_mass_status();
        mass_status.add_position_reports(vec![
            test_position_report("AAPL.NASDAQ", 1_000),
            test_position_report("AAPL.NASDAQ", 2_000),
            test_position_report("MSFT.NASDAQ", 3_000),
        ]);

        let position_reports = mass_status.position_reports();
        assert_eq!(position_reports.len(), 2);
        let aapl = position_reports
            .get(&InstrumentId::from("AAPL.NASDAQ"))
            .unwrap();
        assert_eq!(aapl.len(), 2);
        assert_eq!(aapl[0].ts_last, UnixNanos::from(1_000));
        assert_eq!(aapl[1].ts_last, UnixNanos::from(2_000));
    }

    #[rstest]
    fn test_accessors_return_defensive_copies() {
        let mut mass_status = test_mass_status();
        mass_status.add_order_reports(vec![test_order_report("V-1", OrderSide::Buy)]);
        mass_status.add_fill_reports(vec![test_fill_report("V-1", "T-1", "2")]);
        mass_status.add_position_reports(vec![test_position_report("AAPL.NASDAQ", 1_000)]);

        let mut order_reports = mass_status.order_reports();
        order_reports.clear();
        let mut fill_reports = mass_status.fill_reports();
        fill_reports
            .get_mut(&VenueOrderId::from("V-1"))
            .unwrap()
            .clear();
        let mut position_reports = mass_status.position_reports();
        position_reports.clear();

        assert_eq!(mass_status.order_reports().len(), 1);
        assert_eq!(
            mass_status
                .fill_reports()
                .get(&VenueOrderId::from("V-1"))
                .unwrap()
                .len(),
            1,
        );
        assert_eq!(mass_status.position_reports().len(), 1);
    }

    #[rstest]
    fn test_add_empty_batches() {
        let mut mass_status = test_mass_status();
        mass_status.add_order_reports(vec![]);
        mass_status.add_fill_reports(vec![]);
        mass_status.add_position_reports(vec![]);
        assert!(mass_status.order_reports().is_empty());
        assert!(mass_status.fill_reports().is_empty());
        assert!(mass_status.position_reports().is_empty());
    }

    #[rstest]
    fn test_display() {
        let display = test_mass_status().to_string();
        assert!(display.starts_with("ExecutionMassStatus("));
        assert!(display.contains("client_id=SIM"));
        assert!(display.contains("venue=NASDAQ"));
    }
}
