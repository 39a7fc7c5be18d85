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

//! Venue-native report representations as handed over by an integration.
//!
//! Fields are kept in their transport form (identifier and decimal strings,
//! enum names, integer nanosecond timestamps); `parse.rs` maps them into the
//! model types.

use serde::{Deserialize, Serialize};

/// A venue-native order status record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NativeOrderReport {
    /// The account the order belongs to.
    pub account_id: String,
    /// The instrument in `"SYMBOL.VENUE"` form.
    pub instrument_id: String,
    /// The venue-assigned order ID.
    pub venue_order_id: String,
    /// The client-assigned order ID, if known to the venue.
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// The client-assigned order list ID.
    #[serde(default)]
    pub order_list_id: Option<String>,
    /// The venue-assigned position ID.
    #[serde(default)]
    pub venue_position_id: Option<String>,
    /// The order side name.
    pub order_side: String,
    /// The order type name.
    pub order_type: String,
    /// The time in force name.
    pub time_in_force: String,
    /// The order status name.
    pub order_status: String,
    /// The contingency type name (`"NONE"` when unset).
    pub contingency_type: String,
    /// The trigger type name (`"NONE"` when unset).
    pub trigger_type: String,
    /// The trailing offset type name (`"NONE"` when unset).
    pub trailing_offset_type: String,
    /// The original order quantity as a decimal string (venues omit this for
    /// notional-sized orders).
    #[serde(default)]
    pub quantity: Option<String>,
    /// The filled quantity as a decimal string.
    pub filled_qty: String,
    /// The displayed (iceberg) quantity as a decimal string.
    #[serde(default)]
    pub display_qty: Option<String>,
    /// The order price as a decimal string.
    #[serde(default)]
    pub price: Option<String>,
    /// The trigger price as a decimal string.
    #[serde(default)]
    pub trigger_price: Option<String>,
    /// The limit offset as a decimal string.
    #[serde(default)]
    pub limit_offset: Option<String>,
    /// The trailing offset as a decimal string.
    #[serde(default)]
    pub trailing_offset: Option<String>,
    /// The average fill price as a decimal string.
    #[serde(default)]
    pub avg_px: Option<String>,
    /// The order expiration as an RFC 3339 timestamp.
    #[serde(default)]
    pub expire_time: Option<String>,
    /// If the order only provides liquidity.
    #[serde(default)]
    pub post_only: bool,
    /// If the order carries the reduce-only instruction.
    #[serde(default)]
    pub reduce_only: bool,
    /// The venue's cancellation reason.
    #[serde(default)]
    pub cancel_reason: Option<String>,
    /// The report ID as a UUID string.
    pub report_id: String,
    /// UNIX timestamp (nanoseconds) when the order was accepted.
    pub ts_accepted: u64,
    /// UNIX timestamp (nanoseconds) of the last order status change.
    pub ts_last: u64,
    /// UNIX timestamp (nanoseconds) when the order was triggered.
    #[serde(default)]
    pub ts_triggered: Option<u64>,
    /// UNIX timestamp (nanoseconds) when the record was initialized.
    pub ts_init: u64,
}

/// A venue-native trade execution record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NativeFillReport {
    /// The account the trade belongs to.
    pub account_id: String,
    /// The instrument in `"SYMBOL.VENUE"` form.
    pub instrument_id: String,
    /// The venue-assigned order ID for the trade.
    pub venue_order_id: String,
    /// The trade match ID.
    pub trade_id: String,
    /// The client-assigned order ID, if known to the venue.
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// The venue-assigned position ID.
    #[serde(default)]
    pub venue_position_id: Option<String>,
    /// The order side name.
    pub order_side: String,
    /// The trade quantity as a decimal string.
    pub last_qty: String,
    /// The trade price as a decimal string.
    pub last_px: String,
    /// The commission as a currency-tagged decimal string, e.g. `"1.50 USD"`
    /// (zero amount if none charged).
    pub commission: String,
    /// The liquidity side name (`"NONE"` when not reported).
    pub liquidity_side: String,
    /// The report ID as a UUID string.
    pub report_id: String,
    /// UNIX timestamp (nanoseconds) when the trade occurred.
    pub ts_event: u64,
    /// UNIX timestamp (nanoseconds) when the record was initialized.
    pub ts_init: u64,
}

/// A venue-native position record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NativePositionReport {
    /// The account the position belongs to.
    pub account_id: String,
    /// The instrument in `"SYMBOL.VENUE"` form.
    pub instrument_id: String,
    /// The position side name.
    pub position_side: String,
    /// The position magnitude as a decimal string.
    pub quantity: String,
    /// The venue-assigned position ID.
    #[serde(default)]
    pub venue_position_id: Option<String>,
    /// The report ID as a UUID string.
    pub report_id: String,
    /// UNIX timestamp (nanoseconds) of the last position change.
    pub ts_last: u64,
    /// UNIX timestamp (nanoseconds) when the record was initialized.
    pub ts_init: u64,
}

/// One venue execution state snapshot, bundling the report sections a poll
/// returned.
///
/// Sections are `Option` because venues serialize an absent section as null;
/// an empty section is an empty list. The distinction matters at the apply
/// boundary (see [`InputError`](crate::errors::InputError)).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NativeExecutionState {
    /// The order status section.
    #[serde(default)]
    pub orders: Option<Vec<NativeOrderReport>>,
    /// The trade execution section.
    #[serde(default)]
    pub fills: Option<Vec<NativeFillReport>>,
    /// The position section.
    #[serde(default)]
    pub positions: Option<Vec<NativePositionReport>>,
}
