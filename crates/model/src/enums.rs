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

//! Enumerations for venue execution reports.
//!
//! String forms are SCREAMING_SNAKE_CASE; parsing is case-insensitive and the
//! "unset" variants additionally accept the bare `NONE` venues commonly send.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The side of an order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// No order side specified (invalid in a report context).
    #[default]
    #[strum(to_string = "NO_ORDER_SIDE", serialize = "NONE")]
    NoOrderSide,
    /// The order is a buy.
    Buy,
    /// The order is a sell.
    Sell,
}

/// The type of an order.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// An order executed immediately at the best available price.
    Market,
    /// An order executed only at a specified price or better.
    Limit,
    /// A market order triggered when the market reaches the trigger price.
    StopMarket,
    /// A limit order triggered when the market reaches the trigger price.
    StopLimit,
    /// A market order triggered when the market touches the trigger price.
    MarketIfTouched,
    /// A limit order triggered when the market touches the trigger price.
    LimitIfTouched,
    /// A market order with a trigger price trailing the market.
    TrailingStopMarket,
    /// A limit order with a trigger price trailing the market.
    TrailingStopLimit,
}

/// The time in force for an order.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good 'til canceled.
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
    /// Good 'til date (requires an expire time).
    Gtd,
    /// Good for the trading day.
    Day,
    /// Valid only in the opening auction.
    AtTheOpen,
    /// Valid only in the closing auction.
    AtTheClose,
}

/// The lifecycle status of an order as seen by the venue.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// The order was denied before reaching the venue.
    Denied,
    /// The order was submitted and is awaiting acknowledgement.
    Submitted,
    /// The order was accepted and is resting/working.
    Accepted,
    /// The order was rejected by the venue.
    Rejected,
    /// The order was canceled.
    Canceled,
    /// The order expired.
    Expired,
    /// A contingent order's trigger condition was met.
    Triggered,
    /// An update (modify) request is pending at the venue.
    PendingUpdate,
    /// A cancel request is pending at the venue.
    PendingCancel,
    /// The order is partially filled.
    PartiallyFilled,
    /// The order is completely filled.
    Filled,
}

impl OrderStatus {
    /// Returns `true` if the status represents an order still open at the
    /// venue.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(
            self,
            Self::Accepted
                | Self::Triggered
                | Self::PendingCancel
                | Self::PendingUpdate
                | Self::PartiallyFilled
        )
    }
}

/// The contingency type of an order (OTO/OCO/OUO relationships).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContingencyType {
    /// No contingency.
    #[default]
    #[strum(to_string = "NO_CONTINGENCY", serialize = "NONE")]
    NoContingency,
    /// One triggers the other(s).
    Oto,
    /// One cancels the other(s).
    Oco,
    /// One updates the other(s).
    Ouo,
}

/// The price type a contingent order's trigger is evaluated against.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    /// No trigger.
    #[default]
    #[strum(to_string = "NO_TRIGGER", serialize = "NONE")]
    NoTrigger,
    /// Triggered on the default price type for the venue.
    Default,
    /// Triggered on the last traded price.
    LastPrice,
    /// Triggered on the mark price.
    MarkPrice,
    /// Triggered on the index price.
    IndexPrice,
    /// Triggered on the best bid price.
    BidAsk,
    /// Triggered on a double match of last price.
    DoubleLast,
    /// Triggered on a double match of bid/ask.
    DoubleBidAsk,
    /// Triggered on last price or bid/ask.
    LastOrBidAsk,
    /// Triggered on the bid/ask midpoint.
    MidPoint,
}

/// How a trailing stop's offset is expressed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrailingOffsetType {
    /// No trailing offset.
    #[default]
    #[strum(to_string = "NO_TRAILING_OFFSET", serialize = "NONE")]
    NoTrailingOffset,
    /// Offset in price units.
    Price,
    /// Offset in basis points.
    BasisPoints,
    /// Offset in ticks.
    Ticks,
    /// Offset as a ratio of price.
    PriceTier,
}

/// Whether a fill added or removed liquidity.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquiditySide {
    /// Liquidity side not reported by the venue.
    #[default]
    #[strum(to_string = "NO_LIQUIDITY_SIDE", serialize = "NONE")]
    NoLiquiditySide,
    /// The fill provided liquidity (passive).
    Maker,
    /// The fill removed liquidity (aggressive).
    Taker,
}

/// The side of a net position.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionSide {
    /// No position side specified.
    #[default]
    #[strum(to_string = "NO_POSITION_SIDE", serialize = "NONE")]
    NoPositionSide,
    /// No net exposure (quantity expected to be zero).
    Flat,
    /// Net long.
    Long,
    /// Net short.
    Short,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(OrderStatus::Accepted, true)]
    #[case(OrderStatus::Triggered, true)]
    #[case(OrderStatus::PendingCancel, true)]
    #[case(OrderStatus::PendingUpdate, true)]
    #[case(OrderStatus::PartiallyFilled, true)]
    #[case(OrderStatus::Denied, false)]
    #[case(OrderStatus::Submitted, false)]
    #[case(OrderStatus::Rejected, false)]
    #[case(OrderStatus::Canceled, false)]
    #[case(OrderStatus::Expired, false)]
    #[case(OrderStatus::Filled, false)]
    fn test_order_status_is_open(#[case] status: OrderStatus, #[case] expected: bool) {
        assert_eq!(status.is_open(), expected);
    }

    #[rstest]
    #[case("BUY", OrderSide::Buy)]
    #[case("sell", OrderSide::Sell)]
    #[case("NONE", OrderSide::NoOrderSide)]
    fn test_order_side_from_str(#[case] value: &str, #[case] expected: OrderSide) {
        assert_eq!(OrderSide::from_str(value).unwrap(), expected);
    }

    #[rstest]
    fn test_unset_variants_display_and_aliases() {
        assert_eq!(TriggerType::NoTrigger.to_string(), "NO_TRIGGER");
        assert_eq!(TriggerType::from_str("NONE").unwrap(), TriggerType::NoTrigger);
        assert_eq!(
            TrailingOffsetType::from_str("none").unwrap(),
            TrailingOffsetType::NoTrailingOffset,
        );
        assert_eq!(
            ContingencyType::from_str("NO_CONTINGENCY").unwrap(),
            ContingencyType::NoContingency,
        );
    }

    #[rstest]
    fn test_enum_from_str_unknown() {
        assert!(OrderStatus::from_str("SIDEWAYS").is_err());
        assert!(TimeInForce::from_str("").is_err());
    }

    #[rstest]
    fn test_enum_serde_screaming_snake() {
        let json = serde_json::to_string(&OrderStatus::PartiallyFilled).unwrap();
        assert_eq!(json, "\"PARTIALLY_FILLED\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::PartiallyFilled);
    }
}
