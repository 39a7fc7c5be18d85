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

//! Conversions from venue-native records into execution reports.
//!
//! Enum names are mapped exhaustively; an unrecognized value is a
//! [`ConversionError`], never silently defaulted.

use std::str::FromStr;

use chrono::DateTime;
use execstate_core::{UUID4, UnixNanos};
use rust_decimal::Decimal;

use crate::{
    enums::{
        ContingencyType, LiquiditySide, OrderSide, OrderStatus, OrderType, PositionSide,
        TimeInForce, TrailingOffsetType, TriggerType,
    },
    errors::{ConversionError, IngestError},
    identifiers::{
        AccountId, ClientOrderId, InstrumentId, OrderListId, PositionId, TradeId, VenueOrderId,
    },
    ingest::models::{NativeFillReport, NativeOrderReport, NativePositionReport},
    reports::{FillReport, OrderStatusReport, PositionStatusReport},
    types::{Money, Price, Quantity},
};

fn invalid_id(field: &'static str, value: &str) -> ConversionError {
    ConversionError::InvalidIdentifier {
        field,
        value: value.to_string(),
    }
}

fn parse_enum<T>(value: &str, field: &'static str) -> Result<T, ConversionError>
where
    T: FromStr<Err = strum::ParseError>,
{
    T::from_str(value).map_err(|_| ConversionError::UnknownEnumValue {
        field,
        value: value.to_string(),
    })
}

fn parse_decimal(value: &str, field: &'static str) -> Result<Decimal, ConversionError> {
    Decimal::from_str_exact(value).map_err(|_| ConversionError::InvalidDecimal {
        field,
        value: value.to_string(),
    })
}

fn parse_quantity(value: &str, field: &'static str) -> Result<Quantity, ConversionError> {
    parse_decimal(value, field).map(Quantity::new)
}

fn parse_price(value: &str, field: &'static str) -> Result<Price, ConversionError> {
    parse_decimal(value, field).map(Price::new)
}

fn parse_money(value: &str, field: &'static str) -> Result<Money, ConversionError> {
    value.parse().map_err(|_| ConversionError::InvalidMoney {
        field,
        value: value.to_string(),
    })
}

fn parse_uuid(value: &str, field: &'static str) -> Result<UUID4, ConversionError> {
    value.parse().map_err(|_| invalid_id(field, value))
}

/// Parses an RFC 3339 timestamp into UNIX epoch nanoseconds.
fn parse_rfc3339(value: &str, field: &'static str) -> Result<UnixNanos, ConversionError> {
    let invalid = || ConversionError::InvalidTimestamp {
        field,
        value: value.to_string(),
    };
    let datetime = DateTime::parse_from_rfc3339(value).map_err(|_| invalid())?;
    let nanos = datetime.timestamp_nanos_opt().ok_or_else(invalid)?;
    let nanos = u64::try_from(nanos).map_err(|_| invalid())?;
    Ok(UnixNanos::from(nanos))
}

/// Builds an [`OrderStatusReport`] from a venue-native order record.
///
/// # Errors
///
/// Returns a [`ConversionError`] if a required field is absent or an enum,
/// identifier, decimal, or timestamp value cannot be mapped, or a
/// [`ValidationError`](crate::errors::ValidationError) if the converted
/// report violates a construction invariant.
pub fn parse_order_status_report(
    native: &NativeOrderReport,
) -> Result<OrderStatusReport, IngestError> {
    let account_id = AccountId::new_checked(&native.account_id)
        .map_err(|_| invalid_id("account_id", &native.account_id))?;
    let instrument_id = InstrumentId::from_str(&native.instrument_id)?;
    let venue_order_id = VenueOrderId::new_checked(&native.venue_order_id)
        .map_err(|_| invalid_id("venue_order_id", &native.venue_order_id))?;

    let order_side: OrderSide = parse_enum(&native.order_side, "order_side")?;
    let order_type: OrderType = parse_enum(&native.order_type, "order_type")?;
    let time_in_force: TimeInForce = parse_enum(&native.time_in_force, "time_in_force")?;
    let order_status: OrderStatus = parse_enum(&native.order_status, "order_status")?;
    let contingency_type: ContingencyType =
        parse_enum(&native.contingency_type, "contingency_type")?;
    let trigger_type: TriggerType = parse_enum(&native.trigger_type, "trigger_type")?;
    let trailing_offset_type: TrailingOffsetType =
        parse_enum(&native.trailing_offset_type, "trailing_offset_type")?;

    let quantity = native
        .quantity
        .as_deref()
        .ok_or(ConversionError::MissingField { field: "quantity" })?;
    let quantity = parse_quantity(quantity, "quantity")?;
    let filled_qty = parse_quantity(&native.filled_qty, "filled_qty")?;

    let mut builder = OrderStatusReport::builder(
        account_id,
        instrument_id,
        venue_order_id,
        order_side,
        order_type,
        time_in_force,
        order_status,
        quantity,
        filled_qty,
        UnixNanos::from(native.ts_accepted),
        UnixNanos::from(native.ts_last),
        UnixNanos::from(native.ts_init),
    )
    .with_report_id(parse_uuid(&native.report_id, "report_id")?)
    .with_contingency_type(contingency_type)
    .with_trigger_type(trigger_type)
    .with_trailing_offset_type(trailing_offset_type)
    .with_post_only(native.post_only)
    .with_reduce_only(native.reduce_only)
    .with_ts_triggered(UnixNanos::from(native.ts_triggered.unwrap_or_default()));

    if let Some(value) = native.client_order_id.as_deref() {
        let client_order_id = ClientOrderId::new_checked(value)
            .map_err(|_| invalid_id("client_order_id", value))?;
        builder = builder.with_client_order_id(client_order_id);
    }
    if let Some(value) = native.order_list_id.as_deref() {
        let order_list_id =
            OrderListId::new_checked(value).map_err(|_| invalid_id("order_list_id", value))?;
        builder = builder.with_order_list_id(order_list_id);
    }
    if let Some(value) = native.venue_position_id.as_deref() {
        let venue_position_id =
            PositionId::new_checked(value).map_err(|_| invalid_id("venue_position_id", value))?;
        builder = builder.with_venue_position_id(venue_position_id);
    }
    if let Some(value) = native.price.as_deref() {
        builder = builder.with_price(parse_price(value, "price")?);
    }
    if let Some(value) = native.trigger_price.as_deref() {
        builder = builder.with_trigger_price(parse_price(value, "trigger_price")?);
    }
    if let Some(value) = native.limit_offset.as_deref() {
        builder = builder.with_limit_offset(parse_decimal(value, "limit_offset")?);
    }
    if let Some(value) = native.trailing_offset.as_deref() {
        builder = builder.with_trailing_offset(parse_decimal(value, "trailing_offset")?);
    }
    if let Some(value) = native.avg_px.as_deref() {
        builder = builder.with_avg_px(parse_decimal(value, "avg_px")?);
    }
    if let Some(value) = native.display_qty.as_deref() {
        builder = builder.with_display_qty(parse_quantity(value, "display_qty")?);
    }
    if let Some(value) = native.expire_time.as_deref() {
        builder = builder.with_expire_time(parse_rfc3339(value, "expire_time")?);
    }
    if let Some(value) = native.cancel_reason.as_deref() {
        builder = builder.with_cancel_reason(value);
    }

    Ok(builder.build()?)
}

/// Builds a [`FillReport`] from a venue-native trade record.
///
/// # Errors
///
/// Returns a [`ConversionError`] if an enum, identifier, decimal, or money
/// value cannot be mapped, or a
/// [`ValidationError`](crate::errors::ValidationError) if `last_qty` is not
/// positive.
pub fn parse_fill_report(native: &NativeFillReport) -> Result<FillReport, IngestError> {
    let account_id = AccountId::new_checked(&native.account_id)
        .map_err(|_| invalid_id("account_id", &native.account_id))?;
    let instrument_id = InstrumentId::from_str(&native.instrument_id)?;
    let venue_order_id = VenueOrderId::new_checked(&native.venue_order_id)
        .map_err(|_| invalid_id("venue_order_id", &native.venue_order_id))?;
    let trade_id = TradeId::new_checked(&native.trade_id)
        .map_err(|_| invalid_id("trade_id", &native.trade_id))?;

    let order_side: OrderSide = parse_enum(&native.order_side, "order_side")?;
    let liquidity_side: LiquiditySide = parse_enum(&native.liquidity_side, "liquidity_side")?;

    let client_order_id = match native.client_order_id.as_deref() {
        Some(value) => Some(
            ClientOrderId::new_checked(value)
                .map_err(|_| invalid_id("client_order_id", value))?,
        ),
        None => None,
    };
    let venue_position_id = match native.venue_position_id.as_deref() {
        Some(value) => Some(
            PositionId::new_checked(value)
                .map_err(|_| invalid_id("venue_position_id", value))?,
        ),
        None => None,
    };

    Ok(FillReport::new_checked(
        account_id,
        instrument_id,
        venue_order_id,
        trade_id,
        order_side,
        parse_quantity(&native.last_qty, "last_qty")?,
        parse_price(&native.last_px, "last_px")?,
        parse_money(&native.commission, "commission")?,
        liquidity_side,
        client_order_id,
        venue_position_id,
        UnixNanos::from(native.ts_event),
        UnixNanos::from(native.ts_init),
        Some(parse_uuid(&native.report_id, "report_id")?),
    )?)
}

/// Builds a [`PositionStatusReport`] from a venue-native position record.
///
/// # Errors
///
/// Returns a [`ConversionError`] if an enum, identifier, or decimal value
/// cannot be mapped.
pub fn parse_position_status_report(
    native: &NativePositionReport,
) -> Result<PositionStatusReport, IngestError> {
    let account_id = AccountId::new_checked(&native.account_id)
        .map_err(|_| invalid_id("account_id", &native.account_id))?;
    let instrument_id = InstrumentId::from_str(&native.instrument_id)?;
    let position_side: PositionSide = parse_enum(&native.position_side, "position_side")?;

    let venue_position_id = match native.venue_position_id.as_deref() {
        Some(value) => Some(
            PositionId::new_checked(value)
                .map_err(|_| invalid_id("venue_position_id", value))?,
        ),
        None => None,
    };

    Ok(PositionStatusReport::new(
        account_id,
        instrument_id,
        position_side,
        parse_quantity(&native.quantity, "quantity")?,
        UnixNanos::from(native.ts_last),
        UnixNanos::from(native.ts_init),
        Some(parse_uuid(&native.report_id, "report_id")?),
        venue_position_id,
    ))
}
