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

//! Venue execution reports and the mass status aggregator.
//!
//! Reports are immutable once constructed; the only mutable type here is
//! [`ExecutionMassStatus`], which is populated by a single writer and then
//! handed to readers as a snapshot.

pub mod fill;
pub mod mass_status;
pub mod order;
pub mod position;

pub use fill::FillReport;
pub use mass_status::ExecutionMassStatus;
pub use order::OrderStatusReport;
pub use position::PositionStatusReport;

use execstate_core::{UUID4, UnixNanos};

use crate::identifiers::{AccountId, InstrumentId};

/// Fields common to all execution reports.
pub trait ExecutionReport {
    /// The account the report belongs to.
    fn account_id(&self) -> AccountId;
    /// The instrument the report refers to.
    fn instrument_id(&self) -> InstrumentId;
    /// The unique report identifier.
    fn report_id(&self) -> UUID4;
    /// When the report object was initialized (nanoseconds).
    fn ts_init(&self) -> UnixNanos;
}
