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

//! The ingestion boundary: venue-native records and their conversion into
//! execution reports.
//!
//! An integration deserializes a venue snapshot into a
//! [`NativeExecutionState`] and applies its sections to an
//! [`ExecutionMassStatus`] with the `apply_*` operations below. Batches are
//! not transactional: elements are converted and inserted one at a time, so a
//! failed call leaves every element before the failure already applied.

pub mod models;
pub mod parse;

pub use models::{
    NativeExecutionState, NativeFillReport, NativeOrderReport, NativePositionReport,
};
pub use parse::{parse_fill_report, parse_order_status_report, parse_position_status_report};

use crate::{
    errors::{IngestError, InputError},
    reports::ExecutionMassStatus,
};

/// Converts and applies a native order status section to the mass status.
///
/// Returns the number of reports applied.
///
/// # Errors
///
/// Returns an [`InputError`] if the section is `None` (null/absent rather
/// than empty), or the first conversion/validation failure encountered.
/// Elements before a failure remain applied.
pub fn apply_order_reports(
    mass_status: &mut ExecutionMassStatus,
    section: Option<Vec<NativeOrderReport>>,
) -> Result<usize, IngestError> {
    let section = section.ok_or(InputError::MissingBatch {
        name: "order reports",
    })?;
    let total = section.len();
    for native in &section {
        let report = parse_order_status_report(native)?;
        mass_status.add_order_reports(vec![report]);
    }
    log::debug!(
        "Applied {total} order status reports for client {}",
        mass_status.client_id,
    );
    Ok(total)
}

/// Converts and applies a native fill section to the mass status.
///
/// Returns the number of reports applied.
///
/// # Errors
///
/// Returns an [`InputError`] if the section is `None` (null/absent rather
/// than empty), or the first conversion/validation failure encountered.
/// Elements before a failure remain applied.
pub fn apply_fill_reports(
    mass_status: &mut ExecutionMassStatus,
    section: Option<Vec<NativeFillReport>>,
) -> Result<usize, IngestError> {
    let section = section.ok_or(InputError::MissingBatch {
        name: "fill reports",
    })?;
    let total = section.len();
    for native in &section {
        let report = parse_fill_report(native)?;
        mass_status.add_fill_reports(vec![report]);
    }
    log::debug!(
        "Applied {total} fill reports for client {}",
        mass_status.client_id,
    );
    Ok(total)
}

/// Converts and applies a native position section to the mass status.
///
/// Returns the number of reports applied.
///
/// # Errors
///
/// Returns an [`InputError`] if the section is `None` (null/absent rather
/// than empty), or the first conversion failure encountered. Elements before
/// a failure remain applied.
pub fn apply_position_reports(
    mass_status: &mut ExecutionMassStatus,
    section: Option<Vec<NativePositionReport>>,
) -> Result<usize, IngestError> {
    let section = section.ok_or(InputError::MissingBatch {
        name: "position reports",
    })?;
    let total = section.len();
    for native in &section {
        let report = parse_position_status_report(native)?;
        mass_status.add_position_reports(vec![report]);
    }
    log::debug!(
        "Applied {total} position status reports for client {}",
        mass_status.client_id,
    );
    Ok(total)
}
