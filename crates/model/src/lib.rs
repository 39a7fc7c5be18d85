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

//! Execution state reconciliation model.
//!
//! Immutable point-in-time snapshot records describing order, trade-fill, and
//! position state as reported by a trading venue, together with the
//! [`ExecutionMassStatus`](crate::reports::ExecutionMassStatus) aggregator
//! that consolidates many such reports per execution client for downstream
//! reconciliation against locally tracked state.
//!
//! Reconciliation itself (diffing venue state against local state) is owned
//! by the consumer; this crate owns only the report records, their
//! invariants, and the aggregation discipline.

pub mod enums;
pub mod errors;
pub mod identifiers;
pub mod ingest;
pub mod reports;
pub mod types;
