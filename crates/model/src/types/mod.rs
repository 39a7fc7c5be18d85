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

//! Value object types for quantities, prices and monetary amounts.
//!
//! These are opaque decimal wrappers: they carry exactly the operations the
//! report types need and own no general arithmetic.

pub mod currency;
pub mod money;
pub mod price;
pub mod quantity;

pub use currency::Currency;
pub use money::Money;
pub use price::Price;
pub use quantity::Quantity;
