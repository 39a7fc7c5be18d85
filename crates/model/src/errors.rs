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

//! Error types for report construction and ingestion.
//!
//! All construction failures are synchronous and non-retryable: the caller
//! must either fix the input or surface the failure upward.

use thiserror::Error;

/// A declared report invariant was violated at construction.
///
/// Carries the name of the violated constraint together with the offending
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for `{constraint}`: {value}")]
pub struct ValidationError {
    /// The name of the violated constraint.
    pub constraint: &'static str,
    /// The offending value, rendered for diagnostics.
    pub value: String,
}

impl ValidationError {
    /// Creates a new [`ValidationError`] for the named constraint.
    #[must_use]
    pub fn new(constraint: &'static str, value: impl Into<String>) -> Self {
        Self {
            constraint,
            value: value.into(),
        }
    }
}

/// Building a report from a venue-native representation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A required field was absent from the native representation.
    #[error("missing required field `{field}`")]
    MissingField {
        /// The absent field.
        field: &'static str,
    },
    /// A venue-native enum value could not be mapped.
    #[error("unknown value for `{field}`: '{value}'")]
    UnknownEnumValue {
        /// The enum field being mapped.
        field: &'static str,
        /// The unrecognized native value.
        value: String,
    },
    /// A decimal-string magnitude or price could not be parsed.
    #[error("invalid decimal for `{field}`: '{value}'")]
    InvalidDecimal {
        /// The decimal field being parsed.
        field: &'static str,
        /// The unparseable native value.
        value: String,
    },
    /// A timestamp could not be parsed or was out of range.
    #[error("invalid timestamp for `{field}`: '{value}'")]
    InvalidTimestamp {
        /// The timestamp field being parsed.
        field: &'static str,
        /// The unparseable native value.
        value: String,
    },
    /// An identifier string was malformed.
    #[error("invalid identifier for `{field}`: '{value}'")]
    InvalidIdentifier {
        /// The identifier field being parsed.
        field: &'static str,
        /// The malformed native value.
        value: String,
    },
    /// A currency-tagged amount could not be parsed.
    #[error("invalid money for `{field}`: '{value}', expected '<amount> <currency>'")]
    InvalidMoney {
        /// The money field being parsed.
        field: &'static str,
        /// The unparseable native value.
        value: String,
    },
}

/// A batch argument handed to the ingestion boundary was absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A venue snapshot section was null/absent rather than empty.
    #[error("missing `{name}` batch, section was null/absent rather than empty")]
    MissingBatch {
        /// The absent snapshot section.
        name: &'static str,
    },
}

/// Umbrella error for batch ingestion operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// A report failed conversion from its native representation.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// A converted report violated a construction invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The batch argument itself was invalid.
    #[error(transparent)]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_validation_error_display() {
        let error = ValidationError::new("quantity", "-1");
        assert_eq!(error.to_string(), "validation failed for `quantity`: -1");
    }

    #[rstest]
    fn test_conversion_error_display() {
        let error = ConversionError::MissingField { field: "quantity" };
        assert_eq!(error.to_string(), "missing required field `quantity`");

        let error = ConversionError::UnknownEnumValue {
            field: "order_side",
            value: "SIDEWAYS".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unknown value for `order_side`: 'SIDEWAYS'"
        );
    }

    #[rstest]
    fn test_input_error_display() {
        let error = InputError::MissingBatch { name: "fills" };
        assert_eq!(
            error.to_string(),
            "missing `fills` batch, section was null/absent rather than empty"
        );
    }

    #[rstest]
    fn test_ingest_error_is_transparent() {
        let error = IngestError::from(ValidationError::new("last_qty", "0"));
        assert_eq!(error.to_string(), "validation failed for `last_qty`: 0");
    }
}
