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

//! A universally unique identifier (UUID) version 4.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A UUID version 4 as used for report identifiers.
#[repr(transparent)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UUID4(Uuid);

impl UUID4 {
    /// Generates a new random [`UUID4`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    #[must_use]
    pub const fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for UUID4 {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for UUID4 {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

impl From<&str> for UUID4 {
    fn from(value: &str) -> Self {
        value.parse().expect("invalid UUID string")
    }
}

impl Display for UUID4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for UUID4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UUID4('{}')", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_uuid4_new_is_unique() {
        assert_ne!(UUID4::new(), UUID4::new());
    }

    #[rstest]
    fn test_uuid4_from_str_roundtrip() {
        let id = UUID4::new();
        let parsed: UUID4 = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn test_uuid4_from_str_invalid() {
        assert!("not-a-uuid".parse::<UUID4>().is_err());
    }

    #[rstest]
    fn test_uuid4_serde_as_string() {
        let id: UUID4 = "2d89666b-1a1e-4a75-b193-4eb3b454c757".into();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2d89666b-1a1e-4a75-b193-4eb3b454c757\"");
        let back: UUID4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
