//! Order identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A validated order identifier: exactly ten ASCII decimal digits.
///
/// The only way to obtain one is [`OrderId::parse`], so holding an `OrderId`
/// proves the format check already happened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Required number of digits.
    pub const LENGTH: usize = 10;

    /// Returns true iff `raw` is exactly ten characters, all `'0'..='9'`.
    ///
    /// Pure format gate; callers are expected to trim surrounding whitespace.
    pub fn is_valid(raw: &str) -> bool {
        raw.chars().count() == Self::LENGTH && raw.chars().all(|c| c.is_ascii_digit())
    }

    /// Validates and wraps a raw order identifier.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("order_id"));
        }
        let len = raw.chars().count();
        if len != Self::LENGTH {
            return Err(ValidationError::invalid_length("order_id", Self::LENGTH, len));
        }
        if !Self::is_valid(&raw) {
            return Err(ValidationError::invalid_format(
                "order_id",
                "must contain only digits 0-9",
            ));
        }
        Ok(Self(raw))
    }

    /// Numeric value of the final digit.
    pub fn last_digit(&self) -> u8 {
        // Invariant: non-empty and ASCII digits only.
        self.0.as_bytes()[Self::LENGTH - 1] - b'0'
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
