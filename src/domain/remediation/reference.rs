//! Reference numbers shown for filed requests.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::ports::RandomSource;

/// Prefix used when none is configured.
pub const DEFAULT_REFERENCE_PREFIX: &str = "KENNY";

/// Opaque identifier for a filed investigation or refund, e.g. `KENNY-4821937`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceNumber {
    prefix: String,
    number: u32,
}

impl ReferenceNumber {
    pub const MIN: u32 = 1_000_000;
    pub const MAX: u32 = 9_999_999;

    /// Draws a fresh reference number.
    pub fn generate(prefix: impl Into<String>, random: &mut dyn RandomSource) -> Self {
        Self {
            prefix: prefix.into(),
            number: random.next_in_range(Self::MIN, Self::MAX),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.number)
    }
}

impl Serialize for ReferenceNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
