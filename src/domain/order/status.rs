//! Order status categories and the lookup that derives them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::OrderId;

/// Shipping status of an order, as far as the assistant can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Carrier has lost track of the package.
    PossiblyLost,

    /// Package is moving between facilities.
    InTransit,

    /// Package is on the delivery vehicle.
    OutForDelivery,

    /// Carrier reports the package as delivered.
    Delivered,
}

impl OrderStatus {
    /// Resolves the status of a validated order.
    ///
    /// Simulated lookup keyed on the last digit: `0` possibly lost,
    /// `1-3` in transit, `4-6` out for delivery, `7-9` delivered.
    pub fn resolve(order_id: &OrderId) -> Self {
        match order_id.last_digit() {
            0 => Self::PossiblyLost,
            1..=3 => Self::InTransit,
            4..=6 => Self::OutForDelivery,
            _ => Self::Delivered,
        }
    }

    /// Status line shown before the follow-up question, if the branch has one.
    pub fn status_line(&self) -> Option<&'static str> {
        match self {
            Self::InTransit => Some("Your order is currently on the way."),
            Self::OutForDelivery => Some("You should be expecting your package today."),
            Self::PossiblyLost | Self::Delivered => None,
        }
    }

    /// Returns true if the self-service remediation menu applies.
    pub fn offers_remediation(&self) -> bool {
        matches!(self, Self::PossiblyLost)
    }

    /// Returns a short label for logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PossiblyLost => "possibly lost",
            Self::InTransit => "in transit",
            Self::OutForDelivery => "out for delivery",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
