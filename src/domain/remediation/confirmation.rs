//! Confirmation records for self-service requests.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ReferenceNumber;
use crate::domain::order::OrderId;

/// Kind of self-service request filed for a possibly lost package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Investigation,
    Refund,
}

impl ActionKind {
    /// Line written before the request is filed.
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::Investigation => "I'll file an investigation request for your package.",
            Self::Refund => "I'll process a refund request for your order.",
        }
    }

    pub fn submitted_heading(&self) -> &'static str {
        match self {
            Self::Investigation => "Investigation request submitted!",
            Self::Refund => "Refund request submitted!",
        }
    }

    /// What the user should expect next.
    pub fn follow_up(&self) -> &'static str {
        match self {
            Self::Investigation => "You'll receive an email update within 24-48 hours.",
            Self::Refund => "Your refund will be processed within 3-5 business days.",
        }
    }
}

/// Display-only record of a filed request. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmationRecord {
    pub reference_number: ReferenceNumber,
    pub order_id: OrderId,
    pub kind: ActionKind,
    pub submitted_at: DateTime<Utc>,
}

impl ConfirmationRecord {
    pub fn new(kind: ActionKind, order_id: OrderId, reference_number: ReferenceNumber) -> Self {
        Self {
            reference_number,
            order_id,
            kind,
            submitted_at: Utc::now(),
        }
    }

    /// Confirmation block shown to the user.
    pub fn render_lines(&self) -> Vec<String> {
        vec![
            self.kind.submitted_heading().to_string(),
            format!("Reference #: {}", self.reference_number),
            format!("Order ID: {}", self.order_id),
            self.kind.follow_up().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RandomSource;

    struct Constant(u32);

    impl RandomSource for Constant {
        fn next_in_range(&mut self, _low: u32, _high: u32) -> u32 {
            self.0
        }
    }

    fn record(kind: ActionKind) -> ConfirmationRecord {
        ConfirmationRecord::new(
            kind,
            OrderId::parse("1234567890").unwrap(),
            ReferenceNumber::generate("KENNY", &mut Constant(7_654_321)),
        )
    }

    #[test]
    fn investigation_renders_reference_and_order() {
        assert_eq!(
            record(ActionKind::Investigation).render_lines(),
            vec![
                "Investigation request submitted!",
                "Reference #: KENNY-7654321",
                "Order ID: 1234567890",
                "You'll receive an email update within 24-48 hours.",
            ]
        );
    }

    #[test]
    fn refund_uses_refund_wording() {
        let lines = record(ActionKind::Refund).render_lines();
        assert_eq!(lines[0], "Refund request submitted!");
        assert_eq!(lines[3], "Your refund will be processed within 3-5 business days.");
    }

    #[test]
    fn serializes_kind_and_reference() {
        let json = serde_json::to_value(record(ActionKind::Refund)).unwrap();
        assert_eq!(json["kind"], "refund");
        assert_eq!(json["reference_number"], "KENNY-7654321");
        assert_eq!(json["order_id"], "1234567890");
    }
}
