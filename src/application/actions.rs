//! ActionHandlers - Self-service requests for possibly lost packages.

use crate::domain::order::OrderId;
use crate::domain::remediation::{ActionKind, ConfirmationRecord, ReferenceNumber};
use crate::ports::RandomSource;

/// Files investigations and refund requests.
///
/// Nothing is persisted; each call only draws a reference number and
/// returns a record for display.
pub struct ActionHandlers {
    reference_prefix: String,
    random: Box<dyn RandomSource>,
}

impl ActionHandlers {
    pub fn new(reference_prefix: impl Into<String>, random: Box<dyn RandomSource>) -> Self {
        Self {
            reference_prefix: reference_prefix.into(),
            random,
        }
    }

    pub fn file_investigation(&mut self, order_id: &OrderId) -> ConfirmationRecord {
        self.submit(ActionKind::Investigation, order_id)
    }

    pub fn request_refund(&mut self, order_id: &OrderId) -> ConfirmationRecord {
        self.submit(ActionKind::Refund, order_id)
    }

    fn submit(&mut self, kind: ActionKind, order_id: &OrderId) -> ConfirmationRecord {
        let reference = ReferenceNumber::generate(self.reference_prefix.as_str(), self.random.as_mut());
        tracing::info!(
            kind = ?kind,
            order_id = %order_id,
            reference = %reference,
            "request submitted"
        );
        ConfirmationRecord::new(kind, order_id.clone(), reference)
    }
}
