//! Remediation domain module.
//!
//! Reference numbers and confirmation records for the self-service
//! requests offered when a package may be lost.

mod confirmation;
mod reference;

pub use confirmation::{ActionKind, ConfirmationRecord};
pub use reference::{ReferenceNumber, DEFAULT_REFERENCE_PREFIX};
