//! End-to-end conversation scenarios.
//!
//! Each test scripts the user's replies, runs a full conversation through
//! `ConversationController`, and checks the transcript and session report.
//! The scripted reader ends input once its lines run out and counts reads,
//! so a flow that loops forever shows up as an `InputClosed` outcome or a
//! read count above the guard instead of hanging the test run.

use package_assistant::adapters::{RecordingSink, ScriptedReader, SequenceRandomSource};
use package_assistant::application::{ActionHandlers, ConversationController, SessionReport};
use package_assistant::domain::conversation::{messages, SessionOutcome};
use package_assistant::domain::order::OrderStatus;
use package_assistant::domain::remediation::ActionKind;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Upper bound on prompts any scenario below should need.
const MAX_READS: usize = 20;

struct Session {
    report: SessionReport,
    sink: RecordingSink,
    reader: ScriptedReader,
}

impl Session {
    fn run(script: &[&str]) -> Self {
        Self::run_with_prefix("KENNY", script)
    }

    fn run_with_prefix(prefix: &str, script: &[&str]) -> Self {
        let reader = ScriptedReader::new(script.iter().copied());
        let sink = RecordingSink::new();
        let actions = ActionHandlers::new(
            prefix,
            Box::new(SequenceRandomSource::new([4_821_937, 1_357_911])),
        );
        let controller =
            ConversationController::new(Box::new(reader.clone()), Box::new(sink.clone()), actions);

        let report = controller.run().expect("scripted console never fails");
        assert!(
            reader.reads() <= MAX_READS,
            "conversation read {} lines, expected at most {}",
            reader.reads(),
            MAX_READS
        );

        Self {
            report,
            sink,
            reader,
        }
    }

    fn text(&self) -> String {
        self.sink.text()
    }

    fn escalated(&self) -> bool {
        self.sink.contains(messages::ESCALATION[0])
    }
}

fn is_reference(candidate: &str, prefix: &str) -> bool {
    match candidate.split_once('-') {
        Some((p, digits)) => {
            p == prefix && digits.len() == 7 && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

// =============================================================================
// Scenario A: possibly lost, file an investigation
// =============================================================================

#[test]
fn possibly_lost_investigation_shows_reference_and_order() {
    let session = Session::run(&["1234567890", "1"]);

    assert_eq!(session.report.status, Some(OrderStatus::PossiblyLost));
    assert_eq!(session.report.outcome, SessionOutcome::Completed);

    let record = session.report.confirmation.as_ref().expect("confirmation");
    assert_eq!(record.kind, ActionKind::Investigation);
    assert!(is_reference(&record.reference_number.to_string(), "KENNY"));

    let text = session.text();
    assert!(text.contains("Investigation request submitted!"));
    assert!(text.contains("Reference #: KENNY-4821937"));
    assert!(text.contains("Order ID: 1234567890"));
    assert!(text.contains("You'll receive an email update within 24-48 hours."));
    assert!(!session.escalated());
    assert_eq!(session.reader.remaining(), 0);
}

#[test]
fn possibly_lost_refund_uses_configured_prefix() {
    let session = Session::run_with_prefix("ACME", &["1111111110", "2"]);

    let record = session.report.confirmation.as_ref().expect("confirmation");
    assert_eq!(record.kind, ActionKind::Refund);
    assert!(is_reference(&record.reference_number.to_string(), "ACME"));
    assert!(session.text().contains("Refund request submitted!"));
    assert!(session.text().contains("Reference #: ACME-4821937"));
    assert!(session
        .text()
        .contains("Your refund will be processed within 3-5 business days."));
}

#[test]
fn possibly_lost_menu_reasks_on_invalid_choice() {
    let session = Session::run(&["1234567890", "4", "refund", "", "2"]);

    assert_eq!(session.sink.count("I didn't understand that. Please enter 1, 2, or 3."), 3);
    assert_eq!(session.sink.count(messages::MENU_PROMPT), 4);
    assert_eq!(
        session.report.confirmation.as_ref().map(|r| r.kind),
        Some(ActionKind::Refund)
    );
}

#[test]
fn possibly_lost_menu_agent_choice_escalates_directly() {
    let session = Session::run(&["1234567890", "3"]);

    assert_eq!(session.report.outcome, SessionOutcome::Escalated);
    assert!(!session.report.soft_redirect_issued);
    assert!(!session.sink.contains(messages::RETENTION[0]));
    assert!(session.escalated());
    assert!(session.report.confirmation.is_none());
}

#[test]
fn possibly_lost_menu_agent_phrase_gets_soft_redirect_first() {
    let session = Session::run(&["1234567890", "agent", "1"]);

    assert!(session.report.soft_redirect_issued);
    assert_eq!(session.report.outcome, SessionOutcome::Completed);
    assert_eq!(session.sink.count(messages::MENU_PROMPT), 2);
    assert!(!session.escalated());
}

// =============================================================================
// Scenario B: in transit, nothing else needed
// =============================================================================

#[test]
fn in_transit_closes_without_escalation() {
    let session = Session::run(&["1234567891", "no"]);

    assert_eq!(session.report.status, Some(OrderStatus::InTransit));
    assert_eq!(session.report.outcome, SessionOutcome::Completed);
    assert!(session.text().contains("Your order is currently on the way."));
    assert!(!session.sink.contains(messages::AGENT_OFFER_PROMPT));
    assert!(!session.escalated());
    assert!(session.text().ends_with(&format!("{}\n", messages::GOODBYE)));
}

#[test]
fn out_for_delivery_more_help_then_agent_escalates() {
    let session = Session::run(&["1234567894", "yes", "y"]);

    assert_eq!(session.report.status, Some(OrderStatus::OutForDelivery));
    assert!(session.text().contains("You should be expecting your package today."));
    assert!(session.text().contains(messages::SORRY));
    assert_eq!(session.report.outcome, SessionOutcome::Escalated);
    assert!(session.escalated());
    assert!(session.text().ends_with(&format!("{}\n", messages::GOODBYE)));
}

#[test]
fn in_transit_more_help_but_no_agent_gets_closing_remark() {
    let session = Session::run(&["1234567893", "YES", "N"]);

    assert_eq!(session.report.outcome, SessionOutcome::Completed);
    assert!(session.text().contains(messages::REACH_OUT));
    assert!(!session.escalated());
}

// =============================================================================
// Scenario C: delivered and received
// =============================================================================

#[test]
fn delivered_and_received_closes_satisfied() {
    let session = Session::run(&["1234567897", "yes"]);

    assert_eq!(session.report.status, Some(OrderStatus::Delivered));
    assert_eq!(session.report.outcome, SessionOutcome::Completed);
    assert!(session.text().contains(messages::SATISFIED[0]));
    assert!(!session.sink.contains(messages::AGENT_OFFER_PROMPT));
    assert!(!session.escalated());
}

#[test]
fn delivered_not_received_offers_agent() {
    let session = Session::run(&["1234567899", "no", "yes"]);

    assert!(session.text().contains(messages::SORRY));
    assert_eq!(session.report.outcome, SessionOutcome::Escalated);
    assert!(session.escalated());
}

#[test]
fn delivered_not_received_declining_agent_closes() {
    let session = Session::run(&["1234567898", "n", "no"]);

    assert_eq!(session.report.outcome, SessionOutcome::Completed);
    assert!(session.text().contains(messages::REACH_OUT));
}

// =============================================================================
// Scenario D: agent override at the order id prompt
// =============================================================================

#[test]
fn agent_twice_at_order_id_prompt_escalates() {
    let session = Session::run(&["agent", "human", "1234567890"]);

    assert_eq!(session.report.outcome, SessionOutcome::Escalated);
    assert!(session.report.soft_redirect_issued);
    assert_eq!(session.report.order_id, None);
    assert_eq!(session.sink.count(messages::RETENTION[0]), 1);
    assert_eq!(session.sink.count(messages::ORDER_ID_PROMPT), 2);
    assert!(session.escalated());
    assert_eq!(session.reader.remaining(), 1);
}

#[test]
fn soft_redirect_is_spent_once_per_session() {
    // Redirect at the order id prompt, then the first agent request at a
    // later prompt escalates immediately.
    let session = Session::run(&["Agent", "1234567891", "representative"]);

    assert_eq!(session.report.status, Some(OrderStatus::InTransit));
    assert_eq!(session.report.outcome, SessionOutcome::Escalated);
    assert_eq!(session.sink.count(messages::RETENTION[0]), 1);
    assert_eq!(session.sink.count(messages::ANYTHING_ELSE_PROMPT), 1);
}

#[test]
fn menu_agent_choice_after_soft_redirect_still_escalates() {
    let session = Session::run(&["speak to agent", "1234567890", "3"]);

    assert_eq!(session.report.outcome, SessionOutcome::Escalated);
    assert!(session.report.soft_redirect_issued);
}

// =============================================================================
// Retries and end of input
// =============================================================================

#[test]
fn malformed_order_ids_are_retried() {
    let session = Session::run(&["12345", "abcdefghij", "123456789012", " 1234567897 ", "y"]);

    assert_eq!(session.sink.count(messages::INVALID_ORDER_ID), 3);
    assert_eq!(session.sink.count(messages::ORDER_ID_PROMPT), 4);
    assert_eq!(session.report.order_id.as_ref().map(|id| id.as_str()), Some("1234567897"));
    assert_eq!(session.report.outcome, SessionOutcome::Completed);
}

#[test]
fn unrecognized_yes_no_answers_are_retried() {
    let session = Session::run(&["1234567891", "sure", "maybe later", "no"]);

    assert_eq!(session.sink.count(messages::YES_NO_RETRY), 2);
    assert_eq!(session.sink.count(messages::ANYTHING_ELSE_PROMPT), 3);
    assert_eq!(session.report.outcome, SessionOutcome::Completed);
}

#[test]
fn endless_bad_input_ends_cleanly_when_input_closes() {
    let script = vec!["nope"; 10];
    let session = Session::run(&script);

    assert_eq!(session.report.outcome, SessionOutcome::InputClosed);
    assert_eq!(session.reader.reads(), 11);
    assert!(session.text().ends_with(&format!("{}\n", messages::GOODBYE)));
}

#[test]
fn input_closing_mid_follow_up_ends_cleanly() {
    let session = Session::run(&["1234567897"]);

    assert_eq!(session.report.status, Some(OrderStatus::Delivered));
    assert_eq!(session.report.outcome, SessionOutcome::InputClosed);
    assert!(!session.escalated());
}

#[test]
fn resolving_the_same_order_twice_gives_the_same_branch() {
    let first = Session::run(&["5550001116", "no"]);
    let second = Session::run(&["5550001116", "no"]);

    assert_eq!(first.report.status, second.report.status);
    assert_ne!(first.report.session_id, second.report.session_id);
}
