//! Assistant wording.
//!
//! Prompts end with a space and no newline; the user answers on the same line.

pub const GREETING: &str = "Hi! I'm here to help you track a lost or delayed package.";
pub const GOODBYE: &str = "Thank you for using the Lost Package Assistant. Goodbye!";

pub const ORDER_ID_PROMPT: &str = "Please enter your 10 digit order ID: ";
pub const INVALID_ORDER_ID: &str = "That doesn't look like a valid order ID number. \
     It should be a 10 digit number. Please try again.";

pub const YES_NO_RETRY: &str = "I didn't quite understand that. Please type 'yes' or 'no'.";

pub const RETENTION: [&str; 4] = [
    "I understand you'd like to speak with an agent.",
    "Before I connect you, I want to make sure I can't help resolve your issue.",
    "I can assist with tracking packages, delivery updates, and escalating lost orders.",
    "If you still want to speak with an agent, just type 'agent' again.",
];

pub const ESCALATION: [&str; 2] = [
    "Connecting you to a customer support agent...",
    "A representative will be with you shortly. Thank you for your patience!",
];

pub const POSSIBLY_LOST_INTRO: &str = "Your package may be lost. What would you like to do?";
pub const MENU_PROMPT: &str = "\nPlease enter 1, 2, or 3: ";

pub const ANYTHING_ELSE_PROMPT: &str = "Is there anything else I can help you with? ";
pub const RECEIVED_PROMPT: &str = "Your order shows as delivered. Have you received it? ";
pub const AGENT_OFFER_PROMPT: &str = "Would you like to speak to a customer support agent? ";

pub const SORRY: &str = "I'm sorry that you're having troubles with your order.";
pub const REACH_OUT: &str = "Alright, please reach out if you need further assistance.";
pub const SATISFIED: [&str; 2] = [
    "Great! I'm glad I was able to help you today.",
    "Please let me know if you have any other issues.",
];

/// Retry text for a multiple-choice prompt, e.g. "Please enter 1, 2, or 3."
pub fn choice_retry(choices: &[&str]) -> String {
    format!("I didn't understand that. Please enter {}.", join_choices(choices))
}

fn join_choices(choices: &[&str]) -> String {
    match choices {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}
