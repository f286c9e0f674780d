//! Fixed answer vocabularies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Parses a yes/no reply: `yes`, `y`, `no`, `n`, case-insensitive.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Options on the possibly-lost menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    FileInvestigation,
    RequestRefund,
    SpeakToAgent,
}

impl MenuChoice {
    /// Menu options in display order.
    pub const ALL: [MenuChoice; 3] = [
        MenuChoice::FileInvestigation,
        MenuChoice::RequestRefund,
        MenuChoice::SpeakToAgent,
    ];

    /// Key the user types to pick this option.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FileInvestigation => "1",
            Self::RequestRefund => "2",
            Self::SpeakToAgent => "3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FileInvestigation => "File an investigation request",
            Self::RequestRefund => "Request a refund",
            Self::SpeakToAgent => "Speak to an agent",
        }
    }

    /// Looks up the option for a (normalized) key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }

    /// Like [`MenuChoice::from_key`], but an unknown key is an error.
    pub fn parse_key(key: &str) -> Result<Self, ValidationError> {
        Self::from_key(key).ok_or_else(|| {
            ValidationError::invalid_format("menu_choice", format!("unknown key '{}'", key))
        })
    }

    /// All keys, in display order.
    pub fn keys() -> [&'static str; 3] {
        Self::ALL.map(|choice| choice.key())
    }
}
