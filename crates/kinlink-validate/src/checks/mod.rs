//! Validation check modules.
//!
//! Each module performs one kind of check; [`Stage`] fixes the order in which
//! the chain applies them.

pub mod email;
pub mod length;
pub mod names;

use serde::Serialize;

/// One step of the validation chain, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    FieldLength,
    Projection,
    NonBlank,
    AlphaPresence,
    CharacterSet,
    EmailFormat,
}

impl Stage {
    /// Every stage in the order the chain applies them.
    pub const ALL: [Stage; 6] = [
        Stage::FieldLength,
        Stage::Projection,
        Stage::NonBlank,
        Stage::AlphaPresence,
        Stage::CharacterSet,
        Stage::EmailFormat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::FieldLength => "field-length",
            Stage::Projection => "projection",
            Stage::NonBlank => "non-blank",
            Stage::AlphaPresence => "alpha-presence",
            Stage::CharacterSet => "character-set",
            Stage::EmailFormat => "email-format",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::FieldLength => "Drop records with any field longer than the field limit",
            Stage::Projection => {
                "Keep first_name (0), last_name (1) and email (9); skip records with fewer than 10 fields"
            }
            Stage::NonBlank => "Drop records with an empty first_name, last_name or email",
            Stage::AlphaPresence => "Drop records whose first_name or last_name has no ASCII letter",
            Stage::CharacterSet => {
                "Drop records whose first_name or last_name has characters other than ASCII letters, space or hyphen"
            }
            Stage::EmailFormat => {
                "Drop records with a malformed email or an over-long email local part"
            }
        }
    }

    /// Past-tense summary used in "N out of M records ..." log lines.
    pub(crate) fn outcome(self) -> &'static str {
        match self {
            Stage::FieldLength => "have fields within the length limit",
            Stage::Projection => "have the first_name, last_name and email positions",
            Stage::NonBlank => "have a non-blank first_name, last_name and email",
            Stage::AlphaPresence => "have at least one letter in first_name and last_name",
            Stage::CharacterSet => "have only letters, spaces or hyphens in their names",
            Stage::EmailFormat => "have valid emails",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
