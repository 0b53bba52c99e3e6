//! Voter registration card field extraction.
//!
//! Fields are independent of each other. Card and photo numbers take the
//! first qualifying run in the text.

use regex::{Captures, Regex};
use tracing::debug;

use super::id_card::family_name;
use super::rules::normalize::{before_label, collapse_whitespace, non_empty};
use super::rules::patterns::{
    ID_SEX, VOTER_ADDRESS, VOTER_BIRTH, VOTER_CARD_NUMBER, VOTER_CODE_CI, VOTER_FATHER,
    VOTER_ISSUE, VOTER_LASTNAME, VOTER_MOTHER, VOTER_NAMES, VOTER_NOM_CI, VOTER_ORIGIN,
    VOTER_PHOTO_NUMBER,
};
use super::rules::{Handler, Rule};

/// Voter card fields extracted from recognized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterCardFields {
    pub card_number: Option<String>,
    pub code_ci: Option<String>,
    pub nom_ci: Option<String>,
    pub lastname: Option<String>,
    pub middlename: Option<String>,
    pub firstname: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub sex: Option<String>,
    pub address: Option<String>,
    pub origin: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub place_of_issue: Option<String>,
    pub date_of_issue: Option<String>,
    pub photo_number: Option<String>,
}

fn trimmed(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().trim().to_string())
}

fn collapsed(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| collapse_whitespace(m.as_str()))
}

fn name(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).and_then(|m| before_label(m.as_str()))
}

/// Group `index` of the first match, trimmed.
fn capture(pattern: &Regex, text: &str, index: usize) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(index))
        .and_then(|m| non_empty(m.as_str()))
}

/// Like [`capture`], for upper-case names that may run into a label.
fn capture_name(pattern: &Regex, text: &str, index: usize) -> Option<String> {
    capture(pattern, text, index).and_then(|value| before_label(&value))
}

/// Extract voter card fields. Never fails; unmatched fields are `None`.
pub fn extract_voter_card(text: &str) -> VoterCardFields {
    let field = |pattern: &'static Regex, handler: Handler| {
        Rule::new("voter-card", pattern, handler).apply(text)
    };

    let fields = VoterCardFields {
        card_number: field(&VOTER_CARD_NUMBER, trimmed),
        code_ci: field(&VOTER_CODE_CI, trimmed),
        nom_ci: field(&VOTER_NOM_CI, trimmed),
        lastname: field(&VOTER_LASTNAME, family_name),
        // `OLIVIER/FWAMBA`: middle name, then first name
        middlename: capture_name(&VOTER_NAMES, text, 1),
        firstname: capture_name(&VOTER_NAMES, text, 2),
        date_of_birth: capture(&VOTER_BIRTH, text, 1),
        place_of_birth: capture_name(&VOTER_BIRTH, text, 2),
        sex: field(&ID_SEX, trimmed),
        address: field(&VOTER_ADDRESS, collapsed),
        origin: field(&VOTER_ORIGIN, collapsed),
        father_name: field(&VOTER_FATHER, name),
        mother_name: field(&VOTER_MOTHER, name),
        place_of_issue: capture(&VOTER_ISSUE, text, 1),
        date_of_issue: capture(&VOTER_ISSUE, text, 2),
        photo_number: field(&VOTER_PHOTO_NUMBER, trimmed),
    };

    debug!(
        "Voter card extraction: card={:?} lastname={:?}",
        fields.card_number, fields.lastname
    );

    fields
}
