//! Passport field extraction: MRZ first, printed-text fallbacks second.

use lazy_static::lazy_static;
use regex::Captures;
use tracing::debug;

use super::mrz::parse_mrz;
use super::rules::normalize::{before_label, clean_address, normalize_date_separators};
use super::rules::patterns::*;
use super::rules::{group1_upper, FallbackChain, Rule};

/// Words the bare surname pattern picks up from the passport header.
const SURNAME_BLOCKLIST: [&str; 2] = ["CONGO", "REPUBLIC"];

/// Passport fields extracted from recognized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassportFields {
    pub document_number: Option<String>,
    pub surname: Option<String>,
    pub given_names: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub sex: Option<String>,
    pub date_of_issue: Option<String>,
    pub date_of_expiry: Option<String>,
    pub issuing_authority: Option<String>,
    pub address: Option<String>,
    pub profession: Option<String>,
    pub mrz: Option<String>,
}

fn surname(caps: &Captures<'_>) -> Option<String> {
    let value = caps.get(1)?.as_str().trim();
    if SURNAME_BLOCKLIST.contains(&value) {
        return None;
    }
    Some(value.to_string())
}

fn document_number(caps: &Captures<'_>) -> Option<String> {
    let value = caps.get(1)?.as_str().to_uppercase();
    if value.chars().any(|c| c.is_ascii_digit()) {
        Some(value)
    } else {
        None
    }
}

fn names(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).and_then(|m| before_label(m.as_str()))
}

/// Multi-word value cut at the next label, upper-cased.
fn labeled_upper(caps: &Captures<'_>) -> Option<String> {
    caps.get(1)
        .and_then(|m| before_label(m.as_str()))
        .map(|v| v.to_uppercase())
}

fn date(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| normalize_date_separators(m.as_str()))
}

fn sex(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().to_string())
}

fn address(caps: &Captures<'_>) -> Option<String> {
    caps.get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| clean_address(m.as_str()))
}

lazy_static! {
    static ref DOCUMENT_NUMBER: FallbackChain = FallbackChain::new("documentNumber", vec![
        Rule::new("op-number", &PASSPORT_NUMBER_OP, group1_upper),
        Rule::new("labeled", &PASSPORT_NUMBER_LABELED, document_number),
    ]);

    static ref SURNAME: FallbackChain = FallbackChain::new("surname", vec![
        Rule::new("labeled", &SURNAME_LABELED, surname),
        Rule::new("bare-word", &SURNAME_BARE, surname),
    ]);

    static ref GIVEN_NAMES: FallbackChain = FallbackChain::new("givenNames", vec![
        Rule::new("labeled", &GIVEN_NAMES_LABELED, names),
        Rule::new("capitalized-pair", &GIVEN_NAMES_BARE, names),
    ]);

    static ref NATIONALITY: FallbackChain = FallbackChain::new("nationality", vec![
        Rule::new("labeled", &NATIONALITY_LABELED, group1_upper),
        Rule::new("literal", &NATIONALITY_LITERAL, group1_upper),
    ]);

    static ref DATE_OF_BIRTH: FallbackChain = FallbackChain::new("dateOfBirth", vec![
        Rule::new("labeled", &DATE_OF_BIRTH_LABELED, date),
    ]);

    static ref SEX: FallbackChain = FallbackChain::new("sex", vec![
        Rule::new("labeled", &SEX_LABELED, sex),
    ]);

    static ref PLACE_OF_BIRTH: FallbackChain = FallbackChain::new("placeOfBirth", vec![
        Rule::new("labeled", &PLACE_OF_BIRTH_LABELED, labeled_upper),
        Rule::new("known-city", &KNOWN_CITY, group1_upper),
    ]);

    static ref DATE_OF_ISSUE: FallbackChain = FallbackChain::new("dateOfIssue", vec![
        Rule::new("labeled", &DATE_OF_ISSUE_LABELED, date),
        Rule::new("first-date", &DATE_TOKEN, date),
    ]);

    static ref DATE_OF_EXPIRY: FallbackChain = FallbackChain::new("dateOfExpiry", vec![
        Rule::new("labeled", &DATE_OF_EXPIRY_LABELED, date),
    ]);

    static ref ISSUING_AUTHORITY: FallbackChain = FallbackChain::new("issuingAuthority", vec![
        Rule::new("literal", &AUTHORITY_LITERAL, group1_upper),
        Rule::new("labeled", &AUTHORITY_LABELED, labeled_upper),
    ]);

    static ref ADDRESS: FallbackChain = FallbackChain::new("address", vec![
        Rule::new("labeled", &ADDRESS_LABELED, address),
    ]);

    static ref PROFESSION: FallbackChain = FallbackChain::new("profession", vec![
        Rule::new("labeled", &PROFESSION_LABELED, group1_upper),
        Rule::new("literal", &PROFESSION_LITERAL, group1_upper),
    ]);
}

/// Extract passport fields. MRZ values take precedence; every field the
/// zone leaves open goes through its fallback chain.
pub fn extract_passport(text: &str) -> PassportFields {
    let (mrz, decoded) = parse_mrz(text);

    let fields = PassportFields {
        document_number: decoded
            .document_number
            .or_else(|| DOCUMENT_NUMBER.evaluate(text)),
        surname: decoded.surname.or_else(|| SURNAME.evaluate(text)),
        given_names: decoded.given_names.or_else(|| GIVEN_NAMES.evaluate(text)),
        nationality: decoded.nationality.or_else(|| NATIONALITY.evaluate(text)),
        date_of_birth: decoded.date_of_birth.or_else(|| DATE_OF_BIRTH.evaluate(text)),
        place_of_birth: PLACE_OF_BIRTH.evaluate(text),
        sex: decoded.sex.or_else(|| SEX.evaluate(text)),
        date_of_issue: DATE_OF_ISSUE.evaluate(text),
        date_of_expiry: decoded
            .date_of_expiry
            .or_else(|| DATE_OF_EXPIRY.evaluate(text)),
        issuing_authority: ISSUING_AUTHORITY.evaluate(text),
        address: ADDRESS.evaluate(text),
        profession: PROFESSION.evaluate(text),
        mrz,
    };

    debug!(
        "Passport extraction: mrz={} number={:?} surname={:?}",
        fields.mrz.is_some(),
        fields.document_number,
        fields.surname
    );

    fields
}
