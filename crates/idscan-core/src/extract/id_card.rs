//! National identity card field extraction.
//!
//! Each field has exactly one pattern. Values are trimmed but otherwise kept
//! in the case they were recognized in.

use regex::{Captures, Regex};
use tracing::debug;

use super::rules::patterns::{
    ID_ADDRESS, ID_DATE_OF_BIRTH, ID_DATE_OF_EXPIRY, ID_DATE_OF_ISSUE, ID_DOCUMENT_NUMBER,
    ID_GIVEN_NAMES, ID_NATIONALITY, ID_PLACE_OF_BIRTH, ID_SEX, ID_SURNAME,
};
use super::rules::normalize::before_label;
use super::rules::{Handler, Rule};

/// Words a `Nom` label captures when it is really `Nom du ...` / `NOM CI`.
pub(crate) const NAME_CONNECTORS: [&str; 4] = ["DU", "DE", "DES", "CI"];

/// Identity card fields extracted from recognized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdCardFields {
    pub document_number: Option<String>,
    pub surname: Option<String>,
    pub given_names: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub sex: Option<String>,
    pub date_of_issue: Option<String>,
    pub date_of_expiry: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
}

fn trimmed(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().trim().to_string())
}

/// `CARTE NATIONALE` also follows a label, so a number must carry a digit.
fn document_number(caps: &Captures<'_>) -> Option<String> {
    let value = caps.get(1)?.as_str().trim();
    value
        .chars()
        .any(|c| c.is_ascii_digit())
        .then(|| value.to_string())
}

fn given_names(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).and_then(|m| before_label(m.as_str()))
}

pub(crate) fn family_name(caps: &Captures<'_>) -> Option<String> {
    let value = caps.get(1)?.as_str().trim();
    if NAME_CONNECTORS.contains(&value.to_uppercase().as_str()) {
        return None;
    }
    Some(value.to_string())
}

/// Extract identity card fields. Never fails; unmatched fields are `None`.
pub fn extract_id_card(text: &str) -> IdCardFields {
    let field = |pattern: &'static Regex, handler: Handler| {
        Rule::new("id-card", pattern, handler).apply(text)
    };

    let fields = IdCardFields {
        document_number: field(&ID_DOCUMENT_NUMBER, document_number),
        surname: field(&ID_SURNAME, family_name),
        given_names: field(&ID_GIVEN_NAMES, given_names),
        date_of_birth: field(&ID_DATE_OF_BIRTH, trimmed),
        // first "à <WORD>" in the text; lines like "Délivrée à" can win
        place_of_birth: field(&ID_PLACE_OF_BIRTH, trimmed),
        sex: field(&ID_SEX, trimmed),
        date_of_issue: field(&ID_DATE_OF_ISSUE, trimmed),
        date_of_expiry: field(&ID_DATE_OF_EXPIRY, trimmed),
        address: field(&ID_ADDRESS, trimmed),
        nationality: field(&ID_NATIONALITY, trimmed),
    };

    debug!(
        "ID card extraction: number={:?} surname={:?}",
        fields.document_number, fields.surname
    );

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::normalize::collapse_whitespace;
    use pretty_assertions::assert_eq;

    const ID_CARD_TEXT: &str = "REPUBLIQUE DEMOCRATIQUE DU CONGO
CARTE NATIONALE D'IDENTITE
N° CD-1234567
Nom: KASONGO
Postnom: MUTOMBO ILUNGA
Né le 5/7/1988 à KOLWEZI
Sexe: M
Nationalité: CONGOLAISE
Adresse: 45 Avenue Lumumba, Kolwezi
Délivrée le 10/01/2020
Valable jusqu'au 10/01/2030";

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_full_id_card() {
        assert_eq!(
            extract_id_card(ID_CARD_TEXT),
            IdCardFields {
                document_number: some("CD-1234567"),
                surname: some("KASONGO"),
                given_names: some("MUTOMBO ILUNGA"),
                date_of_birth: some("5/7/1988"),
                place_of_birth: some("KOLWEZI"),
                sex: some("M"),
                date_of_issue: some("10/01/2020"),
                date_of_expiry: some("10/01/2030"),
                address: some("45 Avenue Lumumba, Kolwezi"),
                nationality: some("CONGOLAISE"),
            }
        );
    }

    fn render(fields: &IdCardFields) -> String {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        format!(
            "N° {}\nNom: {}\nPostnom: {}\nNé le {} à {}\nSexe: {}\nNationalité: {}\n\
             Adresse: {}\nDélivrée le {}\nValable jusqu'au {}",
            value(&fields.document_number),
            value(&fields.surname),
            value(&fields.given_names),
            value(&fields.date_of_birth),
            value(&fields.place_of_birth),
            value(&fields.sex),
            value(&fields.nationality),
            value(&fields.address),
            value(&fields.date_of_issue),
            value(&fields.date_of_expiry),
        )
    }

    #[test]
    fn test_upper_case_plural_label() {
        let fields = extract_id_card("NOM: KASONGO\nPRÉNOMS: JEAN PIERRE\nSEXE: M");

        assert_eq!(fields.surname, some("KASONGO"));
        assert_eq!(fields.given_names, some("JEAN PIERRE"));
        assert_eq!(fields.sex, some("M"));
    }

    #[test]
    fn test_given_names_stop_at_upper_case_label() {
        let fields = extract_id_card("POSTNOM: MUTOMBO SEXE: M");

        assert_eq!(fields.given_names, some("MUTOMBO"));
        assert_eq!(fields.sex, some("M"));
    }

    #[test]
    fn test_line_breaks_do_not_matter() {
        assert_eq!(
            extract_id_card(&collapse_whitespace(ID_CARD_TEXT)),
            extract_id_card(ID_CARD_TEXT)
        );
    }

    #[test]
    fn test_rerun_on_extracted_values() {
        let fields = extract_id_card(ID_CARD_TEXT);
        assert_eq!(extract_id_card(&render(&fields)), fields);
    }

    #[test]
    fn test_surname_skips_parent_labels() {
        let fields = extract_id_card("Nom du pere: KABILA\nNom: ILUNGA");
        assert_eq!(fields.surname, some("ILUNGA"));
    }

    #[test]
    fn test_surname_skips_connector_words() {
        let fields = extract_id_card("NOM DE\nNOM: TSHALA");
        assert_eq!(fields.surname, some("TSHALA"));
    }

    #[test]
    fn test_document_number_needs_a_digit() {
        let fields = extract_id_card("CARTE NATIONALE");
        assert_eq!(fields.document_number, None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_id_card(""), IdCardFields::default());
    }
}
