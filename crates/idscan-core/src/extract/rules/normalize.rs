//! Normalization helpers applied to captured values.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref ADDRESS_NOISE: Regex = Regex::new(r"[^\w/°, -]").unwrap();
    static ref DATE_SEPARATOR: Regex = Regex::new(r"[.\-]").unwrap();
}

/// First words of the field labels printed on the supported documents.
const LABEL_WORDS: [&str; 29] = [
    "NOM", "NAME", "SURNAME", "PRENOM", "PRENOMS", "PRÉNOM", "PRÉNOMS", "POSTNOM", "GIVEN",
    "NATIONALITE", "NATIONALITÉ", "NATIONALITY", "SEXE", "SEX", "DATE", "LIEU", "PLACE", "NÉ",
    "NÉE", "ADRESSE", "ADDRESS", "PROFESSION", "AUTORITE", "AUTORITÉ", "AUTHORITY", "ORIGINE",
    "VALABLE", "DELIVREE", "DÉLIVRÉE",
];

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Trimmed value, or `None` when nothing is left.
pub fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `15.01.2024` and `15-01-2024` become `15/01/2024`.
pub fn normalize_date_separators(s: &str) -> String {
    DATE_SEPARATOR.replace_all(s.trim(), "/").into_owned()
}

/// Collapse whitespace and drop characters that never appear in an address.
pub fn clean_address(s: &str) -> Option<String> {
    let collapsed = collapse_whitespace(s);
    let cleaned = ADDRESS_NOISE.replace_all(&collapsed, "");
    non_empty(&collapse_whitespace(&cleaned))
}

/// Words of `s` up to the first one that opens another label, joined by
/// single spaces. Values read off a single-line text otherwise run on into
/// the next field.
pub fn before_label(s: &str) -> Option<String> {
    let words: Vec<&str> = s
        .split_whitespace()
        .take_while(|word| !is_label_word(word))
        .collect();
    non_empty(&words.join(" "))
}

fn is_label_word(word: &str) -> bool {
    let word = word.trim_end_matches([':', '/']).to_uppercase();
    LABEL_WORDS.contains(&word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  BE \n 6401\t\t01 "), "BE 6401 01");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  MULENDA "), Some("MULENDA".to_string()));
        assert_eq!(non_empty(" \n\t"), None);
    }

    #[test]
    fn test_normalize_date_separators() {
        assert_eq!(normalize_date_separators("15.01.2024"), "15/01/2024");
        assert_eq!(normalize_date_separators("15-01-2024"), "15/01/2024");
        assert_eq!(normalize_date_separators("15/01/2024"), "15/01/2024");
    }

    #[test]
    fn test_clean_address() {
        assert_eq!(
            clean_address("Av. de la Paix  n°12,\n Gombe * Kinshasa!"),
            Some("Av de la Paix n°12, Gombe Kinshasa".to_string())
        );
        assert_eq!(clean_address("*** !!"), None);
    }

    #[test]
    fn test_before_label() {
        assert_eq!(
            before_label("Marie  Claire Nationalité"),
            Some("Marie Claire".to_string())
        );
        assert_eq!(before_label("FWAMBA SEXE: M"), Some("FWAMBA".to_string()));
        assert_eq!(before_label("DGM KINSHASA"), Some("DGM KINSHASA".to_string()));
        assert_eq!(before_label("Date de naissance"), None);
    }
}
