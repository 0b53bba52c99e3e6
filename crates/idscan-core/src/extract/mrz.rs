//! Passport machine readable zone (TD3, two lines of 44 characters).
//!
//! Check digits are matched structurally but never verified, so a single
//! misread digit does not cost the whole zone.

use tracing::debug;

use super::rules::normalize::{collapse_whitespace, non_empty};
use super::rules::patterns::{MRZ_BLOCK, MRZ_DATA, MRZ_LINE, MRZ_NAMES};

/// Fields decoded from the MRZ. Anything the zone does not yield stays
/// `None` and is left to the printed-text fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MrzFields {
    pub document_number: Option<String>,
    pub nationality: Option<String>,
    pub surname: Option<String>,
    pub given_names: Option<String>,
    pub date_of_birth: Option<String>,
    pub sex: Option<String>,
    pub date_of_expiry: Option<String>,
}

/// Locate the MRZ in recognized text and return it as two lines joined
/// with `\n`.
pub fn find_mrz(text: &str) -> Option<String> {
    let candidates: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("P<") || MRZ_LINE.is_match(line))
        .collect();

    if candidates.len() >= 2 {
        return Some(format!("{}\n{}", candidates[0], candidates[1]));
    }

    MRZ_BLOCK.find(text).map(|m| {
        m.as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Decode an MRZ block. Malformed zones simply yield fewer fields.
pub fn decode_mrz(mrz: &str) -> MrzFields {
    let mut fields = MrzFields::default();

    if let Some(caps) = MRZ_NAMES.captures(mrz) {
        fields.nationality = Some(caps[1].to_string());

        let names = &caps[2];
        let (surname, given) = match names.split_once("<<") {
            Some((surname, given)) => (surname, Some(given)),
            None => (names, None),
        };

        fields.surname = clean_surname(surname);
        fields.given_names = given.and_then(|g| non_empty(&collapse_whitespace(&g.replace('<', " "))));
    }

    if let Some(caps) = MRZ_DATA.captures(mrz) {
        fields.document_number = non_empty(&caps[1].replace('<', ""));
        fields.date_of_birth = decode_mrz_date(&caps[4]);
        fields.sex = match &caps[6] {
            "M" => Some("M".to_string()),
            "F" => Some("F".to_string()),
            _ => None,
        };
        fields.date_of_expiry = decode_mrz_date(&caps[7]);
    }

    fields
}

/// Find and decode the MRZ in one step.
pub fn parse_mrz(text: &str) -> (Option<String>, MrzFields) {
    match find_mrz(text) {
        Some(mrz) => {
            let fields = decode_mrz(&mrz);
            debug!("MRZ found, decoded fields: {:?}", fields);
            (Some(mrz), fields)
        }
        None => (None, MrzFields::default()),
    }
}

/// Convert `YYMMDD` to `DD/MM/YYYY`; years above 50 are 19xx, the rest 20xx.
pub fn decode_mrz_date(yymmdd: &str) -> Option<String> {
    if yymmdd.len() != 6 || !yymmdd.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let yy: u32 = yymmdd[0..2].parse().ok()?;
    let century = if yy > 50 { 1900 } else { 2000 };

    Some(format!(
        "{}/{}/{}",
        &yymmdd[4..6],
        &yymmdd[2..4],
        century + yy
    ))
}

/// Strip fillers and the trailing `S` the name field tends to pick up.
fn clean_surname(segment: &str) -> Option<String> {
    let trimmed = segment.trim_end_matches('<');
    let trimmed = trimmed.strip_suffix('S').unwrap_or(trimmed);
    non_empty(&trimmed.replace('<', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LINE1: &str = "P<CODMULENDAS<<OLIVIER<FWAMBA<<<<<<<<<<<<<<<";
    const LINE2: &str = "OP12345670COD9609174M3012305<<<<<<<<<<<<<<06";

    #[test]
    fn test_decode_mrz_date_century() {
        assert_eq!(decode_mrz_date("960917"), Some("17/09/1996".to_string()));
        assert_eq!(decode_mrz_date("051230"), Some("30/12/2005".to_string()));
        assert_eq!(decode_mrz_date("500101"), Some("01/01/2050".to_string()));
        assert_eq!(decode_mrz_date("510101"), Some("01/01/1951".to_string()));
        assert_eq!(decode_mrz_date("96091"), None);
        assert_eq!(decode_mrz_date("96O917"), None);
    }

    #[test]
    fn test_find_mrz_from_lines() {
        let text = format!("PASSEPORT\nREPUBLIQUE DEMOCRATIQUE DU CONGO\n{}\n  {}  \n", LINE1, LINE2);
        assert_eq!(find_mrz(&text), Some(format!("{}\n{}", LINE1, LINE2)));
    }

    #[test]
    fn test_find_mrz_fallback_search() {
        // first line is prefixed by noise so only one line qualifies
        let text = format!("xx {} {}", LINE1, LINE2);
        assert_eq!(find_mrz(&text), Some(format!("{}\n{}", LINE1, LINE2)));
    }

    #[test]
    fn test_find_mrz_absent() {
        assert_eq!(find_mrz("Nom: MULENDA\nSexe: M"), None);
        assert_eq!(find_mrz(""), None);
    }

    #[test]
    fn test_decode_full_mrz() {
        let fields = decode_mrz(&format!("{}\n{}", LINE1, LINE2));

        assert_eq!(
            fields,
            MrzFields {
                document_number: Some("OP1234567".to_string()),
                nationality: Some("COD".to_string()),
                surname: Some("MULENDA".to_string()),
                given_names: Some("OLIVIER FWAMBA".to_string()),
                date_of_birth: Some("17/09/1996".to_string()),
                sex: Some("M".to_string()),
                date_of_expiry: Some("30/12/2030".to_string()),
            }
        );
    }

    #[test]
    fn test_surname_trailing_s_removed_once() {
        let fields = decode_mrz("P<CODMULENDASS<<JEAN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<");
        assert_eq!(fields.surname, Some("MULENDAS".to_string()));
        assert_eq!(fields.given_names, Some("JEAN".to_string()));
    }

    #[test]
    fn test_unsexed_zone_and_bad_check_digits() {
        let fields = decode_mrz("P<CODKABILA<<JOSEPH\nOB0987654<COD0512309<2501017<<<<<<<<<<<<<<02");
        assert_eq!(fields.document_number, Some("OB0987654".to_string()));
        assert_eq!(fields.date_of_birth, Some("30/12/2005".to_string()));
        assert_eq!(fields.date_of_expiry, Some("01/01/2025".to_string()));
        assert_eq!(fields.sex, None);
        assert_eq!(fields.surname, Some("KABILA".to_string()));
    }

    #[test]
    fn test_malformed_zone_yields_no_fields() {
        assert_eq!(decode_mrz("P<12\n<<<<"), MrzFields::default());
    }

    #[test]
    fn test_parse_mrz() {
        let (mrz, fields) = parse_mrz(&format!("{}\n{}", LINE1, LINE2));
        assert!(mrz.is_some());
        assert_eq!(fields.nationality, Some("COD".to_string()));

        let (mrz, fields) = parse_mrz("no zone here");
        assert_eq!(mrz, None);
        assert_eq!(fields, MrzFields::default());
    }
}
