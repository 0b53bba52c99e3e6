//! Vehicle plate and chassis number extraction.

use regex::Regex;
use tracing::debug;

use crate::models::document::PlateResult;

use super::rules::normalize::collapse_whitespace;
use super::rules::patterns::{
    CHASSIS_LABELED, PLATE_COMPACT, PLATE_DIGITS_FIRST, PLATE_MIXED, PLATE_STANDARD,
    PROVINCE_SUFFIX, VIN_STRICT,
};
use super::rules::province::province_name;

/// Plate patterns from most to least precise.
fn plate_patterns() -> [&'static Regex; 4] {
    [&*PLATE_STANDARD, &*PLATE_DIGITS_FIRST, &*PLATE_MIXED, &*PLATE_COMPACT]
}

/// Extract a registration plate and resolve its province.
///
/// The first pattern that matches anywhere in the text wins, and only its
/// leftmost match is used, so a narrow pattern beats a broader one even
/// when the broader one matches earlier in the text.
pub fn extract_plate(text: &str) -> PlateResult {
    let clean = collapse_whitespace(text);

    for (index, pattern) in plate_patterns().iter().enumerate() {
        if let Some(m) = pattern.find(&clean) {
            let plate = collapse_whitespace(&m.as_str().to_uppercase());
            let province = PROVINCE_SUFFIX
                .captures(&plate)
                .and_then(|caps| province_name(&caps[1]))
                .map(str::to_string);

            debug!("Plate pattern {} matched: {}", index + 1, plate);

            return PlateResult {
                plate: Some(plate),
                province,
            };
        }
    }

    PlateResult::default()
}

/// Extract a chassis number: a strict 17-character VIN first, then a
/// labeled 10-17 character fallback.
pub fn extract_chassis(text: &str) -> Option<String> {
    if let Some(m) = VIN_STRICT.find(text) {
        return Some(m.as_str().to_uppercase());
    }

    CHASSIS_LABELED
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}

/// Extract the plate and the chassis number independently.
pub fn extract_plate_and_chassis(text: &str) -> (PlateResult, Option<String>) {
    let plate = extract_plate(text);
    let chassis = extract_chassis(text);

    debug!(
        "Vehicle extraction: plate={:?} province={:?} chassis={:?}",
        plate.plate, plate.province, chassis
    );

    (plate, chassis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plate(p: &str, province: Option<&str>) -> PlateResult {
        PlateResult {
            plate: Some(p.to_string()),
            province: province.map(str::to_string),
        }
    }

    #[test]
    fn test_standard_plate() {
        assert_eq!(extract_plate("BE-6401-01"), plate("BE-6401-01", Some("Kinshasa")));
        assert_eq!(extract_plate("be 6401 13"), plate("BE 6401 13", Some("Nord-Kivu")));
    }

    #[test]
    fn test_earlier_pattern_wins() {
        assert_eq!(
            extract_plate("BE-6401-01 1234AB 10"),
            plate("BE-6401-01", Some("Kinshasa"))
        );
        // pattern 1 wins even when the pattern 2 candidate comes first
        assert_eq!(
            extract_plate("1234AB 10 then CD-1111-26"),
            plate("CD-1111-26", Some("Haut-Katanga"))
        );
    }

    #[test]
    fn test_digits_first_plates() {
        assert_eq!(extract_plate("Plaque: 1234AB 10"), plate("1234AB 10", Some("Sankuru")));
        assert_eq!(extract_plate("123AB-05"), plate("123AB-05", Some("Mai-Ndombe")));
        assert_eq!(extract_plate("0058aa19"), plate("0058AA19", Some("Mongala")));
    }

    #[test]
    fn test_plate_split_across_lines() {
        assert_eq!(
            extract_plate("RDC\nBE\n6401\n01\n"),
            plate("BE 6401 01", Some("Kinshasa"))
        );
    }

    #[test]
    fn test_unknown_province_code() {
        assert_eq!(extract_plate("AB123499"), plate("AB123499", None));
        assert_eq!(extract_plate("1234AB 00"), plate("1234AB 00", None));
    }

    #[test]
    fn test_no_plate() {
        assert_eq!(extract_plate("REPUBLIQUE DEMOCRATIQUE DU CONGO"), PlateResult::default());
        assert_eq!(extract_plate(""), PlateResult::default());
    }

    #[test]
    fn test_strict_vin() {
        assert_eq!(
            extract_chassis("VIN 1hgcm82633a004352"),
            Some("1HGCM82633A004352".to_string())
        );
    }

    #[test]
    fn test_strict_vin_beats_labeled() {
        let text = "CHASSIS: ABC1234567\nJTDBR32E720012345";
        assert_eq!(extract_chassis(text), Some("JTDBR32E720012345".to_string()));
    }

    #[test]
    fn test_labeled_chassis() {
        assert_eq!(
            extract_chassis("Chassis: ab12345678x"),
            Some("AB12345678X".to_string())
        );
        // contains an O, so it can never be a strict VIN
        assert_eq!(
            extract_chassis("N° WDBO123456789"),
            Some("WDBO123456789".to_string())
        );
    }

    #[test]
    fn test_no_chassis() {
        assert_eq!(extract_chassis("CHASSIS: 12345"), None);
        assert_eq!(extract_chassis(""), None);
    }

    #[test]
    fn test_plate_and_chassis_are_independent() {
        let (p, chassis) = extract_plate_and_chassis("no plate but VIN 1HGCM82633A004352");
        assert_eq!(p, PlateResult::default());
        assert_eq!(chassis, Some("1HGCM82633A004352".to_string()));
    }

    #[test]
    fn test_plate_idempotent() {
        let first = extract_plate("xx be-6401-01 yy");
        let again = extract_plate(first.plate.as_deref().unwrap());
        assert_eq!(first, again);
    }
}
