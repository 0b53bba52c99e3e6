//! Province codes of the Democratic Republic of the Congo.
//!
//! The last two digits of a vehicle plate identify the issuing province.

const PROVINCE_CODES: [(&str, &str); 26] = [
    ("01", "Kinshasa"),
    ("02", "Kongo Central"),
    ("03", "Kwango"),
    ("04", "Kwilu"),
    ("05", "Mai-Ndombe"),
    ("06", "Kasaï"),
    ("07", "Kasaï-Central"),
    ("08", "Kasaï-Oriental"),
    ("09", "Lomami"),
    ("10", "Sankuru"),
    ("11", "Maniema"),
    ("12", "Sud-Kivu"),
    ("13", "Nord-Kivu"),
    ("14", "Ituri"),
    ("15", "Haut-Uélé"),
    ("16", "Tshopo"),
    ("17", "Bas-Uélé"),
    ("18", "Nord-Ubangi"),
    ("19", "Mongala"),
    ("20", "Sud-Ubangi"),
    ("21", "Équateur"),
    ("22", "Tshuapa"),
    ("23", "Tanganyika"),
    ("24", "Haut-Lomami"),
    ("25", "Lualaba"),
    ("26", "Haut-Katanga"),
];

/// Look up a two-digit province code. Unknown codes yield `None`.
pub fn province_name(code: &str) -> Option<&'static str> {
    PROVINCE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// All `(code, name)` pairs in code order.
pub fn provinces() -> impl Iterator<Item = (&'static str, &'static str)> {
    PROVINCE_CODES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(province_name("01"), Some("Kinshasa"));
        assert_eq!(province_name("13"), Some("Nord-Kivu"));
        assert_eq!(province_name("26"), Some("Haut-Katanga"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(province_name("00"), None);
        assert_eq!(province_name("27"), None);
        assert_eq!(province_name("99"), None);
        assert_eq!(province_name("1"), None);
        assert_eq!(province_name(""), None);
    }

    #[test]
    fn test_registry_is_complete_and_ordered() {
        let codes: Vec<_> = provinces().map(|(code, _)| code).collect();
        assert_eq!(codes.len(), 26);
        for (i, code) in codes.iter().enumerate() {
            assert_eq!(*code, format!("{:02}", i + 1));
        }
    }
}
