//! Regex patterns for Congolese identity and vehicle documents.
//!
//! Labels are matched case-insensitively; values keep their own case rules
//! so an upper-case run really means upper-case in the recognized text.

use lazy_static::lazy_static;
use regex::Regex;

/// `DD/MM/YYYY` with dot, dash or slash separators.
const DATE: &str = r"\d{2}[./\-]\d{2}[./\-]\d{4}";

/// Slash-only date with optional leading zeros.
const SHORT_DATE: &str = r"\d{1,2}/\d{1,2}/\d{4}";

/// Upper-case words on one line. A word must end at a word boundary, so a
/// following mixed-case label never contributes its first letter.
const NAME_WORDS: &str = r"[A-Z][A-Z'-]*\b(?:[ \t]+[A-Z][A-Z'-]*\b)*";

fn labeled_date(labels: &str, date: &str) -> Regex {
    Regex::new(&format!(r"(?i:\b(?:{labels}))[\s:]+({date})")).unwrap()
}

lazy_static! {
    // Vehicle plates, in priority order: BE-6401-01, 1234AB 10, 123AB 10, 0058AA19
    pub static ref PLATE_STANDARD: Regex = Regex::new(
        r"(?i)\b[A-Z]{2}[-\s]?\d{4}[-\s]?\d{2}\b"
    ).unwrap();

    pub static ref PLATE_DIGITS_FIRST: Regex = Regex::new(
        r"(?i)\b\d{4}[A-Z]{2}[\s-]?\d{2}\b"
    ).unwrap();

    pub static ref PLATE_MIXED: Regex = Regex::new(
        r"(?i)\b\d{2,4}[A-Z]{2}[\s-]?\d{2}\b"
    ).unwrap();

    pub static ref PLATE_COMPACT: Regex = Regex::new(
        r"(?i)\b\d{2,4}[A-Z]{2}\d{2}\b"
    ).unwrap();

    pub static ref PROVINCE_SUFFIX: Regex = Regex::new(r"(\d{2})$").unwrap();

    // Chassis numbers
    pub static ref VIN_STRICT: Regex = Regex::new(
        r"(?i)\b[A-HJ-NPR-Z0-9]{17}\b"
    ).unwrap();

    pub static ref CHASSIS_LABELED: Regex = Regex::new(
        r"(?i)(?:\bCHASSIS|\bVIN|\bN°|\bNO)[:\s]*([A-Z0-9]{10,17})\b"
    ).unwrap();

    // Passport machine readable zone
    pub static ref MRZ_LINE: Regex = Regex::new(r"^[A-Z0-9<]{44}$").unwrap();

    pub static ref MRZ_BLOCK: Regex = Regex::new(
        r"P<[A-Z0-9<]+\s+[A-Z0-9<]{44}"
    ).unwrap();

    pub static ref MRZ_NAMES: Regex = Regex::new(r"P<([A-Z]{3})([A-Z<]+)").unwrap();

    pub static ref MRZ_DATA: Regex = Regex::new(
        r"([A-Z0-9<]{9})([0-9<])([A-Z<]{3})(\d{6})([0-9<])([MF<])(\d{6})([0-9<])"
    ).unwrap();

    // Passport printed fields
    pub static ref PASSPORT_NUMBER_OP: Regex = Regex::new(r"(?i)\b(OP\d{7,9})\b").unwrap();

    pub static ref PASSPORT_NUMBER_LABELED: Regex = Regex::new(
        r"(?i:\bpasse?port\b|\bn°|\bno\b)[\s.:]*([A-Z0-9]{6,12})\b"
    ).unwrap();

    pub static ref SURNAME_LABELED: Regex = Regex::new(
        r"(?i:\b(?:nom|name|surname)(?:\s*/\s*(?:nom|name|surname))*\b)[\s:]+([A-Z][A-Z'-]+)\b"
    ).unwrap();

    pub static ref SURNAME_BARE: Regex = Regex::new(r"\b([A-Z]{5,})\b").unwrap();

    pub static ref GIVEN_NAMES_LABELED: Regex = Regex::new(
        r"(?i:\b(?:pr[ée]noms?|given\s+names?|postnom)(?:\s*/\s*(?:pr[ée]noms?|given\s+names?|postnom))*\b)[\s:]+([A-Za-zÀ-ÿ][A-Za-zÀ-ÿ'-]*(?:[ \t]+[A-Za-zÀ-ÿ][A-Za-zÀ-ÿ'-]*)*)"
    ).unwrap();

    pub static ref GIVEN_NAMES_BARE: Regex = Regex::new(
        r"\b([A-Z][a-z]+[ \t]+[A-Z][a-z]+)\b"
    ).unwrap();

    pub static ref PLACE_OF_BIRTH_LABELED: Regex = Regex::new(
        r"(?i:\b(?:lieu\s+de\s+naissance|place\s+of\s+birth)(?:\s*/\s*(?:lieu\s+de\s+naissance|place\s+of\s+birth))*)[\s:]+([A-Za-z][A-Za-z' -]*[A-Za-z])"
    ).unwrap();

    pub static ref KNOWN_CITY: Regex = Regex::new(
        r"(?i)\b(KINSHASA|LUBUMBASHI|MBUJI-MAYI|KISANGANI|KANANGA|BUKAVU|GOMA|KOLWEZI|LIKASI|TSHIKAPA|KIKWIT|MATADI|MBANDAKA|BUNIA|UVIRA|BOMA|KALEMIE|KINDU|ISIRO|BANDUNDU|GEMENA|BUTEMBO|MWENE-DITU|KABINDA)\b"
    ).unwrap();

    pub static ref NATIONALITY_LABELED: Regex = Regex::new(
        r"(?i:\b(?:nationalit[ée]|nationality)(?:\s*/\s*(?:nationalit[ée]|nationality))*)[\s:]+([A-Za-z]+)"
    ).unwrap();

    pub static ref NATIONALITY_LITERAL: Regex = Regex::new(
        r"(?i)\b(CONGOLAISE|CONGOLAIS)\b"
    ).unwrap();

    pub static ref SEX_LABELED: Regex = Regex::new(
        r"(?i:\bsexe?(?:\s*/\s*sexe?)*\b)[\s:]+([MF])\b"
    ).unwrap();

    pub static ref DATE_TOKEN: Regex = Regex::new(&format!(r"\b({DATE})\b")).unwrap();

    pub static ref DATE_OF_BIRTH_LABELED: Regex = labeled_date(
        r"date\s+de\s+naissance|date\s+of\s+birth|n[ée]e?\s+le",
        DATE,
    );

    pub static ref DATE_OF_ISSUE_LABELED: Regex = labeled_date(
        r"date\s+de\s+d[ée]livrance|date\s+of\s+issue|d[ée]livr[ée]e?\s+le",
        DATE,
    );

    pub static ref DATE_OF_EXPIRY_LABELED: Regex = labeled_date(
        r"date\s+d['’]expiration|date\s+of\s+expiry|expire\s+le|valable\s+jusqu['’]au",
        DATE,
    );

    pub static ref AUTHORITY_LITERAL: Regex = Regex::new(
        r"(?i)\b(MINAFFET|DGMIGRATION)\b"
    ).unwrap();

    pub static ref AUTHORITY_LABELED: Regex = Regex::new(
        r"(?i:\b(?:autorit[ée]|issuing\s+authority|authority|issuing)(?:\s*/\s*(?:autorit[ée]|issuing\s+authority|authority))*)[\s:]+([A-Za-z][A-Za-z .'-]*[A-Za-z])"
    ).unwrap();

    // Group 1 ends where the next label starts on the same line, group 2
    // takes the rest of the line.
    pub static ref ADDRESS_LABELED: Regex = Regex::new(
        r"(?i:\b(?:adresse|address)(?:\s*/\s*(?:adresse|address))*\b)[\s:]+(?:([^\n]{10,80}?)[ \t]*(?:(?i:\b(?:profession|nationalit[ée]|nationality|sexe?|date|lieu|autorit[ée]|authority|valable)\b)|P<)|([^\n]{10,80}))"
    ).unwrap();

    pub static ref PROFESSION_LABELED: Regex = Regex::new(
        r"(?i:\bprofession\b)[\s:]+([A-Za-zÀ-ÿ]{3,})"
    ).unwrap();

    pub static ref PROFESSION_LITERAL: Regex = Regex::new(
        r"(?i)\b(LIBERALE|FONCTIONNAIRE|COMMERCANT|ETUDIANT)\b"
    ).unwrap();

    // National identity card
    pub static ref ID_DOCUMENT_NUMBER: Regex = Regex::new(
        r"(?i:\bN°|\bNO\b|\bCARTE\b)[\s.:]*([A-Z0-9][A-Z0-9-]{3,})"
    ).unwrap();

    pub static ref ID_SURNAME: Regex = Regex::new(r"(?i:\bnom\b)[\s:]+([A-Z]+)\b").unwrap();

    pub static ref ID_GIVEN_NAMES: Regex = Regex::new(
        r"(?i:\bpr[ée]noms?\b|\bpostnom\b)[\s:]+([A-Z]+\b(?:[ \t]+[A-Z]+\b)?)"
    ).unwrap();

    pub static ref ID_DATE_OF_BIRTH: Regex = labeled_date(r"n[ée]\(?e?\)?\s+le", SHORT_DATE);

    pub static ref ID_PLACE_OF_BIRTH: Regex = Regex::new(r"\b[àa]\s+([A-Z][A-Z-]+)").unwrap();

    pub static ref ID_SEX: Regex = Regex::new(r"(?i:\bsexe\b)[\s:]+([MF])\b").unwrap();

    pub static ref ID_NATIONALITY: Regex = Regex::new(
        r"(?i:\bnationalit[ée]\b)[\s:]+([A-Z]+)\b"
    ).unwrap();

    pub static ref ID_DATE_OF_ISSUE: Regex = labeled_date(r"d[ée]livr[ée]\(?e?\)?\s+le", SHORT_DATE);

    pub static ref ID_DATE_OF_EXPIRY: Regex = labeled_date(r"valable\s+jusqu['’]au", SHORT_DATE);

    // The value stops at the next label or at the first character an
    // address line never holds.
    pub static ref ID_ADDRESS: Regex = Regex::new(
        r"(?i:\badresse\b)[\s:]+([A-Za-z0-9 /,]+?)[ \t,]*(?:(?i:\b(?:d[ée]livr|valable|nationalit|sexe\b|n[ée]e?\s+le\b|nom\b|postnom\b|pr[ée]nom))|[^A-Za-z0-9 /,]|\z)"
    ).unwrap();

    // Voter registration card
    pub static ref VOTER_CARD_NUMBER: Regex = Regex::new(r"(\d{10,})").unwrap();

    pub static ref VOTER_CODE_CI: Regex = Regex::new(r"(?i:\bcode\s+ci\b)[\s:]+(\d+)").unwrap();

    pub static ref VOTER_NOM_CI: Regex = Regex::new(r"(?i:\bnom\s+ci\b)[\s:]+(\d+)").unwrap();

    pub static ref VOTER_LASTNAME: Regex = Regex::new(r"(?i:\bnom\b)[\s:]+([A-Z]+)\b").unwrap();

    // Middle name in group 1, first name in group 2: `OLIVIER/FWAMBA`
    pub static ref VOTER_NAMES: Regex = Regex::new(&format!(
        r"(?i:\bpostnom\s*/\s*pr[ée]noms?\b)[\s:]+(?:({NAME_WORDS})[ \t]*)?(?:/[ \t]*({NAME_WORDS}))?"
    )).unwrap();

    pub static ref VOTER_BIRTH: Regex = Regex::new(&format!(
        r"(?i:\bdate\s*/\s*lieu\s+de\s+naissance)[\s:]+(\d{{2}}/\d{{2}}/\d{{4}})(?:[ \t,]+({NAME_WORDS}))?"
    )).unwrap();

    pub static ref VOTER_ADDRESS: Regex = Regex::new(
        r"(?is)\badresse\b[\s:]+(.+?)\s*(?:\borigine\b|\bnom\s+d[ue]\b|\blieu\s+et\s+date\b|\z)"
    ).unwrap();

    pub static ref VOTER_ORIGIN: Regex = Regex::new(
        r"(?is)\borigine\b[\s:]+(.+?)\s*(?:\bnom\s+d[ue]\b|\blieu\s+et\s+date\b|\badresse\b|\z)"
    ).unwrap();

    pub static ref VOTER_FATHER: Regex = Regex::new(&format!(
        r"(?i:\bnom\s+du\s+p[èe]re)[\s:]+({NAME_WORDS})"
    )).unwrap();

    pub static ref VOTER_MOTHER: Regex = Regex::new(&format!(
        r"(?i:\bnom\s+de\s+la\s+m[èe]re)[\s:]+({NAME_WORDS})"
    )).unwrap();

    pub static ref VOTER_ISSUE: Regex = Regex::new(
        r"(?i:\blieu\s+et\s+date\s+de\s+d[ée]livrance)[\s:]+([A-Z][A-Z' -]*?)[\s,]*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref VOTER_PHOTO_NUMBER: Regex = Regex::new(r"\b([A-Z]\d{13,})\b").unwrap();
}
