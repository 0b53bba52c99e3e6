//! Document records produced by the field extractors.
//!
//! Every field is an `Option<String>`: either a normalized, non-empty value
//! or `None` when no pattern matched. Records serialize in camelCase with a
//! `documentType` tag so the JSON matches what API consumers already expect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text produced by the OCR collaborator for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedText {
    /// Recognized text, line breaks preserved.
    pub raw_text: String,

    /// Engine confidence (0 - 100).
    pub confidence: f32,
}

impl RecognizedText {
    pub fn new(raw_text: impl Into<String>, confidence: f32) -> Self {
        Self {
            raw_text: raw_text.into(),
            confidence,
        }
    }
}

/// Kind of document to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Vehicle plate and chassis text.
    Vehicle,
    /// Passport (MRZ + printed fields).
    Passport,
    /// National identity card.
    IdCard,
    /// Voter registration card.
    VoterCard,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Vehicle,
        DocumentKind::Passport,
        DocumentKind::IdCard,
        DocumentKind::VoterCard,
    ];

    /// Short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Vehicle => "vehicle",
            DocumentKind::Passport => "passport",
            DocumentKind::IdCard => "id-card",
            DocumentKind::VoterCard => "voter-card",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "vehicle" | "plate" => Ok(DocumentKind::Vehicle),
            "passport" => Ok(DocumentKind::Passport),
            "id-card" | "idcard" | "id" => Ok(DocumentKind::IdCard),
            "voter-card" | "votercard" | "voter" => Ok(DocumentKind::VoterCard),
            other => Err(format!("unknown document kind: {}", other)),
        }
    }
}

/// Plate number and the province its code resolves to.
///
/// `province` is only ever set together with `plate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateResult {
    pub plate: Option<String>,
    pub province: Option<String>,
}

/// Vehicle plate/chassis record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub plate_number: Option<String>,
    pub province: Option<String>,
    pub chassis_number: Option<String>,
    pub confidence: f32,
    pub raw_text: String,
}

/// Passport record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportRecord {
    pub document_number: Option<String>,
    pub surname: Option<String>,
    pub given_names: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    /// `M` or `F`.
    pub sex: Option<String>,
    pub date_of_issue: Option<String>,
    pub date_of_expiry: Option<String>,
    pub issuing_authority: Option<String>,
    pub address: Option<String>,
    pub profession: Option<String>,
    /// Both MRZ lines joined with `\n`.
    pub mrz: Option<String>,
    pub confidence: f32,
    pub raw_text: String,
}

/// National identity card record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCardRecord {
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
    pub confidence: f32,
    pub raw_text: String,
}

/// Voter registration card record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterCardRecord {
    pub card_number: Option<String>,
    #[serde(rename = "codeCI")]
    pub code_ci: Option<String>,
    #[serde(rename = "nomCI")]
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
    pub confidence: f32,
    pub raw_text: String,
}

/// A record for any supported document kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "documentType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentRecord {
    Vehicle(VehicleRecord),
    Passport(PassportRecord),
    IdCard(IdCardRecord),
    VoterCard(VoterCardRecord),
}

impl DocumentRecord {
    /// Kind of document this record was extracted as.
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRecord::Vehicle(_) => DocumentKind::Vehicle,
            DocumentRecord::Passport(_) => DocumentKind::Passport,
            DocumentRecord::IdCard(_) => DocumentKind::IdCard,
            DocumentRecord::VoterCard(_) => DocumentKind::VoterCard,
        }
    }

    /// OCR confidence carried through from the recognizer.
    pub fn confidence(&self) -> f32 {
        match self {
            DocumentRecord::Vehicle(r) => r.confidence,
            DocumentRecord::Passport(r) => r.confidence,
            DocumentRecord::IdCard(r) => r.confidence,
            DocumentRecord::VoterCard(r) => r.confidence,
        }
    }

    /// Recognized text the record was extracted from.
    pub fn raw_text(&self) -> &str {
        match self {
            DocumentRecord::Vehicle(r) => &r.raw_text,
            DocumentRecord::Passport(r) => &r.raw_text,
            DocumentRecord::IdCard(r) => &r.raw_text,
            DocumentRecord::VoterCard(r) => &r.raw_text,
        }
    }

    /// Extracted fields in display order, as `(name, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        match self {
            DocumentRecord::Vehicle(r) => vec![
                ("plateNumber", r.plate_number.as_deref()),
                ("province", r.province.as_deref()),
                ("chassisNumber", r.chassis_number.as_deref()),
            ],
            DocumentRecord::Passport(r) => vec![
                ("documentNumber", r.document_number.as_deref()),
                ("surname", r.surname.as_deref()),
                ("givenNames", r.given_names.as_deref()),
                ("nationality", r.nationality.as_deref()),
                ("dateOfBirth", r.date_of_birth.as_deref()),
                ("placeOfBirth", r.place_of_birth.as_deref()),
                ("sex", r.sex.as_deref()),
                ("dateOfIssue", r.date_of_issue.as_deref()),
                ("dateOfExpiry", r.date_of_expiry.as_deref()),
                ("issuingAuthority", r.issuing_authority.as_deref()),
                ("address", r.address.as_deref()),
                ("profession", r.profession.as_deref()),
                ("mrz", r.mrz.as_deref()),
            ],
            DocumentRecord::IdCard(r) => vec![
                ("documentNumber", r.document_number.as_deref()),
                ("surname", r.surname.as_deref()),
                ("givenNames", r.given_names.as_deref()),
                ("dateOfBirth", r.date_of_birth.as_deref()),
                ("placeOfBirth", r.place_of_birth.as_deref()),
                ("sex", r.sex.as_deref()),
                ("dateOfIssue", r.date_of_issue.as_deref()),
                ("dateOfExpiry", r.date_of_expiry.as_deref()),
                ("address", r.address.as_deref()),
                ("nationality", r.nationality.as_deref()),
            ],
            DocumentRecord::VoterCard(r) => vec![
                ("cardNumber", r.card_number.as_deref()),
                ("codeCI", r.code_ci.as_deref()),
                ("nomCI", r.nom_ci.as_deref()),
                ("lastname", r.lastname.as_deref()),
                ("middlename", r.middlename.as_deref()),
                ("firstname", r.firstname.as_deref()),
                ("dateOfBirth", r.date_of_birth.as_deref()),
                ("placeOfBirth", r.place_of_birth.as_deref()),
                ("sex", r.sex.as_deref()),
                ("address", r.address.as_deref()),
                ("origin", r.origin.as_deref()),
                ("fatherName", r.father_name.as_deref()),
                ("motherName", r.mother_name.as_deref()),
                ("placeOfIssue", r.place_of_issue.as_deref()),
                ("dateOfIssue", r.date_of_issue.as_deref()),
                ("photoNumber", r.photo_number.as_deref()),
            ],
        }
    }

    /// Number of fields that were extracted.
    pub fn found_count(&self) -> usize {
        self.fields().iter().filter(|(_, v)| v.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_from_str() {
        assert_eq!("passport".parse::<DocumentKind>(), Ok(DocumentKind::Passport));
        assert_eq!("ID_CARD".parse::<DocumentKind>(), Ok(DocumentKind::IdCard));
        assert_eq!("voter-card".parse::<DocumentKind>(), Ok(DocumentKind::VoterCard));
        assert_eq!("plate".parse::<DocumentKind>(), Ok(DocumentKind::Vehicle));
        assert!("invoice".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_document_kind_round_trips_through_display() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.to_string().parse::<DocumentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_record_serializes_with_document_type_tag() {
        let record = DocumentRecord::VoterCard(VoterCardRecord {
            code_ci: Some("1234".to_string()),
            lastname: Some("MULENDA".to_string()),
            confidence: 87.0,
            ..Default::default()
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["documentType"], "VOTER_CARD");
        assert_eq!(json["codeCI"], "1234");
        assert_eq!(json["lastname"], "MULENDA");
        assert!(json["firstname"].is_null());
        assert_eq!(json["rawText"], "");
    }

    #[test]
    fn test_found_count() {
        let record = DocumentRecord::Vehicle(VehicleRecord {
            plate_number: Some("BE-6401-01".to_string()),
            province: Some("Kinshasa".to_string()),
            ..Default::default()
        });

        assert_eq!(record.kind(), DocumentKind::Vehicle);
        assert_eq!(record.found_count(), 2);
        assert_eq!(record.fields().len(), 3);
    }
}
