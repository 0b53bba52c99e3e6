//! Extraction orchestration: recognized text in, document record out.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{extract_id_card, extract_passport, extract_plate_and_chassis, extract_voter_card};
use crate::models::document::{
    DocumentKind, DocumentRecord, IdCardRecord, PassportRecord, RecognizedText, VehicleRecord,
    VoterCardRecord,
};
use crate::ocr::TextRecognizer;

/// Record extracted from one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Extracted document record.
    pub record: DocumentRecord,
    /// Recognition plus extraction time in milliseconds.
    pub processing_time_ms: u64,
}

/// Extract a vehicle record (plate, province, chassis).
pub fn extract_vehicle(text: &RecognizedText) -> VehicleRecord {
    let (plate, chassis_number) = extract_plate_and_chassis(&text.raw_text);

    VehicleRecord {
        plate_number: plate.plate,
        province: plate.province,
        chassis_number,
        confidence: text.confidence,
        raw_text: text.raw_text.clone(),
    }
}

/// Extract a passport record.
pub fn extract_passport_record(text: &RecognizedText) -> PassportRecord {
    let fields = extract_passport(&text.raw_text);

    PassportRecord {
        document_number: fields.document_number,
        surname: fields.surname,
        given_names: fields.given_names,
        nationality: fields.nationality,
        date_of_birth: fields.date_of_birth,
        place_of_birth: fields.place_of_birth,
        sex: fields.sex,
        date_of_issue: fields.date_of_issue,
        date_of_expiry: fields.date_of_expiry,
        issuing_authority: fields.issuing_authority,
        address: fields.address,
        profession: fields.profession,
        mrz: fields.mrz,
        confidence: text.confidence,
        raw_text: text.raw_text.clone(),
    }
}

/// Extract a national identity card record.
pub fn extract_id_card_record(text: &RecognizedText) -> IdCardRecord {
    let fields = extract_id_card(&text.raw_text);

    IdCardRecord {
        document_number: fields.document_number,
        surname: fields.surname,
        given_names: fields.given_names,
        date_of_birth: fields.date_of_birth,
        place_of_birth: fields.place_of_birth,
        sex: fields.sex,
        date_of_issue: fields.date_of_issue,
        date_of_expiry: fields.date_of_expiry,
        address: fields.address,
        nationality: fields.nationality,
        confidence: text.confidence,
        raw_text: text.raw_text.clone(),
    }
}

/// Extract a voter card record.
pub fn extract_voter_card_record(text: &RecognizedText) -> VoterCardRecord {
    let fields = extract_voter_card(&text.raw_text);

    VoterCardRecord {
        card_number: fields.card_number,
        code_ci: fields.code_ci,
        nom_ci: fields.nom_ci,
        lastname: fields.lastname,
        middlename: fields.middlename,
        firstname: fields.firstname,
        date_of_birth: fields.date_of_birth,
        place_of_birth: fields.place_of_birth,
        sex: fields.sex,
        address: fields.address,
        origin: fields.origin,
        father_name: fields.father_name,
        mother_name: fields.mother_name,
        place_of_issue: fields.place_of_issue,
        date_of_issue: fields.date_of_issue,
        photo_number: fields.photo_number,
        confidence: text.confidence,
        raw_text: text.raw_text.clone(),
    }
}

/// Run the extractor for `kind` over recognized text.
pub fn extract_document(kind: DocumentKind, text: &RecognizedText) -> DocumentRecord {
    info!(
        "Extracting {} from {} characters of text",
        kind,
        text.raw_text.chars().count()
    );

    let record = match kind {
        DocumentKind::Vehicle => DocumentRecord::Vehicle(extract_vehicle(text)),
        DocumentKind::Passport => DocumentRecord::Passport(extract_passport_record(text)),
        DocumentKind::IdCard => DocumentRecord::IdCard(extract_id_card_record(text)),
        DocumentKind::VoterCard => DocumentRecord::VoterCard(extract_voter_card_record(text)),
    };

    debug!(
        "Extracted {}/{} {} fields",
        record.found_count(),
        record.fields().len(),
        kind
    );

    record
}

/// Recognizer plus extraction for one document kind at a time.
pub struct DocumentPipeline<R: TextRecognizer> {
    recognizer: R,
}

impl<R: TextRecognizer> DocumentPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Recognize `image` and extract a `kind` record from the text.
    ///
    /// A recognizer failure aborts the call; no partial record is produced.
    pub fn process(&self, kind: DocumentKind, image: &[u8]) -> Result<ExtractionResult> {
        let start = Instant::now();

        debug!("Recognizing {} bytes with {}", image.len(), self.recognizer.name());
        let text = self.recognizer.recognize(image)?;

        let record = extract_document(kind, &text);

        Ok(ExtractionResult {
            record,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
