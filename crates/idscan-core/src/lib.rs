//! Core library for Congolese identity and vehicle document OCR.
//!
//! This crate provides:
//! - Vehicle plate and chassis extraction with province lookup
//! - Passport extraction (MRZ decoding plus printed-text fallbacks)
//! - National identity card and voter card field extraction
//! - An OCR collaborator backed by `pure-onnx-ocr` (feature `native`)

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pipeline;

pub use error::{IdscanError, OcrError, Result};
pub use extract::{
    extract_id_card, extract_passport, extract_plate, extract_plate_and_chassis,
    extract_voter_card, province_name,
};
pub use models::{
    DocumentKind, DocumentRecord, IdCardRecord, IdscanConfig, OcrConfig, OutputConfig,
    PassportRecord, PlateResult, RecognizedText, VehicleRecord, VoterCardRecord,
};
pub use ocr::TextRecognizer;
#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
pub use pipeline::{extract_document, DocumentPipeline, ExtractionResult};
