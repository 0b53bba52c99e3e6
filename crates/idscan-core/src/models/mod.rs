//! Data models: document records and configuration.

pub mod config;
pub mod document;

pub use config::{IdscanConfig, OcrConfig, OutputConfig};
pub use document::{
    DocumentKind, DocumentRecord, IdCardRecord, PassportRecord, PlateResult, RecognizedText,
    VehicleRecord, VoterCardRecord,
};
