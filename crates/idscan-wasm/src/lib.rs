//! WASM bindings for identity and vehicle document field extraction.
//!
//! OCR runs on the JavaScript side; these bindings take the recognized
//! text (or text boxes) and return the extracted records.

use wasm_bindgen::prelude::*;

use idscan_core::extract::{decode_mrz_date as core_decode_mrz_date, provinces as core_provinces};
use idscan_core::ocr::{sort_by_reading_order, to_recognized_text, TextBox};
use idscan_core::{extract_document as core_extract_document, DocumentKind, DocumentRecord, RecognizedText};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_kind(kind: &str) -> Result<DocumentKind, String> {
    kind.parse::<DocumentKind>()
}

fn extract_record(kind: &str, text: &str, confidence: f32) -> Result<DocumentRecord, String> {
    let kind = parse_kind(kind)?;
    Ok(core_extract_document(kind, &RecognizedText::new(text, confidence)))
}

fn to_js(record: &DocumentRecord) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a record of `kind` (vehicle, passport, id-card, voter-card)
/// from recognized text.
#[wasm_bindgen]
pub fn extract_document(kind: &str, text: &str, confidence: Option<f32>) -> Result<JsValue, JsValue> {
    let record = extract_record(kind, text, confidence.unwrap_or(0.0))
        .map_err(|e| JsValue::from_str(&e))?;
    to_js(&record)
}

/// Same as [`extract_document`], serialized to a JSON string.
#[wasm_bindgen]
pub fn extract_document_json(kind: &str, text: &str, confidence: Option<f32>) -> Result<String, JsValue> {
    let record = extract_record(kind, text, confidence.unwrap_or(0.0))
        .map_err(|e| JsValue::from_str(&e))?;
    serde_json::to_string(&record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract plate, province and chassis number.
#[wasm_bindgen]
pub fn extract_vehicle(text: &str) -> Result<JsValue, JsValue> {
    extract_document("vehicle", text, None)
}

/// Extract passport fields (MRZ first, printed text second).
#[wasm_bindgen]
pub fn extract_passport(text: &str) -> Result<JsValue, JsValue> {
    extract_document("passport", text, None)
}

/// Extract national identity card fields.
#[wasm_bindgen]
pub fn extract_id_card(text: &str) -> Result<JsValue, JsValue> {
    extract_document("id-card", text, None)
}

/// Extract voter card fields.
#[wasm_bindgen]
pub fn extract_voter_card(text: &str) -> Result<JsValue, JsValue> {
    extract_document("voter-card", text, None)
}

/// Province name for a two-digit plate code.
#[wasm_bindgen]
pub fn province_for_code(code: &str) -> Option<String> {
    idscan_core::province_name(code).map(str::to_string)
}

/// All provinces as `[{ code, name }]`.
#[wasm_bindgen]
pub fn provinces() -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct Province {
        code: &'static str,
        name: &'static str,
    }

    let all: Vec<Province> = core_provinces()
        .map(|(code, name)| Province { code, name })
        .collect();

    serde_wasm_bindgen::to_value(&all).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert an MRZ `YYMMDD` date to `DD/MM/YYYY`.
#[wasm_bindgen]
pub fn decode_mrz_date(yymmdd: &str) -> Option<String> {
    core_decode_mrz_date(yymmdd)
}

/// Text boxes recognized on the browser side.
#[wasm_bindgen]
pub struct OcrResultJs {
    boxes: Vec<TextBox>,
}

#[wasm_bindgen]
impl OcrResultJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Add a text box. `confidence` is in the 0.0 - 1.0 range.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn add_box(
        &mut self,
        text: &str,
        x1: f32, y1: f32,
        x2: f32, y2: f32,
        x3: f32, y3: f32,
        x4: f32, y4: f32,
        confidence: f32,
    ) {
        self.boxes.push(TextBox {
            bbox: [x1, y1, x2, y2, x3, y3, x4, y4],
            text: text.to_string(),
            confidence,
        });
    }

    /// Number of boxes added so far.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Full text in reading order.
    #[wasm_bindgen]
    pub fn get_text(&self) -> String {
        self.recognized().raw_text
    }

    /// Extract a record of `kind` from the boxes.
    #[wasm_bindgen]
    pub fn extract(&self, kind: &str) -> Result<JsValue, JsValue> {
        let kind = parse_kind(kind).map_err(|e| JsValue::from_str(&e))?;
        to_js(&core_extract_document(kind, &self.recognized()))
    }
}

impl OcrResultJs {
    fn recognized(&self) -> RecognizedText {
        let mut boxes = self.boxes.clone();
        sort_by_reading_order(&mut boxes);
        to_recognized_text(&boxes)
    }
}

impl Default for OcrResultJs {
    fn default() -> Self {
        Self::new()
    }
}
