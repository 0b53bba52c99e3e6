//! OCR collaborator: turns image bytes into recognized text.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use serde::{Deserialize, Serialize};

use crate::error::OcrError;
use crate::models::document::RecognizedText;

/// Anything that can recognize the text in an image.
///
/// Implementations block for the duration of the call and never retry.
pub trait TextRecognizer: Send + Sync {
    /// Engine name, for logs.
    fn name(&self) -> &str;

    /// Recognize the text in encoded image bytes (PNG, JPEG, ...).
    fn recognize(&self, image: &[u8]) -> Result<RecognizedText, OcrError>;
}

/// A recognized text box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Quadrilateral corners (x1, y1, x2, y2, x3, y3, x4, y4).
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Sort boxes top-to-bottom, then left-to-right within rows of 20 pixels.
pub fn sort_by_reading_order(boxes: &mut [TextBox]) {
    boxes.sort_by(|a, b| {
        let (ax, ay, _, _) = a.rect();
        let (bx, by, _, _) = b.rect();

        let row_a = (ay / 20.0) as i32;
        let row_b = (by / 20.0) as i32;

        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}

/// Join sorted boxes into one text, one box per line, with the mean box
/// confidence scaled to 0 - 100 (0 when there are no boxes).
pub fn to_recognized_text(boxes: &[TextBox]) -> RecognizedText {
    let raw_text = boxes
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let confidence = if boxes.is_empty() {
        0.0
    } else {
        boxes.iter().map(|b| b.confidence).sum::<f32>() / boxes.len() as f32 * 100.0
    };

    RecognizedText::new(raw_text, confidence)
}
