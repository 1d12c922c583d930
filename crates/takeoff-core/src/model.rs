use serde::{Deserialize, Serialize};
use std::fmt;

/// One component-code occurrence extracted from drawing text.
///
/// `levels` holds the bracketed level lists that followed the code, in
/// their original spelling and order, joined with ", ". `quantity` is
/// the total number of discrete building levels those lists denote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub code: String,
    pub levels: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Text,
    Pdftotext,
    Ocr,
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMethod::Text => write!(f, "text"),
            ExtractionMethod::Pdftotext => write!(f, "pdftotext"),
            ExtractionMethod::Ocr => write!(f, "ocr"),
        }
    }
}

impl ExtractionMethod {
    pub fn from_str_loose(s: &str) -> Option<ExtractionMethod> {
        match s.trim().to_lowercase().as_str() {
            "text" | "textlayer" | "native" => Some(ExtractionMethod::Text),
            "pdftotext" | "poppler" => Some(ExtractionMethod::Pdftotext),
            "ocr" | "tesseract" => Some(ExtractionMethod::Ocr),
            _ => None,
        }
    }
}

/// Deduplicate exact-equal records and sort lexicographically by code.
///
/// Occurrence order is deliberately lost here: export views want a
/// stable code-sorted table. The raw occurrence list stays available on
/// the ExtractionOutcome.
pub fn dedup_sorted(records: &[ComponentRecord]) -> Vec<ComponentRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        a.code
            .cmp(&b.code)
            .then_with(|| a.levels.cmp(&b.levels))
            .then_with(|| a.quantity.cmp(&b.quantity))
    });
    out.dedup();
    out
}
