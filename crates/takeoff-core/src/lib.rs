pub mod audit;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::TakeoffError;
use extraction::PdfExtractor;
use model::ComponentRecord;
use serde::{Deserialize, Serialize};

/// Result of one extraction run over a drawing PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// Backend that produced the text (see PdfExtractor::backend_name).
    pub method: String,
    /// Concatenated text of all pages, in reading order.
    pub raw_text: String,
    /// Component records in document order, one per code occurrence.
    pub records: Vec<ComponentRecord>,
}

/// Parse raw drawing text into component records.
///
/// Pure and infallible: unrecognized text is skipped and garbled level
/// annotations contribute zero to quantities. The text may come from
/// any source, not just the extraction backends in this crate.
pub fn extract_components(text: &str) -> Vec<ComponentRecord> {
    parsing::parse_components(text)
}

/// Main API entry point: run an extraction backend over a PDF and
/// parse the resulting text into component records.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ExtractionOutcome, TakeoffError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    // Pages join with a single space; the parser collapses whitespace
    // again before tokenizing.
    let raw_text = pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    if raw_text.trim().is_empty() {
        return Err(TakeoffError::NoText);
    }

    let records = parsing::parse_components(&raw_text);

    Ok(ExtractionOutcome {
        method: extractor.backend_name().to_string(),
        raw_text,
        records,
    })
}
