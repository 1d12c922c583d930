use crate::error::TakeoffError;
use crate::extraction::{PageText, PdfExtractor};

/// Extraction backend reading the PDF's native text layer with the
/// pdf-extract crate.
///
/// Fast and accurate for drawings exported straight from CAD; useless
/// for scanned sheets, which need the OCR backend instead.
pub struct TextLayerExtractor;

impl TextLayerExtractor {
    pub fn new() -> Self {
        TextLayerExtractor
    }
}

impl Default for TextLayerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for TextLayerExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, TakeoffError> {
        let text = pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| TakeoffError::Extraction(e.to_string()))?;

        // Split on form feeds if present; otherwise the whole document
        // comes through as page 1.
        let pages = text
            .split('\x0c')
            .enumerate()
            .map(|(i, page_text)| PageText {
                page_number: i + 1,
                text: page_text.to_string(),
            })
            .filter(|p| !p.text.trim().is_empty() || p.page_number == 1)
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "text"
    }
}
