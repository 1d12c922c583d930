pub mod ocr;
pub mod pdftotext;
pub mod textlayer;

use crate::error::TakeoffError;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text from PDF bytes, one PageText per page in reading order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, TakeoffError>;

    /// Name of this extraction backend (for diagnostics and the audit log).
    fn backend_name(&self) -> &str;
}
