#[derive(Debug, thiserror::Error)]
pub enum TakeoffError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("OCR requires pdftoppm (poppler-utils) and tesseract to be installed")]
    OcrToolsMissing,

    #[error("no text content found in PDF")]
    NoText,

    #[error("unknown extraction method '{0}'. Expected one of: text, pdftotext, ocr")]
    UnknownMethod(String),

    #[error("audit log error: {0}")]
    Audit(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
