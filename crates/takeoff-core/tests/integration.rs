//! Integration tests for the extract_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageText without
//! touching any real backend, so these tests run without poppler-utils
//! or tesseract installed.

use takeoff_core::error::TakeoffError;
use takeoff_core::extract_pdf;
use takeoff_core::extraction::{PageText, PdfExtractor};
use takeoff_core::model::dedup_sorted;

struct MockExtractor {
    pages: Vec<PageText>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageText>, TakeoffError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, text: &str) -> PageText {
    PageText {
        page_number: number,
        text: text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test 1: Single sheet with codes and level lists in annotation order
// ---------------------------------------------------------------------------
#[test]
fn single_sheet_extraction() {
    let extractor = MockExtractor {
        pages: vec![page(1, "1TD2aX-3 (2, 4-6) some text 2AC (1)")],
    };

    let outcome = extract_pdf(&[], &extractor).unwrap();

    assert_eq!(outcome.method, "mock");
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].code, "1TD2aX-3");
    assert_eq!(outcome.records[0].levels, "(2, 4-6)");
    assert_eq!(outcome.records[0].quantity, 4);
    assert_eq!(outcome.records[1].code, "2AC");
    assert_eq!(outcome.records[1].levels, "(1)");
    assert_eq!(outcome.records[1].quantity, 1);
}

// ---------------------------------------------------------------------------
// Test 2: Tokens split across pages are joined by the page concatenation
// ---------------------------------------------------------------------------
#[test]
fn levels_on_following_page_attach_to_code() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, "title block 1WA5"),
            page(2, "(2-3) footer notes"),
        ],
    };

    let outcome = extract_pdf(&[], &extractor).unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].code, "1WA5");
    assert_eq!(outcome.records[0].levels, "(2-3)");
    assert_eq!(outcome.records[0].quantity, 2);
}

// ---------------------------------------------------------------------------
// Test 3: Document with no recognizable tokens yields an empty record list
// ---------------------------------------------------------------------------
#[test]
fn no_tokens_yields_empty_records() {
    let extractor = MockExtractor {
        pages: vec![page(1, "general notes, scale 1:50, rev B")],
    };

    let outcome = extract_pdf(&[], &extractor).unwrap();
    assert!(outcome.records.is_empty());
}

// ---------------------------------------------------------------------------
// Test 4: Empty document is an error, not an empty result
// ---------------------------------------------------------------------------
#[test]
fn empty_document_is_no_text_error() {
    let extractor = MockExtractor {
        pages: vec![page(1, "   \n\t  ")],
    };

    let result = extract_pdf(&[], &extractor);
    assert!(matches!(result, Err(TakeoffError::NoText)));
}

// ---------------------------------------------------------------------------
// Test 5: Backend errors propagate unchanged
// ---------------------------------------------------------------------------
#[test]
fn backend_error_propagates() {
    struct FailingExtractor;

    impl PdfExtractor for FailingExtractor {
        fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageText>, TakeoffError> {
            Err(TakeoffError::Extraction("corrupt xref table".into()))
        }

        fn backend_name(&self) -> &str {
            "failing"
        }
    }

    let result = extract_pdf(&[], &FailingExtractor);
    assert!(matches!(result, Err(TakeoffError::Extraction(_))));
}

// ---------------------------------------------------------------------------
// Test 6: Noisy OCR text — garbled level parts degrade to zero, codes survive
// ---------------------------------------------------------------------------
#[test]
fn garbled_ocr_text_keeps_codes() {
    let extractor = MockExtractor {
        pages: vec![page(1, "1HD7 (l, 3) 2BWx (4-6)")],
    };

    let outcome = extract_pdf(&[], &extractor).unwrap();

    // "(l, 3)" is not a level-list token (letter part), so 1HD7 keeps
    // an empty level text rather than failing.
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].code, "1HD7");
    assert_eq!(outcome.records[0].levels, "");
    assert_eq!(outcome.records[0].quantity, 0);
    assert_eq!(outcome.records[1].code, "2BWx");
    assert_eq!(outcome.records[1].quantity, 3);
}

// ---------------------------------------------------------------------------
// Test 7: Duplicate annotations collapse in the export view only
// ---------------------------------------------------------------------------
#[test]
fn duplicate_occurrences_survive_until_dedup() {
    let extractor = MockExtractor {
        pages: vec![page(1, "2AC (1) detail 2AC (1) section 1TD (2-4)")],
    };

    let outcome = extract_pdf(&[], &extractor).unwrap();

    // Occurrence list keeps both 2AC records
    assert_eq!(outcome.records.len(), 3);

    let table = dedup_sorted(&outcome.records);
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].code, "1TD");
    assert_eq!(table[1].code, "2AC");
    assert_eq!(table[1].quantity, 1);
}
