use crate::error::TakeoffError;
use crate::extraction::{PageText, PdfExtractor};
use std::process::Command;

pub const DEFAULT_DPI: u32 = 300;
pub const DEFAULT_LANG: &str = "eng";

/// OCR extraction backend for scanned drawing sheets.
///
/// Renders each page to PNG with `pdftoppm`, then runs `tesseract` on
/// the images. Far slower than the text-layer backends but the only
/// option when the PDF carries no text layer.
pub struct OcrExtractor {
    dpi: u32,
    lang: String,
}

impl OcrExtractor {
    pub fn new(dpi: u32, lang: &str) -> Self {
        OcrExtractor {
            dpi,
            lang: lang.to_string(),
        }
    }

    /// Check if pdftoppm and tesseract are available on the system.
    pub fn is_available() -> bool {
        let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
        let tesseract = Command::new("tesseract").arg("--version").output().is_ok();
        pdftoppm && tesseract
    }
}

impl Default for OcrExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DPI, DEFAULT_LANG)
    }
}

impl PdfExtractor for OcrExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, TakeoffError> {
        if !Self::is_available() {
            return Err(TakeoffError::OcrToolsMissing);
        }

        let temp_dir = tempfile::tempdir()?;
        let pdf_path = temp_dir.path().join("input.pdf");
        std::fs::write(&pdf_path, pdf_bytes)?;
        let output_prefix = temp_dir.path().join("page");

        let rendered = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(&pdf_path)
            .arg(&output_prefix)
            .output()
            .map_err(|e| TakeoffError::Extraction(format!("failed to run pdftoppm: {}", e)))?;

        if !rendered.status.success() {
            return Err(TakeoffError::Extraction(format!(
                "pdftoppm failed: {}",
                String::from_utf8_lossy(&rendered.stderr)
            )));
        }

        // pdftoppm names images page-1.png, page-2.png, ...; sorting
        // the paths restores page order.
        let mut images: Vec<_> = std::fs::read_dir(temp_dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
            .collect();
        images.sort();

        if images.is_empty() {
            return Err(TakeoffError::Extraction(
                "pdftoppm produced no page images".into(),
            ));
        }

        let mut pages = Vec::with_capacity(images.len());
        for (i, image) in images.iter().enumerate() {
            let ocr = Command::new("tesseract")
                .arg(image)
                .arg("stdout")
                .arg("-l")
                .arg(&self.lang)
                .output()
                .map_err(|e| TakeoffError::Extraction(format!("failed to run tesseract: {}", e)))?;

            if !ocr.status.success() {
                return Err(TakeoffError::Extraction(format!(
                    "tesseract failed on {}: {}",
                    image.display(),
                    String::from_utf8_lossy(&ocr.stderr)
                )));
            }

            pages.push(PageText {
                page_number: i + 1,
                text: String::from_utf8_lossy(&ocr.stdout).to_string(),
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "ocr"
    }
}
