use std::path::PathBuf;

use takeoff_core::audit::AuditLog;
use takeoff_core::error::TakeoffError;
use takeoff_core::extraction::ocr::OcrExtractor;
use takeoff_core::extraction::pdftotext::PdftotextExtractor;
use takeoff_core::extraction::textlayer::TextLayerExtractor;
use takeoff_core::extraction::PdfExtractor;
use takeoff_core::model::{dedup_sorted, ExtractionMethod};

use crate::output;

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the drawing PDF
    pub pdf_file: PathBuf,

    /// Extraction method: text (native text layer), pdftotext, or ocr
    #[arg(short, long, default_value = "text")]
    pub method: String,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Write the deduplicated records to a JSON file
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Print the raw extracted text before the records
    #[arg(long)]
    pub raw: bool,

    /// Append this run to an SQLite audit log
    #[arg(long = "log-db", value_name = "FILE")]
    pub log_db: Option<PathBuf>,

    /// Free-text feedback stored with the audit entry
    #[arg(long, requires = "log_db")]
    pub feedback: Option<String>,

    /// Feedback type stored with the audit entry (e.g. good, bad)
    #[arg(long = "feedback-type", requires = "log_db")]
    pub feedback_type: Option<String>,

    /// Render resolution for the ocr method
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Tesseract language code for the ocr method
    #[arg(long, default_value = "eng")]
    pub lang: String,
}

pub fn run(args: ExtractArgs) -> Result<(), TakeoffError> {
    let method = ExtractionMethod::from_str_loose(&args.method)
        .ok_or_else(|| TakeoffError::UnknownMethod(args.method.clone()))?;

    let pdf_bytes = std::fs::read(&args.pdf_file)?;

    let extractor: Box<dyn PdfExtractor> = match method {
        ExtractionMethod::Text => Box::new(TextLayerExtractor::new()),
        ExtractionMethod::Pdftotext => Box::new(PdftotextExtractor::new()),
        ExtractionMethod::Ocr => Box::new(OcrExtractor::new(args.dpi, &args.lang)),
    };

    let outcome = takeoff_core::extract_pdf(&pdf_bytes, extractor.as_ref())?;

    if args.raw {
        println!("--- raw text ({}) ---", outcome.method);
        println!("{}", outcome.raw_text.trim());
        println!("---");
    }

    match args.output.as_str() {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print(&outcome),
    }

    if let Some(path) = &args.out {
        let json = serde_json::to_string_pretty(&dedup_sorted(&outcome.records))?;
        std::fs::write(path, json)?;
        eprintln!(
            "{} record(s) written to {}",
            outcome.records.len(),
            path.display()
        );
    }

    if let Some(db_path) = &args.log_db {
        let log = AuditLog::open(db_path)?;
        let filename = args
            .pdf_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.pdf_file.display().to_string());
        log.record(
            &filename,
            &outcome.method,
            outcome.records.len(),
            args.feedback.as_deref(),
            args.feedback_type.as_deref(),
        )?;
    }

    Ok(())
}
