use std::io::Read;
use std::path::PathBuf;

use takeoff_core::error::TakeoffError;
use takeoff_core::model::dedup_sorted;
use takeoff_core::ExtractionOutcome;

use crate::output;

/// Parse a pre-extracted text blob. Any external OCR service can feed
/// the parser through this path.
pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), TakeoffError> {
    let text = if input_file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&input_file)?
    };

    let records = takeoff_core::extract_components(&text);
    let outcome = ExtractionOutcome {
        method: "scan".to_string(),
        raw_text: text,
        records,
    };

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print(&outcome),
    }

    if let Some(path) = output_file {
        let json = serde_json::to_string_pretty(&dedup_sorted(&outcome.records))?;
        std::fs::write(&path, json)?;
        eprintln!(
            "{} record(s) written to {}",
            outcome.records.len(),
            path.display()
        );
    }

    Ok(())
}
