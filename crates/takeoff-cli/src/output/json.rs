use takeoff_core::error::TakeoffError;
use takeoff_core::model::dedup_sorted;
use takeoff_core::ExtractionOutcome;

pub fn print(outcome: &ExtractionOutcome) -> Result<(), TakeoffError> {
    let json = serde_json::to_string_pretty(&dedup_sorted(&outcome.records))?;
    println!("{json}");
    Ok(())
}
