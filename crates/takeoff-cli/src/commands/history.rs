use std::path::Path;

use takeoff_core::audit::AuditLog;
use takeoff_core::error::TakeoffError;

pub fn run(db: &Path, limit: usize) -> Result<(), TakeoffError> {
    if !db.exists() {
        eprintln!("No audit log at {}", db.display());
        return Ok(());
    }

    let log = AuditLog::open(db)?;
    let events = log.recent(limit)?;

    if events.is_empty() {
        println!("No extraction events logged yet.");
        return Ok(());
    }

    for e in &events {
        let feedback = match (&e.feedback_type, &e.feedback) {
            (Some(t), Some(f)) => format!("  [{t}] {f}"),
            (Some(t), None) => format!("  [{t}]"),
            (None, Some(f)) => format!("  {f}"),
            (None, None) => String::new(),
        };
        println!(
            "{}  {}  {}  {} component(s){}",
            e.timestamp, e.filename, e.method, e.component_count, feedback
        );
    }

    Ok(())
}
