use crate::error::TakeoffError;
use chrono::Utc;
use rusqlite::Connection;
use std::path::Path;

/// One row of the extraction log.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub id: i64,
    pub filename: String,
    pub method: String,
    pub component_count: i64,
    pub feedback: Option<String>,
    pub feedback_type: Option<String>,
    pub timestamp: String,
}

/// Append-only SQLite log of extraction runs.
///
/// The core parser knows nothing about this; callers record an event
/// after an extraction if they want an audit trail.
pub struct AuditLog {
    conn: Connection,
}

impl AuditLog {
    /// Open the log database at the given path, creating the schema on
    /// first use.
    pub fn open(path: &Path) -> Result<Self, TakeoffError> {
        Self::init(Connection::open(path)?)
    }

    /// In-memory log, used by tests.
    pub fn open_in_memory() -> Result<Self, TakeoffError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, TakeoffError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS extraction_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                method TEXT NOT NULL,
                component_count INTEGER NOT NULL,
                feedback TEXT,
                feedback_type TEXT,
                timestamp TEXT NOT NULL
            )",
            [],
        )?;
        Ok(AuditLog { conn })
    }

    /// Append one extraction event. Timestamps are UTC RFC 3339.
    pub fn record(
        &self,
        filename: &str,
        method: &str,
        component_count: usize,
        feedback: Option<&str>,
        feedback_type: Option<&str>,
    ) -> Result<(), TakeoffError> {
        self.conn.execute(
            "INSERT INTO extraction_logs
             (filename, method, component_count, feedback, feedback_type, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                filename,
                method,
                component_count as i64,
                feedback,
                feedback_type,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Most recent events, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AuditEvent>, TakeoffError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, filename, method, component_count, feedback, feedback_type, timestamp
             FROM extraction_logs ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(AuditEvent {
                id: row.get(0)?,
                filename: row.get(1)?,
                method: row.get(2)?,
                component_count: row.get(3)?,
                feedback: row.get(4)?,
                feedback_type: row.get(5)?,
                timestamp: row.get(6)?,
            })
        })?;

        let mut events = Vec::new();
        for row in rows {
            events.push(row?);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_recent() {
        let log = AuditLog::open_in_memory().unwrap();
        log.record("plan-a.pdf", "text", 12, None, None).unwrap();
        log.record("plan-b.pdf", "ocr", 3, Some("garbled codes"), Some("bad"))
            .unwrap();

        let events = log.recent(10).unwrap();
        assert_eq!(events.len(), 2);
        // Newest first
        assert_eq!(events[0].filename, "plan-b.pdf");
        assert_eq!(events[0].method, "ocr");
        assert_eq!(events[0].component_count, 3);
        assert_eq!(events[0].feedback.as_deref(), Some("garbled codes"));
        assert_eq!(events[0].feedback_type.as_deref(), Some("bad"));
        assert_eq!(events[1].filename, "plan-a.pdf");
        assert!(events[1].feedback.is_none());
    }

    #[test]
    fn test_recent_respects_limit() {
        let log = AuditLog::open_in_memory().unwrap();
        for i in 0..5 {
            log.record(&format!("plan-{i}.pdf"), "text", i, None, None)
                .unwrap();
        }
        let events = log.recent(2).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].filename, "plan-4.pdf");
    }

    #[test]
    fn test_open_creates_schema_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("takeoff.db");
        {
            let log = AuditLog::open(&path).unwrap();
            log.record("plan.pdf", "pdftotext", 7, None, None).unwrap();
        }
        // Reopen and read back
        let log = AuditLog::open(&path).unwrap();
        let events = log.recent(10).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].component_count, 7);
        assert!(!events[0].timestamp.is_empty());
    }
}
