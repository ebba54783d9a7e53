//! Destinations for audit records.
//!
//! The log sink is an external collaborator; [`AuditSink`] is the seam.
//! Three adapters ship with the crate:
//!
//! - [`TracingSink`] -- emits each record as a `tracing` event on the
//!   [`AUDIT_TARGET`] target, leaving routing to the subscriber.
//! - [`FileSink`] -- appends one line per record to a file.
//! - [`MemorySink`] -- collects records in memory.

use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Deserialize;
use tracing::info;

use crate::error::SinkError;
use crate::record::AuditRecord;

/// `tracing` target used by [`TracingSink`].
pub const AUDIT_TARGET: &str = "tradewatch::audit";

/// Line layout for sinks that write raw lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// The human-readable [`Display`](core::fmt::Display) line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl RecordFormat {
    /// Render a record as a single line, without the trailing newline.
    pub fn render(self, record: &AuditRecord) -> Result<String, SinkError> {
        match self {
            Self::Text => Ok(record.to_string()),
            Self::Json => Ok(serde_json::to_string(record)?),
        }
    }
}

/// A destination for audit records.
///
/// Called synchronously from event handlers on the host's dispatch
/// threads, so implementations must not block for long.
pub trait AuditSink: Send + Sync {
    /// Write one record.
    fn emit(&self, record: &AuditRecord) -> Result<(), SinkError>;
}

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Sink that logs records through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn emit(&self, record: &AuditRecord) -> Result<(), SinkError> {
        info!(
            target: AUDIT_TARGET,
            record_id = %record.record_id(),
            kind = record.kind(),
            "{record}"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// Append-only file sink.
///
/// Each record is written with a single `write_all` and flushed before the
/// lock is released, so lines from concurrent handlers never interleave.
#[derive(Debug)]
pub struct FileSink {
    format: RecordFormat,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path, format: RecordFormat) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            format,
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileSink {
    fn emit(&self, record: &AuditRecord) -> Result<(), SinkError> {
        let mut line = self.format.render(record)?;
        line.push('\n');
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Sink that keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record emitted so far, in emission order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.lock().clone()
    }

    /// Text lines of every record emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    /// Number of records emitted so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AuditRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuditSink for MemorySink {
    fn emit(&self, record: &AuditRecord) -> Result<(), SinkError> {
        self.lock().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use tradewatch_types::{EntityId, EntityType, RecordId};

    use super::*;
    use crate::record::{AgentDescriptor, DeathRecord, KillerInfo, TradeRecord};

    fn death() -> AuditRecord {
        AuditRecord::Death(DeathRecord {
            record_id: RecordId::new(),
            recorded_at: Utc::now(),
            agent_id: EntityId::new(),
            agent_name: String::from("mason"),
            agent_type: EntityType::new("VILLAGER"),
            world: String::from("world"),
            coordinates: String::from("x=0.0 y=64.0 z=0.0"),
            killer: KillerInfo::describe(None),
        })
    }

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemorySink::new();
        let first = death();
        let second = death();
        sink.emit(&first).unwrap();
        sink.emit(&second).unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records.first().map(AuditRecord::record_id), Some(first.record_id()));
        assert_eq!(records.last().map(AuditRecord::record_id), Some(second.record_id()));
    }

    #[test]
    fn file_sink_appends_text_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");

        let sink = FileSink::open(&path, RecordFormat::Text).unwrap();
        sink.emit(&death()).unwrap();
        drop(sink);

        // Reopening appends rather than truncating.
        let sink = FileSink::open(&path, RecordFormat::Text).unwrap();
        sink.emit(&death()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.starts_with("[VillagerDeath] Villager 'mason'")));
    }

    #[test]
    fn file_sink_writes_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        let sink = FileSink::open(&path, RecordFormat::Json).unwrap();
        sink.emit(&death()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(value["record"], "death");
        assert_eq!(value["agent_name"], "mason");
        assert_eq!(value["killer"]["entity_type"], "UNKNOWN");
        assert_eq!(value["killer"]["id"], "UNKNOWN");
    }

    #[test]
    fn json_lines_keep_unknown_agent_placeholder() {
        let record = AuditRecord::Trade(TradeRecord {
            record_id: RecordId::new(),
            recorded_at: Utc::now(),
            actor_id: EntityId::new(),
            actor_name: String::from("Alex"),
            agent: AgentDescriptor::Unknown,
            world: String::from("world"),
            coordinates: String::from("x=1.0 y=64.0 z=1.0"),
            paid: String::from("1x EMERALD"),
            received: String::from("4x BREAD"),
        });

        let line = RecordFormat::Json.render(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["record"], "trade");
        assert_eq!(value["agent"]["resolution"], "unknown");
        assert_eq!(value["agent"]["description"], "unknown agent");
    }

    #[test]
    fn tracing_sink_never_fails() {
        assert!(TracingSink.emit(&death()).is_ok());
    }
}
