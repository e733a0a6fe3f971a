//! Append-only JSON Lines audit log

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use logos_domain::EntityId;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something worth recording in the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// An explanation trace was written to disk
    TraceExport {
        /// File the trace was written to
        path: PathBuf,
        /// Subject of the exported trace
        subject_id: EntityId,
    },
    /// A graph snapshot was written to disk
    GraphSnapshot {
        /// Snapshot file
        path: PathBuf,
    },
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// UTC time the record was appended, RFC 3339
    pub timestamp: DateTime<Utc>,
    /// Event payload, flattened next to the timestamp
    #[serde(flatten)]
    pub event: AuditEvent,
}

/// Audit log stored at a single path
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Log backed by `path`; nothing is touched until the first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing this log
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stamp `event` with the current time and append it as one line
    pub fn append(&self, event: AuditEvent) -> Result<AuditRecord, StoreError> {
        let record = AuditRecord {
            timestamp: Utc::now(),
            event,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        writeln!(file, "{}", line).map_err(|e| StoreError::io(&self.path, e))?;

        debug!("Audit record appended to {}: {}", self.path.display(), line);
        Ok(record)
    }

    /// Every record in file order; a missing file is an empty log
    pub fn read_all(&self) -> Result<Vec<AuditRecord>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    StoreError::InvalidData(format!(
                        "{} line {}: {}",
                        self.path.display(),
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }
}
