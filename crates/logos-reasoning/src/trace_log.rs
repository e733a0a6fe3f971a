//! In-memory trace collection and JSON export

use crate::error::TraceExportError;
use chrono::Utc;
use logos_domain::ExplanationTrace;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Collects explanation traces during a run and writes them to disk
///
/// The collection is never cleared. Exporting twice writes every trace
/// again under a fresh timestamp.
#[derive(Debug)]
pub struct TraceLogger {
    log_dir: PathBuf,
    traces: Vec<ExplanationTrace>,
}

impl TraceLogger {
    /// Create a logger targeting `log_dir`; the directory is created on export
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            traces: Vec::new(),
        }
    }

    /// Directory traces are written to
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Append a trace
    pub fn add_trace(&mut self, trace: ExplanationTrace) {
        debug!("Collected trace {} for {}", trace.id, trace.subject_id);
        self.traces.push(trace);
    }

    /// Traces collected so far, in insertion order
    pub fn traces(&self) -> &[ExplanationTrace] {
        &self.traces
    }

    /// Write every collected trace as pretty JSON
    ///
    /// Files are named `trace_<subject_id>_<YYYYmmddHHMMSS>.json` using the
    /// UTC time of the call. Traces sharing a subject within the same second
    /// overwrite each other. Returns the written paths in insertion order.
    pub fn export(&self) -> Result<Vec<PathBuf>, TraceExportError> {
        std::fs::create_dir_all(&self.log_dir).map_err(|source| TraceExportError::Io {
            path: self.log_dir.clone(),
            source,
        })?;

        let timestamp = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let mut paths = Vec::with_capacity(self.traces.len());
        for trace in &self.traces {
            let path = self
                .log_dir
                .join(format!("trace_{}_{}.json", trace.subject_id, timestamp));
            let json = serde_json::to_string_pretty(trace)?;
            std::fs::write(&path, json).map_err(|source| TraceExportError::Io {
                path: path.clone(),
                source,
            })?;
            paths.push(path);
        }

        info!(
            "Exported {} trace(s) to {}",
            paths.len(),
            self.log_dir.display()
        );
        Ok(paths)
    }
}
