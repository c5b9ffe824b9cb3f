//! Structured-data persistence for result sets

use super::SinkError;
use docquery_domain::ResultSet;
use std::path::Path;
use tracing::info;

/// Writes a [`ResultSet`] as pretty-printed JSON and loads it back.
pub struct JsonSink;

impl JsonSink {
    /// Persist `results` to `path`.
    ///
    /// A write failure is reported to the caller; the in-memory result set
    /// is unaffected.
    pub fn write(results: &ResultSet, path: &Path) -> Result<(), SinkError> {
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(path, json).map_err(|e| SinkError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        info!("Results saved to {}", path.display());
        Ok(())
    }

    /// Load a previously persisted result set.
    pub fn load(path: &Path) -> Result<ResultSet, SinkError> {
        let contents = std::fs::read_to_string(path).map_err(|e| SinkError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
