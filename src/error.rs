//! Error types for artifact parsing and report persistence.

use std::path::PathBuf;

/// Errors raised while reading or parsing a test artifact.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Artifact or report file could not be read or written
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML syntax error reported by the reader
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed tokens but an unusable document
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// A `TotalTime:` line whose value is not an integer
    #[error("line {line}: invalid startup time '{value}'")]
    InvalidSample { line: usize, value: String },

    /// Report JSON could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
