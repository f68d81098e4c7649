use std::path::PathBuf;

use thiserror::Error;

/// Which registry a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Example,
    Category,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Example => write!(f, "example"),
            Self::Category => write!(f, "category"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("unknown {kind} '{key}'")]
    NotFound { kind: EntryKind, key: String },

    #[error("destination already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("missing source file: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("{0}")]
    Parse(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// A non-fatal condition collected during generation.
///
/// Warnings never abort a run and never affect exit status; the CLI
/// layer prints them after the fact.
#[derive(Debug, Clone)]
pub struct Warning {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}
