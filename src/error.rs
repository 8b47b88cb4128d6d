// src/error.rs

use crate::model::SourceRole;
use std::path::PathBuf;

/// Fatal failures while ingesting one of the input files.
///
/// The OS error is only reachable through `source()`, so a report that walks
/// the chain prints it once. Row-level problems are not errors; see
/// [`crate::parser::RowIssue`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("could not read {role} file content: {}", .path.display())]
    Open {
        role: SourceRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{role} file became unreadable: {}", .path.display())]
    Read {
        role: SourceRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn role(&self) -> SourceRole {
        match self {
            SourceError::Open { role, .. } | SourceError::Read { role, .. } => *role,
        }
    }

    /// The underlying OS error
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            SourceError::Open { source, .. } | SourceError::Read { source, .. } => source,
        }
    }
}
