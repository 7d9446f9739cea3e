//! File-selection check: each report is recognised by a marker in its file
//! name, so a file picked for the wrong slot is rejected before parsing.

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Which of the two reports a file was supplied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Performance,
    Status,
}

impl ReportKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ReportKind::Performance => "Performance",
            ReportKind::Status => "Status",
        }
    }
}

pub fn validate_file_name(path: &Path, kind: ReportKind, marker: &str) -> AppResult<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if name.contains(marker) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "Invalid {} file '{}': expected a name containing \"{}\"",
            kind.describe(),
            path.display(),
            marker
        )))
    }
}
