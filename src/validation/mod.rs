use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Serialize;

pub mod fields;
pub mod links;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One issue found in one post. Findings are data, they never abort a run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    pub file: PathBuf,
    pub message: String,
}

impl Finding {
    pub fn error(file: &Path, message: impl Into<String>) -> Finding {
        Finding { severity: Severity::Error, file: file.to_path_buf(), message: message.into() }
    }

    pub fn warning(file: &Path, message: impl Into<String>) -> Finding {
        Finding { severity: Severity::Warning, file: file.to_path_buf(), message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.file.display(), self.severity, self.message)
    }
}
