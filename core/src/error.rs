use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed date: \"{0}\"")]
    MalformedDate(String),
    #[error("Malformed line: \"{0}\"")]
    MalformedLine(String),
}

/// A parse failure tied to its 1-based line number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    pub source: ParseError,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{} errors in {}", .errors.len(), .path.display())]
    Invalid {
        path: PathBuf,
        errors: Vec<LineError>,
    },
}

impl LoadError {
    /// One `<path>:<line>: <error>` diagnostic per failed line.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            LoadError::Invalid { path, errors } => errors
                .iter()
                .map(|e| Diagnostic { path, error: e }.to_string())
                .collect(),
        }
    }
}

struct Diagnostic<'a> {
    path: &'a PathBuf,
    error: &'a LineError,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.error.line, self.error.source)
    }
}
