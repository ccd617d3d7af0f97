use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can stop a conversion. Unrecognized gSpan record kinds are
/// skipped by the segmenter and never show up here.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A `t`, `v`, or `e` line is missing a field or has a field that isn't a
    /// non-negative integer where one is required
    #[error("malformed record on line {line}: {problem} in {content:?}")]
    Malformed {
        line: usize,
        problem: Problem,
        content: String,
    },

    /// A vertex label has no entry in the atom table
    #[error("unknown atom index {index} on line {line}")]
    UnknownAtom { index: usize, line: usize },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// What exactly is wrong with a malformed record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    /// fewer tokens than the record kind needs. `field` is the 0-based token
    /// index that was missing
    Missing { field: usize, name: &'static str },
    Invalid { field: usize, name: &'static str },
    /// the value parsed but has no successor to shift to
    Overflow { field: usize, name: &'static str },
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Missing { field, name } => {
                write!(f, "missing {name} (token {})", field + 1)
            }
            Problem::Invalid { field, name } => write!(
                f,
                "{name} (token {}) is not a non-negative integer",
                field + 1
            ),
            Problem::Overflow { field, name } => {
                write!(f, "{name} (token {}) is too large to shift", field + 1)
            }
        }
    }
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
