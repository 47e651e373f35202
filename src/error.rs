//! Error types for the containers and the log collaborators.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Precondition violations on a [`Sequence`](crate::sequence::Sequence).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Errors raised while reading atmosphere logs from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file listing the input logs could not be opened.
    #[error("unable to open source list {}: {source}", path.display())]
    SourceList { path: PathBuf, source: io::Error },
    #[error("unable to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    /// The header lacks one of `WAST`, `S`, `T` or `SR`.
    #[error("column missing in data file {}", path.display())]
    MissingColumns { path: PathBuf },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("samples differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("data directory {} does not exist", .0.display())]
    MissingDataDir(PathBuf),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unable to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Failures of the interactive session itself. Report problems that the user
/// can recover from are printed and the session continues.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Stats(#[from] StatsError),
}
