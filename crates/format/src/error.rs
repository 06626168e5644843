use std::path::PathBuf;

use thiserror::Error;

/// `.ics_list` parse errors. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum IcListError {
    #[error("line {line}: missing or invalid pin count in `{text}`")]
    InvalidPinCount { line: usize, text: String },
    #[error("line {line}: pin count {count} must be even and non-zero")]
    OddPinCount { line: usize, count: usize },
    #[error("line {line}: pin lines must begin with '#'")]
    ExpectedPinLine { line: usize },
    #[error("line {line}: no pin number found in `{text}`")]
    MissingPinNumber { line: usize, text: String },
    #[error("line {line}: zero length label for pin {pin}")]
    EmptyLabel { line: usize, pin: usize },
    #[error("line {line}: IC {ic} has only {count} pins, pin {pin} is out of range")]
    PinOutOfRange {
        line: usize,
        ic: String,
        count: usize,
        pin: usize,
    },
    #[error("line {line}: pin {pin} of IC {ic} is already assigned")]
    PinAlreadyAssigned { line: usize, ic: String, pin: usize },
    #[error("IC {ic} ending at line {line}: pin(s) {missing:?} not assigned")]
    UnassignedPins {
        line: usize,
        ic: String,
        missing: Vec<usize>,
    },
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `.icprj` errors.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("line {line}: invalid IC index {index}, the list has {count} ICs")]
    InvalidIndex {
        line: usize,
        index: usize,
        count: usize,
    },
    #[error("line {line}: column {column} is not a board column")]
    InvalidColumn { line: usize, column: u32 },
    #[error("line {line}: orientation {code} is not 0 (up) or 1 (down)")]
    InvalidOrientation { line: usize, code: u32 },
    #[error("line {line}: row {row} is out of range")]
    InvalidRow { line: usize, row: i64 },
    #[error("could not open project file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors resolving the input file pair.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("the input file must have an extension: {0}")]
    MissingExtension(PathBuf),
    #[error("expected a .icprj project file or a .ics_list file, got {0}")]
    UnknownExtension(PathBuf),
}
