use miette::Diagnostic;
use thiserror::Error;

use crate::types::ElementKind;

/// Main error type for kover operations.
///
/// Every variant is terminal for the current read: the reader stops at the
/// first one and never tries to collect more.
#[derive(Error, Diagnostic, Debug)]
pub enum KoverError {
    #[error("IO error: {0}")]
    #[diagnostic(code(kover::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(kover::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(kover::output))]
    Output { message: String },

    #[error("first line must be exactly 'begin scene'")]
    #[diagnostic(code(kover::read::missing_start))]
    MissingStartMarker,

    #[error("last line must be exactly 'end scene'")]
    #[diagnostic(
        code(kover::read::missing_end),
        help("terminate the scene with a line containing exactly 'end scene'")
    )]
    MissingEndMarker,

    #[error("unrecognized line (line #{line})")]
    #[diagnostic(
        code(kover::parse::unrecognized_line),
        help("interior lines must start with 'building' or 'antenna'")
    )]
    UnrecognizedLine { line: usize },

    #[error("{kind} line has wrong number of arguments (line #{line})")]
    #[diagnostic(
        code(kover::parse::malformed_line),
        help("expected 'building ID X Y W H' or 'antenna ID X Y R'")
    )]
    MalformedLine { kind: ElementKind, line: usize },

    #[error("invalid identifier \"{token}\" (line #{line})")]
    #[diagnostic(
        code(kover::parse::invalid_identifier),
        help("identifiers start with a letter or '_' followed by letters, digits or '_'")
    )]
    InvalidIdentifier { token: String, line: usize },

    #[error("invalid integer \"{token}\" (line #{line})")]
    #[diagnostic(code(kover::parse::invalid_integer))]
    InvalidInteger { token: String, line: usize },

    #[error("invalid positive integer \"{token}\" (line #{line})")]
    #[diagnostic(
        code(kover::parse::invalid_positive_integer),
        help("dimensions and ranges must be at least 1, written without leading zeros")
    )]
    InvalidPositiveInteger { token: String, line: usize },

    #[error("{kind} identifier {id} is non unique")]
    #[diagnostic(code(kover::scene::duplicate_id))]
    DuplicateId { kind: ElementKind, id: String },

    #[error("buildings {first} and {second} are overlapping")]
    #[diagnostic(code(kover::scene::overlap))]
    Overlap { first: String, second: String },

    #[error("antennas {first} and {second} have the same position")]
    #[diagnostic(code(kover::scene::same_position))]
    SamePosition { first: String, second: String },
}

impl KoverError {
    /// Line number the error points at, when it comes from a single line.
    pub fn line(&self) -> Option<usize> {
        match self {
            KoverError::UnrecognizedLine { line }
            | KoverError::MalformedLine { line, .. }
            | KoverError::InvalidIdentifier { line, .. }
            | KoverError::InvalidInteger { line, .. }
            | KoverError::InvalidPositiveInteger { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KoverError>;
