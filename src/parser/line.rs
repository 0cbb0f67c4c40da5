//! Scene line parser.
//!
//! Parses one interior line of a scene into a typed `Record`.
//!
//! # Syntax
//!
//! ```text
//! building ID X Y W H
//! antenna ID X Y R
//! ```
//!
//! Tokens are separated by runs of spaces or tabs; leading and trailing
//! blanks are ignored.

use crate::error::{KoverError, Result};
use crate::types::{Antenna, Building, ElementKind};

use super::lexical::{is_valid_identifier, is_valid_integer, is_valid_positive_integer};

/// A successfully parsed scene line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Building(Building),
    Antenna(Antenna),
}

impl Record {
    /// Kind of element this record describes.
    pub fn kind(&self) -> ElementKind {
        match self {
            Record::Building(_) => ElementKind::Building,
            Record::Antenna(_) => ElementKind::Antenna,
        }
    }

    /// Identifier of the element.
    pub fn id(&self) -> &str {
        match self {
            Record::Building(b) => &b.id,
            Record::Antenna(a) => &a.id,
        }
    }
}

/// Split a line on runs of blank characters.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split([' ', '\t']).filter(|token| !token.is_empty())
}

/// Parse one interior scene line.
///
/// `line_num` is the 1-based position of the line in the stream and is
/// carried by every error. Checks run in order (argument count,
/// identifier, x, y, then the positive sizes) and stop at the first failure.
pub fn parse_line(line: &str, line_num: usize) -> Result<Record> {
    let mut tokens = tokenize(line);

    let kind = tokens
        .next()
        .and_then(ElementKind::from_keyword)
        .ok_or(KoverError::UnrecognizedLine { line: line_num })?;

    let args: Vec<&str> = tokens.collect();
    if args.len() != kind.arity() {
        return Err(KoverError::MalformedLine {
            kind,
            line: line_num,
        });
    }

    let id = parse_identifier(args[0], line_num)?;
    let x = parse_integer(args[1], line_num)?;
    let y = parse_integer(args[2], line_num)?;

    let record = match kind {
        ElementKind::Building => {
            let w = parse_positive_integer(args[3], line_num)?;
            let h = parse_positive_integer(args[4], line_num)?;
            Record::Building(Building::new(id, x, y, w, h))
        }
        ElementKind::Antenna => {
            let r = parse_positive_integer(args[3], line_num)?;
            Record::Antenna(Antenna::new(id, x, y, r))
        }
    };

    Ok(record)
}

fn parse_identifier(token: &str, line: usize) -> Result<String> {
    if !is_valid_identifier(token) {
        return Err(KoverError::InvalidIdentifier {
            token: token.to_string(),
            line,
        });
    }
    Ok(token.to_string())
}

// Tokens that are well-formed but outside the i32 range are reported
// like any other invalid integer.
fn parse_integer(token: &str, line: usize) -> Result<i32> {
    token
        .parse()
        .ok()
        .filter(|_| is_valid_integer(token))
        .ok_or_else(|| KoverError::InvalidInteger {
            token: token.to_string(),
            line,
        })
}

fn parse_positive_integer(token: &str, line: usize) -> Result<i32> {
    token
        .parse()
        .ok()
        .filter(|_| is_valid_positive_integer(token))
        .ok_or_else(|| KoverError::InvalidPositiveInteger {
            token: token.to_string(),
            line,
        })
}
