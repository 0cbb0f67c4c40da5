//! Parser modules for kover scene streams.
//!
//! Parsing happens in three layers:
//! - `lexical` checks single tokens (identifiers, integers)
//! - `line` turns one interior line into a typed `Record`
//! - `reader` drives the framing protocol and feeds records to a
//!   `SceneBuilder`
//!
//! # Usage
//!
//! ```ignore
//! use kover::parser::read_scene;
//!
//! let stdin = std::io::stdin();
//! let scene = read_scene(stdin.lock())?;
//!
//! println!("{} elements", scene.len());
//! ```

pub mod lexical;
pub mod line;
pub mod reader;

// Re-export main entry points
pub use lexical::{is_valid_identifier, is_valid_integer, is_valid_positive_integer};
pub use line::{parse_line, Record};
pub use reader::{parse_scene, read_scene, BEGIN_MARKER, END_MARKER};
