//! kover - Antenna scene validator
//!
//! A library for reading textual scenes of buildings and antennas,
//! validating them, and answering bounding-box, summary and description
//! queries.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod query;
pub mod scene;
pub mod types;

pub use error::{KoverError, Result};
pub use parser::{parse_line, parse_scene, read_scene, Record};
pub use query::{bounding_box, describe, summarize, BoundingBox, BoundingBoxReport, Description, Summary};
pub use scene::{Scene, SceneBuilder};
pub use types::{Antenna, Building, ElementKind, Extent};
