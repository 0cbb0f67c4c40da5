//! Query command implementation.
//!
//! Loads a scene from stdin or a file, runs one query and prints the
//! result on stdout.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{KoverError, Result};
use crate::parser::read_scene;
use crate::query::{bounding_box, describe, summarize};
use crate::scene::Scene;

use super::Format;

/// The read-only queries a scene can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    BoundingBox,
    Describe,
    Summarize,
}

impl Query {
    pub fn name(self) -> &'static str {
        match self {
            Query::BoundingBox => "bounding-box",
            Query::Describe => "describe",
            Query::Summarize => "summarize",
        }
    }
}

pub fn run(query: Query, input: Option<&Path>, format: Format) -> Result<()> {
    let scene = load_scene(input)?;
    info!(query = query.name(), elements = scene.len(), "running query");
    println!("{}", render(query, &scene, format)?);
    Ok(())
}

/// Read a scene from `input`, or from stdin when no path is given.
pub fn load_scene(input: Option<&Path>) -> Result<Scene> {
    match input {
        Some(path) => {
            let file = File::open(path).map_err(|e| KoverError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to open scene: {}", e),
            })?;
            info!(path = %path.display(), "reading scene");
            read_scene(BufReader::new(file))
        }
        None => {
            info!("reading scene from stdin");
            read_scene(io::stdin().lock())
        }
    }
}

/// Render the result of `query` in the requested format.
pub fn render(query: Query, scene: &Scene, format: Format) -> Result<String> {
    match (query, format) {
        (Query::BoundingBox, Format::Text) => Ok(bounding_box(scene).to_string()),
        (Query::Describe, Format::Text) => Ok(describe(scene).to_string()),
        (Query::Summarize, Format::Text) => Ok(summarize(scene).to_string()),
        (Query::BoundingBox, Format::Json) => to_json(&bounding_box(scene)),
        (Query::Describe, Format::Json) => to_json(&describe(scene)),
        (Query::Summarize, Format::Json) => to_json(&summarize(scene)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| KoverError::Output {
        message: format!("Failed to serialize result: {}", e),
    })
}
