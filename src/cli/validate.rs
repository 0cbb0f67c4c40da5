//! Validate command implementation.

use std::path::Path;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::scene::Scene;

use super::query::load_scene;

pub fn run(input: Option<&Path>, printer: &Printer) -> Result<()> {
    let scene = load_scene(input)?;
    let source = input.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    printer.success("Validated", &format!("{} ({})", source, counts(&scene)));
    Ok(())
}

fn counts(scene: &Scene) -> String {
    format!(
        "{}, {}",
        plural(scene.buildings().len(), "building", "buildings"),
        plural(scene.antennas().len(), "antenna", "antennas")
    )
}
