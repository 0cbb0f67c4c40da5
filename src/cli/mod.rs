pub mod completions;
pub mod query;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Scene syntax reference shown by `kover help`.
const SCENE_SYNTAX: &str = "\
A scene is a text stream that must satisfy the following syntax:

  1. The first line must be exactly 'begin scene'
  2. The last line must be exactly 'end scene'
  3. Any line between the first and last line must either be a building line
     or an antenna line
  4. A building line has the form 'building ID X Y W H' (with any number of
     blank characters before or after), where
       ID is the building identifier
       X is the x-coordinate of the building
       Y is the y-coordinate of the building
       W is the half-width of the building
       H is the half-height of the building
  5. An antenna line has the form 'antenna ID X Y R' (with any number of
     blank characters before or after), where
       ID is the antenna identifier
       X is the x-coordinate of the antenna
       Y is the y-coordinate of the antenna
       R is the radius scope of the antenna";

/// kover - Handles positioning of communication antennas by reading a scene
#[derive(Parser, Debug)]
#[command(name = "kover")]
#[command(version, about, long_about = None, after_help = SCENE_SYNTAX)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read the scene from a file instead of stdin
    #[arg(long, short, global = true, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format for query results
    #[arg(long, value_enum, global = true, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Returns a bounding box of the loaded scene
    BoundingBox,

    /// Describes the loaded scene in details
    Describe,

    /// Summarizes the loaded scene
    Summarize,

    /// Checks the scene without printing a query result
    Validate,

    /// Print a shell completion script
    Completions(completions::CompletionsArgs),
}

/// How query results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
