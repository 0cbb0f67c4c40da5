use clap::Parser;
use kover::cli::query::Query;
use kover::cli::{Cli, Commands};
use kover::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = cli.input.as_deref();

    match cli.command {
        Commands::BoundingBox => kover::cli::query::run(Query::BoundingBox, input, cli.format)?,
        Commands::Describe => kover::cli::query::run(Query::Describe, input, cli.format)?,
        Commands::Summarize => kover::cli::query::run(Query::Summarize, input, cli.format)?,
        Commands::Validate => kover::cli::validate::run(input, &Printer::new())?,
        Commands::Completions(args) => kover::cli::completions::run(args)?,
    }

    Ok(())
}

/// Log to stderr. `KOVER_LOG` takes precedence over `-v` flags.
fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "kover=warn",
        1 => "kover=info",
        2 => "kover=debug",
        _ => "kover=trace",
    };

    let filter =
        EnvFilter::try_from_env("KOVER_LOG").unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
