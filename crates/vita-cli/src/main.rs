//! Vita CLI - Command-line interface for profile extraction.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vita_cli::commands;
use vita_cli::{Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

fn run(cli: Cli) -> vita_cli::Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let parser_config = config.parser_config(cli.preset)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, parser_config, &formatter),
        Command::Batch(args) => commands::execute_batch(args, parser_config, &formatter),
        Command::Merge(args) => commands::execute_merge(args, &formatter),
        Command::Render(args) => commands::execute_render(args, &parser_config, &formatter),
        Command::Chunk(args) => commands::execute_chunk(args, &parser_config, &formatter),
    }
}
