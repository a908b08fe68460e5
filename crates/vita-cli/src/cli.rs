//! CLI command definitions and argument parsing.

use crate::config::{OutputFormat, Preset};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vita CLI - Turn profile documents into structured profiles.
#[derive(Debug, Parser)]
#[command(name = "vita")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VITA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in heading catalog
    #[arg(short, long, value_enum, global = true)]
    pub preset: Option<Preset>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format
    Table,
    /// JSON format (default)
    Json,
    /// Quiet format (names and paths only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse one document made of one or more files
    Parse(ParseArgs),

    /// Parse every file as its own document
    Batch(BatchArgs),

    /// Merge two profile JSON files
    Merge(MergeArgs),

    /// Render a profile JSON file back to text
    Render(RenderArgs),

    /// Split a profile JSON file into text chunks
    Chunk(ChunkArgs),
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Source files, concatenated in the given order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write the profile JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Source files, one document each
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write one `<file stem>.json` per document into this directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Parse documents on a worker pool
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the merge command.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// Base profile JSON
    pub base: PathBuf,

    /// Profile JSON merged into the base
    pub extra: PathBuf,

    /// Write the merged JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Profile JSON
    pub profile: PathBuf,

    /// Write the text to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the chunk command.
#[derive(Debug, Parser)]
pub struct ChunkArgs {
    /// Profile JSON
    pub profile: PathBuf,

    /// Write the chunks JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_batch_flags() {
        let cli = Cli::try_parse_from([
            "vita", "-vv", "--format", "table", "batch", "a.txt", "b.txt", "--out-dir", "out",
            "--parallel",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Table)));
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.files.len(), 2);
                assert_eq!(args.out_dir, Some(PathBuf::from("out")));
                assert!(args.parallel);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_requires_files() {
        assert!(Cli::try_parse_from(["vita", "parse"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vita", "render", "p.json", "--preset", "english", "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.preset, Some(Preset::English));
        assert!(cli.no_color);
    }
}
