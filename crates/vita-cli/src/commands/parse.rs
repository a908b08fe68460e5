//! Parse command implementation.

use super::{document_id, write_text};
use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tracing::info;
use vita_extractor::{load_document, ParserConfig, ProfileParser, SourceDocument};

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: ParserConfig, formatter: &Formatter) -> Result<()> {
    let first = args
        .files
        .first()
        .ok_or_else(|| CliError::InvalidInput("No input files".to_string()))?;
    let id = document_id(first);

    let parser = ProfileParser::new(config)?;
    let document = load_document(&SourceDocument::new(id.clone(), args.files.clone()))?;
    info!("Parsing '{}' from {} file(s)", id, args.files.len());
    let profile = parser.parse_parts(&document.parts)?;

    match args.output {
        Some(path) => {
            write_text(&path, &serde_json::to_string_pretty(&profile)?)?;
            eprintln!(
                "{}",
                formatter.success(&format!("Profile written to {}", path.display()))
            );
        }
        None => println!("{}", formatter.format_profile(&profile)?),
    }

    Ok(())
}
