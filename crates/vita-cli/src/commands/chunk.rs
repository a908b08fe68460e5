//! Chunk command implementation.

use super::{read_profile, write_text};
use crate::cli::ChunkArgs;
use crate::error::Result;
use crate::output::Formatter;
use vita_extractor::{ParserConfig, ProfileChunker};

/// Execute the chunk command.
pub fn execute_chunk(args: ChunkArgs, config: &ParserConfig, formatter: &Formatter) -> Result<()> {
    let profile = read_profile(&args.profile)?;
    let chunks = ProfileChunker::from_config(config).chunk(&profile);

    match args.output {
        Some(path) => {
            write_text(&path, &serde_json::to_string_pretty(&chunks)?)?;
            eprintln!(
                "{}",
                formatter.success(&format!("{} chunk(s) written to {}", chunks.len(), path.display()))
            );
        }
        None => println!("{}", formatter.format_chunks(&chunks)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;

    #[test]
    fn test_chunk_file() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("p.json");
        let output = dir.path().join("chunks.json");
        fs::write(
            &profile,
            r#"{"fullName": "Max", "professionalSummary": "Entwickler", "projects": [{"startDate": "2020", "description": "Shop"}]}"#,
        )
        .unwrap();

        let args = ChunkArgs {
            profile,
            output: Some(output.clone()),
        };
        execute_chunk(args, &ParserConfig::default(), &Formatter::new(OutputFormat::Json, false))
            .unwrap();

        let chunks: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(chunks[0]["id"], "Chunk 1");
        assert_eq!(chunks[0]["type"], "projects");
        assert_eq!(chunks[0]["content"], "2020 - N/A - Shop");
        assert_eq!(chunks[1]["type"], "professionalSummary");
        assert_eq!(chunks[1]["source"], "Max");
    }

    #[test]
    fn test_chunk_merged_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("merged.json");
        let output = dir.path().join("chunks.json");
        fs::write(
            &profile,
            r#"{"fullName": "Max", "email": "max@example.org", "preferredWorkingAreas": null,
                "additionalInfo": {"remote": true},
                "certificates": [{"name": "CKA", "date": "2022", "skills": []}]}"#,
        )
        .unwrap();

        let args = ChunkArgs {
            profile,
            output: Some(output.clone()),
        };
        execute_chunk(args, &ParserConfig::default(), &Formatter::new(OutputFormat::Json, false))
            .unwrap();

        let chunks: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(chunks[0]["type"], "certificates");
        assert_eq!(chunks[0]["content"], "CKA (2022)");
        assert_eq!(chunks.as_array().unwrap().len(), 1);
    }
}
