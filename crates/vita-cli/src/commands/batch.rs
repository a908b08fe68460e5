//! Batch command implementation.

use super::{document_id, write_text};
use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tracing::info;
use vita_extractor::{ParserConfig, ProfileParser, SourceDocument};

/// Execute the batch command.
///
/// Every file is parsed on its own. Failures are reported per document and
/// turned into [`CliError::BatchFailed`] once all documents are done.
pub fn execute_batch(args: BatchArgs, mut config: ParserConfig, formatter: &Formatter) -> Result<()> {
    if args.parallel {
        config.parallel = true;
    }
    let parser = ProfileParser::new(config)?;

    let sources: Vec<SourceDocument> = args
        .files
        .iter()
        .map(|path| SourceDocument::new(document_id(path), vec![path.clone()]))
        .collect();
    let outcomes = parser.parse_sources(&sources);

    if let Some(dir) = &args.out_dir {
        let mut written = 0;
        for outcome in &outcomes {
            let Ok(profile) = &outcome.result else { continue };
            let path = dir.join(format!("{}.json", outcome.id));
            write_text(&path, &serde_json::to_string_pretty(profile)?)?;
            written += 1;
        }
        info!("Wrote {} profile(s) to {}", written, dir.display());
    }

    println!("{}", formatter.format_outcomes(&outcomes)?);

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        return Err(CliError::BatchFailed {
            failed,
            total: outcomes.len(),
        });
    }
    eprintln!(
        "{}",
        formatter.success(&format!("Parsed {} document(s)", outcomes.len()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;

    #[test]
    fn test_batch_writes_profiles_and_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("ada.txt");
        let broken = dir.path().join("broken.txt");
        fs::write(&good, "Name\nAda Lovelace\n").unwrap();
        fs::write(&broken, "IT-Skills\nBackend: Go\nlose\n").unwrap();
        let out_dir = dir.path().join("profiles");

        let args = BatchArgs {
            files: vec![good, broken, dir.path().join("missing.txt")],
            out_dir: Some(out_dir.clone()),
            parallel: true,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let err = execute_batch(args, ParserConfig::default(), &formatter).unwrap_err();

        assert!(matches!(err, CliError::BatchFailed { failed: 2, total: 3 }));
        assert!(out_dir.join("ada.json").exists());
        assert!(!out_dir.join("broken.json").exists());
    }

    #[test]
    fn test_batch_all_ok() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("alan.txt");
        fs::write(&file, "Name\nAlan Turing\n").unwrap();

        let args = BatchArgs {
            files: vec![file],
            out_dir: None,
            parallel: false,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_batch(args, ParserConfig::default(), &formatter).is_ok());
    }
}
