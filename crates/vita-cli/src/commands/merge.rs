//! Merge command implementation.

use super::{read_json, write_text};
use crate::cli::MergeArgs;
use crate::error::Result;
use crate::output::Formatter;
use vita_extractor::merge_profiles;

/// Execute the merge command.
pub fn execute_merge(args: MergeArgs, formatter: &Formatter) -> Result<()> {
    let base = read_json(&args.base)?;
    let extra = read_json(&args.extra)?;
    let merged = serde_json::to_string_pretty(&merge_profiles(base, extra)?)?;

    match args.output {
        Some(path) => {
            write_text(&path, &merged)?;
            eprintln!(
                "{}",
                formatter.success(&format!("Merged profile written to {}", path.display()))
            );
        }
        None => println!("{}", merged),
    }
    Ok(())
}
