//! Render command implementation.

use super::{read_profile, write_text};
use crate::cli::RenderArgs;
use crate::error::Result;
use crate::output::Formatter;
use vita_extractor::{render_profile, ParserConfig};

/// Execute the render command.
pub fn execute_render(args: RenderArgs, config: &ParserConfig, formatter: &Formatter) -> Result<()> {
    let profile = read_profile(&args.profile)?;
    let text = render_profile(&profile, config);

    match args.output {
        Some(path) => {
            write_text(&path, &text)?;
            eprintln!(
                "{}",
                formatter.success(&format!("Text written to {}", path.display()))
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}
