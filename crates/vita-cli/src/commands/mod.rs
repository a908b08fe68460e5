//! Command implementations.

pub mod batch;
pub mod chunk;
pub mod merge;
pub mod parse;
pub mod render;

pub use self::batch::execute_batch;
pub use self::chunk::execute_chunk;
pub use self::merge::execute_merge;
pub use self::parse::execute_parse;
pub use self::render::execute_render;

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use vita_domain::CanonicalProfile;

/// Document id derived from a source path: the file stem.
pub(crate) fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a profile JSON file.
pub(crate) fn read_profile(path: &Path) -> Result<CanonicalProfile> {
    let value = read_json(path)?;
    Ok(serde_json::from_value(value)?)
}

/// Read any JSON file.
pub(crate) fn read_json(path: &Path) -> Result<serde_json::Value> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write text to a file, creating parent directories.
pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    debug!("Wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}
