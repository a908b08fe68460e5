//! Error types for the extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a document into a profile
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A source file could not be read
    #[error("Cannot read {}: {source}", path.display())]
    Input {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid UTF-8
    #[error("{} is not valid UTF-8 (invalid byte at offset {valid_up_to})", path.display())]
    Encoding {
        /// File that failed
        path: PathBuf,
        /// Length of the valid prefix
        valid_up_to: usize,
    },

    /// A document was submitted without any source file
    #[error("Document '{0}' has no source files")]
    NoSources(String),

    /// Schema mapping failed; no profile is produced for the document
    #[error("Mapping failed: {0}")]
    Mapping(#[from] MapError),

    /// Profile merge failed
    #[error("Merge failed: {0}")]
    Merge(#[from] MergeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures of the specialized schema mapping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A `Category: skills` line has nothing before the colon
    #[error("skill category name is empty in line '{line}'")]
    EmptySkillCategory {
        /// Offending line
        line: String,
    },

    /// A skills body mixes `Category: skills` lines with bare lines
    #[error("skills line '{line}' has no category while other lines do")]
    MixedSkillsLayout {
        /// Offending line
        line: String,
    },
}

/// Failures of the key-wise profile merge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// One side is not a JSON object
    #[error("{side} profile is not a JSON object")]
    NotAnObject {
        /// "base" or "extra"
        side: &'static str,
    },
}
