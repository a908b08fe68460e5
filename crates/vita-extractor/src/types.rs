//! Input and output types of the parser driver

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vita_domain::CanonicalProfile;

/// One subject's source text, possibly spread over several parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier used in logs and batch reports
    pub id: String,

    /// Text parts in order, joined with a blank line before parsing
    pub parts: Vec<String>,
}

impl Document {
    /// Create a document from its parts
    pub fn new(id: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            id: id.into(),
            parts,
        }
    }

    /// Create a single-part document
    pub fn from_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, vec![text.into()])
    }

    /// The concatenated text the pipeline runs on
    pub fn text(&self) -> String {
        self.parts.join("\n\n")
    }
}

/// Files that make up one document on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Identifier used in logs and batch reports
    pub id: String,

    /// Source files in concatenation order
    pub paths: Vec<PathBuf>,
}

impl SourceDocument {
    /// Create a source document
    pub fn new(id: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        Self {
            id: id.into(),
            paths,
        }
    }
}

/// Result of parsing one document of a batch
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Document identifier
    pub id: String,

    /// The profile, or the error that stopped this document
    pub result: Result<CanonicalProfile, ExtractorError>,
}

impl DocumentOutcome {
    /// Whether a profile was produced
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Flat text chunk derived from a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileChunk {
    /// Sequential identifier ("Chunk 1", "Chunk 2", ...)
    pub id: String,

    /// Profile field the chunk came from
    #[serde(rename = "type")]
    pub kind: String,

    /// Skill category name for skill chunks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Chunk text
    pub content: String,

    /// Full name of the profile, or "unknown"
    pub source: String,
}
