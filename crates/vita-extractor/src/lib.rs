//! Vita Extractor
//!
//! Turns freeform consultant profile text into a [`CanonicalProfile`].
//!
//! # Overview
//!
//! Profile documents are loosely structured: a handful of known headings
//! ("Beruflicher Werdegang", "IT-Skills", ...) followed by free text, with
//! dated entries that may wrap over several lines. The extractor recovers that
//! structure with pattern matching only; nothing is learned or guessed.
//!
//! # Architecture
//!
//! ```text
//! Text → HeadingMatcher → Segmenter → {label: body}
//!      → EntryExtractor (record sections) → SchemaMapper → CanonicalProfile
//! ```
//!
//! Downstream consumers of the profile live here as well: the plain-text
//! renderer, the key-wise JSON merger and the chunker.
//!
//! # Key Features
//!
//! - **Longest-match headings**: "Studium Projekte" wins over "Studium"
//! - **Continuation folding**: wrapped lines join the open record
//! - **Configurable catalog**: headings, field table and date tokens come from
//!   [`ParserConfig`] (TOML)
//! - **Batch processing**: independent documents, optionally on a rayon pool
//!
//! # Example Usage
//!
//! ```no_run
//! use vita_extractor::{ParserConfig, ProfileParser};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = ProfileParser::new(ParserConfig::default())?;
//!
//! let profile = parser.parse_text(
//!     "Name\nMax Mustermann\n\nBeruflicher Werdegang\n01/2020 – 03/2021 Worked on X\nMore detail",
//! )?;
//!
//! println!("{}", serde_json::to_string_pretty(&profile)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod entries;
mod error;
mod heading;
mod mapper;
mod merge;
mod parser;
mod render;
mod segmenter;
mod types;

#[cfg(test)]
mod tests;

pub use chunking::{chunk_profile, ProfileChunker};
pub use config::{
    DateConfig, DuplicatePolicy, FieldTarget, MappingStrategy, ParserConfig, QualificationConfig,
    ScalarField, SectionField, SkillsConfig,
};
pub use entries::EntryExtractor;
pub use error::{ExtractorError, MapError, MergeError};
pub use heading::{HeadingMatch, HeadingMatcher};
pub use mapper::{parse_qualification, parse_skills, split_name, NameParts, Qualification, SchemaMapper};
pub use merge::merge_profiles;
pub use parser::{load_document, ProfileParser};
pub use render::render_profile;
pub use segmenter::{section_spans, segment, unassigned_prefix, SectionSpan, Sections};
pub use types::{Document, DocumentOutcome, ProfileChunk, SourceDocument};
pub use vita_domain::{CanonicalProfile, Record};
