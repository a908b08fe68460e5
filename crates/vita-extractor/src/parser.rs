//! Pipeline driver: text → sections → records → profile

use crate::config::{FieldTarget, ParserConfig};
use crate::entries::EntryExtractor;
use crate::error::ExtractorError;
use crate::heading::HeadingMatcher;
use crate::mapper::SchemaMapper;
use crate::segmenter::{segment, Sections};
use crate::types::{Document, DocumentOutcome, SourceDocument};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use vita_domain::{CanonicalProfile, Record};

/// Parses profile documents into [`CanonicalProfile`]s
///
/// The heading and record-start patterns are compiled once in [`ProfileParser::new`]
/// and shared read-only by every document, so one parser can serve a whole
/// batch, also from several threads.
#[derive(Debug, Clone)]
pub struct ProfileParser {
    config: ParserConfig,
    headings: HeadingMatcher,
    entries: EntryExtractor,
}

impl ProfileParser {
    /// Validate the configuration and compile its patterns
    pub fn new(config: ParserConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let headings = HeadingMatcher::new(&config.catalog())?;
        let entries = EntryExtractor::new(&config.dates)?;

        Ok(Self {
            config,
            headings,
            entries,
        })
    }

    /// The configuration in use
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Segment a text into its sections without mapping them
    pub fn segment(&self, text: &str) -> Sections {
        segment(text, &self.headings, self.config.duplicate_policy)
    }

    /// Parse one document text
    pub fn parse_text(&self, text: &str) -> Result<CanonicalProfile, ExtractorError> {
        let sections = self.segment(text);
        debug!("Found {} sections", sections.len());
        if sections.is_empty() {
            warn!("No known heading found in document ({} bytes)", text.len());
        }

        let mut records: HashMap<String, Vec<Record>> = HashMap::new();
        for (label, body) in sections.iter() {
            if let Some(FieldTarget::Records(field)) = self.config.target_of(label) {
                let extracted = body.map(|b| self.entries.extract(b)).unwrap_or_default();
                debug!("Section '{}' → {}: {} records", label, field, extracted.len());
                records.insert(label.to_string(), extracted);
            }
        }

        let profile = SchemaMapper::new(&self.config).map(&sections, &records)?;
        Ok(profile)
    }

    /// Parse a document given as several text parts
    pub fn parse_parts<S: AsRef<str>>(&self, parts: &[S]) -> Result<CanonicalProfile, ExtractorError> {
        let text = parts
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n\n");
        self.parse_text(&text)
    }

    /// Parse one document of a batch
    pub fn parse_document(&self, document: &Document) -> DocumentOutcome {
        let result = self.parse_parts(&document.parts);
        log_outcome(&document.id, &result);
        DocumentOutcome {
            id: document.id.clone(),
            result,
        }
    }

    /// Parse documents independently; a failing document never stops the rest
    ///
    /// Outcomes come back in input order, also when `parallel` is set.
    pub fn parse_batch(&self, documents: &[Document]) -> Vec<DocumentOutcome> {
        info!(
            "Parsing batch of {} documents (parallel: {})",
            documents.len(),
            self.config.parallel
        );
        if self.config.parallel {
            documents
                .par_iter()
                .map(|doc| self.parse_document(doc))
                .collect()
        } else {
            documents.iter().map(|doc| self.parse_document(doc)).collect()
        }
    }

    /// Load and parse documents from disk
    ///
    /// Read errors are reported for the affected document only.
    pub fn parse_sources(&self, sources: &[SourceDocument]) -> Vec<DocumentOutcome> {
        info!(
            "Parsing {} source documents (parallel: {})",
            sources.len(),
            self.config.parallel
        );
        let run = |source: &SourceDocument| match load_document(source) {
            Ok(document) => self.parse_document(&document),
            Err(e) => {
                log_outcome(&source.id, &Err::<(), _>(&e));
                DocumentOutcome {
                    id: source.id.clone(),
                    result: Err(e),
                }
            }
        };
        if self.config.parallel {
            sources.par_iter().map(run).collect()
        } else {
            sources.iter().map(run).collect()
        }
    }
}

fn log_outcome<T, E: std::fmt::Display>(id: &str, result: &Result<T, E>) {
    match result {
        Ok(_) => debug!("Parsed document '{}'", id),
        Err(e) => warn!("Document '{}' failed: {}", id, e),
    }
}

/// Read the files of a source document and build its text parts
///
/// Files must be UTF-8; a leading byte order mark is removed.
pub fn load_document(source: &SourceDocument) -> Result<Document, ExtractorError> {
    if source.paths.is_empty() {
        return Err(ExtractorError::NoSources(source.id.clone()));
    }

    let mut parts = Vec::with_capacity(source.paths.len());
    for path in &source.paths {
        let bytes = std::fs::read(path).map_err(|e| ExtractorError::Input {
            path: path.clone(),
            source: e,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| ExtractorError::Encoding {
            path: path.clone(),
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;
        let text = match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        };
        debug!("Loaded {} ({} bytes)", path.display(), text.len());
        parts.push(text);
    }

    Ok(Document::new(source.id.clone(), parts))
}
