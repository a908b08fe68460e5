//! Heading matcher: finds catalog labels at line starts

use crate::error::ExtractorError;
use regex::Regex;
use std::collections::HashMap;

/// One heading occurrence in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Catalog spelling of the label
    pub label: String,
    /// Byte offset of the first heading character
    pub start: usize,
    /// Byte offset just past the heading token
    pub end: usize,
}

/// Case-insensitive, line-anchored matcher over a heading catalog
///
/// The `regex` crate picks the first alternative that matches at a position,
/// so labels are sorted by descending length before the alternation is built.
/// That way "Studium Projekte" wins over "Studium" at the same offset,
/// whatever the catalog order.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    pattern: Regex,
    canonical: HashMap<String, String>,
}

impl HeadingMatcher {
    /// Compile a matcher for the given catalog
    pub fn new<S: AsRef<str>>(catalog: &[S]) -> Result<Self, ExtractorError> {
        if catalog.is_empty() {
            return Err(ExtractorError::Config(
                "heading catalog must not be empty".to_string(),
            ));
        }

        let mut labels: Vec<&str> = catalog.iter().map(AsRef::as_ref).collect();
        if labels.iter().any(|l| l.is_empty()) {
            return Err(ExtractorError::Config(
                "heading labels must not be empty".to_string(),
            ));
        }
        // Stable sort keeps catalog order among equally long labels
        labels.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let alternation = labels
            .iter()
            .map(|l| regex::escape(l))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?im)^({})\b", alternation))
            .map_err(|e| ExtractorError::Config(format!("invalid heading pattern: {}", e)))?;

        let canonical = catalog
            .iter()
            .map(|l| (l.as_ref().to_lowercase(), l.as_ref().to_string()))
            .collect();

        Ok(Self { pattern, canonical })
    }

    /// All non-overlapping heading occurrences in document order
    pub fn find_all(&self, text: &str) -> Vec<HeadingMatch> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| HeadingMatch {
                label: self.canonical_label(m.as_str()),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Map matched text (any case) back to its catalog spelling
    fn canonical_label(&self, matched: &str) -> String {
        self.canonical
            .get(&matched.to_lowercase())
            .cloned()
            .unwrap_or_else(|| matched.to_string())
    }
}
