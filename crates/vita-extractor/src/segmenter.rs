//! Section segmenter: slices a document into `label → body` spans

use crate::config::DuplicatePolicy;
use crate::heading::HeadingMatcher;
use tracing::debug;

/// The text range attributed to one heading occurrence
///
/// `start..heading_end` is the heading token, `heading_end..end` the raw body.
/// Spans of one document are contiguous: each `end` is the next `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Catalog spelling of the heading
    pub label: String,
    /// Offset of the heading token
    pub start: usize,
    /// Offset just past the heading token
    pub heading_end: usize,
    /// Offset of the next heading, or the end of the text
    pub end: usize,
}

impl SectionSpan {
    /// The whole span, heading included
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }

    /// The untrimmed body after the heading token
    pub fn raw_body<'t>(&self, text: &'t str) -> &'t str {
        &text[self.heading_end..self.end]
    }

    /// The trimmed body, `None` when only whitespace follows the heading
    ///
    /// A colon directly after the heading ("Profil: ...") is not part of the body.
    pub fn body<'t>(&self, text: &'t str) -> Option<&'t str> {
        let raw = self.raw_body(text);
        let body = raw.strip_prefix(':').unwrap_or(raw).trim();
        if body.is_empty() {
            None
        } else {
            Some(body)
        }
    }
}

/// Compute the section spans of a document
pub fn section_spans(text: &str, matcher: &HeadingMatcher) -> Vec<SectionSpan> {
    let headings = matcher.find_all(text);
    let mut spans = Vec::with_capacity(headings.len());
    for (idx, heading) in headings.iter().enumerate() {
        let end = headings
            .get(idx + 1)
            .map(|next| next.start)
            .unwrap_or(text.len());
        spans.push(SectionSpan {
            label: heading.label.clone(),
            start: heading.start,
            heading_end: heading.end,
            end,
        });
    }
    spans
}

/// Text before the first heading; the whole text when there is none
pub fn unassigned_prefix<'t>(text: &'t str, spans: &[SectionSpan]) -> &'t str {
    match spans.first() {
        Some(first) => &text[..first.start],
        None => text,
    }
}

/// Ordered `label → body` mapping of one document
///
/// Every recognised label is present; empty sections hold `None`. A label
/// keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    entries: Vec<(String, Option<String>)>,
}

impl Sections {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a body for a label according to the duplicate policy
    pub fn insert(&mut self, label: &str, body: Option<&str>, policy: DuplicatePolicy) {
        let Some(idx) = self.entries.iter().position(|(l, _)| l == label) else {
            self.entries
                .push((label.to_string(), body.map(str::to_string)));
            return;
        };
        let slot = &mut self.entries[idx];

        match policy {
            DuplicatePolicy::LastWins => {
                debug!("Duplicate heading '{}', last occurrence wins", label);
                slot.1 = body.map(str::to_string);
            }
            DuplicatePolicy::Concatenate => {
                debug!("Duplicate heading '{}', concatenating bodies", label);
                slot.1 = match (slot.1.take(), body) {
                    (Some(previous), Some(next)) => Some(format!("{}\n\n{}", previous, next)),
                    (previous, None) => previous,
                    (None, Some(next)) => Some(next.to_string()),
                };
            }
        }
    }

    /// Whether the label was recognised in the document
    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| l == label)
    }

    /// Body of a label; `None` when absent or empty
    pub fn body(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .and_then(|(_, body)| body.as_deref())
    }

    /// Labels in first-occurrence order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// `(label, body)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(l, b)| (l.as_str(), b.as_deref()))
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no heading was recognised
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Segment a document into its sections
pub fn segment(text: &str, matcher: &HeadingMatcher, policy: DuplicatePolicy) -> Sections {
    let spans = section_spans(text, matcher);
    let mut sections = Sections::new();
    for span in &spans {
        sections.insert(&span.label, span.body(text), policy);
    }
    sections
}
