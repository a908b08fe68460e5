//! Entry extractor: dated records with continuation-line folding

use crate::config::DateConfig;
use crate::error::ExtractorError;
use regex::Regex;
use tracing::trace;
use vita_domain::Record;

/// Turns a section body into an ordered list of [`Record`]s
///
/// A line opens a new record when it starts with an optional qualifier, a
/// `MM/YYYY` or `YYYY` date, an optional `- end` part and free text. Any other
/// line is folded into the open record's description, or dropped when no record
/// is open yet.
///
/// A plain line that happens to start with four digits also opens a record.
#[derive(Debug, Clone)]
pub struct EntryExtractor {
    pattern: Regex,
    ongoing: Vec<String>,
}

impl EntryExtractor {
    /// Compile the record-start pattern for the given date tokens
    pub fn new(dates: &DateConfig) -> Result<Self, ExtractorError> {
        let qualifier = if dates.qualifiers.is_empty() {
            String::new()
        } else {
            format!(r"(?:({})\s+)?", alternation(&dates.qualifiers))
        };
        let end_token = if dates.ongoing_markers.is_empty() {
            r"([0-9]{2}/[0-9]{4}|[0-9]{4})".to_string()
        } else {
            format!(
                r"([0-9]{{2}}/[0-9]{{4}}|[0-9]{{4}}|(?:{})\b)",
                alternation(&dates.ongoing_markers)
            )
        };
        let source = format!(
            r"(?i)^{}([0-9]{{2}}/[0-9]{{4}}|[0-9]{{4}})(?:\s*[-–—]\s*{})?\s*(.*)$",
            qualifier, end_token
        );
        let pattern = Regex::new(&source)
            .map_err(|e| ExtractorError::Config(format!("invalid date pattern: {}", e)))?;

        Ok(Self {
            pattern,
            ongoing: dates.ongoing_markers.iter().map(|m| m.to_lowercase()).collect(),
        })
    }

    /// Extract all records of a body in source order
    pub fn extract(&self, body: &str) -> Vec<Record> {
        let mut records = Vec::new();
        let mut open: Option<OpenRecord> = None;

        for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match self.record_start(line) {
                Some(next) => {
                    if let Some(done) = open.replace(next) {
                        records.push(done.close());
                    }
                }
                None => match open.as_mut() {
                    Some(current) => current.fold(line),
                    None => trace!("Dropping line before first record: {}", line),
                },
            }
        }

        if let Some(done) = open {
            records.push(done.close());
        }
        records
    }

    /// Whether a line would open a new record
    pub fn is_record_start(&self, line: &str) -> bool {
        self.pattern.is_match(line.trim())
    }

    fn record_start(&self, line: &str) -> Option<OpenRecord> {
        let caps = self.pattern.captures(line)?;

        // Group 1 only exists when qualifiers are configured
        let (qualifier, date, end, rest) = if caps.len() == 5 {
            (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
        } else {
            (None, caps.get(1), caps.get(2), caps.get(3))
        };
        let date = date?.as_str();

        let start_date = match qualifier {
            Some(q) => format!("{} {}", q.as_str(), date),
            None => date.to_string(),
        };
        let end_date = end
            .map(|m| m.as_str())
            .filter(|token| !self.ongoing.contains(&token.to_lowercase()))
            .map(str::to_string);

        Some(OpenRecord {
            start_date,
            end_date,
            description: rest.map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
        })
    }
}

/// The record currently collecting continuation lines
struct OpenRecord {
    start_date: String,
    end_date: Option<String>,
    description: String,
}

impl OpenRecord {
    fn fold(&mut self, line: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(line);
    }

    fn close(self) -> Record {
        Record {
            start_date: Some(self.start_date),
            end_date: self.end_date,
            description: self.description,
        }
    }
}

fn alternation(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| regex::escape(t.trim()))
        .collect::<Vec<_>>()
        .join("|")
}
