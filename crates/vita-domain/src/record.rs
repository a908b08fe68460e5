//! Record module - one dated entry of a profile section

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dated entry inside a profile section (project, job, degree, ...)
///
/// Records are produced by the entry extractor and never change after they
/// have been appended to a section list.
///
/// # Examples
///
/// ```
/// use vita_domain::Record;
///
/// let record = Record::new(Some("01/2020"), Some("03/2021"), "Worked on X");
/// assert_eq!(record.start_date.as_deref(), Some("01/2020"));
/// assert!(!record.is_ongoing());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Start token including an optional qualifier, e.g. `"Seit 2019"`
    #[serde(default)]
    pub start_date: Option<String>,

    /// End token; `None` when absent or marked as ongoing
    #[serde(default)]
    pub end_date: Option<String>,

    /// Free text of the entry, continuation lines joined by single spaces
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a record from its three parts
    pub fn new(
        start_date: Option<impl Into<String>>,
        end_date: Option<impl Into<String>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.map(Into::into),
            end_date: end_date.map(Into::into),
            description: description.into(),
        }
    }

    /// Create a record that carries no dates at all
    ///
    /// Used for list-like data such as certificates named in a
    /// qualification block.
    pub fn undated(description: impl Into<String>) -> Self {
        Self {
            start_date: None,
            end_date: None,
            description: description.into(),
        }
    }

    /// A record with a start but no end is still running
    pub fn is_ongoing(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_none()
    }

    /// Whether the record has any date information
    pub fn is_dated(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => write!(f, "{} – {} {}", start, end, self.description),
            (Some(start), None) => write!(f, "{} {}", start, self.description),
            (None, Some(end)) => write!(f, "– {} {}", end, self.description),
            (None, None) => write!(f, "{}", self.description),
        }
    }
}
