//! Certificate entries carried by merged profiles

use serde::{Deserialize, Deserializer, Serialize};

/// A certificate as delivered by external profile sources
///
/// Parsed documents list certificates as undated records; profiles merged
/// with staffing-system exports additionally carry a `certificates` list of
/// `{name, date, skills}` objects.
///
/// # Examples
///
/// ```
/// use vita_domain::Certificate;
///
/// let cert = Certificate::new("CKA", Some("2022"));
/// assert_eq!(cert.label(), "CKA (2022)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Date of issue as written by the source
    #[serde(default)]
    pub date: Option<String>,

    /// Skills the certificate attests
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

impl Certificate {
    /// Create a certificate without skills
    pub fn new(name: impl Into<String>, date: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            date: date.map(Into::into),
            skills: Vec::new(),
        }
    }

    /// `name (date)`, or whichever of the two is present
    pub fn label(&self) -> String {
        let name = self.name.trim();
        match self.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(date) if name.is_empty() => date.to_string(),
            Some(date) => format!("{} ({})", name, date),
            None => name.to_string(),
        }
    }
}

/// Deserialize an explicit `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
