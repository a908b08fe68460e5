//! Canonical Profile - the sole interchange artifact of the pipeline

use crate::certificate::{null_as_default, Certificate};
use crate::record::Record;
use crate::skills::TechnicalSkill;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key of the external certificate list
pub const CERTIFICATES_FIELD: &str = "certificates";

/// The fixed-shape structured profile produced for one document
///
/// Every field is always present on the wire: scalars serialize as `null`
/// when unknown, collections as `[]`. Section record lists are keyed by their
/// canonical field name (`professionalExperience`, `studies`, ...) and are
/// flattened into the top-level object.
///
/// Legacy spellings (`availibility`, `autilityId`, `autilityUrl`) are accepted
/// when reading profiles produced by older tooling.
///
/// Reading is tolerant so that merged profiles load: `null` collections read
/// as empty, an external `certificates` list of `{name, date, skills}` objects
/// lands in [`certificates`](Self::certificates), other arrays of objects
/// become section records, and any remaining key is kept verbatim in
/// [`extras`](Self::extras).
///
/// # Examples
///
/// ```
/// use vita_domain::{CanonicalProfile, Record};
///
/// let mut profile = CanonicalProfile::with_sections(["studies", "training"]);
/// profile.records_mut("studies").push(Record::undated("Informatik"));
///
/// assert_eq!(profile.records("studies").len(), 1);
/// assert!(profile.records("training").is_empty());
/// assert!(profile.records("unknown").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProfile")]
pub struct CanonicalProfile {
    /// First token of the name
    pub first_name: Option<String>,

    /// Last token of the name, `None` for single-token names
    pub last_name: Option<String>,

    /// Full name as written in the source
    pub full_name: Option<String>,

    /// Identifier in an external staffing system
    #[serde(alias = "autilityId")]
    pub external_id: Option<String>,

    /// Profile URL in an external staffing system
    #[serde(alias = "autilityUrl")]
    pub external_url: Option<String>,

    /// Current position / job title
    pub position: Option<String>,

    /// Availability statement
    #[serde(alias = "availibility")]
    pub availability: Option<String>,

    /// Contractual working hours per week
    pub work_hours_per_week: Option<u32>,

    /// Home location
    pub location: Option<String>,

    /// Willingness to travel
    pub travel_arrangement: Option<String>,

    /// Main specialisation
    pub speciality: Option<String>,

    /// Preferred working areas
    #[serde(default)]
    pub preferred_working_areas: Vec<String>,

    /// Highest degree
    pub qualification: Option<String>,

    /// Skills taxonomy
    #[serde(default)]
    pub technical_skills: Vec<TechnicalSkill>,

    /// Free-text profile summary
    pub professional_summary: Option<String>,

    /// External certificates; only written when present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificates: Vec<Certificate>,

    /// Section-keyed record lists
    #[serde(flatten)]
    pub sections: BTreeMap<String, Vec<Record>>,

    /// Keys no other field claims, written back unchanged
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

/// Wire form read before unclaimed keys are sorted into place
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    first_name: Option<String>,
    last_name: Option<String>,
    full_name: Option<String>,
    #[serde(alias = "autilityId")]
    external_id: Option<String>,
    #[serde(alias = "autilityUrl")]
    external_url: Option<String>,
    position: Option<String>,
    #[serde(alias = "availibility")]
    availability: Option<String>,
    work_hours_per_week: Option<u32>,
    location: Option<String>,
    travel_arrangement: Option<String>,
    speciality: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    preferred_working_areas: Vec<String>,
    qualification: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    technical_skills: Vec<TechnicalSkill>,
    professional_summary: Option<String>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl From<RawProfile> for CanonicalProfile {
    fn from(raw: RawProfile) -> Self {
        let mut profile = Self {
            first_name: raw.first_name,
            last_name: raw.last_name,
            full_name: raw.full_name,
            external_id: raw.external_id,
            external_url: raw.external_url,
            position: raw.position,
            availability: raw.availability,
            work_hours_per_week: raw.work_hours_per_week,
            location: raw.location,
            travel_arrangement: raw.travel_arrangement,
            speciality: raw.speciality,
            preferred_working_areas: raw.preferred_working_areas,
            qualification: raw.qualification,
            technical_skills: raw.technical_skills,
            professional_summary: raw.professional_summary,
            ..Self::default()
        };
        for (key, value) in raw.rest {
            profile.absorb(key, value);
        }
        profile
    }
}

/// Non-empty array of objects that all carry a `name` and no `description`
fn is_certificate_list(value: &Value) -> bool {
    match value.as_array() {
        Some(items) if !items.is_empty() => items.iter().all(|item| {
            item.as_object()
                .is_some_and(|o| o.contains_key("name") && !o.contains_key("description"))
        }),
        _ => false,
    }
}

impl CanonicalProfile {
    /// Create an empty profile with an empty record list for every field
    pub fn with_sections<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: fields.into_iter().map(|f| (f.into(), Vec::new())).collect(),
            ..Self::default()
        }
    }

    /// Records of a section field (empty for unknown fields)
    pub fn records(&self, field: &str) -> &[Record] {
        self.sections.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable access to a section field, creating it if missing
    pub fn records_mut(&mut self, field: &str) -> &mut Vec<Record> {
        self.sections.entry(field.to_string()).or_default()
    }

    /// Sort an unclaimed wire key into certificates, sections or extras
    fn absorb(&mut self, key: String, value: Value) {
        if key == CERTIFICATES_FIELD && is_certificate_list(&value) {
            if let Ok(certificates) = Vec::<Certificate>::deserialize(&value) {
                self.certificates = certificates;
                return;
            }
        }
        if value.is_array() {
            if let Ok(records) = Vec::<Record>::deserialize(&value) {
                self.sections.insert(key, records);
                return;
            }
        }
        self.extras.insert(key, value);
    }

    /// Total number of records across all section fields
    pub fn record_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Name to show for the profile: full name, first + last, or `None`
    pub fn display_name(&self) -> Option<String> {
        if let Some(full) = self.full_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return Some(full.trim().to_string());
        }
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
