//! Configuration for the profile parser
//!
//! Everything the pipeline treats as static (heading catalog, label → field
//! table, date tokens, skill defaults) lives in [`ParserConfig`] and is passed
//! in explicitly.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to do when the same heading occurs more than once in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later body replaces the earlier one
    #[default]
    LastWins,
    /// Bodies are joined with a blank line
    Concatenate,
}

/// How section bodies are turned into profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingStrategy {
    /// Raw bodies into scalar fields, record sections into record lists
    Generic,
    /// Generic plus typed synthesis of name, skills and qualification
    #[default]
    Specialized,
}

/// Scalar profile fields a section body can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    /// `fullName`
    FullName,
    /// `professionalSummary`
    ProfessionalSummary,
    /// `qualification`
    Qualification,
    /// `position`
    Position,
    /// `availability`
    Availability,
    /// `location`
    Location,
    /// `travelArrangement`
    TravelArrangement,
    /// `speciality`
    Speciality,
    /// `externalId`
    ExternalId,
    /// `externalUrl`
    ExternalUrl,
}

/// Where the body of a heading ends up in the profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTarget {
    /// Name pseudo-section (`firstName`, `lastName`, `fullName`)
    Name,
    /// Skills pseudo-section (`technicalSkills`)
    Skills,
    /// Qualification pseudo-section (`qualification`, certificates)
    Qualification,
    /// Raw body into a scalar field
    Scalar(ScalarField),
    /// Dated entries into the named record list
    Records(String),
}

/// One entry of the heading catalog together with its target field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionField {
    /// Heading label as it appears at a line start
    pub label: String,

    /// Target field
    pub target: FieldTarget,
}

impl SectionField {
    /// Create a catalog entry
    pub fn new(label: impl Into<String>, target: FieldTarget) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    fn records(label: &str, field: &str) -> Self {
        Self::new(label, FieldTarget::Records(field.to_string()))
    }
}

/// Tokens recognised around the dates of a record-start line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConfig {
    /// Qualifiers allowed before the start date ("Seit", "Ab"), kept verbatim
    pub qualifiers: Vec<String>,

    /// End tokens meaning "still running"; they yield `endDate = null`
    pub ongoing_markers: Vec<String>,
}

/// Defaults applied to synthesized skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Category used for a flat comma-separated skill list
    pub default_category: String,

    /// Level given to every synthesized skill
    pub default_level: u8,

    /// Description of `default_level`
    pub default_level_description: String,
}

/// Sub-labels scanned inside the qualification section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationConfig {
    /// Line prefixes (before a colon) naming the degree
    pub degree_labels: Vec<String>,

    /// Line prefixes (before a colon) listing certificates
    pub certificate_labels: Vec<String>,

    /// Record field receiving the certificates as undated records
    pub certificate_field: String,
}

/// Configuration for the profile parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Mapping strategy
    #[serde(default)]
    pub strategy: MappingStrategy,

    /// Duplicate heading policy
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Parse batch documents on a rayon worker pool
    #[serde(default)]
    pub parallel: bool,

    /// Record-start date tokens
    pub dates: DateConfig,

    /// Skill synthesis defaults
    pub skills: SkillsConfig,

    /// Qualification sub-labels
    pub qualification: QualificationConfig,

    /// Heading catalog in declaration order
    pub sections: Vec<SectionField>,
}

impl ParserConfig {
    /// Heading labels in declaration order
    pub fn catalog(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.label.as_str()).collect()
    }

    /// Target of a catalog label (exact catalog spelling)
    pub fn target_of(&self, label: &str) -> Option<&FieldTarget> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| &s.target)
    }

    /// Every record field the profile must carry, in catalog order
    ///
    /// Includes the certificate field of the qualification section.
    pub fn record_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for section in &self.sections {
            if let FieldTarget::Records(field) = &section.target {
                if !fields.contains(&field.as_str()) {
                    fields.push(field);
                }
            }
        }
        let cert = self.qualification.certificate_field.as_str();
        if !fields.contains(&cert) {
            fields.push(cert);
        }
        fields
    }

    /// First catalog label mapped to the given target
    pub fn label_for(&self, target: &FieldTarget) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| &s.target == target)
            .map(|s| s.label.as_str())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.sections.is_empty() {
            return Err("heading catalog must not be empty".to_string());
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            let label = section.label.trim();
            if label.is_empty() {
                return Err("heading labels must not be empty".to_string());
            }
            if label != section.label {
                return Err(format!(
                    "heading label '{}' has leading or trailing whitespace",
                    section.label
                ));
            }
            if !seen.insert(label.to_lowercase()) {
                return Err(format!("heading label '{}' is declared twice", label));
            }
            if let FieldTarget::Records(field) = &section.target {
                if field.trim().is_empty() {
                    return Err(format!("record field for '{}' must not be empty", label));
                }
            }
        }
        if self.dates.qualifiers.iter().any(|q| q.trim().is_empty()) {
            return Err("date qualifiers must not be empty".to_string());
        }
        if self.dates.ongoing_markers.iter().any(|m| m.trim().is_empty()) {
            return Err("ongoing markers must not be empty".to_string());
        }
        if self.skills.default_level == 0 {
            return Err("default_level must be greater than 0".to_string());
        }
        if self.skills.default_category.trim().is_empty() {
            return Err("default_category must not be empty".to_string());
        }
        if self.qualification.certificate_field.trim().is_empty() {
            return Err("certificate_field must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    /// German heading catalog of the consultant profile documents
    fn default() -> Self {
        Self {
            strategy: MappingStrategy::Specialized,
            duplicate_policy: DuplicatePolicy::LastWins,
            parallel: false,
            dates: DateConfig {
                qualifiers: vec!["Seit".to_string(), "Ab".to_string()],
                ongoing_markers: vec!["aktuell".to_string(), "heute".to_string()],
            },
            skills: SkillsConfig {
                default_category: "General Skills".to_string(),
                default_level: 1,
                default_level_description: "Grundkenntnisse".to_string(),
            },
            qualification: QualificationConfig {
                degree_labels: vec!["Abschluss".to_string()],
                certificate_labels: vec!["Zertifikate".to_string()],
                certificate_field: "certifications".to_string(),
            },
            sections: vec![
                SectionField::new("Name", FieldTarget::Name),
                SectionField::new(
                    "Profil",
                    FieldTarget::Scalar(ScalarField::ProfessionalSummary),
                ),
                SectionField::new("IT-Skills", FieldTarget::Skills),
                SectionField::new("Qualifikationen", FieldTarget::Qualification),
                SectionField::records("auticon Projekte", "auticonProjects"),
                SectionField::records("Studium Projekte", "studyProjects"),
                SectionField::records("Projekte", "projects"),
                SectionField::records("Ausbildung", "education"),
                SectionField::records("Beruflicher Werdegang", "professionalExperience"),
                SectionField::records("Studium", "studies"),
                SectionField::records("Weiterbildung", "training"),
                SectionField::records("Engagement", "engagements"),
                SectionField::records("Private Projekte", "privateProjects"),
                SectionField::records("Weitere Projekte", "furtherProjects"),
                SectionField::records("auticon Weiterbildungen", "auticonTraining"),
                SectionField::records("Zertifizierungen", "certifications"),
            ],
        }
    }
}

impl ParserConfig {
    /// English preset: English headings, date tokens and skill defaults
    pub fn english() -> Self {
        Self {
            strategy: MappingStrategy::Specialized,
            duplicate_policy: DuplicatePolicy::LastWins,
            parallel: false,
            dates: DateConfig {
                qualifiers: vec!["Since".to_string(), "From".to_string()],
                ongoing_markers: vec![
                    "present".to_string(),
                    "current".to_string(),
                    "today".to_string(),
                ],
            },
            skills: SkillsConfig {
                default_category: "General Skills".to_string(),
                default_level: 1,
                default_level_description: "Basic knowledge".to_string(),
            },
            qualification: QualificationConfig {
                degree_labels: vec!["Degree".to_string()],
                certificate_labels: vec!["Certificates".to_string()],
                certificate_field: "certifications".to_string(),
            },
            sections: vec![
                SectionField::new("Name", FieldTarget::Name),
                SectionField::new(
                    "Profile",
                    FieldTarget::Scalar(ScalarField::ProfessionalSummary),
                ),
                SectionField::new("Skills", FieldTarget::Skills),
                SectionField::new("Qualifications", FieldTarget::Qualification),
                SectionField::records("Study Projects", "studyProjects"),
                SectionField::records("Projects", "projects"),
                SectionField::records("Education", "education"),
                SectionField::records("Professional Experience", "professionalExperience"),
                SectionField::records("Studies", "studies"),
                SectionField::records("Training", "training"),
                SectionField::records("Engagement", "engagements"),
                SectionField::records("Private Projects", "privateProjects"),
                SectionField::records("Further Projects", "furtherProjects"),
                SectionField::records("Certifications", "certifications"),
            ],
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
