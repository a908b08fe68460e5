//! Schema mapper: section bodies and record lists into a Canonical Profile

use crate::config::{
    FieldTarget, MappingStrategy, ParserConfig, QualificationConfig, ScalarField, SkillsConfig,
};
use crate::error::MapError;
use crate::segmenter::Sections;
use std::collections::HashMap;
use tracing::{debug, warn};
use vita_domain::{CanonicalProfile, Record, Skill, TechnicalSkill};

/// Name parts derived from the name section
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameParts {
    /// First whitespace-separated token
    pub first_name: Option<String>,
    /// Last token, `None` for single-token names
    pub last_name: Option<String>,
    /// The full text
    pub full_name: Option<String>,
}

/// Degree and certificates found in a qualification body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Qualification {
    /// Value of the degree sub-label
    pub degree: Option<String>,
    /// Comma-split values of the certificate sub-label
    pub certificates: Vec<String>,
}

/// Maps a segmented document onto the fixed-shape profile
pub struct SchemaMapper<'c> {
    config: &'c ParserConfig,
}

impl<'c> SchemaMapper<'c> {
    /// Create a mapper over a configuration
    pub fn new(config: &'c ParserConfig) -> Self {
        Self { config }
    }

    /// Build the profile for one document
    ///
    /// `records` holds the extracted entries of every record section, keyed by
    /// heading label. Any failure aborts the whole mapping.
    pub fn map(
        &self,
        sections: &Sections,
        records: &HashMap<String, Vec<Record>>,
    ) -> Result<CanonicalProfile, MapError> {
        let mut profile = CanonicalProfile::with_sections(self.config.record_fields());
        let specialized = self.config.strategy == MappingStrategy::Specialized;

        for (label, body) in sections.iter() {
            let Some(target) = self.config.target_of(label) else {
                debug!("No target for heading '{}', skipping", label);
                continue;
            };

            match target {
                FieldTarget::Records(field) => {
                    if let Some(entries) = records.get(label) {
                        profile.records_mut(field).extend(entries.iter().cloned());
                    }
                }
                FieldTarget::Scalar(field) => set_scalar(&mut profile, *field, body),
                FieldTarget::Name if specialized => {
                    let name = split_name(body);
                    profile.first_name = name.first_name;
                    profile.last_name = name.last_name;
                    profile.full_name = name.full_name;
                }
                FieldTarget::Name => set_scalar(&mut profile, ScalarField::FullName, body),
                FieldTarget::Skills if specialized => {
                    if let Some(body) = body {
                        profile.technical_skills = parse_skills(body, &self.config.skills)?;
                    }
                }
                FieldTarget::Skills => {
                    if body.is_some() {
                        warn!("Generic mapping has no field for raw skills text, dropping '{}'", label);
                    }
                }
                FieldTarget::Qualification if specialized => {
                    let Some(body) = body else { continue };
                    let qualification = parse_qualification(body, &self.config.qualification);
                    if qualification.degree.is_some() {
                        profile.qualification = qualification.degree;
                    }
                    profile
                        .records_mut(&self.config.qualification.certificate_field)
                        .extend(qualification.certificates.into_iter().map(Record::undated));
                }
                FieldTarget::Qualification => {
                    set_scalar(&mut profile, ScalarField::Qualification, body)
                }
            }
        }

        Ok(profile)
    }
}

fn set_scalar(profile: &mut CanonicalProfile, field: ScalarField, body: Option<&str>) {
    let value = body.map(str::to_string);
    match field {
        ScalarField::FullName => profile.full_name = value,
        ScalarField::ProfessionalSummary => profile.professional_summary = value,
        ScalarField::Qualification => profile.qualification = value,
        ScalarField::Position => profile.position = value,
        ScalarField::Availability => profile.availability = value,
        ScalarField::Location => profile.location = value,
        ScalarField::TravelArrangement => profile.travel_arrangement = value,
        ScalarField::Speciality => profile.speciality = value,
        ScalarField::ExternalId => profile.external_id = value,
        ScalarField::ExternalUrl => profile.external_url = value,
    }
}

/// Split a name body into first, last and full name
pub fn split_name(body: Option<&str>) -> NameParts {
    let Some(full) = body.map(str::trim).filter(|b| !b.is_empty()) else {
        return NameParts::default();
    };
    let tokens: Vec<&str> = full.split_whitespace().collect();
    NameParts {
        first_name: tokens.first().map(|t| t.to_string()),
        last_name: if tokens.len() > 1 {
            tokens.last().map(|t| t.to_string())
        } else {
            None
        },
        full_name: Some(full.to_string()),
    }
}

/// Parse a skills body into categories
///
/// Two layouts are accepted: a flat comma-separated list (one default
/// category) or one `Category: skill, skill` line per category. Mixing both
/// layouts in one body is an error.
pub fn parse_skills(body: &str, config: &SkillsConfig) -> Result<Vec<TechnicalSkill>, MapError> {
    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if !lines.iter().any(|l| l.contains(':')) {
        let skills = lines
            .iter()
            .flat_map(|l| l.split(','))
            .filter_map(|token| make_skill(token, config))
            .collect::<Vec<_>>();
        if skills.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![TechnicalSkill::new(config.default_category.clone(), skills)]);
    }

    let mut categories = Vec::with_capacity(lines.len());
    for line in lines {
        let Some((name, rest)) = line.split_once(':') else {
            return Err(MapError::MixedSkillsLayout {
                line: line.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(MapError::EmptySkillCategory {
                line: line.to_string(),
            });
        }
        let skills = rest
            .split(',')
            .filter_map(|token| make_skill(token, config))
            .collect();
        categories.push(TechnicalSkill::new(name, skills));
    }
    Ok(categories)
}

fn make_skill(token: &str, config: &SkillsConfig) -> Option<Skill> {
    let name = token.trim();
    if name.is_empty() {
        return None;
    }
    Some(Skill::new(
        name,
        config.default_level,
        config.default_level_description.clone(),
    ))
}

/// Scan a qualification body for the degree and certificate sub-labels
///
/// Only lines starting with a configured sub-label followed by a colon are
/// read; everything else is ignored. A repeated degree line overrides the
/// earlier one, certificate lines accumulate.
pub fn parse_qualification(body: &str, config: &QualificationConfig) -> Qualification {
    let mut qualification = Qualification::default();
    for line in body.lines().map(str::trim) {
        if let Some(value) = sub_label_value(line, &config.degree_labels) {
            if !value.is_empty() {
                qualification.degree = Some(value.to_string());
            }
        } else if let Some(value) = sub_label_value(line, &config.certificate_labels) {
            qualification.certificates.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
            );
        }
    }
    qualification
}

/// Value after `label:` when the line starts with one of the labels
fn sub_label_value<'l>(line: &'l str, labels: &[String]) -> Option<&'l str> {
    let (head, value) = line.split_once(':')?;
    let head = head.trim().to_lowercase();
    labels
        .iter()
        .any(|label| label.trim().to_lowercase() == head)
        .then(|| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;

    fn skills_config() -> SkillsConfig {
        ParserConfig::default().skills
    }

    #[test]
    fn test_split_name() {
        let name = split_name(Some("Max Peter Mustermann"));
        assert_eq!(name.first_name.as_deref(), Some("Max"));
        assert_eq!(name.last_name.as_deref(), Some("Mustermann"));
        assert_eq!(name.full_name.as_deref(), Some("Max Peter Mustermann"));
    }

    #[test]
    fn test_split_single_token_name() {
        let name = split_name(Some("Cher"));
        assert_eq!(name.first_name.as_deref(), Some("Cher"));
        assert_eq!(name.last_name, None);
        assert_eq!(name.full_name.as_deref(), Some("Cher"));
    }

    #[test]
    fn test_split_missing_name() {
        assert_eq!(split_name(None), NameParts::default());
        assert_eq!(split_name(Some("  ")), NameParts::default());
    }

    #[test]
    fn test_skills_by_category() {
        let skills = parse_skills("Backend: Go, Rust\nFrontend: TS", &skills_config()).unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].category.name, "Backend");
        assert_eq!(skills[0].skill_names(), vec!["Go", "Rust"]);
        assert_eq!(skills[1].category.name, "Frontend");
        assert_eq!(skills[1].skill_names(), vec!["TS"]);
        for skill in skills.iter().flat_map(|c| &c.category.skills) {
            assert_eq!(skill.level, 1);
            assert_eq!(skill.level_description, "Grundkenntnisse");
        }
    }

    #[test]
    fn test_flat_skills_go_to_default_category() {
        let skills = parse_skills("Java, Python,\nSQL , ,Docker", &skills_config()).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].category.name, "General Skills");
        assert_eq!(skills[0].skill_names(), vec!["Java", "Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_category_split_on_first_colon() {
        let skills = parse_skills("Tools: Jira: Cloud, Git", &skills_config()).unwrap();
        assert_eq!(skills[0].category.name, "Tools");
        assert_eq!(skills[0].skill_names(), vec!["Jira: Cloud", "Git"]);
    }

    #[test]
    fn test_mixed_skills_layout_fails() {
        let err = parse_skills("Backend: Go\nRust, C", &skills_config()).unwrap_err();
        assert_eq!(
            err,
            MapError::MixedSkillsLayout {
                line: "Rust, C".to_string()
            }
        );
    }

    #[test]
    fn test_empty_category_name_fails() {
        let err = parse_skills(": Go", &skills_config()).unwrap_err();
        assert!(matches!(err, MapError::EmptySkillCategory { .. }));
    }

    #[test]
    fn test_qualification_sub_labels() {
        let config = ParserConfig::default().qualification;
        let q = parse_qualification(
            "Abschluss: M.Sc. Informatik\nNote 1,3\nZertifikate: AWS SAA, Scrum Master\nzertifikate: ITIL",
            &config,
        );
        assert_eq!(q.degree.as_deref(), Some("M.Sc. Informatik"));
        assert_eq!(q.certificates, vec!["AWS SAA", "Scrum Master", "ITIL"]);
    }

    #[test]
    fn test_qualification_without_sub_labels() {
        let config = ParserConfig::default().qualification;
        let q = parse_qualification("Diplom Informatiker", &config);
        assert_eq!(q, Qualification::default());
    }

    fn sections(pairs: &[(&str, Option<&str>)]) -> Sections {
        let mut sections = Sections::new();
        for (label, body) in pairs {
            sections.insert(label, *body, DuplicatePolicy::LastWins);
        }
        sections
    }

    #[test]
    fn test_specialized_mapping() {
        let config = ParserConfig::default();
        let mapper = SchemaMapper::new(&config);
        let sections = sections(&[
            ("Name", Some("Erika Mustermann")),
            ("Profil", Some("Data Engineer")),
            ("IT-Skills", Some("Rust, SQL")),
            ("Qualifikationen", Some("Abschluss: B.Sc.\nZertifikate: CKA")),
            ("Studium", Some("2010 - 2013 Informatik")),
        ]);
        let mut records = HashMap::new();
        records.insert(
            "Studium".to_string(),
            vec![Record::new(Some("2010"), Some("2013"), "Informatik")],
        );

        let profile = mapper.map(&sections, &records).unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Erika"));
        assert_eq!(profile.last_name.as_deref(), Some("Mustermann"));
        assert_eq!(profile.professional_summary.as_deref(), Some("Data Engineer"));
        assert_eq!(profile.technical_skills[0].skill_names(), vec!["Rust", "SQL"]);
        assert_eq!(profile.qualification.as_deref(), Some("B.Sc."));
        assert_eq!(profile.records("certifications"), &[Record::undated("CKA")]);
        assert_eq!(profile.records("studies").len(), 1);
        assert!(profile.records("projects").is_empty());
        assert!(profile.sections.contains_key("projects"));
    }

    #[test]
    fn test_generic_mapping_keeps_raw_text() {
        let mut config = ParserConfig::default();
        config.strategy = MappingStrategy::Generic;
        let mapper = SchemaMapper::new(&config);
        let sections = sections(&[
            ("Name", Some("Erika Mustermann")),
            ("IT-Skills", Some("Rust, SQL")),
            ("Qualifikationen", Some("Abschluss: B.Sc.")),
        ]);

        let profile = mapper.map(&sections, &HashMap::new()).unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Erika Mustermann"));
        assert_eq!(profile.first_name, None);
        assert!(profile.technical_skills.is_empty());
        assert_eq!(profile.qualification.as_deref(), Some("Abschluss: B.Sc."));
    }

    #[test]
    fn test_mapping_failure_aborts() {
        let config = ParserConfig::default();
        let mapper = SchemaMapper::new(&config);
        let sections = sections(&[
            ("Name", Some("Erika Mustermann")),
            ("IT-Skills", Some("Backend: Go\nlose Zeile")),
        ]);
        assert!(mapper.map(&sections, &HashMap::new()).is_err());
    }

    #[test]
    fn test_empty_sections_keep_defaults() {
        let config = ParserConfig::default();
        let mapper = SchemaMapper::new(&config);
        let sections = sections(&[("Name", None), ("Studium", None), ("IT-Skills", None)]);

        let profile = mapper.map(&sections, &HashMap::new()).unwrap();
        assert_eq!(profile.full_name, None);
        assert!(profile.technical_skills.is_empty());
        assert_eq!(profile.records("studies"), &[] as &[Record]);
    }

    #[test]
    fn test_two_labels_one_field_append_in_document_order() {
        let mut config = ParserConfig::default();
        config.sections.push(crate::config::SectionField::new(
            "Praktika",
            FieldTarget::Records("professionalExperience".to_string()),
        ));
        let mapper = SchemaMapper::new(&config);
        let sections = sections(&[
            ("Praktika", Some("2012 A")),
            ("Beruflicher Werdegang", Some("2015 B")),
        ]);
        let mut records = HashMap::new();
        records.insert("Praktika".to_string(), vec![Record::new(Some("2012"), None::<String>, "A")]);
        records.insert(
            "Beruflicher Werdegang".to_string(),
            vec![Record::new(Some("2015"), None::<String>, "B")],
        );

        let profile = mapper.map(&sections, &records).unwrap();
        let descriptions: Vec<_> = profile
            .records("professionalExperience")
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["A", "B"]);
    }
}
