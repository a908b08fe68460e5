//! Plain-text renderer: a profile back into heading-anchored source form

use crate::config::{FieldTarget, MappingStrategy, ParserConfig, ScalarField};
use tracing::debug;
use vita_domain::{CanonicalProfile, Record};

/// Render a profile as text the parser reads back
///
/// Blocks follow catalog order; each field is written under the first label
/// mapped to it. Sections without content are left out. Records without a
/// start date cannot open a record line, so outside the certificate list of
/// the qualification block they are skipped. External certificates join that
/// list as `name (date)`.
pub fn render_profile(profile: &CanonicalProfile, config: &ParserConfig) -> String {
    let specialized = config.strategy == MappingStrategy::Specialized;
    let mut blocks = Vec::new();

    for section in &config.sections {
        if config.label_for(&section.target) != Some(section.label.as_str()) {
            continue;
        }
        let body = match &section.target {
            FieldTarget::Name if specialized => profile.display_name(),
            FieldTarget::Name => profile.full_name.clone(),
            FieldTarget::Scalar(field) => scalar(profile, *field).map(str::to_string),
            FieldTarget::Skills if specialized => render_skills(profile),
            FieldTarget::Skills => None,
            FieldTarget::Qualification if specialized => render_qualification(profile, config),
            FieldTarget::Qualification => profile.qualification.clone(),
            FieldTarget::Records(field) => render_records(field, profile.records(field)),
        };
        if let Some(body) = body.filter(|b| !b.trim().is_empty()) {
            blocks.push(format!("{}\n{}\n", section.label, body.trim_end()));
        }
    }

    blocks.join("\n")
}

fn scalar(profile: &CanonicalProfile, field: ScalarField) -> Option<&str> {
    match field {
        ScalarField::FullName => profile.full_name.as_deref(),
        ScalarField::ProfessionalSummary => profile.professional_summary.as_deref(),
        ScalarField::Qualification => profile.qualification.as_deref(),
        ScalarField::Position => profile.position.as_deref(),
        ScalarField::Availability => profile.availability.as_deref(),
        ScalarField::Location => profile.location.as_deref(),
        ScalarField::TravelArrangement => profile.travel_arrangement.as_deref(),
        ScalarField::Speciality => profile.speciality.as_deref(),
        ScalarField::ExternalId => profile.external_id.as_deref(),
        ScalarField::ExternalUrl => profile.external_url.as_deref(),
    }
}

fn render_skills(profile: &CanonicalProfile) -> Option<String> {
    let lines: Vec<String> = profile
        .technical_skills
        .iter()
        .map(|s| format!("{}: {}", s.category.name, s.skill_names().join(", ")))
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

fn render_qualification(profile: &CanonicalProfile, config: &ParserConfig) -> Option<String> {
    let labels = &config.qualification;
    let mut lines = Vec::new();

    if let (Some(degree), Some(label)) = (&profile.qualification, labels.degree_labels.first()) {
        lines.push(format!("{}: {}", label, degree));
    }
    let certificates: Vec<String> = profile
        .records(&labels.certificate_field)
        .iter()
        .filter(|r| !r.is_dated())
        .map(|r| r.description.clone())
        .chain(profile.certificates.iter().map(|c| c.label()))
        .filter(|c| !c.trim().is_empty())
        .collect();
    if let Some(label) = labels
        .certificate_labels
        .first()
        .filter(|_| !certificates.is_empty())
    {
        lines.push(format!("{}: {}", label, certificates.join(", ")));
    }

    (!lines.is_empty()).then(|| lines.join("\n"))
}

fn render_records(field: &str, records: &[Record]) -> Option<String> {
    let lines: Vec<String> = records
        .iter()
        .filter(|r| {
            let keep = r.start_date.is_some();
            if !keep {
                debug!("Skipping record without start date in {}", field);
            }
            keep
        })
        .map(|r| r.to_string().trim_end().to_string())
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}
