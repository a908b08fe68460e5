//! Flattening a profile into typed text chunks

use crate::config::ParserConfig;
use crate::types::ProfileChunk;
use vita_domain::{CanonicalProfile, Certificate, Record, CERTIFICATES_FIELD};

const SKILLS_KIND: &str = "technicalSkills";
const SUMMARY_KIND: &str = "professionalSummary";

/// Turns a profile into one chunk per record, certificate, skill category
/// and summary
pub struct ProfileChunker {
    fields: Vec<String>,
}

impl ProfileChunker {
    /// Create a chunker over the given record fields, in output order
    pub fn new<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Chunker over every record field of a configuration
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.record_fields())
    }

    /// Chunk a profile
    pub fn chunk(&self, profile: &CanonicalProfile) -> Vec<ProfileChunk> {
        let source = profile
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("unknown");

        let mut pieces: Vec<(&str, Option<String>, String)> = Vec::new();
        for field in &self.fields {
            for record in profile.records(field) {
                pieces.push((field.as_str(), None, record_line(record)));
            }
        }
        for certificate in &profile.certificates {
            pieces.push((CERTIFICATES_FIELD, None, certificate_line(certificate)));
        }
        for skill in &profile.technical_skills {
            let name = &skill.category.name;
            pieces.push((
                SKILLS_KIND,
                Some(name.clone()),
                format!("{}: {}", name, skill.skill_names().join(", ")),
            ));
        }
        if let Some(summary) = profile
            .professional_summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        {
            pieces.push((SUMMARY_KIND, None, summary.to_string()));
        }

        pieces
            .into_iter()
            .enumerate()
            .map(|(idx, (kind, category, content))| ProfileChunk {
                id: format!("Chunk {}", idx + 1),
                kind: kind.to_string(),
                category,
                content,
                source: source.to_string(),
            })
            .collect()
    }
}

/// Chunk a profile over the given record fields
pub fn chunk_profile<S: AsRef<str>>(profile: &CanonicalProfile, fields: &[S]) -> Vec<ProfileChunk> {
    ProfileChunker::new(fields.iter().map(|f| f.as_ref().to_string())).chunk(profile)
}

fn record_line(record: &Record) -> String {
    format!(
        "{} - {} - {}",
        record.start_date.as_deref().unwrap_or("N/A"),
        record.end_date.as_deref().unwrap_or("N/A"),
        record.description
    )
}

fn certificate_line(certificate: &Certificate) -> String {
    let label = certificate.label();
    if certificate.skills.is_empty() {
        label
    } else {
        format!("{} - Skills: {}", label, certificate.skills.join(", "))
    }
}
