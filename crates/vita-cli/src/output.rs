//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vita_domain::CanonicalProfile;
use vita_extractor::{DocumentOutcome, ProfileChunk};

const CONTENT_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a parsed profile.
    pub fn format_profile(&self, profile: &CanonicalProfile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
            OutputFormat::Table => Ok(self.format_profile_table(profile)),
            OutputFormat::Quiet => Ok(display_name(profile)),
        }
    }

    /// Profile overview: scalars that are set, then record counts.
    fn format_profile_table(&self, profile: &CanonicalProfile) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        let scalars = [
            ("fullName", profile.full_name.as_deref()),
            ("position", profile.position.as_deref()),
            ("location", profile.location.as_deref()),
            ("availability", profile.availability.as_deref()),
            ("qualification", profile.qualification.as_deref()),
        ];
        for (field, value) in scalars {
            if let Some(value) = value {
                builder.push_record([field, value]);
            }
        }
        if let Some(summary) = &profile.professional_summary {
            builder.push_record(["professionalSummary", truncate(summary).as_str()]);
        }
        for skill in &profile.technical_skills {
            builder.push_record([
                format!("skills: {}", skill.category.name),
                skill.skill_names().join(", "),
            ]);
        }
        for (field, records) in &profile.sections {
            if !records.is_empty() {
                builder.push_record([field.clone(), format!("{} record(s)", records.len())]);
            }
        }
        if !profile.certificates.is_empty() {
            builder.push_record([
                "certificates".to_string(),
                format!("{} certificate(s)", profile.certificates.len()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format batch outcomes.
    pub fn format_outcomes(&self, outcomes: &[DocumentOutcome]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<serde_json::Value> = outcomes
                    .iter()
                    .map(|o| match &o.result {
                        Ok(profile) => serde_json::json!({
                            "id": o.id,
                            "ok": true,
                            "profile": profile,
                        }),
                        Err(e) => serde_json::json!({
                            "id": o.id,
                            "ok": false,
                            "error": e.to_string(),
                        }),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Table => Ok(self.format_outcomes_table(outcomes)),
            OutputFormat::Quiet => Ok(outcomes
                .iter()
                .map(|o| format!("{}\t{}", o.id, if o.is_ok() { "ok" } else { "failed" }))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_outcomes_table(&self, outcomes: &[DocumentOutcome]) -> String {
        if outcomes.is_empty() {
            return self.colorize("No documents.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Document", "Status", "Name", "Records", "Error"]);
        for outcome in outcomes {
            match &outcome.result {
                Ok(profile) => builder.push_record([
                    outcome.id.clone(),
                    self.colorize("ok", "green"),
                    display_name(profile),
                    profile.record_count().to_string(),
                    String::new(),
                ]),
                Err(e) => builder.push_record([
                    outcome.id.clone(),
                    self.colorize("failed", "red"),
                    String::new(),
                    String::new(),
                    e.to_string(),
                ]),
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format profile chunks.
    pub fn format_chunks(&self, chunks: &[ProfileChunk]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(chunks)?),
            OutputFormat::Table => {
                if chunks.is_empty() {
                    return Ok(self.colorize("No chunks.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["ID", "Type", "Category", "Content"]);
                for chunk in chunks {
                    builder.push_record([
                        chunk.id.as_str(),
                        chunk.kind.as_str(),
                        chunk.category.as_deref().unwrap_or(""),
                        truncate(&chunk.content).as_str(),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(chunks
                .iter()
                .map(|c| c.content.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn display_name(profile: &CanonicalProfile) -> String {
    profile
        .display_name()
        .unwrap_or_else(|| "unknown".to_string())
}

fn truncate(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= CONTENT_WIDTH {
        return flat;
    }
    let cut: String = flat.chars().take(CONTENT_WIDTH - 1).collect();
    format!("{}…", cut)
}
