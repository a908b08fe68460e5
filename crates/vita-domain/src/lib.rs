//! Vita Domain Layer
//!
//! This crate defines the data model shared by every other Vita crate: the
//! dated [`Record`], the skills taxonomy and the fixed-shape
//! [`CanonicalProfile`] that all downstream tooling consumes.
//!
//! ## Key Concepts
//!
//! - **Record**: a `{startDate, endDate, description}` entry built from a
//!   date-led line and its continuation lines
//! - **Technical Skills**: category → skills, each skill with a numeric level
//! - **Canonical Profile**: identity fields, work-context scalars, skills,
//!   summary and one record list per configured section field
//! - **Certificate**: `{name, date, skills}` entries that merged profiles
//!   carry next to the parsed sections
//!
//! ## Architecture
//!
//! - Only `serde` and `serde_json` as external dependencies (the wire shape
//!   is the contract)
//! - No parsing logic; the extraction pipeline lives in `vita-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod certificate;
pub mod profile;
pub mod record;
pub mod skills;

// Re-exports for convenience
pub use certificate::Certificate;
pub use profile::{CanonicalProfile, CERTIFICATES_FIELD};
pub use record::Record;
pub use skills::{Skill, SkillCategory, TechnicalSkill};
