//! Integration tests for the profile pipeline

#[cfg(test)]
mod tests {
    use crate::{
        merge_profiles, render_profile, Document, DuplicatePolicy, ExtractorError, MapError,
        CanonicalProfile, MappingStrategy, ParserConfig, ProfileChunker, ProfileParser, Record,
    };

    const SAMPLE: &str = "Lebenslauf

Name
Max Peter Mustermann

Profil
Erfahrener Backend-Entwickler mit Fokus auf verteilte Systeme.

IT-Skills
Backend: Go, Rust, Java
Datenbanken: PostgreSQL, Redis
Tools: Git

Qualifikationen
Abschluss: M.Sc. Informatik
Zertifikate: AWS Solutions Architect, Scrum Master

Beruflicher Werdegang
Seit 04/2021 Senior Consultant bei auticon
Architektur und Umsetzung von
Microservices
01/2018 – 03/2021 Softwareentwickler
bei der Beispiel GmbH

Studium Projekte
2016 - 2017 Compilerbau-Praktikum

Studium
2012 - 2017 Informatik, TU Berlin

auticon Projekte
06/2021 - aktuell Migration eines Monolithen
";

    fn parser() -> ProfileParser {
        ProfileParser::new(ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_full_german_profile() {
        let profile = parser().parse_text(SAMPLE).unwrap();

        assert_eq!(profile.first_name.as_deref(), Some("Max"));
        assert_eq!(profile.last_name.as_deref(), Some("Mustermann"));
        assert_eq!(profile.full_name.as_deref(), Some("Max Peter Mustermann"));
        assert_eq!(
            profile.professional_summary.as_deref(),
            Some("Erfahrener Backend-Entwickler mit Fokus auf verteilte Systeme.")
        );
        assert_eq!(profile.qualification.as_deref(), Some("M.Sc. Informatik"));

        let categories: Vec<_> = profile
            .technical_skills
            .iter()
            .map(|s| (s.category.name.as_str(), s.category.skills.len()))
            .collect();
        assert_eq!(categories, vec![("Backend", 3), ("Datenbanken", 2), ("Tools", 1)]);

        assert_eq!(
            profile.records("professionalExperience"),
            &[
                Record::new(
                    Some("Seit 04/2021"),
                    None::<String>,
                    "Senior Consultant bei auticon Architektur und Umsetzung von Microservices"
                ),
                Record::new(
                    Some("01/2018"),
                    Some("03/2021"),
                    "Softwareentwickler bei der Beispiel GmbH"
                ),
            ]
        );
        assert_eq!(profile.records("studyProjects").len(), 1);
        assert_eq!(profile.records("studies")[0].description, "Informatik, TU Berlin");
        assert_eq!(
            profile.records("auticonProjects"),
            &[Record::new(Some("06/2021"), None::<String>, "Migration eines Monolithen")]
        );
        assert!(profile.records("projects").is_empty());
        assert_eq!(
            profile.records("certifications"),
            &[
                Record::undated("AWS Solutions Architect"),
                Record::undated("Scrum Master")
            ]
        );
    }

    #[test]
    fn test_json_shape_is_fixed() {
        let profile = parser().parse_text("Name\nCher").unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["firstName"], "Cher");
        assert!(json["lastName"].is_null());
        assert!(json["availability"].is_null());
        assert_eq!(json["technicalSkills"], serde_json::json!([]));
        for field in ParserConfig::default().record_fields() {
            assert_eq!(json[field], serde_json::json!([]), "field {}", field);
        }
    }

    #[test]
    fn test_generic_strategy() {
        let mut config = ParserConfig::default();
        config.strategy = MappingStrategy::Generic;
        let profile = ProfileParser::new(config).unwrap().parse_text(SAMPLE).unwrap();

        assert_eq!(profile.full_name.as_deref(), Some("Max Peter Mustermann"));
        assert_eq!(profile.first_name, None);
        assert!(profile.technical_skills.is_empty());
        assert!(profile
            .qualification
            .as_deref()
            .is_some_and(|q| q.starts_with("Abschluss: M.Sc.")));
        assert!(profile.records("certifications").is_empty());
        assert_eq!(profile.records("professionalExperience").len(), 2);
    }

    #[test]
    fn test_mapping_failure_aborts_document() {
        let text = "Name\nMax Mustermann\nIT-Skills\nBackend: Go\nRust\n";
        match parser().parse_text(text) {
            Err(ExtractorError::Mapping(MapError::MixedSkillsLayout { line })) => {
                assert_eq!(line, "Rust")
            }
            other => panic!("expected mapping error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_headings() {
        let text = "Projekte\n2019 Erstes\nStudium\n2010 X\nProjekte\n2020 Zweites\n";

        let last_wins = parser().parse_text(text).unwrap();
        assert_eq!(last_wins.records("projects").len(), 1);
        assert_eq!(last_wins.records("projects")[0].description, "Zweites");

        let mut config = ParserConfig::default();
        config.duplicate_policy = DuplicatePolicy::Concatenate;
        let joined = ProfileParser::new(config).unwrap().parse_text(text).unwrap();
        let descriptions: Vec<_> = joined
            .records("projects")
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Erstes", "Zweites"]);
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let documents = vec![
            Document::from_text("ok-1", "Name\nAda Lovelace"),
            Document::from_text("broken", "IT-Skills\n: Go"),
            Document::from_text("ok-2", "Name\nAlan Turing"),
        ];
        let outcomes = parser().parse_batch(&documents);

        let ids: Vec<_> = outcomes.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ok-1", "broken", "ok-2"]);
        assert!(outcomes[0].is_ok());
        assert!(matches!(
            outcomes[1].result,
            Err(ExtractorError::Mapping(MapError::EmptySkillCategory { .. }))
        ));
        assert_eq!(
            outcomes[2].result.as_ref().unwrap().last_name.as_deref(),
            Some("Turing")
        );
    }

    #[test]
    fn test_parallel_batch_keeps_input_order() {
        let mut config = ParserConfig::default();
        config.parallel = true;
        let parser = ProfileParser::new(config).unwrap();

        let documents: Vec<_> = (0..32)
            .map(|i| Document::from_text(format!("doc-{}", i), format!("Name\nPerson Nr{}", i)))
            .collect();
        let outcomes = parser.parse_batch(&documents);

        assert_eq!(outcomes.len(), documents.len());
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.id, format!("doc-{}", i));
            let profile = outcome.result.as_ref().unwrap();
            assert_eq!(profile.last_name.as_deref(), Some(format!("Nr{}", i).as_str()));
        }
    }

    #[test]
    fn test_render_then_parse_round_trip() {
        let parser = parser();
        let profile = parser.parse_text(SAMPLE).unwrap();
        let rendered = render_profile(&profile, parser.config());
        let reparsed = parser.parse_text(&rendered).unwrap();
        assert_eq!(reparsed, profile);
    }

    #[test]
    fn test_merge_parsed_profiles() {
        let parser = parser();
        let base = parser
            .parse_text("Name\nMax Mustermann\nProjekte\n2019 Shop")
            .unwrap();
        let extra = parser.parse_text("Projekte\n2021 App").unwrap();

        let merged = merge_profiles(
            serde_json::to_value(&base).unwrap(),
            serde_json::to_value(&extra).unwrap(),
        )
        .unwrap();
        assert_eq!(merged["projects"].as_array().unwrap().len(), 2);
        // Scalars of the extra profile replace the base, nulls included
        assert!(merged["fullName"].is_null());
    }

    #[test]
    fn test_merged_export_feeds_chunker_and_renderer() {
        let parser = parser();
        let parsed = parser
            .parse_text("Name\nMax Mustermann\nProjekte\n2019 Shop")
            .unwrap();
        let export = serde_json::json!({
            "email": "max@example.org",
            "additionalInfo": {"remote": true},
            "preferredWorkingAreas": null,
            "certificates": [{"name": "CKA", "date": "2022", "skills": ["Kubernetes"]}]
        });

        let merged = merge_profiles(serde_json::to_value(&parsed).unwrap(), export).unwrap();
        let profile: CanonicalProfile = serde_json::from_value(merged).unwrap();
        assert_eq!(profile.extras["email"], "max@example.org");

        let chunks = ProfileChunker::from_config(parser.config()).chunk(&profile);
        let kinds: Vec<_> = chunks.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, vec!["projects", "certificates"]);
        assert_eq!(chunks[1].content, "CKA (2022) - Skills: Kubernetes");

        let text = render_profile(&profile, parser.config());
        assert!(text.contains("Zertifikate: CKA (2022)"));
        assert!(text.contains("Projekte\n2019 Shop"));
    }

    #[test]
    fn test_chunk_parsed_profile() {
        let parser = parser();
        let profile = parser.parse_text(SAMPLE).unwrap();
        let chunks = ProfileChunker::from_config(parser.config()).chunk(&profile);

        // 5 records + 2 certificates + 3 skill categories + summary
        assert_eq!(chunks.len(), 11);
        assert_eq!(chunks[0].kind, "auticonProjects");
        assert_eq!(chunks[0].content, "06/2021 - N/A - Migration eines Monolithen");
        assert!(chunks.iter().all(|c| c.source == "Max Peter Mustermann"));
        assert_eq!(chunks.last().unwrap().kind, "professionalSummary");
    }

    #[test]
    fn test_english_preset() {
        let parser = ProfileParser::new(ParserConfig::english()).unwrap();
        let profile = parser
            .parse_text(
                "Name\nJane Doe\nSkills\nRust, Go\nProfessional Experience\nSince 2020 Lead present\n2015 - present Volunteer\n",
            )
            .unwrap();
        assert_eq!(profile.technical_skills[0].category.name, "General Skills");
        let experience = profile.records("professionalExperience");
        assert_eq!(experience[0].start_date.as_deref(), Some("Since 2020"));
        assert_eq!(experience[1].end_date, None);
        assert_eq!(experience[1].description, "Volunteer");
    }
}
