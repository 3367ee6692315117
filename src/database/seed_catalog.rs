use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::config::ConfigError;
use crate::models::{Activity, SeedActivity};

const BUILTIN_CATALOG: &str = include_str!("../../data/activities.json");

pub fn builtin_seed() -> Result<Vec<SeedActivity>, ConfigError> {
    parse_seed(BUILTIN_CATALOG)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<SeedActivity>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&raw)
}

pub fn parse_seed(raw: &str) -> Result<Vec<SeedActivity>, ConfigError> {
    Ok(serde_json::from_str::<Vec<SeedActivity>>(raw)?)
}

/// Turns seed rows into the keyed catalog, preserving row order.
pub fn build_catalog(seed: Vec<SeedActivity>) -> Result<IndexMap<String, Activity>, ConfigError> {
    let mut catalog = IndexMap::with_capacity(seed.len());
    for row in seed {
        if row.max_participants == 0 {
            return Err(ConfigError::ZeroCapacity(row.name));
        }
        if catalog.contains_key(&row.name) {
            return Err(ConfigError::DuplicateActivity(row.name));
        }
        catalog.insert(row.name.clone(), Activity::from(row));
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_the_seven_activities_in_order() {
        let catalog = build_catalog(builtin_seed().unwrap()).unwrap();
        let names: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "Chess Club",
                "Programming Class",
                "Gym Class",
                "Soccer Team",
                "Basketball Club",
                "Art Club",
                "Drama Club",
            ]
        );

        let chess = &catalog["Chess Club"];
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(chess.max_participants, 12);
        let participants: Vec<&str> = chess.participants.iter().map(String::as_str).collect();
        assert_eq!(
            participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let raw = r#"[
            {"name": "Band", "description": "", "schedule": "", "max_participants": 3},
            {"name": "Band", "description": "", "schedule": "", "max_participants": 4}
        ]"#;
        let err = build_catalog(parse_seed(raw).unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateActivity(name) if name == "Band"));
    }

    #[test]
    fn names_differing_in_case_or_spacing_are_distinct() {
        let raw = r#"[
            {"name": "Band", "description": "", "schedule": "", "max_participants": 3},
            {"name": "band", "description": "", "schedule": "", "max_participants": 3},
            {"name": "Band ", "description": "", "schedule": "", "max_participants": 3}
        ]"#;
        let catalog = build_catalog(parse_seed(raw).unwrap()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn rejects_zero_capacity() {
        let raw = r#"[{"name": "Band", "description": "", "schedule": "", "max_participants": 0}]"#;
        let err = build_catalog(parse_seed(raw).unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity(_)));
    }

    #[test]
    fn loads_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Robotics", "description": "Build robots", "schedule": "Mondays", "max_participants": 8, "participants": ["ada@mergington.edu"]}}]"#
        )
        .unwrap();

        let catalog = build_catalog(load_seed_file(file.path()).unwrap()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog["Robotics"].has_participant("ada@mergington.edu"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::SeedIo { .. }));
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let err = parse_seed("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::SeedFormat(_)));
    }
}
