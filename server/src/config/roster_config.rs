use config::{Config, ConfigError, File};
use models::student::Student;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    pub students: Vec<Student>,
}

impl RosterConfig {
    pub fn new(config_path: &PathBuf) -> Result<Self, ConfigError> {
        let mut cfg = Config::new();
        cfg.merge(File::with_name(config_path.to_str().unwrap()))?;

        cfg.try_into()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::roster_config::RosterConfig;

    #[test]
    fn test_roster_file_parses_students() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(
            &path,
            "[[students]]\nroll_number = \"41\"\nname = \"Alice\"\n\n\
             [[students]]\nroll_number = \"42\"\nname = \"Bob\"\n",
        )
        .unwrap();

        let roster = RosterConfig::new(&path).unwrap();

        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.students[0].roll_number, "41");
        assert_eq!(roster.students[1].name, "Bob");
    }
}
