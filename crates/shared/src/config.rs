//! Configuration types for SICEI

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

fn default_student_id_year() -> u16 {
    2025
}

fn default_id_max_attempts() -> u32 {
    10
}

fn default_passing_grade() -> f64 {
    70.0
}

fn default_page_size() -> usize {
    25
}

fn default_data_file() -> PathBuf {
    PathBuf::from("sicei-data.json")
}

/// Application settings. Every field has a default, so an empty file
/// (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Enrolment year encoded in new student ids
    #[serde(default = "default_student_id_year")]
    pub student_id_year: u16,

    /// Candidates tried before id allocation gives up
    #[serde(default = "default_id_max_attempts")]
    pub id_max_attempts: u32,

    /// Lowest grade that keeps a student regular
    #[serde(default = "default_passing_grade")]
    pub passing_grade: f64,

    /// Page size used when a listing does not ask for one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// JSON snapshot the records are loaded from and saved to
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            student_id_year: default_student_id_year(),
            id_max_attempts: default_id_max_attempts(),
            passing_grade: default_passing_grade(),
            default_page_size: default_page_size(),
            data_file: default_data_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON or YAML file, picked by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "id_max_attempts must be at least 1".to_string(),
            ));
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.passing_grade) {
            return Err(ConfigError::Invalid(format!(
                "passing_grade must be within 0..=100, got {}",
                self.passing_grade
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{ "student_id_year": 2031, "passing_grade": 60 }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.student_id_year, 2031);
        assert_eq!(config.passing_grade, 60.0);
        assert_eq!(config.id_max_attempts, 10);
        assert_eq!(config.default_page_size, 25);
    }

    #[test]
    fn test_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "id_max_attempts: 3\ndata_file: /tmp/school.json").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.id_max_attempts, 3);
        assert_eq!(config.data_file, PathBuf::from("/tmp/school.json"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "default_page_size": 0 }}"#).unwrap();

        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
