use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calendar::CalendarDate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Semester ends ({end}) before it starts ({start})")]
    InvalidSemester { start: CalendarDate, end: CalendarDate },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub semester: SemesterConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemesterConfig {
    /// Day that opens academic week 1.
    pub start: CalendarDate,
    pub end: CalendarDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub groups: Vec<String>,
    pub theme: String,
    pub show_week_numbers: bool,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("teacher-schedule")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.semester.end < self.semester.start {
            return Err(ConfigError::InvalidSemester {
                start: self.semester.start,
                end: self.semester.end,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let start = CalendarDate::from_ymd(2025, 9, 1).expect("1 September is a valid date");
        let end = CalendarDate::from_ymd(2025, 12, 31).expect("31 December is a valid date");

        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                timeout_secs: 10,
            },
            semester: SemesterConfig { start, end },
            ui: UiConfig {
                groups: (301..=310).map(|n| format!("Д-Э {}", n)).collect(),
                theme: "default".to_string(),
                show_week_numbers: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_semester_starts_on_first_of_september() {
        let config = Config::default();
        assert_eq!(config.semester.start, CalendarDate::from_ymd(2025, 9, 1).unwrap());
    }

    #[test]
    fn default_config_lists_ten_groups() {
        let config = Config::default();
        assert_eq!(config.ui.groups.len(), 10);
        assert_eq!(config.ui.groups[0], "Д-Э 301");
        assert_eq!(config.ui.groups[9], "Д-Э 310");
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [api]
            base_url = "https://journal.example.org"
            timeout_secs = 5

            [semester]
            start = "2026-02-09"
            end = "2026-06-30"

            [ui]
            groups = ["Д-Э 401", "Д-Э 402"]
            theme = "nord"
            show_week_numbers = false
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://journal.example.org");
        assert_eq!(config.semester.start, CalendarDate::from_ymd(2026, 2, 9).unwrap());
        assert_eq!(config.ui.groups, vec!["Д-Э 401", "Д-Э 402"]);
        assert!(!config.ui.show_week_numbers);
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn semester_ending_before_start_is_rejected() {
        let mut config = Config::default();
        config.semester.end = CalendarDate::from_ymd(2025, 8, 1).unwrap();
        let content = toml::to_string_pretty(&config).unwrap();

        let result = Config::from_toml(&content);

        assert!(matches!(result, Err(ConfigError::InvalidSemester { .. })));
    }

    #[test]
    fn load_or_create_writes_defaults_then_reads_them_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_or_create_at(&path).unwrap();
        assert!(path.exists());

        let loaded = Config::load_or_create_at(&path).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn load_reports_parse_errors_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = 5\n").unwrap();

        let result = Config::load_or_create_at(&path);

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
