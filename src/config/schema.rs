//! Configuration schema types for `sprites.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::characters::Character;

/// Where sprites are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output root; one subdirectory per character is created beneath it
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("chrome-extension/characters")
}

/// Generation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Number of parallel jobs (default: available parallelism)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    /// Characters to generate, by name (default: all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<String>>,
}

/// Complete sprites.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "build.jobs")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sprites.toml: '{}' {}", self.field, self.message)
    }
}

impl SpritesConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.output.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "output.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.build.jobs == Some(0) {
            errors.push(ConfigValidationError {
                field: "build.jobs".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if let Some(names) = &self.build.characters {
            if names.is_empty() {
                errors.push(ConfigValidationError {
                    field: "build.characters".to_string(),
                    message: "must list at least one character".to_string(),
                });
            }
            for name in names {
                if let Err(e) = name.parse::<Character>() {
                    errors.push(ConfigValidationError {
                        field: "build.characters".to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Characters to generate, in the listed order with repeats dropped.
    ///
    /// Unknown names are skipped; [`validate`](Self::validate) reports them.
    pub fn selected_characters(&self) -> Vec<Character> {
        match &self.build.characters {
            None => Character::ALL.to_vec(),
            Some(names) => {
                let mut selected = Vec::new();
                for character in names.iter().filter_map(|n| n.parse::<Character>().ok()) {
                    if !selected.contains(&character) {
                        selected.push(character);
                    }
                }
                selected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: SpritesConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("chrome-extension/characters"));
        assert_eq!(config.build.jobs, None);
        assert_eq!(config.selected_characters(), Character::ALL.to_vec());
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[output]
dir = "dist/sprites"

[build]
jobs = 4
characters = ["ghost", "Bunny"]
"#;
        let config: SpritesConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("dist/sprites"));
        assert_eq!(config.build.jobs, Some(4));
        assert_eq!(config.selected_characters(), vec![Character::Ghost, Character::Bunny]);
        assert!(config.is_valid());
    }

    #[test]
    fn test_selected_characters_drops_repeats() {
        let mut config = SpritesConfig::default();
        config.build.characters = Some(vec!["blob".into(), "kitten".into(), "blob".into()]);
        assert_eq!(config.selected_characters(), vec![Character::Blob, Character::Kitten]);
    }

    #[test]
    fn test_validation_zero_jobs() {
        let mut config = SpritesConfig::default();
        config.build.jobs = Some(0);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "build.jobs");
    }

    #[test]
    fn test_validation_empty_dir() {
        let mut config = SpritesConfig::default();
        config.output.dir = PathBuf::new();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.dir");
    }

    #[test]
    fn test_validation_unknown_character() {
        let mut config = SpritesConfig::default();
        config.build.characters = Some(vec!["bunny".into(), "dragon".into()]);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("dragon"));
        assert_eq!(config.selected_characters(), vec![Character::Bunny]);
    }

    #[test]
    fn test_validation_empty_character_list() {
        let mut config = SpritesConfig::default();
        config.build.characters = Some(vec![]);
        assert!(!config.is_valid());
    }

    #[test]
    fn test_negative_jobs_is_parse_error() {
        let result: Result<SpritesConfig, _> = toml::from_str("[build]\njobs = -1\n");
        assert!(result.is_err());
    }
}
