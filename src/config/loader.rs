//! Configuration loading for `sprites.toml`
//!
//! A config file is only read when its path is given explicitly; without one
//! the built-in defaults apply. Provides functions to load, check and merge
//! configuration.

use super::schema::SpritesConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse sprites.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", bullet_list(.0))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output root
    pub out: Option<PathBuf>,
    /// Number of parallel jobs
    pub jobs: Option<usize>,
    /// Generate only these characters
    pub characters: Option<Vec<String>>,
}

fn bullet_list(errors: &[String]) -> String {
    errors.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n")
}

/// Load and validate configuration from a sprites.toml file.
///
/// ```no_run
/// use shimeji_sprites::config::loader::load_config;
/// use std::path::Path;
///
/// let config = load_config(Path::new("assets/sprites.toml"))?;
/// # Ok::<(), shimeji_sprites::config::loader::ConfigError>(())
/// ```
pub fn load_config(path: &Path) -> Result<SpritesConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SpritesConfig = toml::from_str(&contents)?;
    check(&config)?;
    Ok(config)
}

/// Turn validation errors into a [`ConfigError::Validation`].
pub fn check(config: &SpritesConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()))
    }
}

/// Configuration used when no config file is given.
pub fn default_config() -> SpritesConfig {
    SpritesConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut SpritesConfig, overrides: &CliOverrides) {
    if let Some(ref out) = overrides.out {
        config.output.dir = out.clone();
    }

    if let Some(jobs) = overrides.jobs {
        config.build.jobs = Some(jobs);
    }

    if let Some(ref characters) = overrides.characters {
        config.build.characters = Some(characters.clone());
    }
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
