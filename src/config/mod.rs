//! Configuration module
//!
//! Handles loading and saving of moodtracker.toml configuration files.
//! Defines Config and Display types.

mod types;

pub use types::{Config, Display};

use crate::error::{MoodError, Result};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "moodtracker.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MoodError::Config(format!(
            "Cannot read config from '{}': {}. Run 'moodtracker config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| MoodError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Pick the configuration for this run.
///
/// An explicit path must exist. Without one, `moodtracker.toml` is used when
/// present and the built-in defaults otherwise.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(default_path)
            } else {
                log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("moodtracker.toml");

        let config = Config::default();
        save(&config, &config_path).unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded.username_max_len, 31);
        assert!(loaded.display.clear_screen);
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/moodtracker.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Run 'moodtracker config init'"));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/moodtracker.toml");

        save(&Config::default(), &config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("custom.toml");
        std::fs::write(&config_path, "profile_file = \"me.conf\"\n").unwrap();

        let config = resolve(Some(&config_path)).unwrap();
        assert_eq!(config.profile_file, Path::new("me.conf"));
    }

    #[test]
    fn test_resolve_explicit_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let result = resolve(Some(&temp.path().join("absent.toml")));
        assert!(matches!(result, Err(MoodError::Config(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("broken.toml");
        std::fs::write(&config_path, "username_max_len = \"many\"").unwrap();

        assert!(matches!(load(&config_path), Err(MoodError::TomlParse(_))));
    }
}
