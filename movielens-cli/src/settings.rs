//! Application settings (database location, display limits).
//!
//! The settings file lives at `~/.config/movielens/settings.toml`. Every
//! field is optional; a missing file is the same as an empty one.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

/// Database file used when nothing else names one.
pub(crate) const DEFAULT_DB_FILE: &str = "MovieLens.db";

/// Environment variable that overrides the settings file.
pub(crate) const DB_ENV_VAR: &str = "MOVIELENS_DB";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub database: DatabaseSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DatabaseSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DisplaySettings {
    /// Searches matching more movies than this are not listed.
    pub max_search_results: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_search_results: 100,
        }
    }
}

/// Canonical path to the settings file: `~/.config/movielens/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movielens").join("settings.toml")
}

/// Load settings from `path`, falling back to defaults if the file is absent.
pub(crate) fn load_settings(path: &Path) -> Result<Settings, CliError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_settings(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `MOVIELENS_DB` environment variable
/// 3. `database.path` in `settings.toml`
/// 4. `MovieLens.db` in the current directory
pub(crate) fn resolve_database_path(
    cli_override: Option<PathBuf>,
    env_override: Option<PathBuf>,
    settings: &Settings,
) -> PathBuf {
    let given = |p: &PathBuf| !p.as_os_str().is_empty();
    cli_override
        .filter(given)
        .or(env_override.filter(given))
        .or_else(|| settings.database.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_use_defaults() {
        let s = parse_settings("").unwrap();
        assert!(s.database.path.is_none());
        assert_eq!(s.display.max_search_results, 100);
    }

    #[test]
    fn test_full_settings() {
        let s = parse_settings(
            "[database]\npath = \"/data/movies.db\"\n\n[display]\nmax_search_results = 25\n",
        )
        .unwrap();
        assert_eq!(s.database.path, Some(PathBuf::from("/data/movies.db")));
        assert_eq!(s.display.max_search_results, 25);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_settings("[database]\nfile = \"x.db\"\n").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(s.display.max_search_results, 100);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display\nmax_search_results = ").unwrap();
        assert!(matches!(load_settings(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_resolve_priority() {
        let settings = parse_settings("[database]\npath = \"from-settings.db\"\n").unwrap();
        assert_eq!(
            resolve_database_path(
                Some("cli.db".into()),
                Some("env.db".into()),
                &settings
            ),
            PathBuf::from("cli.db")
        );
        assert_eq!(
            resolve_database_path(None, Some("env.db".into()), &settings),
            PathBuf::from("env.db")
        );
        assert_eq!(
            resolve_database_path(None, None, &settings),
            PathBuf::from("from-settings.db")
        );
        assert_eq!(
            resolve_database_path(None, None, &Settings::default()),
            PathBuf::from(DEFAULT_DB_FILE)
        );
    }

    #[test]
    fn test_empty_env_value_ignored() {
        assert_eq!(
            resolve_database_path(None, Some(PathBuf::new()), &Settings::default()),
            PathBuf::from(DEFAULT_DB_FILE)
        );
    }
}
