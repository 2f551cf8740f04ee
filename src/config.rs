//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/landtree/landtree.toml`
//! 3. Environment variables: `LANDTREE_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Merged settings controlling where the input tables are read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Company relation table (company_id,name,parent)
    pub relations: String,
    /// Land ownership table (land_id,company_id)
    pub ownership: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relations: "data/company_relations.csv".into(),
            ownership: "data/land_ownership.csv".into(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("LANDTREE"));
        builder.build()?.try_deserialize()
    }

    /// Location of the global config file, if a config directory exists.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "landtree").map(|dirs| dirs.config_dir().join("landtree.toml"))
    }

    /// Relations table path with `~` and `$VAR` expanded.
    pub fn relations_path(&self) -> PathBuf {
        PathBuf::from(expand_path(&self.relations))
    }

    /// Ownership table path with `~` and `$VAR` expanded.
    pub fn ownership_path(&self) -> PathBuf {
        PathBuf::from(expand_path(&self.ownership))
    }
}

/// Expand environment variables and `~` in a path string.
///
/// Supports `$VAR`, `${VAR}` and `~` via shellexpand; unresolvable
/// references leave the input unchanged.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_overrides_when_defaulting_then_points_at_data_dir() {
        let settings = Settings::default();
        assert_eq!(settings.relations, "data/company_relations.csv");
        assert_eq!(settings.ownership, "data/land_ownership.csv");
    }

    #[test]
    fn given_plain_relative_path_when_expanding_then_unchanged() {
        assert_eq!(expand_path("data/company_relations.csv"), "data/company_relations.csv");
    }

    #[test]
    fn given_global_config_path_when_resolved_then_ends_with_toml_file() {
        if let Some(path) = Settings::global_config_path() {
            assert!(path.ends_with("landtree.toml"));
        }
    }
}
