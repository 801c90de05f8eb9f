use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::patcher::{DEFAULT_FROM_TOOLSET, DEFAULT_TO_TOOLSET};

/// Vendored URG library VS2019 projects, relative to the repo root
pub const DEFAULT_ROOT: &str = "external/urg_library/current/vs2019";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: PathBuf,
    pub extension: String,
    pub from_toolset: String,
    pub to_toolset: String,
    pub count_unmatched_as_failure: bool,
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: "vcxproj".to_string(),
            from_toolset: DEFAULT_FROM_TOOLSET.to_string(),
            to_toolset: DEFAULT_TO_TOOLSET.to_string(),
            count_unmatched_as_failure: true,
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.root, PathBuf::from("external/urg_library/current/vs2019"));
        assert_eq!(config.extension, "vcxproj");
        assert_eq!(config.from_toolset, "v142");
        assert_eq!(config.to_toolset, "v143");
        assert!(config.count_unmatched_as_failure);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_load_explicit_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toolfix.yml");
        std::fs::write(&path, "root: third_party/vs\nfrom_toolset: v141\ncount_unmatched_as_failure: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.root, PathBuf::from("third_party/vs"));
        assert_eq!(config.from_toolset, "v141");
        assert_eq!(config.to_toolset, "v143");
        assert!(!config.count_unmatched_as_failure);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_explicit_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "dry_run: [not, a, bool]\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
