// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "p3d-export.toml";

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving the macro files and the scene file
    pub output_dir: PathBuf,
    /// Scene file name, `.macro` is appended when it has no extension
    pub scene_filename: String,
    /// Verbose output
    pub verbose: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            scene_filename: "scene.macro".to_string(),
            verbose: false,
        }
    }
}

impl ExportConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: ExportConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `P3D_*` overrides from a variable lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(output_dir) = lookup("P3D_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(filename) = lookup("P3D_SCENE_FILENAME") {
            self.scene_filename = filename;
        }

        if let Some(verbose) = lookup("P3D_VERBOSE") {
            self.verbose = parse_flag(&verbose);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Full path of the scene file
    pub fn scene_path(&self) -> PathBuf {
        self.output_dir.join(crate::io::scene_filename(&self.scene_filename))
    }
}

/// Truthy environment flag: `true`, `1`, `yes` or `on`, case-insensitive
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.scene_path(), PathBuf::from("./scene.macro"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "output_dir = \"out\"\n")?;

        let config = ExportConfig::from_file(&path)?;
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.scene_filename, "scene.macro");
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(CONFIG_FILE);
        let config = ExportConfig {
            output_dir: PathBuf::from("build/move3d"),
            scene_filename: "robot.p3d".to_string(),
            verbose: true,
        };

        config.save(&path)?;
        assert_eq!(ExportConfig::from_file(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("P3D_OUTPUT_DIR", "/tmp/p3d"),
            ("P3D_SCENE_FILENAME", "world"),
            ("P3D_VERBOSE", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = ExportConfig::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.scene_path(), PathBuf::from("/tmp/p3d/world.macro"));
        assert!(config.verbose);
    }

    #[test]
    fn test_verbose_flag_values() {
        for value in ["true", "1", "YES", " on "] {
            let mut config = ExportConfig::default();
            config.apply_env(|key| (key == "P3D_VERBOSE").then(|| value.to_string()));
            assert!(config.verbose, "{:?} should enable verbose", value);
        }

        for value in ["false", "0", "", "maybe"] {
            let mut config = ExportConfig {
                verbose: true,
                ..ExportConfig::default()
            };
            config.apply_env(|key| (key == "P3D_VERBOSE").then(|| value.to_string()));
            assert!(!config.verbose, "{:?} should disable verbose", value);
        }
    }

    #[test]
    fn test_invalid_toml_is_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "verbose = [")?;
        assert!(ExportConfig::from_file(&path).is_err());
        Ok(())
    }
}
