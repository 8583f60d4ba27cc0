// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use chrono::TimeDelta;
use std::path::{Path, PathBuf};

use crate::models::PaperWidth;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Recibo", "recibo"));

pub const DEFAULT_GENERATION_DELAY_MS: u64 = 1000;
/// One day.
pub const MAX_GENERATION_DELAY_MS: u64 = 86_400_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paper_width: PaperWidth,
    /// Simulated processing time between "generate" and the finished receipt.
    pub generation_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paper_width: PaperWidth::default(),
            generation_delay_ms: DEFAULT_GENERATION_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// The configured delay, capped at [`MAX_GENERATION_DELAY_MS`].
    pub fn generation_delay(&self) -> TimeDelta {
        let ms = self.generation_delay_ms.min(MAX_GENERATION_DELAY_MS);
        TimeDelta::milliseconds(ms as i64)
    }

    pub fn validate(&self) -> Result<()> {
        if self.generation_delay_ms > MAX_GENERATION_DELAY_MS {
            bail!(
                "generation_delay_ms is {} but may be at most {} (one day)",
                self.generation_delay_ms,
                MAX_GENERATION_DELAY_MS
            );
        }
        Ok(())
    }
}

/// Where the config was read from, for `recibo config`.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: Option<PathBuf>,
    pub found: bool,
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.toml"))
}

/// Reads `explicit` if given (it must exist), otherwise the platform config
/// file if there is one. No file means defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let config = read(path)?;
        return Ok(LoadedConfig {
            config,
            path: Some(path.to_path_buf()),
            found: true,
        });
    }
    let path = config_path();
    match path.as_deref() {
        Some(p) if p.is_file() => Ok(LoadedConfig {
            config: read(p)?,
            path,
            found: true,
        }),
        _ => Ok(LoadedConfig {
            config: AppConfig::default(),
            path,
            found: false,
        }),
    }
}

fn read(path: &Path) -> Result<AppConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let cfg: AppConfig = toml::from_str(&raw)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "paper_width = \"58mm\"\ngeneration_delay_ms = 250\n").unwrap();
        let loaded = load(Some(&path)).unwrap();
        assert!(loaded.found);
        assert_eq!(loaded.config.paper_width, PaperWidth::Mm58);
        assert_eq!(loaded.config.generation_delay(), TimeDelta::milliseconds(250));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "generation_delay_ms = 0\n").unwrap();
        let cfg = load(Some(&path)).unwrap().config;
        assert_eq!(cfg.paper_width, PaperWidth::Mm80);
        assert_eq!(cfg.generation_delay_ms, 0);
    }

    #[test]
    fn bad_files_are_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "paper_width = \"A4\"\n").unwrap();
        assert!(load(Some(&path)).is_err());
        assert!(load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn delays_beyond_one_day_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "generation_delay_ms = 10000000000000000\n").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("at most 86400000"));

        fs::write(&path, "generation_delay_ms = 86400000\n").unwrap();
        let cfg = load(Some(&path)).unwrap().config;
        assert_eq!(cfg.generation_delay(), TimeDelta::days(1));
    }

    #[test]
    fn oversized_delays_are_capped() {
        let cfg = AppConfig {
            generation_delay_ms: u64::MAX,
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());
        assert_eq!(cfg.generation_delay(), TimeDelta::days(1));
    }
}
