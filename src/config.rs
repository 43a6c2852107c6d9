//! `food-delivery.toml`: which database file the CLI works on
//!
//! ```toml
//! database = "data/food_delivery.db"
//! ```
//!
//! A relative `database` is taken from the directory holding the config file,
//! so the same file works from any working directory.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "food-delivery.toml";

const DATA_DIR: &str = ".food-delivery";
const DATABASE_FILE: &str = "food_delivery.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FoodDeliveryConfig {
    pub database: Option<PathBuf>,
}

/// Where a config file loaded from, and what it said
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: FoodDeliveryConfig,
}

impl FoodDeliveryConfig {
    /// Read the config at `path`. A missing file is not an error.
    pub fn load(path: &Path) -> anyhow::Result<Option<LoadedConfig>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };

        let config = toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(Some(LoadedConfig {
            path: path.to_path_buf(),
            config,
        }))
    }

    /// Write this config to `path`, refusing to replace an existing file unless `overwrite`
    pub fn save(&self, path: &Path, overwrite: bool) -> anyhow::Result<()> {
        if path.exists() && !overwrite {
            anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl LoadedConfig {
    /// The configured database, resolved against the config file's directory
    pub fn database(&self) -> Option<PathBuf> {
        let database = self.config.database.as_ref()?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(dir.join(database))
    }
}

/// `--config` if given, else `food-delivery.toml` in the working directory
pub fn config_path(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// `--database`, then the config file, then `.food-delivery/food_delivery.db` under `base`
pub fn database_path(flag: Option<&Path>, loaded: Option<&LoadedConfig>, base: &Path) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| loaded.and_then(LoadedConfig::database))
        .unwrap_or_else(|| base.join(DATA_DIR).join(DATABASE_FILE))
}

/// Create the directory a database file will live in
pub fn prepare_database_dir(database: &Path) -> anyhow::Result<()> {
    match database.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display())),
        _ => Ok(()),
    }
}
