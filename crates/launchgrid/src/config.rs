//! # Configuration
//!
//! Launchgrid configuration is managed by [`confique`], which layers values from
//! environment variables, a TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `LAUNCHGRID_COLUMNS`, `LAUNCHGRID_ROWS`,
//!    `LAUNCHGRID_DROP_DELAY_MS`, `LAUNCHGRID_CATALOG`.
//! 2. **Config file**: `<data dir>/launchgrid.toml`, ignored when absent.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Range | Description |
//! |-----|---------|-------|-------------|
//! | `columns` | `7` | 4–12 | Grid columns per page |
//! | `rows` | `5` | 3–10 | Grid rows per page |
//! | `drop_delay_ms` | `500` | 0–3000 | Settle delay before a same-page reorder |
//! | `folder_name` | `New Folder` | | Name given to folders created by a drop |
//! | `export_file_name` | `layout.json` | | File written by export, read by import |
//! | `catalog` | none | | Manifest of discovered apps |
//!
//! Out-of-range values are clamped when read through the accessors, never rejected.

use crate::error::{GridError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "launchgrid.toml";

const COLUMNS: RangeInclusive<usize> = 4..=12;
const ROWS: RangeInclusive<usize> = 3..=10;
const DROP_DELAY_MS: RangeInclusive<u64> = 0..=3000;

/// Configuration for launchgrid, stored in `launchgrid.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Grid columns per page.
    #[config(env = "LAUNCHGRID_COLUMNS", default = 7)]
    pub columns: usize,

    /// Grid rows per page.
    #[config(env = "LAUNCHGRID_ROWS", default = 5)]
    pub rows: usize,

    /// Milliseconds a drag must rest on a neighbour before it is reordered.
    #[config(env = "LAUNCHGRID_DROP_DELAY_MS", default = 500)]
    pub drop_delay_ms: u64,

    #[config(default = "New Folder")]
    pub folder_name: String,

    #[config(default = "layout.json")]
    pub export_file_name: String,

    /// JSON manifest of discovered apps.
    #[config(env = "LAUNCHGRID_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 5,
            drop_delay_ms: 500,
            folder_name: "New Folder".to_string(),
            export_file_name: "layout.json".to_string(),
            catalog: None,
        }
    }
}

fn clamp<T: Ord + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    value.clamp(*range.start(), *range.end())
}

impl GridConfig {
    /// Loads env, then `<dir>/launchgrid.toml`, then defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| GridError::Config(e.to_string()))
    }

    pub fn columns(&self) -> usize {
        clamp(self.columns, &COLUMNS)
    }

    pub fn rows(&self) -> usize {
        clamp(self.rows, &ROWS)
    }

    pub fn apps_per_page(&self) -> usize {
        self.columns() * self.rows()
    }

    pub fn drop_delay(&self) -> Duration {
        Duration::from_millis(clamp(self.drop_delay_ms, &DROP_DELAY_MS))
    }

    /// Folder name for new folders; blank values fall back to the default.
    pub fn folder_name(&self) -> &str {
        let name = self.folder_name.trim();
        if name.is_empty() {
            crate::drag::DEFAULT_FOLDER_NAME
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.apps_per_page(), 35);
        assert_eq!(config.drop_delay(), Duration::from_millis(500));
        assert_eq!(config.folder_name(), "New Folder");
        assert_eq!(config.export_file_name, "layout.json");
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_values_are_clamped() {
        let config = GridConfig {
            columns: 40,
            rows: 1,
            drop_delay_ms: 10_000,
            ..Default::default()
        };
        assert_eq!(config.columns(), 12);
        assert_eq!(config.rows(), 3);
        assert_eq!(config.apps_per_page(), 36);
        assert_eq!(config.drop_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn test_blank_folder_name_falls_back() {
        let config = GridConfig {
            folder_name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.folder_name(), "New Folder");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "columns = 4\nrows = 3\nfolder_name = \"Stuff\"\n",
        )
        .unwrap();
        let config = GridConfig::load(dir.path()).unwrap();
        assert_eq!(config.columns, 4);
        assert_eq!(config.rows, 3);
        assert_eq!(config.folder_name(), "Stuff");
        assert_eq!(config.export_file_name, "layout.json");
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "columns = \"many\"\n").unwrap();
        let err = GridConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }
}
