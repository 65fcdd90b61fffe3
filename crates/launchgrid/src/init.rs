//! # Context Initialization
//!
//! Everything a client needs before its first command: the data directory, the
//! resolved configuration, the discovered catalog and a loaded [`GridApi`].
//!
//! ## Data Directory
//!
//! 1. An explicit override passed by the caller.
//! 2. The `LAUNCHGRID_HOME` environment variable (used by tests to isolate state).
//! 3. The OS data directory from the `directories` crate.
//!
//! ## Catalog
//!
//! Discovery is external: the catalog is read from a JSON manifest. The manifest
//! path comes from the caller, then the `catalog` config key, then
//! `<data dir>/catalog.json`. A missing manifest is an empty catalog.

use crate::api::GridApi;
use crate::catalog::Catalog;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::store::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "LAUNCHGRID_HOME";
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

pub struct GridContext {
    pub api: GridApi<FsBackend>,
    pub config: GridConfig,
    pub data_dir: PathBuf,
}

pub fn data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "launchgrid", "launchgrid")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| GridError::Config("Could not determine a data directory".to_string()))
}

fn catalog_path(data_dir: &Path, config: &GridConfig, catalog_override: Option<PathBuf>) -> PathBuf {
    catalog_override
        .or_else(|| config.catalog.clone())
        .unwrap_or_else(|| data_dir.join(DEFAULT_CATALOG_FILE))
}

/// Resolves paths and config, reads the catalog and loads the layout.
pub fn initialize(
    data_override: Option<PathBuf>,
    catalog_override: Option<PathBuf>,
) -> Result<GridContext> {
    let data_dir = data_dir(data_override)?;
    let config = GridConfig::load(&data_dir)?;
    let catalog_file = catalog_path(&data_dir, &config, catalog_override);
    debug!(
        data_dir = %data_dir.display(),
        catalog = %catalog_file.display(),
        apps_per_page = config.apps_per_page(),
        "initializing"
    );

    let catalog = Catalog::from_manifest(&catalog_file)?;
    let mut api = GridApi::new(FsBackend::new(data_dir.clone()), &config);
    api.load(catalog)?;

    Ok(GridContext {
        api,
        config,
        data_dir,
    })
}
