use super::backend::LayoutBackend;
use crate::error::{GridError, Result};
use crate::record::LayoutRecord;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const LAYOUT_FILE: &str = "grid.json";
pub const HIDDEN_FILE: &str = "hidden.json";

/// Filesystem backend rooted at the data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout_path(&self) -> PathBuf {
        self.root.join(LAYOUT_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GridError::Io)?;
        }
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(GridError::Serialization)?;
        write_atomic(&self.root.join(name), content.as_bytes())
    }
}

/// Writes `content` next to `target` under a temp name, then renames it over
/// `target`. The temp file is removed if either step fails.
pub(crate) fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let stem = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));

    let written = fs::write(&tmp, content).and_then(|_| fs::rename(&tmp, target));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(GridError::Io(e));
    }
    Ok(())
}

impl LayoutBackend for FsBackend {
    fn load_layout(&self) -> Result<Option<Vec<LayoutRecord>>> {
        let path = self.layout_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(GridError::Io)?;
        let records: Vec<LayoutRecord> =
            serde_json::from_str(&content).map_err(GridError::Serialization)?;
        Ok(Some(records))
    }

    fn save_layout(&self, records: &[LayoutRecord]) -> Result<()> {
        self.write_json(LAYOUT_FILE, records)
    }

    fn clear_layout(&self) -> Result<()> {
        let path = self.layout_path();
        if path.exists() {
            fs::remove_file(path).map_err(GridError::Io)?;
        }
        Ok(())
    }

    fn load_hidden(&self) -> Result<BTreeSet<String>> {
        let path = self.root.join(HIDDEN_FILE);
        if !path.exists() {
            return Ok(BTreeSet::new());
        }
        let content = fs::read_to_string(path).map_err(GridError::Io)?;
        let hidden: BTreeSet<String> =
            serde_json::from_str(&content).map_err(GridError::Serialization)?;
        Ok(hidden)
    }

    fn save_hidden(&self, hidden: &BTreeSet<String>) -> Result<()> {
        self.write_json(HIDDEN_FILE, hidden)
    }
}
