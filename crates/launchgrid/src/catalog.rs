//! # Catalog
//!
//! The discovered item set handed in by whatever scans the system for launchable
//! items. The layout engine never discovers anything itself: it only matches
//! persisted records against this set by external reference (`path`).
//!
//! A catalog can be built in code or read from a JSON manifest:
//!
//! ```json
//! [{"path": "/Applications/Mail.app", "name": "Mail",
//!   "last_opened": "2024-05-01T10:00:00Z", "installed": null}]
//! ```
//!
//! Duplicate paths keep the first entry.

use crate::error::{GridError, Result};
use crate::model::{AppItem, Folder, GridItem};
use crate::record::{AppRecord, LayoutRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredApp {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub last_opened: Option<DateTime<Utc>>,
    #[serde(default)]
    pub installed: Option<DateTime<Utc>>,
}

impl DiscoveredApp {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            last_opened: None,
            installed: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    apps: Vec<DiscoveredApp>,
    by_path: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(discovered: impl IntoIterator<Item = DiscoveredApp>) -> Self {
        let mut catalog = Self::default();
        for app in discovered {
            if catalog.by_path.contains_key(&app.path) {
                continue;
            }
            catalog.by_path.insert(app.path.clone(), catalog.apps.len());
            catalog.apps.push(app);
        }
        catalog
    }

    /// Reads a manifest file. A missing file yields an empty catalog.
    pub fn from_manifest<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(GridError::Io)?;
        let apps: Vec<DiscoveredApp> =
            serde_json::from_str(&content).map_err(GridError::Serialization)?;
        Ok(Self::new(apps))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiscoveredApp> {
        self.apps.iter()
    }

    pub fn get(&self, path: &str) -> Option<&DiscoveredApp> {
        self.by_path.get(path).map(|&i| &self.apps[i])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Mints a fresh app for `path` placed on `page`.
    pub fn instantiate(&self, path: &str, page: usize) -> Option<AppItem> {
        let found = self.get(path)?;
        Some(
            AppItem::new(found.name.clone(), found.path.clone(), page)
                .with_last_opened(found.last_opened)
                .with_installed(found.installed),
        )
    }

    /// Resolves one app record unless its path was already claimed.
    fn claim_app(&self, record: &AppRecord, claimed: &mut HashSet<String>) -> Option<AppItem> {
        let app = self.instantiate(&record.path, record.page)?;
        claimed.insert(app.path.clone()).then_some(app)
    }

    fn claim(&self, record: &LayoutRecord, claimed: &mut HashSet<String>) -> Option<GridItem> {
        match record {
            LayoutRecord::App(app) => self.claim_app(app, claimed).map(GridItem::App),
            LayoutRecord::Folder(folder) => {
                let apps: Vec<AppItem> = folder
                    .apps
                    .iter()
                    .filter_map(|a| self.claim_app(a, claimed))
                    .collect();
                Folder::new(folder.name.clone(), folder.page, apps).map(GridItem::Folder)
            }
            LayoutRecord::Unknown => None,
        }
    }

    /// Resolves one persisted record. Apps whose path is gone are dropped, and a
    /// folder left with no resolvable apps is dropped entirely.
    pub fn resolve(&self, record: &LayoutRecord) -> Option<GridItem> {
        self.claim(record, &mut HashSet::new())
    }

    /// Resolves `records` in order. A path is placed once: later records that
    /// repeat it, at top level or inside a folder, are dropped.
    pub fn resolve_all(&self, records: &[LayoutRecord]) -> Vec<GridItem> {
        let mut claimed = HashSet::new();
        records
            .iter()
            .filter_map(|r| self.claim(r, &mut claimed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FolderRecord;
    use uuid::Uuid;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            DiscoveredApp::new("Mail", "/Mail.app"),
            DiscoveredApp::new("Notes", "/Notes.app"),
            DiscoveredApp::new("Mail Copy", "/Mail.app"),
        ])
    }

    fn app_record(path: &str, page: usize) -> AppRecord {
        AppRecord {
            id: Uuid::new_v4(),
            name: String::new(),
            page,
            path: path.to_string(),
        }
    }

    #[test]
    fn duplicate_paths_keep_first() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("/Mail.app").unwrap().name, "Mail");
    }

    #[test]
    fn resolve_takes_name_from_catalog_and_page_from_record() {
        let catalog = catalog();
        let record = LayoutRecord::App(AppRecord {
            name: "Stale".into(),
            ..app_record("/Notes.app", 4)
        });
        let item = catalog.resolve(&record).unwrap();
        assert_eq!(item.name(), "Notes");
        assert_eq!(item.page(), 4);
    }

    #[test]
    fn resolve_mints_fresh_ids() {
        let catalog = catalog();
        let record = LayoutRecord::App(app_record("/Notes.app", 0));
        let first = catalog.resolve(&record).unwrap();
        let second = catalog.resolve(&record).unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn unresolvable_app_is_dropped() {
        let catalog = catalog();
        assert!(catalog
            .resolve(&LayoutRecord::App(app_record("/Gone.app", 0)))
            .is_none());
    }

    #[test]
    fn folder_keeps_only_resolvable_apps() {
        let catalog = catalog();
        let record = LayoutRecord::Folder(FolderRecord {
            id: Uuid::new_v4(),
            name: "Work".into(),
            page: 1,
            apps: vec![app_record("/Gone.app", 1), app_record("/Mail.app", 1)],
        });
        let item = catalog.resolve(&record).unwrap();
        let folder = item.as_folder().unwrap();
        assert_eq!(folder.len(), 1);
        assert_eq!(folder.apps()[0].name, "Mail");
    }

    #[test]
    fn folder_with_no_resolvable_apps_is_dropped() {
        let catalog = catalog();
        let record = LayoutRecord::Folder(FolderRecord {
            id: Uuid::new_v4(),
            name: "Ghosts".into(),
            page: 0,
            apps: vec![app_record("/Gone.app", 0)],
        });
        assert!(catalog.resolve(&record).is_none());
    }

    #[test]
    fn resolve_all_places_each_path_once() {
        let catalog = catalog();
        let records = vec![
            LayoutRecord::App(app_record("/Mail.app", 0)),
            LayoutRecord::App(app_record("/Mail.app", 0)),
            LayoutRecord::Folder(FolderRecord {
                id: Uuid::new_v4(),
                name: "Work".into(),
                page: 0,
                apps: vec![
                    app_record("/Mail.app", 0),
                    app_record("/Notes.app", 0),
                    app_record("/Notes.app", 0),
                ],
            }),
        ];
        let items = catalog.resolve_all(&records);
        let paths: Vec<&str> = items.iter().flat_map(|i| i.paths()).collect();
        assert_eq!(paths, vec!["/Mail.app", "/Notes.app"]);
        assert_eq!(items[1].as_folder().unwrap().len(), 1);
    }

    #[test]
    fn folder_emptied_by_repeated_paths_is_dropped() {
        let catalog = catalog();
        let records = vec![
            LayoutRecord::App(app_record("/Notes.app", 0)),
            LayoutRecord::Folder(FolderRecord {
                id: Uuid::new_v4(),
                name: "Echo".into(),
                page: 0,
                apps: vec![app_record("/Notes.app", 0)],
            }),
        ];
        let items = catalog.resolve_all(&records);
        assert_eq!(items.len(), 1);
        assert!(!items[0].is_folder());
    }

    #[test]
    fn missing_manifest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_manifest(dir.path().join("nope.json")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn manifest_parses_optional_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"path": "/A.app", "name": "A", "last_opened": "2024-05-01T10:00:00Z"},
                {"path": "/B.app", "name": "B"}]"#,
        )
        .unwrap();
        let catalog = Catalog::from_manifest(&path).unwrap();
        assert!(catalog.get("/A.app").unwrap().last_opened.is_some());
        assert!(catalog.get("/B.app").unwrap().installed.is_none());
    }
}
