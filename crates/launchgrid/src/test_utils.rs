use crate::catalog::{Catalog, DiscoveredApp};
use crate::record::{AppRecord, FolderRecord, LayoutRecord};
use crate::store::{LayoutStore, MemBackend};
use uuid::Uuid;

/// Catalog of `/{name}.app` entries in the given order.
pub fn catalog(names: &[&str]) -> Catalog {
    Catalog::new(
        names
            .iter()
            .map(|n| DiscoveredApp::new(*n, format!("/{}.app", n))),
    )
}

pub fn app_rec(name: &str, page: usize) -> LayoutRecord {
    LayoutRecord::App(AppRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        page,
        path: format!("/{}.app", name),
    })
}

pub fn folder_rec(name: &str, page: usize, apps: &[&str]) -> LayoutRecord {
    LayoutRecord::Folder(FolderRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        page,
        apps: apps
            .iter()
            .map(|a| AppRecord {
                id: Uuid::new_v4(),
                name: a.to_string(),
                page,
                path: format!("/{}.app", a),
            })
            .collect(),
    })
}

/// A store loaded from `records` against a catalog of `names`.
pub fn loaded_store(
    records: Vec<LayoutRecord>,
    names: &[&str],
    capacity: usize,
) -> LayoutStore<MemBackend> {
    let mut store = LayoutStore::new(MemBackend::with_layout(records), capacity);
    store
        .load(catalog(names))
        .expect("loading from memory cannot fail");
    store
}

pub fn page_names(store: &LayoutStore<MemBackend>) -> Vec<Vec<String>> {
    store
        .pages()
        .iter()
        .map(|p| p.iter().map(|i| i.name().to_string()).collect())
        .collect()
}

pub fn folder_contents(store: &LayoutStore<MemBackend>, folder: &str) -> Vec<String> {
    store
        .find_folder_by_name(folder)
        .and_then(|id| store.item(id))
        .and_then(|item| item.as_folder())
        .map(|f| f.apps().iter().map(|a| a.name.clone()).collect())
        .unwrap_or_default()
}
