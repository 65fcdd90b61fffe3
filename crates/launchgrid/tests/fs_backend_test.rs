use launchgrid::record::{AppRecord, FolderRecord, LayoutRecord};
use launchgrid::store::backend::LayoutBackend;
use launchgrid::store::fs_backend::{FsBackend, HIDDEN_FILE, LAYOUT_FILE};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

fn app(path: &str, page: usize) -> AppRecord {
    AppRecord {
        id: Uuid::new_v4(),
        name: String::new(),
        page,
        path: path.to_string(),
    }
}

#[test]
fn test_layout_round_trip_creates_data_dir() {
    let (_dir, backend) = setup();
    assert_eq!(backend.load_layout().unwrap(), None);

    let records = vec![
        LayoutRecord::App(app("/A.app", 0)),
        LayoutRecord::Folder(FolderRecord {
            id: Uuid::new_v4(),
            name: "Work".into(),
            page: 1,
            apps: vec![app("/B.app", 1), app("/C.app", 1)],
        }),
    ];
    backend.save_layout(&records).unwrap();

    assert!(backend.root().join(LAYOUT_FILE).exists());
    assert_eq!(backend.load_layout().unwrap(), Some(records));
}

#[test]
fn test_save_leaves_no_temp_files() {
    let (_dir, backend) = setup();
    backend
        .save_layout(&[LayoutRecord::App(app("/A.app", 0))])
        .unwrap();
    backend
        .save_layout(&[LayoutRecord::App(app("/B.app", 0))])
        .unwrap();

    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }

    let stored = backend.load_layout().unwrap().unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn test_clear_layout_is_idempotent() {
    let (_dir, backend) = setup();
    backend.clear_layout().unwrap();

    backend
        .save_layout(&[LayoutRecord::App(app("/A.app", 0))])
        .unwrap();
    backend.clear_layout().unwrap();
    assert_eq!(backend.load_layout().unwrap(), None);
    backend.clear_layout().unwrap();
}

#[test]
fn test_hidden_set_persists() {
    let (_dir, backend) = setup();
    assert!(backend.load_hidden().unwrap().is_empty());

    let hidden: BTreeSet<String> = ["/A.app".to_string(), "/Z.app".to_string()].into();
    backend.save_hidden(&hidden).unwrap();

    assert!(backend.root().join(HIDDEN_FILE).exists());
    assert_eq!(backend.load_hidden().unwrap(), hidden);
}

#[test]
fn test_corrupt_layout_surfaces_serialization_error() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    fs::write(backend.layout_path(), "{ nope").unwrap();
    assert!(backend.load_layout().is_err());
}
