//! Drop policies.
//!
//! Each function applies one committed gesture to the page sequence and reports
//! whether anything changed. Persistence is the caller's job.

use crate::layout::{self, Page};
use crate::model::{Folder, GridItem};
use uuid::Uuid;

fn is_top_level_app(pages: &[Page], id: Uuid) -> Option<(usize, usize)> {
    let (page, slot) = layout::locate(pages, id)?;
    pages[page][slot].as_app().map(|_| (page, slot))
}

/// Cross-page hover: the dragged item takes the hovered item's slot on the
/// hovered item's page, then that page is cascaded.
pub(crate) fn move_across_pages(
    pages: &mut Vec<Page>,
    capacity: usize,
    id: Uuid,
    target: Uuid,
) -> bool {
    let Some((from_page, from_slot)) = layout::locate(pages, id) else {
        return false;
    };
    let Some((to_page, to_slot)) = layout::locate(pages, target) else {
        return false;
    };
    if from_page == to_page {
        return false;
    }
    let mut item = pages[from_page].remove(from_slot);
    item.set_page(to_page);
    pages[to_page].insert(to_slot, item);
    layout::cascade_overflow(pages, to_page, capacity);
    true
}

/// Replaces two top-level apps with a folder holding `[dragged, target]`.
///
/// On a shared page the folder goes where the target sat once the dragged app
/// is gone; across pages it takes the target's slot. The folder always lives on
/// the target's page. Returns the new folder's id.
pub(crate) fn create_folder(
    pages: &mut [Page],
    dragged: Uuid,
    target: Uuid,
    name: &str,
) -> Option<Uuid> {
    if dragged == target {
        return None;
    }
    let (p1, i1) = is_top_level_app(pages, dragged)?;
    let (p2, i2) = is_top_level_app(pages, target)?;

    let (first, second, insert_at) = if p1 == p2 {
        let (a, b) = if i1 > i2 {
            let a = pages[p1].remove(i1);
            let b = pages[p1].remove(i2);
            (a, b)
        } else {
            let b = pages[p1].remove(i2);
            let a = pages[p1].remove(i1);
            (a, b)
        };
        let adjusted = if i1 < i2 { i2 - 1 } else { i2 };
        (a, b, adjusted)
    } else {
        let a = pages[p1].remove(i1);
        let b = pages[p2].remove(i2);
        (a, b, i2)
    };

    let apps = [first, second]
        .into_iter()
        .filter_map(|item| match item {
            GridItem::App(mut app) => {
                app.page = p2;
                Some(app)
            }
            GridItem::Folder(_) => None,
        })
        .collect();
    let folder = Folder::new(name, p2, apps)?;
    let id = folder.id;
    let insert_at = insert_at.min(pages[p2].len());
    pages[p2].insert(insert_at, GridItem::Folder(folder));
    Some(id)
}

/// Moves a top-level app to the end of `folder`.
pub(crate) fn merge_into_folder(pages: &mut [Page], app: Uuid, folder: Uuid) -> bool {
    let Some((app_page, app_slot)) = is_top_level_app(pages, app) else {
        return false;
    };
    match layout::locate(pages, folder) {
        Some((p, s)) if pages[p][s].is_folder() => {}
        _ => return false,
    }

    let GridItem::App(mut moved) = pages[app_page].remove(app_slot) else {
        return false;
    };
    // The removal may have shifted the folder's slot.
    let Some((folder_page, folder_slot)) = layout::locate(pages, folder) else {
        return false;
    };
    let Some(target) = pages[folder_page][folder_slot].as_folder_mut() else {
        return false;
    };
    moved.page = folder_page;
    target.push_app(moved);
    true
}

/// Appends a top-level item to `page` and cascades. `page` must exist.
pub(crate) fn move_to_page(pages: &mut Vec<Page>, capacity: usize, id: Uuid, page: usize) -> bool {
    let Some((from_page, from_slot)) = layout::locate(pages, id) else {
        return false;
    };
    let mut item = pages[from_page].remove(from_slot);
    item.set_page(page);
    pages[page].push(item);
    layout::cascade_overflow(pages, page, capacity);
    true
}

/// Takes `app` out of `folder` and appends it to `dest`, or to the folder's own
/// page when `dest` is `None`. A folder left empty is removed from its page.
pub(crate) fn extract_from_folder(
    pages: &mut Vec<Page>,
    capacity: usize,
    folder: Uuid,
    app: Uuid,
    dest: Option<usize>,
) -> bool {
    let Some((folder_page, folder_slot)) = layout::locate(pages, folder) else {
        return false;
    };
    let Some(source) = pages[folder_page][folder_slot].as_folder_mut() else {
        return false;
    };
    let Some(mut extracted) = source.remove_app(app) else {
        return false;
    };
    if source.is_empty() {
        pages[folder_page].remove(folder_slot);
    }

    let dest = dest.unwrap_or(folder_page);
    extracted.page = dest;
    pages[dest].push(GridItem::App(extracted));
    layout::cascade_overflow(pages, dest, capacity);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::{app, names};
    use crate::model::AppItem;

    fn folder(name: &str, page: usize, apps: &[&str]) -> GridItem {
        let apps = apps
            .iter()
            .map(|a| AppItem::new(*a, format!("/{}.app", a), page))
            .collect();
        GridItem::Folder(Folder::new(name, page, apps).unwrap())
    }

    fn folder_apps(item: &GridItem) -> Vec<String> {
        item.as_folder()
            .unwrap()
            .apps()
            .iter()
            .map(|a| a.name.clone())
            .collect()
    }

    #[test]
    fn cross_page_hover_takes_target_slot_and_cascades() {
        let mut pages = vec![
            vec![app("A", 0), app("B", 0)],
            vec![app("C", 1), app("D", 1)],
        ];
        let (a, d) = (pages[0][0].id(), pages[1][1].id());
        assert!(move_across_pages(&mut pages, 2, a, d));
        assert_eq!(names(&pages), vec![vec!["B"], vec!["C", "A"], vec!["D"]]);
        assert_eq!(pages[1][1].page(), 1);
        assert_eq!(pages[2][0].page(), 2);
    }

    #[test]
    fn folder_from_two_pages_replaces_target_in_place() {
        let mut pages = vec![
            vec![app("A", 0), app("B", 0), app("C", 0)],
            vec![app("D", 1), app("E", 1)],
        ];
        let (e, a) = (pages[1][1].id(), pages[0][0].id());
        let id = create_folder(&mut pages, e, a, "New Folder").unwrap();

        assert_eq!(names(&pages), vec![vec!["New Folder", "B", "C"], vec!["D"]]);
        assert_eq!(pages[0][0].id(), id);
        assert_eq!(pages[0][0].page(), 0);
        assert_eq!(folder_apps(&pages[0][0]), vec!["E", "A"]);
        assert!(pages[0][0].as_folder().unwrap().apps().iter().all(|a| a.page == 0));
    }

    #[test]
    fn folder_on_same_page_dragged_forward() {
        let mut pages = vec![vec![app("A", 0), app("B", 0), app("C", 0), app("D", 0)]];
        let (a, c) = (pages[0][0].id(), pages[0][2].id());
        create_folder(&mut pages, a, c, "F").unwrap();
        assert_eq!(names(&pages), vec![vec!["B", "F", "D"]]);
        assert_eq!(folder_apps(&pages[0][1]), vec!["A", "C"]);
    }

    #[test]
    fn folder_on_same_page_dragged_backward() {
        let mut pages = vec![vec![app("A", 0), app("B", 0), app("C", 0), app("D", 0)]];
        let (d, b) = (pages[0][3].id(), pages[0][1].id());
        create_folder(&mut pages, d, b, "F").unwrap();
        assert_eq!(names(&pages), vec![vec!["A", "F", "C"]]);
        assert_eq!(folder_apps(&pages[0][1]), vec!["D", "B"]);
    }

    #[test]
    fn folder_insert_index_is_clamped() {
        let mut pages = vec![vec![app("A", 0), app("B", 0)]];
        let (a, b) = (pages[0][0].id(), pages[0][1].id());
        create_folder(&mut pages, a, b, "F").unwrap();
        assert_eq!(names(&pages), vec![vec!["F"]]);
    }

    #[test]
    fn folders_never_nest() {
        let mut pages = vec![vec![app("A", 0), folder("F", 0, &["X"])]];
        let (a, f) = (pages[0][0].id(), pages[0][1].id());
        assert!(create_folder(&mut pages, f, a, "G").is_none());
        assert!(create_folder(&mut pages, a, f, "G").is_none());
        assert!(create_folder(&mut pages, a, a, "G").is_none());
        assert_eq!(names(&pages), vec![vec!["A", "F"]]);
    }

    #[test]
    fn merge_appends_to_folder_and_removes_from_origin() {
        let mut pages = vec![
            vec![app("A", 0), folder("F", 0, &["X", "Y"])],
            vec![app("Z", 1)],
        ];
        let (z, f) = (pages[1][0].id(), pages[0][1].id());
        assert!(merge_into_folder(&mut pages, z, f));
        assert_eq!(names(&pages), vec![vec!["A", "F"], vec![]]);
        assert_eq!(folder_apps(&pages[0][1]), vec!["X", "Y", "Z"]);
        assert_eq!(pages[0][1].as_folder().unwrap().apps()[2].page, 0);
    }

    #[test]
    fn merge_from_earlier_slot_on_same_page() {
        let mut pages = vec![vec![app("A", 0), app("B", 0), folder("F", 0, &["X"])]];
        let (a, f) = (pages[0][0].id(), pages[0][2].id());
        assert!(merge_into_folder(&mut pages, a, f));
        assert_eq!(names(&pages), vec![vec!["B", "F"]]);
        assert_eq!(folder_apps(&pages[0][1]), vec!["X", "A"]);
    }

    #[test]
    fn merge_into_app_is_rejected() {
        let mut pages = vec![vec![app("A", 0), app("B", 0)]];
        let (a, b) = (pages[0][0].id(), pages[0][1].id());
        assert!(!merge_into_folder(&mut pages, a, b));
        assert_eq!(names(&pages), vec![vec!["A", "B"]]);
    }

    #[test]
    fn move_to_page_appends_and_cascades() {
        let mut pages = vec![vec![app("A", 0), app("B", 0)], vec![app("C", 1)]];
        let c = pages[1][0].id();
        assert!(move_to_page(&mut pages, 2, c, 0));
        assert_eq!(names(&pages), vec![vec!["A", "B"], vec!["C"]]);
        assert_eq!(pages[1][0].page(), 1);

        let a = pages[0][0].id();
        assert!(move_to_page(&mut pages, 2, a, 1));
        assert_eq!(names(&pages), vec![vec!["B"], vec!["C", "A"]]);
    }

    #[test]
    fn extraction_lands_on_folder_page_and_drops_empty_folder() {
        let mut pages = vec![vec![app("A", 0), folder("F", 0, &["X"])], vec![app("B", 1)]];
        let f = pages[0][1].id();
        let x = pages[0][1].as_folder().unwrap().apps()[0].id;
        assert!(extract_from_folder(&mut pages, 5, f, x, None));
        assert_eq!(names(&pages), vec![vec!["A", "X"], vec!["B"]]);
        assert_eq!(pages[0][1].page(), 0);
    }

    #[test]
    fn extraction_onto_full_page_cascades() {
        let mut pages = vec![vec![app("A", 0), folder("F", 0, &["X", "Y"])]];
        let f = pages[0][1].id();
        let y = pages[0][1].as_folder().unwrap().apps()[1].id;
        assert!(extract_from_folder(&mut pages, 2, f, y, None));
        assert_eq!(names(&pages), vec![vec!["A", "F"], vec!["Y"]]);
        assert_eq!(folder_apps(&pages[0][1]), vec!["X"]);
        assert_eq!(pages[1][0].page(), 1);
    }

    #[test]
    fn extraction_to_other_page() {
        let mut pages = vec![vec![folder("F", 0, &["X", "Y"])], vec![app("B", 1)]];
        let f = pages[0][0].id();
        let x = pages[0][0].as_folder().unwrap().apps()[0].id;
        assert!(extract_from_folder(&mut pages, 4, f, x, Some(1)));
        assert_eq!(names(&pages), vec![vec!["F"], vec!["B", "X"]]);
        assert_eq!(pages[1][1].page(), 1);
    }
}
