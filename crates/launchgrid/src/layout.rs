//! # Pages and Pagination
//!
//! A layout is an ordered list of pages; the index of a page is its canonical
//! page number. Each page holds at most `capacity` grid items (columns × rows).
//!
//! Two algorithms keep pages within capacity:
//!
//! - [`paginate`] rebuilds pages from a flat, ordered item list. Items are grouped
//!   by their declared `page`, groups are walked in ascending page order, and each
//!   group starts a fresh page. When a page fills up it is sealed and the group
//!   continues on the next one. Every item ends up tagged with the index of the
//!   page holding it. Relative order is never changed, and an empty input still
//!   yields one empty page.
//!
//! - [`cascade_overflow`] repairs a single page after an insertion: the items past
//!   capacity move, in order, to the front of the following page (created on
//!   demand), and the check ripples forward until a page fits.

use crate::model::GridItem;
use std::collections::BTreeMap;
use uuid::Uuid;

pub type Page = Vec<GridItem>;

/// Rebuilds pages from `items`, one or more output pages per declared page.
///
/// Declared groups are never merged, so a page other than the last can hold
/// fewer than `capacity` items: `[A, B]` on page 0 and `[C]` on page 1 with
/// capacity 3 stay `[[A, B], [C]]`. No page ever holds more than `capacity`.
pub fn paginate(items: Vec<GridItem>, capacity: usize) -> Vec<Page> {
    let capacity = capacity.max(1);

    let mut groups: BTreeMap<usize, Vec<GridItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.page()).or_default().push(item);
    }

    let mut pages: Vec<Page> = Vec::new();
    for (_, group) in groups {
        let mut current: Page = Vec::with_capacity(capacity);
        for mut item in group {
            if current.len() >= capacity {
                pages.push(std::mem::take(&mut current));
            }
            item.set_page(pages.len());
            current.push(item);
        }
        if !current.is_empty() {
            pages.push(current);
        }
    }

    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

/// Pushes the tail of `pages[start]` beyond `capacity` onto the next page, and
/// keeps going while the receiving page overflows in turn.
pub fn cascade_overflow(pages: &mut Vec<Page>, start: usize, capacity: usize) {
    let capacity = capacity.max(1);
    let mut index = start;

    while index < pages.len() && pages[index].len() > capacity {
        let next = index + 1;
        let mut spill = pages[index].split_off(capacity);
        for item in spill.iter_mut() {
            item.set_page(next);
        }
        if next >= pages.len() {
            pages.push(spill);
        } else {
            spill.append(&mut pages[next]);
            pages[next] = spill;
        }
        index = next;
    }
}

pub fn flatten(pages: &[Page]) -> Vec<GridItem> {
    pages.iter().flatten().cloned().collect()
}

/// Position of a top-level item as `(page, slot)`.
pub fn locate(pages: &[Page], id: Uuid) -> Option<(usize, usize)> {
    pages.iter().enumerate().find_map(|(page_index, page)| {
        page.iter()
            .position(|item| item.id() == id)
            .map(|slot| (page_index, slot))
    })
}

/// Position of the folder containing app `app_id`, as `(page, slot)`.
pub fn locate_folder_of(pages: &[Page], app_id: Uuid) -> Option<(usize, usize)> {
    pages.iter().enumerate().find_map(|(page_index, page)| {
        page.iter()
            .position(|item| item.as_folder().is_some_and(|f| f.contains(app_id)))
            .map(|slot| (page_index, slot))
    })
}

/// Where an external reference currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A top-level app on `page`.
    Top { id: Uuid, page: usize },
    /// An app inside folder `folder` on `page`.
    InFolder { folder: Uuid, app: Uuid, page: usize },
}

pub fn find_path(pages: &[Page], path: &str) -> Option<Placement> {
    for (page_index, page) in pages.iter().enumerate() {
        for item in page {
            match item {
                GridItem::App(app) if app.path == path => {
                    return Some(Placement::Top {
                        id: app.id,
                        page: page_index,
                    });
                }
                GridItem::App(_) => {}
                GridItem::Folder(folder) => {
                    if let Some(app) = folder.apps().iter().find(|a| a.path == path) {
                        return Some(Placement::InFolder {
                            folder: folder.id,
                            app: app.id,
                            page: page_index,
                        });
                    }
                }
            }
        }
    }
    None
}

pub fn item_count(pages: &[Page]) -> usize {
    pages.iter().map(|p| p.len()).sum()
}
