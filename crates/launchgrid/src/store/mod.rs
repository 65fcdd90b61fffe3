//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! 1. [`backend::LayoutBackend`]: raw document I/O. One blob holds the whole
//!    arrangement, one holds the hidden references. Nothing here knows about
//!    pages or capacity.
//! 2. [`layout_store::LayoutStore`]: owns the page sequence and implements
//!    Load, Save, Pagination and the overflow cascade on top of a backend.
//!
//! ## Load
//!
//! 1. **Resolve**: every persisted record is matched against the catalog by path.
//!    Records that no longer resolve are dropped, as are records repeating a path
//!    already placed earlier in the list. Folders left with no apps go too.
//! 2. **Adopt**: catalog entries no record mentions are appended, declared on the
//!    highest page seen so far.
//! 3. **Filter**: top-level apps whose path is in the hidden set are removed.
//! 4. **Paginate**: pages are rebuilt from the resulting order.
//!
//! An unparsable persisted blob is logged and treated as "nothing saved yet".
//!
//! ## Save
//!
//! Pages are flattened in order and written as one document. The blob is always
//! replaced whole; the filesystem backend writes to a temp file and renames it
//! over the target.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── grid.json          # Persisted arrangement
//! ├── hidden.json        # Hidden references
//! └── launchgrid.toml    # Optional configuration
//! ```
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend rooted at the data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod layout_store;
pub mod mem_backend;

pub use backend::LayoutBackend;
pub use fs_backend::FsBackend;
pub use layout_store::LayoutStore;
pub use mem_backend::MemBackend;
