use super::backend::LayoutBackend;
use crate::error::{GridError, Result};
use crate::record::LayoutRecord;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

/// In-memory layout backend for testing.
///
/// Uses `RefCell` for interior mutability since the layout engine is
/// single-threaded, so `LayoutBackend` can keep `&self` for every method.
#[derive(Default)]
pub struct MemBackend {
    layout: RefCell<Option<Vec<LayoutRecord>>>,
    hidden: RefCell<BTreeSet<String>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with a previously saved layout.
    pub fn with_layout(records: Vec<LayoutRecord>) -> Self {
        let backend = Self::new();
        *backend.layout.borrow_mut() = Some(records);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Snapshot of the stored blob.
    pub fn stored_layout(&self) -> Option<Vec<LayoutRecord>> {
        self.layout.borrow().clone()
    }

    /// Number of successful layout saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(GridError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl LayoutBackend for MemBackend {
    fn load_layout(&self) -> Result<Option<Vec<LayoutRecord>>> {
        Ok(self.layout.borrow().clone())
    }

    fn save_layout(&self, records: &[LayoutRecord]) -> Result<()> {
        self.check_writable()?;
        *self.layout.borrow_mut() = Some(records.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn clear_layout(&self) -> Result<()> {
        self.check_writable()?;
        *self.layout.borrow_mut() = None;
        Ok(())
    }

    fn load_hidden(&self) -> Result<BTreeSet<String>> {
        Ok(self.hidden.borrow().clone())
    }

    fn save_hidden(&self, hidden: &BTreeSet<String>) -> Result<()> {
        self.check_writable()?;
        *self.hidden.borrow_mut() = hidden.clone();
        Ok(())
    }
}
