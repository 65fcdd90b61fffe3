use crate::error::Result;
use crate::record::LayoutRecord;
use std::collections::BTreeSet;

/// Abstract interface for raw layout persistence.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while LayoutStore handles the "what" (pagination, reconciliation, cascade).
pub trait LayoutBackend {
    // --- Layout blob ---

    /// Load the persisted layout.
    /// Returns Ok(None) when nothing has been saved yet.
    fn load_layout(&self) -> Result<Option<Vec<LayoutRecord>>>;

    /// Replace the persisted layout with `records`.
    /// MUST be a whole-document overwrite: readers see the old or the new blob, never a mix.
    fn save_layout(&self, records: &[LayoutRecord]) -> Result<()>;

    /// Forget the persisted layout.
    fn clear_layout(&self) -> Result<()>;

    // --- Hidden references ---

    fn load_hidden(&self) -> Result<BTreeSet<String>>;

    fn save_hidden(&self, hidden: &BTreeSet<String>) -> Result<()>;
}
