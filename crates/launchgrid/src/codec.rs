//! Import/export document codec.
//!
//! The exchanged document has the same shape as the persisted blob (see
//! [`crate::record`]) and is written pretty-printed. Decoding is strict: anything
//! but an array of records is rejected, and so is the whole document when one
//! record lacks a required field (`type`, or an app's `path` or `page`). Only a
//! record whose `type` is present but unrecognized is skipped, as
//! [`LayoutRecord::Unknown`].

use crate::error::{GridError, Result};
use crate::record::LayoutRecord;
use crate::store::fs_backend::write_atomic;
use std::fs;
use std::path::Path;

pub fn encode(records: &[LayoutRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(GridError::Serialization)
}

pub fn decode(document: &str) -> Result<Vec<LayoutRecord>> {
    serde_json::from_str(document).map_err(GridError::Serialization)
}

/// Writes the document to `path` in one step: a failed write leaves no file behind.
pub fn write_document(path: &Path, records: &[LayoutRecord]) -> Result<()> {
    let document = encode(records)?;
    write_atomic(path, document.as_bytes())
}

pub fn read_document(path: &Path) -> Result<Vec<LayoutRecord>> {
    let document = fs::read_to_string(path).map_err(GridError::Io)?;
    decode(&document)
}
