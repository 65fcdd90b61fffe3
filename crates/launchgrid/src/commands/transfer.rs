//! Export and import of the layout document.
//!
//! Neither direction returns `Err` for a failed transfer: the outcome is a
//! [`TransferReport`] whose message names the file and the underlying error,
//! mirrored as a leveled message on the [`CmdResult`].

use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::store::{LayoutBackend, LayoutStore};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub success: bool,
    pub message: String,
    pub path: PathBuf,
}

impl TransferReport {
    fn ok(path: PathBuf, message: String) -> Self {
        info!(path = %path.display(), "{}", message);
        Self {
            success: true,
            message,
            path,
        }
    }

    fn failed(path: PathBuf, message: String) -> Self {
        warn!(path = %path.display(), "{}", message);
        Self {
            success: false,
            message,
            path,
        }
    }
}

impl From<TransferReport> for CmdResult {
    fn from(report: TransferReport) -> Self {
        let message = if report.success {
            CmdMessage::success(report.message.clone())
        } else {
            CmdMessage::error(report.message.clone())
        };
        CmdResult {
            messages: vec![message],
            transfer: Some(report),
            ..Default::default()
        }
    }
}

/// Writes the current arrangement to `<dir>/<file_name>`.
pub fn export<B: LayoutBackend>(store: &LayoutStore<B>, dir: &Path, file_name: &str) -> CmdResult {
    let path = dir.join(file_name);
    let records = store.records();
    let report = match codec::write_document(&path, &records) {
        Ok(()) => TransferReport::ok(
            path.clone(),
            format!("Exported {} items to {}", records.len(), path.display()),
        ),
        Err(e) => TransferReport::failed(
            path.clone(),
            format!("Failed to export layout to {}: {}", path.display(), e),
        ),
    };
    report.into()
}

/// Replaces the arrangement with `<dir>/<file_name>`, resolved against the
/// current catalog, and saves it. On any read or parse failure the layout is
/// left untouched.
pub fn import<B: LayoutBackend>(store: &mut LayoutStore<B>, dir: &Path, file_name: &str) -> CmdResult {
    let path = dir.join(file_name);
    let records = match codec::read_document(&path) {
        Ok(records) => records,
        Err(e) => {
            return TransferReport::failed(
                path.clone(),
                format!("Failed to import layout from {}: {}", path.display(), e),
            )
            .into();
        }
    };

    let report = match store.replace_with(&records) {
        Ok(dropped) => {
            let mut message = format!(
                "Imported {} items from {}",
                records.len() - dropped,
                path.display()
            );
            if dropped > 0 {
                message.push_str(&format!(
                    " ({} entries skipped: missing or repeated paths)",
                    dropped
                ));
            }
            TransferReport::ok(path, message)
        }
        Err(e) => TransferReport::failed(
            path.clone(),
            format!("Failed to save imported layout from {}: {}", path.display(), e),
        ),
    };

    let mut result: CmdResult = report.into();
    result.pages = store.pages().to_vec();
    result
}
