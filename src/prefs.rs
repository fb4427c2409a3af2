//! Last-viewed-page preference.
//!
//! The only piece of local persistence in the portal. Modeled as an
//! explicit injected handle owned by the presentation layer, rather than
//! process-wide state: the list view loads the page number on entry and
//! saves it on every page change.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PortalError;

/// Capability to persist and recall the PO list page number.
pub trait PagePreference {
    /// Last saved page number, or `None` when nothing usable is stored.
    fn load(&self) -> Option<u32>;

    fn save(&self, page_number: u32) -> Result<(), PortalError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPrefs {
    po_list_page_number: u32,
}

/// JSON-file-backed preference store.
#[derive(Debug, Clone)]
pub struct FilePagePreference {
    path: PathBuf,
}

impl FilePagePreference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PagePreference for FilePagePreference {
    fn load(&self) -> Option<u32> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredPrefs>(&raw) {
            Ok(prefs) => Some(prefs.po_list_page_number),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unreadable prefs file");
                None
            }
        }
    }

    fn save(&self, page_number: u32) -> Result<(), PortalError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let prefs = StoredPrefs {
            po_list_page_number: page_number,
        };
        let raw = serde_json::to_string(&prefs)
            .map_err(|e| PortalError::Validation(format!("failed to encode prefs: {}", e)))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryPagePreference {
    page_number: Mutex<Option<u32>>,
}

impl InMemoryPagePreference {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PagePreference for InMemoryPagePreference {
    fn load(&self) -> Option<u32> {
        *self.page_number.lock().expect("prefs lock poisoned")
    }

    fn save(&self, page_number: u32) -> Result<(), PortalError> {
        *self.page_number.lock().expect("prefs lock poisoned") = Some(page_number);
        Ok(())
    }
}
