//! Thin wrappers over browser APIs.
//!
//! Every call here can fail (storage disabled, fullscreen denied); failures
//! are logged to the console and otherwise swallowed, so nothing in this
//! module can affect timer state.

use gloo_utils::{document, window};
use log::warn;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    match window().local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            warn!("localStorage unavailable: {:?}", err);
            None
        }
    }
}

pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.set_item(key, value) {
            warn!("failed to persist {}: {:?}", key, err);
        }
    }
}

/// Whether the page currently owns the fullscreen element.
pub fn is_fullscreen() -> bool {
    document().fullscreen_element().is_some()
}

/// Enter fullscreen on the document element, or leave it if already there.
/// A rejected request only produces a console warning.
pub fn toggle_fullscreen() {
    let doc = document();
    if doc.fullscreen_element().is_some() {
        doc.exit_fullscreen();
    } else if let Some(root) = doc.document_element() {
        if let Err(err) = root.request_fullscreen() {
            warn!("fullscreen request denied: {:?}", err);
        }
    }
}
