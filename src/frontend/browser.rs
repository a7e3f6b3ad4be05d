//! Thin wrappers over browser APIs. Only call these from client-side code
//! (effects, event handlers, spawned tasks).

use crate::common::SessionError;
use crate::services::SessionStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        local_storage()
            .ok_or(SessionError::StorageUnavailable)?
            .set_item(key, value)
            .map_err(|_| SessionError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Full page navigation, dropping all client state.
pub fn redirect(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(e) = window.location().set_href(path) {
        log::error!("Redirect to {path} failed: {e:?}");
    }
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
