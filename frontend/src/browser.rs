//! Thin adapters over browser storage: cookies, `localStorage`, object URLs.

use blogdesk_shared::{
    error::StorageError,
    session::{sign_out_assignments, Session},
    storage::KeyValueStore,
};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Raw `document.cookie`, empty when unavailable.
pub fn cookie_header() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

pub fn read_session() -> Session {
    Session::from_cookie_header(&cookie_header())
}

fn write_cookies(assignments: &[String]) {
    let Some(doc) = html_document() else {
        return;
    };
    for assignment in assignments {
        if let Err(err) = doc.set_cookie(assignment) {
            web_sys::console::error_1(&format!("failed to write cookie: {:?}", err).into());
        }
    }
}

pub fn store_session(session: &Session, days: u32) {
    write_cookies(&session.to_cookie_assignments(days));
}

/// Expire the session cookies, including the legacy password cookie older
/// builds left behind.
pub fn clear_session() {
    write_cookies(&sign_out_assignments());
}

/// `localStorage` behind the shared storage trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// Current client time as ISO 8601.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Blob URL for previewing a picked file; empty when the browser refuses.
pub fn object_url(file: &web_sys::File) -> String {
    web_sys::Url::create_object_url_with_blob(file).unwrap_or_default()
}

pub fn revoke_object_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}

/// Toggle `data-theme="dark"` on the root element.
pub fn apply_theme(dark: bool) {
    let Some(root) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let result = if dark {
        root.set_attribute("data-theme", "dark")
    } else {
        root.remove_attribute("data-theme")
    };
    if let Err(err) = result {
        web_sys::console::error_1(&format!("failed to apply theme: {:?}", err).into());
    }
}
