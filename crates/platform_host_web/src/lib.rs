//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for durable
//! preferences (`localStorage`), tab-session flags (`sessionStorage`), and
//! external navigation, plus small DOM and media-platform utilities the site
//! runtime executes its effects through. Every entry point compiles to an
//! inert fallback off-wasm so runtime logic stays testable on native targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod external_url;
pub mod media;
pub mod storage;

pub use dom::{listen, listen_capture, EventListenerHandle};
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
pub use storage::session_flags::WebSessionStore;

/// Returns the browser-backed durable preference store.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Returns the browser-backed tab-session store.
pub fn session_store() -> WebSessionStore {
    WebSessionStore
}

/// Returns the browser-backed external navigation service.
pub fn external_url_service() -> WebExternalUrlService {
    WebExternalUrlService
}
