//! Typed host-domain contracts shared by the site runtime and browser adapters.
//!
//! This crate is the API boundary for platform services: durable key/value
//! preferences, tab-scoped session flags, and external navigation. Concrete
//! browser adapters live in `platform_host_web`; the in-memory and no-op
//! implementations here back native unit tests and unsupported targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod storage;
pub mod time;

pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use storage::session::{MemorySessionStore, NoopSessionStore, SessionStore};
pub use time::unix_time_ms_now;
