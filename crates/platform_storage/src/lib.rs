//! Host-side storage contracts and adapters for the start-page runtime.
//!
//! This crate wraps durable config persistence behind Rust-friendly traits: a versioned
//! app-state envelope with schema migration, a lightweight preference store, and
//! `localStorage`-backed browser adapters. Memory and no-op implementations back tests and
//! unsupported targets.
//!
//! # Example
//!
//! ```rust
//! use platform_storage::{build_app_state_envelope, MemoryPrefsStore, PrefsStore};
//!
//! let envelope = build_app_state_envelope("startpage.config", 1, &3_u32)
//!     .expect("envelope should serialize");
//! assert_eq!(envelope.namespace, "startpage.config");
//!
//! let store = MemoryPrefsStore::default();
//! futures::executor::block_on(store.save_pref("k", "{}")).expect("save");
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app_state;
mod local;
mod prefs;
mod time;

pub use app_state::{
    build_app_state_envelope, decode_envelope_payload, load_app_state_with_migration,
    save_app_state_with, AppStateEnvelope, AppStateStore, AppStateStoreFuture, MemoryAppStateStore,
    NoopAppStateStore, APP_STATE_ENVELOPE_VERSION, STARTPAGE_STATE_NAMESPACE,
};
pub use local::{WebAppStateStore, WebPrefsStore};
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
