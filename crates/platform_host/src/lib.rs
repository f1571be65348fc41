//! Host-side storage contracts shared by the shell runtime and its adapters.
//!
//! This crate is the boundary between the desktop shell and whatever actually
//! persists data for it. It exposes a synchronous key/value contract (the only
//! backing store in the browser is `localStorage`, which is synchronous),
//! in-memory and no-op adapters for tests, and the persisted session identity
//! record the boot sequence reads.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod identity;
pub mod storage;

pub use identity::{
    clear_identity, load_identity, save_identity, SessionIdentity, DEFAULT_USERNAME,
    SETUP_COMPLETE_KEY, USERNAME_KEY, PASSWORD_KEY,
};
pub use storage::{KeyValueStore, MemoryKeyValueStore, NoopKeyValueStore};
