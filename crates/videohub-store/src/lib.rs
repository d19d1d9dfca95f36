//! # videohub-store
//!
//! Process-local storage for VideoHub. Nothing here outlives the process:
//! a restart starts from an empty (or freshly seeded) collection.

pub mod memory;

pub use memory::VideoStore;
