//! In-memory store backed by a single `RwLock`.

pub mod store;

pub use store::VideoStore;
