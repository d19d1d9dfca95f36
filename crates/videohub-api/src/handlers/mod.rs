//! Route handlers organized by domain.

pub mod testing;
pub mod video;
