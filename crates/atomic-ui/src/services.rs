//! Browser-backed implementations of the core seams.

pub mod storage;
pub mod timer;
