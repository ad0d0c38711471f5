//! This module provides the storage-side collaborators of the traversal engine:
//! shared immutable byte buffers, the `ArrayData` view that windows into them,
//! the `Scalar` value hierarchy, and the single bit-test primitive everything
//! null-aware agrees on.
//!
//! Nothing in here allocates on the decode path; construction helpers exist for
//! producers and tests, and every accessor hands out borrowed views.

pub mod bit_util;
pub mod buffer;
pub mod data;
pub mod scalar;

// Re-export the main types for easier access.
pub use buffer::Buffer;
pub use data::{ArrayData, OffsetScaling};
pub use scalar::Scalar;
