//! This module is the traversal engine proper.
//!
//! Layering, leaf first:
//! 1.  `bit_run` — partitions a validity range into all-set / all-clear /
//!     mixed runs, a word at a time.
//! 2.  `bit_visit` — turns runs back into per-position visits under the two
//!     callback conventions (short-circuiting and infallible), and hosts the
//!     bitmap-only iterator.
//! 3.  `views` — one typed decoding strategy per physical layout, each driven
//!     through `bit_visit`.
//! 4.  `dispatch` — the exhaustive tag switches that connect runtime-tagged
//!     types, arrays, and scalars to statically-typed visitor branches.

pub mod bit_run;
pub mod bit_visit;
pub mod dispatch;
pub mod views;

#[cfg(test)]
mod visit_tests;

// Re-export the call surface for easier access.
pub use bit_run::{BitRun, BitRunScanner};
pub use bit_visit::{
    for_each_validity, try_for_each_validity, visit_bit_runs, visit_bit_runs_infallible,
};
pub use dispatch::{
    visit_array, visit_data_type, visit_scalar, ArrayVisitor, ScalarVisitor, TypeVisitor,
};
pub use views::{BinaryView, BooleanView, FixedStrideView, OffsetSize, PrimitiveView, ValueVisitor};
