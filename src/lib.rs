//! This file is the root of the `kolom_scan` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`types`, `array`,
//!     `scan`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the public call surface: the tag/array/scalar dispatch
//!     entry points and the null-aware iteration primitives everything
//!     downstream builds on.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod array;
pub mod error;
pub mod scan;
pub mod types;
pub mod utils;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use array::{ArrayData, Buffer, OffsetScaling, Scalar};
pub use error::KolomError;
pub use scan::{
    for_each_validity, try_for_each_validity, visit_array, visit_data_type, visit_scalar,
    ArrayVisitor, BinaryView, BooleanView, FixedStrideView, PrimitiveView, ScalarVisitor,
    TypeVisitor, ValueVisitor,
};
pub use types::{DataType, PhysicalLayout};
