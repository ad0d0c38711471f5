//! This module defines the core, strongly-typed data representations used
//! throughout the kolom traversal engine.
//!
//! It currently includes the canonical `DataType` tag enum, the closed set every
//! dispatch surface switches over, and the `PhysicalLayout` categories that pair
//! each tag with exactly one buffer-decoding strategy.

pub mod data_type;

// Re-export the main types for easier access.
pub use data_type::{DataType, PhysicalLayout};
