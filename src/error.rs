// In: src/error.rs

//! This module defines the single, unified error type for the entire kolom library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KolomError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// A runtime type tag reached a visitor that has no branch registered for
    /// it. The payload is the tag's display name.
    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),

    /// A structural contract was broken by an upstream producer, e.g. a
    /// required buffer slot is absent. These indicate bugs, not user input.
    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    PodCast(String), // Manual `From` impl is needed as bytemuck::PodCastError doesn't impl Error
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for KolomError {
    fn from(err: bytemuck::PodCastError) -> Self {
        KolomError::PodCast(err.to_string())
    }
}
