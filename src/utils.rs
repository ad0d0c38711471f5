//! This module provides a set of shared, low-level utility functions used
//! throughout the kolom Rust core.
//!
//! Its primary responsibilities include:
//! 1.  Providing safe, validated conversions between raw byte slices and typed slices.
//! 2.  Keeping every byte-reinterpretation in the crate behind one audited gateway
//!     instead of scattered pointer casts.

use crate::error::KolomError;

/// Safely reinterprets a byte slice as a slice of a primitive type.
///
/// This function is the primary gateway for turning raw buffer bytes into a
/// workable, typed slice. It performs critical safety checks before creating
/// a zero-copy view of the data.
///
/// # Args
/// * `bytes`: The input byte slice.
///
/// # Returns
/// A `Result` containing a reference to a typed slice `&[T]` on success.
///
/// # Errors
/// Returns a `KolomError::PodCast` if the byte slice length is not perfectly
/// divisible by the size of the target type `T`, or if the slice is misaligned
/// for `T`.
pub fn safe_bytes_to_typed_slice<'a, T>(bytes: &'a [u8]) -> Result<&'a [T], KolomError>
where
    T: bytemuck::Pod, // Use bytemuck's trait for "Plain Old Data"
{
    bytemuck::try_cast_slice(bytes).map_err(|e| {
        // Bytemuck's error type contains detailed info about the failure
        // (e.g., alignment, length, etc.), which is great for debugging.
        KolomError::PodCast(format!("Failed to cast byte slice: {}", e))
    })
}

/// Converts a typed slice into a `Vec<u8>`, respecting native byte order.
///
/// This function performs a memory copy to create a new, owned byte vector.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}
