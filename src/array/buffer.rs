//! This module defines `Buffer`, the immutable, shared-ownership byte region
//! every array view windows into.
//!
//! A `Buffer` is reference counted: cloning one is cheap and every clone sees
//! the same bytes. The traversal engine never mutates or frees a buffer; the
//! last owner dropping it releases the memory. Backing storage is 8-byte
//! aligned so that reinterpreting a prefix as any primitive width is always a
//! valid zero-copy cast.

use std::sync::Arc;

use crate::array::bit_util;
use crate::error::KolomError;
use crate::utils::{safe_bytes_to_typed_slice, typed_slice_to_bytes};

/// An immutable, reference-counted, 8-byte-aligned region of bytes.
#[derive(Clone)]
pub struct Buffer {
    /// Backing words. Alignment of the allocation is that of `u64`, which
    /// covers every primitive element width the engine decodes.
    words: Arc<[u64]>,
    /// Logical byte length; the final backing word may be partially used.
    len: usize,
}

impl Buffer {
    /// Creates a buffer by copying `bytes` into aligned storage.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        let mut words = vec![0u64; bit_util::ceil_div8(len)];
        bytemuck::cast_slice_mut::<u64, u8>(&mut words)[..len].copy_from_slice(&bytes);
        Self {
            words: words.into(),
            len,
        }
    }

    /// Creates a buffer from a typed slice of plain-old-data values.
    pub fn from_typed_slice<T: bytemuck::Pod>(data: &[T]) -> Self {
        Self::from_vec(typed_slice_to_bytes(data))
    }

    /// Packs a slice of booleans into an LSB-first bitmap buffer.
    ///
    /// Bit `i` is set iff `bits[i]` is true; trailing pad bits are zero.
    pub fn from_bit_slice(bits: &[bool]) -> Self {
        let mut bytes = vec![0u8; bit_util::ceil_div8(bits.len())];
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                bit_util::set_bit(&mut bytes, i);
            }
        }
        Self::from_vec(bytes)
    }

    /// Byte length of the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the buffer's bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.len]
    }

    /// Zero-copy view of the whole buffer as a typed slice.
    pub fn typed_slice<T: bytemuck::Pod>(&self) -> Result<&[T], KolomError> {
        safe_bytes_to_typed_slice(self.as_slice())
    }

    /// Tests bit `i`, treating the buffer as an LSB-first bitmap.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        bit_util::get_bit(self.as_slice(), i)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer").field("len", &self.len).finish()
    }
}
