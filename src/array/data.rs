//! This module defines `ArrayData`, the logical array view the traversal engine
//! consumes: a type tag, a length, a slice offset, and three buffer slots.
//!
//! Slot semantics follow the columnar layout convention:
//! - slot 0: validity bitmap; absent means every position is valid.
//! - slot 1: fixed-width values, bit-packed booleans, or a `len + 1` offsets
//!   array for variable-length types.
//! - slot 2: raw byte payload for variable-length types, indexed by the
//!   *unsliced* offsets in slot 1.
//!
//! Different slots scale the slice offset differently, which is exactly the
//! kind of implicit contract that breeds silent bugs. Slot access therefore
//! takes an explicit [`OffsetScaling`] argument, so the scaling rule is a
//! visible choice at every call site instead of a default to remember.

use crate::array::buffer::Buffer;
use crate::error::KolomError;
use crate::types::DataType;
use crate::utils::safe_bytes_to_typed_slice;

/// How a logical slice offset maps onto a buffer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetScaling {
    /// Scale by `size_of::<T>()`: fixed-width value buffers and offsets arrays.
    ByElement,
    /// Skip an explicit number of bytes: fixed-stride value buffers, where the
    /// caller computes `offset * byte_width` itself.
    ByBytes(usize),
    /// Do not scale at all: payload buffers addressed by absolute offsets, and
    /// bit-packed buffers whose offset is applied at the bit level.
    Unscaled,
}

/// A read-only logical window into shared buffers.
///
/// `ArrayData` is produced by upstream producers and passed in read-only; the
/// traversal engine holds no state across calls, so concurrent traversal of
/// the same view is safe without coordination. The recorded `null_count` is
/// informational only — `0` is *not* a promise that the bitmap is absent.
#[derive(Debug, Clone)]
pub struct ArrayData {
    data_type: DataType,
    len: usize,
    offset: usize,
    null_count: usize,
    buffers: [Option<Buffer>; 3],
}

impl ArrayData {
    /// Assembles an array view from its parts.
    ///
    /// Structural well-formedness (bitmap covers `offset + len` bits, offsets
    /// array covers `offset + len + 1` entries, payload covers the last
    /// offset) is the producer's contract; this layer does not re-validate
    /// buffer contents.
    pub fn new(
        data_type: DataType,
        len: usize,
        offset: usize,
        null_count: usize,
        validity: Option<Buffer>,
        values: Option<Buffer>,
        payload: Option<Buffer>,
    ) -> Self {
        Self {
            data_type,
            len,
            offset,
            null_count,
            buffers: [validity, values, payload],
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Logical number of positions in this view.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical starting position within the underlying buffers.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Recorded null count. Informational only; never trusted to skip a scan.
    pub fn null_count(&self) -> usize {
        self.null_count
    }

    /// The validity bitmap buffer, if one is present.
    pub fn validity(&self) -> Option<&Buffer> {
        self.buffers[0].as_ref()
    }

    /// The validity bitmap's bytes, if present. Bit `offset + i` governs
    /// logical position `i`.
    pub fn validity_bytes(&self) -> Option<&[u8]> {
        self.buffers[0].as_ref().map(|b| b.as_slice())
    }

    /// Raw access to a buffer slot.
    pub fn buffer(&self, slot: usize) -> Option<&Buffer> {
        self.buffers.get(slot).and_then(|b| b.as_ref())
    }

    /// Typed view of a buffer slot, with the slice offset applied according
    /// to `scaling`.
    ///
    /// With `ByElement`, index 0 of the returned slice is logical position 0
    /// of this view. A required slot being absent is a malformed view from an
    /// upstream producer and surfaces as `InternalError`.
    pub fn typed_values<T: bytemuck::Pod>(
        &self,
        slot: usize,
        scaling: OffsetScaling,
    ) -> Result<&[T], KolomError> {
        let bytes = self.value_bytes(slot, OffsetScaling::Unscaled)?;
        let skip = match scaling {
            OffsetScaling::ByElement => self.offset * std::mem::size_of::<T>(),
            OffsetScaling::ByBytes(n) => n,
            OffsetScaling::Unscaled => 0,
        };
        safe_bytes_to_typed_slice(&bytes[skip..])
    }

    /// Byte view of a buffer slot, with the slice offset applied according
    /// to `scaling` (`ByElement` scales by one byte per element).
    pub fn value_bytes(&self, slot: usize, scaling: OffsetScaling) -> Result<&[u8], KolomError> {
        let buf = self.buffer(slot).ok_or_else(|| {
            KolomError::InternalError(format!(
                "required buffer slot {} is absent on a {} array",
                slot, self.data_type
            ))
        })?;
        let skip = match scaling {
            OffsetScaling::ByElement => self.offset,
            OffsetScaling::ByBytes(n) => n,
            OffsetScaling::Unscaled => 0,
        };
        Ok(&buf.as_slice()[skip..])
    }

    /// Returns a new view over `len` positions starting at logical position
    /// `offset` of this view. Buffers are shared, not copied.
    pub fn slice(&self, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= self.len, "slice out of bounds");
        Self {
            data_type: self.data_type,
            len,
            offset: self.offset + offset,
            // Still only a hint; clamp so it stays plausible for the window.
            null_count: self.null_count.min(len),
            buffers: self.buffers.clone(),
        }
    }
}
