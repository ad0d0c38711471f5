//! This module defines the physical-layout strategies: one typed view per
//! buffer encoding, each pairing slot access with the shared bit-run visitor.
//!
//! A view borrows from an `ArrayData` for its lifetime and decodes element
//! `i` according to its layout's rule:
//! - [`PrimitiveView`]: fixed-width value at element-scaled position.
//! - [`BooleanView`]: direct bit test at `offset + i`, the same primitive the
//!   validity scanner uses.
//! - [`BinaryView`]: `[offsets[i], offsets[i + 1])` window into a payload
//!   buffer that is *never* slice-offset-adjusted, because offsets are
//!   absolute positions into the unsliced payload.
//! - [`FixedStrideView`]: a byte cursor that starts at `offset * width` and
//!   advances by `width` through valid and null positions alike.
//!
//! Decode runs only for positions the run visitor classified as valid; a null
//! position never invokes decode (the fixed-stride cursor still advances, as
//! its positions are stride-addressed). Variable-length decodes hand out
//! borrowed slices, never copies.

use num_traits::PrimInt;

use crate::array::bit_util;
use crate::array::data::{ArrayData, OffsetScaling};
use crate::error::KolomError;
use crate::scan::bit_visit::{visit_bit_runs, visit_bit_runs_infallible};
use crate::types::PhysicalLayout;

//==================================================================================
// 1. Offset-width abstraction
//==================================================================================

/// The two offset widths variable-length layouts come in.
pub trait OffsetSize: PrimInt + bytemuck::Pod {
    /// Converts an offset value into a slice index.
    ///
    /// Offsets are non-negative in any well-formed array; a negative one can
    /// only come from a malformed producer, and `usize::MAX` guarantees the
    /// slice bounds check trips immediately instead of wrapping around.
    #[inline]
    fn as_index(self) -> usize {
        self.to_usize().unwrap_or(usize::MAX)
    }
}

impl OffsetSize for i32 {}
impl OffsetSize for i64 {}

//==================================================================================
// 2. Value-visitor adapter
//==================================================================================

/// Object-style consumer for a view's value sequence: one call per position,
/// `visit_value` for valid positions and `visit_null` for null ones.
///
/// This is the visitor-object twin of the closure-based `try_for_each`
/// convention; every view's `accept` drives it through the same run-optimized
/// scan, so the two observe identical sequences.
pub trait ValueVisitor<V> {
    fn visit_value(&mut self, value: V) -> Result<(), KolomError>;
    fn visit_null(&mut self) -> Result<(), KolomError>;
}

//==================================================================================
// 3. Fixed-width scalar values
//==================================================================================

/// Typed view over a fixed-width value array.
pub struct PrimitiveView<'a, T: bytemuck::Pod> {
    /// Element-scaled: index 0 is logical position 0 of the view.
    values: &'a [T],
    validity: Option<&'a [u8]>,
    offset: usize,
    len: usize,
}

impl<'a, T: bytemuck::Pod> PrimitiveView<'a, T> {
    pub fn try_new(data: &'a ArrayData) -> Result<Self, KolomError> {
        Ok(Self {
            values: data.typed_values::<T>(1, OffsetScaling::ByElement)?,
            validity: data.validity_bytes(),
            offset: data.offset(),
            len: data.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        match self.validity {
            None => true,
            Some(bytes) => bit_util::get_bit(bytes, self.offset + i),
        }
    }

    /// Value at position `i`; only meaningful for valid positions.
    #[inline]
    pub fn value(&self, i: usize) -> T {
        self.values[i]
    }

    /// Visits every position in order as `Some(value)` or `None`,
    /// short-circuiting on the first callback error.
    pub fn try_for_each<F>(&self, mut f: F) -> Result<(), KolomError>
    where
        F: FnMut(Option<T>) -> Result<(), KolomError>,
    {
        visit_bit_runs(self.validity, self.offset, self.len, |slot| {
            f(slot.map(|i| self.values[i]))
        })
    }

    /// Infallible twin of [`try_for_each`](Self::try_for_each).
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<T>),
    {
        visit_bit_runs_infallible(self.validity, self.offset, self.len, |slot| {
            f(slot.map(|i| self.values[i]))
        })
    }

    /// Drives a [`ValueVisitor`] over the same sequence `try_for_each` yields.
    pub fn accept<V: ValueVisitor<T>>(&self, visitor: &mut V) -> Result<(), KolomError> {
        self.try_for_each(|v| match v {
            Some(value) => visitor.visit_value(value),
            None => visitor.visit_null(),
        })
    }
}

//==================================================================================
// 4. Bit-packed booleans
//==================================================================================

/// View over a bit-packed boolean array.
pub struct BooleanView<'a> {
    /// Unscaled: the slice offset is applied per bit, not per byte.
    bits: &'a [u8],
    validity: Option<&'a [u8]>,
    offset: usize,
    len: usize,
}

impl<'a> BooleanView<'a> {
    pub fn try_new(data: &'a ArrayData) -> Result<Self, KolomError> {
        Ok(Self {
            bits: data.value_bytes(1, OffsetScaling::Unscaled)?,
            validity: data.validity_bytes(),
            offset: data.offset(),
            len: data.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        match self.validity {
            None => true,
            Some(bytes) => bit_util::get_bit(bytes, self.offset + i),
        }
    }

    #[inline]
    pub fn value(&self, i: usize) -> bool {
        bit_util::get_bit(self.bits, self.offset + i)
    }

    pub fn try_for_each<F>(&self, mut f: F) -> Result<(), KolomError>
    where
        F: FnMut(Option<bool>) -> Result<(), KolomError>,
    {
        visit_bit_runs(self.validity, self.offset, self.len, |slot| {
            f(slot.map(|i| self.value(i)))
        })
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<bool>),
    {
        visit_bit_runs_infallible(self.validity, self.offset, self.len, |slot| {
            f(slot.map(|i| self.value(i)))
        })
    }

    pub fn accept<V: ValueVisitor<bool>>(&self, visitor: &mut V) -> Result<(), KolomError> {
        self.try_for_each(|v| match v {
            Some(value) => visitor.visit_value(value),
            None => visitor.visit_null(),
        })
    }
}

//==================================================================================
// 5. Variable-length byte ranges
//==================================================================================

/// View over a variable-length string/binary array with `O`-width offsets.
pub struct BinaryView<'a, O: OffsetSize> {
    /// Element-scaled: entry `i` and `i + 1` delimit logical position `i`.
    offsets: &'a [O],
    /// Never offset-scaled; absent payload slot decodes as all-empty.
    payload: &'a [u8],
    validity: Option<&'a [u8]>,
    offset: usize,
    len: usize,
}

impl<'a, O: OffsetSize> BinaryView<'a, O> {
    pub fn try_new(data: &'a ArrayData) -> Result<Self, KolomError> {
        let payload = match data.buffer(2) {
            Some(buf) => buf.as_slice(),
            // An all-empty array may omit the payload buffer entirely; every
            // well-formed range is then empty and never dereferences it.
            None => &[],
        };
        Ok(Self {
            offsets: data.typed_values::<O>(1, OffsetScaling::ByElement)?,
            payload,
            validity: data.validity_bytes(),
            offset: data.offset(),
            len: data.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        match self.validity {
            None => true,
            Some(bytes) => bit_util::get_bit(bytes, self.offset + i),
        }
    }

    /// Borrowed byte range for position `i`. An empty range is a value, not a
    /// null.
    #[inline]
    pub fn value(&self, i: usize) -> &'a [u8] {
        let start = self.offsets[i].as_index();
        let end = self.offsets[i + 1].as_index();
        if start == end {
            &[]
        } else {
            &self.payload[start..end]
        }
    }

    pub fn try_for_each<F>(&self, mut f: F) -> Result<(), KolomError>
    where
        F: FnMut(Option<&'a [u8]>) -> Result<(), KolomError>,
    {
        visit_bit_runs(self.validity, self.offset, self.len, |slot| {
            f(slot.map(|i| self.value(i)))
        })
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<&'a [u8]>),
    {
        visit_bit_runs_infallible(self.validity, self.offset, self.len, |slot| {
            f(slot.map(|i| self.value(i)))
        })
    }

    pub fn accept<V: ValueVisitor<&'a [u8]>>(&self, visitor: &mut V) -> Result<(), KolomError> {
        self.try_for_each(|v| match v {
            Some(value) => visitor.visit_value(value),
            None => visitor.visit_null(),
        })
    }
}

//==================================================================================
// 6. Fixed-stride byte values
//==================================================================================

/// View over a fixed-stride binary array (fixed-size binary, 128-bit decimal).
///
/// Iteration keeps a byte cursor that advances by the stride on *every*
/// position, null or valid — positions are stride-addressed, so the cursor
/// must move uniformly regardless of validity. The direct-indexed views above
/// have no such cursor and must not grow one.
pub struct FixedStrideView<'a> {
    /// Starts at byte `offset * width` of slot 1.
    bytes: &'a [u8],
    width: usize,
    validity: Option<&'a [u8]>,
    offset: usize,
    len: usize,
}

impl<'a> FixedStrideView<'a> {
    pub fn try_new(data: &'a ArrayData) -> Result<Self, KolomError> {
        let width = match data.data_type().physical_layout() {
            PhysicalLayout::FixedStride { width } => width,
            other => {
                return Err(KolomError::InternalError(format!(
                    "FixedStrideView over a {} array with layout {:?}",
                    data.data_type(),
                    other
                )))
            }
        };
        Ok(Self {
            bytes: data.value_bytes(1, OffsetScaling::ByBytes(data.offset() * width))?,
            width,
            validity: data.validity_bytes(),
            offset: data.offset(),
            len: data.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The per-type byte width each position occupies.
    pub fn byte_width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        match self.validity {
            None => true,
            Some(bytes) => bit_util::get_bit(bytes, self.offset + i),
        }
    }

    /// Borrowed `width`-byte value at position `i`.
    #[inline]
    pub fn value(&self, i: usize) -> &'a [u8] {
        &self.bytes[i * self.width..(i + 1) * self.width]
    }

    pub fn try_for_each<F>(&self, mut f: F) -> Result<(), KolomError>
    where
        F: FnMut(Option<&'a [u8]>) -> Result<(), KolomError>,
    {
        let mut cursor = 0;
        visit_bit_runs(self.validity, self.offset, self.len, |slot| {
            let result = match slot {
                Some(_) => f(Some(&self.bytes[cursor..cursor + self.width])),
                None => f(None),
            };
            cursor += self.width;
            result
        })
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<&'a [u8]>),
    {
        let mut cursor = 0;
        visit_bit_runs_infallible(self.validity, self.offset, self.len, |slot| {
            match slot {
                Some(_) => f(Some(&self.bytes[cursor..cursor + self.width])),
                None => f(None),
            }
            cursor += self.width;
        })
    }

    pub fn accept<V: ValueVisitor<&'a [u8]>>(&self, visitor: &mut V) -> Result<(), KolomError> {
        self.try_for_each(|v| match v {
            Some(value) => visitor.visit_value(value),
            None => visitor.visit_null(),
        })
    }
}
