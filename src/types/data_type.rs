//! This module defines the canonical, type-safe representation of logical types
//! used throughout the kolom traversal engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical, closed set of logical type tags.
///
/// Every tag maps to exactly one `PhysicalLayout` category via
/// [`DataType::physical_layout`], and every dispatch surface in the crate
/// switches exhaustively over this enum, so adding a variant is a compile-time
/// event: the compiler points at every match that must learn about it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataType {
    Null,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Date32,
    Date64,
    Time32,
    Time64,
    Timestamp,
    Duration,
    IntervalMonth,
    IntervalDayTime,
    Decimal128,
    Utf8,
    LargeUtf8,
    Binary,
    LargeBinary,
    /// Fixed-stride binary with a per-type byte width.
    FixedSizeBinary(i32),
    List,
    LargeList,
    FixedSizeList,
    Struct,
    Map,
    Dictionary,
    Extension,
}

/// The buffer-level decoding strategy shared by one or more logical types.
///
/// Slot semantics per category:
/// - `Primitive`: slot 1 holds fixed-width values, element-indexed.
/// - `Bits`: slot 1 holds bit-packed values, tested with the same bit
///   primitive the validity scanner uses.
/// - `VariableBinary` / `LargeVariableBinary`: slot 1 holds `len + 1`
///   offsets (i32 / i64), slot 2 holds the raw payload the offsets index
///   *without* any slice-offset adjustment.
/// - `FixedStride`: slot 1 holds `width`-byte values; the slice offset
///   scales into it in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalLayout {
    /// No value buffers at all; every position is null by definition.
    Null,
    /// Fixed-width values of `width` bytes in slot 1.
    Primitive { width: usize },
    /// Bit-packed values in slot 1.
    Bits,
    /// 32-bit offsets in slot 1, raw byte payload in slot 2.
    VariableBinary,
    /// 64-bit offsets in slot 1, raw byte payload in slot 2.
    LargeVariableBinary,
    /// `width`-byte values back to back in slot 1.
    FixedStride { width: usize },
    /// Values live in child arrays; not traversed by this engine.
    Nested,
    /// A keys array indexing a separate dictionary values array.
    Dictionary,
    /// Layout delegated to the extension's storage type.
    Extension,
}

impl DataType {
    /// Maps a tag to its single physical layout category.
    ///
    /// This is a total function over the closed set: the pairing is the
    /// registry the dispatcher relies on, so a tag without a layout cannot
    /// exist once this compiles.
    pub fn physical_layout(&self) -> PhysicalLayout {
        use DataType::*;
        match self {
            Null => PhysicalLayout::Null,
            Boolean => PhysicalLayout::Bits,
            Int8 | UInt8 => PhysicalLayout::Primitive { width: 1 },
            Int16 | UInt16 => PhysicalLayout::Primitive { width: 2 },
            Int32 | UInt32 | Float32 | Date32 | Time32 | IntervalMonth => {
                PhysicalLayout::Primitive { width: 4 }
            }
            Int64 | UInt64 | Float64 | Date64 | Time64 | Timestamp | Duration
            | IntervalDayTime => PhysicalLayout::Primitive { width: 8 },
            Decimal128 => PhysicalLayout::FixedStride { width: 16 },
            Utf8 | Binary => PhysicalLayout::VariableBinary,
            LargeUtf8 | LargeBinary => PhysicalLayout::LargeVariableBinary,
            FixedSizeBinary(w) => PhysicalLayout::FixedStride { width: *w as usize },
            List | LargeList | FixedSizeList | Struct | Map => PhysicalLayout::Nested,
            Dictionary => PhysicalLayout::Dictionary,
            Extension => PhysicalLayout::Extension,
        }
    }

    /// Returns the fixed element width in bytes for primitive-layout tags.
    pub fn primitive_width(&self) -> Option<usize> {
        match self.physical_layout() {
            PhysicalLayout::Primitive { width } => Some(width),
            _ => None,
        }
    }

    /// Returns `true` if the data type is a signed integer.
    pub fn is_signed_int(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns `true` if the data type is an unsigned integer.
    pub fn is_unsigned_int(&self) -> bool {
        matches!(self, Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64)
    }

    /// Returns `true` if the data type is any integer.
    pub fn is_integer(&self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Returns `true` if the data type is a floating-point number.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Returns `true` if the data type is an integer or a float.
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Returns `true` for date, time, timestamp, duration, and interval tags.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date32
                | Self::Date64
                | Self::Time32
                | Self::Time64
                | Self::Timestamp
                | Self::Duration
                | Self::IntervalMonth
                | Self::IntervalDayTime
        )
    }

    /// Returns `true` for tags whose values live in child arrays.
    pub fn is_nested(&self) -> bool {
        matches!(self.physical_layout(), PhysicalLayout::Nested)
    }
}

/// Provides the canonical string representation for a `DataType`.
impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // These string representations are part of the public contract:
        // dispatch errors carry them verbatim.
        write!(f, "{:?}", self)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// One entry per variant; tests that iterate the closed set use this.
    pub(crate) fn all_tags() -> Vec<DataType> {
        use DataType::*;
        vec![
            Null,
            Boolean,
            Int8,
            Int16,
            Int32,
            Int64,
            UInt8,
            UInt16,
            UInt32,
            UInt64,
            Float32,
            Float64,
            Date32,
            Date64,
            Time32,
            Time64,
            Timestamp,
            Duration,
            IntervalMonth,
            IntervalDayTime,
            Decimal128,
            Utf8,
            LargeUtf8,
            Binary,
            LargeBinary,
            FixedSizeBinary(7),
            List,
            LargeList,
            FixedSizeList,
            Struct,
            Map,
            Dictionary,
            Extension,
        ]
    }

    #[test]
    fn test_physical_layout_is_total() {
        // The match in physical_layout() is exhaustive, so this is really a
        // sanity check that the width bookkeeping agrees with the category.
        for tag in all_tags() {
            match tag.physical_layout() {
                PhysicalLayout::Primitive { width } => {
                    assert_eq!(tag.primitive_width(), Some(width));
                    assert!(matches!(width, 1 | 2 | 4 | 8));
                }
                PhysicalLayout::FixedStride { width } => {
                    assert!(width > 0);
                    assert_eq!(tag.primitive_width(), None);
                }
                _ => assert_eq!(tag.primitive_width(), None),
            }
        }
    }

    #[test]
    fn test_fixed_size_binary_width_flows_into_layout() {
        let tag = DataType::FixedSizeBinary(12);
        assert_eq!(
            tag.physical_layout(),
            PhysicalLayout::FixedStride { width: 12 }
        );
    }

    #[test]
    fn test_type_predicates() {
        assert!(DataType::Int64.is_signed_int());
        assert!(DataType::UInt8.is_unsigned_int());
        assert!(DataType::Float32.is_float());
        assert!(DataType::Timestamp.is_temporal());
        assert!(DataType::List.is_nested());
        assert!(!DataType::Utf8.is_numeric());
        assert!(DataType::Date32.is_temporal() && !DataType::Date32.is_integer());
    }

    #[test]
    fn test_display_matches_debug() {
        assert_eq!(DataType::Int32.to_string(), "Int32");
        assert_eq!(
            DataType::FixedSizeBinary(16).to_string(),
            "FixedSizeBinary(16)"
        );
    }

    #[test]
    fn test_serde_json_roundtrip() {
        for tag in all_tags() {
            let json = serde_json::to_string(&tag).unwrap();
            let back: DataType = serde_json::from_str(&json).unwrap();
            assert_eq!(tag, back);
        }
    }
}
