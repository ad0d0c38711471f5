//! This module defines `Scalar`, a single logical-type-tagged value independent
//! of any array.
//!
//! One variant per tag in the closed set; the payload is the concrete
//! representative for that tag, wrapped in `Option` where the tag admits a
//! null. The scalar dispatcher downcasts by matching here, the enum-level
//! mirror of per-tag scalar classes.

use crate::array::data::ArrayData;
use crate::types::DataType;

/// A single typed value, polymorphic over the closed type set.
#[derive(Debug, Clone)]
pub enum Scalar {
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Date32(Option<i32>),
    Date64(Option<i64>),
    Time32(Option<i32>),
    Time64(Option<i64>),
    Timestamp(Option<i64>),
    Duration(Option<i64>),
    IntervalMonth(Option<i32>),
    IntervalDayTime(Option<i64>),
    Decimal128(Option<i128>),
    Utf8(Option<String>),
    LargeUtf8(Option<String>),
    Binary(Option<Vec<u8>>),
    LargeBinary(Option<Vec<u8>>),
    /// Byte width plus the value; a present value has exactly that many bytes.
    FixedSizeBinary(i32, Option<Vec<u8>>),
    List(Option<ArrayData>),
    LargeList(Option<ArrayData>),
    FixedSizeList(Option<ArrayData>),
    Struct(Option<Vec<Scalar>>),
    Map(Option<ArrayData>),
    /// The dictionary-decoded value.
    Dictionary(Box<Scalar>),
    /// The underlying storage value.
    Extension(Box<Scalar>),
}

impl Scalar {
    /// The logical type tag of this scalar.
    pub fn data_type(&self) -> DataType {
        use Scalar::*;
        match self {
            Null => DataType::Null,
            Boolean(_) => DataType::Boolean,
            Int8(_) => DataType::Int8,
            Int16(_) => DataType::Int16,
            Int32(_) => DataType::Int32,
            Int64(_) => DataType::Int64,
            UInt8(_) => DataType::UInt8,
            UInt16(_) => DataType::UInt16,
            UInt32(_) => DataType::UInt32,
            UInt64(_) => DataType::UInt64,
            Float32(_) => DataType::Float32,
            Float64(_) => DataType::Float64,
            Date32(_) => DataType::Date32,
            Date64(_) => DataType::Date64,
            Time32(_) => DataType::Time32,
            Time64(_) => DataType::Time64,
            Timestamp(_) => DataType::Timestamp,
            Duration(_) => DataType::Duration,
            IntervalMonth(_) => DataType::IntervalMonth,
            IntervalDayTime(_) => DataType::IntervalDayTime,
            Decimal128(_) => DataType::Decimal128,
            Utf8(_) => DataType::Utf8,
            LargeUtf8(_) => DataType::LargeUtf8,
            Binary(_) => DataType::Binary,
            LargeBinary(_) => DataType::LargeBinary,
            FixedSizeBinary(w, _) => DataType::FixedSizeBinary(*w),
            List(_) => DataType::List,
            LargeList(_) => DataType::LargeList,
            FixedSizeList(_) => DataType::FixedSizeList,
            Struct(_) => DataType::Struct,
            Map(_) => DataType::Map,
            Dictionary(_) => DataType::Dictionary,
            Extension(_) => DataType::Extension,
        }
    }

    /// Returns `true` if the scalar holds a value (a `Null` scalar never does).
    pub fn is_valid(&self) -> bool {
        use Scalar::*;
        match self {
            Null => false,
            Boolean(v) => v.is_some(),
            Int8(v) => v.is_some(),
            Int16(v) => v.is_some(),
            Int32(v) => v.is_some(),
            Int64(v) => v.is_some(),
            UInt8(v) => v.is_some(),
            UInt16(v) => v.is_some(),
            UInt32(v) => v.is_some(),
            UInt64(v) => v.is_some(),
            Float32(v) => v.is_some(),
            Float64(v) => v.is_some(),
            Date32(v) => v.is_some(),
            Date64(v) => v.is_some(),
            Time32(v) => v.is_some(),
            Time64(v) => v.is_some(),
            Timestamp(v) => v.is_some(),
            Duration(v) => v.is_some(),
            IntervalMonth(v) => v.is_some(),
            IntervalDayTime(v) => v.is_some(),
            Decimal128(v) => v.is_some(),
            Utf8(v) => v.is_some(),
            LargeUtf8(v) => v.is_some(),
            Binary(v) => v.is_some(),
            LargeBinary(v) => v.is_some(),
            FixedSizeBinary(_, v) => v.is_some(),
            List(v) => v.is_some(),
            LargeList(v) => v.is_some(),
            FixedSizeList(v) => v.is_some(),
            Struct(v) => v.is_some(),
            Map(v) => v.is_some(),
            Dictionary(inner) => inner.is_valid(),
            Extension(inner) => inner.is_valid(),
        }
    }
}
