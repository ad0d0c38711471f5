//! This module is the single point where dynamic typing turns into static
//! typing: three entry points map a runtime tag — of a [`DataType`], an
//! [`ArrayData`], or a [`Scalar`] — onto the matching method of a
//! caller-supplied visitor, handing it the concrete typed representative.
//!
//! Each entry point is an exhaustive match over the closed tag set, so a tag
//! the switch does not know about is a compile error, not a runtime surprise.
//! The "not implemented" fallback therefore lives in the visitor traits: every
//! method defaults to returning `UnsupportedType` carrying the tag's display
//! name, so a visitor that has no branch for a tag reports it immediately and
//! no traversal starts. Dispatch never falls through silently.

use crate::array::data::ArrayData;
use crate::array::scalar::Scalar;
use crate::error::KolomError;
use crate::scan::views::{BinaryView, BooleanView, FixedStrideView, PrimitiveView};
use crate::types::DataType;

/// Generates visitor methods that default to the `UnsupportedType` error for
/// their tag, so implementors only write the branches they support.
macro_rules! visitor_methods {
    ($( fn $name:ident ( $($arg:ident : $ty:ty),* ) => $tag:expr );* $(;)?) => {
        $(
            fn $name(&mut self, $($arg: $ty),*) -> Result<(), KolomError> {
                $( let _ = $arg; )*
                Err(KolomError::UnsupportedType(($tag).to_string()))
            }
        )*
    };
}

//==================================================================================
// 1. Type dispatch
//==================================================================================

/// Visitor over bare type tags. Implement the methods for the tags you
/// support; the rest report `UnsupportedType`.
pub trait TypeVisitor {
    visitor_methods! {
        fn visit_null() => "Null";
        fn visit_boolean() => "Boolean";
        fn visit_int8() => "Int8";
        fn visit_int16() => "Int16";
        fn visit_int32() => "Int32";
        fn visit_int64() => "Int64";
        fn visit_uint8() => "UInt8";
        fn visit_uint16() => "UInt16";
        fn visit_uint32() => "UInt32";
        fn visit_uint64() => "UInt64";
        fn visit_float32() => "Float32";
        fn visit_float64() => "Float64";
        fn visit_date32() => "Date32";
        fn visit_date64() => "Date64";
        fn visit_time32() => "Time32";
        fn visit_time64() => "Time64";
        fn visit_timestamp() => "Timestamp";
        fn visit_duration() => "Duration";
        fn visit_interval_month() => "IntervalMonth";
        fn visit_interval_day_time() => "IntervalDayTime";
        fn visit_decimal128() => "Decimal128";
        fn visit_utf8() => "Utf8";
        fn visit_large_utf8() => "LargeUtf8";
        fn visit_binary() => "Binary";
        fn visit_large_binary() => "LargeBinary";
        fn visit_fixed_size_binary(byte_width: i32) => format!("FixedSizeBinary({})", byte_width);
        fn visit_list() => "List";
        fn visit_large_list() => "LargeList";
        fn visit_fixed_size_list() => "FixedSizeList";
        fn visit_struct() => "Struct";
        fn visit_map() => "Map";
        fn visit_dictionary() => "Dictionary";
        fn visit_extension() => "Extension";
    }
}

/// Dispatches a type tag to the matching `TypeVisitor` method.
pub fn visit_data_type<V: TypeVisitor>(
    data_type: &DataType,
    visitor: &mut V,
) -> Result<(), KolomError> {
    use DataType::*;
    match data_type {
        Null => visitor.visit_null(),
        Boolean => visitor.visit_boolean(),
        Int8 => visitor.visit_int8(),
        Int16 => visitor.visit_int16(),
        Int32 => visitor.visit_int32(),
        Int64 => visitor.visit_int64(),
        UInt8 => visitor.visit_uint8(),
        UInt16 => visitor.visit_uint16(),
        UInt32 => visitor.visit_uint32(),
        UInt64 => visitor.visit_uint64(),
        Float32 => visitor.visit_float32(),
        Float64 => visitor.visit_float64(),
        Date32 => visitor.visit_date32(),
        Date64 => visitor.visit_date64(),
        Time32 => visitor.visit_time32(),
        Time64 => visitor.visit_time64(),
        Timestamp => visitor.visit_timestamp(),
        Duration => visitor.visit_duration(),
        IntervalMonth => visitor.visit_interval_month(),
        IntervalDayTime => visitor.visit_interval_day_time(),
        Decimal128 => visitor.visit_decimal128(),
        Utf8 => visitor.visit_utf8(),
        LargeUtf8 => visitor.visit_large_utf8(),
        Binary => visitor.visit_binary(),
        LargeBinary => visitor.visit_large_binary(),
        FixedSizeBinary(w) => visitor.visit_fixed_size_binary(*w),
        List => visitor.visit_list(),
        LargeList => visitor.visit_large_list(),
        FixedSizeList => visitor.visit_fixed_size_list(),
        Struct => visitor.visit_struct(),
        Map => visitor.visit_map(),
        Dictionary => visitor.visit_dictionary(),
        Extension => visitor.visit_extension(),
    }
}

//==================================================================================
// 2. Array dispatch
//==================================================================================

/// Visitor over array views. Decodable tags hand over the typed view for
/// their physical layout; nested, dictionary, and extension tags hand over
/// the raw `ArrayData`, since their values live outside this engine.
pub trait ArrayVisitor {
    visitor_methods! {
        fn visit_null(array: &ArrayData) => "Null";
        fn visit_boolean(array: &BooleanView<'_>) => "Boolean";
        fn visit_int8(array: &PrimitiveView<'_, i8>) => "Int8";
        fn visit_int16(array: &PrimitiveView<'_, i16>) => "Int16";
        fn visit_int32(array: &PrimitiveView<'_, i32>) => "Int32";
        fn visit_int64(array: &PrimitiveView<'_, i64>) => "Int64";
        fn visit_uint8(array: &PrimitiveView<'_, u8>) => "UInt8";
        fn visit_uint16(array: &PrimitiveView<'_, u16>) => "UInt16";
        fn visit_uint32(array: &PrimitiveView<'_, u32>) => "UInt32";
        fn visit_uint64(array: &PrimitiveView<'_, u64>) => "UInt64";
        fn visit_float32(array: &PrimitiveView<'_, f32>) => "Float32";
        fn visit_float64(array: &PrimitiveView<'_, f64>) => "Float64";
        fn visit_date32(array: &PrimitiveView<'_, i32>) => "Date32";
        fn visit_date64(array: &PrimitiveView<'_, i64>) => "Date64";
        fn visit_time32(array: &PrimitiveView<'_, i32>) => "Time32";
        fn visit_time64(array: &PrimitiveView<'_, i64>) => "Time64";
        fn visit_timestamp(array: &PrimitiveView<'_, i64>) => "Timestamp";
        fn visit_duration(array: &PrimitiveView<'_, i64>) => "Duration";
        fn visit_interval_month(array: &PrimitiveView<'_, i32>) => "IntervalMonth";
        fn visit_interval_day_time(array: &PrimitiveView<'_, i64>) => "IntervalDayTime";
        fn visit_decimal128(array: &FixedStrideView<'_>) => "Decimal128";
        fn visit_utf8(array: &BinaryView<'_, i32>) => "Utf8";
        fn visit_large_utf8(array: &BinaryView<'_, i64>) => "LargeUtf8";
        fn visit_binary(array: &BinaryView<'_, i32>) => "Binary";
        fn visit_large_binary(array: &BinaryView<'_, i64>) => "LargeBinary";
        fn visit_fixed_size_binary(array: &FixedStrideView<'_>) =>
            format!("FixedSizeBinary({})", array.byte_width());
        fn visit_list(array: &ArrayData) => "List";
        fn visit_large_list(array: &ArrayData) => "LargeList";
        fn visit_fixed_size_list(array: &ArrayData) => "FixedSizeList";
        fn visit_struct(array: &ArrayData) => "Struct";
        fn visit_map(array: &ArrayData) => "Map";
        fn visit_dictionary(array: &ArrayData) => "Dictionary";
        fn visit_extension(array: &ArrayData) => "Extension";
    }
}

/// Dispatches an array view to the matching `ArrayVisitor` method, building
/// the typed view for the tag's physical layout.
pub fn visit_array<V: ArrayVisitor>(data: &ArrayData, visitor: &mut V) -> Result<(), KolomError> {
    log::trace!(
        "dispatching {} array of {} rows (offset {})",
        data.data_type(),
        data.len(),
        data.offset()
    );
    log_metric!("event" = "visit_array", "tag" = &data.data_type(), "rows" = &data.len());
    use DataType::*;
    match data.data_type() {
        Null => visitor.visit_null(data),
        Boolean => visitor.visit_boolean(&BooleanView::try_new(data)?),
        Int8 => visitor.visit_int8(&PrimitiveView::try_new(data)?),
        Int16 => visitor.visit_int16(&PrimitiveView::try_new(data)?),
        Int32 => visitor.visit_int32(&PrimitiveView::try_new(data)?),
        Int64 => visitor.visit_int64(&PrimitiveView::try_new(data)?),
        UInt8 => visitor.visit_uint8(&PrimitiveView::try_new(data)?),
        UInt16 => visitor.visit_uint16(&PrimitiveView::try_new(data)?),
        UInt32 => visitor.visit_uint32(&PrimitiveView::try_new(data)?),
        UInt64 => visitor.visit_uint64(&PrimitiveView::try_new(data)?),
        Float32 => visitor.visit_float32(&PrimitiveView::try_new(data)?),
        Float64 => visitor.visit_float64(&PrimitiveView::try_new(data)?),
        Date32 => visitor.visit_date32(&PrimitiveView::try_new(data)?),
        Date64 => visitor.visit_date64(&PrimitiveView::try_new(data)?),
        Time32 => visitor.visit_time32(&PrimitiveView::try_new(data)?),
        Time64 => visitor.visit_time64(&PrimitiveView::try_new(data)?),
        Timestamp => visitor.visit_timestamp(&PrimitiveView::try_new(data)?),
        Duration => visitor.visit_duration(&PrimitiveView::try_new(data)?),
        IntervalMonth => visitor.visit_interval_month(&PrimitiveView::try_new(data)?),
        IntervalDayTime => visitor.visit_interval_day_time(&PrimitiveView::try_new(data)?),
        Decimal128 => visitor.visit_decimal128(&FixedStrideView::try_new(data)?),
        Utf8 => visitor.visit_utf8(&BinaryView::<i32>::try_new(data)?),
        LargeUtf8 => visitor.visit_large_utf8(&BinaryView::<i64>::try_new(data)?),
        Binary => visitor.visit_binary(&BinaryView::<i32>::try_new(data)?),
        LargeBinary => visitor.visit_large_binary(&BinaryView::<i64>::try_new(data)?),
        FixedSizeBinary(_) => visitor.visit_fixed_size_binary(&FixedStrideView::try_new(data)?),
        List => visitor.visit_list(data),
        LargeList => visitor.visit_large_list(data),
        FixedSizeList => visitor.visit_fixed_size_list(data),
        Struct => visitor.visit_struct(data),
        Map => visitor.visit_map(data),
        Dictionary => visitor.visit_dictionary(data),
        Extension => visitor.visit_extension(data),
    }
}

//==================================================================================
// 3. Scalar dispatch
//==================================================================================

/// Visitor over scalar values. Each method receives the concrete payload for
/// its tag; `None` payloads are null scalars of that tag.
pub trait ScalarVisitor {
    visitor_methods! {
        fn visit_null() => "Null";
        fn visit_boolean(value: Option<bool>) => "Boolean";
        fn visit_int8(value: Option<i8>) => "Int8";
        fn visit_int16(value: Option<i16>) => "Int16";
        fn visit_int32(value: Option<i32>) => "Int32";
        fn visit_int64(value: Option<i64>) => "Int64";
        fn visit_uint8(value: Option<u8>) => "UInt8";
        fn visit_uint16(value: Option<u16>) => "UInt16";
        fn visit_uint32(value: Option<u32>) => "UInt32";
        fn visit_uint64(value: Option<u64>) => "UInt64";
        fn visit_float32(value: Option<f32>) => "Float32";
        fn visit_float64(value: Option<f64>) => "Float64";
        fn visit_date32(value: Option<i32>) => "Date32";
        fn visit_date64(value: Option<i64>) => "Date64";
        fn visit_time32(value: Option<i32>) => "Time32";
        fn visit_time64(value: Option<i64>) => "Time64";
        fn visit_timestamp(value: Option<i64>) => "Timestamp";
        fn visit_duration(value: Option<i64>) => "Duration";
        fn visit_interval_month(value: Option<i32>) => "IntervalMonth";
        fn visit_interval_day_time(value: Option<i64>) => "IntervalDayTime";
        fn visit_decimal128(value: Option<i128>) => "Decimal128";
        fn visit_utf8(value: Option<&str>) => "Utf8";
        fn visit_large_utf8(value: Option<&str>) => "LargeUtf8";
        fn visit_binary(value: Option<&[u8]>) => "Binary";
        fn visit_large_binary(value: Option<&[u8]>) => "LargeBinary";
        fn visit_fixed_size_binary(byte_width: i32, value: Option<&[u8]>) =>
            format!("FixedSizeBinary({})", byte_width);
        fn visit_list(value: Option<&ArrayData>) => "List";
        fn visit_large_list(value: Option<&ArrayData>) => "LargeList";
        fn visit_fixed_size_list(value: Option<&ArrayData>) => "FixedSizeList";
        fn visit_struct(value: Option<&[Scalar]>) => "Struct";
        fn visit_map(value: Option<&ArrayData>) => "Map";
        fn visit_dictionary(value: &Scalar) => "Dictionary";
        fn visit_extension(value: &Scalar) => "Extension";
    }
}

/// Dispatches a scalar to the matching `ScalarVisitor` method.
pub fn visit_scalar<V: ScalarVisitor>(scalar: &Scalar, visitor: &mut V) -> Result<(), KolomError> {
    log::trace!("dispatching {} scalar", scalar.data_type());
    match scalar {
        Scalar::Null => visitor.visit_null(),
        Scalar::Boolean(v) => visitor.visit_boolean(*v),
        Scalar::Int8(v) => visitor.visit_int8(*v),
        Scalar::Int16(v) => visitor.visit_int16(*v),
        Scalar::Int32(v) => visitor.visit_int32(*v),
        Scalar::Int64(v) => visitor.visit_int64(*v),
        Scalar::UInt8(v) => visitor.visit_uint8(*v),
        Scalar::UInt16(v) => visitor.visit_uint16(*v),
        Scalar::UInt32(v) => visitor.visit_uint32(*v),
        Scalar::UInt64(v) => visitor.visit_uint64(*v),
        Scalar::Float32(v) => visitor.visit_float32(*v),
        Scalar::Float64(v) => visitor.visit_float64(*v),
        Scalar::Date32(v) => visitor.visit_date32(*v),
        Scalar::Date64(v) => visitor.visit_date64(*v),
        Scalar::Time32(v) => visitor.visit_time32(*v),
        Scalar::Time64(v) => visitor.visit_time64(*v),
        Scalar::Timestamp(v) => visitor.visit_timestamp(*v),
        Scalar::Duration(v) => visitor.visit_duration(*v),
        Scalar::IntervalMonth(v) => visitor.visit_interval_month(*v),
        Scalar::IntervalDayTime(v) => visitor.visit_interval_day_time(*v),
        Scalar::Decimal128(v) => visitor.visit_decimal128(*v),
        Scalar::Utf8(v) => visitor.visit_utf8(v.as_deref()),
        Scalar::LargeUtf8(v) => visitor.visit_large_utf8(v.as_deref()),
        Scalar::Binary(v) => visitor.visit_binary(v.as_deref()),
        Scalar::LargeBinary(v) => visitor.visit_large_binary(v.as_deref()),
        Scalar::FixedSizeBinary(w, v) => visitor.visit_fixed_size_binary(*w, v.as_deref()),
        Scalar::List(v) => visitor.visit_list(v.as_ref()),
        Scalar::LargeList(v) => visitor.visit_large_list(v.as_ref()),
        Scalar::FixedSizeList(v) => visitor.visit_fixed_size_list(v.as_ref()),
        Scalar::Struct(v) => visitor.visit_struct(v.as_deref()),
        Scalar::Map(v) => visitor.visit_map(v.as_ref()),
        Scalar::Dictionary(inner) => visitor.visit_dictionary(inner),
        Scalar::Extension(inner) => visitor.visit_extension(inner),
    }
}
