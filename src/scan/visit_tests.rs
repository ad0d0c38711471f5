//==================================================================================
// Cross-cutting traversal laws
//==================================================================================
// The per-module unit tests cover each piece in isolation; this file checks
// the laws that only hold when scanner, views, and dispatch compose: bitmap
// equivalence, short-circuiting, per-slot offset scaling, and the
// convention-equivalence of the two callback forms.

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::array::bit_util;
    use crate::array::buffer::Buffer;
    use crate::array::data::ArrayData;
    use crate::error::KolomError;
    use crate::scan::views::{BinaryView, BooleanView, FixedStrideView, PrimitiveView, ValueVisitor};

    /// Builds an Int32 array over `values`, with an optional validity mask of
    /// the same (physical) length, windowed at `offset` for `len` positions.
    fn int32_array(values: &[i32], validity: Option<&[bool]>, offset: usize, len: usize) -> ArrayData {
        assert!(offset + len <= values.len());
        let null_count = validity
            .map(|v| v[offset..offset + len].iter().filter(|b| !**b).count())
            .unwrap_or(0);
        ArrayData::new(
            crate::types::DataType::Int32,
            len,
            offset,
            null_count,
            validity.map(Buffer::from_bit_slice),
            Some(Buffer::from_typed_slice(values)),
            None,
        )
    }

    fn collect_int32(data: &ArrayData) -> Vec<Option<i32>> {
        let view = PrimitiveView::<i32>::try_new(data).unwrap();
        let mut out = Vec::new();
        view.for_each(|v| out.push(v));
        out
    }

    //------------------------------------------------------------------------------
    // Bitmap equivalence laws
    //------------------------------------------------------------------------------

    #[test]
    fn test_absent_bitmap_visits_every_position_as_valid() {
        let data = int32_array(&[5, 6, 7, 8], None, 0, 4);
        assert_eq!(
            collect_int32(&data),
            vec![Some(5), Some(6), Some(7), Some(8)]
        );
    }

    #[test]
    fn test_all_ones_bitmap_identical_to_absent_bitmap() {
        let values: Vec<i32> = (0..130).collect();
        let all_set = vec![true; 130];
        let with_bitmap = int32_array(&values, Some(&all_set), 0, 130);
        let without_bitmap = int32_array(&values, None, 0, 130);
        assert_eq!(collect_int32(&with_bitmap), collect_int32(&without_bitmap));
    }

    #[test]
    fn test_mixed_bitmap_matches_per_bit_ground_truth() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = StdRng::seed_from_u64(0xC0_10_4B);

        for &offset in &[0usize, 1, 3, 63, 64] {
            for &len in &[0usize, 1, 7, 64, 65, 200] {
                let physical = offset + len;
                let values: Vec<i32> = (0..physical as i32).collect();
                let bits: Vec<bool> = (0..physical).map(|_| rng.random::<bool>()).collect();
                let data = int32_array(&values, Some(&bits), offset, len);

                // Ground truth: test every bit individually with the base
                // primitive. Run-based scanning must be unobservable.
                let bitmap = Buffer::from_bit_slice(&bits);
                let expected: Vec<Option<i32>> = (0..len)
                    .map(|i| {
                        bit_util::get_bit(bitmap.as_slice(), offset + i)
                            .then(|| values[offset + i])
                    })
                    .collect();

                assert_eq!(collect_int32(&data), expected, "offset={offset} len={len}");
            }
        }
    }

    #[test]
    fn test_fallible_and_infallible_conventions_observe_same_sequence() {
        let bits = [true, false, true, true, false, false, true];
        let values: Vec<i32> = (0..7).collect();
        let data = int32_array(&values, Some(&bits), 0, 7);
        let view = PrimitiveView::<i32>::try_new(&data).unwrap();

        let mut fallible = Vec::new();
        view.try_for_each(|v| {
            fallible.push(v);
            Ok(())
        })
        .unwrap();
        assert_eq!(fallible, collect_int32(&data));
    }

    //------------------------------------------------------------------------------
    // Short-circuit law
    //------------------------------------------------------------------------------

    #[test]
    fn test_short_circuit_stops_at_failing_position() {
        let values: Vec<i32> = (0..100).collect();
        let data = int32_array(&values, None, 0, 100);
        let view = PrimitiveView::<i32>::try_new(&data).unwrap();

        let mut visited = Vec::new();
        let err = view
            .try_for_each(|v| {
                if v == Some(5) {
                    return Err(KolomError::InternalError("halt".to_string()));
                }
                visited.push(v);
                Ok(())
            })
            .unwrap_err();

        assert_eq!(visited.len(), 5);
        assert!(visited.iter().all(|v| v.map(|x| x < 5).unwrap_or(false)));
        // The stopping result comes back unchanged.
        assert!(matches!(err, KolomError::InternalError(msg) if msg == "halt"));
    }

    //------------------------------------------------------------------------------
    // Variable-length decode laws
    //------------------------------------------------------------------------------

    fn utf8_array(
        offsets: &[i32],
        payload: Option<&[u8]>,
        validity: Option<&[bool]>,
    ) -> ArrayData {
        let len = offsets.len() - 1;
        ArrayData::new(
            crate::types::DataType::Utf8,
            len,
            0,
            0,
            validity.map(Buffer::from_bit_slice),
            Some(Buffer::from_typed_slice(offsets)),
            payload.map(|p| Buffer::from_vec(p.to_vec())),
        )
    }

    #[test]
    fn test_variable_length_decode_empty_value_is_not_null() {
        let data = utf8_array(&[0, 3, 3, 7], Some(b"abcdefg"), None);
        let view = BinaryView::<i32>::try_new(&data).unwrap();

        let mut out: Vec<Option<&[u8]>> = Vec::new();
        view.for_each(|v| out.push(v));
        assert_eq!(
            out,
            vec![
                Some(b"abc".as_slice()),
                Some(b"".as_slice()),
                Some(b"defg".as_slice())
            ]
        );
    }

    #[test]
    fn test_variable_length_absent_payload_decodes_empty() {
        let data = utf8_array(&[0, 0, 0, 0], None, Some(&[true, false, true]));
        let view = BinaryView::<i32>::try_new(&data).unwrap();

        let mut out: Vec<Option<usize>> = Vec::new();
        view.for_each(|v| out.push(v.map(|bytes| bytes.len())));
        assert_eq!(out, vec![Some(0), None, Some(0)]);
    }

    #[test]
    fn test_variable_length_offsets_slot_scales_but_payload_does_not() {
        // Physical array: ["ab", "cde", "f"], sliced to the last two values.
        // The offsets lookup moves with the slice; the payload indexing must
        // not, because offsets are absolute into the unsliced payload.
        let data = ArrayData::new(
            crate::types::DataType::Utf8,
            2,
            1,
            0,
            None,
            Some(Buffer::from_typed_slice(&[0i32, 2, 5, 6])),
            Some(Buffer::from_vec(b"abcdef".to_vec())),
        );
        let view = BinaryView::<i32>::try_new(&data).unwrap();
        assert_eq!(view.value(0), b"cde");
        assert_eq!(view.value(1), b"f");
    }

    #[test]
    fn test_large_offset_variant_behaves_identically() {
        let data = ArrayData::new(
            crate::types::DataType::LargeUtf8,
            3,
            0,
            0,
            None,
            Some(Buffer::from_typed_slice(&[0i64, 3, 3, 7])),
            Some(Buffer::from_vec(b"abcdefg".to_vec())),
        );
        let view = BinaryView::<i64>::try_new(&data).unwrap();
        assert_eq!(view.value(0), b"abc");
        assert_eq!(view.value(1), b"");
        assert_eq!(view.value(2), b"defg");
    }

    //------------------------------------------------------------------------------
    // Slice-offset laws
    //------------------------------------------------------------------------------

    #[test]
    fn test_fixed_stride_slice_offset_scales_in_bytes_and_bitmap_in_bits() {
        // 8 positions of width 4; slicing at logical offset 2 must begin
        // decoding at byte 8, while validity for sliced position 0 tests bit
        // index 2 of the original bitmap.
        let bytes: Vec<u8> = (0..32u8).collect();
        let mut bits = vec![true; 8];
        bits[0] = false; // would poison position 0 if the bitmap were not re-based
        bits[3] = false; // sliced position 1
        let data = ArrayData::new(
            crate::types::DataType::FixedSizeBinary(4),
            6,
            2,
            1,
            Some(Buffer::from_bit_slice(&bits)),
            Some(Buffer::from_vec(bytes)),
            None,
        );
        let view = FixedStrideView::try_new(&data).unwrap();
        assert_eq!(view.byte_width(), 4);
        assert!(view.is_valid(0));
        assert!(!view.is_valid(1));
        assert_eq!(view.value(0), &[8, 9, 10, 11]);

        let mut out: Vec<Option<Vec<u8>>> = Vec::new();
        view.for_each(|v| out.push(v.map(|b| b.to_vec())));
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].as_deref(), Some([8u8, 9, 10, 11].as_slice()));
        assert_eq!(out[1], None);
        assert_eq!(out[2].as_deref(), Some([16u8, 17, 18, 19].as_slice()));
    }

    #[test]
    fn test_fixed_stride_cursor_advances_through_nulls() {
        let data = ArrayData::new(
            crate::types::DataType::FixedSizeBinary(2),
            3,
            0,
            1,
            Some(Buffer::from_bit_slice(&[true, false, true])),
            Some(Buffer::from_vec(vec![0xA0, 0xA1, 0xB0, 0xB1, 0xC0, 0xC1])),
            None,
        );
        let view = FixedStrideView::try_new(&data).unwrap();

        let mut out: Vec<Option<Vec<u8>>> = Vec::new();
        view.for_each(|v| out.push(v.map(|b| b.to_vec())));
        // The null in the middle still consumed its stride: the third value
        // is the bytes at 4..6, not 2..4.
        assert_eq!(
            out,
            vec![
                Some(vec![0xA0, 0xA1]),
                None,
                Some(vec![0xC0, 0xC1]),
            ]
        );
    }

    #[test]
    fn test_boolean_slice_offset_applies_to_values_and_validity() {
        // Physical bits:  v a l u e s = [t f t t f]
        //                 v a l i d   = [t t f t t]
        // Sliced at 1, len 3 → values [f t t], validity [t f t].
        let data = ArrayData::new(
            crate::types::DataType::Boolean,
            3,
            1,
            1,
            Some(Buffer::from_bit_slice(&[true, true, false, true, true])),
            Some(Buffer::from_bit_slice(&[true, false, true, true, false])),
            None,
        );
        let view = BooleanView::try_new(&data).unwrap();
        let mut out = Vec::new();
        view.for_each(|v| out.push(v));
        assert_eq!(out, vec![Some(false), None, Some(true)]);
    }

    #[test]
    fn test_primitive_slice_offset_scales_by_element() {
        let values: Vec<i32> = (100..110).collect();
        let data = int32_array(&values, None, 4, 3);
        assert_eq!(collect_int32(&data), vec![Some(104), Some(105), Some(106)]);
    }

    //------------------------------------------------------------------------------
    // Value-visitor adapter
    //------------------------------------------------------------------------------

    #[test]
    fn test_value_visitor_adapter_observes_closure_sequence() {
        #[derive(Default)]
        struct Collector {
            seen: Vec<Option<i32>>,
        }
        impl ValueVisitor<i32> for Collector {
            fn visit_value(&mut self, value: i32) -> Result<(), KolomError> {
                self.seen.push(Some(value));
                Ok(())
            }
            fn visit_null(&mut self) -> Result<(), KolomError> {
                self.seen.push(None);
                Ok(())
            }
        }

        let bits = [true, false, false, true];
        let data = int32_array(&[9, 8, 7, 6], Some(&bits), 0, 4);
        let view = PrimitiveView::<i32>::try_new(&data).unwrap();

        let mut collector = Collector::default();
        view.accept(&mut collector).unwrap();
        assert_eq!(collector.seen, collect_int32(&data));
    }
}
