// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! End-to-end encoding tests through the public API.

mod common;

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use common::{hotel, hotel_value, person, Gender, HOTEL_BIG_ENDIAN};
use flatbytes::{
    encode_value, inspect_record, size, write_length_prefix, write_scalar, write_sequence,
    ByteOrder, CodecError, Encoder, EncoderConfig, Record, Scalar, Value,
};

// ============================================================================
// Reference Vector
// ============================================================================

#[test]
fn test_hotel_big_endian() {
    let mut encoder = Encoder::new();
    encoder.set_byte_order(ByteOrder::Big);
    let stream = encoder.encode(&hotel()).unwrap();
    assert_eq!(stream.as_bytes(), &HOTEL_BIG_ENDIAN);
    assert_eq!(stream.len(), 35);
}

#[test]
fn test_hotel_little_endian() {
    let stream = Encoder::new().encode(&hotel()).unwrap();
    let mut expected = HOTEL_BIG_ENDIAN;
    // Only the four length prefixes change
    for offset in [0usize, 10, 14, 26] {
        expected[offset..offset + 4].reverse();
    }
    assert_eq!(stream.as_bytes(), &expected);
}

#[test]
fn test_dynamic_tree_matches_static_types() {
    let encoder = Encoder::with_byte_order(ByteOrder::Big);
    assert_eq!(
        encoder.encode(&hotel_value()).unwrap(),
        encoder.encode(&hotel()).unwrap()
    );
}

#[test]
fn test_reference_genders() {
    let h = hotel();
    assert_eq!(h.manager.gender, Gender::Female);
    assert!(h.guests.iter().all(|guest| guest.gender == Gender::Male));

    // Female is 0 and Male is 1 on the wire
    let stream = Encoder::with_byte_order(ByteOrder::Big).encode(&h).unwrap();
    assert_eq!(stream[9], 0);
    assert_eq!(stream[25], 1);
    assert_eq!(stream[34], 1);
}

#[test]
fn test_component_sizes() {
    let h = hotel();
    assert_eq!(size(&h.manager).unwrap(), 10);
    assert_eq!(size(&h.guests[0]).unwrap(), 12);
    assert_eq!(size(&h.guests[1]).unwrap(), 9);
    assert_eq!(size(&h.guests).unwrap(), 25);
    assert_eq!(size(&h).unwrap(), 35);
}

// ============================================================================
// Byte Order
// ============================================================================

#[test]
fn test_toggle_byte_order_between_encodes() {
    let mut encoder = Encoder::new();
    let little = encoder.encode(&0x01020304u32).unwrap();
    encoder.set_byte_order(ByteOrder::Big);
    let big = encoder.encode(&0x01020304u32).unwrap();
    encoder.set_byte_order(ByteOrder::Little);
    let again = encoder.encode(&0x01020304u32).unwrap();

    assert_eq!(little.as_bytes(), &[4, 3, 2, 1]);
    assert_eq!(big.as_bytes(), &[1, 2, 3, 4]);
    assert_eq!(again, little);
}

#[test]
fn test_encoder_from_config() {
    let config = EncoderConfig::from_toml_str("byte_order = \"big\"").unwrap();
    let stream = Encoder::from_config(&config).encode(&hotel()).unwrap();
    assert_eq!(stream.as_bytes(), &HOTEL_BIG_ENDIAN);
}

#[test]
fn test_encoder_shared_across_threads() {
    let encoder = Arc::new(Encoder::with_byte_order(ByteOrder::Big));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let encoder = Arc::clone(&encoder);
            std::thread::spawn(move || encoder.encode(&hotel()).unwrap().into_vec())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), HOTEL_BIG_ENDIAN.to_vec());
    }
}

// ============================================================================
// Supported Shapes
// ============================================================================

#[test]
fn test_all_scalar_kinds_in_one_record() {
    struct Everything {
        a: i8,
        b: u8,
        c: i16,
        d: u16,
        e: i32,
        f: u32,
        g: i64,
        h: u64,
        i: f32,
        j: f64,
    }
    inspect_record!(Everything { a, b, c, d, e, f, g, h, i, j });

    let value = Everything {
        a: -1,
        b: 2,
        c: -3,
        d: 4,
        e: -5,
        f: 6,
        g: -7,
        h: 8,
        i: 9.5,
        j: -10.25,
    };
    let stream = Encoder::with_byte_order(ByteOrder::Big).encode(&value).unwrap();
    assert_eq!(stream.len(), 1 + 1 + 2 + 2 + 4 + 4 + 8 + 8 + 4 + 8);

    let mut expected = Vec::new();
    expected.extend((-1i8).to_be_bytes());
    expected.extend(2u8.to_be_bytes());
    expected.extend((-3i16).to_be_bytes());
    expected.extend(4u16.to_be_bytes());
    expected.extend((-5i32).to_be_bytes());
    expected.extend(6u32.to_be_bytes());
    expected.extend((-7i64).to_be_bytes());
    expected.extend(8u64.to_be_bytes());
    expected.extend(9.5f32.to_be_bytes());
    expected.extend((-10.25f64).to_be_bytes());
    assert_eq!(stream.into_vec(), expected);
}

#[test]
fn test_empty_sequence_and_empty_text() {
    let encoder = Encoder::with_byte_order(ByteOrder::Big);
    assert_eq!(encoder.encode(&Vec::<Value>::new()).unwrap().as_bytes(), &[0, 0, 0, 0]);
    assert_eq!(encoder.encode("").unwrap().as_bytes(), &[0, 0, 0, 0]);
}

#[test]
fn test_multibyte_text_counts_bytes() {
    let stream = Encoder::with_byte_order(ByteOrder::Big).encode("héllo").unwrap();
    assert_eq!(&stream[..4], &[0, 0, 0, 6]);
    assert_eq!(&stream[4..], "héllo".as_bytes());
}

#[test]
fn test_nested_sequences() {
    let nested: Vec<Vec<u16>> = vec![vec![1, 2], vec![], vec![3]];
    let stream = Encoder::with_byte_order(ByteOrder::Big).encode(&nested).unwrap();
    assert_eq!(
        stream.as_bytes(),
        &[
            0, 0, 0, 3, // outer count
            0, 0, 0, 2, 0, 1, 0, 2, // [1, 2]
            0, 0, 0, 0, // []
            0, 0, 0, 1, 0, 3, // [3]
        ]
    );
}

#[test]
fn test_fixed_arrays_are_length_prefixed() {
    let stream = Encoder::new().encode(&[7u8, 8, 9]).unwrap();
    assert_eq!(stream.as_bytes(), &[3, 0, 0, 0, 7, 8, 9]);
}

#[test]
fn test_wrappers_are_transparent() {
    let encoder = Encoder::new();
    let plain = encoder.encode(&person("Dan", 18, Gender::Male)).unwrap();
    let boxed = encoder.encode(&Box::new(person("Dan", 18, Gender::Male))).unwrap();
    let shared = encoder.encode(&Rc::new(person("Dan", 18, Gender::Male))).unwrap();
    let nested = encoder.encode(&&&person("Dan", 18, Gender::Male)).unwrap();
    assert_eq!(plain, boxed);
    assert_eq!(plain, shared);
    assert_eq!(plain, nested);
}

#[test]
fn test_tuples_encode_as_records() {
    let stream = Encoder::with_byte_order(ByteOrder::Big)
        .encode(&(1u8, "ab", 0x0203u16))
        .unwrap();
    assert_eq!(stream.as_bytes(), &[1, 0, 0, 0, 2, b'a', b'b', 2, 3]);
}

// ============================================================================
// Unsupported Types
// ============================================================================

#[test]
fn test_bool_field_is_unsupported() {
    struct Flagged {
        id: u32,
        active: bool,
    }
    inspect_record!(Flagged { id, active });

    let err = Encoder::new()
        .encode(&Flagged { id: 1, active: true })
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::UnsupportedType {
            type_name: "bool".to_string(),
            path: ".active".to_string(),
        }
    );
}

#[test]
fn test_map_inside_sequence_is_unsupported() {
    let err = size(&vec![HashMap::<u8, u8>::new()]).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported type 'HashMap' at '$[0]'");
}

#[test]
fn test_unsupported_in_dynamic_tree_reports_path() {
    let mut value = hotel_value();
    if let Value::Record(hotel) = &mut value {
        if let Some(Value::Sequence(guests)) = hotel
            .fields
            .iter_mut()
            .find(|f| f.name == "guests")
            .map(|f| &mut f.value)
        {
            guests.push(Value::Null);
        }
    }
    let err = Encoder::new().encode(&value).unwrap_err();
    assert!(err.is_unsupported_type());
    assert_eq!(err.to_string(), "Unsupported type 'null' at '$.guests[2]'");
}

#[test]
fn test_mixed_sequence_is_unsupported() {
    let mixed = Value::Sequence(vec![
        Value::UInt8(1),
        Value::text("ab"),
        Value::Float64(1.0),
    ]);
    let err = Encoder::with_byte_order(ByteOrder::Big)
        .encode(&mixed)
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::UnsupportedType {
            type_name: "heterogeneous sequence element".to_string(),
            path: "[1]".to_string(),
        }
    );
}

#[test]
fn test_guest_with_different_fields_is_unsupported() {
    let mut value = hotel_value();
    if let Value::Record(hotel) = &mut value {
        if let Some(Value::Sequence(guests)) = hotel
            .fields
            .iter_mut()
            .find(|f| f.name == "guests")
            .map(|f| &mut f.value)
        {
            guests.push(Value::Record(
                Record::new("Person")
                    .with_field("name", "Eve")
                    .with_field("age", 29u32)
                    .with_field("gender", 0u8),
            ));
        }
    }
    let err = size(&value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported type 'heterogeneous sequence element' at '$.guests[2]'"
    );
}

#[test]
fn test_platform_width_integers_are_unsupported() {
    assert!(size(&1usize).unwrap_err().is_unsupported_type());
    assert!(size(&vec![1isize]).unwrap_err().is_unsupported_type());
    assert!(size(&Some(1u8)).unwrap_err().is_unsupported_type());
}

// ============================================================================
// Component Operations
// ============================================================================

#[test]
fn test_component_operations_compose() {
    let mut buf = vec![0u8; 4 + 1 + 4 + 2 + 8];
    let mut cursor = write_scalar(&mut buf, 0, Scalar::Int32(-2), ByteOrder::Big).unwrap();
    cursor = write_scalar(&mut buf, cursor, Scalar::UInt8(9), ByteOrder::Big).unwrap();
    cursor = write_sequence(&mut buf, cursor, &[0xAAu8, 0xBB], ByteOrder::Big).unwrap();
    cursor = encode_value(&mut buf, cursor, "abcd", ByteOrder::Big).unwrap();
    assert_eq!(cursor, buf.len());
    assert_eq!(
        buf,
        vec![
            0xFF, 0xFF, 0xFF, 0xFE, 9, 0, 0, 0, 2, 0xAA, 0xBB, 0, 0, 0, 4, b'a', b'b', b'c', b'd'
        ]
    );
}

#[test]
fn test_write_length_prefix_past_end() {
    let mut buf = [0u8; 4];
    let err = write_length_prefix(&mut buf, 1, 1, ByteOrder::Little).unwrap_err();
    assert!(err.is_invariant_violation());
}
