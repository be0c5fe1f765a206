//! Conversion Tests
//!
//! Tests verify:
//! - Bulk string parsing into numbers, bools, strings and bytes
//! - Integer replies with range checks per width
//! - Array replies into typed and opaque sequences
//! - Nil, error and skip semantics

use replyscan::convert::{convert, convert_bulk, convert_int, SeqSlot};
use replyscan::{ErrorKind, Scan, ScanError, Skip, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn bulk(s: &str) -> Value {
    Value::from(s)
}

fn convert_into<T: Scan>(dest: &mut T, value: &Value) -> Result<(), ScanError> {
    convert(dest.slot(), value)
}

fn kind_of(result: Result<(), ScanError>) -> ErrorKind {
    result.unwrap_err().kind()
}

// =============================================================================
// Bulk String Tests
// =============================================================================

#[test]
fn test_bulk_to_signed_integers() {
    let mut a = 0i8;
    let mut b = 0i32;
    let mut c = 0i64;
    let mut d = 0isize;

    convert_into(&mut a, &bulk("-128")).unwrap();
    convert_into(&mut b, &bulk("+2147483647")).unwrap();
    convert_into(&mut c, &bulk("-9223372036854775808")).unwrap();
    convert_into(&mut d, &bulk("42")).unwrap();

    assert_eq!(a, -128);
    assert_eq!(b, i32::MAX);
    assert_eq!(c, i64::MIN);
    assert_eq!(d, 42);
}

#[test]
fn test_bulk_to_unsigned_integers() {
    let mut a = 0u8;
    let mut b = 0u64;

    convert_into(&mut a, &bulk("255")).unwrap();
    convert_into(&mut b, &bulk("18446744073709551615")).unwrap();

    assert_eq!(a, 255);
    assert_eq!(b, u64::MAX);
}

#[test]
fn test_bulk_integer_overflow_is_range_error() {
    let mut a = 0i8;
    assert_eq!(kind_of(convert_into(&mut a, &bulk("128"))), ErrorKind::Range);
    assert_eq!(kind_of(convert_into(&mut a, &bulk("-129"))), ErrorKind::Range);

    let mut b = 0u16;
    assert_eq!(kind_of(convert_into(&mut b, &bulk("65536"))), ErrorKind::Range);

    // Never silently truncated
    assert_eq!(a, 0);
    assert_eq!(b, 0);
}

#[test]
fn test_bulk_malformed_integer_is_parse_error() {
    let mut n = 7i64;
    for text in ["", "abc", "1.5", " 1", "0x10"] {
        assert_eq!(kind_of(convert_into(&mut n, &bulk(text))), ErrorKind::Parse, "{:?}", text);
    }
    assert_eq!(n, 7);

    let mut u = 0u32;
    assert_eq!(kind_of(convert_into(&mut u, &bulk("-1"))), ErrorKind::Parse);
}

#[test]
fn test_bulk_invalid_utf8_number_is_parse_error() {
    let mut n = 0i64;
    let value = Value::from(vec![0xff, 0xfe]);
    assert_eq!(kind_of(convert_into(&mut n, &value)), ErrorKind::Parse);
}

#[test]
fn test_bulk_to_floats() {
    let mut a = 0f32;
    let mut b = 0f64;

    convert_into(&mut a, &bulk("1.5")).unwrap();
    convert_into(&mut b, &bulk("-2.25e3")).unwrap();

    assert_eq!(a, 1.5);
    assert_eq!(b, -2250.0);
}

#[test]
fn test_bulk_float_infinity_literals() {
    let mut f = 0f64;
    convert_into(&mut f, &bulk("inf")).unwrap();
    assert!(f.is_infinite() && f > 0.0);

    convert_into(&mut f, &bulk("-Infinity")).unwrap();
    assert!(f.is_infinite() && f < 0.0);
}

#[test]
fn test_bulk_float_overflow_is_range_error() {
    let mut a = 0f32;
    assert_eq!(kind_of(convert_into(&mut a, &bulk("1e40"))), ErrorKind::Range);

    let mut b = 0f64;
    assert_eq!(kind_of(convert_into(&mut b, &bulk("1e400"))), ErrorKind::Range);
    convert_into(&mut b, &bulk("1e40")).unwrap();
    assert_eq!(b, 1e40);
}

#[test]
fn test_bulk_malformed_float_is_parse_error() {
    let mut f = 0f64;
    assert_eq!(kind_of(convert_into(&mut f, &bulk("one"))), ErrorKind::Parse);
}

#[test]
fn test_bulk_to_bool() {
    let mut b = false;
    for text in ["1", "t", "T", "TRUE", "true", "True"] {
        b = false;
        convert_into(&mut b, &bulk(text)).unwrap();
        assert!(b, "{:?}", text);
    }
    for text in ["0", "f", "F", "FALSE", "false", "False"] {
        b = true;
        convert_into(&mut b, &bulk(text)).unwrap();
        assert!(!b, "{:?}", text);
    }
    for text in ["yes", "tRUE", "2", ""] {
        assert_eq!(kind_of(convert_into(&mut b, &bulk(text))), ErrorKind::Parse, "{:?}", text);
    }
}

#[test]
fn test_bulk_to_string_and_bytes() {
    let mut s = String::from("old");
    let mut bytes = vec![9u8; 16];

    convert_into(&mut s, &bulk("héllo")).unwrap();
    convert_into(&mut bytes, &Value::from(vec![0u8, 1, 2, 255])).unwrap();

    assert_eq!(s, "héllo");
    assert_eq!(bytes, vec![0u8, 1, 2, 255]);
}

#[test]
fn test_invalid_utf8_bulk_into_string_is_lossy() {
    let raw = Value::from(vec![b'o', b'k', 0xff, b'!']);
    let mut s = String::new();
    let mut bytes: Vec<u8> = Vec::new();

    convert_into(&mut s, &raw).unwrap();
    convert_into(&mut bytes, &raw).unwrap();

    assert_eq!(s, "ok\u{FFFD}!");
    // Byte destinations keep the payload exactly
    assert_eq!(bytes, vec![b'o', b'k', 0xff, b'!']);
}

#[test]
fn test_bulk_to_any() {
    let mut any = Value::Nil;
    convert_into(&mut any, &bulk("x")).unwrap();
    assert_eq!(any, bulk("x"));
}

#[test]
fn test_bulk_to_sequence_is_type_mismatch() {
    let mut seq: Vec<i64> = Vec::new();
    assert_eq!(kind_of(convert_into(&mut seq, &bulk("1"))), ErrorKind::TypeMismatch);

    let mut values: Vec<Value> = Vec::new();
    assert_eq!(kind_of(convert_into(&mut values, &bulk("1"))), ErrorKind::TypeMismatch);
}

// =============================================================================
// Integer Reply Tests
// =============================================================================

#[test]
fn test_int_in_range_round_trips() {
    let mut a = 0i8;
    let mut b = 0i16;
    let mut c = 0i32;
    let mut d = 0i64;
    let mut e = 0u8;
    let mut f = 0u32;
    let mut g = 0u64;

    convert_into(&mut a, &Value::Int(-128)).unwrap();
    convert_into(&mut b, &Value::Int(32767)).unwrap();
    convert_into(&mut c, &Value::Int(-5)).unwrap();
    convert_into(&mut d, &Value::Int(i64::MAX)).unwrap();
    convert_into(&mut e, &Value::Int(255)).unwrap();
    convert_into(&mut f, &Value::Int(4_000_000_000)).unwrap();
    convert_into(&mut g, &Value::Int(i64::MAX)).unwrap();

    assert_eq!((a, b, c, d), (-128, 32767, -5, i64::MAX));
    assert_eq!((e, f, g), (255, 4_000_000_000, i64::MAX as u64));
}

#[test]
fn test_int_out_of_range_is_range_error() {
    let mut a = 3i8;
    assert_eq!(kind_of(convert_into(&mut a, &Value::Int(200))), ErrorKind::Range);
    assert_eq!(a, 3);

    let mut b = 0i32;
    assert_eq!(kind_of(convert_into(&mut b, &Value::Int(1 << 40))), ErrorKind::Range);

    let mut c = 0u8;
    assert_eq!(kind_of(convert_into(&mut c, &Value::Int(256))), ErrorKind::Range);
}

#[test]
fn test_negative_int_into_unsigned_is_range_error() {
    let mut u = 1u64;
    let err = convert_into(&mut u, &Value::Int(-1)).unwrap_err();
    assert_eq!(
        err,
        ScanError::Range {
            value: "-1".to_string(),
            target: "u64"
        }
    );
    assert_eq!(u, 1);
}

#[test]
fn test_int_to_bool() {
    let mut b = false;
    convert_into(&mut b, &Value::Int(-3)).unwrap();
    assert!(b);
    convert_into(&mut b, &Value::Int(0)).unwrap();
    assert!(!b);
}

#[test]
fn test_int_to_other_kinds_is_type_mismatch() {
    let mut s = String::new();
    let mut f = 0f64;
    let mut bytes = Vec::<u8>::new();

    assert_eq!(kind_of(convert_into(&mut s, &Value::Int(1))), ErrorKind::TypeMismatch);
    assert_eq!(kind_of(convert_into(&mut f, &Value::Int(1))), ErrorKind::TypeMismatch);
    assert_eq!(kind_of(convert_into(&mut bytes, &Value::Int(1))), ErrorKind::TypeMismatch);
}

#[test]
fn test_int_to_any() {
    let mut any = Value::Nil;
    convert_into(&mut any, &Value::Int(12)).unwrap();
    assert_eq!(any, Value::Int(12));
}

// =============================================================================
// Array Reply Tests
// =============================================================================

#[test]
fn test_array_to_typed_sequence() {
    let reply = Value::Array(vec![bulk("1"), Value::Int(2), bulk("-3")]);
    let mut seq: Vec<i32> = Vec::new();

    convert_into(&mut seq, &reply).unwrap();
    assert_eq!(seq, vec![1, 2, -3]);
}

#[test]
fn test_array_to_string_and_bytes_sequences() {
    let reply = Value::Array(vec![bulk("a"), bulk("bc")]);

    let mut strings: Vec<String> = Vec::new();
    convert_into(&mut strings, &reply).unwrap();
    assert_eq!(strings, vec!["a".to_string(), "bc".to_string()]);

    let mut blobs: Vec<Vec<u8>> = Vec::new();
    convert_into(&mut blobs, &reply).unwrap();
    assert_eq!(blobs, vec![b"a".to_vec(), b"bc".to_vec()]);
}

#[test]
fn test_array_reuses_sufficient_capacity() {
    let mut seq: Vec<i64> = Vec::with_capacity(8);
    seq.extend([9, 9, 9, 9, 9]);
    let ptr = seq.as_ptr();

    convert_into(&mut seq, &Value::Array(vec![Value::Int(1), Value::Int(2)])).unwrap();

    assert_eq!(seq, vec![1, 2]);
    assert_eq!(seq.capacity(), 8);
    assert_eq!(seq.as_ptr(), ptr);
}

#[test]
fn test_array_allocates_exact_when_capacity_short() {
    let mut seq: Vec<i64> = vec![5];
    seq.shrink_to_fit();

    let reply = Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    convert_into(&mut seq, &reply).unwrap();

    assert_eq!(seq, vec![1, 2, 3]);
    assert_eq!(seq.capacity(), 3);
}

#[test]
fn test_seq_reset_semantics() {
    let mut seq: Vec<u32> = Vec::with_capacity(4);
    seq.extend([1, 2, 3]);

    SeqSlot::reset(&mut seq, 4);
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.capacity(), 4);

    SeqSlot::reset(&mut seq, 1);
    assert_eq!(seq, vec![1]);
}

#[test]
fn test_array_stops_at_first_bad_element() {
    let reply = Value::Array(vec![bulk("1"), bulk("x"), bulk("3")]);
    let mut seq: Vec<i64> = Vec::new();

    assert_eq!(kind_of(convert_into(&mut seq, &reply)), ErrorKind::Parse);
    assert_eq!(seq[0], 1);
    assert_eq!(seq[2], 0);
}

#[test]
fn test_array_with_nested_or_nil_element_is_type_mismatch() {
    let mut seq: Vec<i64> = Vec::new();

    let nested = Value::Array(vec![Value::Array(vec![])]);
    assert_eq!(kind_of(convert_into(&mut seq, &nested)), ErrorKind::TypeMismatch);

    let with_nil = Value::Array(vec![Value::Nil]);
    assert_eq!(kind_of(convert_into(&mut seq, &with_nil)), ErrorKind::TypeMismatch);
}

#[test]
fn test_array_to_opaque_destinations() {
    let items = vec![bulk("a"), Value::Int(1), Value::Nil];
    let reply = Value::Array(items.clone());

    let mut values: Vec<Value> = vec![bulk("stale")];
    convert_into(&mut values, &reply).unwrap();
    assert_eq!(values, items);

    let mut any = Value::Nil;
    convert_into(&mut any, &reply).unwrap();
    assert_eq!(any, reply);
}

#[test]
fn test_array_to_scalar_is_type_mismatch() {
    let mut n = 0i64;
    let mut s = String::new();
    let reply = Value::Array(vec![bulk("1")]);

    assert_eq!(kind_of(convert_into(&mut n, &reply)), ErrorKind::TypeMismatch);
    assert_eq!(kind_of(convert_into(&mut s, &reply)), ErrorKind::TypeMismatch);
}

// =============================================================================
// Nil / Error / Skip Tests
// =============================================================================

#[test]
fn test_nil_never_errors_or_mutates() {
    let mut a = 5i64;
    let mut b = 6u8;
    let mut c = 1.5f64;
    let mut d = true;
    let mut e = String::from("keep");
    let mut f = b"keep".to_vec();
    let mut g = Value::Int(1);
    let mut h = vec![Value::Int(2)];
    let mut i = vec![3i32];

    convert_into(&mut a, &Value::Nil).unwrap();
    convert_into(&mut b, &Value::Nil).unwrap();
    convert_into(&mut c, &Value::Nil).unwrap();
    convert_into(&mut d, &Value::Nil).unwrap();
    convert_into(&mut e, &Value::Nil).unwrap();
    convert_into(&mut f, &Value::Nil).unwrap();
    convert_into(&mut g, &Value::Nil).unwrap();
    convert_into(&mut h, &Value::Nil).unwrap();
    convert_into(&mut i, &Value::Nil).unwrap();

    assert_eq!((a, b, c, d), (5, 6, 1.5, true));
    assert_eq!(e, "keep");
    assert_eq!(f, b"keep");
    assert_eq!(g, Value::Int(1));
    assert_eq!(h, vec![Value::Int(2)]);
    assert_eq!(i, vec![3]);
}

#[test]
fn test_error_reply_is_passed_through() {
    let mut n = 0i64;
    let err = convert_into(&mut n, &Value::Error("WRONGTYPE bad".to_string())).unwrap_err();
    assert_eq!(err, ScanError::Reply("WRONGTYPE bad".to_string()));
    assert_eq!(err.to_string(), "WRONGTYPE bad");
}

#[test]
fn test_skip_consumes_anything() {
    let mut skip = Skip;
    for value in [
        bulk("x"),
        Value::Int(1),
        Value::Array(vec![bulk("y")]),
        Value::Nil,
        Value::Error("ERR".to_string()),
    ] {
        convert_into(&mut skip, &value).unwrap();
    }
}

#[test]
fn test_direct_bulk_and_int_entry_points() {
    let mut n = 0u16;
    convert_bulk(n.slot(), b"443").unwrap();
    assert_eq!(n, 443);

    convert_int(n.slot(), 80).unwrap();
    assert_eq!(n, 80);
}
