//! Hand-built inputs whose size or payload is zero.
//!
//! Zero is a legitimate value for every length field and every scalar, so
//! none of these may be mistaken for a missing read.

use mpack::{decode_exact, Map, Value};

#[test]
fn zero_scalars_decode() {
    let cases: Vec<(Vec<u8>, Value)> = vec![
        (vec![0xcc, 0x00], Value::from(0)),
        (vec![0xcd, 0x00, 0x00], Value::from(0)),
        (vec![0xce, 0x00, 0x00, 0x00, 0x00], Value::from(0)),
        (vec![0xcf, 0, 0, 0, 0, 0, 0, 0, 0], Value::from(0)),
        (vec![0xd0, 0x00], Value::from(0)),
        (vec![0xd1, 0x00, 0x00], Value::from(0)),
        (vec![0xd2, 0x00, 0x00, 0x00, 0x00], Value::from(0)),
        (vec![0xd3, 0, 0, 0, 0, 0, 0, 0, 0], Value::from(0)),
        (vec![0xca, 0x00, 0x00, 0x00, 0x00], Value::Float(0.0)),
        (vec![0xcb, 0, 0, 0, 0, 0, 0, 0, 0], Value::Float(0.0)),
        (vec![0x00], Value::from(0)),
    ];

    for (data, expected) in cases {
        assert_eq!(decode_exact(&data).unwrap(), expected, "input: {data:02x?}");
    }
}

#[test]
fn zero_length_containers_decode() {
    let empty_arr = Value::Array(vec![]);
    let empty_map = Value::Map(Map::new());
    let empty_str = Value::from("");
    let empty_bin = Value::bytes(Vec::new());

    let cases: Vec<(Vec<u8>, &Value)> = vec![
        (vec![0x90], &empty_arr),
        (vec![0xdc, 0x00, 0x00], &empty_arr),
        (vec![0xdd, 0x00, 0x00, 0x00, 0x00], &empty_arr),
        (vec![0x80], &empty_map),
        (vec![0xde, 0x00, 0x00], &empty_map),
        (vec![0xdf, 0x00, 0x00, 0x00, 0x00], &empty_map),
        (vec![0xa0], &empty_str),
        (vec![0xd9, 0x00], &empty_str),
        (vec![0xda, 0x00, 0x00], &empty_str),
        (vec![0xdb, 0x00, 0x00, 0x00, 0x00], &empty_str),
        (vec![0xc4, 0x00], &empty_bin),
        (vec![0xc5, 0x00, 0x00], &empty_bin),
        (vec![0xc6, 0x00, 0x00, 0x00, 0x00], &empty_bin),
    ];

    for (data, expected) in cases {
        assert_eq!(&decode_exact(&data).unwrap(), expected, "input: {data:02x?}");
    }
}

#[test]
fn zero_bytes_inside_payloads() {
    let data = [0xc4, 0x03, 0x00, 0x00, 0x00];
    assert_eq!(decode_exact(&data).unwrap(), Value::bytes(vec![0u8; 3]));

    let data = [0xa2, 0x00, 0x00];
    assert_eq!(decode_exact(&data).unwrap(), Value::from("\0\0"));

    let data = [0x93, 0x00, 0xcc, 0x00, 0xd0, 0x00];
    assert_eq!(
        decode_exact(&data).unwrap(),
        Value::Array(vec![Value::from(0); 3])
    );
}
