//! Writer/Reader roundtrip matrix for the buffers crate.

use mpack_buffers::{is_float32, Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::with_capacity(0);
    w.ensure_capacity(3);
    w.u8(0x00);
    w.u8(0x7F);
    w.u8(0xFF);
    let mut r = Reader::new(w.to_bytes());
    assert_eq!(r.read_u8(), Some(0x00));
    assert_eq!(r.read_u8(), Some(0x7F));
    assert_eq!(r.read_u8(), Some(0xFF));
    assert_eq!(r.read_u8(), None);
}

#[test]
fn roundtrip_i8() {
    let mut w = Writer::new();
    w.i8(i8::MIN);
    w.i8(-1);
    w.i8(0);
    w.i8(i8::MAX);
    let mut r = Reader::new(w.to_bytes());
    assert_eq!(r.read_i8(), Some(i8::MIN));
    assert_eq!(r.read_i8(), Some(-1));
    assert_eq!(r.read_i8(), Some(0));
    assert_eq!(r.read_i8(), Some(i8::MAX));
}

#[test]
fn roundtrip_u16_i16() {
    let mut w = Writer::new();
    w.u16(0);
    w.u16(u16::MAX);
    w.i16(i16::MIN);
    w.i16(-1000);
    w.i16(i16::MAX);
    let mut r = Reader::new(w.to_bytes());
    assert_eq!(r.read_u16(), Some(0));
    assert_eq!(r.read_u16(), Some(u16::MAX));
    assert_eq!(r.read_i16(), Some(i16::MIN));
    assert_eq!(r.read_i16(), Some(-1000));
    assert_eq!(r.read_i16(), Some(i16::MAX));
}

#[test]
fn roundtrip_u32_i32() {
    let mut w = Writer::new();
    w.u32(0);
    w.u32(0x01020304);
    w.u32(u32::MAX);
    w.i32(i32::MIN);
    w.i32(-46700);
    let mut r = Reader::new(w.to_bytes());
    assert_eq!(r.read_u32(), Some(0));
    assert_eq!(r.read_u32(), Some(0x01020304));
    assert_eq!(r.read_u32(), Some(u32::MAX));
    assert_eq!(r.read_i32(), Some(i32::MIN));
    assert_eq!(r.read_i32(), Some(-46700));
}

#[test]
fn roundtrip_u64_i64() {
    let mut w = Writer::new();
    w.u64(0);
    w.u64(u64::MAX);
    w.i64(i64::MIN);
    w.i64(-9_999_999_999);
    let mut r = Reader::new(w.to_bytes());
    assert_eq!(r.read_u64(), Some(0));
    assert_eq!(r.read_u64(), Some(u64::MAX));
    assert_eq!(r.read_i64(), Some(i64::MIN));
    assert_eq!(r.read_i64(), Some(-9_999_999_999));
}

#[test]
fn roundtrip_f32_f64() {
    let mut w = Writer::new();
    w.f32(0.0);
    w.f32(-1.5);
    w.f32(f32::INFINITY);
    w.f64(0.0);
    w.f64(std::f64::consts::PI);
    w.f64(f64::MIN_POSITIVE);
    let mut r = Reader::new(w.to_bytes());
    assert_eq!(r.read_f32(), Some(0.0));
    assert_eq!(r.read_f32(), Some(-1.5));
    assert_eq!(r.read_f32(), Some(f32::INFINITY));
    assert_eq!(r.read_f64(), Some(0.0));
    assert_eq!(r.read_f64(), Some(std::f64::consts::PI));
    assert_eq!(r.read_f64(), Some(f64::MIN_POSITIVE));
}

#[test]
fn roundtrip_f64_nan() {
    let mut w = Writer::new();
    w.f64(f64::NAN);
    let mut r = Reader::new(w.to_bytes());
    assert!(r.read_f64().is_some_and(f64::is_nan));
}

#[test]
fn roundtrip_buf() {
    let payload: Vec<u8> = (0..=255).collect();
    let mut w = Writer::with_capacity(1);
    w.ensure_capacity(payload.len());
    w.buf(&payload);
    assert_eq!(w.capacity(), 256);
    let mut r = Reader::new(w.to_bytes());
    assert_eq!(r.read(256), Some(payload.as_slice()));
    assert!(r.is_empty());
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

#[test]
fn growth_preserves_written_prefix() {
    let mut w = Writer::with_capacity(0);
    for i in 0..1000u32 {
        w.ensure_capacity(4);
        w.u32(i);
    }
    assert_eq!(w.len(), 4000);
    assert_eq!(w.capacity(), 4096);
    let mut r = Reader::new(w.to_bytes());
    for i in 0..1000u32 {
        assert_eq!(r.read_u32(), Some(i));
    }
}

// ---------------------------------------------------------------------------
// Underflow
// ---------------------------------------------------------------------------

#[test]
fn underflow_matrix() {
    let data = [0x01u8];
    let mut r = Reader::new(&data);
    assert_eq!(r.read_u16(), None);
    assert_eq!(r.read_i16(), None);
    assert_eq!(r.read_u32(), None);
    assert_eq!(r.read_i32(), None);
    assert_eq!(r.read_u64(), None);
    assert_eq!(r.read_i64(), None);
    assert_eq!(r.read_f32(), None);
    assert_eq!(r.read_f64(), None);
    assert_eq!(r.read(2), None);
    assert_eq!(r.position(), 0);
    assert_eq!(r.read_u8(), Some(0x01));
    assert_eq!(r.read_u8(), None);
    assert_eq!(r.read(1), None);
    assert_eq!(r.position(), 1);
}

#[test]
fn empty_input_reads_nothing() {
    let mut r = Reader::new(&[]);
    assert_eq!(r.peek(), None);
    assert_eq!(r.read_u8(), None);
    assert_eq!(r.read(0), Some(&[][..]));
    assert!(r.is_empty());
}

// ---------------------------------------------------------------------------
// is_float32
// ---------------------------------------------------------------------------

#[test]
fn is_float32_exact_values() {
    assert!(is_float32(0.0));
    assert!(is_float32(1.0));
    assert!(is_float32(0.5));
    assert!(is_float32(-1.0));
    assert!(is_float32(16_777_216.0));
}

#[test]
fn is_float32_non_representable() {
    assert!(!is_float32(0.1));
    assert!(!is_float32(16_777_217.0));
    assert!(!is_float32(1e300));
}
