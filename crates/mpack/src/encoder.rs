//! MessagePack encoder choosing the narrowest tag for every value.

use mpack_buffers::{is_float32, Writer, DEFAULT_CAPACITY};

use crate::tag::{
    self, ARRAY16, ARRAY32, BIN16, BIN32, BIN8, FALSE, FIXARRAY_MAX, FIXMAP_MAX, FIXSTR_MAX,
    FLOAT32, FLOAT64, INT16, INT32, INT64, INT8, MAP16, MAP32, NEGATIVE_FIXINT_MIN, NIL,
    POSITIVE_FIXINT_MAX, STR16, STR32, STR8, TRUE, UINT16, UINT32, UINT64, UINT8,
};
use crate::{CodecResult, Issue, IssueKind, Map, Value};

/// MessagePack encoder.
///
/// Each call to [`encode`](Encoder::encode) starts from an empty sink; the
/// allocation is kept between calls. Every unit reserves exactly the bytes it
/// is about to write (tag, length field and payload) before writing any of
/// them.
///
/// # Example
///
/// ```
/// use mpack::{Encoder, Value};
///
/// let mut encoder = Encoder::with_capacity(0);
/// let bytes = encoder.encode(&Value::from("abc")).unwrap();
/// assert_eq!(bytes, [0xa3, b'a', b'b', b'c']);
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    writer: Writer,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an encoder whose sink starts with `capacity` bytes allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::with_capacity(capacity),
        }
    }

    /// Encodes one value.
    ///
    /// On failure nothing written so far is returned or kept.
    pub fn encode(&mut self, value: &Value) -> CodecResult<Vec<u8>> {
        self.writer.clear();
        let result = self
            .write_any(value)
            .map(|()| self.writer.to_bytes().to_vec());
        self.writer.clear();
        result
    }

    pub fn write_any(&mut self, value: &Value) -> CodecResult<()> {
        match value {
            Value::Nil => {
                self.write_nil();
                Ok(())
            }
            Value::Bool(b) => {
                self.write_boolean(*b);
                Ok(())
            }
            Value::Integer(int) => self.write_integer(*int),
            Value::Float(float) => {
                self.write_float(*float);
                Ok(())
            }
            Value::Bytes(buf) => self.write_bin(buf),
            Value::Str(s) => self.write_str(s),
            Value::Array(arr) => self.write_arr(arr),
            Value::Map(map) => self.write_map(map),
            Value::Undefined => Err(Issue::encode(
                IssueKind::Unknown,
                "undefined can only appear as a map entry value",
                value.clone(),
            )),
        }
    }

    pub fn write_nil(&mut self) {
        self.writer.ensure_capacity(1);
        self.writer.u8(NIL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.ensure_capacity(1);
        self.writer.u8(if b { TRUE } else { FALSE });
    }

    pub fn write_integer(&mut self, int: i128) -> CodecResult<()> {
        let writer = &mut self.writer;
        if int >= 0 {
            if int <= POSITIVE_FIXINT_MAX as i128 {
                writer.ensure_capacity(1);
                writer.u8(int as u8);
            } else if let Ok(uint) = u8::try_from(int) {
                writer.ensure_capacity(2);
                writer.u8(UINT8);
                writer.u8(uint);
            } else if let Ok(uint) = u16::try_from(int) {
                writer.ensure_capacity(3);
                writer.u8u16(UINT16, uint);
            } else if let Ok(uint) = u32::try_from(int) {
                writer.ensure_capacity(5);
                writer.u8u32(UINT32, uint);
            } else if let Ok(uint) = u64::try_from(int) {
                writer.ensure_capacity(9);
                writer.u8u64(UINT64, uint);
            } else {
                return Err(Issue::encode(
                    IssueKind::Uint64,
                    "integer is above the uint64 maximum",
                    Value::Integer(int),
                ));
            }
        } else if int >= NEGATIVE_FIXINT_MIN as i128 {
            writer.ensure_capacity(1);
            writer.u8(tag::negative_fixint(int as i8));
        } else if let Ok(sint) = i8::try_from(int) {
            writer.ensure_capacity(2);
            writer.u8(INT8);
            writer.i8(sint);
        } else if let Ok(sint) = i16::try_from(int) {
            writer.ensure_capacity(3);
            writer.u8(INT16);
            writer.i16(sint);
        } else if let Ok(sint) = i32::try_from(int) {
            writer.ensure_capacity(5);
            writer.u8(INT32);
            writer.i32(sint);
        } else if let Ok(sint) = i64::try_from(int) {
            writer.ensure_capacity(9);
            writer.u8(INT64);
            writer.i64(sint);
        } else {
            return Err(Issue::encode(
                IssueKind::Int64,
                "integer is below the int64 minimum",
                Value::Integer(int),
            ));
        }
        Ok(())
    }

    /// Writes float32 when the value survives the narrowing, float64 otherwise.
    pub fn write_float(&mut self, float: f64) {
        if is_float32(float) {
            self.writer.ensure_capacity(5);
            self.writer.u8f32(FLOAT32, float as f32);
        } else {
            self.writer.ensure_capacity(9);
            self.writer.u8f64(FLOAT64, float);
        }
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> CodecResult<()> {
        let size = buf.len();
        if let Ok(len) = u8::try_from(size) {
            self.writer.ensure_capacity(2 + size);
            self.writer.u8(BIN8);
            self.writer.u8(len);
        } else if let Ok(len) = u16::try_from(size) {
            self.writer.ensure_capacity(3 + size);
            self.writer.u8u16(BIN16, len);
        } else if let Ok(len) = u32::try_from(size) {
            self.writer.ensure_capacity(5 + size);
            self.writer.u8u32(BIN32, len);
        } else {
            return Err(Issue::encode(
                IssueKind::Bin32,
                format!("binary of {size} bytes exceeds the bin32 limit"),
                Value::Bytes(buf.to_vec()),
            ));
        }
        self.writer.buf(buf);
        Ok(())
    }

    /// Writes a string, sized by its UTF-8 byte length.
    pub fn write_str(&mut self, s: &str) -> CodecResult<()> {
        let bytes = s.as_bytes();
        let size = bytes.len();
        if size <= FIXSTR_MAX {
            self.writer.ensure_capacity(1 + size);
            self.writer.u8(tag::fixstr(size as u8));
        } else if let Ok(len) = u8::try_from(size) {
            self.writer.ensure_capacity(2 + size);
            self.writer.u8(STR8);
            self.writer.u8(len);
        } else if let Ok(len) = u16::try_from(size) {
            self.writer.ensure_capacity(3 + size);
            self.writer.u8u16(STR16, len);
        } else if let Ok(len) = u32::try_from(size) {
            self.writer.ensure_capacity(5 + size);
            self.writer.u8u32(STR32, len);
        } else {
            return Err(Issue::encode(
                IssueKind::Str32,
                format!("string of {size} bytes exceeds the str32 limit"),
                Value::Str(s.to_owned()),
            ));
        }
        self.writer.buf(bytes);
        Ok(())
    }

    fn write_arr_hdr(&mut self, length: usize) -> Result<(), String> {
        if length <= FIXARRAY_MAX {
            self.writer.ensure_capacity(1);
            self.writer.u8(tag::fixarray(length as u8));
        } else if let Ok(len) = u16::try_from(length) {
            self.writer.ensure_capacity(3);
            self.writer.u8u16(ARRAY16, len);
        } else if let Ok(len) = u32::try_from(length) {
            self.writer.ensure_capacity(5);
            self.writer.u8u32(ARRAY32, len);
        } else {
            return Err(format!("array of {length} items exceeds the array32 limit"));
        }
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> CodecResult<()> {
        self.write_arr_hdr(arr.len()).map_err(|message| {
            Issue::encode(IssueKind::Array32, message, Value::Array(arr.to_vec()))
        })?;
        for item in arr {
            self.write_any(item)?;
        }
        Ok(())
    }

    fn write_map_hdr(&mut self, length: usize) -> Result<(), String> {
        if length <= FIXMAP_MAX {
            self.writer.ensure_capacity(1);
            self.writer.u8(tag::fixmap(length as u8));
        } else if let Ok(len) = u16::try_from(length) {
            self.writer.ensure_capacity(3);
            self.writer.u8u16(MAP16, len);
        } else if let Ok(len) = u32::try_from(length) {
            self.writer.ensure_capacity(5);
            self.writer.u8u32(MAP32, len);
        } else {
            return Err(format!("map of {length} entries exceeds the map32 limit"));
        }
        Ok(())
    }

    /// Writes a map, leaving out entries whose value is [`Value::Undefined`].
    pub fn write_map(&mut self, map: &Map) -> CodecResult<()> {
        let defined = || map.iter().filter(|(_, val)| !matches!(val, Value::Undefined));
        self.write_map_hdr(defined().count())
            .map_err(|message| Issue::encode(IssueKind::Map32, message, Value::Map(map.clone())))?;
        for (key, val) in defined() {
            self.write_str(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(value: impl Into<Value>) -> Vec<u8> {
        Encoder::with_capacity(0).encode(&value.into()).unwrap()
    }

    #[test]
    fn encode_scalars() {
        assert_eq!(enc(Value::Nil), [0xc0]);
        assert_eq!(enc(false), [0xc2]);
        assert_eq!(enc(true), [0xc3]);
        assert_eq!(enc(0), [0x00]);
        assert_eq!(enc(127), [0x7f]);
        assert_eq!(enc(128), [0xcc, 0x80]);
        assert_eq!(enc(-1), [0xff]);
        assert_eq!(enc(-32), [0xe0]);
        assert_eq!(enc(-33), [0xd0, 0xdf]);
    }

    #[test]
    fn encode_fixstr_from_empty_sink() {
        assert_eq!(enc("abc"), [0xa3, 0x61, 0x62, 0x63]);
        assert_eq!(enc(""), [0xa0]);
    }

    #[test]
    fn encode_str_sizes_by_utf8_bytes() {
        // 11 characters, 33 bytes: does not fit a fixstr.
        let s = "€".repeat(11);
        let bytes = enc(s.as_str());
        assert_eq!(&bytes[..2], [0xd9, 33]);
        assert_eq!(bytes.len(), 35);
    }

    #[test]
    fn encode_negative_int32() {
        let mut expected = vec![0xd2];
        expected.extend_from_slice(&(-46700i32).to_be_bytes());
        assert_eq!(enc(-46700), expected);
    }

    #[test]
    fn encode_float_width() {
        assert_eq!(enc(0.5).len(), 5);
        assert_eq!(enc(0.5)[0], 0xca);
        assert_eq!(enc(0.123_456_789_123_456_79).len(), 9);
        assert_eq!(enc(0.123_456_789_123_456_79)[0], 0xcb);
        assert_eq!(enc(f64::NAN)[0], 0xcb);
    }

    #[test]
    fn encode_integer_out_of_range() {
        let mut encoder = Encoder::new();
        let too_big = Value::Integer(u64::MAX as i128 + 1);
        let issue = encoder.encode(&too_big).unwrap_err();
        assert_eq!(issue.kind(), IssueKind::Uint64);
        assert_eq!(issue.value(), Some(&too_big));

        let too_small = Value::Integer(i64::MIN as i128 - 1);
        let issue = encoder.encode(&too_small).unwrap_err();
        assert_eq!(issue.kind(), IssueKind::Int64);
    }

    #[test]
    fn encode_undefined_is_unknown() {
        let issue = Encoder::new().encode(&Value::Undefined).unwrap_err();
        assert_eq!(issue.kind(), IssueKind::Unknown);
        assert_eq!(issue.value(), Some(&Value::Undefined));

        let nested = Value::Array(vec![Value::from(1), Value::Undefined]);
        let issue = Encoder::new().encode(&nested).unwrap_err();
        assert_eq!(issue.kind(), IssueKind::Unknown);
    }

    #[test]
    fn failed_encode_leaves_no_partial_output() {
        let mut encoder = Encoder::with_capacity(0);
        let bad = Value::Array(vec![Value::from("abc"), Value::Integer(i128::MAX)]);
        assert!(encoder.encode(&bad).is_err());
        assert_eq!(encoder.encode(&Value::Nil).unwrap(), [0xc0]);
    }

    #[test]
    fn map_skips_undefined_entries() {
        let map: Value = [
            ("a", Value::from(1)),
            ("skip", Value::Undefined),
            ("b", Value::Nil),
        ]
        .into_iter()
        .collect();
        assert_eq!(enc(map), [0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0xc0]);
    }

    #[test]
    fn encoder_is_reusable() {
        let mut encoder = Encoder::with_capacity(1);
        assert_eq!(encoder.encode(&Value::from(1)).unwrap(), [0x01]);
        assert_eq!(encoder.encode(&Value::from(2)).unwrap(), [0x02]);
    }
}
