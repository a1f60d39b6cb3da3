//! Bounds-checked MessagePack decoder.

use mpack_buffers::Reader;

use crate::tag::Tag;
use crate::{CodecResult, Issue, IssueKind, Map, Value};

/// MessagePack decoder over a borrowed byte slice.
///
/// Each [`decode`](Decoder::decode) call consumes exactly one value, so
/// several concatenated values can be read one after another. Every failure
/// carries the byte offset at which it was detected.
///
/// # Example
///
/// ```
/// use mpack::{Decoder, Value};
///
/// let data = [0xa3, b'a', b'b', b'c', 0xc3];
/// let mut decoder = Decoder::new(&data);
/// assert_eq!(decoder.decode().unwrap(), Value::from("abc"));
/// assert_eq!(decoder.position(), 4);
/// assert_eq!(decoder.decode().unwrap(), Value::Bool(true));
/// assert!(decoder.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    reader: Reader<'a>,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
            max_depth: None,
            depth: 0,
        }
    }

    /// Creates a decoder that refuses arrays and maps nested deeper than
    /// `max_depth` levels. A limit of zero rejects every container.
    pub fn with_max_depth(data: &'a [u8], max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::new(data)
        }
    }

    /// Byte offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    /// Returns `true` once the whole input has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.reader.is_empty()
    }

    /// Decodes the next value.
    pub fn decode(&mut self) -> CodecResult<Value> {
        let offset = self.reader.position();
        let head = self
            .reader
            .read_u8()
            .ok_or_else(|| Issue::decode(IssueKind::Unknown, "expected head byte", offset))?;
        let tag = Tag::classify(head).ok_or_else(|| {
            Issue::decode(
                IssueKind::Unknown,
                format!("unsupported tag byte {head:#04x}"),
                offset,
            )
        })?;

        match tag {
            Tag::Nil => Ok(Value::Nil),
            Tag::False => Ok(Value::Bool(false)),
            Tag::True => Ok(Value::Bool(true)),
            Tag::Bin8 => {
                let size = self.size_u8(IssueKind::Bin8)?;
                self.read_bin(size, IssueKind::Bin8)
            }
            Tag::Bin16 => {
                let size = self.size_u16(IssueKind::Bin16)?;
                self.read_bin(size, IssueKind::Bin16)
            }
            Tag::Bin32 => {
                let size = self.size_u32(IssueKind::Bin32)?;
                self.read_bin(size, IssueKind::Bin32)
            }
            Tag::FixStr(size) => self.read_str(size as usize, IssueKind::Fixstr),
            Tag::Str8 => {
                let size = self.size_u8(IssueKind::Str8)?;
                self.read_str(size, IssueKind::Str8)
            }
            Tag::Str16 => {
                let size = self.size_u16(IssueKind::Str16)?;
                self.read_str(size, IssueKind::Str16)
            }
            Tag::Str32 => {
                let size = self.size_u32(IssueKind::Str32)?;
                self.read_str(size, IssueKind::Str32)
            }
            Tag::PositiveFixint(int) => Ok(Value::from(int)),
            Tag::NegativeFixint(int) => Ok(Value::from(int)),
            Tag::Int8 => self.scalar(IssueKind::Int8, Reader::read_i8).map(Value::from),
            Tag::Int16 => self.scalar(IssueKind::Int16, Reader::read_i16).map(Value::from),
            Tag::Int32 => self.scalar(IssueKind::Int32, Reader::read_i32).map(Value::from),
            Tag::Int64 => self.scalar(IssueKind::Int64, Reader::read_i64).map(Value::from),
            Tag::Uint8 => self.scalar(IssueKind::Uint8, Reader::read_u8).map(Value::from),
            Tag::Uint16 => self.scalar(IssueKind::Uint16, Reader::read_u16).map(Value::from),
            Tag::Uint32 => self.scalar(IssueKind::Uint32, Reader::read_u32).map(Value::from),
            Tag::Uint64 => self.scalar(IssueKind::Uint64, Reader::read_u64).map(Value::from),
            Tag::Float32 => self.scalar(IssueKind::Float32, Reader::read_f32).map(Value::from),
            Tag::Float64 => self.scalar(IssueKind::Float64, Reader::read_f64).map(Value::from),
            Tag::FixArray(size) => self.read_arr(size as usize, offset),
            Tag::Array16 => {
                let size = self.size_u16(IssueKind::Array16)?;
                self.read_arr(size, offset)
            }
            Tag::Array32 => {
                let size = self.size_u32(IssueKind::Array32)?;
                self.read_arr(size, offset)
            }
            Tag::FixMap(size) => self.read_map(size as usize, offset),
            Tag::Map16 => {
                let size = self.size_u16(IssueKind::Map16)?;
                self.read_map(size, offset)
            }
            Tag::Map32 => {
                let size = self.size_u32(IssueKind::Map32)?;
                self.read_map(size, offset)
            }
        }
    }

    fn scalar<T>(
        &mut self,
        kind: IssueKind,
        read: impl FnOnce(&mut Reader<'a>) -> Option<T>,
    ) -> CodecResult<T> {
        let offset = self.reader.position();
        read(&mut self.reader).ok_or_else(|| {
            Issue::decode(kind, format!("missing decoded value for {kind}"), offset)
        })
    }

    fn size_u8(&mut self, kind: IssueKind) -> CodecResult<usize> {
        let offset = self.reader.position();
        self.reader
            .read_u8()
            .map(usize::from)
            .ok_or_else(|| Issue::decode(kind, format!("missing size byte for {kind}"), offset))
    }

    fn size_u16(&mut self, kind: IssueKind) -> CodecResult<usize> {
        let offset = self.reader.position();
        self.reader
            .read_u16()
            .map(usize::from)
            .ok_or_else(|| Issue::decode(kind, format!("missing size bytes for {kind}"), offset))
    }

    fn size_u32(&mut self, kind: IssueKind) -> CodecResult<usize> {
        let offset = self.reader.position();
        let size = self
            .reader
            .read_u32()
            .ok_or_else(|| Issue::decode(kind, format!("missing size bytes for {kind}"), offset))?;
        usize::try_from(size).map_err(|_| {
            Issue::decode(
                kind,
                format!("{kind} size of {size} does not fit in memory"),
                offset,
            )
        })
    }

    fn payload(&mut self, size: usize, kind: IssueKind) -> CodecResult<&'a [u8]> {
        let offset = self.reader.position();
        let remaining = self.reader.remaining();
        self.reader.read(size).ok_or_else(|| {
            Issue::decode(
                kind,
                format!("given {kind} size of {size} bytes but only {remaining} remain"),
                offset,
            )
        })
    }

    fn read_bin(&mut self, size: usize, kind: IssueKind) -> CodecResult<Value> {
        let bin = self.payload(size, kind)?;
        Ok(Value::Bytes(bin.to_vec()))
    }

    fn read_str(&mut self, size: usize, kind: IssueKind) -> CodecResult<Value> {
        let offset = self.reader.position();
        let bytes = self.payload(size, kind)?;
        let s = std::str::from_utf8(bytes).map_err(|err| {
            Issue::decode(kind, format!("invalid UTF-8 in {kind}: {err}"), offset)
        })?;
        Ok(Value::Str(s.to_owned()))
    }

    /// Runs `read` one nesting level deeper, enforcing the depth limit.
    fn nested<T>(
        &mut self,
        offset: usize,
        read: impl FnOnce(&mut Self) -> CodecResult<T>,
    ) -> CodecResult<T> {
        if let Some(max_depth) = self.max_depth {
            if self.depth >= max_depth {
                return Err(Issue::decode(
                    IssueKind::Depth,
                    format!("nesting deeper than {max_depth} levels"),
                    offset,
                ));
            }
        }
        self.depth += 1;
        let result = read(self);
        self.depth -= 1;
        result
    }

    fn read_arr(&mut self, size: usize, offset: usize) -> CodecResult<Value> {
        self.nested(offset, |decoder| {
            // Every element takes at least one byte.
            let mut arr = Vec::with_capacity(size.min(decoder.remaining()));
            for _ in 0..size {
                arr.push(decoder.decode()?);
            }
            Ok(Value::Array(arr))
        })
    }

    fn read_map(&mut self, size: usize, offset: usize) -> CodecResult<Value> {
        self.nested(offset, |decoder| {
            // Every entry takes at least two bytes.
            let mut map = Map::with_capacity(size.min(decoder.remaining() / 2));
            for _ in 0..size {
                let key_offset = decoder.position();
                let key = match decoder.decode()? {
                    Value::Str(key) => key,
                    other => {
                        return Err(Issue::decode(
                            IssueKind::Map,
                            format!("expected string key, found {}", other.kind_name()),
                            key_offset,
                        ))
                    }
                };
                let val = decoder.decode()?;
                map.insert(key, val);
            }
            Ok(Value::Map(map))
        })
    }
}
