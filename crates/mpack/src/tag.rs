//! MessagePack tag bytes: constants, predicates and classification.
//!
//! Every encoded value starts with one tag byte. Most kinds own one exact
//! byte; the "fix" kinds own a range of bytes and carry a small size or value
//! in the low bits.

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

pub const FLOAT32: u8 = 0xca;
pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;

pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// Positive fixint: top bit clear, the byte is the value.
pub const POSITIVE_FIXINT_MASK: u8 = 0b1000_0000;
pub const POSITIVE_FIXINT_MAX: u8 = 0b0111_1111;

/// Negative fixint: top three bits set, the byte is the value plus 256.
pub const NEGATIVE_FIXINT: u8 = 0b1110_0000;
pub const NEGATIVE_FIXINT_MASK: u8 = 0b1110_0000;
pub const NEGATIVE_FIXINT_MIN: i8 = -32;

pub const FIXSTR: u8 = 0b1010_0000;
pub const FIXSTR_MASK: u8 = 0b1110_0000;
pub const FIXSTR_SIZE_MASK: u8 = 0b0001_1111;
pub const FIXSTR_MAX: usize = 31;

pub const FIXARRAY: u8 = 0b1001_0000;
pub const FIXARRAY_MASK: u8 = 0b1111_0000;
pub const FIXARRAY_SIZE_MASK: u8 = 0b0000_1111;
pub const FIXARRAY_MAX: usize = 15;

pub const FIXMAP: u8 = 0b1000_0000;
pub const FIXMAP_MASK: u8 = 0b1111_0000;
pub const FIXMAP_SIZE_MASK: u8 = 0b0000_1111;
pub const FIXMAP_MAX: usize = 15;

pub const fn is_nil(byte: u8) -> bool {
    byte == NIL
}

pub const fn is_false(byte: u8) -> bool {
    byte == FALSE
}

pub const fn is_true(byte: u8) -> bool {
    byte == TRUE
}

pub const fn is_bin8(byte: u8) -> bool {
    byte == BIN8
}

pub const fn is_bin16(byte: u8) -> bool {
    byte == BIN16
}

pub const fn is_bin32(byte: u8) -> bool {
    byte == BIN32
}

pub const fn is_fixstr(byte: u8) -> bool {
    byte & FIXSTR_MASK == FIXSTR
}

pub const fn is_str8(byte: u8) -> bool {
    byte == STR8
}

pub const fn is_str16(byte: u8) -> bool {
    byte == STR16
}

pub const fn is_str32(byte: u8) -> bool {
    byte == STR32
}

pub const fn is_positive_fixint(byte: u8) -> bool {
    byte & POSITIVE_FIXINT_MASK == 0
}

pub const fn is_negative_fixint(byte: u8) -> bool {
    byte & NEGATIVE_FIXINT_MASK == NEGATIVE_FIXINT
}

pub const fn is_int8(byte: u8) -> bool {
    byte == INT8
}

pub const fn is_int16(byte: u8) -> bool {
    byte == INT16
}

pub const fn is_int32(byte: u8) -> bool {
    byte == INT32
}

pub const fn is_int64(byte: u8) -> bool {
    byte == INT64
}

pub const fn is_uint8(byte: u8) -> bool {
    byte == UINT8
}

pub const fn is_uint16(byte: u8) -> bool {
    byte == UINT16
}

pub const fn is_uint32(byte: u8) -> bool {
    byte == UINT32
}

pub const fn is_uint64(byte: u8) -> bool {
    byte == UINT64
}

pub const fn is_float32(byte: u8) -> bool {
    byte == FLOAT32
}

pub const fn is_float64(byte: u8) -> bool {
    byte == FLOAT64
}

pub const fn is_fixarray(byte: u8) -> bool {
    byte & FIXARRAY_MASK == FIXARRAY
}

pub const fn is_array16(byte: u8) -> bool {
    byte == ARRAY16
}

pub const fn is_array32(byte: u8) -> bool {
    byte == ARRAY32
}

pub const fn is_fixmap(byte: u8) -> bool {
    byte & FIXMAP_MASK == FIXMAP
}

pub const fn is_map16(byte: u8) -> bool {
    byte == MAP16
}

pub const fn is_map32(byte: u8) -> bool {
    byte == MAP32
}

/// Byte length of a fixstr, taken from the tag's low five bits.
pub const fn fixstr_size(byte: u8) -> usize {
    (byte & FIXSTR_SIZE_MASK) as usize
}

/// Element count of a fixarray, taken from the tag's low four bits.
pub const fn fixarray_size(byte: u8) -> usize {
    (byte & FIXARRAY_SIZE_MASK) as usize
}

/// Entry count of a fixmap, taken from the tag's low four bits.
pub const fn fixmap_size(byte: u8) -> usize {
    (byte & FIXMAP_SIZE_MASK) as usize
}

/// Builds a fixstr tag. Only the low five bits of `size` are kept.
pub const fn fixstr(size: u8) -> u8 {
    FIXSTR | (size & FIXSTR_SIZE_MASK)
}

/// Builds a fixarray tag. Only the low four bits of `size` are kept.
pub const fn fixarray(size: u8) -> u8 {
    FIXARRAY | (size & FIXARRAY_SIZE_MASK)
}

/// Builds a fixmap tag. Only the low four bits of `size` are kept.
pub const fn fixmap(size: u8) -> u8 {
    FIXMAP | (size & FIXMAP_SIZE_MASK)
}

/// Builds a negative fixint tag for a value in `-32..=-1`.
pub const fn negative_fixint(value: i8) -> u8 {
    NEGATIVE_FIXINT | (value.wrapping_sub(NEGATIVE_FIXINT_MIN) as u8 & !NEGATIVE_FIXINT_MASK)
}

/// A classified tag byte.
///
/// Variants for the "fix" kinds carry what the tag byte itself encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Nil,
    False,
    True,
    Bin8,
    Bin16,
    Bin32,
    /// Byte length of the string, `0..=31`
    FixStr(u8),
    Str8,
    Str16,
    Str32,
    /// Value `0..=127`
    PositiveFixint(u8),
    /// Value `-32..=-1`
    NegativeFixint(i8),
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    /// Element count `0..=15`
    FixArray(u8),
    Array16,
    Array32,
    /// Entry count `0..=15`
    FixMap(u8),
    Map16,
    Map32,
}

impl Tag {
    /// Classifies a tag byte.
    ///
    /// Returns `None` for bytes the codec does not support: the reserved
    /// `0xc1` and the extension tags `0xc7..=0xc9`, `0xd4..=0xd8`.
    pub const fn classify(byte: u8) -> Option<Tag> {
        let tag = match byte {
            b if is_nil(b) => Tag::Nil,
            b if is_false(b) => Tag::False,
            b if is_true(b) => Tag::True,
            b if is_bin8(b) => Tag::Bin8,
            b if is_bin16(b) => Tag::Bin16,
            b if is_bin32(b) => Tag::Bin32,
            b if is_fixstr(b) => Tag::FixStr(b & FIXSTR_SIZE_MASK),
            b if is_str8(b) => Tag::Str8,
            b if is_str16(b) => Tag::Str16,
            b if is_str32(b) => Tag::Str32,
            b if is_positive_fixint(b) => Tag::PositiveFixint(b),
            b if is_negative_fixint(b) => Tag::NegativeFixint(b as i8),
            b if is_int8(b) => Tag::Int8,
            b if is_int16(b) => Tag::Int16,
            b if is_int32(b) => Tag::Int32,
            b if is_int64(b) => Tag::Int64,
            b if is_uint8(b) => Tag::Uint8,
            b if is_uint16(b) => Tag::Uint16,
            b if is_uint32(b) => Tag::Uint32,
            b if is_uint64(b) => Tag::Uint64,
            b if is_float32(b) => Tag::Float32,
            b if is_float64(b) => Tag::Float64,
            b if is_fixarray(b) => Tag::FixArray(b & FIXARRAY_SIZE_MASK),
            b if is_array16(b) => Tag::Array16,
            b if is_array32(b) => Tag::Array32,
            b if is_fixmap(b) => Tag::FixMap(b & FIXMAP_SIZE_MASK),
            b if is_map16(b) => Tag::Map16,
            b if is_map32(b) => Tag::Map32,
            _ => return None,
        };
        Some(tag)
    }

    /// Wire kind name, e.g. `"fixstr"` or `"uint32"`.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Nil => "nil",
            Tag::False => "false",
            Tag::True => "true",
            Tag::Bin8 => "bin8",
            Tag::Bin16 => "bin16",
            Tag::Bin32 => "bin32",
            Tag::FixStr(_) => "fixstr",
            Tag::Str8 => "str8",
            Tag::Str16 => "str16",
            Tag::Str32 => "str32",
            Tag::PositiveFixint(_) => "positive fixint",
            Tag::NegativeFixint(_) => "negative fixint",
            Tag::Int8 => "int8",
            Tag::Int16 => "int16",
            Tag::Int32 => "int32",
            Tag::Int64 => "int64",
            Tag::Uint8 => "uint8",
            Tag::Uint16 => "uint16",
            Tag::Uint32 => "uint32",
            Tag::Uint64 => "uint64",
            Tag::Float32 => "float32",
            Tag::Float64 => "float64",
            Tag::FixArray(_) => "fixarray",
            Tag::Array16 => "array16",
            Tag::Array32 => "array32",
            Tag::FixMap(_) => "fixmap",
            Tag::Map16 => "map16",
            Tag::Map32 => "map32",
        }
    }
}
