//! Encode/decode failure type.

use std::fmt;

use thiserror::Error;

use crate::Value;

/// Result type returned by every fallible codec operation.
pub type CodecResult<T> = Result<T, Issue>;

/// Classification of a failure, named after the wire kind being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    Bin8,
    Bin16,
    Bin32,
    Fixstr,
    Str8,
    Str16,
    Str32,
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
    Array16,
    Array32,
    Map,
    Map16,
    Map32,
    /// Nesting deeper than the decoder's configured limit.
    Depth,
    /// Missing or unsupported tag byte, or an unencodable value.
    Unknown,
}

impl IssueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            IssueKind::Bin8 => "bin8",
            IssueKind::Bin16 => "bin16",
            IssueKind::Bin32 => "bin32",
            IssueKind::Fixstr => "fixstr",
            IssueKind::Str8 => "str8",
            IssueKind::Str16 => "str16",
            IssueKind::Str32 => "str32",
            IssueKind::Int8 => "int8",
            IssueKind::Int16 => "int16",
            IssueKind::Int32 => "int32",
            IssueKind::Int64 => "int64",
            IssueKind::Uint8 => "uint8",
            IssueKind::Uint16 => "uint16",
            IssueKind::Uint32 => "uint32",
            IssueKind::Uint64 => "uint64",
            IssueKind::Float32 => "float32",
            IssueKind::Float64 => "float64",
            IssueKind::Array16 => "array16",
            IssueKind::Array32 => "array32",
            IssueKind::Map => "map",
            IssueKind::Map16 => "map16",
            IssueKind::Map32 => "map32",
            IssueKind::Depth => "depth",
            IssueKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a failure happened.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueContext {
    /// Byte offset into the decoder's input.
    Offset(usize),
    /// The value the encoder could not represent.
    Value(Box<Value>),
}

/// A codec failure: what kind of unit failed, why, and where.
///
/// Decode issues carry the byte offset of the failing read; encode issues
/// carry the offending value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}{}", at_offset(.context))]
pub struct Issue {
    kind: IssueKind,
    message: String,
    context: IssueContext,
}

fn at_offset(context: &IssueContext) -> String {
    match context {
        IssueContext::Offset(offset) => format!(" (at byte {offset})"),
        IssueContext::Value(_) => String::new(),
    }
}

impl Issue {
    /// Creates a decode-side issue at `offset`.
    pub fn decode(kind: IssueKind, message: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            context: IssueContext::Offset(offset),
        }
    }

    /// Creates an encode-side issue for `value`.
    pub fn encode(kind: IssueKind, message: impl Into<String>, value: Value) -> Self {
        Self {
            kind,
            message: message.into(),
            context: IssueContext::Value(Box::new(value)),
        }
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &IssueContext {
        &self.context
    }

    /// Byte offset of a decode issue.
    pub fn offset(&self) -> Option<usize> {
        match &self.context {
            IssueContext::Offset(offset) => Some(*offset),
            IssueContext::Value(_) => None,
        }
    }

    /// Offending value of an encode issue.
    pub fn value(&self) -> Option<&Value> {
        match &self.context {
            IssueContext::Offset(_) => None,
            IssueContext::Value(value) => Some(value),
        }
    }
}
