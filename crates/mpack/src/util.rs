//! One-shot helpers over [`Encoder`] and [`Decoder`].

use crate::{CodecResult, Decoder, Encoder, Issue, IssueKind, Value};

/// Encodes `value` with a fresh encoder.
pub fn encode(value: &Value) -> CodecResult<Vec<u8>> {
    Encoder::new().encode(value)
}

/// Decodes the first value in `data`, ignoring anything after it.
pub fn decode(data: &[u8]) -> CodecResult<Value> {
    Decoder::new(data).decode()
}

/// Decodes a single value that must span all of `data`.
pub fn decode_exact(data: &[u8]) -> CodecResult<Value> {
    let mut decoder = Decoder::new(data);
    let value = decoder.decode()?;
    if !decoder.is_exhausted() {
        return Err(Issue::decode(
            IssueKind::Unknown,
            format!("trailing bytes: {} left after value", decoder.remaining()),
            decoder.position(),
        ));
    }
    Ok(value)
}
