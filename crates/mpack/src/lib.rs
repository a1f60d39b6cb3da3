//! MessagePack codec for a dynamically-typed [`Value`].
//!
//! The encoder always picks the narrowest tag that represents a value; the
//! decoder accepts every width and reports failures as an [`Issue`] carrying
//! the failing kind and byte offset. Extension types are not supported.
//!
//! # Example
//!
//! ```
//! use mpack::{decode, encode, Value};
//!
//! let value: Value = [("id", Value::from(7)), ("name", Value::from("x"))]
//!     .into_iter()
//!     .collect();
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes, [0x82, 0xa2, b'i', b'd', 0x07, 0xa4, b'n', b'a', b'm', b'e', 0xa1, b'x']);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

mod decoder;
mod encoder;
mod issue;
mod json;
pub mod tag;
mod util;
mod value;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use issue::{CodecResult, Issue, IssueContext, IssueKind};
pub use tag::Tag;
pub use util::{decode, decode_exact, encode};
pub use value::{Map, Value};
