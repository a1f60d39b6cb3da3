//! Binary buffer utilities for mpack.
//!
//! This crate provides the two byte-level building blocks the MessagePack
//! codec sits on.
//!
//! # Overview
//!
//! - [`Writer`] - Appends big-endian primitives to an explicitly grown buffer
//! - [`Reader`] - Reads big-endian primitives from a byte slice, returning
//!   `None` instead of reading past the end
//!
//! # Example
//!
//! ```
//! use mpack_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::with_capacity(0);
//! writer.ensure_capacity(8);
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.buf(b"hello");
//!
//! // Read it back
//! let mut reader = Reader::new(writer.to_bytes());
//! assert_eq!(reader.read_u8(), Some(0x01));
//! assert_eq!(reader.read_u16(), Some(0x0203));
//! assert_eq!(reader.read(5), Some(&b"hello"[..]));
//! assert_eq!(reader.read_u8(), None);
//! ```

mod is_float32;
mod print_octets;
mod reader;
mod writer;

pub use is_float32::is_float32;
pub use print_octets::{print_octets, print_octets_default};
pub use reader::Reader;
pub use writer::{Writer, DEFAULT_CAPACITY};
