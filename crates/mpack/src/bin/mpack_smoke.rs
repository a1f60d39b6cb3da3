//! `mpack-smoke`: round-trip a JSON document through MessagePack.
//!
//! Usage:
//!   mpack-smoke               run the built-in scalar self check
//!   mpack-smoke '<json>'      round-trip the given document
//!   mpack-smoke -             round-trip a document read from stdin

use std::io::{self, Read};

use mpack::{decode_exact, encode, Value};
use mpack_buffers::print_octets_default;

fn roundtrip(label: &str, value: &Value) -> Result<(), String> {
    let bytes = encode(value).map_err(|e| format!("{label}: encode failed: {e}"))?;
    println!(
        "{label}: {} bytes [{}]",
        bytes.len(),
        print_octets_default(&bytes)
    );
    let decoded = decode_exact(&bytes).map_err(|e| format!("{label}: decode failed: {e}"))?;
    if &decoded != value {
        return Err(format!("{label}: decoded {decoded:?}, expected {value:?}"));
    }
    Ok(())
}

fn self_check() -> Result<(), String> {
    let cases = [
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("nil", Value::Nil),
        ("str", Value::from("test")),
        ("bin", Value::bytes(b"test".as_slice())),
        ("uint", Value::from(2)),
        ("int", Value::from(-2)),
        ("int32", Value::from(-46700)),
    ];
    for (label, value) in &cases {
        roundtrip(label, value)?;
    }
    println!("ok: {} cases", cases.len());
    Ok(())
}

fn document(input: &str) -> Result<(), String> {
    let json: serde_json::Value =
        serde_json::from_str(input.trim()).map_err(|e| format!("invalid JSON: {e}"))?;
    let value = Value::from(json);
    roundtrip("document", &value)?;
    println!("{}", value.to_json());
    Ok(())
}

fn main() {
    let result = match std::env::args().nth(1).as_deref() {
        None => self_check(),
        Some("-") => {
            let mut buf = String::new();
            match io::stdin().read_to_string(&mut buf) {
                Ok(_) => document(&buf),
                Err(e) => Err(e.to_string()),
            }
        }
        Some(input) => document(input),
    };
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
