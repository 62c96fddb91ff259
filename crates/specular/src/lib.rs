#![doc = include_str!("../README.md")]

pub mod classify;
pub mod encode;
pub mod error;
pub mod meta;

mod macros;
mod number;

pub use crate::classify::{Category, StringLike, category_of};
pub use crate::encode::Encode;
pub use crate::encode::writer::JsonWriter;
pub use crate::error::{Error, Result};

use std::io::Write;

/// Encode `value` as a complete JSON document.
pub fn encode_to_string<T: Encode + ?Sized>(value: &T) -> Result<String> {
    let mut out = JsonWriter::new();
    value.encode(&mut out)?;
    Ok(out.into_string())
}

/// Encode `value` and write the document to `writer`.
pub fn encode_to_writer<W: Write, T: Encode + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    let s = encode_to_string(value)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

/// Append the encoding of `value` to a caller-supplied writer.
///
/// On error the writer holds a partial document; callers should discard it
/// rather than treat the accumulated text as valid output.
pub fn encode_into<T: Encode + ?Sized>(out: &mut JsonWriter, value: &T) -> Result<()> {
    value.encode(out)
}
