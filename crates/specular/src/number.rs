use core::fmt::{self, Display, Write as _};

use crate::encode::writer::JsonWriter;
use crate::error::{Error, Result};

/// Stack space for the decimal form of any supported integral value.
/// i128::MIN needs 40 bytes; 64 leaves comfortable slack.
const INTEGRAL_BUFFER: usize = 64;

struct FixedBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBuffer<N> {
    const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }
}

impl<const N: usize> fmt::Write for FixedBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > N {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Write an integral value in its shortest decimal form.
///
/// The conversion runs through a bounded local buffer; overflowing it is a
/// reported failure rather than a panic, though no supported width can reach
/// that path.
pub(crate) fn write_integral<T: Display>(out: &mut JsonWriter, value: T) -> Result<()> {
    let mut buffer = FixedBuffer::<INTEGRAL_BUFFER>::new();
    write!(buffer, "{value}").map_err(|_| Error::number("integral conversion failed"))?;
    let text = core::str::from_utf8(&buffer.bytes[..buffer.len])
        .map_err(|_| Error::number("integral conversion produced invalid UTF-8"))?;
    out.write_str(text);
    Ok(())
}

/// Write a finite f64 in its shortest round-trippable decimal form.
///
/// ryu already emits the shortest representation that parses back to the
/// same bits; the only cleanup is dropping a `.0` suffix so whole values
/// read as integers. Non-finite values have no decimal form and fail.
pub(crate) fn write_f64(out: &mut JsonWriter, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::number("floating conversion failed: value is not finite"));
    }
    let mut buffer = ryu::Buffer::new();
    out.write_str(trim_integral_suffix(buffer.format_finite(value)));
    Ok(())
}

pub(crate) fn write_f32(out: &mut JsonWriter, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::number("floating conversion failed: value is not finite"));
    }
    let mut buffer = ryu::Buffer::new();
    out.write_str(trim_integral_suffix(buffer.format_finite(value)));
    Ok(())
}

fn trim_integral_suffix(formatted: &str) -> &str {
    formatted.strip_suffix(".0").unwrap_or(formatted)
}
