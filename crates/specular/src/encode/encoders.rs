//! Per-category emission rules.
//!
//! Each rule appends one complete JSON value to the writer, recursing into
//! nested values through [`Encode::encode`]. Composite rules share the same
//! delimiter discipline: no comma before the first member, none after the
//! last.

use crate::classify::StringLike;
use crate::encode::Encode;
use crate::encode::writer::JsonWriter;
use crate::error::Result;
use crate::meta::{Describe, DescribeEnum, TaggedUnion};
use crate::number;

pub(crate) fn write_delimiter(out: &mut JsonWriter, first: &mut bool) {
    if *first {
        *first = false;
    } else {
        out.write_char(',');
    }
}

/// Object literal over the flattened base-then-own field list.
pub fn encode_object<T: Describe>(value: &T, out: &mut JsonWriter) -> Result<()> {
    out.write_char('{');
    let mut first = true;
    T::descriptor().visit_fields(value, &mut |name, field| {
        write_delimiter(out, &mut first);
        out.write_escaped(name);
        out.write_char(':');
        field.encode(out)
    })?;
    out.write_char('}');
    Ok(())
}

/// Registered case name as a quoted string, else the underlying integer.
pub fn encode_enum<E: DescribeEnum>(value: E, out: &mut JsonWriter) -> Result<()> {
    match E::descriptor().name_of(value) {
        Some(name) => {
            out.write_escaped(name);
            Ok(())
        }
        None => number::write_integral(out, value.discriminant()),
    }
}

/// `{"index":N,"value":...}` for the active alternative.
pub fn encode_variant(value: &dyn TaggedUnion, out: &mut JsonWriter) -> Result<()> {
    out.write_char('{');
    out.write_escaped("index");
    out.write_char(':');
    number::write_integral(out, value.index())?;
    out.write_char(',');
    out.write_escaped("value");
    out.write_char(':');
    value.payload().encode(out)?;
    out.write_char('}');
    Ok(())
}

/// Array literal in iteration order.
pub fn encode_sequence<I>(items: I, out: &mut JsonWriter) -> Result<()>
where
    I: IntoIterator,
    I::Item: Encode,
{
    out.write_char('[');
    let mut first = true;
    for item in items {
        write_delimiter(out, &mut first);
        item.encode(out)?;
    }
    out.write_char(']');
    Ok(())
}

/// Object literal in iteration order; no sorting, the source order is
/// authoritative.
pub fn encode_map<I, K, V>(entries: I, out: &mut JsonWriter) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: StringLike,
    V: Encode,
{
    out.write_char('{');
    let mut first = true;
    for (key, value) in entries {
        write_delimiter(out, &mut first);
        out.write_escaped(key.as_str());
        out.write_char(':');
        value.encode(out)?;
    }
    out.write_char('}');
    Ok(())
}

/// `{"state":"value","value":...}` or `{"state":"error","error":...}`;
/// exactly one payload field per instance.
pub fn encode_result<T, E>(
    value: &core::result::Result<T, E>,
    out: &mut JsonWriter,
) -> Result<()>
where
    T: Encode,
    E: Encode,
{
    out.write_char('{');
    out.write_escaped("state");
    out.write_char(':');
    match value {
        Ok(inner) => {
            out.write_escaped("value");
            out.write_char(',');
            out.write_escaped("value");
            out.write_char(':');
            inner.encode(out)?;
        }
        Err(error) => {
            out.write_escaped("error");
            out.write_char(',');
            out.write_escaped("error");
            out.write_char(':');
            error.encode(out)?;
        }
    }
    out.write_char('}');
    Ok(())
}
