//! The recursive encoder: classify, dispatch, emit.

pub mod encoders;
mod impls;
pub mod writer;

use crate::classify::Category;
use crate::error::Result;

use writer::JsonWriter;

/// A type the encoder has been bound to.
///
/// `encode` appends exactly one JSON value to `out`, recursing into nested
/// values through the same trait. On error the buffer holds a partial,
/// non-well-formed document and must be discarded.
///
/// Implementations for records, enumerations and tagged unions are generated
/// by the `reflect_*` macros; primitive and container implementations live
/// in this crate. A type with no implementation is unencodable, which is a
/// compile error at the binding site, never a runtime one.
pub trait Encode {
    fn encode(&self, out: &mut JsonWriter) -> Result<()>;

    /// The shape category this type was bound to.
    fn category(&self) -> Category;
}
