//! Category bindings for primitive and standard-library types.
//!
//! One `Encode` implementation per type; coherence enforces the
//! one-category-per-type rule from [`crate::classify`].

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::classify::{Category, StringLike};
use crate::encode::writer::JsonWriter;
use crate::encode::{Encode, encoders};
use crate::error::Result;
use crate::number;

impl Encode for bool {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        out.write_str(if *self { "true" } else { "false" });
        Ok(())
    }

    fn category(&self) -> Category {
        Category::Boolean
    }
}

macro_rules! integral_impls {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut JsonWriter) -> Result<()> {
                    number::write_integral(out, *self)
                }

                fn category(&self) -> Category {
                    Category::Integer
                }
            }
        )+
    };
}

integral_impls!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// A single character is not string-like; it encodes as its scalar value.
impl Encode for char {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        number::write_integral(out, *self as u32)
    }

    fn category(&self) -> Category {
        Category::Integer
    }
}

impl Encode for f32 {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        number::write_f32(out, *self)
    }

    fn category(&self) -> Category {
        Category::Float
    }
}

impl Encode for f64 {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        number::write_f64(out, *self)
    }

    fn category(&self) -> Category {
        Category::Float
    }
}

impl Encode for str {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        out.write_escaped(self);
        Ok(())
    }

    fn category(&self) -> Category {
        Category::StringLike
    }
}

impl Encode for String {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        out.write_escaped(self);
        Ok(())
    }

    fn category(&self) -> Category {
        Category::StringLike
    }
}

impl Encode for Cow<'_, str> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        out.write_escaped(self);
        Ok(())
    }

    fn category(&self) -> Category {
        Category::StringLike
    }
}

// Transparent carriers take their pointee's category. Shared pointers are
// what makes a cyclic value graph constructible; encoding one recurses
// without cycle detection.
impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        (**self).encode(out)
    }

    fn category(&self) -> Category {
        (**self).category()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        (**self).encode(out)
    }

    fn category(&self) -> Category {
        (**self).category()
    }
}

impl<T: Encode + ?Sized> Encode for Rc<T> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        (**self).encode(out)
    }

    fn category(&self) -> Category {
        (**self).category()
    }
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        (**self).encode(out)
    }

    fn category(&self) -> Category {
        (**self).category()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_sequence(self, out)
    }

    fn category(&self) -> Category {
        Category::Sequence
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_sequence(self, out)
    }

    fn category(&self) -> Category {
        Category::Sequence
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_sequence(self, out)
    }

    fn category(&self) -> Category {
        Category::Sequence
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_sequence(self, out)
    }

    fn category(&self) -> Category {
        Category::Sequence
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_sequence(self, out)
    }

    fn category(&self) -> Category {
        Category::Sequence
    }
}

impl<K: StringLike, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_map(self, out)
    }

    fn category(&self) -> Category {
        Category::Map
    }
}

impl<K: StringLike, V: Encode, S: BuildHasher> Encode for HashMap<K, V, S> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_map(self, out)
    }

    fn category(&self) -> Category {
        Category::Map
    }
}

// Optional-ness is transparent: a present value encodes as itself.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        match self {
            Some(value) => value.encode(out),
            None => {
                out.write_str("null");
                Ok(())
            }
        }
    }

    fn category(&self) -> Category {
        Category::Optional
    }
}

impl<T: Encode, E: Encode> Encode for core::result::Result<T, E> {
    fn encode(&self, out: &mut JsonWriter) -> Result<()> {
        encoders::encode_result(self, out)
    }

    fn category(&self) -> Category {
        Category::Result
    }
}
