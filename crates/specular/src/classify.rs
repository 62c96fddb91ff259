//! Shape categories and the classification contract.
//!
//! Every encodable type belongs to exactly one [`Category`], decided in a
//! fixed priority order. The decision is made when the encoder is bound to
//! the type: each `Encode` implementation names its category, and trait
//! coherence guarantees a type cannot claim two of them. A type that fits no
//! category has no `Encode` implementation at all, so binding fails at
//! compile time rather than at run time.

use std::borrow::Cow;

use crate::encode::Encode;

/// The closed set of encodable shapes, in classification priority order.
///
/// Where a type could structurally qualify for more than one entry, the
/// earlier one wins: a string is a sequence of characters, but it is
/// classified [`Category::StringLike`], never [`Category::Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `bool` alone.
    Boolean,
    /// Fixed-width signed and unsigned integers, and `char` (a single
    /// character is excluded from string-like and encodes as its scalar
    /// value).
    Integer,
    /// `f32` and `f64`.
    Float,
    /// Read-only character sequence views: `str`, `String`, `Cow<str>`.
    StringLike,
    /// Closed named-discriminant types describing themselves through
    /// [`DescribeEnum`](crate::meta::DescribeEnum).
    Enumeration,
    /// Key/value collections. Keys must satisfy [`StringLike`]; a map keyed
    /// by anything else fails to bind, not to run.
    Map,
    /// Ordered homogeneous element collections that are not string-like.
    Sequence,
    /// Zero-or-one containers (`Option`).
    Optional,
    /// Two-alternative success/error values (`core::result::Result`).
    Result,
    /// Tagged unions of two or more alternatives, identified by a zero-based
    /// discriminant index ([`TaggedUnion`](crate::meta::TaggedUnion)).
    Variant,
    /// Composite records described through a
    /// [`TypeDescriptor`](crate::meta::TypeDescriptor).
    Reflectable,
}

/// The category a value's type was bound to.
pub fn category_of<T: Encode + ?Sized>(value: &T) -> Category {
    value.category()
}

/// A read-only view of a character sequence.
///
/// This is the map-key capability: map encoding requires `K: StringLike`, so
/// a non-string key is a compile error at the binding site.
pub trait StringLike {
    fn as_str(&self) -> &str;
}

impl StringLike for str {
    fn as_str(&self) -> &str {
        self
    }
}

impl StringLike for String {
    fn as_str(&self) -> &str {
        self
    }
}

impl StringLike for Cow<'_, str> {
    fn as_str(&self) -> &str {
        self
    }
}

impl<T: StringLike + ?Sized> StringLike for &T {
    fn as_str(&self) -> &str {
        (**self).as_str()
    }
}
