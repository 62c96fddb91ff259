//! Static type metadata consumed by the encoder.
//!
//! Descriptors are immutable, live in `static`s, and are shared by every
//! encode call without synchronization. They are usually produced by the
//! [`reflect_struct!`](crate::reflect_struct),
//! [`reflect_enum!`](crate::reflect_enum) and
//! [`reflect_variant!`](crate::reflect_variant) macros, but nothing stops a
//! caller from assembling them by hand.

use crate::encode::Encode;
use crate::error::Result;

/// Reads one field out of an instance, erased to the encodable view.
pub type FieldAccess<T> = for<'a> fn(&'a T) -> &'a dyn Encode;

/// Walks the flattened fields of one embedded base of `T`.
pub type BaseVisit<T> =
    fn(&T, &mut dyn FnMut(&'static str, &dyn Encode) -> Result<()>) -> Result<()>;

/// One named, readable field of a record type `T`.
pub struct FieldDescriptor<T: ?Sized> {
    name: &'static str,
    access: FieldAccess<T>,
}

impl<T: ?Sized> FieldDescriptor<T> {
    pub const fn new(name: &'static str, access: FieldAccess<T>) -> Self {
        Self { name, access }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'a>(&self, object: &'a T) -> &'a dyn Encode {
        (self.access)(object)
    }
}

/// One embedded base of a record type `T`.
///
/// Inheritance is modeled as composition: the descriptor projects the
/// instance onto the embedded base value and defers to the base's own
/// descriptor, so flattening recurses through arbitrarily deep base chains.
pub struct BaseDescriptor<T: ?Sized> {
    visit: BaseVisit<T>,
}

impl<T: ?Sized> BaseDescriptor<T> {
    pub const fn new(visit: BaseVisit<T>) -> Self {
        Self { visit }
    }
}

/// The encodable shape of a record type: ordered bases, then ordered fields.
pub struct TypeDescriptor<T: ?Sized + 'static> {
    bases: &'static [BaseDescriptor<T>],
    fields: &'static [FieldDescriptor<T>],
}

impl<T: ?Sized + 'static> TypeDescriptor<T> {
    pub const fn new(
        bases: &'static [BaseDescriptor<T>],
        fields: &'static [FieldDescriptor<T>],
    ) -> Self {
        Self { bases, fields }
    }

    pub fn fields(&self) -> &'static [FieldDescriptor<T>] {
        self.fields
    }

    /// Yield `(name, value)` for every encodable field of `object`, bases
    /// first (each fully flattened, in declared order), then own fields in
    /// declared order. Duplicate names across the flattened list are passed
    /// through as-is.
    pub fn visit_fields(
        &self,
        object: &T,
        f: &mut dyn FnMut(&'static str, &dyn Encode) -> Result<()>,
    ) -> Result<()> {
        for base in self.bases {
            (base.visit)(object, f)?;
        }
        for field in self.fields {
            f(field.name, (field.access)(object))?;
        }
        Ok(())
    }
}

/// A record type carrying its own [`TypeDescriptor`].
pub trait Describe: 'static {
    fn descriptor() -> &'static TypeDescriptor<Self>;
}

/// One named case of an enumeration type `E`.
pub struct EnumCaseDescriptor<E> {
    name: &'static str,
    value: E,
}

impl<E> EnumCaseDescriptor<E> {
    pub const fn new(name: &'static str, value: E) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> E
    where
        E: Copy,
    {
        self.value
    }
}

/// The ordered case table of an enumeration type.
pub struct EnumDescriptor<E: 'static> {
    cases: &'static [EnumCaseDescriptor<E>],
}

impl<E: 'static> EnumDescriptor<E> {
    pub const fn new(cases: &'static [EnumCaseDescriptor<E>]) -> Self {
        Self { cases }
    }

    pub fn cases(&self) -> &'static [EnumCaseDescriptor<E>] {
        self.cases
    }
}

impl<E: Copy + PartialEq + 'static> EnumDescriptor<E> {
    /// The display name of the first case whose value equals `value`.
    pub fn name_of(&self, value: E) -> Option<&'static str> {
        self.cases
            .iter()
            .find(|case| case.value == value)
            .map(|case| case.name)
    }

    /// The value of the first case registered under `name`.
    pub fn value_of(&self, name: &str) -> Option<E> {
        self.cases
            .iter()
            .find(|case| case.name == name)
            .map(|case| case.value)
    }
}

/// An enumeration type carrying its own [`EnumDescriptor`].
pub trait DescribeEnum: Copy + PartialEq + 'static {
    fn descriptor() -> &'static EnumDescriptor<Self>;

    /// The underlying integer value, used when no case name is registered.
    fn discriminant(self) -> i64;
}

/// A tagged union of two or more single-payload alternatives.
pub trait TaggedUnion {
    /// Zero-based index of the active alternative, in declaration order.
    fn index(&self) -> usize;

    /// The active alternative's payload.
    fn payload(&self) -> &dyn Encode;
}
