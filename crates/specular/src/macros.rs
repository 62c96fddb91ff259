//! Declarative descriptor providers.
//!
//! Each macro takes a hand-written description of a user type and generates
//! the metadata impl plus the matching `Encode` binding. The descriptors are
//! plain `static`s: built once, never mutated, shared by every encode call.

/// Describe a record type: ordered embedded bases, then ordered own fields.
///
/// ```
/// use specular::reflect_struct;
///
/// struct Named {
///     name: String,
/// }
///
/// struct Employee {
///     base: Named,
///     id: i32,
/// }
///
/// reflect_struct!(Named { fields: { name } });
/// reflect_struct!(Employee {
///     bases: { base: Named },
///     fields: { id },
/// });
///
/// let employee = Employee {
///     base: Named { name: "Vera".into() },
///     id: 7,
/// };
/// assert_eq!(
///     specular::encode_to_string(&employee).unwrap(),
///     r#"{"name":"Vera","id":7}"#
/// );
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ident { fields: { $($field:ident),* $(,)? } $(,)? }) => {
        $crate::reflect_struct!($ty { bases: {}, fields: { $($field),* } });
    };
    ($ty:ident {
        bases: { $($base_field:ident: $base_ty:ty),* $(,)? },
        fields: { $($field:ident),* $(,)? } $(,)?
    }) => {
        impl $crate::meta::Describe for $ty {
            fn descriptor() -> &'static $crate::meta::TypeDescriptor<Self> {
                static BASES: &[$crate::meta::BaseDescriptor<$ty>] = &[
                    $({
                        fn visit(
                            object: &$ty,
                            visitor: &mut dyn FnMut(
                                &'static str,
                                &dyn $crate::Encode,
                            ) -> $crate::Result<()>,
                        ) -> $crate::Result<()> {
                            <$base_ty as $crate::meta::Describe>::descriptor()
                                .visit_fields(&object.$base_field, visitor)
                        }
                        $crate::meta::BaseDescriptor::new(visit)
                    },)*
                ];
                static FIELDS: &[$crate::meta::FieldDescriptor<$ty>] = &[
                    $({
                        fn access<'a>(object: &'a $ty) -> &'a dyn $crate::Encode {
                            &object.$field
                        }
                        $crate::meta::FieldDescriptor::new(stringify!($field), access)
                    },)*
                ];
                static DESCRIPTOR: $crate::meta::TypeDescriptor<$ty> =
                    $crate::meta::TypeDescriptor::new(BASES, FIELDS);
                &DESCRIPTOR
            }
        }

        impl $crate::Encode for $ty {
            fn encode(&self, out: &mut $crate::JsonWriter) -> $crate::Result<()> {
                $crate::encode::encoders::encode_object(self, out)
            }

            fn category(&self) -> $crate::Category {
                $crate::Category::Reflectable
            }
        }
    };
}

/// Describe an enumeration: an ordered case table mapping values to display
/// names. The listing may be partial; values without a registered name
/// encode as their underlying integer.
///
/// ```
/// use specular::reflect_enum;
///
/// #[derive(Clone, Copy, PartialEq)]
/// enum Tone {
///     Warm,
///     Cool,
///     Neutral,
/// }
///
/// reflect_enum!(Tone {
///     Warm => "warm",
///     Cool => "cool",
///     Neutral => "neutral",
/// });
///
/// assert_eq!(specular::encode_to_string(&Tone::Cool).unwrap(), r#""cool""#);
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($ty:ident { $($case:ident => $name:literal),* $(,)? }) => {
        impl $crate::meta::DescribeEnum for $ty {
            fn descriptor() -> &'static $crate::meta::EnumDescriptor<Self> {
                static CASES: &[$crate::meta::EnumCaseDescriptor<$ty>] = &[
                    $($crate::meta::EnumCaseDescriptor::new($name, $ty::$case),)*
                ];
                static DESCRIPTOR: $crate::meta::EnumDescriptor<$ty> =
                    $crate::meta::EnumDescriptor::new(CASES);
                &DESCRIPTOR
            }

            fn discriminant(self) -> i64 {
                self as i64
            }
        }

        impl $crate::Encode for $ty {
            fn encode(&self, out: &mut $crate::JsonWriter) -> $crate::Result<()> {
                $crate::encode::encoders::encode_enum(*self, out)
            }

            fn category(&self) -> $crate::Category {
                $crate::Category::Enumeration
            }
        }
    };
}

/// Describe a tagged union: every single-payload alternative, in declaration
/// order. The generated payload projection matches exhaustively, so leaving
/// an alternative out is a compile error.
///
/// ```
/// use specular::reflect_variant;
///
/// enum Value {
///     Count(u32),
///     Label(String),
/// }
///
/// reflect_variant!(Value { Count, Label });
///
/// assert_eq!(
///     specular::encode_to_string(&Value::Label("hi".into())).unwrap(),
///     r#"{"index":1,"value":"hi"}"#
/// );
/// ```
#[macro_export]
macro_rules! reflect_variant {
    ($ty:ident { $($case:ident),+ $(,)? }) => {
        impl $crate::meta::TaggedUnion for $ty {
            fn index(&self) -> usize {
                let mut index = 0usize;
                $(
                    if let $ty::$case(..) = self {
                        return index;
                    }
                    index += 1;
                )+
                let _ = index;
                unreachable!("alternative missing from reflect_variant! listing")
            }

            fn payload(&self) -> &dyn $crate::Encode {
                match self {
                    $($ty::$case(value) => value as &dyn $crate::Encode,)+
                }
            }
        }

        impl $crate::Encode for $ty {
            fn encode(&self, out: &mut $crate::JsonWriter) -> $crate::Result<()> {
                $crate::encode::encoders::encode_variant(self, out)
            }

            fn category(&self) -> $crate::Category {
                $crate::Category::Variant
            }
        }
    };
}
