//! Binding descriptors
//!
//! A record describes itself to the binder as a list of [`Field`]s, in
//! declaration order. Each field carries its [`Annotation`] and a [`Slot`],
//! a mutable view of the field classified by kind. `#[derive(Envs)]`
//! generates the list; records can also implement [`Envs`] by hand.

use std::num::ParseIntError;
use std::rc::Rc;
use std::sync::Arc;

/// Marker value that excludes a field from binding.
pub const SKIP_MARKER: &str = "-";

/// Per-field `envs` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// No annotation: the field is not bindable.
    Absent,
    /// The `"-"` marker: the field is explicitly excluded.
    Skip,
    /// Empty annotation: nested records are still traversed, leaves are left alone.
    Empty,
    /// Name of the environment variable to read.
    Key(&'static str),
}

impl Annotation {
    /// Classify a raw annotation string.
    pub fn parse(raw: Option<&'static str>) -> Self {
        match raw {
            None => Self::Absent,
            Some(SKIP_MARKER) => Self::Skip,
            Some("") => Self::Empty,
            Some(key) => Self::Key(key),
        }
    }

    /// Whether the field takes part in binding at all.
    pub fn is_bindable(&self) -> bool {
        matches!(self, Self::Empty | Self::Key(_))
    }

    /// Environment variable name, if the annotation names one.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Key(key) => Some(*key),
            _ => None,
        }
    }
}

/// Mutable view of a single field, classified by kind.
pub enum Slot<'a> {
    /// Text assigned verbatim
    Text(&'a mut String),
    /// Any primitive integer, parsed base-10
    Integer(&'a mut dyn Integer),
    /// `true` only for the exact string `"true"`
    Boolean(&'a mut bool),
    /// A nested record and its own fields
    Nested(Vec<Field<'a>>),
    /// A value that cannot be mutated through the record
    ReadOnly,
    /// A type the binder does not handle, with its type name
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Human readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Nested(_) => "record",
            Self::ReadOnly => "read-only value",
            Self::Unsupported(type_name) => *type_name,
        }
    }
}

/// One entry of a binding descriptor.
pub struct Field<'a> {
    /// Field name as declared on the record
    pub name: &'static str,
    /// Parsed `envs` annotation
    pub annotation: Annotation,
    /// Mutable view of the field
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describe one field of a record.
    pub fn new(name: &'static str, annotation: Annotation, slot: Slot<'a>) -> Self {
        Self {
            name,
            annotation,
            slot,
        }
    }
}

/// A structured record whose fields can be bound from the environment.
///
/// Usually implemented with `#[derive(Envs)]`, which also implements
/// [`EnvField`] so the record can be nested inside another one. A hand-written
/// descriptor lists every field with its raw annotation:
///
/// ```rust
/// use envs::{Annotation, EnvField, Envs, Field, Slot, SKIP_MARKER};
/// use std::collections::HashMap;
///
/// #[derive(Default)]
/// struct Limits {
///     max_body: u64,
///     name: String,
///     note: String,
/// }
///
/// impl Envs for Limits {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("max_body", Annotation::parse(Some("MAX_BODY")), self.max_body.slot()),
///             Field::new("name", Annotation::parse(Some(SKIP_MARKER)), self.name.slot()),
///             Field::new("note", Annotation::parse(None), self.note.slot()),
///         ]
///     }
/// }
///
/// impl EnvField for Limits {
///     fn slot(&mut self) -> Slot<'_> {
///         Slot::Nested(self.fields())
///     }
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// let env = HashMap::from([
///     ("MAX_BODY".to_string(), "4096".to_string()),
///     ("name".to_string(), "ignored".to_string()),
/// ]);
/// let mut limits = Limits::default();
/// envs::bind_with(&mut limits, &env)?;
/// assert_eq!(limits.max_body, 4096);
/// assert_eq!(limits.name, "");
/// # Ok(())
/// # }
/// ```
pub trait Envs {
    /// Binding descriptor of this record, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Bind this record from the process environment.
    ///
    /// Shorthand for [`bind`](crate::bind).
    fn bind_envs(&mut self) -> Result<(), crate::BindError>
    where
        Self: EnvField,
    {
        crate::bind(self)
    }
}

/// A value that can appear as a field of a bindable record.
pub trait EnvField {
    /// Classify this value for the binder.
    fn slot(&mut self) -> Slot<'_>;
}

/// Primitive integers assignable from a base-10 string.
pub trait Integer {
    /// Parse `raw` and store the result, leaving `self` untouched on failure.
    fn assign_str(&mut self, raw: &str) -> Result<(), ParseIntError>;
}

impl EnvField for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

impl EnvField for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Boolean(self)
    }
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                fn assign_str(&mut self, raw: &str) -> Result<(), ParseIntError> {
                    *self = raw.parse::<$t>()?;
                    Ok(())
                }
            }

            impl EnvField for $t {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Integer(self)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_unsupported {
    ($($t:ty),* $(,)?) => {
        $(
            impl EnvField for $t {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(std::any::type_name::<$t>())
                }
            }
        )*
    };
}

impl_unsupported!(f32, f64, char);

impl<T> EnvField for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T> EnvField for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T: ?Sized> EnvField for &T {
    fn slot(&mut self) -> Slot<'_> {
        Slot::ReadOnly
    }
}

impl<T: ?Sized> EnvField for Rc<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::ReadOnly
    }
}

impl<T: ?Sized> EnvField for Arc<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::ReadOnly
    }
}

impl<T: EnvField + ?Sized> EnvField for &mut T {
    fn slot(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}

impl<T: EnvField + ?Sized> EnvField for Box<T> {
    fn slot(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}
