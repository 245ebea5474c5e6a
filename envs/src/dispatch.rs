//! Nested record detection for unannotated fields (used by macro-generated code)
//!
//! The derive cannot see whether a field's type is a record, so it asks the
//! compiler through method resolution: `Probe(&mut field).nested_slot()`
//! resolves to [`ViaEnvs`] when the field type implements [`Envs`], and falls
//! back to [`ViaFallback`] through autoref otherwise.

use crate::field::{Envs, Slot};

/// Wrapper around an unannotated field.
#[doc(hidden)]
pub struct Probe<'a, T: ?Sized>(pub &'a mut T);

/// Selected when the field is a bindable record.
#[doc(hidden)]
pub trait ViaEnvs<'a> {
    fn nested_slot(self) -> Option<Slot<'a>>;
}

impl<'a, T: Envs + ?Sized> ViaEnvs<'a> for Probe<'a, T> {
    fn nested_slot(self) -> Option<Slot<'a>> {
        Some(Slot::Nested(self.0.fields()))
    }
}

/// Selected for every other field type.
#[doc(hidden)]
pub trait ViaFallback<'a> {
    fn nested_slot(self) -> Option<Slot<'a>>;
}

impl<'a, T: ?Sized> ViaFallback<'a> for &Probe<'a, T> {
    fn nested_slot(self) -> Option<Slot<'a>> {
        None
    }
}
