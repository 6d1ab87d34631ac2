use crate::{model::RecordModel, validate::validate, value::Value};
use std::fmt;

///
/// Record
///
/// A constrained record: a flat bag of independently validated fields
/// described by `MODEL`. Implementors keep their fields private and expose
/// construction through a validating `new`; `field` is the generic
/// name-keyed observer used by the validation driver and rendering.
///

pub trait Record {
    const MODEL: RecordModel;

    /// Current value of a declared field, by model name.
    ///
    /// `None` for undeclared names and for optional fields holding no value.
    fn field(&self, name: &str) -> Option<Value>;

    /// Representation invariant: every field still satisfies its declared
    /// constraints. Intended for tests, not the production call path.
    fn rep_ok(&self) -> bool
    where
        Self: Sized,
    {
        validate(self).is_ok()
    }
}

/// Diagnostic rendering: `"{Name}: <v1, v2, ...>"` in field declaration
/// order. Unset optional fields render as `_`. Records use this for their
/// `Display` impls.
pub fn render<R: Record>(record: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: <", R::MODEL.name)?;

    for (i, field) in R::MODEL.fields.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match record.field(field.name) {
            Some(value) => write!(f, "{value}")?,
            None => write!(f, "_")?,
        }
    }

    write!(f, ">")
}
