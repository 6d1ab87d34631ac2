use crate::{
    context::FieldContext,
    validator::{Validator, len, num, text},
    value::Value,
};
use derive_more::Display;
use serde::Serialize;

///
/// RecordModel
///
/// Declarative metadata for one record type: its display name and its fields
/// in declaration order. A plain configuration table; record types hold one
/// as an associated const.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct RecordModel {
    pub name: &'static str,
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}

///
/// FieldModel
///
/// Runtime field metadata: kind, mutability, optionality, and the constraint
/// list enforced at construction and on every mutation. `mutable` is
/// descriptive — immutable fields simply have no setter, so nothing checks
/// the flag at runtime.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldModel {
    pub name: &'static str,
    pub kind: FieldKind,
    pub mutable: bool,
    pub optional: bool,
    pub constraints: &'static [ConstraintModel],
}

impl FieldModel {
    /// Check a current or prospective value against this field's declaration.
    ///
    /// `None` means the field holds no value; that is only acceptable for
    /// optional fields, and constraints are skipped either way.
    pub fn check(&self, value: Option<&Value>, ctx: &mut dyn FieldContext) {
        let Some(value) = value else {
            if !self.optional {
                ctx.issue("required field has no value");
            }
            return;
        };

        if value.kind() != self.kind {
            ctx.issue(format!(
                "expected {} value, got {}",
                self.kind,
                value.kind()
            ));
            return;
        }

        for constraint in self.constraints {
            constraint.check(value, ctx);
        }
    }
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    Int,
    Text,
}

///
/// ConstraintModel
///
/// One declarative constraint on a field value. `Range` bounds are inclusive
/// and an unspecified bound is unbounded. Applying a constraint to a value
/// kind it cannot judge is an invalid configuration, reported as an issue.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum ConstraintModel {
    /// Text length exactly n.
    LenEqual(usize),
    /// Text length at most n.
    LenMax(usize),
    /// Integer within the declared inclusive bounds.
    Range { min: Option<i64>, max: Option<i64> },
    /// Anchored full-string regex match.
    Pattern(&'static str),
}

impl ConstraintModel {
    pub fn check(self, value: &Value, ctx: &mut dyn FieldContext) {
        match (self, value) {
            (Self::LenEqual(n), Value::Text(s)) => len::Equal::new(n).validate(s.as_str(), ctx),
            (Self::LenMax(n), Value::Text(s)) => len::Max::new(n).validate(s.as_str(), ctx),
            (Self::Pattern(re), Value::Text(s)) => {
                text::Pattern::new(re).validate(s.as_str(), ctx);
            }
            (Self::Range { min, max }, Value::Int(v)) => match (min, max) {
                (Some(min), Some(max)) => num::Range::new(min, max).validate(v, ctx),
                (Some(min), None) => num::Gte::new(min).validate(v, ctx),
                (None, Some(max)) => num::Lte::new(max).validate(v, ctx),
                (None, None) => {}
            },
            (constraint, value) => ctx.issue(format!(
                "constraint {constraint:?} does not apply to {} values",
                value.kind()
            )),
        }
    }
}

///
/// TESTS
///
