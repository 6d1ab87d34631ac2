use crate::{
    context::FieldScope,
    error::{ConstructionError, InvalidMutation, ValidateError},
    traits::Record,
    value::Value,
};
use std::collections::BTreeMap;

///
/// validate
///
/// Check every field of a record against its model, in declaration order.
/// Non-failing per field: all issues are collected and returned together,
/// keyed by field name.
///
pub fn validate<R: Record>(record: &R) -> Result<(), ValidateError> {
    let mut issues = BTreeMap::new();

    for field in R::MODEL.fields {
        let value = record.field(field.name);
        let mut scope = FieldScope::new(field.name, &mut issues);
        field.check(value.as_ref(), &mut scope);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidateError { issues })
    }
}

///
/// construct
///
/// Construct-or-fail gate for record constructors: the candidate is returned
/// only if every field validates, otherwise it is dropped and the error
/// names each offending field. No partially-valid record is observable.
///
pub fn construct<R: Record>(candidate: R) -> Result<R, ConstructionError> {
    match validate(&candidate) {
        Ok(()) => Ok(candidate),
        Err(err) => Err(ConstructionError {
            record: R::MODEL.name,
            issues: err.issues,
        }),
    }
}

///
/// check_field
///
/// Validate one prospective value before a setter commits it. On error the
/// caller leaves its current value untouched, so a failed mutation is never
/// a partial write.
///
pub fn check_field<R: Record>(name: &'static str, value: &Value) -> Result<(), InvalidMutation> {
    let Some(field) = R::MODEL.field(name) else {
        return Err(InvalidMutation {
            record: R::MODEL.name,
            field: name,
            reasons: vec!["field is not declared in the record model".to_string()],
        });
    };

    let mut issues = BTreeMap::new();
    {
        let mut scope = FieldScope::new(name, &mut issues);
        field.check(Some(value), &mut scope);
    }

    match issues.remove(name) {
        None => Ok(()),
        Some(reasons) => Err(InvalidMutation {
            record: R::MODEL.name,
            field: name,
            reasons,
        }),
    }
}

///
/// TESTS
///
