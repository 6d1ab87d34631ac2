//! Core runtime for Corral: field values, constraint models, validators, and
//! the validation driver used by record constructors and setters.
//!
//! A record type declares a [`model::RecordModel`] — a plain configuration
//! table, one [`model::FieldModel`] per field — and implements
//! [`traits::Record`] to expose its current values by name. Everything else
//! (construct-or-fail, single-field pre-commit checks, repOK, diagnostic
//! rendering) is driven off that table.

pub mod context;
pub mod error;
pub mod model;
pub mod traits;
pub mod validate;
pub mod validator;
pub mod value;

pub use error::{ConstructionError, Error, InvalidMutation, ValidateError};

///
/// Prelude
///
/// Domain vocabulary only; record crates import this wholesale.
///

pub mod prelude {
    pub use crate::{
        context::FieldContext,
        error::{ConstructionError, Error, InvalidMutation, ValidateError},
        model::{ConstraintModel, FieldKind, FieldModel, RecordModel},
        traits::{Record, render},
        validate::{check_field, construct, validate},
        value::Value,
    };
    pub use serde::Serialize;
}
