//! ## Crate layout
//! - `core`: field values, constraint models, validators, and the validation
//!   driver behind construct-or-fail records.
//! - `domain`: the record types themselves (Cow, Student, the two Tank
//!   variants, Employee).
//!
//! The `prelude` module carries the vocabulary callers need to construct,
//! observe, and mutate records.

pub use corral_core as core;
pub use corral_domain as domain;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        error::{ConstructionError, Error, InvalidMutation, ValidateError},
        model::{ConstraintModel, FieldKind, FieldModel, RecordModel},
        traits::Record,
        validate::validate,
        value::Value,
    };
    pub use crate::domain::{Cow, Employee, Student, Tank, game};
}
