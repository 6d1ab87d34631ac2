use corral_core::prelude::*;
use std::fmt;

///
/// Employee
///
/// A single required text field: the full name. Non-null is type-level in
/// Rust (`String` cannot be null), and no further constraint is declared, so
/// construction cannot actually fail; `new` keeps the `Result` shape for a
/// uniform entity API.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Employee {
    full_name: String,
}

impl Employee {
    pub fn new(full_name: impl Into<String>) -> Result<Self, ConstructionError> {
        construct(Self {
            full_name: full_name.into(),
        })
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> Result<(), InvalidMutation> {
        let full_name = full_name.into();
        check_field::<Self>("full_name", &Value::from(full_name.as_str()))?;
        self.full_name = full_name;

        Ok(())
    }
}

impl Record for Employee {
    const MODEL: RecordModel = RecordModel {
        name: "Employee",
        fields: &[FieldModel {
            name: "full_name",
            kind: FieldKind::Text,
            mutable: true,
            optional: false,
            constraints: &[],
        }],
    };

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "full_name" => Some(Value::from(self.full_name.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

///
/// TESTS
///
