use crate::model::FieldKind;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// Owned runtime value for a constrained record field. The corpus only uses
/// integer and text fields, so the surface stays that small.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// The field kind this value satisfies.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Int,
            Self::Text(_) => FieldKind::Text,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

// Bare payload rendering; record rendering wraps these in "<...>".
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::Int(3).kind(), FieldKind::Int);
        assert_eq!(Value::from("hey").kind(), FieldKind::Text);
    }

    #[test]
    fn display_is_bare_payload() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::from("Daisy").to_string(), "Daisy");
    }

    #[test]
    fn typed_accessors() {
        assert_eq!(Value::Int(5).as_int(), Some(5));
        assert_eq!(Value::Int(5).as_text(), None);
        assert_eq!(Value::from("x").as_text(), Some("x"));
    }
}
