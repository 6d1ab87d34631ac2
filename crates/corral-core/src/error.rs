use std::collections::BTreeMap;
use thiserror::Error as ThisError;

/// Render an issue map as "field: reason; field: reason" for Display strings.
/// BTreeMap keys keep the output deterministic.
pub(crate) fn fmt_issues(issues: &BTreeMap<String, Vec<String>>) -> String {
    issues
        .iter()
        .flat_map(|(field, reasons)| reasons.iter().map(move |r| format!("{field}: {r}")))
        .collect::<Vec<_>>()
        .join("; ")
}

///
/// Error
///
/// Top-level error for record creation and mutation. Mutating an immutable
/// field has no variant here: no setter exists for such fields.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Mutation(#[from] InvalidMutation),
}

///
/// ValidateError
///
/// Every issue found in one validation pass, keyed by field name.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("validation failed: {}", fmt_issues(.issues))]
pub struct ValidateError {
    pub issues: BTreeMap<String, Vec<String>>,
}

///
/// ConstructionError
///
/// Creation-time failure. Carries every offending field and why; no record
/// value is produced alongside it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{record} construction failed: {}", fmt_issues(.issues))]
pub struct ConstructionError {
    pub record: &'static str,
    pub issues: BTreeMap<String, Vec<String>>,
}

///
/// InvalidMutation
///
/// A setter was called with a value failing its field's constraints. The
/// record's prior state is unchanged. Expected and recoverable; returned,
/// never panicked.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid value for {record}.{field}: {}", .reasons.join("; "))]
pub struct InvalidMutation {
    pub record: &'static str,
    pub field: &'static str,
    pub reasons: Vec<String>,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_lists_every_field() {
        let mut issues = BTreeMap::new();
        issues.insert("age".to_string(), vec!["0 must be >= 1".to_string()]);
        issues.insert(
            "name".to_string(),
            vec!["length (31) is greater than maximum of 30".to_string()],
        );

        let err = ConstructionError {
            record: "Cow",
            issues,
        };
        let rendered = err.to_string();

        assert!(rendered.starts_with("Cow construction failed: "));
        assert!(rendered.contains("age: 0 must be >= 1"));
        assert!(rendered.contains("name: length (31)"));
    }

    #[test]
    fn invalid_mutation_names_record_and_field() {
        let err = InvalidMutation {
            record: "Tank",
            field: "damage",
            reasons: vec!["0 must be >= 1".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "invalid value for Tank.damage: 0 must be >= 1"
        );
    }
}
