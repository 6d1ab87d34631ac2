use corral_core::prelude::*;
use std::fmt;

///
/// Student
///
/// A student in <dob> where dob(date_of_birth). The date is immutable once
/// set, exactly 10 bytes, and must match `dd/mm/yyyy` as a shape. Calendar
/// validity is out of scope: "31/02/2020" satisfies the pattern.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Student {
    date_of_birth: String,
}

impl Student {
    pub fn new(date_of_birth: impl Into<String>) -> Result<Self, ConstructionError> {
        construct(Self {
            date_of_birth: date_of_birth.into(),
        })
    }

    #[must_use]
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }
}

impl Record for Student {
    const MODEL: RecordModel = RecordModel {
        name: "Student",
        fields: &[FieldModel {
            name: "date_of_birth",
            kind: FieldKind::Text,
            mutable: false,
            optional: false,
            constraints: &[
                ConstraintModel::LenEqual(10),
                ConstraintModel::Pattern(r"\d{2}/\d{2}/\d{4}"),
            ],
        }],
    };

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "date_of_birth" => Some(Value::from(self.date_of_birth.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_date_constructs() {
        let student = Student::new("01/09/2001").expect("valid date shape");
        assert_eq!(student.date_of_birth(), "01/09/2001");
        assert!(student.rep_ok());
    }

    #[test]
    fn pattern_is_shape_only_not_a_calendar() {
        // Documented limitation: February 31st passes the dd/mm/yyyy shape.
        assert!(Student::new("31/02/2020").is_ok());
    }

    #[test]
    fn single_digit_parts_fail() {
        let err = Student::new("1/9/2001").expect_err("wrong shape");
        let reasons = &err.issues["date_of_birth"];
        // both the exact-length and the pattern constraint fire
        assert_eq!(reasons.len(), 2);
    }

    #[test]
    fn ten_chars_with_wrong_shape_fail_pattern_only() {
        let err = Student::new("2001/09/01").expect_err("iso order is rejected");
        let reasons = &err.issues["date_of_birth"];
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("does not match pattern"));
    }

    #[test]
    fn display_renders_the_date() {
        let student = Student::new("01/09/2001").expect("valid date shape");
        assert_eq!(student.to_string(), "Student: <01/09/2001>");
    }
}
