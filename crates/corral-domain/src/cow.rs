use corral_core::prelude::*;
use std::fmt;

///
/// Cow
///
/// A farm animal in <n, b, a> where name(n), breed(b), age(a). All three
/// fields are mutable and required; names are capped at 30 bytes and age at
/// 1..=36 months.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Cow {
    name: String,
    breed: String,
    age: i64,
}

impl Cow {
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i64,
    ) -> Result<Self, ConstructionError> {
        construct(Self {
            name: name.into(),
            breed: breed.into(),
            age,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn breed(&self) -> &str {
        &self.breed
    }

    #[must_use]
    pub const fn age(&self) -> i64 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), InvalidMutation> {
        let name = name.into();
        check_field::<Self>("name", &Value::from(name.as_str()))?;
        self.name = name;

        Ok(())
    }

    pub fn set_breed(&mut self, breed: impl Into<String>) -> Result<(), InvalidMutation> {
        let breed = breed.into();
        check_field::<Self>("breed", &Value::from(breed.as_str()))?;
        self.breed = breed;

        Ok(())
    }

    pub fn set_age(&mut self, age: i64) -> Result<(), InvalidMutation> {
        check_field::<Self>("age", &Value::Int(age))?;
        self.age = age;

        Ok(())
    }
}

impl Record for Cow {
    const MODEL: RecordModel = RecordModel {
        name: "Cow",
        fields: &[
            FieldModel {
                name: "name",
                kind: FieldKind::Text,
                mutable: true,
                optional: false,
                constraints: &[ConstraintModel::LenMax(30)],
            },
            FieldModel {
                name: "breed",
                kind: FieldKind::Text,
                mutable: true,
                optional: false,
                constraints: &[ConstraintModel::LenMax(30)],
            },
            FieldModel {
                name: "age",
                kind: FieldKind::Int,
                mutable: true,
                optional: false,
                constraints: &[ConstraintModel::Range {
                    min: Some(1),
                    max: Some(36),
                }],
            },
        ],
    };

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::from(self.name.as_str())),
            "breed" => Some(Value::from(self.breed.as_str())),
            "age" => Some(Value::Int(self.age)),
            _ => None,
        }
    }
}

impl fmt::Display for Cow {
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

    fn daisy() -> Cow {
        Cow::new("Daisy", "Jersey", 4).expect("valid cow")
    }

    #[test]
    fn valid_cow_constructs_and_rep_ok_holds() {
        let cow = daisy();
        assert!(cow.rep_ok());
        assert_eq!(cow.name(), "Daisy");
        assert_eq!(cow.breed(), "Jersey");
        assert_eq!(cow.age(), 4);
    }

    #[test]
    fn age_36_is_the_last_valid_value() {
        assert!(Cow::new("Daisy", "Jersey", 36).is_ok());

        let err = Cow::new("Daisy", "Jersey", 37).expect_err("max age is 36");
        assert!(err.issues.contains_key("age"));
    }

    #[test]
    fn age_below_one_fails_construction() {
        assert!(Cow::new("Daisy", "Jersey", 0).is_err());
    }

    #[test]
    fn name_over_thirty_chars_fails_construction() {
        let long = "x".repeat(31);
        let err = Cow::new(long, "Jersey", 4).expect_err("name too long");
        assert!(err.issues.contains_key("name"));
        assert!(!err.issues.contains_key("breed"));
    }

    #[test]
    fn setters_commit_valid_values() {
        let mut cow = daisy();

        cow.set_name("Bessie").expect("valid name");
        cow.set_age(5).expect("valid age");

        assert_eq!(cow.name(), "Bessie");
        assert_eq!(cow.age(), 5);
        assert!(cow.rep_ok());
    }

    #[test]
    fn failed_mutation_retains_the_prior_value() {
        let mut cow = daisy();

        let err = cow.set_age(0).expect_err("0 is below minimum");
        assert_eq!(err.field, "age");
        assert_eq!(cow.age(), 4);

        let long = "x".repeat(31);
        assert!(cow.set_breed(long).is_err());
        assert_eq!(cow.breed(), "Jersey");
    }

    #[test]
    fn display_lists_fields_in_declaration_order() {
        assert_eq!(daisy().to_string(), "Cow: <Daisy, Jersey, 4>");
    }
}
