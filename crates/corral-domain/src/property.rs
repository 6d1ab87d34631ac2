use crate::{cow::Cow, game, student::Student};
use corral_core::prelude::*;
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,29}"
}

fn arb_valid_age() -> impl Strategy<Value = i64> {
    1i64..=36
}

fn arb_invalid_age() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..=0, 37i64..=i64::MAX]
}

fn arb_stat() -> impl Strategy<Value = i64> {
    1i64..=10_000
}

proptest! {
    #[test]
    fn valid_cow_tuples_construct_and_hold_rep_ok(
        name in arb_name(),
        breed in arb_name(),
        age in arb_valid_age(),
    ) {
        let cow = Cow::new(name.clone(), breed.clone(), age).expect("tuple is valid");
        prop_assert!(cow.rep_ok());
        prop_assert_eq!(cow.name(), name.as_str());
        prop_assert_eq!(cow.breed(), breed.as_str());
        prop_assert_eq!(cow.age(), age);
    }

    #[test]
    fn out_of_range_age_always_fails_construction(
        name in arb_name(),
        breed in arb_name(),
        age in arb_invalid_age(),
    ) {
        let err = Cow::new(name, breed, age).expect_err("age is out of range");
        prop_assert!(err.issues.contains_key("age"));
    }

    #[test]
    fn valid_mutation_touches_exactly_one_field(
        age in arb_valid_age(),
        next_age in arb_valid_age(),
    ) {
        let mut cow = Cow::new("Daisy", "Jersey", age).expect("valid cow");

        cow.set_age(next_age).expect("new age is in range");

        prop_assert_eq!(cow.age(), next_age);
        prop_assert_eq!(cow.name(), "Daisy");
        prop_assert_eq!(cow.breed(), "Jersey");
        prop_assert!(cow.rep_ok());
    }

    #[test]
    fn failed_mutation_leaves_the_record_untouched(
        age in arb_valid_age(),
        bad_age in arb_invalid_age(),
    ) {
        let cow = Cow::new("Daisy", "Jersey", age).expect("valid cow");
        let mut mutated = cow.clone();

        prop_assert!(mutated.set_age(bad_age).is_err());
        prop_assert_eq!(mutated, cow);
    }

    #[test]
    fn game_tank_repricing_is_all_or_nothing(
        hp in arb_stat(),
        damage in arb_stat(),
        armor in 0i64..=10_000,
        price in arb_stat(),
        bad_price in i64::MIN..=0,
    ) {
        let tank = game::Tank::new(hp, damage, armor, price).expect("valid tank");
        let mut mutated = tank.clone();

        prop_assert!(mutated.set_price(bad_price).is_err());
        prop_assert_eq!(mutated, tank);
    }

    #[test]
    fn date_shaped_strings_construct_students(dob in "[0-9]{2}/[0-9]{2}/[0-9]{4}") {
        let student = Student::new(dob.clone()).expect("shape matches the pattern");
        prop_assert!(student.rep_ok());
        prop_assert_eq!(student.date_of_birth(), dob.as_str());
    }

    #[test]
    fn undated_strings_never_construct_students(dob in "[a-z]{0,12}") {
        prop_assert!(Student::new(dob).is_err());
    }
}
