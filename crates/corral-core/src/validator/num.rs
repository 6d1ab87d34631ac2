use crate::{context::FieldContext, validator::Validator};
use num_traits::NumCast;

fn cast_i128<N: NumCast + Copy>(value: &N) -> Result<i128, String> {
    <i128 as NumCast>::from(*value).ok_or_else(|| {
        format!(
            "value of type {} cannot be represented as i128",
            core::any::type_name::<N>()
        )
    })
}

///
/// Gte
///

#[derive(Clone, Copy, Debug)]
pub struct Gte {
    target: i128,
}

impl Gte {
    pub fn new<N: NumCast + Copy>(target: N) -> Self {
        let target = cast_i128(&target)
            .unwrap_or_else(|e| panic!("Gte::new failed to convert target: {e}"));

        Self { target }
    }
}

impl<N: NumCast + Copy> Validator<N> for Gte {
    fn validate(&self, value: &N, ctx: &mut dyn FieldContext) {
        match cast_i128(value) {
            Ok(v) if v >= self.target => {}
            Ok(v) => ctx.issue(format!("{v} must be >= {}", self.target)),
            Err(e) => ctx.issue(e),
        }
    }
}

///
/// Lte
///

#[derive(Clone, Copy, Debug)]
pub struct Lte {
    target: i128,
}

impl Lte {
    pub fn new<N: NumCast + Copy>(target: N) -> Self {
        let target = cast_i128(&target)
            .unwrap_or_else(|e| panic!("Lte::new failed to convert target: {e}"));

        Self { target }
    }
}

impl<N: NumCast + Copy> Validator<N> for Lte {
    fn validate(&self, value: &N, ctx: &mut dyn FieldContext) {
        match cast_i128(value) {
            Ok(v) if v <= self.target => {}
            Ok(v) => ctx.issue(format!("{v} must be <= {}", self.target)),
            Err(e) => ctx.issue(e),
        }
    }
}

///
/// Range
///
/// Inclusive on both ends.
///

#[derive(Clone, Copy, Debug)]
pub struct Range {
    min: i128,
    max: i128,
}

impl Range {
    pub fn new<N: NumCast + Copy>(min: N, max: N) -> Self {
        let min =
            cast_i128(&min).unwrap_or_else(|e| panic!("Range::new failed to convert min: {e}"));
        let max =
            cast_i128(&max).unwrap_or_else(|e| panic!("Range::new failed to convert max: {e}"));
        assert!(min <= max, "range requires min <= max");

        Self { min, max }
    }
}

impl<N: NumCast + Copy> Validator<N> for Range {
    fn validate(&self, value: &N, ctx: &mut dyn FieldContext) {
        match cast_i128(value) {
            Ok(v) if v < self.min || v > self.max => ctx.issue(format!(
                "{v} must be between {} and {} (inclusive)",
                self.min, self.max
            )),
            Ok(_) => {}
            Err(e) => ctx.issue(e),
        }
    }
}

///
/// TESTS
///
