use crate::{context::FieldContext, validator::Validator};
use regex::Regex;

///
/// Pattern
///
/// Anchored full-string regex match: the whole value must match the declared
/// pattern, never a substring. A pattern that fails to compile is an
/// invalid-configuration issue, reported instead of panicking.
///
/// The regex is compiled on every check: constraint tables are const, so they
/// hold the pattern source, not a compiled handle.
///

#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pattern: &'static str,
}

impl Pattern {
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }
}

impl Validator<str> for Pattern {
    fn validate(&self, value: &str, ctx: &mut dyn FieldContext) {
        match Regex::new(&format!("^(?:{})$", self.pattern)) {
            Ok(re) => {
                if !re.is_match(value) {
                    ctx.issue(format!(
                        "'{value}' does not match pattern '{}'",
                        self.pattern
                    ));
                }
            }
            Err(err) => ctx.issue(format!("invalid pattern '{}': {err}", self.pattern)),
        }
    }
}

///
/// TESTS
///
