pub mod len;
pub mod num;
pub mod text;

use crate::context::FieldContext;

///
/// Validator
///
/// A single declarative check against one field value. Validators are pure:
/// they inspect the value and report into the context, nothing else.
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T, ctx: &mut dyn FieldContext);
}
