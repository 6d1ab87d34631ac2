use crate::{context::FieldContext, validator::Validator};

///
/// HasLen
/// For strings this is `str::len`, i.e. bytes, not chars.
///

#[allow(clippy::len_without_is_empty)]
pub trait HasLen {
    fn len(&self) -> usize;
}

impl HasLen for str {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl HasLen for String {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T> HasLen for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> HasLen for Vec<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

///
/// Equal
///

#[derive(Clone, Copy, Debug)]
pub struct Equal {
    target: usize,
}

impl Equal {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }
}

impl<T: HasLen + ?Sized> Validator<T> for Equal {
    fn validate(&self, value: &T, ctx: &mut dyn FieldContext) {
        let len = value.len();
        if len != self.target {
            ctx.issue(format!(
                "length ({len}) is not equal to {}",
                self.target
            ));
        }
    }
}

///
/// Max
///

#[derive(Clone, Copy, Debug)]
pub struct Max {
    target: usize,
}

impl Max {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }
}

impl<T: HasLen + ?Sized> Validator<T> for Max {
    fn validate(&self, value: &T, ctx: &mut dyn FieldContext) {
        let len = value.len();
        if len > self.target {
            ctx.issue(format!(
                "length ({len}) is greater than maximum of {}",
                self.target
            ));
        }
    }
}

///
/// TESTS
///
