use std::collections::BTreeMap;

///
/// FieldContext
///
/// Narrow interface validators use to report issues on the field currently
/// being checked. Reporting never aborts the pass; callers decide what a
/// non-empty issue set means.
///

pub trait FieldContext {
    fn add_issue(&mut self, message: String);
}

impl dyn FieldContext + '_ {
    pub fn issue(&mut self, msg: impl Into<String>) {
        self.add_issue(msg.into());
    }
}

///
/// FieldScope
///
/// Context adapter that pins every reported issue to one field name inside a
/// shared issue map.
///

pub(crate) struct FieldScope<'a> {
    field: &'static str,
    issues: &'a mut BTreeMap<String, Vec<String>>,
}

impl<'a> FieldScope<'a> {
    pub(crate) fn new(field: &'static str, issues: &'a mut BTreeMap<String, Vec<String>>) -> Self {
        Self { field, issues }
    }
}

impl FieldContext for FieldScope<'_> {
    fn add_issue(&mut self, message: String) {
        self.issues
            .entry(self.field.to_string())
            .or_default()
            .push(message);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_pins_issues_to_its_field() {
        let mut issues = BTreeMap::new();

        {
            let mut scope = FieldScope::new("age", &mut issues);
            let ctx: &mut dyn FieldContext = &mut scope;
            ctx.issue("too old");
            ctx.issue("still too old");
        }

        assert_eq!(issues.len(), 1);
        assert_eq!(issues["age"], vec!["too old", "still too old"]);
    }
}
