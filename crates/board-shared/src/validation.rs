//! Explicit request validation.
//!
//! Each request type checks its fields in declaration order and either
//! yields the domain command it stands for or the list of violations.

pub mod messages {
    pub const BLANK_NAME: &str = "Name must not be blank.";
    pub const NEGATIVE_AGE: &str = "Age must not be negative.";
    pub const NULL_AGE: &str = "Age must not be null.";
    pub const BLANK_TITLE: &str = "Title must not be blank.";
    pub const BLANK_CONTENT: &str = "Content must not be blank.";
    pub const NULL_USER_ID: &str = "User id must not be null.";
    pub const UNSUPPORTED_SORT: &str = "Unsupported sort field.";
    pub const INVALID_ARGUMENT: &str = "Invalid argument.";
}

/// Turn an unchecked request into the command it describes.
pub trait Validate {
    type Valid;

    fn validate(self) -> Result<Self::Valid, Violations>;
}

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: Option<String>,
}

/// Every violated constraint of one request, in the order checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.first_message())]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation on `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &'static str, message: &str) -> &mut Self {
        if !ok {
            self.push(field, Some(message.to_string()));
        }
        self
    }

    pub fn push(&mut self, field: &'static str, message: Option<String>) {
        self.0.push(Violation { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// The first message carried by any violation, or the generic fallback.
    pub fn first_message(&self) -> &str {
        self.0
            .iter()
            .find_map(|v| v.message.as_deref())
            .unwrap_or(messages::INVALID_ARGUMENT)
    }
}

/// True for `Some` text containing at least one non-whitespace character.
pub fn is_not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_follows_check_order() {
        let mut violations = Violations::new();
        violations
            .check(false, "name", messages::BLANK_NAME)
            .check(false, "age", messages::NEGATIVE_AGE);

        assert_eq!(violations.first_message(), messages::BLANK_NAME);
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, ["name", "age"]);
    }

    #[test]
    fn violations_are_an_error_displaying_the_first_message() {
        let mut violations = Violations::new();
        violations.check(false, "title", messages::BLANK_TITLE);

        let err: Box<dyn std::error::Error> = Box::new(violations);
        assert_eq!(err.to_string(), messages::BLANK_TITLE);
    }

    #[test]
    fn first_message_skips_violations_without_message() {
        let mut violations = Violations::new();
        violations.push("body", None);
        violations.check(false, "age", messages::NEGATIVE_AGE);

        assert_eq!(violations.first_message(), messages::NEGATIVE_AGE);
    }

    #[test]
    fn falls_back_to_invalid_argument() {
        let mut violations = Violations::new();
        violations.push("body", None);

        assert_eq!(violations.first_message(), messages::INVALID_ARGUMENT);
        assert_eq!(violations.to_string(), messages::INVALID_ARGUMENT);
    }

    #[test]
    fn blank_detection() {
        assert!(is_not_blank(Some("a")));
        assert!(!is_not_blank(Some(" \t\n")));
        assert!(!is_not_blank(Some("")));
        assert!(!is_not_blank(None));
    }
}
