//! The value-level outcome of a failed check
//!
//! A [`Failure`] is an immutable snapshot taken at evaluation time: the kind
//! of rule that produced it, the group name it was filed under, the rendered
//! message, and the severity. Failures are plain data — they are aggregated
//! and reported, never thrown.

use std::borrow::Cow;
use std::fmt;

/// One violated rule, captured at evaluation time.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut rule = MinLength::new("username", 3);
/// rule.evaluate_target("al".to_string());
///
/// let failure = &rule.failures()[0];
/// assert_eq!(failure.code(), "min_length");
/// assert_eq!(failure.group_name(), "username");
/// assert_eq!(failure.severity(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    code: Cow<'static, str>,
    group_name: Cow<'static, str>,
    message: String,
    severity: i32,
}

impl Failure {
    /// Creates a failure snapshot.
    ///
    /// Rules construct these during evaluation; applications normally only
    /// read them.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        group_name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        severity: i32,
    ) -> Self {
        Self {
            code: code.into(),
            group_name: group_name.into(),
            message: message.into(),
            severity,
        }
    }

    /// Identifies the kind of rule that produced this failure
    /// (`"min_length"`, `"null_check"`, `"summary"`, …).
    ///
    /// This is the introspection handle for tests and reporting: instead of
    /// downcasting to a concrete rule type, match on the code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The group name the originating rule was filed under.
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// The message rendered when the failure was captured.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity assigned to the originating rule.
    #[must_use]
    pub fn severity(&self) -> i32 {
        self.severity
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.group_name, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_captured_values() {
        let failure = Failure::new("min_length", "username", "too short", 2);
        assert_eq!(failure.code(), "min_length");
        assert_eq!(failure.group_name(), "username");
        assert_eq!(failure.message(), "too short");
        assert_eq!(failure.severity(), 2);
    }

    #[test]
    fn display_includes_group_and_message() {
        let failure = Failure::new("must", "age", "age is not valid", 1);
        assert_eq!(failure.to_string(), "[age] age is not valid");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_all_fields() {
        let failure = Failure::new("email", "email", "email is not valid", 1);
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["code"], "email");
        assert_eq!(json["group_name"], "email");
        assert_eq!(json["severity"], 1);
    }
}
