//! String length rules
//!
//! Lengths are measured in Unicode scalar values (`chars().count()`), not
//! bytes.

use std::borrow::Cow;
use std::time::Instant;

use crate::foundation::{Failure, Rule, TargetRule};
use crate::rules::base::RuleBase;
use crate::rules::logical::MustNot;

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Fails when the string is shorter than the configured minimum.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut rule = MinLength::new("username", 3);
/// rule.evaluate_target("al".to_string());
/// assert_eq!(
///     rule.failures()[0].message(),
///     "username requires at least 3 characters",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MinLength {
    base: RuleBase<String>,
    minimum: usize,
}

impl MinLength {
    pub fn new(group_name: impl Into<Cow<'static, str>>, minimum: usize) -> Self {
        Self {
            base: RuleBase::new(group_name, "{0} requires at least {1} characters"),
            minimum,
        }
    }

    /// The minimum length required.
    #[must_use]
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// Overrides the message template.
    #[must_use]
    pub fn with_message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.base.set_template(template);
        self
    }

    /// Overrides the severity stamped on failures.
    #[must_use]
    pub fn with_severity(mut self, severity: i32) -> Self {
        self.base.set_severity(severity);
        self
    }

    /// Pre-loads a target so a bare `evaluate` has something to check.
    #[must_use]
    pub fn with_target(mut self, target: String) -> Self {
        self.base.set_target(target);
        self
    }
}

impl Rule for MinLength {
    fn group_name(&self) -> &str {
        self.base.group_name()
    }

    fn severity(&self) -> i32 {
        self.base.severity()
    }

    fn message(&self) -> String {
        self.base.render_with(&self.minimum)
    }

    fn failures(&self) -> &[Failure] {
        self.base.failures()
    }

    fn last_evaluation(&self) -> Option<Instant> {
        self.base.last_evaluation()
    }

    fn evaluate(&mut self) {
        let minimum = self.minimum;
        let failure = self.base.failure("min_length", self.message());
        self.base
            .apply(failure, |value| value.chars().count() >= minimum);
    }
}

impl TargetRule for MinLength {
    type Target = String;

    fn target(&self) -> Option<&String> {
        self.base.target()
    }

    fn set_target(&mut self, target: String) {
        self.base.set_target(target);
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Fails when the string exceeds the configured maximum length.
#[derive(Debug, Clone)]
pub struct MaxLength {
    base: RuleBase<String>,
    maximum: usize,
}

impl MaxLength {
    pub fn new(group_name: impl Into<Cow<'static, str>>, maximum: usize) -> Self {
        Self {
            base: RuleBase::new(group_name, "{0} the characters length limit is {1}"),
            maximum,
        }
    }

    /// The maximum length allowed.
    #[must_use]
    pub fn maximum(&self) -> usize {
        self.maximum
    }

    /// Overrides the message template.
    #[must_use]
    pub fn with_message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.base.set_template(template);
        self
    }

    /// Overrides the severity stamped on failures.
    #[must_use]
    pub fn with_severity(mut self, severity: i32) -> Self {
        self.base.set_severity(severity);
        self
    }

    /// Pre-loads a target so a bare `evaluate` has something to check.
    #[must_use]
    pub fn with_target(mut self, target: String) -> Self {
        self.base.set_target(target);
        self
    }
}

impl Rule for MaxLength {
    fn group_name(&self) -> &str {
        self.base.group_name()
    }

    fn severity(&self) -> i32 {
        self.base.severity()
    }

    fn message(&self) -> String {
        self.base.render_with(&self.maximum)
    }

    fn failures(&self) -> &[Failure] {
        self.base.failures()
    }

    fn last_evaluation(&self) -> Option<Instant> {
        self.base.last_evaluation()
    }

    fn evaluate(&mut self) {
        let maximum = self.maximum;
        let failure = self.base.failure("max_length", self.message());
        self.base
            .apply(failure, |value| value.chars().count() <= maximum);
    }
}

impl TargetRule for MaxLength {
    type Target = String;

    fn target(&self) -> Option<&String> {
        self.base.target()
    }

    fn set_target(&mut self, target: String) {
        self.base.set_target(target);
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Fails when the string is empty.
///
/// A [`MustNot`] specialization with a fixed predicate.
#[derive(Debug)]
pub struct NotEmptyText {
    inner: MustNot<String>,
}

impl NotEmptyText {
    pub fn new(group_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: MustNot::from_parts(group_name, "{0} can not be empty", "not_empty", |value: &String| {
                value.is_empty()
            }),
        }
    }

    /// Overrides the message template.
    #[must_use]
    pub fn with_message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.inner = self.inner.with_message(template);
        self
    }

    /// Overrides the severity stamped on failures.
    #[must_use]
    pub fn with_severity(mut self, severity: i32) -> Self {
        self.inner = self.inner.with_severity(severity);
        self
    }

    /// Pre-loads a target so a bare `evaluate` has something to check.
    #[must_use]
    pub fn with_target(mut self, target: String) -> Self {
        self.inner = self.inner.with_target(target);
        self
    }
}

impl Rule for NotEmptyText {
    fn group_name(&self) -> &str {
        self.inner.group_name()
    }

    fn severity(&self) -> i32 {
        self.inner.severity()
    }

    fn message(&self) -> String {
        self.inner.message()
    }

    fn failures(&self) -> &[Failure] {
        self.inner.failures()
    }

    fn last_evaluation(&self) -> Option<Instant> {
        self.inner.last_evaluation()
    }

    fn evaluate(&mut self) {
        self.inner.evaluate();
    }
}

impl TargetRule for NotEmptyText {
    type Target = String;

    fn target(&self) -> Option<&String> {
        self.inner.target()
    }

    fn set_target(&mut self, target: String) {
        self.inner.set_target(target);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_length_boundary() {
        let mut rule = MinLength::new("name", 3);
        rule.evaluate_target("abc".to_string());
        assert!(rule.is_valid());

        rule.evaluate_target("ab".to_string());
        assert!(!rule.is_valid());
        assert_eq!(rule.failures()[0].code(), "min_length");
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let mut rule = MinLength::new("name", 5);
        // 5 chars, 6 bytes
        rule.evaluate_target("h\u{e9}llo".to_string());
        assert!(rule.is_valid());
    }

    #[test]
    fn min_length_message_reflects_parameters() {
        let rule = MinLength::new("name", 3);
        assert_eq!(rule.message(), "name requires at least 3 characters");
    }

    #[test]
    fn max_length_boundary() {
        let mut rule = MaxLength::new("name", 5);
        rule.evaluate_target("hello".to_string());
        assert!(rule.is_valid());

        rule.evaluate_target("hello!".to_string());
        assert!(!rule.is_valid());
        assert_eq!(
            rule.failures()[0].message(),
            "name the characters length limit is 5"
        );
    }

    #[test]
    fn not_empty_fails_only_on_empty() {
        let mut rule = NotEmptyText::new("comment");
        rule.evaluate_target(" ".to_string());
        assert!(rule.is_valid());

        rule.evaluate_target(String::new());
        assert!(!rule.is_valid());
        assert_eq!(rule.failures()[0].code(), "not_empty");
        assert_eq!(rule.failures()[0].message(), "comment can not be empty");
    }

    #[test]
    fn unset_target_is_a_noop() {
        let mut rule = MinLength::new("name", 3);
        rule.evaluate();
        assert!(rule.is_valid());
        assert!(rule.failures().is_empty());
    }
}
