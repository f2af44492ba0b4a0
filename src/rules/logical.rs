//! Predicate rules
//!
//! [`Must`] passes when a caller-supplied predicate holds; [`MustNot`]
//! passes when it does not. Several other built-ins are specializations of
//! these two with a fixed predicate and message.

use std::borrow::Cow;
use std::fmt;
use std::time::Instant;

use crate::foundation::{Failure, Rule, TargetRule};
use crate::rules::base::RuleBase;

// ============================================================================
// MUST
// ============================================================================

/// Fails when the predicate does not hold for the target.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut adult = Must::new("age", |age: &i32| *age >= 18);
/// adult.evaluate_target(16);
/// assert!(!adult.is_valid());
/// ```
pub struct Must<M> {
    base: RuleBase<M>,
    predicate: Box<dyn Fn(&M) -> bool>,
    code: &'static str,
}

impl<M> Must<M> {
    /// Creates a rule that fails when `predicate` returns `false`.
    pub fn new(
        group_name: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        Self::from_parts(group_name, "{0} is not valid", "must", predicate)
    }

    pub(crate) fn from_parts(
        group_name: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
        code: &'static str,
        predicate: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        Self {
            base: RuleBase::new(group_name, template),
            predicate: Box::new(predicate),
            code,
        }
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
    pub fn with_target(mut self, target: M) -> Self {
        self.base.set_target(target);
        self
    }
}

impl<M> fmt::Debug for Must<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Must")
            .field("group_name", &self.base.group_name())
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<M> Rule for Must<M> {
    fn group_name(&self) -> &str {
        self.base.group_name()
    }

    fn severity(&self) -> i32 {
        self.base.severity()
    }

    fn message(&self) -> String {
        self.base.render()
    }

    fn failures(&self) -> &[Failure] {
        self.base.failures()
    }

    fn last_evaluation(&self) -> Option<Instant> {
        self.base.last_evaluation()
    }

    fn evaluate(&mut self) {
        let failure = self.base.failure(self.code, self.base.render());
        let predicate = &self.predicate;
        self.base.apply(failure, |value| predicate(value));
    }
}

impl<M> TargetRule for Must<M> {
    type Target = M;

    fn target(&self) -> Option<&M> {
        self.base.target()
    }

    fn set_target(&mut self, target: M) {
        self.base.set_target(target);
    }
}

// ============================================================================
// MUST NOT
// ============================================================================

/// Fails when the predicate holds for the target.
///
/// Wraps [`Must`] with the predicate negated at construction.
#[derive(Debug)]
pub struct MustNot<M> {
    inner: Must<M>,
}

impl<M> MustNot<M> {
    /// Creates a rule that fails when `predicate` returns `true`.
    pub fn new(
        group_name: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        Self::from_parts(group_name, "{0} is not valid", "must_not", predicate)
    }

    pub(crate) fn from_parts(
        group_name: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
        code: &'static str,
        predicate: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        Self {
            inner: Must::from_parts(group_name, template, code, move |value| !predicate(value)),
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
    pub fn with_target(mut self, target: M) -> Self {
        self.inner = self.inner.with_target(target);
        self
    }
}

impl<M> Rule for MustNot<M> {
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

impl<M> TargetRule for MustNot<M> {
    type Target = M;

    fn target(&self) -> Option<&M> {
        self.inner.target()
    }

    fn set_target(&mut self, target: M) {
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
    fn must_passes_when_predicate_holds() {
        let mut rule = Must::new("age", |age: &i32| *age >= 18);
        rule.evaluate_target(21);
        assert!(rule.is_valid());
        assert!(rule.failures().is_empty());
    }

    #[test]
    fn must_fails_when_predicate_does_not_hold() {
        let mut rule = Must::new("age", |age: &i32| *age >= 18);
        rule.evaluate_target(16);
        assert_eq!(rule.failures().len(), 1);

        let failure = &rule.failures()[0];
        assert_eq!(failure.code(), "must");
        assert_eq!(failure.group_name(), "age");
        assert_eq!(failure.message(), "age is not valid");
        assert_eq!(failure.severity(), 1);
    }

    #[test]
    fn must_without_target_is_a_noop() {
        let mut rule = Must::new("age", |age: &i32| *age >= 18);
        rule.evaluate();
        assert!(rule.is_valid());
        assert!(rule.last_evaluation().is_some());
    }

    #[test]
    fn must_not_inverts_the_predicate() {
        let mut rule = MustNot::new("name", |name: &String| name.contains(' '));
        rule.evaluate_target("ada lovelace".to_string());
        assert!(!rule.is_valid());
        assert_eq!(rule.failures()[0].code(), "must_not");

        rule.evaluate_target("ada".to_string());
        assert!(rule.is_valid());
    }

    #[test]
    fn builders_override_message_and_severity() {
        let mut rule = Must::new("age", |age: &i32| *age >= 18)
            .with_message("{0} must be an adult")
            .with_severity(3);
        rule.evaluate_target(2);
        let failure = &rule.failures()[0];
        assert_eq!(failure.message(), "age must be an adult");
        assert_eq!(failure.severity(), 3);
    }

    #[test]
    fn with_target_feeds_bare_evaluate() {
        let mut rule = Must::new("age", |age: &i32| *age >= 18).with_target(15);
        rule.evaluate();
        assert!(!rule.is_valid());
    }
}
