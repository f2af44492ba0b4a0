//! Collection size rules

use std::borrow::Cow;
use std::time::Instant;

use crate::foundation::{Failure, Rule, TargetRule};
use crate::rules::base::RuleBase;
use crate::rules::logical::MustNot;

// ============================================================================
// MIN SIZE
// ============================================================================

/// Fails when the collection has fewer elements than the configured minimum.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut rule = MinSize::new("players", 11);
/// rule.evaluate_target(vec!["gk".to_string()]);
/// assert!(!rule.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct MinSize<M> {
    base: RuleBase<Vec<M>>,
    minimum: usize,
}

impl<M> MinSize<M> {
    pub fn new(group_name: impl Into<Cow<'static, str>>, minimum: usize) -> Self {
        Self {
            base: RuleBase::new(group_name, "{0} must have at least {1} items"),
            minimum,
        }
    }

    /// The minimum element count required.
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
    pub fn with_target(mut self, target: Vec<M>) -> Self {
        self.base.set_target(target);
        self
    }
}

impl<M> Rule for MinSize<M> {
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
        let failure = self.base.failure("min_size", self.message());
        self.base.apply(failure, |value| value.len() >= minimum);
    }
}

impl<M> TargetRule for MinSize<M> {
    type Target = Vec<M>;

    fn target(&self) -> Option<&Vec<M>> {
        self.base.target()
    }

    fn set_target(&mut self, target: Vec<M>) {
        self.base.set_target(target);
    }
}

// ============================================================================
// MAX SIZE
// ============================================================================

/// Fails when the collection has more elements than the configured maximum.
#[derive(Debug, Clone)]
pub struct MaxSize<M> {
    base: RuleBase<Vec<M>>,
    maximum: usize,
}

impl<M> MaxSize<M> {
    pub fn new(group_name: impl Into<Cow<'static, str>>, maximum: usize) -> Self {
        Self {
            base: RuleBase::new(group_name, "{0} can not have more than {1} items"),
            maximum,
        }
    }

    /// The maximum element count allowed.
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
    pub fn with_target(mut self, target: Vec<M>) -> Self {
        self.base.set_target(target);
        self
    }
}

impl<M> Rule for MaxSize<M> {
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
        let failure = self.base.failure("max_size", self.message());
        self.base.apply(failure, |value| value.len() <= maximum);
    }
}

impl<M> TargetRule for MaxSize<M> {
    type Target = Vec<M>;

    fn target(&self) -> Option<&Vec<M>> {
        self.base.target()
    }

    fn set_target(&mut self, target: Vec<M>) {
        self.base.set_target(target);
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Fails when the collection is empty.
///
/// A [`MustNot`] specialization with a fixed predicate.
#[derive(Debug)]
pub struct NotEmptyList<M> {
    inner: MustNot<Vec<M>>,
}

impl<M: 'static> NotEmptyList<M> {
    pub fn new(group_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: MustNot::from_parts(
                group_name,
                "{0} can not be empty",
                "not_empty",
                |value: &Vec<M>| value.is_empty(),
            ),
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
    pub fn with_target(mut self, target: Vec<M>) -> Self {
        self.inner = self.inner.with_target(target);
        self
    }
}

impl<M> Rule for NotEmptyList<M> {
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

impl<M> TargetRule for NotEmptyList<M> {
    type Target = Vec<M>;

    fn target(&self) -> Option<&Vec<M>> {
        self.inner.target()
    }

    fn set_target(&mut self, target: Vec<M>) {
        self.inner.set_target(target);
    }
}

// ============================================================================
// TESTS
// ============================================================================
