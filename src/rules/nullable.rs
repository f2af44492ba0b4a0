//! Presence checks for optional members
//!
//! [`NullCheck`] validates an `Option<M>` value: configured with
//! `accept_null = false` it fails on `None`, with `accept_null = true` it
//! fails on `Some`. The rule's own unset state (no target supplied yet) is
//! distinct from an explicit `None` target — only the latter is checked.

use std::borrow::Cow;
use std::time::Instant;

use crate::foundation::{Failure, Rule, TargetRule};
use crate::rules::base::RuleBase;

/// Fails when presence of the value disagrees with `accept_null`.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut required = NullCheck::<String>::new("email", false);
///
/// // Never evaluated against a value: nothing to report yet.
/// required.evaluate();
/// assert!(required.is_valid());
///
/// // An explicit absent value fails.
/// required.evaluate_target(None);
/// assert!(!required.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct NullCheck<M> {
    base: RuleBase<Option<M>>,
    accept_null: bool,
}

impl<M> NullCheck<M> {
    /// Creates a presence check. `accept_null = false` demands a value,
    /// `accept_null = true` forbids one.
    pub fn new(group_name: impl Into<Cow<'static, str>>, accept_null: bool) -> Self {
        let template = if accept_null {
            "{0} must be null"
        } else {
            "{0} must not be null"
        };
        Self {
            base: RuleBase::new(group_name, template),
            accept_null,
        }
    }

    /// Whether this check demands absence rather than presence.
    #[must_use]
    pub fn accepts_null(&self) -> bool {
        self.accept_null
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
    pub fn with_target(mut self, target: Option<M>) -> Self {
        self.base.set_target(target);
        self
    }
}

impl<M> Rule for NullCheck<M> {
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
        let accept_null = self.accept_null;
        let failure = self.base.failure("null_check", self.base.render());
        self.base.apply(failure, |value| {
            if accept_null {
                value.is_none()
            } else {
                value.is_some()
            }
        });
    }
}

impl<M> TargetRule for NullCheck<M> {
    type Target = Option<M>;

    fn target(&self) -> Option<&Option<M>> {
        self.base.target()
    }

    fn set_target(&mut self, target: Option<M>) {
        self.base.set_target(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejecting_null_fails_on_none() {
        let mut rule = NullCheck::<String>::new("email", false);
        rule.evaluate_target(None);
        assert_eq!(rule.failures().len(), 1);
        assert_eq!(rule.failures()[0].code(), "null_check");
        assert_eq!(rule.failures()[0].message(), "email must not be null");
    }

    #[test]
    fn rejecting_null_passes_on_some() {
        let mut rule = NullCheck::<String>::new("email", false);
        rule.evaluate_target(Some("a@b.c".to_string()));
        assert!(rule.is_valid());
    }

    #[test]
    fn accepting_null_fails_on_some() {
        let mut rule = NullCheck::<i32>::new("deleted_at", true);
        rule.evaluate_target(Some(7));
        assert!(!rule.is_valid());
        assert_eq!(rule.failures()[0].message(), "deleted_at must be null");
    }

    #[test]
    fn accepting_null_passes_on_none() {
        let mut rule = NullCheck::<i32>::new("deleted_at", true);
        rule.evaluate_target(None);
        assert!(rule.is_valid());
    }

    #[test]
    fn unset_target_is_distinct_from_explicit_none() {
        // Never supplied a value: the no-op sentinel, stays valid.
        let mut unset = NullCheck::<String>::new("email", false);
        unset.evaluate();
        assert!(unset.is_valid());

        // Explicitly absent: checked and failed.
        let mut absent = NullCheck::<String>::new("email", false);
        absent.evaluate_target(None);
        assert!(!absent.is_valid());
    }
}
