//! Shared leaf-rule state
//!
//! Every built-in leaf rule is a thin predicate over a [`RuleBase`]: the
//! base owns the group name, message template, severity, current target,
//! retained failures and evaluation timestamp, and enforces the evaluation
//! contract (sentinel no-op, wholesale failure replacement). Leaf rules
//! compose it rather than inherit from it.

use std::borrow::Cow;
use std::fmt::Display;
use std::time::Instant;

use smallvec::SmallVec;

use crate::foundation::{render_template, Failure};

/// Common state for leaf rules over a target of type `M`.
///
/// Custom rules outside this crate can embed a `RuleBase` and delegate the
/// [`Rule`](crate::foundation::Rule) accessors to it; only the predicate
/// and the message parameter differ per rule.
#[derive(Debug, Clone)]
pub struct RuleBase<M> {
    group_name: Cow<'static, str>,
    template: Cow<'static, str>,
    severity: i32,
    target: Option<M>,
    failures: SmallVec<[Failure; 1]>,
    last_evaluation: Option<Instant>,
}

impl<M> RuleBase<M> {
    /// Creates base state with severity 1 and no target.
    pub fn new(
        group_name: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            template: template.into(),
            severity: 1,
            target: None,
            failures: SmallVec::new(),
            last_evaluation: None,
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn severity(&self) -> i32 {
        self.severity
    }

    pub fn set_severity(&mut self, severity: i32) {
        self.severity = severity;
    }

    /// The message template, with `{0}`/`{1}` slots still in place.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn set_template(&mut self, template: impl Into<Cow<'static, str>>) {
        self.template = template.into();
    }

    pub fn target(&self) -> Option<&M> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, target: M) {
        self.target = Some(target);
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn last_evaluation(&self) -> Option<Instant> {
        self.last_evaluation
    }

    /// Renders the template with the group name only.
    pub fn render(&self) -> String {
        render_template(&self.template, &self.group_name, None)
    }

    /// Renders the template with the group name and a rule parameter.
    pub fn render_with(&self, param: &dyn Display) -> String {
        render_template(&self.template, &self.group_name, Some(param))
    }

    /// Builds a failure snapshot carrying this base's group and severity.
    pub fn failure(&self, code: &'static str, message: String) -> Failure {
        Failure::new(code, self.group_name.clone(), message, self.severity)
    }

    /// The evaluation skeleton shared by every leaf rule.
    ///
    /// Refreshes the timestamp; with no target set, stops there (prior
    /// failures stay untouched). Otherwise runs `check` against the target
    /// and replaces the failure list wholesale: empty on pass, exactly
    /// `failure` on fail.
    pub fn apply(&mut self, failure: Failure, check: impl FnOnce(&M) -> bool) {
        self.last_evaluation = Some(Instant::now());
        let Some(target) = &self.target else {
            return;
        };
        let passed = check(target);
        self.failures.clear();
        if !passed {
            self.failures.push(failure);
        }
    }
}
