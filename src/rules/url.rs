//! URL rules
//!
//! [`AbsoluteUrl`] requires the string to parse as an absolute URL;
//! [`HostUrl`] additionally restricts the parsed host to an allowed set.

use std::borrow::Cow;
use std::time::Instant;

use crate::foundation::{Failure, Rule, TargetRule};
use crate::rules::base::RuleBase;

// ============================================================================
// ABSOLUTE URL
// ============================================================================

/// Fails when the string does not parse as an absolute URL.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut rule = AbsoluteUrl::new("homepage");
/// rule.evaluate_target("https://example.com/a".to_string());
/// assert!(rule.is_valid());
///
/// rule.evaluate_target("/relative/path".to_string());
/// assert!(!rule.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct AbsoluteUrl {
    base: RuleBase<String>,
}

impl AbsoluteUrl {
    pub fn new(group_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: RuleBase::new(group_name, "{0} - URL is not valid"),
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
    pub fn with_target(mut self, target: String) -> Self {
        self.base.set_target(target);
        self
    }
}

impl Rule for AbsoluteUrl {
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
        let failure = self.base.failure("url", self.base.render());
        self.base
            .apply(failure, |value| url::Url::parse(value).is_ok());
    }
}

impl TargetRule for AbsoluteUrl {
    type Target = String;

    fn target(&self) -> Option<&String> {
        self.base.target()
    }

    fn set_target(&mut self, target: String) {
        self.base.set_target(target);
    }
}

// ============================================================================
// HOST-RESTRICTED URL
// ============================================================================

/// Fails when the string is not an absolute URL or its host is not in the
/// allowed set.
#[derive(Debug, Clone)]
pub struct HostUrl {
    base: RuleBase<String>,
    hosts: Vec<String>,
}

impl HostUrl {
    /// Creates a rule allowing any of `hosts` (exact host comparison).
    pub fn new(
        group_name: impl Into<Cow<'static, str>>,
        hosts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            base: RuleBase::new(group_name, "{0} - URL is not valid"),
            hosts: hosts.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed hosts.
    #[must_use]
    pub fn hosts(&self) -> &[String] {
        &self.hosts
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

impl Rule for HostUrl {
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
        let failure = self.base.failure("host_url", self.base.render());
        let hosts = &self.hosts;
        self.base.apply(failure, |value| match url::Url::parse(value) {
            Ok(parsed) => parsed
                .host_str()
                .is_some_and(|host| hosts.iter().any(|allowed| allowed == host)),
            Err(_) => false,
        });
    }
}

impl TargetRule for HostUrl {
    type Target = String;

    fn target(&self) -> Option<&String> {
        self.base.target()
    }

    fn set_target(&mut self, target: String) {
        self.base.set_target(target);
    }
}

// ============================================================================
// TESTS
// ============================================================================
