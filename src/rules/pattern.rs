//! Pattern rules
//!
//! [`Pattern`] matches against an arbitrary regular expression; [`Email`]
//! wraps it with a fixed email-shape pattern compiled once per process.

use std::borrow::Cow;
use std::sync::LazyLock;
use std::time::Instant;

use crate::foundation::{Failure, Rule, TargetRule};
use crate::rules::base::RuleBase;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// PATTERN
// ============================================================================

/// Fails when the string does not match the regular expression.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut phone = Pattern::new("phone", r"^[0-9\-\+]{9,15}$")?;
/// phone.evaluate_target("+5501234567".to_string());
/// assert!(phone.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    base: RuleBase<String>,
    pattern: regex::Regex,
    code: &'static str,
}

impl Pattern {
    /// Compiles `pattern` and creates the rule.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when the pattern does not
    /// compile.
    pub fn new(
        group_name: impl Into<Cow<'static, str>>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(
            group_name,
            regex::Regex::new(pattern)?,
            "{0} is not valid",
            "pattern",
        ))
    }

    pub(crate) fn from_regex(
        group_name: impl Into<Cow<'static, str>>,
        pattern: regex::Regex,
        template: impl Into<Cow<'static, str>>,
        code: &'static str,
    ) -> Self {
        Self {
            base: RuleBase::new(group_name, template),
            pattern,
            code,
        }
    }

    /// The source text of the pattern being matched.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
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

impl Rule for Pattern {
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
        let pattern = &self.pattern;
        self.base.apply(failure, |value| pattern.is_match(value));
    }
}

impl TargetRule for Pattern {
    type Target = String;

    fn target(&self) -> Option<&String> {
        self.base.target()
    }

    fn set_target(&mut self, target: String) {
        self.base.set_target(target);
    }
}

// ============================================================================
// EMAIL
// ============================================================================

/// Fails when the string does not look like an email address.
///
/// A [`Pattern`] with a fixed email-shape regular expression.
#[derive(Debug, Clone)]
pub struct Email {
    inner: Pattern,
}

impl Email {
    pub fn new(group_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: Pattern::from_regex(
                group_name,
                EMAIL_REGEX.clone(),
                "{0} is not a valid email address",
                "email",
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
    pub fn with_target(mut self, target: String) -> Self {
        self.inner = self.inner.with_target(target);
        self
    }
}

impl Rule for Email {
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

impl TargetRule for Email {
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
    fn pattern_matches() {
        let mut rule = Pattern::new("phone", r"^[0-9\-\+]{9,15}$").unwrap();
        rule.evaluate_target("+5501234567".to_string());
        assert!(rule.is_valid());

        rule.evaluate_target("ABC994847".to_string());
        assert!(!rule.is_valid());
        assert_eq!(rule.failures()[0].code(), "pattern");
        assert_eq!(rule.failures()[0].message(), "phone is not valid");
    }

    #[test]
    fn pattern_rejects_bad_expression() {
        assert!(Pattern::new("phone", "(unclosed").is_err());
    }

    #[test]
    fn email_accepts_plausible_addresses() {
        let mut rule = Email::new("email");
        rule.evaluate_target("user@example.com".to_string());
        assert!(rule.is_valid());

        rule.evaluate_target("hugo@testemail.com.br".to_string());
        assert!(rule.is_valid());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        let mut rule = Email::new("email");
        for candidate in ["invalid", "@example.com", "user@", "test#gmail.com"] {
            rule.evaluate_target(candidate.to_string());
            assert!(!rule.is_valid(), "accepted {candidate:?}");
            assert_eq!(rule.failures()[0].code(), "email");
        }
    }

    #[test]
    fn email_message_uses_group_name() {
        let rule = Email::new("contact");
        assert_eq!(rule.message(), "contact is not a valid email address");
    }
}
