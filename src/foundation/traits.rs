//! Core traits for the rule system
//!
//! This module defines the two traits every rule implements: the object-safe
//! [`Rule`] (introspection plus in-place evaluation) and the typed
//! [`TargetRule`] (target ownership and replacement).

use std::time::Instant;

use crate::foundation::Failure;

// ============================================================================
// RULE TRAIT (object-safe)
// ============================================================================

/// The object-safe capability set shared by every rule.
///
/// A rule owns its current target and the failures produced by its most
/// recent evaluation. `evaluate` re-runs the rule against the stored
/// target; it never returns an error — a rule that does not pass records
/// [`Failure`]s instead.
///
/// Composites hold their children through `dyn Rule`, which is what makes
/// arbitrary nesting possible: a
/// [`RuleSet`](crate::composite::RuleSet) implements this same trait.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut rule = MinLength::new("username", 3);
/// rule.evaluate_target("al".to_string());
/// assert!(!rule.is_valid());
/// assert_eq!(rule.failures()[0].group_name(), "username");
/// ```
pub trait Rule {
    /// Caller-assigned label identifying this rule, stable for its
    /// lifetime. Used as the key for partial re-evaluation and carried on
    /// every failure.
    fn group_name(&self) -> &str;

    /// Severity stamped on failures. Opaque to the engine; defaults to 1.
    fn severity(&self) -> i32;

    /// The failure message, rendered from the rule's template and its
    /// current parameters. Computed on demand so it always reflects the
    /// rule's present configuration.
    fn message(&self) -> String;

    /// Failures from the most recent evaluation only. Replaced wholesale
    /// by every evaluation, never appended to.
    fn failures(&self) -> &[Failure];

    /// When the most recent evaluation ran, including sentinel no-ops.
    /// `None` until the rule has been evaluated at least once.
    fn last_evaluation(&self) -> Option<Instant>;

    /// Re-evaluates the stored target, replacing [`failures`](Rule::failures).
    ///
    /// With no target set this is a no-op that refreshes only the
    /// evaluation timestamp: prior failures stay exactly as they were.
    /// This is the depth-escape for partially populated parents — a
    /// composite whose member has never been supplied must not produce
    /// spurious failures.
    fn evaluate(&mut self);

    /// True when the most recent evaluation produced no failures.
    fn is_valid(&self) -> bool {
        self.failures().is_empty()
    }

    /// True when this rule prepends a roll-up failure of its own (a
    /// composite with a summary message). Aggregating parents then keep
    /// only the first failure from this rule, so the roll-up is not
    /// repeated at every nesting level.
    fn collapses_failures(&self) -> bool {
        false
    }
}

// ============================================================================
// TARGET RULE TRAIT (typed)
// ============================================================================

/// The typed half of the rule contract: target ownership and replacement.
///
/// "Re-check what I have" and "check this instead" are separate named
/// operations: [`Rule::evaluate`] re-runs the stored target,
/// [`TargetRule::evaluate_target`] replaces it first.
pub trait TargetRule: Rule {
    /// The type of value this rule checks.
    type Target;

    /// The stored target. `None` is the "nothing to validate yet" state,
    /// distinct from "validated and passed".
    fn target(&self) -> Option<&Self::Target>;

    /// Replaces the stored target wholesale without evaluating.
    fn set_target(&mut self, target: Self::Target);

    /// Replaces the stored target, then evaluates it.
    fn evaluate_target(&mut self, target: Self::Target) {
        self.set_target(target);
        self.evaluate();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal hand-rolled rule proving the traits are implementable
    // outside the crate's built-ins.
    struct AlwaysValid {
        evaluated: bool,
    }

    impl Rule for AlwaysValid {
        fn group_name(&self) -> &str {
            "always"
        }

        fn severity(&self) -> i32 {
            1
        }

        fn message(&self) -> String {
            "always is not valid".to_string()
        }

        fn failures(&self) -> &[Failure] {
            &[]
        }

        fn last_evaluation(&self) -> Option<Instant> {
            None
        }

        fn evaluate(&mut self) {
            self.evaluated = true;
        }
    }

    impl TargetRule for AlwaysValid {
        type Target = ();

        fn target(&self) -> Option<&()> {
            None
        }

        fn set_target(&mut self, _target: ()) {}
    }

    #[test]
    fn provided_is_valid_reads_failures() {
        let rule = AlwaysValid { evaluated: false };
        assert!(rule.is_valid());
    }

    #[test]
    fn provided_evaluate_target_delegates() {
        let mut rule = AlwaysValid { evaluated: false };
        rule.evaluate_target(());
        assert!(rule.evaluated);
    }

    #[test]
    fn leaf_rules_do_not_collapse() {
        let rule = AlwaysValid { evaluated: false };
        assert!(!rule.collapses_failures());
    }
}
