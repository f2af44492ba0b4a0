//! The composition and partial-re-evaluation engine
//!
//! A [`RuleSet`] owns an ordered list of bindings — child rule, member
//! accessor, evaluation options — for one parent type, evaluates them in
//! binding order, and aggregates the resulting
//! [`Failure`](crate::foundation::Failure)s. It implements
//! [`Rule`](crate::foundation::Rule) itself, so rule sets nest to any depth.

use std::any::Any;
use std::borrow::Cow;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use crate::foundation::{Failure, Rule, RuleSetError, TargetRule};

/// Failure code of the synthetic roll-up failure a summary message produces.
pub const SUMMARY_CODE: &str = "summary";

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

// ============================================================================
// BINDINGS
// ============================================================================

/// Result of running one binding: the failures it contributed (already
/// collapsed when the child rolls its own failures up) and whether the
/// child ended up valid.
struct BindingRun {
    failures: Vec<Failure>,
    valid: bool,
}

fn collect_from<R: Rule + ?Sized>(child: &R, collapse: bool) -> BindingRun {
    let failures = if collapse {
        child.failures().first().cloned().into_iter().collect()
    } else {
        child.failures().to_vec()
    };
    BindingRun {
        failures,
        valid: child.is_valid(),
    }
}

/// One (rule, accessor, options) entry. The member type is erased here:
/// each closure closes over its own accessor and typed handle to the child.
struct Binding<T> {
    rule: Rc<RefCell<dyn Rule>>,
    group_name: String,
    run: Box<dyn Fn(&T) -> BindingRun>,
    run_value: Box<dyn Fn(&dyn Any) -> Option<BindingRun>>,
    stop_if_invalid: bool,
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered, re-evaluable set of rules bound to members of a parent value.
///
/// Binding insertion order is the evaluation order, and the order failures
/// are reported in. Child rules are held behind shared handles
/// (`Rc<RefCell<_>>`): [`add_shared`](RuleSet::add_shared) lets the caller
/// keep the same handle the set evaluates through, which is how tests spy
/// on child invocations. The shared handles also make the set
/// single-threaded by construction — callers needing cross-thread
/// validation build one set per thread.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// let mut rules = RuleSet::<Person>::new()
///     .min_length("name", |p| p.name.clone(), 3)
///     .must("age", |p| p.age, |age| *age >= 18);
///
/// rules.evaluate_target(Person { name: "Al".into(), age: 16 });
/// assert_eq!(rules.failures().len(), 2);
/// ```
pub struct RuleSet<T> {
    group_name: Cow<'static, str>,
    summary_message: Option<Cow<'static, str>>,
    severity: i32,
    target: Option<T>,
    failures: Vec<Failure>,
    last_evaluation: Option<Instant>,
    bindings: Vec<Binding<T>>,
}

impl<T> RuleSet<T> {
    /// Creates an empty rule set named after the parent type, with no
    /// summary message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            group_name: Cow::Borrowed(short_type_name::<T>()),
            summary_message: None,
            severity: 1,
            target: None,
            failures: Vec::new(),
            last_evaluation: None,
            bindings: Vec::new(),
        }
    }

    /// Creates an empty rule set with a summary message: whenever an
    /// evaluation leaves any failures, a synthetic failure carrying this
    /// message is inserted at the top of the list.
    #[must_use]
    pub fn with_summary(summary_message: impl Into<Cow<'static, str>>) -> Self {
        let mut set = Self::new();
        set.summary_message = Some(summary_message.into());
        set
    }

    /// Overrides the group name (defaults to the parent type's short name).
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<Cow<'static, str>>) -> Self {
        self.group_name = group_name.into();
        self
    }

    /// Overrides the severity stamped on the summary failure.
    #[must_use]
    pub fn with_severity(mut self, severity: i32) -> Self {
        self.severity = severity;
        self
    }

    /// Pre-loads a target so a bare `evaluate` has something to check.
    #[must_use]
    pub fn with_target(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    /// The summary message, when one was configured and is non-empty.
    #[must_use]
    pub fn summary_message(&self) -> Option<&str> {
        self.summary_message.as_deref().filter(|m| !m.is_empty())
    }

    /// True when a non-empty summary message was configured.
    #[must_use]
    pub fn has_summary_message(&self) -> bool {
        self.summary_message().is_some()
    }

    /// The bound child rules, in binding order.
    ///
    /// Each item borrows the child through its shared handle for the
    /// duration of the iteration step; don't hold one across an `evaluate`.
    pub fn children(&self) -> impl Iterator<Item = Ref<'_, dyn Rule>> + '_ {
        self.bindings.iter().map(|binding| binding.rule.borrow())
    }

    // ------------------------------------------------------------------------
    // Binding construction
    // ------------------------------------------------------------------------

    /// Binds `rule` to the member extracted by `accessor`.
    ///
    /// The member is re-read through the accessor on every evaluation.
    /// Duplicate group names across bindings are allowed; grouped
    /// evaluation re-runs every binding under the name.
    #[must_use]
    pub fn add<R, M, F>(self, rule: R, accessor: F) -> Self
    where
        R: TargetRule<Target = M> + 'static,
        M: Clone + 'static,
        F: Fn(&T) -> M + 'static,
    {
        self.add_shared(Rc::new(RefCell::new(rule)), accessor)
    }

    /// Binds an already-shared rule handle, leaving the caller an alias to
    /// the same child the set evaluates through.
    #[must_use]
    pub fn add_shared<R, M, F>(mut self, rule: Rc<RefCell<R>>, accessor: F) -> Self
    where
        R: TargetRule<Target = M> + 'static,
        M: Clone + 'static,
        F: Fn(&T) -> M + 'static,
    {
        let group_name = rule.borrow().group_name().to_owned();
        let collapse = rule.borrow().collapses_failures();

        let run_rule = Rc::clone(&rule);
        let run = Box::new(move |target: &T| {
            let mut child = run_rule.borrow_mut();
            child.evaluate_target(accessor(target));
            collect_from(&*child, collapse)
        });

        let value_rule = Rc::clone(&rule);
        let run_value = Box::new(move |value: &dyn Any| {
            let value = value.downcast_ref::<M>()?.clone();
            let mut child = value_rule.borrow_mut();
            child.evaluate_target(value);
            Some(collect_from(&*child, collapse))
        });

        let handle: Rc<RefCell<dyn Rule>> = rule;
        self.bindings.push(Binding {
            rule: handle,
            group_name,
            run,
            run_value,
            stop_if_invalid: false,
        });
        self
    }

    /// Binds `rule` to be re-evaluated against every element of the
    /// sequence extracted by `accessor`, in sequence order.
    ///
    /// Aggregated failures are the authoritative outcome of a for-each
    /// binding; the child rule's own target and failures afterwards reflect
    /// only the last element processed.
    #[must_use]
    pub fn add_for_each<R, M, F>(self, rule: R, accessor: F) -> Self
    where
        R: TargetRule<Target = M> + 'static,
        M: Clone + 'static,
        F: Fn(&T) -> Vec<M> + 'static,
    {
        self.add_for_each_shared(Rc::new(RefCell::new(rule)), accessor)
    }

    /// [`add_for_each`](RuleSet::add_for_each) with an already-shared
    /// handle.
    #[must_use]
    pub fn add_for_each_shared<R, M, F>(mut self, rule: Rc<RefCell<R>>, accessor: F) -> Self
    where
        R: TargetRule<Target = M> + 'static,
        M: Clone + 'static,
        F: Fn(&T) -> Vec<M> + 'static,
    {
        let group_name = rule.borrow().group_name().to_owned();
        let collapse = rule.borrow().collapses_failures();

        let run_rule = Rc::clone(&rule);
        let run = Box::new(move |target: &T| {
            let mut failures = Vec::new();
            let mut valid = true;
            for element in accessor(target) {
                let mut child = run_rule.borrow_mut();
                child.evaluate_target(element);
                let outcome = collect_from(&*child, collapse);
                valid &= outcome.valid;
                failures.extend(outcome.failures);
            }
            BindingRun { failures, valid }
        });

        // A directly supplied candidate value stands in for one element.
        let value_rule = Rc::clone(&rule);
        let run_value = Box::new(move |value: &dyn Any| {
            let value = value.downcast_ref::<M>()?.clone();
            let mut child = value_rule.borrow_mut();
            child.evaluate_target(value);
            Some(collect_from(&*child, collapse))
        });

        let handle: Rc<RefCell<dyn Rule>> = rule;
        self.bindings.push(Binding {
            rule: handle,
            group_name,
            run,
            run_value,
            stop_if_invalid: false,
        });
        self
    }

    /// Marks the most recently added binding stop-if-invalid: when its
    /// child ends up invalid, the evaluation pass stops after collecting
    /// that child's failures, and later bindings are not run.
    #[must_use]
    pub fn fail_fast(mut self) -> Self {
        if let Some(binding) = self.bindings.last_mut() {
            binding.stop_if_invalid = true;
        }
        self
    }

    // ------------------------------------------------------------------------
    // Grouped evaluation
    // ------------------------------------------------------------------------

    /// Re-runs only the bindings under `group_name`, reading members
    /// through their accessors against the current target. Fresh results
    /// replace that group's failures; other groups keep theirs.
    ///
    /// With no target set, the group check still happens but no binding
    /// runs (prior failures stay untouched).
    ///
    /// # Errors
    ///
    /// [`RuleSetError::GroupNotFound`] when no binding carries the group
    /// name — never a silent no-op.
    pub fn evaluate_group(&mut self, group_name: &str) -> Result<&mut Self, RuleSetError> {
        self.run_group(group_name)?;
        Ok(self)
    }

    /// Replaces the target, then re-runs the bindings under `group_name`.
    ///
    /// # Errors
    ///
    /// [`RuleSetError::GroupNotFound`] when no binding carries the group
    /// name. The new target is already in place when that happens.
    pub fn evaluate_target_group(
        &mut self,
        target: T,
        group_name: &str,
    ) -> Result<&mut Self, RuleSetError> {
        self.target = Some(target);
        self.evaluate_group(group_name)
    }

    /// Re-runs the bindings under `group_name` against `value` directly,
    /// bypassing the accessors — validating a candidate value for one
    /// field without a mutated parent instance. Works with no target set.
    ///
    /// Bindings under the group whose member type is not `M` are skipped.
    ///
    /// # Errors
    ///
    /// [`RuleSetError::GroupNotFound`] when no binding carries the group
    /// name; [`RuleSetError::ValueTypeMismatch`] when none of the group's
    /// bindings accepts a value of type `M`.
    pub fn evaluate_group_value<M: Any>(
        &mut self,
        group_name: &str,
        value: M,
    ) -> Result<&mut Self, RuleSetError> {
        self.run_group_value(group_name, &value)?;
        Ok(self)
    }

    fn ensure_group(&self, group_name: &str) -> Result<(), RuleSetError> {
        if self
            .bindings
            .iter()
            .any(|binding| binding.group_name == group_name)
        {
            Ok(())
        } else {
            Err(RuleSetError::GroupNotFound {
                group: group_name.to_owned(),
            })
        }
    }

    fn run_group(&mut self, group_name: &str) -> Result<(), RuleSetError> {
        self.ensure_group(group_name)?;
        self.last_evaluation = Some(Instant::now());
        let Some(target) = &self.target else {
            return Ok(());
        };

        let mut fresh = Vec::new();
        for binding in self
            .bindings
            .iter()
            .filter(|binding| binding.group_name == group_name)
        {
            let outcome = (binding.run)(target);
            let stop = !outcome.valid && binding.stop_if_invalid;
            fresh.extend(outcome.failures);
            if stop {
                break;
            }
        }

        self.merge_group(group_name, fresh);
        Ok(())
    }

    fn run_group_value(&mut self, group_name: &str, value: &dyn Any) -> Result<(), RuleSetError> {
        self.ensure_group(group_name)?;
        self.last_evaluation = Some(Instant::now());

        let mut fresh = Vec::new();
        let mut accepted = false;
        for binding in self
            .bindings
            .iter()
            .filter(|binding| binding.group_name == group_name)
        {
            let Some(outcome) = (binding.run_value)(value) else {
                continue;
            };
            accepted = true;
            let stop = !outcome.valid && binding.stop_if_invalid;
            fresh.extend(outcome.failures);
            if stop {
                break;
            }
        }

        if !accepted {
            return Err(RuleSetError::ValueTypeMismatch {
                group: group_name.to_owned(),
            });
        }

        self.merge_group(group_name, fresh);
        Ok(())
    }

    /// Replaces one group's failures in the retained list, then re-derives
    /// the summary failure: removed first, re-inserted at position 0 iff
    /// the merged list is non-empty.
    fn merge_group(&mut self, group_name: &str, fresh: Vec<Failure>) {
        let mut failures = std::mem::take(&mut self.failures);
        if failures
            .first()
            .is_some_and(|f| f.code() == SUMMARY_CODE && f.group_name() == self.group_name)
        {
            failures.remove(0);
        }
        failures.retain(|failure| failure.group_name() != group_name);
        failures.extend(fresh);
        self.failures = self.attach_summary(failures);
    }

    fn attach_summary(&self, mut failures: Vec<Failure>) -> Vec<Failure> {
        if !failures.is_empty() {
            if let Some(message) = self.summary_message() {
                failures.insert(
                    0,
                    Failure::new(
                        SUMMARY_CODE,
                        self.group_name.clone(),
                        message.to_owned(),
                        self.severity,
                    ),
                );
            }
        }
        failures
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("group_name", &self.group_name)
            .field("summary_message", &self.summary_message)
            .field("target", &self.target)
            .field("failures", &self.failures)
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

// ============================================================================
// RULE IMPLEMENTATION (a rule set is itself a rule)
// ============================================================================

impl<T> Rule for RuleSet<T> {
    fn group_name(&self) -> &str {
        &self.group_name
    }

    fn severity(&self) -> i32 {
        self.severity
    }

    fn message(&self) -> String {
        self.summary_message().unwrap_or_default().to_owned()
    }

    fn failures(&self) -> &[Failure] {
        &self.failures
    }

    fn last_evaluation(&self) -> Option<Instant> {
        self.last_evaluation
    }

    /// Full pass: bindings run in insertion order; each child's failures
    /// are collected (only the first when the child rolls its own failures
    /// up); the first stop-if-invalid binding whose child is invalid ends
    /// the pass after its failures are collected.
    fn evaluate(&mut self) {
        self.last_evaluation = Some(Instant::now());
        let Some(target) = &self.target else {
            return;
        };

        let mut collected = Vec::new();
        for binding in &self.bindings {
            let outcome = (binding.run)(target);
            let stop = !outcome.valid && binding.stop_if_invalid;
            collected.extend(outcome.failures);
            if stop {
                break;
            }
        }

        self.failures = self.attach_summary(collected);
    }

    fn collapses_failures(&self) -> bool {
        self.has_summary_message()
    }
}

impl<T> TargetRule for RuleSet<T> {
    type Target = T;

    fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    fn set_target(&mut self, target: T) {
        self.target = Some(target);
    }
}

// ============================================================================
// TESTS
// ============================================================================
