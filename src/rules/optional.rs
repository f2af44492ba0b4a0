//! Optional-member wrapper
//!
//! [`Optional`] adapts any rule over `M` into a rule over `Option<M>` that
//! passes when the value is absent. This is the member-level escape for
//! partially populated parents: constrain the value *if present*, and leave
//! presence itself to [`NullCheck`](crate::rules::NullCheck).

use std::time::Instant;

use smallvec::SmallVec;

use crate::foundation::{Failure, Rule, TargetRule};

/// Passes when the value is `None`; otherwise delegates to the inner rule.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut nickname = Optional::new(MinLength::new("nickname", 3));
///
/// nickname.evaluate_target(None);
/// assert!(nickname.is_valid());
///
/// nickname.evaluate_target(Some("ab".to_string()));
/// assert!(!nickname.is_valid());
/// ```
pub struct Optional<R: TargetRule> {
    inner: R,
    target: Option<Option<R::Target>>,
    failures: SmallVec<[Failure; 1]>,
    last_evaluation: Option<Instant>,
}

impl<R: TargetRule> Optional<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            target: None,
            failures: SmallVec::new(),
            last_evaluation: None,
        }
    }

    /// Returns a reference to the wrapped rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the wrapped rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> std::fmt::Debug for Optional<R>
where
    R: TargetRule + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optional")
            .field("inner", &self.inner)
            .field("failures", &self.failures)
            .finish()
    }
}

impl<R> Rule for Optional<R>
where
    R: TargetRule,
    R::Target: Clone,
{
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
        &self.failures
    }

    fn last_evaluation(&self) -> Option<Instant> {
        self.last_evaluation
    }

    fn evaluate(&mut self) {
        self.last_evaluation = Some(Instant::now());
        let Some(value) = self.target.clone() else {
            return;
        };
        match value {
            None => self.failures.clear(),
            Some(present) => {
                self.inner.evaluate_target(present);
                self.failures = self.inner.failures().iter().cloned().collect();
            }
        }
    }

    fn collapses_failures(&self) -> bool {
        self.inner.collapses_failures()
    }
}

impl<R> TargetRule for Optional<R>
where
    R: TargetRule,
    R::Target: Clone,
{
    type Target = Option<R::Target>;

    fn target(&self) -> Option<&Option<R::Target>> {
        self.target.as_ref()
    }

    fn set_target(&mut self, target: Option<R::Target>) {
        self.target = Some(target);
    }
}
