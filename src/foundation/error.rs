//! Structural-misuse errors
//!
//! Failed checks are never errors — they are [`Failure`](crate::foundation::Failure)
//! values. The `Result`-level errors here mean the *caller* asked the
//! engine something it cannot answer: a grouped evaluation against a group
//! name nothing is bound under, or a candidate value whose type matches no
//! binding in the group. Both indicate a caller/binding mismatch and are
//! never silently converted into "no failures".

/// Errors raised by grouped evaluation on a
/// [`RuleSet`](crate::composite::RuleSet).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSetError {
    /// No binding's child rule carries the requested group name.
    #[error("no rules are bound under group name `{group}`")]
    GroupNotFound {
        /// The group name the caller asked for.
        group: String,
    },

    /// The group exists, but the candidate value's type matches none of the
    /// member types bound under it.
    #[error("value type does not match any rule bound under group name `{group}`")]
    ValueTypeMismatch {
        /// The group name the caller asked for.
        group: String,
    },
}
