//! Core types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Traits**: [`Rule`], [`TargetRule`]
//! - **Failures**: [`Failure`] — the value-level outcome of a failed check
//! - **Errors**: [`RuleSetError`] — structural misuse, never a failed check
//! - **Messages**: the `{0}`/`{1}` positional template contract
//!
//! # Architecture
//!
//! A rule owns its current target and the failures from its most recent
//! evaluation. Evaluating never returns an error: a rule that does not pass
//! records [`Failure`]s, and `Result` is reserved for structural misuse
//! (asking a composite to re-evaluate a group name nothing is bound under).
//!
//! [`Rule`] is object-safe so composites can hold heterogeneous children;
//! [`TargetRule`] adds the typed target with `set_target` /
//! `evaluate_target` as named operations.

pub mod error;
pub mod failure;
pub mod message;
pub mod traits;

pub use error::RuleSetError;
pub use failure::Failure;
pub use message::render_template;
pub use traits::{Rule, TargetRule};
