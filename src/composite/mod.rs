//! The composition engine
//!
//! [`RuleSet`] binds child rules to members of a parent value and evaluates
//! them in binding order — all at once, one group at a time, or one group
//! against a candidate value. See the crate docs for the full contract.

mod fluent;
pub mod rule_set;

pub use rule_set::{RuleSet, SUMMARY_CODE};
