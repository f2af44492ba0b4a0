//! # fieldcheck
//!
//! Composable per-field rule sets with incremental re-validation.
//!
//! A [`RuleSet`](composite::RuleSet) binds small, reusable rules to members
//! of a parent value and evaluates them in binding order, aggregating
//! [`Failure`](foundation::Failure)s tagged with a group name (typically a
//! field name) and a severity.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! struct Signup {
//!     username: String,
//!     email: String,
//! }
//!
//! let mut rules = RuleSet::<Signup>::new()
//!     .min_length("username", |s| s.username.clone(), 3)
//!     .max_length("username", |s| s.username.clone(), 20)
//!     .email("email", |s| s.email.clone());
//!
//! rules.evaluate_target(Signup {
//!     username: "al".into(),
//!     email: "al@example.com".into(),
//! });
//! assert!(!rules.is_valid());
//! assert_eq!(rules.failures()[0].group_name(), "username");
//! ```
//!
//! ## Incremental re-validation
//!
//! A single field can be re-checked without re-running the whole set —
//! either from the stored target or against a candidate value:
//!
//! ```rust,ignore
//! rules.evaluate_group("username")?;                  // re-read via accessor
//! rules.evaluate_group_value("username", "alice".to_string())?; // candidate
//! ```
//!
//! ## Nesting
//!
//! A `RuleSet` is itself a [`Rule`](foundation::Rule), so one set can be
//! bound as a member rule of another — including element-wise over a
//! collection via [`add_for_each`](composite::RuleSet::add_for_each).

pub mod composite;
pub mod foundation;
pub mod prelude;
pub mod rules;
