//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//! ```

pub use crate::composite::{RuleSet, SUMMARY_CODE};
pub use crate::foundation::{render_template, Failure, Rule, RuleSetError, TargetRule};
pub use crate::rules::{
    AbsoluteUrl, Email, HostUrl, MaxLength, MaxSize, MinLength, MinSize, Must, MustNot,
    NotEmptyList, NotEmptyText, NullCheck, Optional, Pattern, RuleBase,
};
