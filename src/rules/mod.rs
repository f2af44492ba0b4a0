//! Built-in leaf rules
//!
//! Ready-to-use rules for common checks, grouped by category:
//!
//! - **Logical**: [`Must`], [`MustNot`]
//! - **Presence**: [`NullCheck`], [`Optional`]
//! - **String**: [`MinLength`], [`MaxLength`], [`NotEmptyText`],
//!   [`Pattern`], [`Email`]
//! - **Collection**: [`MinSize`], [`MaxSize`], [`NotEmptyList`]
//! - **URL**: [`AbsoluteUrl`], [`HostUrl`]
//!
//! Every rule carries a caller-assigned group name, a severity (default 1)
//! and a message template; `with_message` / `with_severity` override the
//! defaults. Custom rules can be written by embedding
//! [`RuleBase`](base::RuleBase) and implementing the two traits.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let mut username = MinLength::new("username", 3);
//! username.evaluate_target("al".to_string());
//! assert!(!username.is_valid());
//! ```

pub mod base;
pub mod length;
pub mod logical;
pub mod nullable;
pub mod optional;
pub mod pattern;
pub mod size;
pub mod url;

pub use base::RuleBase;
pub use length::{MaxLength, MinLength, NotEmptyText};
pub use logical::{Must, MustNot};
pub use nullable::NullCheck;
pub use optional::Optional;
pub use pattern::{Email, Pattern};
pub use size::{MaxSize, MinSize, NotEmptyList};
pub use url::{AbsoluteUrl, HostUrl};
