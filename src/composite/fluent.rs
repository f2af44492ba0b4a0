//! Fluent binding sugar
//!
//! Shortcut methods that instantiate a common rule and bind it in one call.
//! Everything here delegates to [`RuleSet::add`]; use `add` directly when a
//! rule needs a custom message, severity or target.

use std::any::Any;
use std::borrow::Cow;

use crate::composite::RuleSet;
use crate::rules::{
    AbsoluteUrl, Email, HostUrl, MaxLength, MaxSize, MinLength, MinSize, Must, MustNot,
    NotEmptyList, NotEmptyText, NullCheck, Pattern,
};

impl<T> RuleSet<T> {
    /// Binds a [`NullCheck`] that demands a present value.
    #[must_use]
    pub fn not_null<M, F>(self, group_name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        M: Clone + Any,
        F: Fn(&T) -> Option<M> + 'static,
    {
        self.add(NullCheck::new(group_name, false), accessor)
    }

    /// Binds a [`NullCheck`] that demands an absent value.
    #[must_use]
    pub fn null<M, F>(self, group_name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        M: Clone + Any,
        F: Fn(&T) -> Option<M> + 'static,
    {
        self.add(NullCheck::new(group_name, true), accessor)
    }

    /// Binds a [`Must`] over the accessed member.
    #[must_use]
    pub fn must<M, F, P>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        predicate: P,
    ) -> Self
    where
        M: Clone + Any,
        F: Fn(&T) -> M + 'static,
        P: Fn(&M) -> bool + 'static,
    {
        self.add(Must::new(group_name, predicate), accessor)
    }

    /// Binds a [`MustNot`] over the accessed member.
    #[must_use]
    pub fn must_not<M, F, P>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        predicate: P,
    ) -> Self
    where
        M: Clone + Any,
        F: Fn(&T) -> M + 'static,
        P: Fn(&M) -> bool + 'static,
    {
        self.add(MustNot::new(group_name, predicate), accessor)
    }

    /// Binds a [`MinLength`] over the accessed string.
    #[must_use]
    pub fn min_length<F>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        minimum: usize,
    ) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.add(MinLength::new(group_name, minimum), accessor)
    }

    /// Binds a [`MaxLength`] over the accessed string.
    #[must_use]
    pub fn max_length<F>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        maximum: usize,
    ) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.add(MaxLength::new(group_name, maximum), accessor)
    }

    /// Binds a [`NotEmptyText`] over the accessed string.
    #[must_use]
    pub fn not_empty_text<F>(self, group_name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.add(NotEmptyText::new(group_name), accessor)
    }

    /// Binds a [`NotEmptyList`] over the accessed collection.
    #[must_use]
    pub fn not_empty_list<M, F>(self, group_name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        M: Clone + Any,
        F: Fn(&T) -> Vec<M> + 'static,
    {
        self.add(NotEmptyList::new(group_name), accessor)
    }

    /// Binds a [`MinSize`] over the accessed collection.
    #[must_use]
    pub fn min_size<M, F>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        minimum: usize,
    ) -> Self
    where
        M: Clone + Any,
        F: Fn(&T) -> Vec<M> + 'static,
    {
        self.add(MinSize::new(group_name, minimum), accessor)
    }

    /// Binds a [`MaxSize`] over the accessed collection.
    #[must_use]
    pub fn max_size<M, F>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        maximum: usize,
    ) -> Self
    where
        M: Clone + Any,
        F: Fn(&T) -> Vec<M> + 'static,
    {
        self.add(MaxSize::new(group_name, maximum), accessor)
    }

    /// Binds a [`Pattern`] over the accessed string.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when the pattern does not
    /// compile.
    pub fn matching<F>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        pattern: &str,
    ) -> Result<Self, regex::Error>
    where
        F: Fn(&T) -> String + 'static,
    {
        Ok(self.add(Pattern::new(group_name, pattern)?, accessor))
    }

    /// Binds an [`Email`] over the accessed string.
    #[must_use]
    pub fn email<F>(self, group_name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.add(Email::new(group_name), accessor)
    }

    /// Binds an [`AbsoluteUrl`] over the accessed string.
    #[must_use]
    pub fn url<F>(self, group_name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.add(AbsoluteUrl::new(group_name), accessor)
    }

    /// Binds a [`HostUrl`] over the accessed string.
    #[must_use]
    pub fn host_url<F>(
        self,
        group_name: impl Into<Cow<'static, str>>,
        accessor: F,
        hosts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.add(HostUrl::new(group_name, hosts), accessor)
    }
}
