//! Index kinds used by the list.
//!
//! A [`RawIndex`] is a position in the adapter's underlying collection. A
//! [`FilteredIndex`] is a position in whatever the list currently shows: the
//! filtered view when a filter is active, the collection itself otherwise.
//! The two never convert implicitly; go through
//! [`SimpleAdapter::filtered_index_at`](crate::list::simple::SimpleAdapter::filtered_index_at).

use std::fmt;

/// Position in the underlying item collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RawIndex(pub usize);

/// Position in the effective (possibly filtered) sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FilteredIndex(pub usize);

impl RawIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl FilteredIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RawIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for FilteredIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
