//! Fluent construction of query descriptors.

use std::num::NonZeroU64;

use crate::query::{Criteria, QName, Query, SortCriteria};

/// Chainable builder for [`Query`] values.
///
/// Every method is optional; `build()` on a fresh builder yields the
/// match-everything query.
///
/// ```rust
/// use lodestone_query::{Criteria, QName, QueryBuilder};
/// use std::num::NonZeroU64;
///
/// let query = QueryBuilder::new()
///     .collection("contacts")
///     .criteria(Criteria::value(QName::local("town"), "Paris"))
///     .limit(NonZeroU64::new(25).unwrap())
///     .sort_descending(QName::local("age"))
///     .build();
///
/// assert_eq!(query.collection.as_deref(), Some("contacts"));
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Start from the match-everything query
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the search to one collection
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.query.collection = Some(name.into());
        self
    }

    /// Set the predicate tree (replaces any previous criteria)
    pub fn criteria(mut self, criteria: Criteria) -> Self {
        self.query.criteria = Some(criteria);
        self
    }

    /// Skip `skip` documents before the first returned result.
    ///
    /// Only takes effect in the rendered text when a limit is also set.
    pub fn skip(mut self, skip: u64) -> Self {
        self.query.skip = Some(skip);
        self
    }

    /// Cap the result count and enable the pagination clause
    pub fn limit(mut self, limit: NonZeroU64) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Append an ascending sort key
    pub fn sort_ascending(mut self, name: QName) -> Self {
        self.query.sort.push(SortCriteria::ascending(name));
        self
    }

    /// Append a descending sort key
    pub fn sort_descending(mut self, name: QName) -> Self {
        self.query.sort.push(SortCriteria::descending(name));
        self
    }

    /// Finish and return the descriptor
    pub fn build(self) -> Query {
        self.query
    }
}
