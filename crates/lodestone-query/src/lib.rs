//! Criteria-to-CTS query translation for MarkLogic.
//!
//! This crate models search criteria as a backend-agnostic descriptor
//! ([`Query`]) and renders it to the textual form of MarkLogic's CTS search
//! language. The descriptor is plain data; rendering is a pure function with
//! no I/O, so a single renderer can serve any number of threads.
//!
//! ## Features
//!
//! - **Criteria model**: immutable predicate trees of element-value leaves
//!   combined with `and`/`or` composites
//! - **Query descriptor**: collection, criteria, pagination and sort as four
//!   independent optional concerns
//! - **CTS renderer**: byte-exact `cts:search(...)` text generation
//! - **Fluent builder**: chainable descriptor construction
//!
//! ## Usage
//!
//! ```rust
//! use lodestone_query::{Criteria, CtsRenderer, QName, QueryBuilder, QueryRenderer};
//!
//! let query = QueryBuilder::new()
//!     .collection("contacts")
//!     .criteria(Criteria::value(QName::local("town"), "Paris"))
//!     .build();
//!
//! let cts = CtsRenderer.render(&query).unwrap();
//! assert_eq!(
//!     cts,
//!     "cts:search(fn:collection('contacts'), cts:element-value-query(fn:QName('', 'town'), 'Paris'), ())"
//! );
//! ```

pub mod builder;
pub mod error;
pub mod query;
pub mod render;
pub mod transform;

// Re-exports
pub use builder::QueryBuilder;
pub use error::{CriteriaError, RenderError};
pub use query::{CompositeCriteria, Criteria, Operator, QName, Query, SortCriteria, ValueCriteria};
pub use render::{CtsRenderer, QueryRenderer};
pub use transform::{QueryTransform, ValidateTransform};
