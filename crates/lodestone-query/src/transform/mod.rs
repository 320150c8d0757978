//! Descriptor transforms.
//!
//! Transforms run between construction and rendering. The shipped transform
//! validates trees that did not go through the constructors (deserialized
//! descriptors construct their fields directly).

mod validate;

pub use validate::ValidateTransform;

use crate::error::CriteriaError;
use crate::query::Query;

/// Trait for descriptor-to-descriptor passes.
pub trait QueryTransform: Send + Sync {
    /// Unique name for this transform
    fn name(&self) -> &'static str;

    /// Check or rewrite the descriptor
    fn transform(&self, query: Query) -> Result<Query, CriteriaError>;
}
