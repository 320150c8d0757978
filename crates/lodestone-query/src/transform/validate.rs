//! Validation transform.
//!
//! Checks that a criteria tree is well-formed before rendering. Trees built
//! through the [`Criteria`] constructors always pass; deserialized trees can
//! carry an empty composite.

use crate::error::CriteriaError;
use crate::query::{Criteria, Query};
use crate::transform::QueryTransform;

/// Validation transform that checks criteria-tree consistency.
pub struct ValidateTransform;

impl QueryTransform for ValidateTransform {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn transform(&self, query: Query) -> Result<Query, CriteriaError> {
        if let Some(criteria) = &query.criteria {
            validate_criteria(criteria)?;
        }
        Ok(query)
    }
}

fn validate_criteria(criteria: &Criteria) -> Result<(), CriteriaError> {
    match criteria {
        Criteria::Value(_) => Ok(()),
        Criteria::Composite(composite) => {
            if composite.criteria().is_empty() {
                return Err(CriteriaError::EmptyComposite);
            }
            composite.criteria().iter().try_for_each(validate_criteria)
        }
    }
}
