//! Error types for criteria construction, validation and rendering.

use thiserror::Error;

/// Error building or validating a criteria tree.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// A composite node was given no children to combine
    #[error("composite criteria requires at least one child")]
    EmptyComposite,
}

/// Error rendering a query descriptor to target query text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The criteria tree bypassed the constructors and is malformed
    #[error("invalid criteria: {0}")]
    InvalidCriteria(#[from] CriteriaError),

    /// A leaf value has no textual form in the target syntax
    #[error("unsupported criteria value: {message}")]
    UnsupportedValue {
        /// Description of the offending value
        message: String,
    },
}
