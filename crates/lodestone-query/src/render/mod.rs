//! Target renderers for query descriptors.
//!
//! Renderers convert the backend-agnostic [`Query`] into target-specific
//! query text (MarkLogic CTS today).

mod cts;

pub use cts::CtsRenderer;

use crate::error::RenderError;
use crate::query::Query;

/// Trait for rendering a query descriptor to target query text.
pub trait QueryRenderer: Send + Sync {
    /// Unique name for this renderer
    fn name(&self) -> &str;

    /// Render the descriptor to a query string
    fn render(&self, query: &Query) -> Result<String, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer;

    impl QueryRenderer for MockRenderer {
        fn name(&self) -> &str {
            "mock"
        }

        fn render(&self, _query: &Query) -> Result<String, RenderError> {
            Ok("match-all()".to_string())
        }
    }

    #[test]
    fn test_mock_renderer() {
        let renderer = MockRenderer;
        let query = Query::default();
        let result = renderer.render(&query).unwrap();

        assert_eq!(result, "match-all()");
    }
}
