//! MarkLogic CTS query renderer.
//!
//! Renders a [`Query`] to the textual form of a `cts:search` call:
//! collection scan, element-value predicates combined with
//! `cts:and-query`/`cts:or-query`, `cts:index-order` sort keys, and a
//! 1-based `[start to end]` pagination slice.

use serde_json::Value;
use tracing::debug;

use crate::error::{CriteriaError, RenderError};
use crate::query::{Criteria, Operator, QName, Query, SortCriteria};
use crate::render::QueryRenderer;

/// Renderer for MarkLogic's CTS search syntax.
///
/// Stateless; one instance can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CtsRenderer;

impl QueryRenderer for CtsRenderer {
    fn name(&self) -> &str {
        "cts"
    }

    fn render(&self, query: &Query) -> Result<String, RenderError> {
        let mut text = format!(
            "cts:search({}, {}, {})",
            self.render_collection(query.collection.as_deref()),
            self.render_criteria(query.criteria.as_ref())?,
            self.render_sort(&query.sort),
        );

        // Pagination is a positional slice over the search results, 1-based
        // and inclusive on both ends. Skip without a limit has no textual
        // form and is dropped.
        if let Some(limit) = query.limit {
            let skip = query.skip.unwrap_or(0);
            text.push_str(&format!("[{} to {}]", skip + 1, skip + limit.get()));
        }

        debug!(query = %text, "rendered cts query");
        Ok(text)
    }
}

impl CtsRenderer {
    fn render_collection(&self, collection: Option<&str>) -> String {
        match collection {
            Some(name) => format!("fn:collection('{}')", name),
            None => "fn:collection()".to_string(),
        }
    }

    fn render_criteria(&self, criteria: Option<&Criteria>) -> Result<String, RenderError> {
        match criteria {
            Some(criteria) => self.render_node(criteria),
            None => Ok("()".to_string()),
        }
    }

    /// Recursive emitter over the criteria tree.
    ///
    /// Children of a composite join with `", "` inside a single parenthesized
    /// group; precedence is carried entirely by the function-call nesting.
    fn render_node(&self, criteria: &Criteria) -> Result<String, RenderError> {
        match criteria {
            Criteria::Value(leaf) => Ok(format!(
                "cts:element-value-query({}, '{}')",
                self.render_qname(&leaf.name),
                self.scalar_text(&leaf.value)?
            )),
            Criteria::Composite(composite) => {
                // Unreachable through the constructors; deserialized trees
                // can still get here.
                if composite.criteria().is_empty() {
                    return Err(CriteriaError::EmptyComposite.into());
                }
                let children = composite
                    .criteria()
                    .iter()
                    .map(|child| self.render_node(child))
                    .collect::<Result<Vec<_>, _>>()?
                    .join(", ");
                Ok(format!(
                    "{}(({}))",
                    self.operator_function(composite.operator()),
                    children
                ))
            }
        }
    }

    fn operator_function(&self, operator: Operator) -> &'static str {
        match operator {
            Operator::And => "cts:and-query",
            Operator::Or => "cts:or-query",
        }
    }

    fn render_qname(&self, name: &QName) -> String {
        format!("fn:QName('{}', '{}')", name.namespace, name.local_name)
    }

    /// Stringify a scalar leaf value into the quoted value position.
    ///
    /// Quote characters in the value are not escaped; a value containing `'`
    /// yields query text the engine will reject. Kept for output
    /// compatibility with existing consumers.
    fn scalar_text(&self, value: &Value) -> Result<String, RenderError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            other => Err(RenderError::UnsupportedValue {
                message: format!("criteria value must be a scalar, got {:?}", other),
            }),
        }
    }

    fn render_sort(&self, sort: &[SortCriteria]) -> String {
        if sort.is_empty() {
            return "()".to_string();
        }
        let entries = sort
            .iter()
            .map(|entry| {
                format!(
                    "cts:index-order(cts:element-reference({}), ('{}'))",
                    self.render_qname(&entry.name),
                    if entry.descending {
                        "descending"
                    } else {
                        "ascending"
                    }
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("({})", entries)
    }
}
