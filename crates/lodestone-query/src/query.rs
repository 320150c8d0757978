//! Query descriptor and criteria model.
//!
//! The model is plain data: a [`Query`] aggregates four independent optional
//! concerns (collection, criteria, pagination, sort) and a [`Criteria`] tree
//! combines element-value leaves under `and`/`or` composites. Renderers in
//! [`crate::render`] turn a descriptor into target query text; nothing here
//! performs I/O or mutation after construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::NonZeroU64;

use crate::error::CriteriaError;

/// Qualified element name: namespace URI plus local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QName {
    /// Namespace URI (empty string for the default namespace)
    pub namespace: String,
    /// Local element name
    pub local_name: String,
}

impl QName {
    /// Qualified name in an explicit namespace
    pub fn new(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Qualified name in the default (empty) namespace
    pub fn local(local_name: impl Into<String>) -> Self {
        Self::new("", local_name)
    }
}

/// Boolean operator combining the children of a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Every child must match
    And,
    /// At least one child must match
    Or,
}

/// Leaf criteria: match documents whose element equals a scalar value.
///
/// The value is kept as-is and stringified at render time, not at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCriteria {
    /// Element to match
    pub name: QName,
    /// Scalar value to match by equality
    pub value: Value,
}

/// Composite criteria: boolean combination of child criteria.
///
/// Fields are private so every constructor-built composite carries at least
/// one child. Descriptors that arrive through deserialization skip the
/// constructor; run [`crate::transform::ValidateTransform`] over those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeCriteria {
    operator: Operator,
    criteria: Vec<Criteria>,
}

impl CompositeCriteria {
    /// Combine `criteria` under `operator`.
    ///
    /// Fails with [`CriteriaError::EmptyComposite`] when `criteria` is empty.
    pub fn new(operator: Operator, criteria: Vec<Criteria>) -> Result<Self, CriteriaError> {
        if criteria.is_empty() {
            return Err(CriteriaError::EmptyComposite);
        }
        Ok(Self { operator, criteria })
    }

    /// Combining operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Ordered child criteria
    pub fn criteria(&self) -> &[Criteria] {
        &self.criteria
    }
}

/// A node of the predicate tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Criteria {
    /// Element-equals-value leaf
    Value(ValueCriteria),
    /// Boolean combination of child criteria
    Composite(CompositeCriteria),
}

impl Criteria {
    /// Leaf criteria matching `name` against a scalar `value`.
    pub fn value(name: QName, value: impl Into<Value>) -> Self {
        Self::Value(ValueCriteria {
            name,
            value: value.into(),
        })
    }

    /// Combine `criteria` under `operator`.
    pub fn composite(operator: Operator, criteria: Vec<Criteria>) -> Result<Self, CriteriaError> {
        CompositeCriteria::new(operator, criteria).map(Self::Composite)
    }

    /// All of `criteria` must match.
    pub fn and(criteria: Vec<Criteria>) -> Result<Self, CriteriaError> {
        Self::composite(Operator::And, criteria)
    }

    /// At least one of `criteria` must match.
    pub fn or(criteria: Vec<Criteria>) -> Result<Self, CriteriaError> {
        Self::composite(Operator::Or, criteria)
    }
}

/// One sort key: element plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    /// Element to order by
    pub name: QName,
    /// Descending order when true
    pub descending: bool,
}

impl SortCriteria {
    /// Ascending sort on `name`
    pub fn ascending(name: QName) -> Self {
        Self {
            name,
            descending: false,
        }
    }

    /// Descending sort on `name`
    pub fn descending(name: QName) -> Self {
        Self {
            name,
            descending: true,
        }
    }
}

/// Backend-agnostic query descriptor consumed by renderers.
///
/// Every field is optional and independent; `Query::default()` is the
/// match-everything query. "No pagination" (`limit: None`) and "pagination
/// with skip defaulted to 0" (`limit` set, `skip: None`) are distinct states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Collection to scan (`None` searches all collections)
    pub collection: Option<String>,
    /// Predicate tree (`None` matches every document)
    pub criteria: Option<Criteria>,
    /// Documents to skip before the first returned result
    pub skip: Option<u64>,
    /// Maximum number of results; the pagination clause is emitted only
    /// when this is set
    pub limit: Option<NonZeroU64>,
    /// Sort keys in precedence order (empty means engine default order)
    pub sort: Vec<SortCriteria>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_qname_constructors() {
        let name = QName::local("age");
        assert_eq!(name.namespace, "");
        assert_eq!(name.local_name, "age");

        let name = QName::new("http://example.com/ns", "age");
        assert_eq!(name.namespace, "http://example.com/ns");
    }

    #[test]
    fn test_value_criteria_accepts_scalars() {
        let by_str = Criteria::value(QName::local("town"), "Paris");
        let by_num = Criteria::value(QName::local("age"), 30);
        let by_bool = Criteria::value(QName::local("active"), true);

        match (by_str, by_num, by_bool) {
            (Criteria::Value(s), Criteria::Value(n), Criteria::Value(b)) => {
                assert_eq!(s.value, json!("Paris"));
                assert_eq!(n.value, json!(30));
                assert_eq!(b.value, json!(true));
            }
            _ => panic!("expected leaf criteria"),
        }
    }

    #[test]
    fn test_composite_requires_children() {
        let result = Criteria::and(vec![]);
        assert!(matches!(result, Err(CriteriaError::EmptyComposite)));

        let result = Criteria::or(vec![]);
        assert!(matches!(result, Err(CriteriaError::EmptyComposite)));

        let result = CompositeCriteria::new(Operator::And, vec![]);
        assert!(matches!(result, Err(CriteriaError::EmptyComposite)));
    }

    #[test]
    fn test_composite_preserves_child_order() {
        let composite = Criteria::and(vec![
            Criteria::value(QName::local("name"), "Me"),
            Criteria::value(QName::local("town"), "Paris"),
        ])
        .unwrap();

        let Criteria::Composite(composite) = composite else {
            panic!("expected composite");
        };
        assert_eq!(composite.operator(), Operator::And);
        assert_eq!(composite.criteria().len(), 2);
        let Criteria::Value(first) = &composite.criteria()[0] else {
            panic!("expected leaf");
        };
        assert_eq!(first.name.local_name, "name");
    }

    #[test]
    fn test_default_query_is_empty() {
        let query = Query::default();
        assert!(query.collection.is_none());
        assert!(query.criteria.is_none());
        assert!(query.skip.is_none());
        assert!(query.limit.is_none());
        assert!(query.sort.is_empty());
    }

    #[test]
    fn test_sort_criteria_constructors() {
        assert!(!SortCriteria::ascending(QName::local("age")).descending);
        assert!(SortCriteria::descending(QName::local("age")).descending);
    }

    #[test]
    fn test_query_serde_round_trip() {
        let query = Query {
            collection: Some("contacts".to_string()),
            criteria: Some(
                Criteria::or(vec![
                    Criteria::value(QName::local("town"), "Paris"),
                    Criteria::value(QName::local("age"), 30),
                ])
                .unwrap(),
            ),
            skip: Some(20),
            limit: NonZeroU64::new(10),
            sort: vec![SortCriteria::descending(QName::local("age"))],
        };

        let encoded = serde_json::to_string(&query).unwrap();
        let decoded: Query = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, query);
    }
}
