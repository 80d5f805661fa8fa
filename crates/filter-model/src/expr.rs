//! Defines the AST for filter expressions.

use crate::{operator::Operator, value::Value};
use serde::{Deserialize, Serialize};

/// A field or metadata path, e.g. `country` or `"year"`.
///
/// Upstream builders sometimes hand over keys that are already wrapped in
/// quotes; the text is kept verbatim here and unwrapped at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    pub fn new(key: impl Into<String>) -> Self {
        Key(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::new(key)
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key(key)
    }
}

/// `key <op> value`, e.g. `country = 'NL'` or `year IN (2020,2021)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub key: Key,
    pub op: Operator,
    pub value: Value,
}

impl Comparison {
    pub fn new(key: impl Into<Key>, op: Operator, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            op,
            value: value.into(),
        }
    }
}

/// `left AND right` / `left OR right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpression {
    pub left: Box<Expression>,
    pub op: Operator,
    pub right: Box<Expression>,
}

/// Explicit parentheses around a sub-expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub inner: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// A single key/value test, e.g. `genre = 'drama'`.
    Comparison(Comparison),

    /// Two operands joined by `AND` or `OR`.
    Logical(LogicalExpression),

    /// A parenthesized sub-expression.
    Group(Group),
}

impl Expression {
    pub fn logical(left: Expression, op: Operator, right: Expression) -> Self {
        Expression::Logical(LogicalExpression {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn and(self, right: Expression) -> Self {
        Self::logical(self, Operator::And, right)
    }

    pub fn or(self, right: Expression) -> Self {
        Self::logical(self, Operator::Or, right)
    }

    pub fn group(inner: Expression) -> Self {
        Expression::Group(Group {
            inner: Box::new(inner),
        })
    }

    /// Nesting depth of the tree; a lone comparison has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Comparison(_) => 1,
            Expression::Logical(logical) => 1 + logical.left.depth().max(logical.right.depth()),
            Expression::Group(group) => 1 + group.inner.depth(),
        }
    }
}

impl From<Comparison> for Expression {
    fn from(c: Comparison) -> Self {
        Expression::Comparison(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare;

    #[test]
    fn test_depth() {
        let leaf = compare("a", Operator::Eq, 1);
        assert_eq!(leaf.depth(), 1);

        let and = leaf.clone().and(compare("b", Operator::Eq, 2));
        assert_eq!(and.depth(), 2);

        let grouped = Expression::group(Expression::group(and));
        assert_eq!(grouped.depth(), 4);
    }

    #[test]
    fn test_json_shape() {
        let expr = Expression::group(
            compare("a", Operator::Gt, 1).or(compare("b", Operator::In, vec!["x", "y"])),
        );

        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "group",
                "inner": {
                    "type": "logical",
                    "left": { "type": "comparison", "key": "a", "op": "GT", "value": 1 },
                    "op": "OR",
                    "right": { "type": "comparison", "key": "b", "op": "IN", "value": ["x", "y"] }
                }
            })
        );

        let back: Expression = serde_json::from_value(json).unwrap();
        assert_eq!(back, expr);
    }

    #[test]
    fn test_json_rejects_unknown_operator() {
        let err = serde_json::from_str::<Expression>(
            r#"{ "type": "comparison", "key": "a", "op": "LIKE", "value": "x%" }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unsupported operator: LIKE"));
    }
}
