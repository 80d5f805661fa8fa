//! Backend-agnostic filter expression tree.
//!
//! The types here are plain data: an upstream builder assembles them once and
//! a converter walks them read-only to produce backend filter syntax.

pub mod error;
pub mod expr;
pub mod operator;
pub mod value;

pub use error::{ModelError, Result};
pub use expr::{Comparison, Expression, Group, Key, LogicalExpression};
pub use operator::Operator;
pub use value::{Scalar, Value};

/// Shorthand for a comparison node, e.g. `compare("a", Operator::Gt, 1)`.
pub fn compare(key: impl Into<Key>, op: Operator, value: impl Into<Value>) -> Expression {
    Expression::Comparison(Comparison::new(key, op, value))
}
