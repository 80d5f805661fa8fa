//! Defines the `Dialect` trait for backend-specific filter syntax.

use crate::error::ConvertError;
use filter_model::Scalar;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_METADATA_COLUMN: &str = "metadata";

/// The leaf-level rendering hooks a backend supplies. Traversal order,
/// operator symbols and list separators are owned by the renderer.
pub trait Dialect: Send + Sync {
    /// Returns the name of the backend (e.g., "PgVector").
    fn name(&self) -> String;

    /// Renders a reference to a metadata field. The key arrives with any
    /// upstream outer quotes already removed.
    ///
    /// - PgVector: `metadata::jsonb->>'country'`
    /// - MySQL: `metadata->>'$.country'`
    fn render_key(&self, key: &str) -> String;

    /// Renders a single literal. Strings are quoted, everything else is
    /// emitted in its plain textual form.
    fn render_scalar(&self, value: &Scalar) -> String;

    /// Opens an explicit group around a sub-expression.
    fn open_group(&self) -> &str;

    fn close_group(&self) -> &str;

    /// Opens the value list of an `IN`/`NOT IN` comparison.
    fn open_range(&self) -> &str;

    fn close_range(&self) -> &str;
}

fn quote_single(value: &Scalar) -> String {
    match value {
        Scalar::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

/// JSON path lookups against a `jsonb`-castable PostgreSQL column, as used by
/// pgvector document tables.
#[derive(Debug, Clone)]
pub struct PgVectorDialect {
    pub column: String,
}

impl PgVectorDialect {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Default for PgVectorDialect {
    fn default() -> Self {
        Self::new(DEFAULT_METADATA_COLUMN)
    }
}

impl Dialect for PgVectorDialect {
    fn name(&self) -> String {
        "PgVector".into()
    }

    fn render_key(&self, key: &str) -> String {
        format!("{}::jsonb->>'{key}'", self.column)
    }

    fn render_scalar(&self, value: &Scalar) -> String {
        quote_single(value)
    }

    fn open_group(&self) -> &str {
        "("
    }

    fn close_group(&self) -> &str {
        ")"
    }

    fn open_range(&self) -> &str {
        "("
    }

    fn close_range(&self) -> &str {
        ")"
    }
}

/// MySQL `JSON` column accessed through the unquoting `->>` path operator.
#[derive(Debug, Clone)]
pub struct MySqlJsonDialect {
    pub column: String,
}

impl MySqlJsonDialect {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Default for MySqlJsonDialect {
    fn default() -> Self {
        Self::new(DEFAULT_METADATA_COLUMN)
    }
}

impl Dialect for MySqlJsonDialect {
    fn name(&self) -> String {
        "MySQL".into()
    }

    fn render_key(&self, key: &str) -> String {
        format!("{}->>'$.{key}'", self.column)
    }

    fn render_scalar(&self, value: &Scalar) -> String {
        quote_single(value)
    }

    fn open_group(&self) -> &str {
        "("
    }

    fn close_group(&self) -> &str {
        ")"
    }

    fn open_range(&self) -> &str {
        "("
    }

    fn close_range(&self) -> &str {
        ")"
    }
}

/// Selects a built-in dialect by name, e.g. from a settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    PgVector,
    MySql,
}

impl DialectKind {
    /// Builds the dialect, reading metadata from `column` when given.
    pub fn build(&self, column: Option<&str>) -> Box<dyn Dialect> {
        let column = column.unwrap_or(DEFAULT_METADATA_COLUMN);
        match self {
            DialectKind::PgVector => Box::new(PgVectorDialect::new(column)),
            DialectKind::MySql => Box::new(MySqlJsonDialect::new(column)),
        }
    }
}

impl FromStr for DialectKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pgvector" | "pg" | "postgres" | "postgresql" => Ok(DialectKind::PgVector),
            "mysql" | "mariadb" => Ok(DialectKind::MySql),
            other => Err(ConvertError::UnknownDialect(other.to_string())),
        }
    }
}
