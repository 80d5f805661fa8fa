//! Defines the core rendering trait and context for converting a filter
//! expression into backend syntax.

use crate::{
    dialect::Dialect,
    error::{ConvertError, Result},
    settings::ConverterSettings,
};
use filter_model::Expression;
use tracing::{debug, trace, warn};

pub mod expr;
pub mod key;

/// A trait for any AST node that can be rendered into a filter clause.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> Result<()>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the output and tracks how deep the traversal currently is,
/// and provides access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
    settings: &'a ConverterSettings,
    depth: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, settings: &'a ConverterSettings) -> Self {
        Self {
            sql: String::new(),
            dialect,
            settings,
            depth: 0,
        }
    }

    /// Consumes the renderer and returns the rendered clause.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Steps one level down the tree, failing once the configured limit is
    /// passed. Every successful call must be paired with [`Renderer::leave`].
    pub(crate) fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.settings.max_depth {
            warn!(
                limit = self.settings.max_depth,
                dialect = %self.dialect.name(),
                "filter expression exceeds the maximum nesting depth"
            );
            return Err(ConvertError::DepthExceeded {
                limit: self.settings.max_depth,
            });
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Renders `expression` with default settings.
pub fn convert(expression: &Expression, dialect: &dyn Dialect) -> Result<String> {
    convert_with(expression, dialect, &ConverterSettings::default())
}

pub fn convert_with(
    expression: &Expression,
    dialect: &dyn Dialect,
    settings: &ConverterSettings,
) -> Result<String> {
    debug!(dialect = %dialect.name(), max_depth = settings.max_depth, "converting filter expression");

    let mut renderer = Renderer::new(dialect, settings);
    expression.render(&mut renderer)?;
    let clause = renderer.finish();

    trace!(%clause, "rendered filter expression");
    Ok(clause)
}

/// Reads an expression tree from its JSON form.
pub fn parse_json(source: &str) -> Result<Expression> {
    serde_json::from_str(source).map_err(ConvertError::InvalidExpression)
}
