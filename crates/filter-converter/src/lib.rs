//! Renders a [`filter_model::Expression`] into the filter syntax of a storage
//! backend.
//!
//! One traversal ([`renderer`]) decides operator placement, separators and
//! parentheses; a [`Dialect`] supplies only the leaf-level syntax.

pub mod dialect;
pub mod error;
pub mod renderer;
pub mod settings;

pub use dialect::{Dialect, DialectKind, MySqlJsonDialect, PgVectorDialect};
pub use error::{ConvertError, OperatorPosition, Result};
pub use renderer::{Render, Renderer, convert, convert_with, parse_json};
pub use settings::ConverterSettings;
