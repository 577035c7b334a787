//! Generation errors.

use thiserror::Error;

/// Error returned when font accessors cannot be generated.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No `font_name = "..."` string literal was supplied.
    #[error("Font name is required for the macro.")]
    MissingFontName,
    /// A family's type name is not a usable Rust identifier.
    #[error("`{0}` is not a valid Rust type name")]
    InvalidTypeName(String),
    /// Two families share a type name.
    #[error("type `{0}` is declared more than once")]
    DuplicateTypeName(String),
    /// The runtime crate path is not a Rust path.
    #[error("`{0}` is not a valid crate path")]
    InvalidCratePath(String),
    /// The source template failed to render.
    #[error("failed to render generated source: {0}")]
    Template(#[from] minijinja::Error),
}
