//! Semantic text-style font accessors, generated at compile time.
//!
//! Annotate an empty `enum` with a font family name and fontsgen adds one
//! accessor per text style, each returning a [`Font`] for that family at the
//! style's point size, plus an `of_size` accessor for arbitrary sizes.
//!
//! # Example
//!
//! ```rust
//! use fontsgen::{fonts_generator, TextStyle};
//!
//! #[fonts_generator(font_name = "Zapfino")]
//! pub enum Zapfino {}
//!
//! let heading = Zapfino::large_title();
//! assert_eq!(heading.family(), "Zapfino");
//! assert_eq!(heading.size(), 34.0);
//! assert_eq!(heading.relative_to(), Some(TextStyle::LargeTitle));
//!
//! let label = Zapfino::of_size(9.0);
//! assert_eq!(label.relative_to(), None);
//! ```
//!
//! # Without the macro
//!
//! The same accessors can be written out as source at build time with the
//! `fontsgen` CLI (crate `fontsgen-cli`) or `fontsgen_codegen::render_source`
//! from a build script. The generated module only depends on this crate.
//!
//! # Features
//!
//! - `macros` (default): re-exports [`macro@fonts_generator`].

mod error;
mod font;
mod text_style;

pub use error::ParseTextStyleError;
pub use font::Font;
pub use text_style::TextStyle;

#[cfg(feature = "macros")]
pub use fontsgen_macros::fonts_generator;
