//! Code generation behind fontsgen.
//!
//! Given a font family name, fontsgen generates one accessor per semantic
//! text style (large title down to the second caption size) plus an
//! `of_size` accessor, all returning `fontsgen::Font`. This crate holds
//! everything both front ends share:
//!
//! - [`STYLE_TABLE`]: the fixed, ordered style table
//! - [`validate`]: attachment and argument checks
//! - [`expand`] / [`generate`]: the accessors as [`Declaration`]s
//! - [`expand_attribute`]: the full `#[fonts_generator]` pipeline
//! - [`render_source`]: the same accessors as a standalone Rust module, for
//!   build scripts and the `fontsgen` CLI
//!
//! # Example
//!
//! ```rust
//! use fontsgen_codegen::{generate, AttachmentKind, MacroArgs};
//!
//! let args = MacroArgs::with_font_name("Zapfino");
//! let declarations = generate(&args, AttachmentKind::Enum).unwrap();
//!
//! assert_eq!(declarations.len(), 11);
//! assert_eq!(declarations[0].name(), "largeTitle");
//! assert_eq!(declarations[10].name(), "ofSize");
//! ```

mod error;
mod expand;
mod source;
mod table;
mod validate;

pub use error::GenerateError;
pub use expand::{expand, expand_attribute, generate, Declaration, SIZE_ACCESSOR_NAME};
pub use source::{render_source, FamilySpec, RenderOptions, DEFAULT_CRATE_PATH};
pub use table::{style_table, StyleEntry, STYLE_TABLE};
pub use validate::{
    validate, AttachmentKind, GenerationRequest, MacroArgs, CRATE_PATH_ARG, FONT_NAME_ARG,
};
