//! Proc macros for compile-time font accessor generation in fontsgen.
//!
//! # Macros
//!
//! - [`macro@fonts_generator`] - Generate text-style accessors on an `enum`
//!
//! # Example
//!
//! ```rust,ignore
//! use fontsgen::fonts_generator;
//!
//! #[fonts_generator(font_name = "Zapfino")]
//! pub enum Zapfino {}
//!
//! let heading = Zapfino::large_title();
//! let label = Zapfino::of_size(9.0);
//! ```

use proc_macro::TokenStream;

/// Generates font accessors for a font family.
///
/// Placed on an `enum`, this adds an inherent `impl` block with one
/// associated function per text style, each returning `fontsgen::Font`
/// for the family at the style's point size:
///
/// | Accessor | Size | Text style |
/// |----------|------|------------|
/// | `large_title()` | 34 | `LargeTitle` |
/// | `title()` | 28 | `Title` |
/// | `title2()` | 22 | `Title2` |
/// | `title3()` | 20 | `Title3` |
/// | `body()` | 17 | `Body` |
/// | `callout()` | 16 | `Callout` |
/// | `subheadline()` | 15 | `Subheadline` |
/// | `footnote()` | 13 | `Footnote` |
/// | `caption()` | 12 | `Caption` |
/// | `caption2()` | 11 | `Caption2` |
///
/// plus `of_size(size: f32)`, which returns the family at a fixed size with
/// no text style.
///
/// # Arguments
///
/// - `font_name = "..."` (required): the font family name.
/// - `crate = "..."`: path of the crate providing `Font` and `TextStyle`,
///   for use through a renamed dependency or a re-export. Defaults to
///   `::fontsgen`.
///
/// Other arguments are ignored.
///
/// # Compile-Time Errors
///
/// - `font_name` is missing or is not a string literal:
///   `Font name is required for the macro.`
/// - `crate` is not a string literal holding a path:
///   `` `...` is not a valid crate path ``
///
/// On any item other than an `enum` the attribute does nothing.
#[proc_macro_attribute]
pub fn fonts_generator(args: TokenStream, input: TokenStream) -> TokenStream {
    fontsgen_codegen::expand_attribute(args.into(), input.into()).into()
}
