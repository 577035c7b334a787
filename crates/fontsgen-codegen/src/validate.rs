//! Validation of macro usage.
//!
//! Two checks run before anything is generated, in this order:
//!
//! 1. The annotated item must be an `enum`. Anything else is left untouched
//!    and produces no accessors; this is not an error.
//! 2. The arguments must bind `font_name` to a string literal. A missing
//!    argument, or a value that is not a literal, fails with
//!    [`GenerateError::MissingFontName`].
//!
//! An optional `crate = "..."` argument names the crate providing `Font`
//! and `TextStyle`. It is only resolved once accessors are generated.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, Item, Lit, Meta, Token};

use crate::error::GenerateError;
use crate::source::DEFAULT_CRATE_PATH;

/// Name of the argument carrying the font family.
pub const FONT_NAME_ARG: &str = "font_name";

/// Name of the argument overriding the runtime crate path.
pub const CRATE_PATH_ARG: &str = "crate";

/// The syntactic shape of the item a generator is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// An `enum`, the only shape that receives accessors.
    Enum,
    /// Any other item.
    Other,
}

impl AttachmentKind {
    /// Classifies a parsed item.
    pub fn of_item(item: &Item) -> Self {
        match item {
            Item::Enum(_) => AttachmentKind::Enum,
            _ => AttachmentKind::Other,
        }
    }
}

/// Arguments passed to the generator.
#[derive(Debug, Clone, Default)]
pub struct MacroArgs {
    font_name: Option<String>,
    // Err holds the raw tokens of a value that is not a string literal
    crate_path: Option<Result<String, String>>,
    tokens: TokenStream,
}

impl MacroArgs {
    /// Extracts arguments from attribute tokens such as `font_name = "Zapfino"`.
    ///
    /// Only the first binding of each known key is considered. Other keys,
    /// bare flags and list arguments are skipped. Tokens that do not form a
    /// comma separated list of attribute arguments yield no font name.
    pub fn parse(tokens: TokenStream) -> Self {
        let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
        let metas = parser.parse2(tokens.clone()).unwrap_or_default();
        let mut bindings = metas.iter().filter_map(|meta| match meta {
            Meta::NameValue(pair) => Some(pair),
            _ => None,
        });

        let font_name = bindings
            .clone()
            .find(|pair| pair.path.is_ident(FONT_NAME_ARG))
            .and_then(|pair| string_literal(&pair.value));
        let crate_path = bindings
            .find(|pair| pair.path.is_ident(CRATE_PATH_ARG))
            .map(|pair| {
                string_literal(&pair.value).ok_or_else(|| pair.value.to_token_stream().to_string())
            });

        Self {
            font_name,
            crate_path,
            tokens,
        }
    }

    /// Builds arguments from an already known font name.
    pub fn with_font_name(font_name: impl Into<String>) -> Self {
        Self {
            font_name: Some(font_name.into()),
            crate_path: None,
            tokens: TokenStream::new(),
        }
    }

    /// Sets the path of the crate providing `Font` and `TextStyle`.
    pub fn crate_path(mut self, path: impl Into<String>) -> Self {
        self.crate_path = Some(Ok(path.into()));
        self
    }

    /// The extracted font name, if any.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Resolves the runtime crate path, `::fontsgen` unless overridden.
    ///
    /// Fails with [`GenerateError::InvalidCratePath`] when the `crate`
    /// value is not a string literal holding a Rust path.
    pub fn runtime_path(&self) -> Result<syn::Path, GenerateError> {
        let path = match &self.crate_path {
            None => DEFAULT_CRATE_PATH,
            Some(Ok(path)) => path.as_str(),
            Some(Err(raw)) => return Err(GenerateError::InvalidCratePath(raw.clone())),
        };
        syn::parse_str(path).map_err(|_| GenerateError::InvalidCratePath(path.to_string()))
    }

    /// The raw argument tokens, used to place diagnostics.
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }
}

/// Returns the value of a plain string literal expression.
fn string_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => Some(s.value()),
            _ => None,
        },
        // `$name:expr` fragments arrive wrapped in an invisible group
        Expr::Group(group) => string_literal(&group.expr),
        _ => None,
    }
}

/// A validated request to generate accessors for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The font family name, embedded verbatim in every accessor.
    pub font_name: String,
    /// Shape of the annotated item.
    pub attachment: AttachmentKind,
}

/// Checks the attachment shape and the arguments.
///
/// Returns `Ok(None)` when the item is not an `enum`: nothing should be
/// generated and no error is reported.
pub fn validate(
    args: &MacroArgs,
    attachment: AttachmentKind,
) -> Result<Option<GenerationRequest>, GenerateError> {
    if attachment != AttachmentKind::Enum {
        return Ok(None);
    }

    let font_name = args.font_name().ok_or(GenerateError::MissingFontName)?;

    Ok(Some(GenerationRequest {
        font_name: font_name.to_string(),
        attachment,
    }))
}
