//! Expansion of a validated request into accessor declarations.

use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{quote, ToTokens};
use syn::Item;

use crate::error::GenerateError;
use crate::table::{style_table, StyleEntry};
use crate::validate::{validate, AttachmentKind, GenerationRequest, MacroArgs};

/// Canonical name of the size-parametrized accessor.
pub const SIZE_ACCESSOR_NAME: &str = "ofSize";

/// One generated accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// A zero-argument accessor for one row of the style table.
    StyleAccessor {
        entry: &'static StyleEntry,
        font_name: String,
    },
    /// The `of_size(size)` accessor, which has no text style.
    SizeAccessor { font_name: String },
}

impl Declaration {
    /// Canonical accessor name (`largeTitle`, ..., `ofSize`).
    pub fn name(&self) -> &'static str {
        match self {
            Declaration::StyleAccessor { entry, .. } => entry.accessor_name,
            Declaration::SizeAccessor { .. } => SIZE_ACCESSOR_NAME,
        }
    }

    /// The function identifier used in Rust output.
    pub fn ident(&self) -> Ident {
        match self {
            Declaration::StyleAccessor { entry, .. } => entry.rust_ident(),
            Declaration::SizeAccessor { .. } => Ident::new("of_size", Span::call_site()),
        }
    }

    /// The family name embedded in the accessor.
    pub fn font_name(&self) -> &str {
        match self {
            Declaration::StyleAccessor { font_name, .. } => font_name,
            Declaration::SizeAccessor { font_name } => font_name,
        }
    }

    /// The fixed point size, or `None` for the size-parametrized accessor.
    pub fn point_size(&self) -> Option<u16> {
        match self {
            Declaration::StyleAccessor { entry, .. } => Some(entry.point_size),
            Declaration::SizeAccessor { .. } => None,
        }
    }

    /// The text-style token, or `None` for the size-parametrized accessor.
    pub fn style_token(&self) -> Option<&'static str> {
        match self {
            Declaration::StyleAccessor { entry, .. } => Some(entry.style_token),
            Declaration::SizeAccessor { .. } => None,
        }
    }
}

impl Declaration {
    /// Appends the accessor, with `Font` and `TextStyle` resolved through
    /// `runtime` (for example `::fontsgen` or `crate::fonts`).
    pub fn to_tokens_in(&self, runtime: &impl ToTokens, tokens: &mut TokenStream) {
        let ident = self.ident();
        let font_name = self.font_name();

        let expanded = match self {
            Declaration::StyleAccessor { entry, .. } => {
                let size = Literal::f32_unsuffixed(f32::from(entry.point_size));
                let token = entry.token_ident();
                let doc = format!(
                    "`{}` at {}pt, scaling with the `{}` text style.",
                    font_name, entry.point_size, entry.style_token
                );
                quote! {
                    #[doc = #doc]
                    #[inline]
                    pub fn #ident() -> #runtime::Font {
                        #runtime::Font::custom(#font_name, #size, #runtime::TextStyle::#token)
                    }
                }
            }
            Declaration::SizeAccessor { .. } => {
                let doc = format!("`{}` at a fixed point size.", font_name);
                quote! {
                    #[doc = #doc]
                    #[inline]
                    pub fn #ident(size: f32) -> #runtime::Font {
                        #runtime::Font::fixed(#font_name, size)
                    }
                }
            }
        };

        tokens.extend(expanded);
    }
}

impl ToTokens for Declaration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.to_tokens_in(&quote!(::fontsgen), tokens);
    }
}

/// Renders the accessors for a validated request.
///
/// One accessor per style table row, in table order, followed by the
/// size-parametrized accessor.
pub fn expand(request: &GenerationRequest) -> Vec<Declaration> {
    let mut declarations: Vec<Declaration> = style_table()
        .iter()
        .map(|entry| Declaration::StyleAccessor {
            entry,
            font_name: request.font_name.clone(),
        })
        .collect();

    declarations.push(Declaration::SizeAccessor {
        font_name: request.font_name.clone(),
    });

    declarations
}

/// Validates and expands in one step.
///
/// Returns an empty list when the attachment is not an `enum`.
pub fn generate(
    args: &MacroArgs,
    attachment: AttachmentKind,
) -> Result<Vec<Declaration>, GenerateError> {
    Ok(validate(args, attachment)?
        .map(|request| expand(&request))
        .unwrap_or_default())
}

/// Implementation of the `#[fonts_generator]` attribute.
///
/// Emits the annotated item followed by an inherent `impl` block holding the
/// generated accessors. On a missing font name or an invalid `crate` path the
/// item is emitted with a compile error and no accessors.
pub fn expand_attribute(args: TokenStream, input: TokenStream) -> TokenStream {
    let item: Item = match syn::parse2(input) {
        Ok(item) => item,
        Err(e) => return e.to_compile_error(),
    };

    let args = MacroArgs::parse(args);
    let resolved = generate(&args, AttachmentKind::of_item(&item)).and_then(|declarations| {
        if declarations.is_empty() {
            return Ok(None);
        }
        Ok(Some((declarations, args.runtime_path()?)))
    });

    let (declarations, runtime) = match resolved {
        Ok(Some(resolved)) => resolved,
        Ok(None) => return item.into_token_stream(),
        Err(e) => {
            let error = syn::Error::new_spanned(args.tokens(), e).to_compile_error();
            return quote! {
                #error
                #item
            };
        }
    };

    let item_enum = match &item {
        Item::Enum(item_enum) => item_enum,
        _ => return item.into_token_stream(),
    };

    let name = &item_enum.ident;
    let (impl_generics, ty_generics, where_clause) = item_enum.generics.split_for_impl();

    let mut accessors = TokenStream::new();
    for declaration in &declarations {
        declaration.to_tokens_in(&runtime, &mut accessors);
    }

    quote! {
        #item

        impl #impl_generics #name #ty_generics #where_clause {
            #accessors
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_accessor_embeds_font_name(font_name in ".*") {
            let declarations = expand(&GenerationRequest {
                font_name: font_name.clone(),
                attachment: AttachmentKind::Enum,
            });

            prop_assert_eq!(declarations.len(), style_table().len() + 1);
            prop_assert!(declarations.iter().all(|d| d.font_name() == font_name));

            let expected_literal = Literal::string(&font_name).to_string();
            for declaration in &declarations {
                let tokens = declaration.to_token_stream().to_string();
                prop_assert!(
                    tokens.contains(&expected_literal),
                    "{} does not embed {}",
                    declaration.name(),
                    expected_literal
                );
            }
        }

        #[test]
        fn generated_output_always_parses(font_name in ".{0,24}") {
            let output = expand_attribute(
                quote::quote! { font_name = #font_name },
                quote::quote! { enum Family {} },
            );
            let file: syn::File = syn::parse2(output).expect("output should parse");
            prop_assert_eq!(file.items.len(), 2);
        }
    }
}
