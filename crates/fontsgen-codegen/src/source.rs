//! Rendering accessors as Rust source text.
//!
//! This is the build-time counterpart of the `#[fonts_generator]` attribute:
//! instead of splicing tokens into the annotated item, it writes a complete
//! module with one `enum` and one `impl` block per family. The module is
//! rendered through a MiniJinja template, with names validated and the font
//! name embedded as an escaped string literal.

use std::collections::HashSet;

use minijinja::Environment;
use proc_macro2::Literal;
use serde::Serialize;

use crate::error::GenerateError;
use crate::expand::{generate, Declaration};
use crate::validate::{AttachmentKind, MacroArgs};

/// Runtime crate path used when none is configured.
pub const DEFAULT_CRATE_PATH: &str = "::fontsgen";

const TEMPLATE_NAME: &str = "fonts.rs";

const SOURCE_TEMPLATE: &str = r#"// @generated by fontsgen. Do not edit by hand.
{% for family in families %}

/// Text styles for the {{ family.font_literal }} font family.
pub enum {{ family.type_name }} {}

impl {{ family.type_name }} {
{% for accessor in family.accessors %}
    pub fn {{ accessor.ident }}() -> {{ crate_path }}::Font {
        {{ crate_path }}::Font::custom({{ family.font_literal }}, {{ accessor.size }}.0, {{ crate_path }}::TextStyle::{{ accessor.token }})
    }

{% endfor %}
    pub fn of_size(size: f32) -> {{ crate_path }}::Font {
        {{ crate_path }}::Font::fixed({{ family.font_literal }}, size)
    }
}
{% endfor %}
"#;

/// A font family to generate accessors for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySpec {
    /// Name of the generated `enum`.
    pub type_name: String,
    /// The font family name. `None` fails like a missing macro argument.
    pub font_name: Option<String>,
}

impl FamilySpec {
    /// Creates a family spec with a known font name.
    pub fn new(type_name: impl Into<String>, font_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            font_name: Some(font_name.into()),
        }
    }
}

/// Options controlling the rendered module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Path to the crate providing `Font` and `TextStyle`.
    pub crate_path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            crate_path: DEFAULT_CRATE_PATH.to_string(),
        }
    }
}

impl RenderOptions {
    /// Sets the runtime crate path.
    pub fn crate_path(mut self, path: impl Into<String>) -> Self {
        self.crate_path = path.into();
        self
    }
}

#[derive(Serialize)]
struct ModuleContext<'a> {
    crate_path: &'a str,
    families: Vec<FamilyContext>,
}

#[derive(Serialize)]
struct FamilyContext {
    type_name: String,
    font_literal: String,
    accessors: Vec<AccessorContext>,
}

#[derive(Serialize)]
struct AccessorContext {
    ident: String,
    size: u16,
    token: String,
}

impl FamilyContext {
    fn build(family: &FamilySpec) -> Result<Self, GenerateError> {
        if syn::parse_str::<syn::Ident>(&family.type_name).is_err() {
            return Err(GenerateError::InvalidTypeName(family.type_name.clone()));
        }

        let args = match &family.font_name {
            Some(font_name) => MacroArgs::with_font_name(font_name.as_str()),
            None => MacroArgs::default(),
        };
        let declarations = generate(&args, AttachmentKind::Enum)?;

        let font_literal = declarations
            .first()
            .map(|d| Literal::string(d.font_name()).to_string())
            .ok_or(GenerateError::MissingFontName)?;

        let accessors = declarations
            .iter()
            .filter_map(|declaration| match declaration {
                Declaration::StyleAccessor { entry, .. } => Some(AccessorContext {
                    ident: entry.rust_name(),
                    size: entry.point_size,
                    token: entry.token_name(),
                }),
                Declaration::SizeAccessor { .. } => None,
            })
            .collect();

        Ok(Self {
            type_name: family.type_name.clone(),
            font_literal,
            accessors,
        })
    }
}

/// Renders a Rust module declaring accessors for each family.
///
/// Families are rendered in the given order. Fails on the first family
/// without a font name, with an invalid type name, or reusing the type name
/// of an earlier family.
pub fn render_source(
    families: &[FamilySpec],
    options: &RenderOptions,
) -> Result<String, GenerateError> {
    if syn::parse_str::<syn::Path>(&options.crate_path).is_err() {
        return Err(GenerateError::InvalidCratePath(options.crate_path.clone()));
    }

    let mut seen = HashSet::new();
    let families = families
        .iter()
        .map(|family| {
            let context = FamilyContext::build(family)?;
            if !seen.insert(family.type_name.as_str()) {
                return Err(GenerateError::DuplicateTypeName(family.type_name.clone()));
            }
            Ok(context)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(TEMPLATE_NAME, SOURCE_TEMPLATE)?;

    let template = env.get_template(TEMPLATE_NAME)?;
    let output = template.render(ModuleContext {
        crate_path: &options.crate_path,
        families,
    })?;

    Ok(output)
}
