//! Font references.

use std::borrow::Cow;

use crate::text_style::TextStyle;

/// A reference to a font family at a given size.
///
/// A font is either *dynamic*, scaling relative to a [`TextStyle`], or
/// *fixed* at its point size.
///
/// # Example
///
/// ```rust
/// use fontsgen::{Font, TextStyle};
///
/// let heading = Font::custom("Zapfino", 34.0, TextStyle::LargeTitle);
/// assert!(heading.is_dynamic());
/// assert_eq!(heading.scaled(1.5), 51.0);
///
/// let label = Font::fixed("Zapfino", 9.0);
/// assert_eq!(label.scaled(1.5), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: Cow<'static, str>,
    size: f32,
    relative_to: Option<TextStyle>,
}

impl Font {
    /// A font that scales with `relative_to`.
    pub fn custom(family: impl Into<Cow<'static, str>>, size: f32, relative_to: TextStyle) -> Self {
        Self {
            family: family.into(),
            size,
            relative_to: Some(relative_to),
        }
    }

    /// A font fixed at `size`.
    pub fn fixed(family: impl Into<Cow<'static, str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            relative_to: None,
        }
    }

    /// The font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The text style this font scales with, if any.
    pub fn relative_to(&self) -> Option<TextStyle> {
        self.relative_to
    }

    /// Returns `true` if the font scales with a text style.
    pub fn is_dynamic(&self) -> bool {
        self.relative_to.is_some()
    }

    /// Returns the point size after applying a user scale factor.
    ///
    /// Only dynamic fonts scale; fixed fonts keep their size.
    pub fn scaled(&self, factor: f32) -> f32 {
        if self.is_dynamic() {
            self.size * factor
        } else {
            self.size
        }
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)?;
        if let Some(style) = self.relative_to {
            write!(f, " ({})", style)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fixed_fonts_ignore_scale(size in 1.0f32..200.0, factor in 0.5f32..4.0) {
            let font = Font::fixed("Menlo", size);
            prop_assert_eq!(font.scaled(factor), size);
        }

        #[test]
        fn dynamic_fonts_scale_linearly(size in 1.0f32..200.0, factor in 0.5f32..4.0) {
            let font = Font::custom("Menlo", size, TextStyle::Body);
            prop_assert_eq!(font.scaled(factor), size * factor);
        }
    }
}
