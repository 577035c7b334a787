//! Semantic text roles.

use std::str::FromStr;

use crate::error::ParseTextStyleError;

/// A semantic text role that a font scales with.
///
/// Variants are ordered from the largest role to the smallest, matching the
/// accessors generated by [`fonts_generator`](crate::fonts_generator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// The largest title role.
    LargeTitle,
    /// First-level headings.
    Title,
    /// Second-level headings.
    Title2,
    /// Third-level headings.
    Title3,
    /// Running body text.
    Body,
    /// Callouts set off from body text.
    Callout,
    /// Subheadings.
    Subheadline,
    /// Footnotes.
    Footnote,
    /// Standard captions.
    Caption,
    /// Alternate, smaller captions.
    Caption2,
}

impl TextStyle {
    /// All text styles, largest first.
    pub const ALL: [TextStyle; 10] = [
        TextStyle::LargeTitle,
        TextStyle::Title,
        TextStyle::Title2,
        TextStyle::Title3,
        TextStyle::Body,
        TextStyle::Callout,
        TextStyle::Subheadline,
        TextStyle::Footnote,
        TextStyle::Caption,
        TextStyle::Caption2,
    ];

    /// Returns the canonical token name (`largeTitle`, `title2`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TextStyle::LargeTitle => "largeTitle",
            TextStyle::Title => "title",
            TextStyle::Title2 => "title2",
            TextStyle::Title3 => "title3",
            TextStyle::Body => "body",
            TextStyle::Callout => "callout",
            TextStyle::Subheadline => "subheadline",
            TextStyle::Footnote => "footnote",
            TextStyle::Caption => "caption",
            TextStyle::Caption2 => "caption2",
        }
    }

    /// Returns the point size generated accessors use for this style.
    pub fn default_point_size(self) -> f32 {
        match self {
            TextStyle::LargeTitle => 34.0,
            TextStyle::Title => 28.0,
            TextStyle::Title2 => 22.0,
            TextStyle::Title3 => 20.0,
            TextStyle::Body => 17.0,
            TextStyle::Callout => 16.0,
            TextStyle::Subheadline => 15.0,
            TextStyle::Footnote => 13.0,
            TextStyle::Caption => 12.0,
            TextStyle::Caption2 => 11.0,
        }
    }
}

impl std::fmt::Display for TextStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TextStyle {
    type Err = ParseTextStyleError;

    /// Parses a canonical token name such as `largeTitle`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ParseTextStyleError::UnknownTextStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_largest_first() {
        for pair in TextStyle::ALL.windows(2) {
            assert!(pair[0].default_point_size() > pair[1].default_point_size());
        }
    }

    #[test]
    fn test_display_uses_token_name() {
        assert_eq!(TextStyle::LargeTitle.to_string(), "largeTitle");
        assert_eq!(TextStyle::Caption2.to_string(), "caption2");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("subheadline".parse::<TextStyle>(), Ok(TextStyle::Subheadline));
        assert_eq!("title3".parse::<TextStyle>(), Ok(TextStyle::Title3));
    }

    #[test]
    fn test_from_str_rejects_other_casing() {
        let err = "LargeTitle".parse::<TextStyle>().unwrap_err();
        assert_eq!(
            err,
            ParseTextStyleError::UnknownTextStyle("LargeTitle".to_string())
        );
        assert!("large_title".parse::<TextStyle>().is_err());
        assert!("".parse::<TextStyle>().is_err());
    }
}
