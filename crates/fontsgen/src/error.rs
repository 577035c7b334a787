//! Parsing errors.

use thiserror::Error;

/// Error returned when a text style name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTextStyleError {
    /// The name is not one of the canonical text style tokens.
    #[error("unknown text style '{0}'")]
    UnknownTextStyle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_text_style_display() {
        let err = ParseTextStyleError::UnknownTextStyle("headline".to_string());
        assert_eq!(err.to_string(), "unknown text style 'headline'");
    }
}
