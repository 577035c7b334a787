//! The fixed text-style table.
//!
//! Every generated family exposes one accessor per [`StyleEntry`], in the
//! order of [`STYLE_TABLE`]: from the largest text role down to the smallest.

use proc_macro2::{Ident, Span};

/// One row of the style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    /// Canonical accessor name (`largeTitle`, `title2`, ...).
    pub accessor_name: &'static str,
    /// Point size baked into the generated accessor.
    pub point_size: u16,
    /// Name of the text-style token the accessor scales with.
    pub style_token: &'static str,
}

impl StyleEntry {
    const fn new(accessor_name: &'static str, point_size: u16, style_token: &'static str) -> Self {
        Self {
            accessor_name,
            point_size,
            style_token,
        }
    }

    /// The snake_case function name used for this accessor in Rust output.
    pub fn rust_name(&self) -> String {
        to_snake_case(self.accessor_name)
    }

    /// The accessor as a Rust identifier.
    pub fn rust_ident(&self) -> Ident {
        Ident::new(&self.rust_name(), Span::call_site())
    }

    /// The `TextStyle` variant name for this entry's style token.
    pub fn token_name(&self) -> String {
        to_pascal_case(self.style_token)
    }

    /// The `TextStyle` variant as a Rust identifier.
    pub fn token_ident(&self) -> Ident {
        Ident::new(&self.token_name(), Span::call_site())
    }
}

/// The ten text styles, largest role first.
pub static STYLE_TABLE: [StyleEntry; 10] = [
    StyleEntry::new("largeTitle", 34, "largeTitle"),
    StyleEntry::new("title", 28, "title"),
    StyleEntry::new("title2", 22, "title2"),
    StyleEntry::new("title3", 20, "title3"),
    StyleEntry::new("body", 17, "body"),
    StyleEntry::new("callout", 16, "callout"),
    StyleEntry::new("subheadline", 15, "subheadline"),
    StyleEntry::new("footnote", 13, "footnote"),
    StyleEntry::new("caption", 12, "caption"),
    StyleEntry::new("caption2", 11, "caption2"),
];

/// Returns the style table as a slice.
pub fn style_table() -> &'static [StyleEntry] {
    &STYLE_TABLE
}

/// Convert a camelCase name to snake_case.
fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_was_lower = false;
        } else if c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c);
            prev_was_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    result
}

/// Convert a camelCase name to PascalCase.
fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_order_and_sizes() {
        let rows: Vec<(&str, u16)> = STYLE_TABLE
            .iter()
            .map(|e| (e.accessor_name, e.point_size))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("largeTitle", 34),
                ("title", 28),
                ("title2", 22),
                ("title3", 20),
                ("body", 17),
                ("callout", 16),
                ("subheadline", 15),
                ("footnote", 13),
                ("caption", 12),
                ("caption2", 11),
            ]
        );
    }

    #[test]
    fn test_accessor_names_unique() {
        let names: HashSet<_> = STYLE_TABLE.iter().map(|e| e.accessor_name).collect();
        assert_eq!(names.len(), STYLE_TABLE.len());
    }

    #[test]
    fn test_tokens_match_accessor_names() {
        for entry in style_table() {
            assert_eq!(entry.accessor_name, entry.style_token);
        }
    }

    #[test]
    fn test_sizes_strictly_decrease() {
        for pair in STYLE_TABLE.windows(2) {
            assert!(pair[0].point_size > pair[1].point_size);
        }
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("largeTitle"), "large_title");
        assert_eq!(to_snake_case("title2"), "title2");
        assert_eq!(to_snake_case("subheadline"), "subheadline");
        assert_eq!(to_snake_case("ofSize"), "of_size");
        assert_eq!(to_snake_case("my-field"), "my_field");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("largeTitle"), "LargeTitle");
        assert_eq!(to_pascal_case("caption2"), "Caption2");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_entry_idents() {
        let entry = &STYLE_TABLE[0];
        assert_eq!(entry.rust_ident().to_string(), "large_title");
        assert_eq!(entry.token_ident().to_string(), "LargeTitle");
    }
}
