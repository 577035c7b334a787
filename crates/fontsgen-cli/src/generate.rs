//! The `generate` and `styles` commands.

use anyhow::{bail, Context, Result};
use fontsgen_codegen::{render_source, style_table, FamilySpec, RenderOptions};
use std::path::Path;

use crate::manifest::Manifest;

/// Where the families to generate come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A YAML manifest file.
    Manifest(std::path::PathBuf),
    /// A single family given on the command line.
    Single {
        type_name: String,
        font_name: Option<String>,
    },
}

/// Renders the module source for `source`.
pub fn render(source: &Source, crate_path: Option<&str>) -> Result<String> {
    let (families, options) = match source {
        Source::Manifest(path) => {
            let manifest = Manifest::load(path)?;
            (manifest.family_specs(), manifest.render_options(crate_path))
        }
        Source::Single {
            type_name,
            font_name,
        } => {
            let family = FamilySpec {
                type_name: type_name.clone(),
                font_name: font_name.clone(),
            };
            let options = match crate_path {
                Some(path) => RenderOptions::default().crate_path(path),
                None => RenderOptions::default(),
            };
            (vec![family], options)
        }
    };

    if families.is_empty() {
        log::warn!("no font families to generate");
    }

    let output = render_source(&families, &options)?;
    log::debug!(
        "rendered {} families with runtime crate {}",
        families.len(),
        options.crate_path
    );
    Ok(output)
}

/// Writes `contents` to `path`, leaving the file alone when it is unchanged.
///
/// Returns `true` if the file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing == contents {
            log::info!("{} is up to date", path.display());
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(true)
}

/// Formats the style table for display.
pub fn styles_listing() -> String {
    let mut listing = String::new();
    for entry in style_table() {
        listing.push_str(&format!(
            "{:<12} {:>3}pt  {}\n",
            entry.rust_name(),
            entry.point_size,
            entry.token_name()
        ));
    }
    listing.push_str(&format!("{:<12} {:>5}  -\n", "of_size", "size"));
    listing
}

/// Checks that either a manifest or a type name was given.
pub fn source_from_args(
    manifest: Option<std::path::PathBuf>,
    type_name: Option<String>,
    font_name: Option<String>,
) -> Result<Source> {
    match (manifest, type_name) {
        (Some(path), _) => Ok(Source::Manifest(path)),
        (None, Some(type_name)) => Ok(Source::Single {
            type_name,
            font_name,
        }),
        (None, None) => bail!("either --manifest or --type-name is required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_family() {
        let source = Source::Single {
            type_name: "Zapfino".to_string(),
            font_name: Some("Zapfino".to_string()),
        };
        let output = render(&source, None).unwrap();
        assert!(output.contains("pub enum Zapfino {}"));
        assert!(output.contains("::fontsgen::TextStyle::LargeTitle"));
    }

    #[test]
    fn test_render_single_family_missing_font_name() {
        let source = Source::Single {
            type_name: "Zapfino".to_string(),
            font_name: None,
        };
        let err = render(&source, None).unwrap_err();
        assert_eq!(err.to_string(), "Font name is required for the macro.");
    }

    #[test]
    fn test_render_crate_path_override() {
        let source = Source::Single {
            type_name: "Menlo".to_string(),
            font_name: Some("Menlo".to_string()),
        };
        let output = render(&source, Some("crate::fonts")).unwrap();
        assert!(output.contains("crate::fonts::Font::fixed(\"Menlo\", size)"));
    }

    #[test]
    fn test_write_if_changed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated").join("fonts.rs");

        assert!(write_if_changed(&path, "// one\n").unwrap());
        assert!(!write_if_changed(&path, "// one\n").unwrap());
        assert!(write_if_changed(&path, "// two\n").unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// two\n");
    }

    #[test]
    fn test_styles_listing() {
        let listing = styles_listing();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("large_title"));
        assert!(lines[0].contains("34pt"));
        assert!(lines[0].ends_with("LargeTitle"));
        assert!(lines[10].starts_with("of_size"));
    }

    #[test]
    fn test_source_from_args() {
        assert_eq!(
            source_from_args(Some("fonts.yaml".into()), None, None).unwrap(),
            Source::Manifest("fonts.yaml".into())
        );
        assert_eq!(
            source_from_args(None, Some("Menlo".into()), None).unwrap(),
            Source::Single {
                type_name: "Menlo".to_string(),
                font_name: None
            }
        );
        assert!(source_from_args(None, None, Some("Menlo".into())).is_err());
    }
}
