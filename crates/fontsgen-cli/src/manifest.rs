//! Family manifests.
//!
//! A manifest lists the font families to generate, in YAML:
//!
//! ```yaml
//! crate_path: fontsgen   # optional, defaults to ::fontsgen
//! families:
//!   - type_name: Zapfino
//!     font_name: Zapfino
//!   - type_name: Avenir
//!     font_name: Avenir Next
//! ```

use anyhow::{Context, Result};
use fontsgen_codegen::{FamilySpec, RenderOptions};
use serde::Deserialize;
use std::path::Path;

/// A parsed manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Path to the runtime crate in generated code.
    #[serde(default)]
    pub crate_path: Option<String>,
    /// Families, rendered in order.
    #[serde(default)]
    pub families: Vec<FamilyEntry>,
}

/// One family in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FamilyEntry {
    pub type_name: String,
    #[serde(default)]
    pub font_name: Option<String>,
}

impl Manifest {
    /// Parses a manifest from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest = Self::from_yaml(&source)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
        log::debug!(
            "loaded {} families from {}",
            manifest.families.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// The families as generator input.
    pub fn family_specs(&self) -> Vec<FamilySpec> {
        self.families
            .iter()
            .map(|entry| FamilySpec {
                type_name: entry.type_name.clone(),
                font_name: entry.font_name.clone(),
            })
            .collect()
    }

    /// Render options, with `override_path` taking precedence over the manifest.
    pub fn render_options(&self, override_path: Option<&str>) -> RenderOptions {
        match override_path.or(self.crate_path.as_deref()) {
            Some(path) => RenderOptions::default().crate_path(path),
            None => RenderOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MANIFEST: &str = r#"
crate_path: fontsgen
families:
  - type_name: Zapfino
    font_name: Zapfino
  - type_name: Avenir
    font_name: Avenir Next
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_yaml(MANIFEST).unwrap();
        assert_eq!(manifest.crate_path.as_deref(), Some("fontsgen"));
        assert_eq!(
            manifest.family_specs(),
            vec![
                FamilySpec::new("Zapfino", "Zapfino"),
                FamilySpec::new("Avenir", "Avenir Next"),
            ]
        );
    }

    #[test]
    fn test_missing_font_name_is_kept_as_none() {
        let manifest = Manifest::from_yaml("families:\n  - type_name: Zapfino\n").unwrap();
        assert_eq!(manifest.families[0].font_name, None);
    }

    #[test]
    fn test_empty_font_name() {
        let manifest =
            Manifest::from_yaml("families:\n  - type_name: Blank\n    font_name: \"\"\n").unwrap();
        assert_eq!(manifest.families[0].font_name.as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let manifest =
            Manifest::from_yaml("families:\n  - type_name: Menlo\n    font_name: Menlo\n    weight: bold\n")
                .unwrap();
        assert_eq!(manifest.families.len(), 1);
    }

    #[test]
    fn test_missing_type_name_fails() {
        assert!(Manifest::from_yaml("families:\n  - font_name: Menlo\n").is_err());
    }

    #[test]
    fn test_render_options_precedence() {
        let manifest = Manifest::from_yaml(MANIFEST).unwrap();
        assert_eq!(manifest.render_options(None).crate_path, "fontsgen");
        assert_eq!(
            manifest.render_options(Some("crate::fonts")).crate_path,
            "crate::fonts"
        );

        let manifest = Manifest::from_yaml("families: []\n").unwrap();
        assert_eq!(manifest.render_options(None), RenderOptions::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();

        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.families.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("fonts.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }
}
