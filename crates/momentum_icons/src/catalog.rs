//! Gallery and font-face catalog export.
//!
//! Builds a serializable listing of the icon table for asset pipelines and
//! icon gallery pages.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IconError;
use crate::icon::IconName;
use crate::lookup::SENTINEL_IDENTIFIER;

/// Catalog export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Extension appended to each filename to form the asset name
    pub asset_extension: String,
    /// Optional directory prefix for asset paths
    pub asset_dir: Option<String>,
    /// Whether to list the `_invalid` sentinel as the first entry
    pub include_sentinel: bool,
    /// Font family name, also used as the CSS class prefix
    pub font_family: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            asset_extension: "svg".to_string(),
            asset_dir: None,
            include_sentinel: false,
            font_family: "momentum-ui-icons-rebrand".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, IconError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            IconError::config_with_source(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "Loaded catalog config");
        Ok(config)
    }

    /// Check that `font_family` can be used as a CSS class prefix.
    pub fn validate(&self) -> Result<(), IconError> {
        if !is_css_identifier(&self.font_family) {
            return Err(IconError::config(format!(
                "font_family {:?} is not a valid CSS identifier",
                self.font_family
            )));
        }
        Ok(())
    }

    /// Set the asset extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.asset_extension = extension.into();
        self
    }

    /// Set the asset directory prefix.
    pub fn with_asset_dir(mut self, dir: impl Into<String>) -> Self {
        self.asset_dir = Some(dir.into());
        self
    }

    fn asset_path(&self, icon: IconName) -> String {
        let name = icon.asset_name(&self.asset_extension);
        match self.asset_dir.as_deref() {
            None | Some("") => name,
            Some(dir) if dir.ends_with('/') => format!("{dir}{name}"),
            Some(dir) => format!("{dir}/{name}"),
        }
    }
}

/// `[A-Za-z_-][A-Za-z0-9_-]*`
fn is_css_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '-');
    first_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Symbolic identifier
    pub identifier: &'static str,
    /// Codepoint in `U+XXXX` notation, empty for the sentinel
    pub codepoint: String,
    /// Ligature string
    pub ligature: &'static str,
    /// Asset basename
    pub filename: &'static str,
    /// Asset path with extension, empty for the sentinel
    pub asset: String,
}

impl CatalogEntry {
    fn sentinel() -> Self {
        Self {
            identifier: SENTINEL_IDENTIFIER,
            codepoint: String::new(),
            ligature: "",
            filename: "",
            asset: String::new(),
        }
    }

    fn from_icon(icon: IconName, config: &CatalogConfig) -> Self {
        Self {
            identifier: icon.identifier(),
            codepoint: format!("U+{:04X}", u32::from(icon.codepoint())),
            ligature: icon.ligature(),
            filename: icon.filename(),
            asset: config.asset_path(icon),
        }
    }
}

/// Listing of the whole icon table in export order.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    /// Font family the ligatures belong to
    pub font_family: String,
    /// Rows in export order
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from the icon table.
    pub fn build(config: &CatalogConfig) -> Self {
        let sentinel = config.include_sentinel.then(CatalogEntry::sentinel);
        let entries: Vec<_> = sentinel
            .into_iter()
            .chain(IconName::all().map(|icon| CatalogEntry::from_icon(icon, config)))
            .collect();

        tracing::info!(entries = entries.len(), font_family = %config.font_family, "Built icon catalog");
        Self { font_family: config.font_family.clone(), entries }
    }

    /// Find the entry for an identifier.
    pub fn find(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.identifier == identifier)
    }

    /// Serialize as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, IconError> {
        let json =
            if pretty { serde_json::to_string_pretty(self)? } else { serde_json::to_string(self)? };
        Ok(json)
    }

    /// Render one `::before` rule per icon, keyed by filename.
    ///
    /// The sentinel has no glyph and is skipped.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for entry in self.entries.iter().filter(|e| !e.ligature.is_empty()) {
            let code = entry.codepoint.trim_start_matches("U+").to_ascii_lowercase();
            css.push_str(&format!(
                ".{}-{}::before {{ content: \"\\{}\"; }}\n",
                self.font_family, entry.filename, code
            ));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_catalog_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.asset_extension, "svg");
        assert!(!config.include_sentinel);
        assert!(config.asset_dir.is_none());
    }

    #[test]
    fn test_catalog_build() {
        let catalog = Catalog::build(&CatalogConfig::default());
        assert_eq!(catalog.entries.len(), IconName::COUNT);

        let first = &catalog.entries[0];
        assert_eq!(first.identifier, "accessibilityBold");
        assert_eq!(first.codepoint, "U+F101");
        assert_eq!(first.asset, "accessibility-bold.svg");
    }

    #[test]
    fn test_catalog_with_sentinel() {
        let config = CatalogConfig { include_sentinel: true, ..Default::default() };
        let catalog = Catalog::build(&config);
        assert_eq!(catalog.entries.len(), IconName::COUNT + 1);
        assert_eq!(catalog.entries[0].identifier, SENTINEL_IDENTIFIER);
        assert!(catalog.entries[0].asset.is_empty());
    }

    #[test]
    fn test_catalog_asset_dir() {
        let config = CatalogConfig::default().with_extension("pdf").with_asset_dir("icons/");
        let catalog = Catalog::build(&config);
        let entry = catalog.find("zoomOutRegular").unwrap();
        assert_eq!(entry.asset, "icons/zoom-out-regular.pdf");
        assert_eq!(entry.codepoint, "U+F953");
        assert!(catalog.find("notAnIcon").is_none());
    }

    #[test]
    fn test_catalog_root_asset_dir() {
        let config = CatalogConfig::default().with_asset_dir("/");
        let catalog = Catalog::build(&config);
        assert_eq!(catalog.entries[0].asset, "/accessibility-bold.svg");

        let config = CatalogConfig::default().with_asset_dir("assets");
        let catalog = Catalog::build(&config);
        assert_eq!(catalog.entries[0].asset, "assets/accessibility-bold.svg");
    }

    #[test]
    fn test_config_validate_font_family() {
        let valid = ["momentum-ui-icons-rebrand", "MomentumIcons", "_icons", "-x"];
        for font_family in valid {
            let config = CatalogConfig { font_family: font_family.into(), ..Default::default() };
            assert!(config.validate().is_ok(), "{font_family}");
        }

        let invalid = ["", "Momentum Icons", "1icons", "icons.rebrand", "icônes"];
        for font_family in invalid {
            let config = CatalogConfig { font_family: font_family.into(), ..Default::default() };
            assert!(config.validate().is_err(), "{font_family}");
        }
    }

    #[test]
    fn test_catalog_json() {
        let catalog = Catalog::build(&CatalogConfig::default());
        let json = catalog.to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["font_family"], "momentum-ui-icons-rebrand");
        assert_eq!(value["entries"][0]["filename"], "accessibility-bold");
        assert_eq!(value["entries"][0]["ligature"], "\u{f101}");
    }

    #[test]
    fn test_catalog_css() {
        let config = CatalogConfig { include_sentinel: true, ..Default::default() };
        let css = Catalog::build(&config).to_css();
        assert_eq!(css.lines().count(), IconName::COUNT);
        assert_eq!(
            css.lines().next().unwrap(),
            ".momentum-ui-icons-rebrand-accessibility-bold::before { content: \"\\f101\"; }"
        );
    }

    #[test]
    fn test_config_load() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"asset_extension": "pdf", "include_sentinel": true}}"#).unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.asset_extension, "pdf");
        assert!(config.include_sentinel);
        assert_eq!(config.font_family, "momentum-ui-icons-rebrand");
    }

    #[test]
    fn test_config_load_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = CatalogConfig::load(file.path()).unwrap_err();
        assert_eq!(err.category(), "Config");

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"font_family": " "}}"#).unwrap();
        assert!(CatalogConfig::load(file.path()).is_err());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"font_family": "Momentum Icons"}}"#).unwrap();
        let err = CatalogConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a valid CSS identifier"));

        let missing = CatalogConfig::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(missing, IconError::Config { .. }));
    }
}
