//! Icon identifiers for the Momentum UI rebrand icon set.
//!
//! Provides the [`IconName`] enum with every glyph in the icon font, and the
//! per-icon ligature codepoint and asset filename that UI layers use to render it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IconError;
use crate::lookup;

/// One row of the icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconRecord {
    /// Symbolic camelCase name, e.g. `accessibilityBold`.
    pub identifier: &'static str,
    /// Single private-use-area scalar rendered with the icon font.
    pub ligature: &'static str,
    /// Kebab-case basename of the standalone vector asset.
    pub filename: &'static str,
}

/// Expands the exported rows into the [`IconName`] enum and its backing arrays.
///
/// The enum discriminant is the row index, so every lookup is a single array access.
macro_rules! icon_table {
    ($($variant:ident => $identifier:literal, $ligature:literal, $filename:literal;)*) => {
        /// All glyphs in the rebrand icon font, in export order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconName {
            $(
                #[doc = concat!("`", $identifier, "` (`", $filename, "`)")]
                $variant,
            )*
        }

        pub(super) const COUNT: usize = [$(stringify!($variant)),*].len();

        pub(super) static ALL: [IconName; COUNT] = [$(IconName::$variant),*];

        pub(super) static RECORDS: [super::IconRecord; COUNT] = [
            $(super::IconRecord {
                identifier: $identifier,
                ligature: $ligature,
                filename: $filename,
            },)*
        ];
    };
}

mod table;

pub use table::IconName;

impl IconName {
    /// Number of glyphs in the table.
    pub const COUNT: usize = table::COUNT;

    /// Iterate every icon in export order.
    ///
    /// The iterator can be recreated any number of times and always yields the same sequence.
    pub fn all() -> impl ExactSizeIterator<Item = IconName> + Clone {
        table::ALL.iter().copied()
    }

    /// Get the full table row for this icon.
    pub fn record(self) -> &'static IconRecord {
        &table::RECORDS[self as usize]
    }

    /// Get the symbolic identifier, e.g. `accessibilityBold`.
    pub fn identifier(self) -> &'static str {
        self.record().identifier
    }

    /// Get the ligature string to render with the icon font.
    pub fn ligature(self) -> &'static str {
        self.record().ligature
    }

    /// Get the ligature as a `char`.
    pub fn codepoint(self) -> char {
        // Every row carries exactly one scalar; the table tests hold this.
        self.ligature().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Get the asset basename for loading from disk or a bundle.
    pub fn filename(self) -> &'static str {
        self.record().filename
    }

    /// Get the asset file name with the given extension, e.g. `zoom-in-bold.svg`.
    pub fn asset_name(self, extension: &str) -> String {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            self.filename().to_string()
        } else {
            format!("{}.{}", self.filename(), extension)
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for IconName {
    type Err = IconError;

    /// Parse an identifier. The `_invalid` sentinel is not an icon and is rejected;
    /// use [`lookup::parse`] to accept it as "no icon".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup::resolve(s).ok_or_else(|| IconError::unknown_variant(s))
    }
}

impl Serialize for IconName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for IconName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        identifier.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_identifiers() {
        assert_eq!(IconName::AccessibilityBold.identifier(), "accessibilityBold");
        assert_eq!(IconName::ZoomOutRegular.identifier(), "zoomOutRegular");
        assert_eq!(IconName::ChPSearchBold.identifier(), "chPSearchBold");
    }

    #[test]
    fn test_icon_ligatures() {
        assert_eq!(IconName::AccessibilityBold.ligature(), "\u{f101}");
        assert_eq!(IconName::ZoomOutRegular.ligature(), "\u{f953}");
        assert_eq!(IconName::AccessibilityBold.codepoint(), '\u{f101}');
    }

    #[test]
    fn test_icon_filenames() {
        assert_eq!(IconName::AccessibilityBold.filename(), "accessibility-bold");
        assert_eq!(IconName::ZoomOutRegular.filename(), "zoom-out-regular");
        assert_eq!(IconName::File3DBold.filename(), "file-3D-bold");
        assert_eq!(IconName::ChPSearchBold.filename(), "ch-p-search-bold");
    }

    #[test]
    fn test_icon_asset_name() {
        assert_eq!(IconName::ZoomInBold.asset_name("svg"), "zoom-in-bold.svg");
        assert_eq!(IconName::ZoomInBold.asset_name(".pdf"), "zoom-in-bold.pdf");
        assert_eq!(IconName::ZoomInBold.asset_name(""), "zoom-in-bold");
    }

    #[test]
    fn test_icon_order() {
        let mut icons = IconName::all();
        assert_eq!(icons.len(), IconName::COUNT);
        assert_eq!(icons.next(), Some(IconName::AccessibilityBold));
        assert_eq!(IconName::all().last(), Some(IconName::ZoomOutRegular));
        assert!(IconName::AccessibilityBold < IconName::ZoomOutRegular);
    }

    #[test]
    fn test_icon_display_and_parse() {
        assert_eq!(IconName::AdminLight.to_string(), "adminLight");
        assert_eq!("adminLight".parse::<IconName>().unwrap(), IconName::AdminLight);
        assert!("_invalid".parse::<IconName>().is_err());
        assert!("AdminLight".parse::<IconName>().is_err());
    }

    #[test]
    fn test_icon_serde() {
        let json = serde_json::to_string(&IconName::WorkphoneBold).unwrap();
        assert_eq!(json, "\"workphoneBold\"");

        let icon: IconName = serde_json::from_str("\"workphoneBold\"").unwrap();
        assert_eq!(icon, IconName::WorkphoneBold);

        let err = serde_json::from_str::<IconName>("\"workphoneHeavy\"").unwrap_err();
        assert!(err.to_string().contains("workphoneHeavy"));
    }

    #[test]
    fn test_icon_record() {
        let record = IconName::AlarmFilled.record();
        assert_eq!(record.identifier, "alarmFilled");
        assert_eq!(record.filename, "alarm-filled");
        assert_eq!(record.ligature, IconName::AlarmFilled.ligature());
    }
}
