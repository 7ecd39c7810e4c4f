//! String-keyed lookups over the icon table.
//!
//! For callers that hold identifiers as text (config files, serialized UI state,
//! bindings). Typed callers should use [`IconName`] directly.
//!
//! The `_invalid` sentinel means "no icon selected": its ligature and filename are
//! both empty. Any other unknown identifier is a defect in the caller and is
//! reported as [`IconError::UnknownVariant`].

use std::collections::HashMap;
use std::iter;
use std::sync::LazyLock;

use crate::error::IconError;
use crate::icon::IconName;

/// Identifier of the "no icon selected" entry.
pub const SENTINEL_IDENTIFIER: &str = "_invalid";

static INDEX: LazyLock<HashMap<&'static str, IconName>> = LazyLock::new(|| {
    let index: HashMap<_, _> = IconName::all().map(|icon| (icon.identifier(), icon)).collect();
    tracing::debug!(entries = index.len(), "Built icon identifier index");
    index
});

/// Resolve a real icon by identifier. The sentinel resolves to `None`.
pub(crate) fn resolve(identifier: &str) -> Option<IconName> {
    INDEX.get(identifier).copied()
}

/// Parse an identifier, mapping the sentinel to `None`.
pub fn parse(identifier: &str) -> Result<Option<IconName>, IconError> {
    if identifier == SENTINEL_IDENTIFIER {
        return Ok(None);
    }

    match resolve(identifier) {
        Some(icon) => Ok(Some(icon)),
        None => {
            tracing::warn!(identifier, "Unknown icon identifier");
            Err(IconError::unknown_variant(identifier))
        }
    }
}

/// Get the ligature for an identifier. The sentinel yields `""`.
pub fn ligature_of(identifier: &str) -> Result<&'static str, IconError> {
    parse(identifier).map(ligature_or_unset)
}

/// Get the asset filename for an identifier. The sentinel yields `""`.
pub fn filename_of(identifier: &str) -> Result<&'static str, IconError> {
    parse(identifier).map(filename_or_unset)
}

/// Get the ligature, or `""` when no icon is selected.
pub fn ligature_or_unset(icon: Option<IconName>) -> &'static str {
    icon.map_or("", IconName::ligature)
}

/// Get the filename, or `""` when no icon is selected.
pub fn filename_or_unset(icon: Option<IconName>) -> &'static str {
    icon.map_or("", IconName::filename)
}

/// Fail-closed ligature lookup.
///
/// Unknown identifiers trip a debug assertion; release builds log the error and
/// return `""`.
pub fn ligature_or_empty(identifier: &str) -> &'static str {
    fail_closed(ligature_of(identifier))
}

/// Fail-closed filename lookup. Same contract as [`ligature_or_empty`].
pub fn filename_or_empty(identifier: &str) -> &'static str {
    fail_closed(filename_of(identifier))
}

fn fail_closed(result: Result<&'static str, IconError>) -> &'static str {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "Icon lookup failed; returning empty string");
            debug_assert!(false, "{e}");
            ""
        }
    }
}

/// Iterate every identifier: the sentinel first, then every icon in export order.
pub fn all_identifiers() -> impl Iterator<Item = &'static str> + Clone {
    iter::once(SENTINEL_IDENTIFIER).chain(IconName::all().map(IconName::identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_identifiers() {
        assert_eq!(ligature_of("accessibilityBold").unwrap(), "\u{f101}");
        assert_eq!(filename_of("accessibilityBold").unwrap(), "accessibility-bold");
        assert_eq!(ligature_of("zoomOutRegular").unwrap(), "\u{f953}");
        assert_eq!(filename_of("zoomOutRegular").unwrap(), "zoom-out-regular");
    }

    #[test]
    fn test_lookup_verbatim_filenames() {
        assert_eq!(filename_of("file3DBold").unwrap(), "file-3D-bold");
        assert_eq!(filename_of("chPSearchBold").unwrap(), "ch-p-search-bold");
    }

    #[test]
    fn test_lookup_sentinel() {
        assert_eq!(ligature_of(SENTINEL_IDENTIFIER).unwrap(), "");
        assert_eq!(filename_of(SENTINEL_IDENTIFIER).unwrap(), "");
        assert_eq!(parse(SENTINEL_IDENTIFIER).unwrap(), None);
        assert_eq!(ligature_or_empty(SENTINEL_IDENTIFIER), "");
    }

    #[test]
    fn test_lookup_unknown_identifier() {
        let err = ligature_of("notAnIcon").unwrap_err();
        assert!(err.is_unknown_variant());
        assert!(filename_of("").unwrap_err().is_unknown_variant());
        // Lookups are case-sensitive.
        assert!(parse("AccessibilityBold").is_err());
    }

    #[test]
    fn test_unset_helpers() {
        assert_eq!(ligature_or_unset(None), "");
        assert_eq!(filename_or_unset(None), "");
        assert_eq!(ligature_or_unset(Some(IconName::ZoomInBold)), IconName::ZoomInBold.ligature());
        assert_eq!(filename_or_unset(Some(IconName::ZoomInBold)), "zoom-in-bold");
    }

    #[test]
    fn test_fail_closed_known() {
        assert_eq!(ligature_or_empty("adminBold"), IconName::AdminBold.ligature());
        assert_eq!(filename_or_empty("adminBold"), "admin-bold");
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "Unknown icon identifier"))]
    fn test_fail_closed_unknown() {
        assert_eq!(filename_or_empty("notAnIcon"), "");
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "Unknown icon identifier"))]
    fn test_fail_closed_unknown_ligature() {
        assert_eq!(ligature_or_empty("notAnIcon"), "");
    }

    #[test]
    fn test_all_identifiers() {
        let identifiers: Vec<_> = all_identifiers().collect();
        assert_eq!(identifiers.len(), IconName::COUNT + 1);
        assert_eq!(identifiers[0], SENTINEL_IDENTIFIER);
        assert_eq!(identifiers[1], "accessibilityBold");
        assert_eq!(identifiers.last(), Some(&"zoomOutRegular"));
        assert_eq!(identifiers, all_identifiers().collect::<Vec<_>>());
    }
}
