//! Whole-table verification tests.
//!
//! These tests check properties that must hold for every row of the exported table:
//! - Every icon has a non-empty ligature and filename; the sentinel has neither
//! - Ligatures are unique and each is one scalar in U+F101..=U+F953
//! - Filenames are unique and hyphen-delimited
//! - Identifiers round-trip through the string lookups
//! - Enumeration is stable across calls

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::icon::IconName;
    use crate::lookup::{self, SENTINEL_IDENTIFIER};

    /// Filenames whose uppercase `D` is kept exactly as exported.
    const VERBATIM_FILENAMES: [&str; 4] =
        ["file-3D-bold", "file-3D-filled", "file-3D-light", "file-3D-regular"];

    fn is_kebab_case(filename: &str) -> bool {
        filename.split('-').all(|part| {
            !part.is_empty()
                && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
    }

    // =========================================================================
    // Totality
    // =========================================================================

    #[test]
    fn test_every_identifier_has_values() {
        for identifier in lookup::all_identifiers() {
            let ligature = lookup::ligature_of(identifier).unwrap();
            let filename = lookup::filename_of(identifier).unwrap();

            if identifier == SENTINEL_IDENTIFIER {
                assert!(ligature.is_empty());
                assert!(filename.is_empty());
            } else {
                assert!(!ligature.is_empty(), "{identifier} has no ligature");
                assert!(!filename.is_empty(), "{identifier} has no filename");
            }
        }
    }

    // =========================================================================
    // Uniqueness
    // =========================================================================

    #[test]
    fn test_identifiers_are_unique() {
        let identifiers: HashSet<_> = IconName::all().map(IconName::identifier).collect();
        assert_eq!(identifiers.len(), IconName::COUNT);
        assert!(!identifiers.contains(SENTINEL_IDENTIFIER));
    }

    #[test]
    fn test_ligatures_are_unique() {
        let ligatures: HashSet<_> = IconName::all().map(IconName::ligature).collect();
        assert_eq!(ligatures.len(), IconName::COUNT);
    }

    #[test]
    fn test_filenames_are_unique() {
        let filenames: HashSet<_> = IconName::all().map(IconName::filename).collect();
        assert_eq!(filenames.len(), IconName::COUNT);
    }

    // =========================================================================
    // Format
    // =========================================================================

    #[test]
    fn test_ligatures_are_single_pua_scalars() {
        for icon in IconName::all() {
            let mut chars = icon.ligature().chars();
            let c = chars.next().unwrap();
            assert!(chars.next().is_none(), "{icon} ligature has more than one scalar");
            assert!(('\u{f101}'..='\u{f953}').contains(&c), "{icon} ligature out of range");
            assert_eq!(icon.codepoint(), c);
        }
    }

    #[test]
    fn test_ligatures_follow_export_order() {
        for (index, icon) in IconName::all().enumerate() {
            assert_eq!(u32::from(icon.codepoint()), 0xf101 + index as u32, "{icon}");
        }
    }

    #[test]
    fn test_filenames_are_hyphen_delimited() {
        for icon in IconName::all() {
            let filename = icon.filename();
            if VERBATIM_FILENAMES.contains(&filename) {
                assert!(is_kebab_case(&filename.to_ascii_lowercase()));
                continue;
            }
            assert!(is_kebab_case(filename), "{icon} has malformed filename {filename:?}");
        }
    }

    #[test]
    fn test_kebab_case_checker() {
        assert!(is_kebab_case("zoom-in-bold"));
        assert!(is_kebab_case("dx70-bold"));
        assert!(!is_kebab_case("-zoom"));
        assert!(!is_kebab_case("zoom--in"));
        assert!(!is_kebab_case("zoom-"));
        assert!(!is_kebab_case("file-3D-bold"));
    }

    // =========================================================================
    // Round trips and determinism
    // =========================================================================

    #[test]
    fn test_identifiers_resolve_to_their_icon() {
        for icon in IconName::all() {
            assert_eq!(icon.identifier().parse::<IconName>().unwrap(), icon);
            assert_eq!(lookup::parse(icon.identifier()).unwrap(), Some(icon));
            assert_eq!(lookup::ligature_of(icon.identifier()).unwrap(), icon.ligature());
            assert_eq!(lookup::filename_of(icon.identifier()).unwrap(), icon.filename());
        }
    }

    #[test]
    fn test_lookups_are_deterministic() {
        assert_eq!(
            lookup::ligature_of("accessibilityBold").unwrap(),
            lookup::ligature_of("accessibilityBold").unwrap()
        );
        assert_eq!(
            lookup::filename_of("file3DBold").unwrap(),
            lookup::filename_of("file3DBold").unwrap()
        );
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let first: Vec<_> = lookup::all_identifiers().collect();
        let second: Vec<_> = lookup::all_identifiers().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), IconName::COUNT + 1);

        let icons: Vec<_> = IconName::all().collect();
        assert_eq!(icons, IconName::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_lookups_from_many_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    lookup::all_identifiers().filter_map(|id| lookup::parse(id).ok()).count()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), IconName::COUNT + 1);
        }
    }
}
