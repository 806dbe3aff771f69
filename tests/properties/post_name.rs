//! Property tests for post name normalization.

use proptest::prelude::*;

use lazydraft::normalize_post_name;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalizing twice is the same as normalizing once.
    #[test]
    fn property_normalize_is_idempotent(name in "(?s).{0,64}") {
        let once = normalize_post_name(&name);
        prop_assert_eq!(normalize_post_name(&once), once);
    }

    /// PROPERTY: the result never contains a space or an ASCII uppercase letter.
    #[test]
    fn property_normalize_removes_spaces_and_uppercase(name in "[A-Za-z0-9 ._-]{0,64}") {
        let normalized = normalize_post_name(&name);
        prop_assert!(!normalized.contains(' '));
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// PROPERTY: for ASCII names only case and spaces change.
    #[test]
    fn property_normalize_only_touches_case_and_spaces(name in "[A-Za-z0-9 ._-]{0,64}") {
        let normalized = normalize_post_name(&name);
        prop_assert_eq!(normalized.len(), name.len());
        for (a, b) in name.chars().zip(normalized.chars()) {
            if a == ' ' {
                prop_assert_eq!(b, '-');
            } else {
                prop_assert_eq!(b, a.to_ascii_lowercase());
            }
        }
    }
}
