//! Property tests for list selection input.

use proptest::prelude::*;

use lazydraft::{LazydraftError, Selection};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every number in [1, len] selects index number - 1.
    #[test]
    fn property_in_range_selects(len in 1usize..200, pick in 0usize..200) {
        let number = pick % len + 1;
        let selection = Selection::parse(&number.to_string(), len).unwrap();
        prop_assert_eq!(selection.index(), number - 1);
    }

    /// PROPERTY: numbers outside [1, len] are rejected.
    #[test]
    fn property_out_of_range_rejected(len in 0usize..200, number in -1000i64..1000) {
        prop_assume!(number < 1 || number as usize > len);
        let result = Selection::parse(&number.to_string(), len);
        let rejected = matches!(result, Err(LazydraftError::InvalidChoice { .. }));
        prop_assert!(rejected);
    }

    /// PROPERTY: non-numeric input never panics and is always rejected.
    #[test]
    fn property_non_numeric_rejected(input in "[^0-9]{0,16}", len in 0usize..50) {
        prop_assert!(Selection::parse(&input, len).is_err());
    }
}
