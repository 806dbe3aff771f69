//! Property tests for the derived staged view.

use proptest::prelude::*;

use lazydraft::{compute_staged_view, Draft};

fn draft_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[A-Za-z][A-Za-z0-9 ]{0,12}\\.md", 1..10)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a draft whose rendered name is in the target appears exactly once.
    #[test]
    fn property_staged_draft_listed_once(names in draft_names(), pick in 0usize..10) {
        let drafts: Vec<Draft> = names.iter().map(|n| Draft::new(n.as_str(), "/d")).collect();
        let chosen = &drafts[pick % drafts.len()];
        let target = vec![chosen.target_file_name(), "index.md".to_string()];

        let staged = compute_staged_view(&drafts, &target);
        let hits = staged.iter().filter(|d| d.name() == chosen.name()).count();

        prop_assert_eq!(hits, 1);
    }

    /// PROPERTY: an empty target stages nothing.
    #[test]
    fn property_empty_target_stages_nothing(names in draft_names()) {
        let drafts: Vec<Draft> = names.iter().map(|n| Draft::new(n.as_str(), "/d")).collect();
        prop_assert!(compute_staged_view(&drafts, &[]).is_empty());
    }
}
