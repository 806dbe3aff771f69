//! Property tests for the content rewriter.

use proptest::prelude::*;

use lazydraft::domain::value_objects::RewriteMode;
use lazydraft::{rewrite_content, RewriteRule};

fn wiki() -> RewriteRule {
    RewriteRule::new(RewriteMode::WikiEmbed, Some("/img"), "assets")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: text without an embed opener passes through unchanged.
    #[test]
    fn property_text_without_embeds_is_unchanged(text in "[^!]{0,200}") {
        prop_assert_eq!(rewrite_content(&text, &wiki()), text);
    }

    /// PROPERTY: a single embed becomes a markdown image with the prefix.
    #[test]
    fn property_embed_becomes_image(
        before in "[a-z \n]{0,40}",
        name in "[A-Za-z0-9_-]{1,20}\\.png",
        after in "[a-z \n]{0,40}",
    ) {
        let text = format!("{}![[{}]]{}", before, name, after);
        let expected = format!("{}![](/img/{}){}", before, name, after);
        prop_assert_eq!(rewrite_content(&text, &wiki()), expected);
    }

    /// PROPERTY: the rewriter never panics on arbitrary input, for either rule.
    #[test]
    fn property_rewrite_never_panics(text in "(?s).{0,256}") {
        let _ = rewrite_content(&text, &wiki());
        let folder = RewriteRule::new(RewriteMode::FolderPrefix, None, "assets");
        let _ = rewrite_content(&text, &folder);
    }

    /// PROPERTY: every `assets/` occurrence becomes `/img/`.
    #[test]
    fn property_folder_prefix_replaces_all(
        parts in proptest::collection::vec("[a-z]{0,8}", 1..6),
    ) {
        let text = parts.join("assets/");
        let rule = RewriteRule::new(RewriteMode::FolderPrefix, Some("/img"), "assets");
        let rewritten = rewrite_content(&text, &rule);
        prop_assert_eq!(rewritten, parts.join("/img/"));
    }
}
