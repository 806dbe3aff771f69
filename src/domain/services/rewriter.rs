//! Content Rewriter Domain Service
//!
//! Turns a draft's text into what the static site expects. Both rules are
//! literal substring transforms; nothing here understands markdown.

use crate::domain::value_objects::RewriteRule;

const EMBED_OPEN: &str = "![[";
const EMBED_CLOSE: &str = "]]";

/// Apply `rule` to the whole post text.
pub fn rewrite_content(text: &str, rule: &RewriteRule) -> String {
    match rule {
        RewriteRule::WikiEmbed { url_prefix } => rewrite_wiki_embeds(text, url_prefix),
        RewriteRule::FolderPrefix {
            local_folder,
            url_prefix,
        } => rewrite_folder_prefix(text, local_folder, url_prefix),
    }
}

/// `![[NAME]]` -> `![](PREFIX/NAME)`.
///
/// Only the `]]` closing an image embed is replaced; ordinary `[[links]]`
/// are left alone. An embed with no closing `]]` is copied verbatim.
fn rewrite_wiki_embeds(text: &str, url_prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(EMBED_OPEN) {
        out.push_str(&rest[..start]);
        let inner = &rest[start + EMBED_OPEN.len()..];
        match inner.find(EMBED_CLOSE) {
            Some(end) => {
                out.push_str("![](");
                out.push_str(url_prefix);
                out.push('/');
                out.push_str(&inner[..end]);
                out.push(')');
                rest = &inner[end + EMBED_CLOSE.len()..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// `LOCAL/` -> `PREFIX/`
fn rewrite_folder_prefix(text: &str, local_folder: &str, url_prefix: &str) -> String {
    if local_folder.is_empty() {
        return text.to_string();
    }
    text.replace(&format!("{local_folder}/"), &format!("{url_prefix}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::RewriteMode;

    fn wiki(prefix: &str) -> RewriteRule {
        RewriteRule::new(RewriteMode::WikiEmbed, Some(prefix), "assets")
    }

    #[test]
    fn wiki_embed_becomes_markdown_image() {
        let out = rewrite_content("Intro\n![[hello-1.png]]\nOutro", &wiki("/img"));
        assert_eq!(out, "Intro\n![](/img/hello-1.png)\nOutro");
    }

    #[test]
    fn every_embed_is_rewritten() {
        let out = rewrite_content("![[a.png]] and ![[b.jpg]]", &wiki("/img/"));
        assert_eq!(out, "![](/img/a.png) and ![](/img/b.jpg)");
    }

    #[test]
    fn plain_wiki_links_are_untouched() {
        let text = "See [[Other Note]] and ![[pic.png]].";
        let out = rewrite_content(text, &wiki("/img"));
        assert_eq!(out, "See [[Other Note]] and ![](/img/pic.png).");
    }

    #[test]
    fn unterminated_embed_is_copied_verbatim() {
        let text = "broken ![[pic.png and more";
        assert_eq!(rewrite_content(text, &wiki("/img")), text);
    }

    #[test]
    fn text_without_embeds_is_unchanged() {
        let text = "# Title\n\nNo images here. ![alt](x.png)";
        assert_eq!(rewrite_content(text, &wiki("/img")), text);
    }

    #[test]
    fn folder_prefix_replaces_local_folder() {
        let rule = RewriteRule::new(RewriteMode::FolderPrefix, Some("/static/img"), "assets");
        let out = rewrite_content("![cover](assets/cover.png) assets/b.png", &rule);
        assert_eq!(out, "![cover](/static/img/cover.png) /static/img/b.png");
    }

    #[test]
    fn folder_prefix_without_folder_is_noop() {
        let rule = RewriteRule::new(RewriteMode::FolderPrefix, None, "");
        assert_eq!(rewrite_content("assets/x.png", &rule), "assets/x.png");
    }
}
