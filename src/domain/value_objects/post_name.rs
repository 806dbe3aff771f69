//! Post file name normalization
//!
//! A draft named `Hello World.md` is rendered into the site as
//! `hello-world.md`. Staged state is derived by comparing normalized names,
//! so this function must stay deterministic and idempotent.

/// Lowercase the name and replace each space with a hyphen.
///
/// Nothing else changes: punctuation, other whitespace and the extension are
/// kept as-is.
pub fn normalize_post_name(file_name: &str) -> String {
    file_name.to_lowercase().replace(' ', "-")
}
