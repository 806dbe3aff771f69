//! Configuration loading
//!
//! Parsing is best-effort: unknown keys are reported as warnings instead of
//! failing, and an empty file is an empty config.

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{LazydraftError, LazydraftResult};

use super::types::{ProjectsConfig, Settings};

/// Load `projects.yml`, collecting unknown keys as warnings.
pub fn load_projects_with_warnings(
    path: &Path,
) -> LazydraftResult<(ProjectsConfig, Vec<ConfigWarning>)> {
    let content = read_config(path)?.ok_or_else(|| LazydraftError::ConfigMissing {
        path: path.to_path_buf(),
    })?;
    parse_projects(&content, path)
}

/// Parse projects config text. `path` is only used in errors and warnings.
pub fn parse_projects(
    content: &str,
    path: &Path,
) -> LazydraftResult<(ProjectsConfig, Vec<ConfigWarning>)> {
    if is_blank_yaml(content) {
        return Ok((ProjectsConfig::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: ProjectsConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LazydraftError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `settings.yml`. A missing or empty file means no active project.
pub fn load_settings(path: &Path) -> LazydraftResult<Settings> {
    match read_config(path)? {
        Some(content) => parse_settings(&content, path),
        None => Ok(Settings::default()),
    }
}

pub fn parse_settings(content: &str, path: &Path) -> LazydraftResult<Settings> {
    if is_blank_yaml(content) {
        return Ok(Settings::default());
    }
    serde_yaml_ng::from_str(content).map_err(|e| LazydraftError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn settings_to_yaml(settings: &Settings) -> LazydraftResult<String> {
    serde_yaml_ng::to_string(settings).map_err(|e| LazydraftError::Serialization {
        message: e.to_string(),
    })
}

/// `Ok(None)` when the file does not exist
fn read_config(path: &Path) -> LazydraftResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LazydraftError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Only blank lines, comments and document markers
fn is_blank_yaml(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "target",
        "active",
        "base_dir",
        "draft_posts_dir",
        "draft_dir",
        "published_posts_dir",
        "assets_dir",
        "content_dir",
        "asset_dir",
        "asset_prefix",
        "rewrite",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
