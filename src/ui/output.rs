use std::path::Path;

use lazydraft::application::{PublishOutcome, StageOutcome, UnstageOutcome};
use lazydraft::config::ConfigWarning;
use lazydraft::LazydraftError;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Numbered list used before prompting for a choice
pub fn render_choices<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}\n", i + 1, item.as_ref()))
        .collect()
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

pub fn render_staged(verb: &str, outcome: &StageOutcome) -> String {
    let mut out = format!("✓ {} '{}'\n", verb, outcome.draft);
    out.push_str(&format!("  → {}\n", display(&outcome.copy.content)));
    for asset in &outcome.copy.assets {
        out.push_str(&format!("  → {}\n", display(asset)));
    }
    out
}

pub fn render_unstaged(outcome: &UnstageOutcome) -> String {
    let mut out = format!("✓ Unstaged '{}'\n", outcome.draft);
    out.push_str(&format!("  - {}\n", display(&outcome.removal.content)));
    for asset in &outcome.removal.assets {
        out.push_str(&format!("  - {}\n", display(asset)));
    }
    out
}

pub fn render_published(outcome: &PublishOutcome) -> String {
    let mut out = format!("✓ Published '{}'\n", outcome.draft);
    out.push_str(&format!("  → {}\n", display(&outcome.copy.content)));
    for path in &outcome.archived {
        out.push_str(&format!("  archived {}\n", display(path)));
    }
    for path in &outcome.removed {
        out.push_str(&format!("  removed {}\n", display(path)));
    }
    out
}

/// Message (and hint) for an error the user can fix by choosing again
pub fn render_user_error(err: &LazydraftError) -> String {
    match err.hint() {
        Some(hint) => format!("{}\n  → {}\n", err, hint),
        None => format!("{}\n", err),
    }
}
