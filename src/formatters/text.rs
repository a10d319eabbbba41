use std::fmt::Write as _;

use crate::types::{LanguageEntry, ProjectLanguages};

/// Renders the stdout part of a language listing.
pub fn format(report: &ProjectLanguages) -> String {
    let mut out = String::new();
    match report.effective_default() {
        Some(entry) => push_default(&mut out, entry),
        None => out.push_str("Default Language: (unknown)\n"),
    }
    if !report.languages.is_empty() {
        out.push_str("\nAvailable Languages:\n");
        for entry in &report.languages {
            let _ = writeln!(out, "{} ({})", entry.label(), entry.code);
        }
    }
    out
}

fn push_default(out: &mut String, entry: &LanguageEntry) {
    let name = entry.name.as_deref().unwrap_or("(unknown)");
    let _ = writeln!(out, "Default Language: {name} ({})", entry.code);
}
