use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Lookup of English display names for locale codes.
///
/// Implementations never fail: an unknown code simply has no name.
pub trait LocaleNames {
    fn display_name(&self, code: &str) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct LocaleTable {
    languages: HashMap<String, String>,
    scripts: HashMap<String, String>,
    regions: HashMap<String, String>,
}

static EMBEDDED_LOCALE_JSON: &str = include_str!("../assets/locales.json");

static TABLE: Lazy<LocaleTable> = Lazy::new(|| {
    serde_json::from_str(EMBEDDED_LOCALE_JSON).expect("invalid embedded locales.json")
});

/// Names backed by the table compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLocales;

impl LocaleNames for EmbeddedLocales {
    fn display_name(&self, code: &str) -> Option<String> {
        resolve_display_name(&TABLE, code)
    }
}

/// Resolves `code` in two attempts: first as a full hyphen-separated identifier
/// (`en-US`, `zh-Hans`), then as the bare language before the first `-` or `_`.
fn resolve_display_name(table: &LocaleTable, code: &str) -> Option<String> {
    if !code.contains('_')
        && let Some(name) = full_name(table, code)
    {
        return Some(name);
    }
    let base = code.split(['-', '_']).next().unwrap_or_default();
    let name = base_name(table, base);
    if name.is_none() {
        debug!("no locale name for {code:?}");
    }
    name
}

fn full_name(table: &LocaleTable, code: &str) -> Option<String> {
    let id: LanguageIdentifier = code.parse().ok()?;
    if id.variants().next().is_some() {
        return None;
    }
    let language = table.languages.get(id.language.as_str())?;
    let mut details = Vec::new();
    if let Some(script) = id.script {
        details.push(table.scripts.get(script.as_str())?.as_str());
    }
    if let Some(region) = id.region {
        details.push(table.regions.get(region.as_str())?.as_str());
    }
    if details.is_empty() {
        Some(language.clone())
    } else {
        Some(format!("{language} ({})", details.join(", ")))
    }
}

fn base_name(table: &LocaleTable, base: &str) -> Option<String> {
    let id: LanguageIdentifier = base.parse().ok()?;
    if id.script.is_some() || id.region.is_some() {
        return None;
    }
    table.languages.get(id.language.as_str()).cloned()
}
