use std::path::PathBuf;

use serde::Serialize;

/// A region code as declared in the project, paired with its English name when
/// the code maps to a known locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub name: Option<String>,
    pub code: String,
}

impl LanguageEntry {
    /// Name to show a user: the resolved name, else the raw code.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectLanguages {
    pub project: PathBuf,
    pub default_language: Option<LanguageEntry>,
    pub languages: Vec<LanguageEntry>,
}

impl ProjectLanguages {
    /// The development region, falling back to the first known region.
    pub fn effective_default(&self) -> Option<&LanguageEntry> {
        self.default_language.as_ref().or_else(|| self.languages.first())
    }
}
