use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ProjectError;
use crate::locale::LocaleNames;
use crate::types::LanguageEntry;

pub const METADATA_FILE: &str = "project.pbxproj";

static DEVELOPMENT_REGION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"developmentRegion\s*=\s*([^;]+);").expect("valid regex"));

static KNOWN_REGIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)knownRegions\s*=\s*\((.*?)\);").expect("valid regex"));

/// Reads `project.pbxproj` from inside a `.xcodeproj` bundle.
///
/// # Errors
/// `MetadataNotFound` when the bundle has no metadata file, `MetadataReadFailure`
/// when it exists but cannot be read as UTF-8 text.
pub fn read_project_metadata(bundle: &Path) -> Result<String, ProjectError> {
    let path = bundle.join(METADATA_FILE);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ProjectError::MetadataNotFound {
            bundle: bundle.to_path_buf(),
        }),
        Err(source) => Err(ProjectError::MetadataReadFailure { path, source }),
    }
}

fn unquote(raw: &str) -> &str {
    raw.trim().trim_matches(['"', '\'']).trim()
}

/// Extracts `developmentRegion = <code>;`. The first occurrence wins; a missing
/// or empty value yields `None`.
pub fn extract_development_region(text: &str, names: &dyn LocaleNames) -> Option<LanguageEntry> {
    let Some(caps) = DEVELOPMENT_REGION.captures(text) else {
        debug!("developmentRegion not found in project metadata");
        return None;
    };
    let code = unquote(&caps[1]);
    if code.is_empty() {
        debug!("developmentRegion is empty");
        return None;
    }
    debug!("development region: {code}");
    Some(LanguageEntry {
        name: names.display_name(code),
        code: code.to_string(),
    })
}

/// Extracts the codes listed in `knownRegions = ( ... );`, in declaration order.
pub fn extract_known_regions(text: &str, names: &dyn LocaleNames) -> Vec<LanguageEntry> {
    let Some(caps) = KNOWN_REGIONS.captures(text) else {
        debug!("knownRegions not found in project metadata");
        return Vec::new();
    };
    let body = caps.get(1).map_or("", |m| m.as_str());

    let mut out = Vec::new();
    for line in body.split('\n') {
        let line = line.trim();
        let line = line.strip_suffix(',').unwrap_or(line).trim_end();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let code = unquote(line);
        if code.is_empty() {
            continue;
        }
        out.push(LanguageEntry {
            name: names.display_name(code),
            code: code.to_string(),
        });
    }
    debug!("known regions: {}", out.len());
    out
}

/// Development region of the project in `bundle`.
///
/// # Errors
/// Propagates metadata read failures; a missing field is not an error.
pub fn get_development_region(
    bundle: &Path,
    names: &dyn LocaleNames,
) -> Result<Option<LanguageEntry>, ProjectError> {
    let text = read_project_metadata(bundle)?;
    Ok(extract_development_region(&text, names))
}

/// All known regions of the project in `bundle`.
///
/// # Errors
/// Propagates metadata read failures; a missing field yields an empty list.
pub fn list_localization_languages(
    bundle: &Path,
    names: &dyn LocaleNames,
) -> Result<Vec<LanguageEntry>, ProjectError> {
    let text = read_project_metadata(bundle)?;
    Ok(extract_known_regions(&text, names))
}
