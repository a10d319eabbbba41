//! Detect Xcode projects and list the localization languages they declare.

pub mod detection;
pub mod error;
pub mod formatters;
pub mod locale;
pub mod localization;
pub mod types;

pub use crate::{
    detection::{find_xcode_project_path, is_xcode_project},
    error::ProjectError,
    locale::{EmbeddedLocales, LocaleNames},
    localization::{extract_development_region, extract_known_regions, read_project_metadata},
    types::{LanguageEntry, ProjectLanguages},
};
