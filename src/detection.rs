use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

pub const PROJECT_SUFFIX: &str = ".xcodeproj";
pub const WORKSPACE_SUFFIX: &str = ".xcworkspace";

#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    pub follow_symlinks: bool,
}

/// Returns true when `dir` holds a `.xcodeproj` or `.xcworkspace` bundle,
/// either as a direct child or anywhere below it.
///
/// A missing path or a path that is not a directory yields `false`.
pub fn is_xcode_project(dir: &Path) -> bool {
    is_xcode_project_with(dir, WalkOptions::default())
}

pub fn is_xcode_project_with(dir: &Path, opts: WalkOptions) -> bool {
    find_bundle(dir, opts, &[PROJECT_SUFFIX, WORKSPACE_SUFFIX]).is_some()
}

/// Locates the first `.xcodeproj` bundle under `dir`.
///
/// Direct children win over nested bundles. Among siblings at the same level
/// the entries are visited in file-name order, so the lexically first bundle is
/// returned; callers should not depend on which one wins when several coexist.
/// The nested search is depth-first, so a deep bundle under an earlier sibling
/// is found before a shallower one under a later sibling.
/// Workspaces are never returned since they do not map to a single project file.
pub fn find_xcode_project_path(dir: &Path) -> Option<PathBuf> {
    find_xcode_project_path_with(dir, WalkOptions::default())
}

pub fn find_xcode_project_path_with(dir: &Path, opts: WalkOptions) -> Option<PathBuf> {
    find_bundle(dir, opts, &[PROJECT_SUFFIX])
}

fn find_bundle(dir: &Path, opts: WalkOptions, suffixes: &[&str]) -> Option<PathBuf> {
    if !dir.is_dir() {
        debug!("not a directory: {}", dir.display());
        return None;
    }
    if let Some(found) = find_in_children(dir, suffixes) {
        debug!("bundle found among direct children: {}", found.display());
        return Some(found);
    }
    let found = find_in_subtree(dir, opts, suffixes);
    if let Some(ref path) = found {
        debug!("bundle found by recursive walk: {}", path.display());
    }
    found
}

// Byte comparison keeps names that are not valid UTF-8.
fn has_bundle_suffix(name: &OsStr, suffixes: &[&str]) -> bool {
    let name = name.as_encoded_bytes();
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
}

fn find_in_children(dir: &Path, suffixes: &[&str]) -> Option<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("cannot list {}: {err}", dir.display());
            return None;
        }
    };
    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    children.sort();
    children.into_iter().find(|path| {
        path.is_dir()
            && path
                .file_name()
                .is_some_and(|name| has_bundle_suffix(name, suffixes))
    })
}

fn find_in_subtree(root: &Path, opts: WalkOptions, suffixes: &[&str]) -> Option<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    // Every entry counts: hidden folders and ignore files must not hide a bundle.
    builder.standard_filters(false);
    builder.follow_links(opts.follow_symlinks);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    for dent in builder.build() {
        let dent = match dent {
            Ok(d) => d,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if dent.depth() == 0 {
            continue;
        }
        let path = dent.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name()
            && has_bundle_suffix(name, suffixes)
        {
            return Some(path.to_path_buf());
        }
    }
    None
}
