use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::info;

use xcode_optimise::detection::{WalkOptions, find_xcode_project_path_with, is_xcode_project_with};
use xcode_optimise::formatters;
use xcode_optimise::locale::EmbeddedLocales;
use xcode_optimise::localization::{
    extract_development_region, extract_known_regions, read_project_metadata,
};
use xcode_optimise::types::ProjectLanguages;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let directory = match &args.directory {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("resolve current directory")?,
    };
    let opts = WalkOptions {
        follow_symlinks: args.follow_symlinks,
    };

    if args.list_languages {
        list_languages(args, directory, opts)
    } else {
        detect(args, directory, opts)
    }
}

fn detect(args: &Args, directory: PathBuf, opts: WalkOptions) -> Result<()> {
    info!("Checking {}", directory.display());
    let detected = is_xcode_project_with(&directory, opts);

    if args.json {
        let value = json!({
            "directory": directory,
            "is_xcode_project": detected,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if detected {
        println!("Xcode project detected");
    } else {
        println!("Not an Xcode project");
    }
    Ok(())
}

fn list_languages(args: &Args, directory: PathBuf, opts: WalkOptions) -> Result<()> {
    let Some(project) = find_xcode_project_path_with(&directory, opts) else {
        bail!("No .xcodeproj found in {}", directory.display());
    };
    info!("Reading project {}", project.display());

    let text = read_project_metadata(&project)?;
    let names = EmbeddedLocales;
    let report = ProjectLanguages {
        default_language: extract_development_region(&text, &names),
        languages: extract_known_regions(&text, &names),
        project,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", formatters::text::format(&report));
    if report.effective_default().is_none() {
        eprintln!("No localization languages found in project");
    }
    Ok(())
}
