use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(name = "xcode-optimise", version, about = "Xcode project utilities", long_about = None)]
pub struct Args {
    /// Directory path to check (defaults to current working directory)
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// List all localization languages supported in the Xcode project
    #[arg(long = "list-languages", action = ArgAction::SetTrue)]
    pub list_languages: bool,

    /// Output JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Follow symlinked directories while searching for a project
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the working directory cannot be determined or, in
/// listing mode, if no project is found or its metadata cannot be read.
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run_impl::run_with_args(&args)
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG overrides -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
