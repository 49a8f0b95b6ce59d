//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;

/// Command-line arguments structure for stencil.
///
/// Every answer-affecting flag is an optional preset; anything left unset
/// falls through to environment variables, then prompts, then defaults.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "stencil: starter project generator", long_about = None)]
pub struct Args {
    /// Skip all prompts and accept the documented defaults
    #[arg(short = 'y', long = "defaults", visible_alias = "yes")]
    pub defaults: bool,

    /// Overwrite a non-empty target directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Do not install dependencies after scaffolding
    #[arg(long)]
    pub skip_install: bool,

    /// Install dependencies after scaffolding (y/n)
    #[arg(long, visible_alias = "with-install", value_name = "Y/N")]
    pub install: Option<String>,

    /// Project name
    #[arg(long, visible_alias = "project-name", value_name = "NAME")]
    pub name: Option<String>,

    /// Project description
    #[arg(long, visible_alias = "desc", value_name = "TEXT")]
    pub description: Option<String>,

    /// Package manager to configure (pnpm/npm/yarn/bun)
    #[arg(long, visible_alias = "pm", value_name = "PM")]
    pub package_manager: Option<String>,

    /// Include Changesets release tooling (y/n; bare flag means yes)
    #[arg(long, value_name = "Y/N", num_args = 0..=1, default_missing_value = "y")]
    pub changesets: Option<String>,

    /// Include Changesets release tooling
    #[arg(long)]
    pub with_changesets: bool,

    /// Exclude Changesets release tooling
    #[arg(long)]
    pub no_changesets: bool,

    /// Initialize a git repository (y/n; bare flag means yes)
    #[arg(long, value_name = "Y/N", num_args = 0..=1, default_missing_value = "y")]
    pub git: Option<String>,

    /// Initialize a git repository
    #[arg(long)]
    pub git_init: bool,

    /// Do not initialize a git repository
    #[arg(long)]
    pub no_git: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
