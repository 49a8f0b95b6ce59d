//! Answer collection for the generator's configuration questions.
//! Every question resolves through the same precedence chain:
//! command-line flag > environment variable > interactive prompt > default.

use crate::cli::Args;
use crate::constants::{
    ENV_CHANGESETS, ENV_DEFAULTS, ENV_DESCRIPTION, ENV_GIT, ENV_INSTALL, ENV_NAME,
    ENV_OVERWRITE, ENV_PACKAGE_MANAGER,
};
use crate::error::Result;
use crate::pm::PackageManager;
use crate::prompt::Prompter;

/// A recognized yes/no answer. Unrecognized input maps to neither variant
/// (see [`normalize_yes_no`]); callers must supply their own fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "y",
            YesNo::No => "n",
        }
    }
}

/// Normalizes the supported yes/no spellings, case-insensitively.
///
/// Recognizes `y`/`yes`/`true`/`1` and `n`/`no`/`false`/`0`. Any other
/// input returns `None` rather than an error, so an unrecognized answer
/// falls through to the caller's default.
pub fn normalize_yes_no(value: &str) -> Option<YesNo> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(YesNo::Yes),
        "n" | "no" | "false" | "0" => Some(YesNo::No),
        _ => None,
    }
}

/// Returns the first defined value from an ordered list of optional sources.
///
/// This is the whole precedence story: callers list their sources from
/// highest to lowest priority and take the first one that is set.
pub fn first_defined<T>(sources: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    sources.into_iter().flatten().next()
}

/// Non-interactive answer values, one optional slot per question key.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub name: Option<String>,
    pub description: Option<String>,
    pub package_manager: Option<String>,
    pub install: Option<YesNo>,
    pub overwrite: Option<YesNo>,
    pub changesets: Option<YesNo>,
    pub git: Option<YesNo>,
}

impl Presets {
    /// Builds presets from parsed command-line flags.
    ///
    /// An unrecognized value handed to `--install`, `--changesets` or
    /// `--git` resolves to yes.
    pub fn from_args(args: &Args) -> Self {
        let install = if args.skip_install {
            Some(YesNo::No)
        } else {
            args.install
                .as_deref()
                .map(|value| normalize_yes_no(value).unwrap_or(YesNo::Yes))
        };

        let changesets = if args.no_changesets {
            Some(YesNo::No)
        } else if args.with_changesets {
            Some(YesNo::Yes)
        } else {
            args.changesets
                .as_deref()
                .map(|value| normalize_yes_no(value).unwrap_or(YesNo::Yes))
        };

        let git = if args.no_git {
            Some(YesNo::No)
        } else if args.git_init {
            Some(YesNo::Yes)
        } else {
            args.git
                .as_deref()
                .map(|value| normalize_yes_no(value).unwrap_or(YesNo::Yes))
        };

        Self {
            name: args.name.clone(),
            description: args.description.clone(),
            package_manager: args.package_manager.clone(),
            install,
            overwrite: args.force.then_some(YesNo::Yes),
            changesets,
            git,
        }
    }

    /// Builds presets from an arbitrary key lookup. Extracted from
    /// [`Presets::from_env`] so tests can inject their own environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: lookup(ENV_NAME),
            description: lookup(ENV_DESCRIPTION),
            package_manager: lookup(ENV_PACKAGE_MANAGER),
            install: lookup(ENV_INSTALL).as_deref().and_then(normalize_yes_no),
            overwrite: lookup(ENV_OVERWRITE).as_deref().and_then(normalize_yes_no),
            changesets: lookup(ENV_CHANGESETS).as_deref().and_then(normalize_yes_no),
            git: lookup(ENV_GIT).as_deref().and_then(normalize_yes_no),
        }
    }

    /// Builds presets from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Merges two preset layers, `self` taking precedence.
    pub fn merged_with(self, fallback: Presets) -> Presets {
        Presets {
            name: first_defined([self.name, fallback.name]),
            description: first_defined([self.description, fallback.description]),
            package_manager: first_defined([self.package_manager, fallback.package_manager]),
            install: first_defined([self.install, fallback.install]),
            overwrite: first_defined([self.overwrite, fallback.overwrite]),
            changesets: first_defined([self.changesets, fallback.changesets]),
            git: first_defined([self.git, fallback.git]),
        }
    }
}

/// Whether defaults mode was requested through the environment.
pub fn defaults_from_env() -> bool {
    defaults_from_lookup(|key| std::env::var(key).ok())
}

pub fn defaults_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> bool {
    lookup(ENV_DEFAULTS)
        .as_deref()
        .and_then(normalize_yes_no)
        == Some(YesNo::Yes)
}

/// Shared state for resolving one question after another.
pub struct AnswerContext<'a> {
    pub presets: Presets,
    pub use_defaults: bool,
    pub prompter: &'a dyn Prompter,
}

impl AnswerContext<'_> {
    /// Resolves a single question, echoing non-interactive resolutions
    /// to standard output.
    pub fn ask(&self, preset: Option<String>, question: &str, default: &str) -> Result<String> {
        self.ask_to(&mut std::io::stdout(), preset, question, default)
    }

    /// Resolves a single question, writing the echo to `out`.
    ///
    /// Precedence: a preset wins outright, then defaults mode returns the
    /// documented default, then the user is prompted with the default shown
    /// (an empty reply accepts it). Preset and default resolutions are
    /// echoed with their source so non-interactive runs stay auditable.
    pub fn ask_to(
        &self,
        out: &mut dyn std::io::Write,
        preset: Option<String>,
        question: &str,
        default: &str,
    ) -> Result<String> {
        if let Some(value) = preset {
            writeln!(out, "{}: {} [preset]", question, value)?;
            return Ok(value);
        }

        if self.use_defaults {
            writeln!(out, "{}: {} [default]", question, default)?;
            return Ok(default.to_string());
        }

        self.prompter.input(question, default)
    }
}

/// The resolved answer set. Populated once, immutable thereafter.
#[derive(Debug, Clone)]
pub struct Answers {
    pub project_name: String,
    pub description: String,
    pub package_manager: PackageManager,
    pub install: bool,
    pub changesets: bool,
    pub git: bool,
}
