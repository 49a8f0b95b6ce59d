//! Best-effort external command invocation.
//! Install and git-init failures are expected, non-fatal outcomes, so they
//! are modeled as a structured error the caller logs and moves past
//! instead of a process-ending failure.

use crate::pm::PackageManager;
use log::debug;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Why an external command did not complete.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// Runs a command in `cwd`, inheriting the parent's standard streams.
pub fn run_command(
    program: &str,
    args: &[&str],
    cwd: &Path,
) -> std::result::Result<(), CommandError> {
    let command = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };
    debug!("Running `{}` in '{}'", command, cwd.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|source| CommandError::Spawn { command: command.clone(), source })?;

    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed { command, status })
    }
}

/// Installs dependencies with the chosen package manager's install
/// subcommand, inside the target directory.
pub fn install_dependencies(
    target_dir: &Path,
    package_manager: PackageManager,
) -> std::result::Result<(), CommandError> {
    run_command(package_manager.command(), &["install"], target_dir)
}

/// Initializes a git repository in the target directory. A directory
/// that already carries git metadata is left alone.
pub fn init_git_repository(target_dir: &Path) -> std::result::Result<(), CommandError> {
    if target_dir.join(".git").exists() {
        println!("Git repository already exists, skipping git init.");
        return Ok(());
    }

    run_command("git", &["init"], target_dir)
}
