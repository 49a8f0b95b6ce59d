//! Error handling for the stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stencil operations.
///
/// This enum represents all possible errors that can occur while generating
/// a project. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents errors that occur while parsing or rewriting package.json
    #[error("Package manifest error: {0}.")]
    Manifest(#[from] serde_json::Error),

    /// Represents errors that occur during interactive prompting
    #[error("Prompt error: {0}.")]
    Prompt(#[from] dialoguer::Error),

    /// Represents errors in compiling the copy-exclusion patterns
    #[error("Exclude pattern error: {0}.")]
    Pattern(#[from] globset::Error),

    /// Represents startup environment validation failures
    #[error("Environment error: {0}.")]
    Env(String),

    /// Represents a failure to locate the bundled template directory
    #[error("Template root error: {0}.")]
    TemplateRoot(String),

    /// The user declined to overwrite a non-empty target directory
    #[error("Aborting setup.")]
    OverwriteDeclined,
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
