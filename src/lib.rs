//! stencil is a starter project generator: it copies its bundled template
//! tree into a new directory, resolves a small set of configuration
//! questions, patches the generated files to match the answers, and
//! optionally installs dependencies and initializes version control.

/// Answer resolution: presets, defaults mode and interactive input
pub mod answers;

/// Command-line interface module for the stencil application
pub mod cli;

/// Fixed denylists, answer defaults and other shared constants
pub mod constants;

/// Target preparation and the filtered template copy
pub mod copier;

/// Declared runtime configuration, validated at startup
pub mod env;

/// Error types and handling for the stencil application
pub mod error;

/// Copy-exclusion predicate over the template tree
pub mod filter;

/// Logger configuration
pub mod logger;

/// Post-copy patches: gitignore, changesets, package.json, README,
/// scaffold artifacts and lockfiles
pub mod patch;

/// The fixed set of supported package managers
pub mod pm;

/// User input and interaction handling
pub mod prompt;

/// Best-effort external commands: dependency install and git init
pub mod runner;
