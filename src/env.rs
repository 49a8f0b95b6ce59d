//! Declared runtime configuration, validated at startup.
//! A small schema over the process environment: the running mode and an
//! authentication secret that is mandatory in production. Empty-string
//! values count as absent, and a documented override variable bypasses
//! validation entirely.

use crate::error::{Error, Result};
use std::str::FromStr;

/// Mode the application runs in.
pub const MODE_VAR: &str = "STENCIL_ENV";

/// Secret required when running in production mode.
pub const AUTH_SECRET_VAR: &str = "AUTH_SECRET";

/// Set to any non-empty value to skip environment validation.
pub const SKIP_VALIDATION_VAR: &str = "SKIP_ENV_VALIDATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Development,
    Test,
    Production,
}

impl FromStr for AppMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "development" => Ok(AppMode::Development),
            "test" => Ok(AppMode::Test),
            "production" => Ok(AppMode::Production),
            _ => Err(()),
        }
    }
}

/// The validated runtime environment.
#[derive(Debug, Clone)]
pub struct RuntimeEnv {
    pub mode: AppMode,
    pub auth_secret: Option<String>,
}

/// Reads and validates the runtime environment from the process.
pub fn load() -> Result<RuntimeEnv> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Reads and validates the runtime environment from an arbitrary lookup.
///
/// Rules: an empty value is treated as unset; the mode defaults to
/// development; production requires the auth secret; a set skip variable
/// disables every check and falls back to development on a bad mode.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<RuntimeEnv> {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let skip_validation = get(SKIP_VALIDATION_VAR).is_some();
    let mode_raw = get(MODE_VAR);
    let auth_secret = get(AUTH_SECRET_VAR);

    if skip_validation {
        let mode = mode_raw
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or(AppMode::Development);
        return Ok(RuntimeEnv { mode, auth_secret });
    }

    let mode = match mode_raw {
        None => AppMode::Development,
        Some(value) => value.parse().map_err(|_| {
            Error::Env(format!(
                "{} must be one of development, test, production (got \"{}\")",
                MODE_VAR, value
            ))
        })?,
    };

    if mode == AppMode::Production && auth_secret.is_none() {
        return Err(Error::Env(format!(
            "{} is required when {} is production",
            AUTH_SECRET_VAR, MODE_VAR
        )));
    }

    Ok(RuntimeEnv { mode, auth_secret })
}
