//! The fixed set of supported package managers.

use std::fmt;

/// Package managers the generated project can be set up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// The supported set, in priority order. The first entry is both the
    /// template's default and the fallback for unrecognized input.
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Pnpm,
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    /// Parses user input, falling back to the first supported entry when
    /// the input names no known package manager.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "pnpm" => PackageManager::Pnpm,
            "npm" => PackageManager::Npm,
            "yarn" => PackageManager::Yarn,
            "bun" => PackageManager::Bun,
            _ => Self::ALL[0],
        }
    }

    /// The executable to invoke.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Manual install instruction shown in the next-steps banner.
    pub fn install_instruction(&self) -> String {
        format!("{} install", self.command())
    }

    /// Dev-server instruction shown in the next-steps banner.
    pub fn dev_instruction(&self) -> String {
        match self {
            PackageManager::Npm | PackageManager::Bun => format!("{} run dev", self.command()),
            _ => format!("{} dev", self.command()),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
