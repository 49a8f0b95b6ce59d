//! Common constants used throughout the stencil application.

/// Top-level directories that are never copied out of the template root.
pub const EXCLUDED_TOP_LEVEL_DIRS: [&str; 4] = [".git", ".next", "node_modules", ".changeset"];

/// Exact relative paths that are never copied out of the template root.
/// The generator ships inside the template and must not scaffold itself.
pub const EXCLUDED_FILES: [&str; 1] = [GENERATOR_SCRIPT];

/// Where the generator binary lives inside the template tree.
pub const GENERATOR_SCRIPT: &str = "scripts/create-project";

/// Lockfile written by the template's default package manager.
pub const PNPM_LOCKFILE: &str = "pnpm-lock.yaml";

/// Dev dependency added when the user opts into release tooling.
pub const CHANGESET_PACKAGE: &str = "@changesets/cli";
pub const CHANGESET_VERSION: &str = "^2.29.7";

/// Documented answer defaults, used verbatim in `--defaults` mode.
pub const DEFAULT_PROJECT_NAME: &str = "my-stencil-app";
pub const DEFAULT_DESCRIPTION: &str = "A fresh starter generated with stencil";
pub const DEFAULT_INSTALL: &str = "n";
pub const DEFAULT_CHANGESETS: &str = "n";
pub const DEFAULT_GIT: &str = "y";
pub const DEFAULT_OVERWRITE: &str = "n";

/// Environment variables recognized as answer presets.
pub const ENV_DEFAULTS: &str = "STENCIL_DEFAULTS";
pub const ENV_NAME: &str = "STENCIL_NAME";
pub const ENV_DESCRIPTION: &str = "STENCIL_DESCRIPTION";
pub const ENV_PACKAGE_MANAGER: &str = "STENCIL_PACKAGE_MANAGER";
pub const ENV_INSTALL: &str = "STENCIL_INSTALL";
pub const ENV_OVERWRITE: &str = "STENCIL_OVERWRITE";
pub const ENV_CHANGESETS: &str = "STENCIL_CHANGESETS";
pub const ENV_GIT: &str = "STENCIL_GIT";

/// Fallback ignore file written when the template ships none.
pub const DEFAULT_GITIGNORE: &str = r#"# See https://help.github.com/articles/ignoring-files/ for more about ignoring files.

# dependencies
/node_modules
/.pnp
.pnp.*
.yarn/*
!.yarn/patches
!.yarn/plugins
!.yarn/releases
!.yarn/versions

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*
.pnpm-debug.log*

# env files
.env*
!.env.example

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
"#;
