//! Copy-exclusion patterns for the template tree.
//! A fixed denylist keeps version-control metadata, build output,
//! dependencies, release tooling and the generator itself out of the
//! scaffolded project.

use crate::constants::{EXCLUDED_FILES, EXCLUDED_TOP_LEVEL_DIRS};
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiles the fixed denylist into a glob set.
///
/// Each excluded top-level directory contributes two patterns: the bare
/// name (so the directory entry itself is pruned) and `name/**` (so
/// nothing beneath it slips through). Excluded files match their exact
/// relative path only.
pub fn excluded_paths() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for dir in EXCLUDED_TOP_LEVEL_DIRS {
        builder.add(Glob::new(dir)?);
        builder.add(Glob::new(&format!("{}/**", dir))?);
    }
    for file in EXCLUDED_FILES {
        builder.add(Glob::new(file)?);
    }

    Ok(builder.build()?)
}

/// Decides whether a path under the template root should be copied.
///
/// Pure with respect to the filesystem. Paths outside the template root,
/// and the root itself, are always included; the denylist only applies
/// to template-relative paths.
pub fn should_copy(template_root: &Path, source: &Path, excluded: &GlobSet) -> bool {
    let relative = match source.strip_prefix(template_root) {
        Ok(relative) => relative,
        Err(_) => return true,
    };

    if relative.as_os_str().is_empty() {
        return true;
    }

    !excluded.is_match(relative)
}
