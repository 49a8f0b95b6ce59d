//! Post-copy patches applied to the scaffolded project.
//! Each edit is independently idempotent; running one twice, or skipping
//! one because its target is absent, leaves the tree in a valid state.

use crate::answers::Answers;
use crate::constants::{
    CHANGESET_PACKAGE, CHANGESET_VERSION, DEFAULT_GITIGNORE, GENERATOR_SCRIPT, PNPM_LOCKFILE,
};
use crate::copier::copy_dir_all;
use crate::error::Result;
use crate::pm::PackageManager;
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The destination's package metadata, read and rewritten in full.
///
/// Only the fields the patcher touches are typed; everything else flows
/// through `rest` untouched, in its original order.
#[derive(Debug, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "private", skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<IndexMap<String, String>>,

    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,

    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

/// Turns arbitrary input into a valid package name slug: trimmed,
/// lowercased, with everything outside `[a-z0-9-_.]` replaced by a
/// hyphen. Idempotent.
pub fn sanitize_package_name(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }

    Ok(())
}

/// Makes sure the scaffolded project has a `.gitignore`.
///
/// Prefers the template's own ignore file; a read failure degrades to the
/// built-in default instead of failing the run. The written file always
/// ends with a newline.
pub fn ensure_gitignore(target_dir: &Path, template_root: &Path) -> Result<()> {
    let target = target_dir.join(".gitignore");
    if target.exists() {
        return Ok(());
    }

    let template_gitignore = template_root.join(".gitignore");
    let mut content = if template_gitignore.exists() {
        match fs::read_to_string(&template_gitignore) {
            Ok(content) => content,
            Err(err) => {
                warn!("Failed to read template .gitignore: {}. Using default fallback.", err);
                DEFAULT_GITIGNORE.to_string()
            }
        }
    } else {
        DEFAULT_GITIGNORE.to_string()
    };

    if !content.ends_with('\n') {
        content.push('\n');
    }

    fs::write(target, content)?;
    Ok(())
}

/// Aligns the destination's `.changeset` directory with the release
/// tooling opt-in: replaced wholesale from the template when enabled,
/// deleted when not.
pub fn sync_changeset_assets(
    target_dir: &Path,
    template_root: &Path,
    include_changesets: bool,
) -> Result<()> {
    let target = target_dir.join(".changeset");
    if !include_changesets {
        return remove_if_exists(&target);
    }

    let source = template_root.join(".changeset");
    if !source.exists() {
        return Ok(());
    }

    remove_if_exists(&target)?;
    copy_dir_all(&source, &target)
}

/// Rewrites the destination's `package.json` to match the answers.
///
/// Always: sanitized name, description when supplied, `private: true`,
/// no `bin` entry. With changesets enabled, the `changeset` and `release`
/// scripts and the `@changesets/cli` dev dependency are ensured (an
/// existing version pin is kept); with changesets disabled, exactly those
/// keys are removed, and a container emptied by the removal is dropped
/// rather than left behind.
pub fn patch_manifest(target_dir: &Path, answers: &Answers) -> Result<()> {
    let manifest_path = target_dir.join("package.json");
    let raw = fs::read_to_string(&manifest_path)?;
    let mut manifest: PackageManifest = serde_json::from_str(&raw)?;

    manifest.name = Some(sanitize_package_name(&answers.project_name));
    if !answers.description.is_empty() {
        manifest.description = Some(answers.description.clone());
    }
    manifest.is_private = Some(true);
    manifest.bin = None;

    if answers.changesets {
        let scripts = manifest.scripts.get_or_insert_with(IndexMap::new);
        scripts.insert("changeset".to_string(), "changeset".to_string());
        scripts.insert(
            "release".to_string(),
            "changeset version && pnpm install --no-frozen-lockfile".to_string(),
        );

        let dev_dependencies = manifest.dev_dependencies.get_or_insert_with(IndexMap::new);
        dev_dependencies
            .entry(CHANGESET_PACKAGE.to_string())
            .or_insert_with(|| CHANGESET_VERSION.to_string());
    } else {
        if let Some(scripts) = manifest.scripts.as_mut() {
            scripts.shift_remove("changeset");
            scripts.shift_remove("release");
        }
        if manifest.scripts.as_ref().is_some_and(IndexMap::is_empty) {
            manifest.scripts = None;
        }

        if let Some(dev_dependencies) = manifest.dev_dependencies.as_mut() {
            dev_dependencies.shift_remove(CHANGESET_PACKAGE);
        }
        if manifest.dev_dependencies.as_ref().is_some_and(IndexMap::is_empty) {
            manifest.dev_dependencies = None;
        }
    }

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    fs::write(manifest_path, output)?;

    Ok(())
}

/// Replaces the template's README with a minimal header for the new
/// project. A template without a README is left alone.
pub fn reset_readme(target_dir: &Path, project_name: &str) -> Result<()> {
    let readme_path = target_dir.join("README.md");
    if !readme_path.exists() {
        return Ok(());
    }

    let content = format!(
        "# {}\n\nProject scaffolded with stencil. Update this README with your project details.\n",
        project_name
    );
    fs::write(readme_path, content)?;

    Ok(())
}

/// Deletes files that only make sense in the template distribution:
/// the license, the changelog, the generator itself, and the scripts
/// directory once the generator's removal leaves it empty.
pub fn remove_scaffold_artifacts(target_dir: &Path) -> Result<()> {
    remove_if_exists(&target_dir.join("LICENSE"))?;
    remove_if_exists(&target_dir.join("CHANGELOG.md"))?;
    remove_if_exists(&target_dir.join(GENERATOR_SCRIPT))?;

    let scripts_dir = target_dir.join("scripts");
    if scripts_dir.is_dir() && fs::read_dir(&scripts_dir)?.next().is_none() {
        fs::remove_dir(&scripts_dir)?;
    }

    Ok(())
}

/// Removes the template default manager's lockfile when a different
/// package manager was chosen.
pub fn cleanup_lockfiles(target_dir: &Path, package_manager: PackageManager) -> Result<()> {
    if package_manager != PackageManager::Pnpm {
        remove_if_exists(&target_dir.join(PNPM_LOCKFILE))?;
    }

    Ok(())
}
