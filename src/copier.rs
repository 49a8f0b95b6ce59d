//! Target directory preparation and the filtered template copy.

use crate::answers::{normalize_yes_no, AnswerContext, YesNo};
use crate::constants::DEFAULT_OVERWRITE;
use crate::error::{Error, Result};
use crate::filter::should_copy;
use globset::GlobSet;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Locates the template root: the generator binary ships in a directory
/// directly under it (`scripts/` in the distributed tree).
pub fn template_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::TemplateRoot(format!(
                "the generator at '{}' has no parent directory",
                exe.display()
            ))
        })
}

/// Ensures the target directory exists and is safe to populate.
///
/// A missing directory is created with its parents. A non-empty directory
/// requires an overwrite confirmation, resolved through the usual
/// preset/default/interactive chain; on refusal nothing is touched and
/// [`Error::OverwriteDeclined`] is returned. On consent every entry
/// inside the directory is deleted before the copy begins.
pub fn prepare_target_dir(target_dir: &Path, ctx: &AnswerContext) -> Result<()> {
    if !target_dir.exists() {
        fs::create_dir_all(target_dir)?;
        return Ok(());
    }

    let entries = fs::read_dir(target_dir)?.collect::<io::Result<Vec<_>>>()?;
    if entries.is_empty() {
        return Ok(());
    }

    let question = format!(
        "Directory \"{}\" already exists and is not empty. Overwrite? [y/N]",
        target_dir.display()
    );
    let preset = ctx.presets.overwrite.map(|value| value.as_str().to_string());
    let answer = ctx.ask(preset, &question, DEFAULT_OVERWRITE)?;

    if normalize_yes_no(&answer) != Some(YesNo::Yes) {
        return Err(Error::OverwriteDeclined);
    }

    for entry in entries {
        let path = entry.path();
        debug!("Clearing '{}'", path.display());
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}

/// Copies the template tree into the target directory, skipping every
/// path the exclusion set matches.
///
/// The walk also prunes the target directory itself, so a destination
/// nested inside the template root can never recurse into its own output.
pub fn copy_template(template_root: &Path, target_dir: &Path, excluded: &GlobSet) -> Result<()> {
    let template_root = template_root.canonicalize()?;
    let target_root = target_dir.canonicalize()?;

    let walker = WalkDir::new(&template_root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            !entry.path().starts_with(&target_root)
                && should_copy(&template_root, entry.path(), excluded)
        });

    for entry in walker {
        let entry = entry.map_err(|err| Error::Io(err.into()))?;
        let relative = match entry.path().strip_prefix(&template_root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };

        let destination = target_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)?;
        } else {
            debug!("Copying '{}'", relative.display());
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &destination)?;
        }
    }

    Ok(())
}

/// Recursively copies a directory without any filtering.
pub fn copy_dir_all(source: &Path, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination)?;

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|err| Error::Io(err.into()))?;
        let relative = match entry.path().strip_prefix(source) {
            Ok(relative) => relative,
            Err(_) => continue,
        };

        let target = destination.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
