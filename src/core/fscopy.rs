//! Copying files and directories.
//!
//! `copy_path` classifies the source and dispatches to the matching
//! strategy. Strategies validate, confirm where needed, and classify every
//! failure; they never surface a raw I/O error unlabelled.
//!
//! Directory replacement is not transactional: a failure partway through
//! the tree walk can leave a partially-populated destination.

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

use crate::console;
use crate::error::{Error, PathKind, Result};
use crate::paths;
use crate::prompt::Prompt;

/// Strategy interface shared by the file and directory copiers.
pub trait Copier {
    fn copy(&self, source: &Path, destination: &Path, prompt: &mut dyn Prompt) -> Result<()>;
}

/// Copies a single regular file, preserving permission bits and the
/// modification time. An existing destination file is overwritten without
/// confirmation.
pub struct FileCopier;

/// Recursively copies a directory tree, confirming before replacing an
/// existing destination.
pub struct DirectoryCopier;

impl Copier for FileCopier {
    fn copy(&self, source: &Path, destination: &Path, _prompt: &mut dyn Prompt) -> Result<()> {
        validate_source(source, PathKind::File)?;

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(Error::classify_io)?;
        }

        let pb = console::spinner(format!("Copying file {}...", paths::display_name(source)));
        let copied = copy_file(source, destination);
        pb.finish_and_clear();
        copied.map_err(Error::classify_io)?;

        report_copied("File", source, destination);
        Ok(())
    }
}

impl Copier for DirectoryCopier {
    fn copy(&self, source: &Path, destination: &Path, prompt: &mut dyn Prompt) -> Result<()> {
        validate_source(source, PathKind::Directory)?;

        if destination.exists() {
            confirm_replace(destination, prompt)?;
            fs::remove_dir_all(destination).map_err(Error::classify_io)?;
        }

        let pb = console::spinner(format!(
            "Copying directory {}...",
            paths::display_name(source)
        ));
        let copied = copy_tree(source, destination);
        pb.finish_and_clear();
        copied.map_err(Error::classify_io)?;

        report_copied("Directory", source, destination);
        Ok(())
    }
}

/// Resolve both paths, pick the strategy matching the source's type and
/// run it. A missing or unclassifiable source fails without touching the
/// destination.
pub fn copy_path(source: &str, destination: &str, prompt: &mut dyn Prompt) -> Result<()> {
    let source = paths::resolve(source)?;
    let destination = paths::resolve(destination)?;

    if source.is_file() {
        FileCopier.copy(&source, &destination, prompt)
    } else if source.is_dir() {
        DirectoryCopier.copy(&source, &destination, prompt)
    } else if !source.exists() {
        Err(Error::NotFound(source))
    } else {
        Err(Error::NotFileOrDirectory(source))
    }
}

fn validate_source(source: &Path, expected: PathKind) -> Result<()> {
    if !source.exists() {
        return Err(Error::NotFound(source.to_path_buf()));
    }

    let matches_kind = match expected {
        PathKind::File => source.is_file(),
        PathKind::Directory => source.is_dir(),
    };
    if !matches_kind {
        return Err(Error::WrongType {
            path: source.to_path_buf(),
            expected,
        });
    }

    Ok(())
}

fn confirm_replace(destination: &Path, prompt: &mut dyn Prompt) -> Result<()> {
    console::warn(&format!("{} already exists.", destination.display()));
    let response = prompt.ask("Overwrite? [y/N]: ")?;
    match response.to_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => {
            console::warn("Copy aborted.");
            Err(Error::Aborted)
        }
    }
}

/// Copy bytes plus metadata: `fs::copy` carries the permission bits, the
/// modification time is carried explicitly.
fn copy_file(source: &Path, destination: &Path) -> io::Result<()> {
    fs::copy(source, destination)?;
    let metadata = fs::metadata(source)?;
    filetime::set_file_mtime(destination, FileTime::from_last_modification_time(&metadata))?;
    Ok(())
}

fn copy_tree(source: &Path, destination: &Path) -> io::Result<()> {
    fs::create_dir_all(destination)?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            copy_file(&entry.path(), &target)?;
        }
    }

    Ok(())
}

fn report_copied(what: &str, source: &Path, destination: &Path) {
    console::success(&format!(
        "✓ {} copied successfully from {} to {}",
        what,
        source.display(),
        destination.display()
    ));
}
