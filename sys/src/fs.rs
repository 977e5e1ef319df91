//! Small filesystem helpers.
//!
//! Everything here blocks, and every failure carries the path it was about.

use anyhow::{Context, Result};
use filetime::FileTime;
use std::fs::{self, Metadata, OpenOptions};
use std::path::{Path, PathBuf};

/// Absolute form of `path`, relative to the working directory.
///
/// Doesn't touch the filesystem beyond reading the working directory, so the
/// path needn't exist.
pub fn abs(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    Ok(cwd.join(path))
}

pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Create a directory and any missing parents. Returns its absolute path.
pub fn mkdir_p(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = abs(path)?;
    fs::create_dir_all(&path)
        .with_context(|| format!("failed to create directory {}", path.display()))?;
    Ok(path)
}

/// Create an empty file, or bump the modification time of an existing one.
pub fn touch(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = abs(path)?;
    if path.exists() {
        filetime::set_file_mtime(&path, FileTime::now())
            .with_context(|| format!("failed to touch {}", path.display()))?;
    } else {
        if let Some(parent) = path.parent() {
            mkdir_p(parent)?;
        }
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
    }
    Ok(path)
}

/// Copy one file, creating parent directories as needed.
///
/// If `dst` is an existing directory the file lands inside it. Permissions
/// come along with the contents. Returns the path written.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<PathBuf> {
    let (src, mut dst) = (abs(src)?, abs(dst)?);
    if dst.is_dir() {
        if let Some(name) = src.file_name() {
            dst = dst.join(name);
        }
    }
    if let Some(parent) = dst.parent() {
        mkdir_p(parent)?;
    }
    fs::copy(&src, &dst).with_context(|| {
        format!("failed to copy {} to {}", src.display(), dst.display())
    })?;
    tracing::debug!(src = %src.display(), dst = %dst.display(), "copied file");
    Ok(dst)
}

/// Copy a file or a directory tree.
///
/// Copying a directory onto an existing directory puts it inside, under its
/// own name, like `cp -r`. Otherwise `dst` becomes the copy.
///
/// ```
/// let tmp = tempfile::tempdir()?;
/// nub_sys::fs::copy("fixture", tmp.path())?;
/// assert!(tmp.path().join("fixture/dir1/dir2/nested.txt").is_file());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn copy(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<PathBuf> {
    let (src, mut dst) = (abs(src)?, abs(dst)?);
    if !src.is_dir() {
        return copy_file(&src, &dst);
    }
    if dst.is_dir() {
        if let Some(name) = src.file_name() {
            dst = dst.join(name);
        }
    }
    mkdir_p(&dst)?;
    for (rel, meta) in walk(&src)? {
        let target = dst.join(&rel);
        if meta.is_dir() {
            mkdir_p(&target)?;
        } else {
            copy_file(src.join(&rel), &target)?;
        }
    }
    Ok(dst)
}

/// Every entry under `base`, as paths relative to it, parents before children.
pub fn walk(base: impl AsRef<Path>) -> Result<Vec<(PathBuf, Metadata)>> {
    let base = base.as_ref();
    let mut output = vec![];
    scan(base, base, &mut output)?;
    output.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(output)
}

fn scan(base: &Path, cur: &Path, output: &mut Vec<(PathBuf, Metadata)>) -> Result<()> {
    let entries =
        fs::read_dir(cur).with_context(|| format!("failed to read directory {}", cur.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", cur.display()))?;
        let path = entry.path();
        let meta = fs::symlink_metadata(&path)
            .with_context(|| format!("failed to stat {}", path.display()))?;
        let rel = path.strip_prefix(base).with_context(|| {
            format!("{} is not under {}", path.display(), base.display())
        })?;
        output.push((rel.to_path_buf(), meta.clone()));
        if meta.is_dir() {
            scan(base, &path, output)?;
        }
    }
    Ok(())
}

/// Lines of a text file, without their line endings.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Write lines to a file, each ending in a newline. Creates parent directories.
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = abs(path)?;
    if let Some(parent) = path.parent() {
        mkdir_p(parent)?;
    }
    let text: String = lines
        .iter()
        .map(|line| format!("{}\n", line.as_ref()))
        .collect();
    fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))
}
