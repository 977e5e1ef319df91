//! Gzipped tarballs of directory trees.
//!
//! Entries keep their mode, modification time and access time, and come back
//! with them on extraction.
//!
//! ```
//! let tmp = tempfile::tempdir()?;
//! let tarball = tmp.path().join("fixture.tar.gz");
//! nub_sys::tar::create(&tarball, "fixture")?;
//! nub_sys::tar::extract_all(&tarball, tmp.path().join("out"))?;
//! assert!(tmp.path().join("out/dir1/dir2/nested.txt").is_file());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::fs::{abs, mkdir_p, walk};
use anyhow::{Context, Result};
use filetime::FileTime;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use ::tar::{Archive, Builder, EntryType, Header, HeaderMode};

/// Write every entry under `src_dir` into a new tarball at `tarfile`.
///
/// Paths in the archive are relative to `src_dir`. Symlinks are stored as
/// links, not followed. A `tarfile` inside `src_dir` is left out of itself.
pub fn create(tarfile: impl AsRef<Path>, src_dir: impl AsRef<Path>) -> Result<()> {
    let (tarfile, src) = (abs(tarfile)?, abs(src_dir)?);
    let entries = walk(&src)?;
    if let Some(parent) = tarfile.parent() {
        mkdir_p(parent)?;
    }
    let fw = File::create(&tarfile)
        .with_context(|| format!("failed to create tarfile {}", tarfile.display()))?;
    let mut builder = Builder::new(GzEncoder::new(fw, Compression::default()));

    for (rel, meta) in entries {
        let target = src.join(&rel);
        if target == tarfile {
            continue;
        }
        let mut header = Header::new_gnu();
        header.set_metadata_in_mode(&meta, HeaderMode::Complete);
        if let Some(gnu) = header.as_gnu_mut() {
            gnu.set_atime(meta.atime().max(0) as u64);
        }

        if meta.is_dir() {
            builder
                .append_data(&mut header, &rel, std::io::empty())
                .with_context(|| format!("failed to add directory {} to tarball", rel.display()))?;
        } else if meta.is_symlink() {
            let link = std::fs::read_link(&target)
                .with_context(|| format!("failed to read link {}", target.display()))?;
            header.set_entry_type(EntryType::Symlink);
            header.set_size(0);
            builder
                .append_link(&mut header, &rel, &link)
                .with_context(|| format!("failed to add link {} to tarball", rel.display()))?;
        } else if meta.is_file() {
            let fr = File::open(&target)
                .with_context(|| format!("failed to open {} for tarball", target.display()))?;
            builder
                .append_data(&mut header, &rel, fr)
                .with_context(|| format!("failed to add {} to tarball", rel.display()))?;
        } else {
            tracing::warn!(path = %rel.display(), "skipping special file");
            continue;
        }
        tracing::trace!(path = %rel.display(), "added to tarball");
    }

    builder
        .into_inner()
        .and_then(|gz| gz.finish())
        .with_context(|| format!("failed to finish tarball {}", tarfile.display()))?;
    Ok(())
}

/// Unpack every entry of `tarfile` under `dest`, creating it if needed.
pub fn extract_all(tarfile: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let tarfile = abs(tarfile)?;
    let dest = mkdir_p(dest)?;
    let fr = File::open(&tarfile)
        .with_context(|| format!("failed to open tarfile {} for reading", tarfile.display()))?;

    let mut archive = Archive::new(GzDecoder::new(fr));
    archive.set_preserve_permissions(true);
    archive.set_preserve_mtime(true);

    // Times are applied once everything is unpacked, since writing a file
    // bumps its directory's mtime.
    let mut times: Vec<(PathBuf, FileTime, FileTime)> = vec![];
    let entries = archive
        .entries()
        .with_context(|| format!("failed to read entries from {}", tarfile.display()))?;
    for entry in entries {
        let mut entry =
            entry.with_context(|| format!("failed to extract files from {}", tarfile.display()))?;
        let rel = entry
            .path()
            .context("tarball entry has an unreadable path")?
            .into_owned();
        let header = entry.header();
        let mtime = header.mtime().unwrap_or(0);
        let atime = header
            .as_gnu()
            .and_then(|gnu| gnu.atime().ok())
            .filter(|t| *t > 0)
            .unwrap_or(mtime);
        let entry_type = header.entry_type();

        let unpacked = entry
            .unpack_in(&dest)
            .with_context(|| format!("failed to unpack {}", rel.display()))?;
        if !unpacked {
            tracing::warn!(path = %rel.display(), "skipped entry outside destination");
            continue;
        }
        tracing::trace!(path = %rel.display(), ?entry_type, "unpacked");
        // Setting times follows links, and a link's target may not exist.
        if entry_type.is_symlink() || entry_type.is_hard_link() {
            continue;
        }
        times.push((
            dest.join(&rel),
            FileTime::from_unix_time(atime as i64, 0),
            FileTime::from_unix_time(mtime as i64, 0),
        ));
    }

    for (path, atime, mtime) in times.into_iter().rev() {
        filetime::set_file_times(&path, atime, mtime)
            .with_context(|| format!("failed to set file times for {}", path.display()))?;
    }
    Ok(())
}
