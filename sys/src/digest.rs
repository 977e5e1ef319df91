//! SHA-256 digests of bytes and files.

use anyhow::{Context, Result};
use sha2::{Digest as UpstreamDigest, Sha256};
use std::fmt;
use std::fs::File;
use std::path::Path;

const DIGEST_LENGTH: usize = 256 / 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_LENGTH],
}

impl Digest {
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    fn finish(hasher: Sha256) -> Self {
        Self {
            bytes: hasher.finalize().into(),
        }
    }
}

impl<T> From<T> for Digest
where
    T: AsRef<[u8]>,
{
    fn from(item: T) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(item);
        Self::finish(hasher)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Digest of a file's contents, read as a stream.
///
/// ```
/// let d = nub_sys::checksum("fixture/file_at_root.txt")?;
/// assert_eq!(d, nub_sys::Digest::from("Here are some file contents, teehee!\n"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn checksum(path: impl AsRef<Path>) -> Result<Digest> {
    let path = path.as_ref();
    let mut f = File::open(path)
        .with_context(|| format!("failed to open {} for checksum", path.display()))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut f, &mut hasher)
        .with_context(|| format!("failed to read {} for checksum", path.display()))?;
    tracing::trace!(path = %path.display(), "computed checksum");
    Ok(Digest::finish(hasher))
}
