//! Filesystem, checksum and tarball helpers.
//!
//! These all block, and report failures as [`anyhow::Error`]s that name the
//! path involved.

pub mod digest;
pub mod fs;
pub mod tar;

pub use digest::{checksum, Digest};
