// src/extract.rs

//! Streaming extraction of the release tarball.
//!
//! The archive flows through three stages in a single pass: the caller's
//! digest accumulator (a [`DigestReader`](crate::digest::DigestReader)
//! wrapped around the raw stream), gzip decompression, and tar entry
//! unpacking. No stage buffers the whole archive; each chunk is hashed,
//! inflated, and written before the next is read.
//!
//! There is no rollback: an I/O failure part way through leaves the
//! already-written entries on disk.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Read};
use std::os::unix::fs::PermissionsExt;
use std::path::{Component, Path, PathBuf};
use tar::EntryType;
use tracing::debug;

/// Unpack a gzip-compressed tar stream into `dest`.
///
/// Entry names have the archive's synthetic root component
/// (`strip_prefix`) removed before being joined onto `dest`, and each
/// entry's declared permission bits are preserved. Only directories and
/// regular files are accepted; any other entry kind is a hard error.
///
/// Returns only once the underlying stream is exhausted, so a digest
/// accumulated by the caller's reader covers every byte of the archive,
/// trailing padding included.
pub fn extract_tar_gz<R: Read>(reader: R, dest: &Path, strip_prefix: &str) -> Result<()> {
    let gz = GzDecoder::new(reader);
    let mut archive = tar::Archive::new(gz);

    let entries = archive
        .entries()
        .map_err(|e| Error::IoError(format!("failed to read archive: {e}")))?;

    for entry in entries {
        let mut entry =
            entry.map_err(|e| Error::IoError(format!("failed to read archive entry: {e}")))?;
        let name = entry
            .path()
            .map_err(|e| Error::IoError(format!("bad path in archive entry: {e}")))?
            .into_owned();
        let mode = entry
            .header()
            .mode()
            .map_err(|e| Error::IoError(format!("bad mode in archive entry: {e}")))?;

        let rel = strip_root(&name, strip_prefix);
        if rel.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(Error::PathTraversal(name));
        }
        let target = dest.join(&rel);

        match entry.header().entry_type() {
            EntryType::Directory => {
                debug!("directory: {}", target.display());
                fs::create_dir_all(&target).map_err(|e| {
                    Error::IoError(format!("failed to create {}: {e}", target.display()))
                })?;
                fs::set_permissions(&target, fs::Permissions::from_mode(mode)).map_err(|e| {
                    Error::IoError(format!("failed to chmod {}: {e}", target.display()))
                })?;
            }
            EntryType::Regular => {
                debug!("file: {}", target.display());
                let mut file = File::create(&target).map_err(|e| {
                    Error::IoError(format!("failed to create {}: {e}", target.display()))
                })?;
                io::copy(&mut entry, &mut file).map_err(|e| {
                    Error::IoError(format!("failed to write {}: {e}", target.display()))
                })?;
                fs::set_permissions(&target, fs::Permissions::from_mode(mode)).map_err(|e| {
                    Error::IoError(format!("failed to chmod {}: {e}", target.display()))
                })?;
            }
            kind => {
                return Err(Error::UnsupportedEntry {
                    kind: format!("{kind:?}"),
                    path: name,
                });
            }
        }
    }

    // The tar reader stops at the end-of-archive marker; drain whatever
    // the gzip trailer and padding still hold so the caller's digest
    // covers the entire stream.
    let mut raw = archive.into_inner().into_inner();
    io::copy(&mut raw, &mut io::sink())
        .map_err(|e| Error::IoError(format!("failed to drain archive stream: {e}")))?;

    Ok(())
}

/// Drop the leading `root` component from an archive entry name.
///
/// The release tarball nests everything under a single synthetic folder;
/// stripping it makes the destination directory itself the toolchain
/// root. Names that do not start with `root` are kept as-is.
fn strip_root(name: &Path, root: &str) -> PathBuf {
    let mut components = name.components();
    match components.next() {
        Some(Component::Normal(first)) if first == OsStr::new(root) => {
            components.as_path().to_path_buf()
        }
        _ => name.to_path_buf(),
    }
}
