// src/digest.rs

//! SHA-256 accumulation over a byte stream.
//!
//! Release verification hashes the *compressed* bytes exactly as they
//! arrive off the wire, so the digest stage sits in front of
//! decompression: [`DigestReader`] wraps any [`Read`] and observes every
//! byte, in stream order, before handing it to whatever consumes it.

use indicatif::ProgressBar;
use sha2::{Digest, Sha256};
use std::io::{self, Read};

/// Reader adapter that feeds every byte through SHA-256 on the way past.
pub struct DigestReader<R> {
    inner: R,
    hasher: Sha256,
    bytes_read: u64,
    progress: Option<ProgressBar>,
}

impl<R: Read> DigestReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            bytes_read: 0,
            progress: None,
        }
    }

    /// Report stream position to a progress bar as bytes flow through.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Total bytes observed so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Consume the reader and return the accumulated digest as
    /// lowercase hex.
    pub fn finalize(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}

impl<R: Read> Read for DigestReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes_read += n as u64;
        if let Some(pb) = &self.progress {
            pb.set_position(self.bytes_read);
        }
        Ok(n)
    }
}

/// SHA-256 of a byte slice as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}
