// src/acquire.rs

//! Verified acquisition of the pinned bootstrap release.
//!
//! Downloads the platform's release tarball and streams it straight
//! through digesting, decompression, and extraction in one pass. The
//! digest is compared against the compiled-in value only after the
//! stream is exhausted, so a failed verification leaves an extracted
//! but untrusted tree on disk: callers must not use the destination
//! unless acquisition returned `Ok`.

use crate::digest::DigestReader;
use crate::error::{Error, Result};
use crate::extract;
use crate::platform::Platform;
use crate::release;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Connect timeout for the release fetch. The transfer itself is
/// bounded only by the transport.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// The synthetic root folder every release tarball nests its tree under.
const ARCHIVE_ROOT: &str = "go";

/// Fetches and verifies the pinned bootstrap release.
pub struct Acquirer {
    client: Client,
}

impl Acquirer {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| Error::DownloadError(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Download, extract, and verify the pinned release into `dest`.
    ///
    /// The digest table decides up front whether the running platform
    /// has a published release at all; the fetched bytes are then only
    /// accepted if their SHA-256 matches the pinned value.
    pub fn acquire(&self, dest: &Path) -> Result<()> {
        let platform = Platform::current();
        let expected = release::expected_digest(&platform)?;
        let url = release::download_url(&platform);

        info!("Downloading bootstrap release {} for {}", release::RELEASE_VERSION, platform);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::DownloadError(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if status.as_u16() != 200 {
            // Plain-text error bodies from the mirror carry the useful
            // part of the diagnostic.
            let is_text = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|ct| ct.contains("text/plain"));
            let detail = if is_text { response.text().ok() } else { None };
            return Err(Error::DownloadError(match detail {
                Some(body) if !body.trim().is_empty() => {
                    format!("HTTP {status} from {url}: {}", body.trim())
                }
                _ => format!("HTTP {status} from {url}"),
            }));
        }

        let progress = download_progress(response.content_length().unwrap_or(0));
        let result = acquire_from_reader(response, expected, dest, Some(&progress));
        match &result {
            Ok(()) => progress.finish_with_message("verified"),
            Err(_) => progress.abandon(),
        }
        result
    }
}

/// Stream a release archive through hash, gunzip, and unpack stages,
/// then enforce the digest policy.
///
/// Split out from the HTTP path so the whole pipeline can be exercised
/// against a fixed byte buffer.
pub fn acquire_from_reader<R: Read>(
    reader: R,
    expected: &str,
    dest: &Path,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    let mut tee = DigestReader::new(reader);
    if let Some(pb) = progress {
        tee = tee.with_progress(pb.clone());
    }

    extract::extract_tar_gz(&mut tee, dest, ARCHIVE_ROOT)?;

    let actual = tee.finalize();
    if actual != expected {
        warn!("downloaded release does not match the pinned SHA-256");
        return Err(Error::ChecksumMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

fn download_progress(total_size: u64) -> ProgressBar {
    if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec}) {msg}")
                .expect("Invalid spinner template"),
        );
        pb
    }
}
