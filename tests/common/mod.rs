// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use flate2::write::GzEncoder;
use flate2::Compression;
use gover::tool::ToolRunner;
use std::io::Write;
use std::path::Path;

/// Build a gzipped, release-shaped tarball from `(path, mode, contents)`
/// triples. `None` contents produces a directory entry.
pub fn release_archive(entries: &[(&str, u32, Option<&[u8]>)]) -> Vec<u8> {
    let mut tar_bytes = Vec::new();
    {
        let mut builder = tar::Builder::new(&mut tar_bytes);
        for (path, mode, contents) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_mode(*mode);
            match contents {
                Some(data) => {
                    header.set_entry_type(tar::EntryType::Regular);
                    header.set_size(data.len() as u64);
                    builder.append_data(&mut header, path, *data).unwrap();
                }
                None => {
                    header.set_entry_type(tar::EntryType::Directory);
                    header.set_size(0);
                    builder.append_data(&mut header, path, std::io::empty()).unwrap();
                }
            }
        }
        builder.finish().unwrap();
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&tar_bytes).unwrap();
    encoder.finish().unwrap()
}

/// Tool runner that records nothing and spawns nothing: version-control
/// calls succeed silently, and a "build" just materializes the
/// worktree's `bin` directory the way a real build would.
pub struct StubRunner;

impl ToolRunner for StubRunner {
    fn run_version_control(&self, _args: &[&str]) -> gover::Result<()> {
        Ok(())
    }

    fn run_build(&self, work_dir: &Path, _env: &[(&str, String)]) -> gover::Result<()> {
        // The build runs in <worktree>/src and leaves <worktree>/bin.
        let worktree = work_dir.parent().expect("worktree src dir has a parent");
        std::fs::create_dir_all(worktree.join("bin"))?;
        Ok(())
    }
}
