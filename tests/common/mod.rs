//! Test helpers
//!
//! End-to-end helpers around the `mycat` facade.

#![allow(dead_code)]

use mycat::{concatenate, ExitStatus, Options, Source, SourceError, VirtualFileSystem};
use std::io::Cursor;
use std::path::PathBuf;

/// Everything a run produced
#[derive(Debug)]
pub struct CatOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
    pub failed: Vec<SourceError>,
}

impl CatOutput {
    /// Output split into lines, terminators removed
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Leading line numbers, in output order
    pub fn numbers(&self) -> Vec<u64> {
        self.lines()
            .iter()
            .filter_map(|line| line.get(..6)?.trim().parse().ok())
            .collect()
    }
}

/// Run mycat over `sources` with the given flags and stdin content.
///
/// # Example
/// ```ignore
/// let output = run_cat(&fs, Options::default(), &["a.txt"], b"");
/// assert_eq!(output.status, ExitStatus::Success);
/// ```
pub fn run_cat(
    fs: &dyn VirtualFileSystem,
    options: Options,
    sources: &[&str],
    stdin: &[u8],
) -> CatOutput {
    let sources: Vec<Source> = sources.iter().map(|s| Source::from(*s)).collect();
    let mut stdin = Cursor::new(stdin.to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();

    let report = concatenate(fs, options, &sources, &mut stdin, &mut out, &mut err)
        .expect("in-memory sinks never fail");

    CatOutput {
        stdout: String::from_utf8(out).expect("test output is UTF-8"),
        stderr: String::from_utf8(err).expect("diagnostics are UTF-8"),
        status: report.status,
        failed: report.failed,
    }
}

/// A scratch file under the system temp directory, removed on drop.
pub struct TempFile {
    pub path: PathBuf,
}

impl TempFile {
    pub fn new(name: &str, content: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("mycat_it_{}_{}", name, std::process::id()));
        std::fs::write(&path, content).expect("create temp file");
        Self { path }
    }

    pub fn arg(&self) -> String {
        self.path.display().to_string()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
