//! mycat - concatenate files to standard output
//!
//! Facade over the workspace crates.
//!
//! # Architecture
//!
//! ```text
//! mycat-config/  - Pure data: raw flags, resolved config, constants
//! mycat-vfs/     - File system seam (native and in-memory)
//! mycat-core/    - Line transformer and multi-source stream processor
//! mycat-cli/     - The `mycat` binary: argument parsing, logging, exit codes
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use mycat::{concatenate, MemoryFileSystem, Options, Source};
//!
//! let fs = MemoryFileSystem::with_files([("a.txt", b"hello\n".to_vec())]);
//! let mut out = Vec::new();
//! let report = concatenate(
//!     &fs,
//!     Options { number_lines: true, ..Default::default() },
//!     &[Source::from("a.txt")],
//!     &mut std::io::empty(),
//!     &mut out,
//!     &mut std::io::sink(),
//! )?;
//! assert_eq!(out, b"     1 hello\n");
//! ```

use std::io::{BufRead, Write};

pub use mycat_config::{
    Config, NumberingMode, Options, END_MARKER, LINE_NUMBER_WIDTH, PROGRAM_NAME, TAB_MARKER,
};
pub use mycat_core::{
    check_access, process_reader, transform, CatError, Concatenator, ExitStatus, LineAction, Pass,
    RunReport, Source, SourceError, StreamState,
};
pub use mycat_vfs::{
    EntryKind, MemoryFileSystem, NativeFileSystem, VfsError, VfsResult, VirtualFileSystem,
};

/// Run one concatenation with raw flags.
///
/// Resolves `options` into a [`Config`] and hands everything to a
/// [`Concatenator`].
pub fn concatenate<I, W, E>(
    fs: &dyn VirtualFileSystem,
    options: Options,
    sources: &[Source],
    stdin: &mut I,
    out: &mut W,
    err: &mut E,
) -> Result<RunReport, CatError>
where
    I: BufRead + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    Concatenator::new(fs, Config::from(options)).run(sources, stdin, out, err)
}
