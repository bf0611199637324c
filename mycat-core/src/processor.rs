//! Multi-source stream processor

use crate::access::check_access;
use crate::error::{CatError, SourceError};
use crate::source::Source;
use crate::state::{LineAction, StreamState};
use crate::transform::write_transformed;
use mycat_config::{Config, LINE_NUMBER_WIDTH, PROGRAM_NAME};
use mycat_vfs::VirtualFileSystem;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, instrument, trace};

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Result of streaming one already-acquired source.
#[derive(Debug)]
pub struct Pass {
    /// State to hand to the next source.
    pub state: StreamState,
    pub lines_emitted: u64,
    pub lines_discarded: u64,
    /// Set when reading stopped on an IO error instead of end of input.
    pub read_error: Option<io::Error>,
}

/// Result of a whole run.
#[derive(Debug)]
pub struct RunReport {
    pub status: ExitStatus,
    pub state: StreamState,
    /// Failed sources, in processing order.
    pub failed: Vec<SourceError>,
}

/// Read one line into `buf` without its `\n`.
///
/// Returns `false` at end of input. A final line without a terminator is
/// still a line; input ending in `\n` yields no extra empty line.
fn read_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(true)
}

fn write_line<W: Write + ?Sized>(
    out: &mut W,
    number: Option<u64>,
    line: &[u8],
    config: &Config,
) -> io::Result<()> {
    if let Some(n) = number {
        write!(out, "{:>width$} ", n, width = LINE_NUMBER_WIDTH)?;
    }
    write_transformed(out, line, config)?;
    out.write_all(b"\n")
}

/// Stream every line of `reader` to `out`, starting from `state`.
///
/// A read error ends the source but is not an `Err`: it comes back in
/// [`Pass::read_error`] together with the state reached so far. Only a
/// failing output sink returns `Err`.
pub fn process_reader<R, W>(
    mut reader: R,
    config: &Config,
    mut state: StreamState,
    out: &mut W,
) -> Result<Pass, CatError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut buf = Vec::new();
    let mut lines_emitted = 0;
    let mut lines_discarded = 0;
    let mut read_error = None;

    loop {
        match read_line(&mut reader, &mut buf) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                read_error = Some(e);
                break;
            }
        }

        let (next, action) = state.advance(buf.is_empty(), config);
        state = next;

        match action {
            LineAction::Discard => {
                lines_discarded += 1;
                trace!(target: "mycat::stream", "squeezed blank line");
            }
            LineAction::Emit { number } => {
                write_line(out, number, &buf, config).map_err(CatError::Write)?;
                lines_emitted += 1;
            }
        }
    }

    Ok(Pass {
        state,
        lines_emitted,
        lines_discarded,
        read_error,
    })
}

/// Concatenates sources through a file system with a fixed configuration.
pub struct Concatenator<'fs> {
    fs: &'fs dyn VirtualFileSystem,
    config: Config,
}

impl<'fs> Concatenator<'fs> {
    pub fn new(fs: &'fs dyn VirtualFileSystem, config: Config) -> Self {
        Self { fs, config }
    }

    /// Process `sources` in order, writing lines to `out` and diagnostics
    /// (`mycat: <name>: <message>`) to `err`.
    ///
    /// An empty source list reads standard input. A failed source never
    /// stops the run; it only turns the status into
    /// [`ExitStatus::Failure`].
    pub fn run<I, W, E>(
        &self,
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
        let default_sources = [Source::Stdin];
        let sources = if sources.is_empty() {
            &default_sources[..]
        } else {
            sources
        };

        debug!(
            target: "mycat::stream",
            sources = sources.len(),
            numbering = self.config.numbering.as_str(),
            squeeze = self.config.squeeze_blanks,
            "starting run"
        );

        let mut state = StreamState::new();
        let mut failed = Vec::new();

        for source in sources {
            let (next, error) = self.process_source(source, stdin, state, out)?;
            state = next;

            if let Some(error) = error {
                debug!(target: "mycat::stream", kind = error.kind(), %error, "source failed");
                // Nothing sensible can be done if the error sink itself is gone.
                let _ = writeln!(err, "{}: {}", PROGRAM_NAME, error);
                failed.push(error);
            }
        }

        let status = if failed.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        };

        debug!(
            target: "mycat::stream",
            lines_numbered = state.lines_numbered(),
            failed = failed.len(),
            "run finished"
        );

        Ok(RunReport {
            status,
            state,
            failed,
        })
    }

    /// Acquire one source, stream it, release it.
    #[instrument(target = "mycat::stream", level = "debug", skip_all, fields(source = %source))]
    fn process_source<I, W>(
        &self,
        source: &Source,
        stdin: &mut I,
        state: StreamState,
        out: &mut W,
    ) -> Result<(StreamState, Option<SourceError>), CatError>
    where
        I: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let pass = match source {
            Source::Stdin => process_reader(&mut *stdin, &self.config, state, out)?,
            Source::File(path) => {
                if let Err(e) = check_access(self.fs, path) {
                    return Ok((state, Some(e)));
                }
                let reader = match self.fs.open(path) {
                    Ok(reader) => reader,
                    Err(e) => {
                        let error = SourceError::OpenFailure {
                            name: source.name(),
                            source: e,
                        };
                        return Ok((state, Some(error)));
                    }
                };
                // `reader` is dropped, and the file closed, when this arm ends.
                process_reader(reader, &self.config, state, out)?
            }
        };

        out.flush().map_err(CatError::Write)?;

        debug!(
            target: "mycat::stream",
            emitted = pass.lines_emitted,
            discarded = pass.lines_discarded,
            "source done"
        );

        let error = pass
            .read_error
            .as_ref()
            .map(|e| SourceError::read_failure(source.name(), e));
        Ok((pass.state, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mycat_config::Options;
    use mycat_vfs::{EntryKind, MemoryFileSystem, VfsError, VfsResult};
    use std::io::Cursor;
    use std::path::Path;

    struct Outcome {
        report: RunReport,
        out: String,
        err: String,
    }

    fn run_with(
        fs: &dyn VirtualFileSystem,
        options: Options,
        sources: &[&str],
        stdin: &[u8],
    ) -> Outcome {
        let sources: Vec<Source> = sources.iter().map(|s| Source::from(*s)).collect();
        let mut stdin = Cursor::new(stdin.to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = Concatenator::new(fs, Config::from(options))
            .run(&sources, &mut stdin, &mut out, &mut err)
            .unwrap();
        Outcome {
            report,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn number_all() -> Options {
        Options {
            number_lines: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_concatenation() {
        let fs = MemoryFileSystem::with_files([
            ("a", b"one\ntwo\n".to_vec()),
            ("b", b"three\n".to_vec()),
        ]);
        let outcome = run_with(&fs, Options::default(), &["a", "b"], b"");
        assert_eq!(outcome.out, "one\ntwo\nthree\n");
        assert!(outcome.err.is_empty());
        assert_eq!(outcome.report.status, ExitStatus::Success);
    }

    #[test]
    fn test_numbering_continues_across_sources() {
        let fs = MemoryFileSystem::with_files([("a", b"a\nb\n".to_vec()), ("b", b"c\n".to_vec())]);
        let outcome = run_with(&fs, number_all(), &["a", "b"], b"");
        assert_eq!(outcome.out, "     1 a\n     2 b\n     3 c\n");
        assert_eq!(outcome.report.state.next_line_number, 4);
    }

    #[test]
    fn test_number_width_grows_past_six_digits() {
        let mut buf = Vec::new();
        let state = StreamState {
            next_line_number: 1_234_567,
            previous_line_was_blank: false,
        };
        let cfg = Config::from(number_all());
        process_reader(Cursor::new(b"x\n".to_vec()), &cfg, state, &mut buf).unwrap();
        assert_eq!(buf, b"1234567 x\n");
    }

    #[test]
    fn test_squeeze_scenario() {
        let fs = MemoryFileSystem::with_files([("f", b"a\n\n\nb\n".to_vec())]);
        let options = Options {
            squeeze_blanks: true,
            ..Default::default()
        };
        let outcome = run_with(&fs, options, &["f"], b"");
        assert_eq!(outcome.out, "a\n\nb\n");
    }

    #[test]
    fn test_squeeze_spans_source_boundary() {
        let fs = MemoryFileSystem::with_files([
            ("a", b"x\n\n".to_vec()),
            ("b", b"\n\ny\n".to_vec()),
        ]);
        let options = Options {
            squeeze_blanks: true,
            number_lines: true,
            ..Default::default()
        };
        let outcome = run_with(&fs, options, &["a", "b"], b"");
        assert_eq!(outcome.out, "     1 x\n     2 \n     3 y\n");
    }

    #[test]
    fn test_number_non_blank() {
        let fs = MemoryFileSystem::with_files([("f", b"a\n\nb\n".to_vec())]);
        let options = Options {
            number_non_blank: true,
            number_lines: true,
            ..Default::default()
        };
        let outcome = run_with(&fs, options, &["f"], b"");
        assert_eq!(outcome.out, "     1 a\n\n     2 b\n");
    }

    #[test]
    fn test_show_tabs_and_ends() {
        let fs = MemoryFileSystem::with_files([("f", b"x\ty\n".to_vec())]);
        let options = Options {
            show_tabs: true,
            show_ends: true,
            ..Default::default()
        };
        let outcome = run_with(&fs, options, &["f"], b"");
        assert_eq!(outcome.out, "x^Iy$\n");
    }

    #[test]
    fn test_number_prefix_is_not_transformed() {
        let fs = MemoryFileSystem::with_files([("f", b"\tz\n".to_vec())]);
        let options = Options {
            number_lines: true,
            show_tabs: true,
            show_ends: true,
            ..Default::default()
        };
        let outcome = run_with(&fs, options, &["f"], b"");
        assert_eq!(outcome.out, "     1 ^Iz$\n");
    }

    #[test]
    fn test_unterminated_final_line() {
        let fs = MemoryFileSystem::with_files([("f", b"a\nb".to_vec())]);
        let options = Options {
            show_ends: true,
            ..Default::default()
        };
        let outcome = run_with(&fs, options, &["f"], b"");
        assert_eq!(outcome.out, "a$\nb$\n");
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let fs = MemoryFileSystem::with_files([("f", b"a\n".to_vec()), ("empty", Vec::new())]);
        let outcome = run_with(&fs, number_all(), &["f", "empty"], b"");
        assert_eq!(outcome.out, "     1 a\n");
    }

    #[test]
    fn test_crlf_keeps_carriage_return() {
        let fs = MemoryFileSystem::with_files([("f", b"a\r\n".to_vec())]);
        let options = Options {
            show_ends: true,
            ..Default::default()
        };
        let outcome = run_with(&fs, options, &["f"], b"");
        assert_eq!(outcome.out, "a\r$\n");
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let fs = MemoryFileSystem::with_files([("f", vec![0xff, 0xfe, b'\n'])]);
        let sources = [Source::from("f")];
        let mut out = Vec::new();
        Concatenator::new(&fs, Config::default())
            .run(&sources, &mut io::empty(), &mut out, &mut io::sink())
            .unwrap();
        assert_eq!(out, vec![0xff, 0xfe, b'\n']);
    }

    #[test]
    fn test_no_sources_reads_stdin() {
        let fs = MemoryFileSystem::new();
        let outcome = run_with(&fs, number_all(), &[], b"in\n");
        assert_eq!(outcome.out, "     1 in\n");
        assert_eq!(outcome.report.status, ExitStatus::Success);
    }

    #[test]
    fn test_dash_reads_stdin_between_files() {
        let fs = MemoryFileSystem::with_files([("a", b"a\n".to_vec()), ("b", b"b\n".to_vec())]);
        let outcome = run_with(&fs, number_all(), &["a", "-", "b"], b"s\n");
        assert_eq!(outcome.out, "     1 a\n     2 s\n     3 b\n");
    }

    #[test]
    fn test_stdin_twice_is_exhausted_second_time() {
        let fs = MemoryFileSystem::new();
        let outcome = run_with(&fs, Options::default(), &["-", "-"], b"once\n");
        assert_eq!(outcome.out, "once\n");
    }

    #[test]
    fn test_missing_source_does_not_stop_run() {
        let fs = MemoryFileSystem::with_files([("a", b"a\n".to_vec()), ("c", b"c\n".to_vec())]);
        let outcome = run_with(&fs, number_all(), &["a", "missing", "c"], b"");
        assert_eq!(outcome.out, "     1 a\n     2 c\n");
        assert_eq!(outcome.err, "mycat: missing: No such file or directory\n");
        assert_eq!(outcome.report.status, ExitStatus::Failure);
        assert_eq!(outcome.report.failed.len(), 1);
        assert_eq!(outcome.report.failed[0].name(), "missing");
    }

    #[test]
    fn test_directory_source() {
        let fs = MemoryFileSystem::with_files([("a", b"a\n".to_vec())]);
        fs.create_dir(Path::new("dir"));
        let outcome = run_with(&fs, Options::default(), &["dir", "a"], b"");
        assert_eq!(outcome.out, "a\n");
        assert_eq!(outcome.err, "mycat: dir: Is a directory\n");
        assert_eq!(outcome.report.status, ExitStatus::Failure);
    }

    #[test]
    fn test_read_error_keeps_earlier_lines_and_continues() {
        let fs = MemoryFileSystem::with_files([("next", b"after\n".to_vec())]);
        fs.write_failing(Path::new("bad"), b"before\n");
        let outcome = run_with(&fs, number_all(), &["bad", "next"], b"");
        assert_eq!(outcome.out, "     1 before\n     2 after\n");
        assert_eq!(outcome.err, "mycat: bad: Read error: Input/output error\n");
        assert!(matches!(
            outcome.report.failed[0],
            SourceError::ReadFailure { .. }
        ));
        assert_eq!(outcome.report.status, ExitStatus::Failure);
    }

    /// Passes the access check but refuses to open anything.
    struct VanishingFs;

    impl VirtualFileSystem for VanishingFs {
        fn stat(&self, _path: &Path) -> VfsResult<EntryKind> {
            Ok(EntryKind::File)
        }

        fn check_readable(&self, _path: &Path) -> VfsResult<()> {
            Ok(())
        }

        fn open(&self, path: &Path) -> VfsResult<Box<dyn BufRead + '_>> {
            Err(VfsError::NotFound {
                path: path.display().to_string(),
            })
        }
    }

    #[test]
    fn test_open_failure_after_access_check() {
        let outcome = run_with(&VanishingFs, Options::default(), &["gone", "-"], b"s\n");
        assert_eq!(outcome.out, "s\n");
        assert_eq!(outcome.err, "mycat: gone: No such file or directory\n");
        assert!(matches!(
            outcome.report.failed[0],
            SourceError::OpenFailure { .. }
        ));
    }

    /// Output sink that accepts `limit` bytes and then fails.
    struct BrokenPipe {
        limit: usize,
        written: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written >= self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"));
            }
            let n = buf.len().min(self.limit - self.written);
            self.written += n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_aborts_run() {
        let fs = MemoryFileSystem::with_files([("f", b"aaaa\nbbbb\n".to_vec())]);
        let sources = [Source::from("f")];
        let mut out = BrokenPipe { limit: 3, written: 0 };
        let result = Concatenator::new(&fs, Config::default()).run(
            &sources,
            &mut io::empty(),
            &mut out,
            &mut io::sink(),
        );
        assert!(matches!(result, Err(CatError::Write(_))));
    }

    #[test]
    fn test_exit_status_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
    }
}
