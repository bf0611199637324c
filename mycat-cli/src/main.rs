//! mycat CLI - concatenate FILE(S) to standard output
//!
//! ```text
//! mycat [-nbETsh] [--] [FILE]...
//! ```
//!
//! With no FILE, or when FILE is `-`, standard input is read.

use clap::Parser;
use mycat_config::{Config, Options};
use mycat_core::{Concatenator, ExitStatus, Source};
use mycat_vfs::{NativeFileSystem, VirtualFileSystem};
use std::env;
use std::ffi::OsString;
use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;

#[derive(Parser, Debug)]
#[command(
    name = "mycat",
    about = "Concatenate FILE(S) to standard output.",
    override_usage = "mycat [OPTION]... [FILE]...",
    after_help = "With no FILE, or when FILE is -, read standard input.",
    help_template = "Usage: {usage}\n{about}\n\n{all-args}\n{after-help}\n",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// number all output lines
    #[arg(short = 'n')]
    number: bool,

    /// number non-empty output lines, overrides -n
    #[arg(short = 'b')]
    number_nonblank: bool,

    /// display $ at the end of each line
    #[arg(short = 'E')]
    show_ends: bool,

    /// display TAB characters as ^I
    #[arg(short = 'T')]
    show_tabs: bool,

    /// squeeze multiple adjacent blank lines
    #[arg(short = 's')]
    squeeze_blank: bool,

    /// display this help and exit
    #[arg(short = 'h')]
    help: bool,

    /// Files to concatenate; `-` is standard input
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            number_lines: self.number,
            number_non_blank: self.number_nonblank,
            show_ends: self.show_ends,
            show_tabs: self.show_tabs,
            squeeze_blanks: self.squeeze_blank,
        }
    }

    fn sources(&self) -> Vec<Source> {
        Source::list(self.files.iter().cloned())
    }
}

fn main() -> ExitCode {
    logging::init(&LogConfig::from_env());

    let fs = NativeFileSystem::new();
    let mut stdin = io::stdin().lock();
    let stdout = io::stdout();
    // An interactive terminal sees each line as soon as it is written.
    let mut out: Box<dyn Write> = if stdout.is_terminal() {
        Box::new(stdout.lock())
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };
    let mut err = io::stderr().lock();

    run(env::args_os(), &fs, &mut stdin, &mut out, &mut err).into()
}

/// Parse `args` and concatenate the named sources onto `out`.
///
/// Usage and diagnostics go to `err`. Help, a bad command line, a failed
/// source and a write error on `out` all end in [`ExitStatus::Failure`].
fn run<A, T, I, W, E>(
    args: A,
    fs: &dyn VirtualFileSystem,
    stdin: &mut I,
    out: &mut W,
    err: &mut E,
) -> ExitStatus
where
    A: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    I: BufRead + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            debug!(target: "mycat::cli", kind = ?e.kind(), "invalid command line");
            platform::print_parse_error(err, &e);
            return ExitStatus::Failure;
        }
    };

    if cli.help {
        platform::print_usage(err);
        return ExitStatus::Failure;
    }

    let config = Config::from(cli.options());
    let sources = cli.sources();
    debug!(target: "mycat::cli", ?config, sources = sources.len(), "parsed arguments");

    match Concatenator::new(fs, config).run(&sources, stdin, out, err) {
        Ok(report) => report.status,
        Err(e) => {
            platform::print_fatal(err, &e);
            ExitStatus::Failure
        }
    }
}
