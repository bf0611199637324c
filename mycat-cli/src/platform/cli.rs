//! CLI formatted output
//!
//! Usage text and diagnostics for the error sink. Write failures are
//! ignored: there is nowhere left to report them.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::CommandFactory;
use mycat_config::PROGRAM_NAME;
use std::fmt::Display;
use std::io::Write;

use crate::Cli;

/// Print the usage text.
pub fn print_usage<E: Write + ?Sized>(err: &mut E) {
    let help = Cli::command().render_help();
    let _ = write!(err, "{}", help);
}

/// Print an error that ends the program, in the `mycat: <message>` form.
pub fn print_fatal<E: Write + ?Sized>(err: &mut E, message: &dyn Display) {
    let _ = writeln!(err, "{}: {}", PROGRAM_NAME, message);
}

/// Report a command line that could not be parsed, followed by usage.
///
/// Unknown options are named by their first offending character, the way
/// getopt-style tools word it.
pub fn print_parse_error<E: Write + ?Sized>(err: &mut E, error: &clap::Error) {
    match invalid_option(error) {
        Some(option) => {
            print_fatal(err, &format_args!("invalid option -- '{}'", option));
            let _ = writeln!(err, "Try {} -h for more information.", PROGRAM_NAME);
        }
        None => {
            let _ = write!(err, "{}", error.render());
        }
    }
    print_usage(err);
}

/// The option character clap rejected, if the error is an unknown option.
fn invalid_option(error: &clap::Error) -> Option<char> {
    if error.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    let arg = match error.get(ContextKind::InvalidArg)? {
        ContextValue::String(arg) => arg,
        _ => return None,
    };
    // `--name`: the second dash is the first character not understood.
    arg.strip_prefix('-')?.chars().next()
}
