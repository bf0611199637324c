//! Source descriptors

use std::fmt;
use std::path::PathBuf;

/// Argument that stands for standard input.
pub const STDIN_ARG: &str = "-";

/// One unit of input: standard input or a named file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Build the source list for a run; no arguments means stdin.
    pub fn list<I, P>(args: I) -> Vec<Source>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let sources: Vec<Source> = args.into_iter().map(|p| Source::from(p.into())).collect();
        if sources.is_empty() {
            vec![Source::Stdin]
        } else {
            sources
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == STDIN_ARG {
            Source::Stdin
        } else {
            Source::File(path)
        }
    }
}

impl From<&str> for Source {
    fn from(arg: &str) -> Self {
        Source::from(PathBuf::from(arg))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str(STDIN_ARG),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
