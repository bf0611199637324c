//! mycat Config - Pure configuration data structures
//!
//! This crate contains only data structures, no I/O or global state.
//! It serves as the shared configuration vocabulary across all mycat crates.

/// Program name used as the prefix of every diagnostic.
pub const PROGRAM_NAME: &str = "mycat";

/// Minimum width of a printed line number (right-justified).
pub const LINE_NUMBER_WIDTH: usize = 6;

/// Replacement for a horizontal tab when tabs are shown.
pub const TAB_MARKER: &[u8] = b"^I";

/// Marker appended to every line when line ends are shown.
pub const END_MARKER: u8 = b'$';

/// Raw command-line flags, exactly as the user gave them.
///
/// `number_lines` and `number_non_blank` may both be set here; the
/// conflict is resolved when converting into [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// `-n`: number all output lines
    pub number_lines: bool,
    /// `-b`: number non-empty output lines
    pub number_non_blank: bool,
    /// `-E`: display `$` at the end of each line
    pub show_ends: bool,
    /// `-T`: display TAB characters as `^I`
    pub show_tabs: bool,
    /// `-s`: squeeze multiple adjacent blank lines
    pub squeeze_blanks: bool,
}

/// Which lines receive a printed sequence number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberingMode {
    /// No numbering
    #[default]
    None,
    /// Every emitted line
    All,
    /// Only lines of non-zero length
    NonBlank,
}

impl NumberingMode {
    /// Resolve the two numbering flags. `-b` wins over `-n`.
    pub fn from_flags(number_lines: bool, number_non_blank: bool) -> Self {
        match (number_lines, number_non_blank) {
            (_, true) => NumberingMode::NonBlank,
            (true, false) => NumberingMode::All,
            (false, false) => NumberingMode::None,
        }
    }

    /// Whether a line with the given blankness gets a number.
    pub fn numbers(&self, is_blank: bool) -> bool {
        match self {
            NumberingMode::None => false,
            NumberingMode::All => true,
            NumberingMode::NonBlank => !is_blank,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingMode::None => "none",
            NumberingMode::All => "all",
            NumberingMode::NonBlank => "non-blank",
        }
    }
}

/// Resolved, immutable run configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub numbering: NumberingMode,
    pub show_ends: bool,
    pub show_tabs: bool,
    pub squeeze_blanks: bool,
}

impl Config {
    /// Build a config from raw flags, resolving numbering precedence once.
    pub fn from_options(options: Options) -> Self {
        Self {
            numbering: NumberingMode::from_flags(options.number_lines, options.number_non_blank),
            show_ends: options.show_ends,
            show_tabs: options.show_tabs,
            squeeze_blanks: options.squeeze_blanks,
        }
    }
}

impl From<Options> for Config {
    fn from(options: Options) -> Self {
        Config::from_options(options)
    }
}
