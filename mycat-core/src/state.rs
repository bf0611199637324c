//! Cross-source stream state
//!
//! The line counter and the blank-run flag form one continuous sequence
//! over every source of a run. The state is a plain value: each line moves
//! it forward through [`StreamState::advance`], and the processor threads
//! the result from one source into the next.

use mycat_config::Config;

/// What to do with the line that was just read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Squeezed away: not counted, not printed.
    Discard,
    /// Print the line, prefixed with `number` when present.
    Emit { number: Option<u64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamState {
    pub next_line_number: u64,
    pub previous_line_was_blank: bool,
}

impl Default for StreamState {
    fn default() -> Self {
        Self {
            next_line_number: 1,
            previous_line_was_blank: false,
        }
    }
}

impl StreamState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line and return the next state plus the action for it.
    pub fn advance(self, is_blank: bool, config: &Config) -> (StreamState, LineAction) {
        if config.squeeze_blanks && is_blank && self.previous_line_was_blank {
            return (self, LineAction::Discard);
        }

        let mut next = StreamState {
            previous_line_was_blank: is_blank,
            ..self
        };

        let number = if config.numbering.numbers(is_blank) {
            let n = next.next_line_number;
            next.next_line_number += 1;
            Some(n)
        } else {
            None
        };

        (next, LineAction::Emit { number })
    }

    /// Numbers handed out so far.
    pub fn lines_numbered(&self) -> u64 {
        self.next_line_number - 1
    }
}
