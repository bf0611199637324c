//! Per-line display transformation (`-T`, `-E`)

use mycat_config::{Config, END_MARKER, TAB_MARKER};
use std::io::{self, Write};

/// Map a raw line (without terminator) to its display form.
///
/// Tabs become `^I` when `show_tabs` is set, then `$` is appended when
/// `show_ends` is set. Every other byte passes through unchanged.
pub fn transform(line: &[u8], config: &Config) -> Vec<u8> {
    let mut result = Vec::with_capacity(line.len() + 1);

    if config.show_tabs {
        for &byte in line {
            if byte == b'\t' {
                result.extend_from_slice(TAB_MARKER);
            } else {
                result.push(byte);
            }
        }
    } else {
        result.extend_from_slice(line);
    }

    if config.show_ends {
        result.push(END_MARKER);
    }

    result
}

/// Write the display form of `line` straight into `out`.
///
/// Same output as [`transform`] without the intermediate buffer.
pub fn write_transformed<W: Write + ?Sized>(
    out: &mut W,
    line: &[u8],
    config: &Config,
) -> io::Result<()> {
    if config.show_tabs {
        let mut rest = line;
        while let Some(pos) = rest.iter().position(|&b| b == b'\t') {
            out.write_all(&rest[..pos])?;
            out.write_all(TAB_MARKER)?;
            rest = &rest[pos + 1..];
        }
        out.write_all(rest)?;
    } else {
        out.write_all(line)?;
    }

    if config.show_ends {
        out.write_all(&[END_MARKER])?;
    }
    Ok(())
}
