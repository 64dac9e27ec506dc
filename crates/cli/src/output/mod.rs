//! Console rendering of notify results.

mod dto;

pub use dto::NotifyResponseDto;

use dns_notify_domain::NotifyResult;
use std::io::{self, Write};

pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when at least one server reported an error.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for invalid invocations (matches clap's usage errors).
pub const EXIT_USAGE: u8 = 2;

/// Writes one line per result: errors to `err`, the rest to `out` unless
/// `quiet` is set.
pub fn render_text<O: Write, E: Write>(
    results: &[NotifyResult],
    quiet: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    for result in results {
        if result.is_error() {
            writeln!(err, "{}", result.message())?;
        } else if !quiet {
            writeln!(out, "{}", result.message())?;
        }
    }
    Ok(())
}

pub fn render_json<O: Write>(response: &NotifyResponseDto, out: &mut O) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, response)?;
    writeln!(out)
}

pub fn exit_status(results: &[NotifyResult]) -> u8 {
    if results.iter().any(NotifyResult::is_error) {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}
