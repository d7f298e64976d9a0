//! Line transformation
//!
//! This module contains the per-line strategy the file processor applies.
//! Everything else in the pipeline is generic: split input into lines,
//! transform each, write the survivors.

mod channel;

pub use channel::ChannelLinkExtractor;

use crate::errors::Result;

/// Maps one input line to zero or one output lines
///
/// The line handed in still carries its trailing terminator (the last line of
/// a file may have none). Implementations return:
/// * `Ok(Some(text))` - text appended verbatim to the output, terminator included
/// * `Ok(None)` - nothing is written for this line
/// * `Err(e)` where `e.is_skip()` - the expected "drop this line" signal
/// * any other `Err` - an unexpected failure; the line is dropped and reported
pub trait LineTransformer {
    fn transform(&self, line: &str) -> Result<Option<String>>;
}

impl<F> LineTransformer for F
where
    F: Fn(&str) -> Result<Option<String>>,
{
    fn transform(&self, line: &str) -> Result<Option<String>> {
        self(line)
    }
}

/// Removes one trailing `\n` or `\r\n`
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
