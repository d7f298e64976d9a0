//! Channel link extraction
//!
//! Keeps the `channel/<id>` tail of slash-delimited links and drops every
//! other line.

use log::debug;

use crate::constants::{CHANNEL_TOKEN, EXTRACTED_FIELDS, FIELD_SEPARATOR, FIRST_FIELD_INDEX};
use crate::errors::{skip_line, Result};

use super::{strip_terminator, LineTransformer};

/// Extracts `channel/<id>` from lines shaped like `a/b/c/d/channel/<id>/...`
///
/// A single leading `/` marks an absolute path and is not counted as an empty
/// first field, so `/x/y/z/w/channel/42` and `x/y/z/w/channel/42` give the same
/// result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelLinkExtractor;

impl ChannelLinkExtractor {
    pub fn new() -> Self {
        ChannelLinkExtractor
    }
}

impl LineTransformer for ChannelLinkExtractor {
    fn transform(&self, line: &str) -> Result<Option<String>> {
        let content = strip_terminator(line);
        let content = content.strip_prefix(FIELD_SEPARATOR).unwrap_or(content);

        let words: Vec<&str> = content
            .split(FIELD_SEPARATOR)
            .skip(FIRST_FIELD_INDEX)
            .take(EXTRACTED_FIELDS)
            .collect();

        let Some(first) = words.first() else {
            return Err(skip_line("Wrong line format"));
        };
        if *first != CHANNEL_TOKEN {
            return Err(skip_line("Channel links only supported"));
        }

        let mut result = words.join(FIELD_SEPARATOR);
        result.push('\n');
        debug!("Extracted {result:?} from {line:?}");

        Ok(Some(result))
    }
}
