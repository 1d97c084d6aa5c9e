//! Resume parser implementation.

use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use super::rules::{LineRule, ParseState};
use super::ParseOptions;
use crate::error::{Error, Result};
use crate::model::ResumeDocument;

/// Resume parser.
///
/// Each call to [`ResumeParser::parse`] works on its own state, so one
/// parser can be reused for any number of independent documents.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    options: ParseOptions,
}

impl ResumeParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Read and parse a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeDocument> {
        let bytes = fs::read(path.as_ref())?;
        self.parse_bytes(&bytes)
    }

    /// Parse UTF-8 bytes.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<ResumeDocument> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::InvalidInput(format!("input is not valid UTF-8: {}", e)))?;
        Ok(self.parse(text))
    }

    /// Parse a text buffer. Never fails; unrecognized lines are dropped.
    pub fn parse(&self, input: &str) -> ResumeDocument {
        let text = self.prepare(input);
        let mut state = ParseState::new();
        let mut dropped = 0usize;

        for line in text.split('\n') {
            if line.trim().is_empty() {
                state.push_blank();
                continue;
            }
            if LineRule::dispatch(&mut state, line).is_none() {
                log::trace!("Dropping unrecognized line: {:?}", line);
                dropped += 1;
            }
        }

        let (header, sections) = state.finish();
        log::debug!(
            "Parsed {} sections ({} lines dropped)",
            sections.len(),
            dropped
        );

        ResumeDocument { header, sections }
    }

    fn prepare(&self, input: &str) -> String {
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        let text = input.replace("\r\n", "\n").replace('\r', "\n");
        if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text
        }
    }
}
