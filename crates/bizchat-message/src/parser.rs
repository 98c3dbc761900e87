// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use tracing::debug;

use crate::blocks::parse_gap;
use crate::references::mark_database_references;
use crate::segment::{ParsedMessage, Segment};

/// Turns assistant answer text into a [`ParsedMessage`].
///
/// The parser holds no state: every instance behaves identically and one
/// instance may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageParser;

impl MessageParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `input`.  Total over all strings: malformed markup degrades to
    /// plain text, nothing is dropped.
    ///
    /// 1. attribution mentions are replaced by position markers,
    /// 2. the text between markers goes through the line/list pass,
    /// 3. every marker becomes one `DatabaseIndicator`, in order.
    pub fn parse(&self, input: &str) -> ParsedMessage {
        let marked = mark_database_references(input);

        let mut segments = Vec::new();
        let mut cursor = 0;
        for reference in &marked.references {
            segments.extend(parse_gap(&marked.text[cursor..reference.offset]));
            segments.push(Segment::database_indicator(&reference.business_name));
            cursor = reference.offset;
        }
        segments.extend(parse_gap(&marked.text[cursor..]));

        debug!(
            input_len = input.len(),
            segments = segments.len(),
            references = marked.references.len(),
            "parsed message"
        );
        ParsedMessage::new(segments)
    }
}

/// Parse with a default [`MessageParser`].
pub fn parse_message(input: &str) -> ParsedMessage {
    MessageParser.parse(input)
}
