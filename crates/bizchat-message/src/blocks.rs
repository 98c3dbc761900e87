// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Line / list pass: numbered and bullet list markers, newline segments, and
//! delegation of everything else to the inline pass.

use std::sync::OnceLock;

use regex::Regex;

use crate::inline::parse_inline;
use crate::segment::Segment;

fn numbered_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)\.\s+(.*)$").expect("numbered item pattern compiles"))
}

fn bullet_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[*-]\s+(.*)$").expect("bullet item pattern compiles"))
}

fn parse_line(line: &str, out: &mut Vec<Segment>) {
    if let Some(caps) = numbered_item().captures(line) {
        let number = caps.get(1).map_or("", |m| m.as_str());
        out.push(Segment::numbered(number));
        parse_inline(caps.get(2).map_or("", |m| m.as_str()), out);
    } else if let Some(caps) = bullet_item().captures(line) {
        out.push(Segment::bullet());
        parse_inline(caps.get(1).map_or("", |m| m.as_str()), out);
    } else if !line.trim().is_empty() {
        parse_inline(line, out);
    }
}

/// Parse one stretch of text lying between database markers.
///
/// A newline segment separates consecutive lines.  If nothing at all was
/// recognised in non-empty input, the gap is returned verbatim as text.
pub(crate) fn parse_gap(gap: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    if gap.is_empty() {
        return out;
    }

    let mut lines = gap.split('\n').peekable();
    while let Some(line) = lines.next() {
        parse_line(line, &mut out);
        if lines.peek().is_some() {
            out.push(Segment::newline());
        }
    }

    if out.is_empty() {
        out.push(Segment::text(gap));
    }
    out
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
