// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Inline emphasis pass: `**bold**`, `__bold__` and lone-star `*italic*`.
//!
//! Each delimiter form is scanned independently over the whole line.  The
//! resulting candidate spans are sorted by start offset and walked with a
//! cursor; a candidate starting inside an already emitted span is dropped.
//! Delimiters that never close are left in the surrounding text.
//!
//! A span body holds at least one visible character, never its own delimiter
//! character, and no complete span of another form.

use std::sync::OnceLock;

use regex::Regex;

use crate::segment::{Segment, SegmentKind};

fn bold_asterisk() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]*[^*\s][^*]*)\*\*").expect("bold pattern compiles"))
}

fn bold_underscore() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"__([^_]*[^_\s][^_]*)__").expect("bold pattern compiles"))
}

/// A recognised emphasis span within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span<'a> {
    start: usize,
    end: usize,
    kind: SegmentKind,
    inner: &'a str,
}

fn regex_spans<'a>(line: &'a str, re: &Regex, kind: SegmentKind, out: &mut Vec<Span<'a>>) {
    for caps in re.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else { continue };
        out.push(Span { start: whole.start(), end: whole.end(), kind, inner: inner.as_str() });
    }
}

/// `*` with no `*` directly before or after it.
fn is_lone_star(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'*'
        && (i == 0 || bytes[i - 1] != b'*')
        && bytes.get(i + 1) != Some(&b'*')
}

/// Italic spans: a lone `*`, a body free of `*` with some visible text, then
/// a lone `*`.
///
/// `*` is ASCII so every offset found here is a char boundary.
fn italic_spans<'a>(line: &'a str, out: &mut Vec<Span<'a>>) {
    let bytes = line.as_bytes();
    let mut pos = 0;
    while let Some(open) = (pos..bytes.len()).find(|&i| is_lone_star(bytes, i)) {
        let Some(close) = (open + 1..bytes.len()).find(|&i| bytes[i] == b'*') else { break };
        let inner = &line[open + 1..close];
        if is_lone_star(bytes, close) && !inner.trim().is_empty() {
            out.push(Span { start: open, end: close + 1, kind: SegmentKind::Italic, inner });
            pos = close + 1;
        } else {
            // The star that ended this body may still open the next span.
            pos = close;
        }
    }
}

fn collect_spans(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    regex_spans(line, bold_asterisk(), SegmentKind::Bold, &mut spans);
    regex_spans(line, bold_underscore(), SegmentKind::Bold, &mut spans);
    italic_spans(line, &mut spans);
    spans.retain(|s| collect_spans(s.inner).is_empty());
    // Stable: on equal starts the earlier-collected form wins.
    spans.sort_by_key(|s| s.start);
    spans
}

/// Parse one line (no `\n`) into text and emphasis segments, appending to `out`.
pub(crate) fn parse_inline(line: &str, out: &mut Vec<Segment>) {
    let mut cursor = 0;
    for span in collect_spans(line) {
        if span.start < cursor {
            continue;
        }
        if span.start > cursor {
            out.push(Segment::text(&line[cursor..span.start]));
        }
        out.push(Segment::emphasis(span.kind, span.inner));
        cursor = span.end;
    }
    if cursor < line.len() {
        out.push(Segment::text(&line[cursor..]));
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
