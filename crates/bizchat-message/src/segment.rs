// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Value objects produced by the parser: [`Segment`] and [`ParsedMessage`].
//!
//! Both are immutable once built.  Segments are only constructed inside this
//! crate; callers read them through accessors and the query methods on
//! [`ParsedMessage`].

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Metadata key holding the literal list number of a `NumberedList` marker.
pub const NUMBER_KEY: &str = "number";
/// Metadata key holding the attributed business name of a `DatabaseIndicator`.
pub const BUSINESS_NAME_KEY: &str = "businessName";

/// Phrase the model appends to names it took from the application database.
pub const ATTRIBUTION_PHRASE: &str = "(from our database)";

/// Open key/value metadata attached to a segment.
pub type Metadata = BTreeMap<String, String>;

/// Classification of one span of message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentKind {
    Text,
    Bold,
    Italic,
    Bullet,
    NumberedList,
    DatabaseIndicator,
}

impl SegmentKind {
    /// Marker kinds carry no content; their payload lives in metadata.
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            SegmentKind::Bullet | SegmentKind::NumberedList | SegmentKind::DatabaseIndicator
        )
    }
}

/// One classified span of message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    #[serde(rename = "type")]
    kind: SegmentKind,
    content: String,
    metadata: Metadata,
}

impl Segment {
    fn new(kind: SegmentKind, content: impl Into<String>, metadata: Metadata) -> Self {
        Self { kind, content: content.into(), metadata }
    }

    pub(crate) fn text(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Text, content, Metadata::new())
    }

    pub(crate) fn newline() -> Self {
        Self::text("\n")
    }

    /// A `Bold` or `Italic` segment carrying the unwrapped inner text.
    pub(crate) fn emphasis(kind: SegmentKind, content: impl Into<String>) -> Self {
        debug_assert!(matches!(kind, SegmentKind::Bold | SegmentKind::Italic));
        Self::new(kind, content, Metadata::new())
    }

    pub(crate) fn bullet() -> Self {
        Self::new(SegmentKind::Bullet, "", Metadata::new())
    }

    pub(crate) fn numbered(number: &str) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(NUMBER_KEY.to_string(), number.to_string());
        Self::new(SegmentKind::NumberedList, "", metadata)
    }

    pub(crate) fn database_indicator(business_name: &str) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(BUSINESS_NAME_KEY.to_string(), business_name.to_string());
        Self::new(SegmentKind::DatabaseIndicator, "", metadata)
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn is_kind(&self, kind: SegmentKind) -> bool {
        self.kind == kind
    }

    /// The literal list number of a `NumberedList` marker, exactly as written
    /// in the source text.
    pub fn list_number(&self) -> Option<&str> {
        match self.kind {
            SegmentKind::NumberedList => self.metadata.get(NUMBER_KEY).map(String::as_str),
            _ => None,
        }
    }

    /// The business name decorated by a `DatabaseIndicator`.
    pub fn business_name(&self) -> Option<&str> {
        match self.kind {
            SegmentKind::DatabaseIndicator => {
                self.metadata.get(BUSINESS_NAME_KEY).map(String::as_str)
            }
            _ => None,
        }
    }
}

/// A piece of a visual line: the segment it came from and the slice of its
/// content that falls on this line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan<'a> {
    pub segment: &'a Segment,
    pub text: &'a str,
}

/// One visual line of a parsed message.
pub type Line<'a> = Vec<LineSpan<'a>>;

/// The ordered result of one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    segments: Vec<Segment>,
}

impl ParsedMessage {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// True when nothing visible would be rendered: no segment has
    /// non-whitespace content and there is no marker segment.
    pub fn is_empty(&self) -> bool {
        !self
            .segments
            .iter()
            .any(|s| s.kind.is_marker() || !s.content.trim().is_empty())
    }

    pub fn segments_by_kind(&self, kind: SegmentKind) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.kind == kind).collect()
    }

    pub fn has_database_references(&self) -> bool {
        self.segments.iter().any(|s| s.kind == SegmentKind::DatabaseIndicator)
    }

    /// Distinct attributed business names in order of first mention.
    pub fn database_business_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .filter_map(Segment::business_name)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Flatten to unstyled text.  Emphasis is unwrapped, list markers become
    /// `• ` / `<number>. ` and attributions are spelled out again.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.kind {
                SegmentKind::Text | SegmentKind::Bold | SegmentKind::Italic => {
                    out.push_str(&segment.content)
                }
                SegmentKind::Bullet => out.push_str("• "),
                SegmentKind::NumberedList => {
                    out.push_str(segment.list_number().unwrap_or_default());
                    out.push_str(". ");
                }
                SegmentKind::DatabaseIndicator => {
                    out.push(' ');
                    out.push_str(ATTRIBUTION_PHRASE);
                }
            }
        }
        out
    }

    /// Group segments into visual lines.  `Text` segments are split at
    /// embedded newlines; every other segment stays on the current line.
    pub fn lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        if self.segments.is_empty() {
            return lines;
        }

        let mut current: Line<'_> = Vec::new();
        for segment in &self.segments {
            if segment.kind != SegmentKind::Text || !segment.content.contains('\n') {
                current.push(LineSpan { segment, text: &segment.content });
                continue;
            }
            let mut parts = segment.content.split('\n');
            if let Some(first) = parts.next().filter(|p| !p.is_empty()) {
                current.push(LineSpan { segment, text: first });
            }
            for part in parts {
                lines.push(std::mem::take(&mut current));
                if !part.is_empty() {
                    current.push(LineSpan { segment, text: part });
                }
            }
        }
        lines.push(current);
        lines
    }
}

impl<'a> IntoIterator for &'a ParsedMessage {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
