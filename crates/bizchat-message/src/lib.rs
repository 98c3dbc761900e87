// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Structured parsing of assistant answers.
//!
//! Free-form answer text is turned into a flat list of typed [`Segment`]s:
//! plain text, bold, italic, bullet and numbered-list markers, and
//! `DatabaseIndicator` markers for every business the model attributed to
//! our own records with the phrase `(from our database)`.
//!
//! ```
//! use bizchat_message::{parse_message, SegmentKind};
//!
//! let msg = parse_message("**Acme Co** (from our database) grew fast.");
//! assert_eq!(msg.database_business_names(), vec!["Acme Co"]);
//! assert_eq!(msg.segments()[0].kind(), SegmentKind::Bold);
//! ```
mod blocks;
mod inline;
mod parser;
mod references;
mod segment;

pub use parser::{parse_message, MessageParser};
pub use references::{mark_database_references, DatabaseReference, MarkedText};
pub use segment::{
    Line, LineSpan, Metadata, ParsedMessage, Segment, SegmentKind, ATTRIBUTION_PHRASE,
    BUSINESS_NAME_KEY, NUMBER_KEY,
};
