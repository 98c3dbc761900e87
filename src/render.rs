// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Terminal rendering of a [`ParsedMessage`].
//!
//! Lines come from [`ParsedMessage::lines`]; emphasis is styled with ANSI
//! escapes when colour is on, list markers become glyphs and every
//! `DatabaseIndicator` gets a badge.  With a preview lookup, a footnote per
//! distinct attributed business follows the body.

use std::fmt::Write as _;

use bizchat_message::{LineSpan, ParsedMessage, SegmentKind, ATTRIBUTION_PHRASE};
use bizchat_preview::{BusinessPreview, PreviewLookup};
use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// ASCII glyphs instead of Unicode ones.
    pub ascii: bool,
    /// ANSI styling.
    pub color: bool,
}

fn bullet(ascii: bool) -> &'static str {
    if ascii { "- " } else { "• " }
}

fn badge(opts: RenderOptions) -> String {
    if opts.ascii {
        format!(" [{}]", ATTRIBUTION_PHRASE.trim_matches(|c| c == '(' || c == ')'))
    } else if opts.color {
        format!(" {}", "[db]".dim())
    } else {
        " [db]".to_string()
    }
}

fn render_span(span: &LineSpan<'_>, opts: RenderOptions, out: &mut String) {
    let segment = span.segment;
    match segment.kind() {
        SegmentKind::Text => out.push_str(span.text),
        SegmentKind::Bold if opts.color => {
            let _ = write!(out, "{}", span.text.bold());
        }
        SegmentKind::Italic if opts.color => {
            let _ = write!(out, "{}", span.text.italic());
        }
        SegmentKind::Bold | SegmentKind::Italic => out.push_str(span.text),
        SegmentKind::Bullet => out.push_str(bullet(opts.ascii)),
        SegmentKind::NumberedList => {
            let _ = write!(out, "{}. ", segment.list_number().unwrap_or_default());
        }
        SegmentKind::DatabaseIndicator => out.push_str(&badge(opts)),
    }
}

/// Render the message body, one output line per visual line.
pub fn render_message(msg: &ParsedMessage, opts: RenderOptions) -> String {
    let mut out = String::new();
    for (i, line) in msg.lines().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for span in line {
            render_span(span, opts, &mut out);
        }
    }
    out
}

/// `$98.6B`, `$12.3M`, `$450K`, `$900`; negatives as `-$5K`.
pub fn format_revenue(revenue: f64) -> String {
    let sign = if revenue < 0.0 { "-" } else { "" };
    let abs = revenue.abs();
    if abs >= 1e9 {
        format!("{sign}${:.1}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{sign}${:.1}M", abs / 1e6)
    } else if abs >= 1e3 {
        format!("{sign}${:.0}K", abs / 1e3)
    } else {
        format!("{sign}${abs:.0}")
    }
}

/// Thousands separators: `213000` → `213,000`.
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One preview as a two-line footnote.
pub fn render_preview(preview: &BusinessPreview, opts: RenderOptions) -> String {
    let title = if opts.color {
        preview.name.as_str().bold().to_string()
    } else {
        preview.name.clone()
    };
    let mut figures = vec![
        format!("revenue {}", format_revenue(preview.revenue)),
        format!("{} employees", format_count(preview.employee_count)),
    ];
    if let Some(rating) = preview.rating {
        figures.push(format!("rating {rating:.1}"));
    }
    if let Some(growth) = preview.revenue_growth {
        figures.push(format!("growth {growth:+.1}%"));
    }
    format!(
        "{title}: {}, {}\n    {}",
        preview.industry,
        preview.neighborhood,
        figures.join(", ")
    )
}

/// Footnotes for every distinct attributed business, or `None` when the
/// message has no attributions.
pub fn render_footnotes(
    msg: &ParsedMessage,
    lookup: &dyn PreviewLookup,
    opts: RenderOptions,
) -> Option<String> {
    let names = msg.database_business_names();
    if names.is_empty() {
        return None;
    }
    let notes: Vec<String> = names
        .iter()
        .map(|name| match lookup.lookup(name) {
            Some(preview) => render_preview(&preview, opts),
            None => format!("{name}: no preview available"),
        })
        .collect();
    Some(notes.join("\n"))
}
