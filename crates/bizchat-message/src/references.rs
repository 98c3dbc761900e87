// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Database-attribution pre-pass.
//!
//! Finds every `<Name> (from our database)` mention, keeps the name in the
//! text, drops the attribution phrase and records a zero-width marker right
//! after the name.  The marker carries the occurrence index and the name it
//! decorates so the assembly step can emit one `DatabaseIndicator` per
//! mention, in order.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

/// `<opt. emphasis><Capitalised name><opt. emphasis> (from our database)`
///
/// The name is a run of words on one line.  `*` and `_` may join two word
/// characters (`Acme_Widgets`) but never start or end a word, so a name
/// wrapped in `**…**` is isolated from the sentence around it.
fn attribution_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        const WORD: &str = r"[^\s(*_]+(?:[*_]+[^\s(*_]+)*";
        let pattern = format!(
            r"(\*\*|__|\*)?([A-Z]{tail}(?:[^\S\n]+{WORD})*?)(\*\*|__|\*)?[ \t]*\(from our database\)",
            tail = r"[^\s(*_]*(?:[*_]+[^\s(*_]+)*",
        );
        Regex::new(&pattern).expect("attribution pattern compiles")
    })
}

/// One recognised attribution mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseReference {
    /// 0-based occurrence index, in left-to-right order.
    pub index: usize,
    /// Byte offset in [`MarkedText::text`] immediately after the name.
    pub offset: usize,
    /// The trimmed name the attribution decorates.
    pub business_name: String,
}

/// Input text with attribution phrases removed and their positions recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedText {
    pub text: String,
    /// Ordered by `index`, which is also ascending `offset`.
    pub references: Vec<DatabaseReference>,
}

/// Run the pre-pass over `input`.  Text outside matched spans is copied
/// verbatim; with no matches the text is returned unchanged.
pub fn mark_database_references(input: &str) -> MarkedText {
    let mut text = String::with_capacity(input.len());
    let mut references = Vec::new();
    let mut last = 0;

    for caps in attribution_pattern().captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        let name = caps.get(2).map_or("", |m| m.as_str()).trim();

        text.push_str(&input[last..whole.start()]);
        if let Some(open) = caps.get(1) {
            text.push_str(open.as_str());
        }
        text.push_str(name);
        if let Some(close) = caps.get(3) {
            text.push_str(close.as_str());
        }

        let index = references.len();
        trace!(index, name, "database reference");
        references.push(DatabaseReference {
            index,
            offset: text.len(),
            business_name: name.to_string(),
        });
        last = whole.end();
    }
    text.push_str(&input[last..]);

    MarkedText { text, references }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn names(marked: &MarkedText) -> Vec<&str> {
        marked.references.iter().map(|r| r.business_name.as_str()).collect()
    }

    #[test]
    fn no_mentions_leaves_text_unchanged() {
        let marked = mark_database_references("Nothing to see (here).");
        assert_eq!(marked.text, "Nothing to see (here).");
        assert!(marked.references.is_empty());
    }

    #[test]
    fn plain_name_is_kept_and_phrase_removed() {
        let marked = mark_database_references("Acme Co (from our database) grew.");
        assert_eq!(marked.text, "Acme Co grew.");
        assert_eq!(names(&marked), vec!["Acme Co"]);
        assert_eq!(marked.references[0].offset, "Acme Co".len());
    }

    #[test]
    fn bold_name_keeps_delimiters_in_text_but_not_in_name() {
        let marked = mark_database_references("**Acme Co** (from our database) grew fast.");
        assert_eq!(marked.text, "**Acme Co** grew fast.");
        assert_eq!(names(&marked), vec!["Acme Co"]);
        assert_eq!(marked.references[0].offset, "**Acme Co**".len());
    }

    #[test]
    fn bold_name_inside_sentence_is_isolated() {
        let marked = mark_database_references(
            "Companies like **Wells Fargo** (from our database) and **Truist** (from our database)",
        );
        assert_eq!(marked.text, "Companies like **Wells Fargo** and **Truist**");
        assert_eq!(names(&marked), vec!["Wells Fargo", "Truist"]);
        assert_eq!(marked.references[1].index, 1);
    }

    #[test]
    fn unwrapped_name_run_starts_at_first_capital() {
        let marked = mark_database_references("We like Acme Co (from our database).");
        assert_eq!(names(&marked), vec!["We like Acme Co"]);
        assert_eq!(marked.text, "We like Acme Co.");
    }

    #[test]
    fn repeated_name_yields_one_reference_per_mention() {
        let marked = mark_database_references(
            "Acme (from our database) then Acme (from our database)",
        );
        assert_eq!(marked.references.len(), 2);
        assert_eq!(marked.references[1].index, 1);
        assert_eq!(marked.text, "Acme then Acme");
    }

    #[test]
    fn lowercase_mention_is_not_recognised() {
        let marked = mark_database_references("acme (from our database)");
        assert!(marked.references.is_empty());
        assert_eq!(marked.text, "acme (from our database)");
    }

    #[test]
    fn name_does_not_span_lines() {
        let marked = mark_database_references("Intro line\nAcme Co (from our database)");
        assert_eq!(names(&marked), vec!["Acme Co"]);
        assert_eq!(marked.text, "Intro line\nAcme Co");
    }

    #[test]
    fn inner_delimiters_stay_in_the_name() {
        let marked = mark_database_references("Acme_Widgets (from our database) grew.");
        assert_eq!(marked.text, "Acme_Widgets grew.");
        assert_eq!(names(&marked), vec!["Acme_Widgets"]);

        let marked = mark_database_references("We use Foo*Bar Labs (from our database).");
        assert_eq!(names(&marked), vec!["We use Foo*Bar Labs"]);

        let marked = mark_database_references("**Acme_Widgets** (from our database)");
        assert_eq!(marked.text, "**Acme_Widgets**");
        assert_eq!(names(&marked), vec!["Acme_Widgets"]);
    }

    #[test]
    fn earlier_emphasis_is_not_pulled_into_the_name() {
        let marked =
            mark_database_references("Unlike **Duke Energy**, **Acme** (from our database) grew.");
        assert_eq!(names(&marked), vec!["Acme"]);
        assert_eq!(marked.text, "Unlike **Duke Energy**, **Acme** grew.");
    }

    #[test]
    fn list_items_with_colon_after_phrase() {
        let input = "1. **Bank of America** (from our database): One of the largest banks\n\
                     2. **Wells Fargo** (from our database): Major financial institution";
        let marked = mark_database_references(input);
        assert_eq!(names(&marked), vec!["Bank of America", "Wells Fargo"]);
        assert_eq!(
            marked.text,
            "1. **Bank of America**: One of the largest banks\n2. **Wells Fargo**: Major financial institution"
        );
    }
}
