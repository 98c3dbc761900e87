// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Business-name cleanup used before matching against the directory.

use std::sync::OnceLock;

use regex::Regex;

fn attribution() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\(from our database\)").expect("attribution pattern compiles"))
}

/// Strip the attribution phrase and any emphasis characters, then trim.
pub fn clean_business_name(name: &str) -> String {
    attribution()
        .replace_all(name, "")
        .replace(['*', '_'], "")
        .trim()
        .to_string()
}

/// Case-, punctuation- and spacing-insensitive comparison key.
pub fn normalize_for_comparison(name: &str) -> String {
    let kept: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
