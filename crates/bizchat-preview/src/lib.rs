// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Preview data for businesses an answer attributed to our database.
//!
//! A renderer that shows a `DatabaseIndicator` asks a [`PreviewLookup`] for
//! the decorated name and gets back a [`BusinessPreview`] or nothing.
//!
//! ## Matching
//! [`PreviewDirectory`] cleans the query (markup and attribution phrase
//! removed), normalises case, punctuation and spacing, and then tries an
//! exact, a prefix and finally a substring match.
//!
//! ## Caching
//! [`CachedLookup`] puts an LRU cache with a TTL in front of any lookup.

use std::collections::HashSet;

mod cache;
mod directory;
mod error;
mod names;
mod record;

pub use cache::{CachedLookup, DEFAULT_CAPACITY, DEFAULT_TTL};
pub use directory::PreviewDirectory;
pub use error::PreviewError;
pub use names::{clean_business_name, normalize_for_comparison};
pub use record::{BusinessPreview, BusinessRecord};

/// Resolve a business name to its preview.
pub trait PreviewLookup {
    fn lookup(&self, name: &str) -> Option<BusinessPreview>;

    /// Look up several names at once.  Results are keyed by the cleaned
    /// name, in input order; misses and repeated names are skipped.
    fn lookup_many(&self, names: &[&str]) -> Vec<(String, BusinessPreview)> {
        let mut seen = HashSet::new();
        names
            .iter()
            .map(|name| clean_business_name(name))
            .filter(|clean| seen.insert(clean.clone()))
            .filter_map(|clean| self.lookup(&clean).map(|preview| (clean, preview)))
            .collect()
    }
}

impl<L: PreviewLookup + ?Sized> PreviewLookup for &L {
    fn lookup(&self, name: &str) -> Option<BusinessPreview> {
        (**self).lookup(name)
    }
}
