// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::names::{clean_business_name, normalize_for_comparison};
use crate::{BusinessPreview, BusinessRecord, PreviewError, PreviewLookup};

/// Accepted top-level shapes of a directory file.
#[derive(Deserialize)]
#[serde(untagged)]
enum DirectoryFile {
    List(Vec<BusinessRecord>),
    Wrapped { businesses: Vec<BusinessRecord> },
}

impl DirectoryFile {
    fn into_records(self) -> Vec<BusinessRecord> {
        match self {
            DirectoryFile::List(records) | DirectoryFile::Wrapped { businesses: records } => records,
        }
    }
}

struct Entry {
    key: String,
    record: BusinessRecord,
}

/// In-memory business directory with forgiving name matching.
///
/// A query is cleaned and normalised, then matched against every record's
/// normalised name: exact match first, then prefix, then substring.  Within
/// a tier the first record in file order wins.
pub struct PreviewDirectory {
    entries: Vec<Entry>,
}

impl PreviewDirectory {
    pub fn from_records(records: Vec<BusinessRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| Entry { key: normalize_for_comparison(&record.name), record })
            .collect();
        Self { entries }
    }

    /// Load a YAML (`.yaml`/`.yml`) or JSON (`.json`) directory file.  The
    /// file holds either a list of businesses or `{ businesses: [...] }`.
    pub fn load(path: &Path) -> Result<Self, PreviewError> {
        let display = path.display().to_string();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let text =
            std::fs::read_to_string(path).map_err(|e| PreviewError::Io(display.clone(), e))?;

        let file: DirectoryFile = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&text)
                .map_err(|e| PreviewError::Parse(display.clone(), e.to_string()))?,
            "json" => serde_json::from_str(&text)
                .map_err(|e| PreviewError::Parse(display.clone(), e.to_string()))?,
            _ => return Err(PreviewError::UnsupportedFormat(display)),
        };

        let directory = Self::from_records(file.into_records());
        debug!(path = %path.display(), businesses = directory.len(), "loaded business directory");
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The record matching `name`, if any.
    pub fn find(&self, name: &str) -> Option<&BusinessRecord> {
        let needle = normalize_for_comparison(&clean_business_name(name));
        if needle.is_empty() {
            return None;
        }
        let entries = &self.entries;
        entries
            .iter()
            .find(|e| e.key == needle)
            .or_else(|| entries.iter().find(|e| e.key.starts_with(&needle)))
            .or_else(|| entries.iter().find(|e| e.key.contains(&needle)))
            .map(|e| &e.record)
    }
}

impl PreviewLookup for PreviewDirectory {
    fn lookup(&self, name: &str) -> Option<BusinessPreview> {
        self.find(name).map(BusinessPreview::from)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> BusinessRecord {
        BusinessRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            industry: None,
            revenue: None,
            employee_count: None,
            neighborhood: None,
            revenue_growth: None,
            rating: None,
        }
    }

    fn directory() -> PreviewDirectory {
        PreviewDirectory::from_records(vec![
            record("Bank of America"),
            record("Bank of America Stadium"),
            record("Wells Fargo"),
            record("Central Coffee Roasters"),
        ])
    }

    #[test]
    fn exact_match_wins_over_prefix() {
        let dir = directory();
        assert_eq!(dir.find("bank of america").map(|r| r.id.as_str()), Some("bank of america"));
        assert_eq!(
            dir.find("Bank of America Stadium").map(|r| r.id.as_str()),
            Some("bank of america stadium")
        );
    }

    #[test]
    fn prefix_then_substring() {
        let dir = directory();
        assert_eq!(dir.find("Central").map(|r| r.name.as_str()), Some("Central Coffee Roasters"));
        assert_eq!(dir.find("Coffee").map(|r| r.name.as_str()), Some("Central Coffee Roasters"));
    }

    #[test]
    fn markup_in_query_is_ignored() {
        let dir = directory();
        let preview = dir.lookup("**Wells Fargo** (from our database)").unwrap();
        assert_eq!(preview.name, "Wells Fargo");
        assert!(preview.is_verified);
    }

    #[test]
    fn unknown_and_blank_queries_miss() {
        let dir = directory();
        assert!(dir.lookup("Truist").is_none());
        assert!(dir.lookup("   ").is_none());
        assert!(dir.lookup("**").is_none());
    }

    #[test]
    fn lookup_many_skips_misses_and_duplicates() {
        let dir = directory();
        let found = dir.lookup_many(&["Wells Fargo", "Truist", "**Wells Fargo**"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "Wells Fargo");
    }
}
