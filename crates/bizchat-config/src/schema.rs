// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Serde default helper: `true`.
fn default_true() -> bool {
    true
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_cache_capacity() -> usize {
    100
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Where business previews for `(from our database)` mentions come from.
///
/// ```toml
/// [preview]
/// directory = "~/data/businesses.yaml"
/// cache_ttl_secs = 600
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// YAML or JSON business directory.  `~` and `$VARS` are expanded.
    /// Without a directory, previews are simply not shown.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Seconds a resolved preview stays cached (0 disables the cache)
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Maximum number of cached previews
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            directory: None,
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl PreviewConfig {
    /// `directory` with `~` and environment variables expanded.
    pub fn directory_path(&self) -> Option<PathBuf> {
        let raw = self.directory.as_ref()?;
        let text = raw.to_string_lossy();
        match shellexpand::full(&text) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => Some(raw.clone()),
        }
    }
}

/// Terminal rendering of parsed answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Plain ASCII glyphs for bullets and badges
    #[serde(default)]
    pub ascii: bool,
    /// Bold / italic / dim styling through ANSI escapes
    #[serde(default = "default_true")]
    pub color: bool,
    /// Append a preview footnote for every attributed business
    #[serde(default = "default_true")]
    pub show_previews: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { ascii: false, color: true, show_previews: true }
    }
}
