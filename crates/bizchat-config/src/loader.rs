// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::Config;

/// Ordered list of config file locations searched from lowest to highest priority.
/// Later files override earlier ones.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/bizchat/config.toml")];

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config/bizchat/config.toml"));
    }
    if let Some(cfg) = dirs::config_dir() {
        paths.push(cfg.join("bizchat/config.toml"));
    }

    paths.push(PathBuf::from(".bizchat/config.toml"));
    paths.push(PathBuf::from("bizchat.toml"));

    paths
}

fn read_layer(path: &Path) -> anyhow::Result<toml::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Load configuration by merging all discovered TOML files.
/// `extra` is an explicit path (the `--config` flag); unlike discovered
/// files it must exist.
pub fn load(extra: Option<&Path>) -> anyhow::Result<Config> {
    let mut merged = toml::Value::Table(toml::map::Map::new());

    for path in config_search_paths() {
        if path.is_file() {
            debug!(path = %path.display(), "loading config layer");
            merge_toml(&mut merged, read_layer(&path)?);
        }
    }

    if let Some(p) = extra {
        debug!(path = %p.display(), "loading explicit config");
        merge_toml(&mut merged, read_layer(p)?);
    }

    merged.try_into().context("invalid configuration")
}

/// Deep-merge `src` into `dst`; src wins on scalar conflicts.
fn merge_toml(dst: &mut toml::Value, src: toml::Value) {
    match (dst, src) {
        (toml::Value::Table(d), toml::Value::Table(s)) => {
            for (k, v) in s {
                let entry = d.entry(k).or_insert(toml::Value::Table(toml::map::Map::new()));
                merge_toml(entry, v);
            }
        }
        (dst, src) => *dst = src,
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn val(s: &str) -> toml::Value {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn merge_nested_tables() {
        let mut dst = val("[render]\nascii = false\ncolor = false");
        merge_toml(&mut dst, val("[render]\nascii = true"));
        assert_eq!(dst["render"]["ascii"].as_bool(), Some(true));
        assert_eq!(dst["render"]["color"].as_bool(), Some(false));
    }

    #[test]
    fn merge_adds_new_tables() {
        let mut dst = val("[render]\nascii = true");
        merge_toml(&mut dst, val("[preview]\ncache_ttl_secs = 10"));
        assert_eq!(dst["render"]["ascii"].as_bool(), Some(true));
        assert_eq!(dst["preview"]["cache_ttl_secs"].as_integer(), Some(10));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load(Some(Path::new("/tmp/bizchat_nonexistent_config_xyz.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[preview]\ndirectory = \"/data/biz.yaml\"\ncache_capacity = 5").unwrap();
        let cfg = load(Some(f.path())).unwrap();
        assert_eq!(cfg.preview.directory, Some(PathBuf::from("/data/biz.yaml")));
        assert_eq!(cfg.preview.cache_capacity, 5);
        assert_eq!(cfg.preview.cache_ttl_secs, 300);
    }

    #[test]
    fn wrong_type_is_reported() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[render]\ncolor = \"yes\"").unwrap();
        assert!(load(Some(f.path())).is_err());
    }
}
