// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("could not read business directory '{0}': {1}")]
    Io(String, #[source] std::io::Error),

    #[error("could not parse business directory '{0}': {1}")]
    Parse(String, String),

    #[error("unsupported business directory format for file '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}
