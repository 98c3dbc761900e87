// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

/// A business as stored in the directory file.
///
/// Only `name` is required; missing figures fall back to neutral defaults
/// when turned into a [`BusinessPreview`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    /// Annual revenue in dollars.
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    /// Year-over-year revenue growth in percent.
    #[serde(default)]
    pub revenue_growth: Option<f64>,
    /// Customer rating, 0–5.
    #[serde(default)]
    pub rating: Option<f64>,
}

/// What a hover card / footnote shows for an attributed business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPreview {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub revenue: f64,
    pub employee_count: u32,
    pub neighborhood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Previews only ever come from our own records.
    pub is_verified: bool,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl From<&BusinessRecord> for BusinessPreview {
    fn from(record: &BusinessRecord) -> Self {
        let name = record.name.trim();
        Self {
            id: record.id.clone(),
            name: if name.is_empty() { "Unknown Business".into() } else { name.to_string() },
            industry: non_blank(&record.industry).unwrap_or("Unknown").to_string(),
            revenue: record.revenue.unwrap_or(0.0),
            employee_count: record.employee_count.unwrap_or(0),
            neighborhood: non_blank(&record.neighborhood).unwrap_or("Unknown").to_string(),
            revenue_growth: record.revenue_growth,
            rating: record.rating,
            is_verified: true,
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
