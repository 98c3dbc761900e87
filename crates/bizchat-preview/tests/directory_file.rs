// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Loading directory files from disk and resolving parsed attributions.

use std::io::Write;

use bizchat_message::parse_message;
use bizchat_preview::{CachedLookup, PreviewDirectory, PreviewError, PreviewLookup};

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(f, "{body}").unwrap();
    f
}

const YAML: &str = r#"
- id: boa
  name: Bank of America
  industry: Banking
  revenue: 98580000000
  employeeCount: 213000
  neighborhood: Uptown
  rating: 3.9
- id: wf
  name: Wells Fargo
  industry: Banking
"#;

#[test]
fn loads_yaml_list() {
    let f = write_temp(".yaml", YAML);
    let dir = PreviewDirectory::load(f.path()).unwrap();
    assert_eq!(dir.len(), 2);

    let boa = dir.lookup("Bank of America").unwrap();
    assert_eq!(boa.industry, "Banking");
    assert_eq!(boa.employee_count, 213_000);
    assert_eq!(boa.neighborhood, "Uptown");
    assert_eq!(boa.rating, Some(3.9));
}

#[test]
fn loads_wrapped_json() {
    let f = write_temp(
        ".json",
        r#"{"businesses": [{"id": "c1", "name": "Central Coffee", "revenueGrowth": 4.2}]}"#,
    );
    let dir = PreviewDirectory::load(f.path()).unwrap();
    let preview = dir.lookup("central coffee").unwrap();
    assert_eq!(preview.id, "c1");
    assert_eq!(preview.revenue_growth, Some(4.2));
}

#[test]
fn unknown_extension_is_rejected() {
    let f = write_temp(".csv", "name\nAcme\n");
    let err = PreviewDirectory::load(f.path()).err().unwrap();
    assert!(matches!(err, PreviewError::UnsupportedFormat(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let f = write_temp(".json", "{ not json");
    let err = PreviewDirectory::load(f.path()).err().unwrap();
    assert!(matches!(err, PreviewError::Parse(..)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = PreviewDirectory::load(std::path::Path::new("/tmp/bizchat_no_such_dir.yaml"))
        .err()
        .unwrap();
    assert!(matches!(err, PreviewError::Io(..)));
}

#[test]
fn parsed_attributions_resolve_through_cache() {
    let f = write_temp(".yml", YAML);
    let lookup = CachedLookup::new(PreviewDirectory::load(f.path()).unwrap());

    let msg = parse_message(
        "1. **Bank of America** (from our database)\n2. **Truist** (from our database)\n3. **Wells Fargo** (from our database)",
    );
    let found = lookup.lookup_many(&msg.database_business_names());
    let names: Vec<_> = found.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Bank of America", "Wells Fargo"]);
}
