/// Integration tests across the workspace: config, parsing and previews.
use std::io::Write;
use std::time::Duration;

use bizchat_message::{parse_message, SegmentKind};
use bizchat_preview::{CachedLookup, PreviewDirectory, PreviewLookup};

const ANSWER: &str = "Based on our database, here are the largest employers in Charlotte:

1. **Bank of America** (from our database): headquartered *Uptown*
2. **Wells Fargo** (from our database): major East Coast hub
3. **Duke Energy**: utility, not in our records

**Bank of America** (from our database) also leads on revenue.";

#[test]
fn answer_parses_into_lists_and_attributions() {
    let msg = parse_message(ANSWER);

    assert_eq!(msg.segments_by_kind(SegmentKind::NumberedList).len(), 3);
    assert_eq!(msg.segments_by_kind(SegmentKind::DatabaseIndicator).len(), 3);
    assert_eq!(msg.database_business_names(), vec!["Bank of America", "Wells Fargo"]);
    assert_eq!(msg.segments_by_kind(SegmentKind::Italic)[0].content(), "Uptown");

    let bold: Vec<_> = msg
        .segments_by_kind(SegmentKind::Bold)
        .iter()
        .map(|s| s.content())
        .collect();
    assert_eq!(bold, vec!["Bank of America", "Wells Fargo", "Duke Energy", "Bank of America"]);
}

#[test]
fn config_points_previews_at_a_directory() {
    let mut directory = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        directory,
        "- name: Bank of America\n  industry: Banking\n- name: Wells Fargo\n  industry: Banking\n"
    )
    .unwrap();

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config_file,
        "[preview]\ndirectory = {:?}\ncache_ttl_secs = 60",
        directory.path().display().to_string()
    )
    .unwrap();

    let config = bizchat_config::load(Some(config_file.path())).unwrap();
    let path = config.preview.directory_path().unwrap();
    let lookup = CachedLookup::with_limits(
        PreviewDirectory::load(&path).unwrap(),
        config.preview.cache_capacity,
        Duration::from_secs(config.preview.cache_ttl_secs),
    );

    let msg = parse_message(ANSWER);
    let found = lookup.lookup_many(&msg.database_business_names());
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|(_, p)| p.industry == "Banking"));
    assert!(lookup.lookup("Duke Energy").is_none());
}

#[test]
fn config_defaults_are_valid() {
    let cfg = bizchat_config::Config::default();
    assert!(cfg.preview.directory.is_none());
    assert!(cfg.render.show_previews);
}
