use super::load::CatalogError;
use super::*;
use std::path::Path;

#[test]
fn builtin_catalog_is_ordered_and_queryable_by_id() {
    let c = Catalog::builtin();
    assert_eq!(c.len(), 5);
    let ids: Vec<u32> = c.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let t = c.get(3).unwrap();
    assert_eq!(t.title, "Stairway to Heaven");
    assert_eq!(t.duration_label, "8:02");
    assert!(c.get(42).is_none());
}

#[test]
fn display_joins_artist_and_title() {
    let c = Catalog::builtin();
    assert_eq!(c.get(1).unwrap().display(), "Queen - Bohemian Rhapsody");

    let mut t = c.get(1).unwrap().clone();
    t.artist = "  ".into();
    assert_eq!(t.display(), "Bohemian Rhapsody");
}

#[test]
fn from_toml_str_reads_tracks_in_file_order() {
    let text = r#"
[[tracks]]
id = 10
title = "Second"
artist = "B"
duration = "0:05"

[[tracks]]
id = 7
title = "First"
artist = "A"
duration = "3:40"
cover = "/img/a.jpg"
plays = "12K"
"#;
    let c = Catalog::from_toml_str(text, Path::new("inline.toml")).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.at(0).unwrap().id, 10);
    assert_eq!(c.at(0).unwrap().cover_ref, "");
    assert_eq!(c.at(0).unwrap().plays, None);
    assert_eq!(c.get(7).unwrap().cover_ref, "/img/a.jpg");
    assert_eq!(c.get(7).unwrap().plays.as_deref(), Some("12K"));
}

#[test]
fn from_toml_str_rejects_duplicate_ids() {
    let text = r#"
[[tracks]]
id = 1
title = "A"
artist = "X"
duration = "1:00"

[[tracks]]
id = 1
title = "B"
artist = "Y"
duration = "2:00"
"#;
    let err = Catalog::from_toml_str(text, Path::new("dup.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(1)));
}

#[test]
fn from_toml_str_reports_parse_errors() {
    let err = Catalog::from_toml_str("[[tracks]]\nid = \"nope\"", Path::new("bad.toml"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn load_reads_file_and_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        "[[tracks]]\nid = 1\ntitle = \"Only\"\nartist = \"One\"\nduration = \"2:30\"\n",
    )
    .unwrap();

    let c = Catalog::load(&path).unwrap();
    assert_eq!(c.len(), 1);

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        Catalog::load(&missing).unwrap_err(),
        CatalogError::Io { .. }
    ));
}
