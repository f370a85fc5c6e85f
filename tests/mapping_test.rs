use file_rename::errors::Error;
use file_rename::path_gen::map_filename;
use file_rename::{classify, Pattern, PatternShape};

fn map(search: &str, replace: &str, source: &str) -> Result<String, Error> {
    let search = Pattern::new(search).expect("Failed to parse search pattern");
    let replace = Pattern::new(replace).expect("Failed to parse replace pattern");
    let shape = classify(&search, &replace);
    map_filename(shape, &search, &replace, source)
}

#[test]
fn test_no_wildcard_round_trip() {
    // A literal pattern pair maps every source to the replace pattern
    assert_eq!(
        map("file1.htm", "file1.html", "file1.htm").unwrap(),
        "file1.html"
    );
    assert_eq!(
        map("file1.htm", "file1.html", "unrelated.htm").unwrap(),
        "file1.html"
    );
}

#[test]
fn test_single_wildcard_substitution() {
    assert_eq!(map("*.htm", "*.html", "file2.htm").unwrap(), "file2.html");
}

#[test]
fn test_double_dot_wildcard_substitution() {
    // The stem gains the prefix, the extension stays
    assert_eq!(
        map("*.*", "backup_*.*", "report.csv").unwrap(),
        "backup_report.csv"
    );
}

#[test]
fn test_edge_wildcard_with_suffix_literal() {
    assert_eq!(map("img*", "photo*", "img007.png").unwrap(), "photo007.png");
}

#[test]
fn test_ambiguous_replace_wildcard_fails() {
    let search = Pattern::new("notes.txt").unwrap();
    let replace = Pattern::new("arch*ive.txt").unwrap();

    let shape = classify(&search, &replace);
    assert_eq!(
        shape,
        PatternShape::Ambiguous,
        "A mid-string replace wildcard must classify as ambiguous"
    );

    let result = map_filename(shape, &search, &replace, "notes.txt");
    assert!(
        matches!(result, Err(Error::AmbiguousWildcard { .. })),
        "Mapping must fail with an ambiguous wildcard error, never guess a filename"
    );
}

#[test]
fn test_classification_is_idempotent() {
    let search = Pattern::new("*.htm").unwrap();
    let replace = Pattern::new("*.html").unwrap();

    let shapes: Vec<PatternShape> = (0..5).map(|_| classify(&search, &replace)).collect();
    assert!(
        shapes.iter().all(|shape| *shape == shapes[0]),
        "Classification must be a pure function of the pattern pair"
    );
}

#[test]
fn test_mapping_is_deterministic() {
    let first = map("*.htm", "*.html", "file2.htm").unwrap();
    let second = map("*.htm", "*.html", "file2.htm").unwrap();
    assert_eq!(first, second, "Identical inputs must map identically");
}

#[test]
fn test_every_replace_edge_shape() {
    // Wildcard carries the source stem into the new extension
    assert_eq!(map("notes.txt", "*.html", "notes.txt").unwrap(), "notes.html");
    // Wildcard carries the source stem in front of a literal tail
    assert_eq!(
        map("notes.txt", "*_v2.txt", "notes.txt").unwrap(),
        "notes_v2.txt"
    );
    // Wildcard carries the source extension behind a literal stem
    assert_eq!(
        map("notes.txt", "archive.*", "notes.txt").unwrap(),
        "archive.txt"
    );
    // Wildcard carries the whole source name behind a literal prefix
    assert_eq!(
        map("notes.txt", "backup_*", "notes.txt").unwrap(),
        "backup_notes.txt"
    );
}

#[test]
fn test_every_search_edge_shape() {
    // Leading wildcard with a dot anchor keeps the stem
    assert_eq!(map("*.htm", "page.html", "file2.htm").unwrap(), "file2page.html");
    // Leading wildcard with a plain anchor keeps the head
    assert_eq!(map("*_old", "_new", "report_old").unwrap(), "report_new");
    // Trailing wildcard with a dot anchor keeps the extension
    assert_eq!(map("img.*", "photo.", "img.png").unwrap(), "photo.png");
    // Trailing wildcard with a plain anchor keeps the tail
    assert_eq!(map("img*", "photo", "img007.png").unwrap(), "photo007.png");
}

#[test]
fn test_unparsable_dot_pattern_fails() {
    let result = map("*.*", "backup", "report.csv");
    assert!(
        matches!(result, Err(Error::UnparsableDotPattern { .. })),
        "A dotless replace pattern must fail the double-dot shape"
    );
}

#[test]
fn test_empty_pattern_is_rejected() {
    let result = Pattern::new("");
    assert!(
        matches!(result, Err(Error::EmptyPattern)),
        "The classifier must reject empty patterns"
    );
}
