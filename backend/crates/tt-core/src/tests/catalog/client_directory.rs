use crate::ClientDirectory;

#[test]
fn test_seed_has_six_records() {
    let directory = ClientDirectory::default();
    assert_eq!(directory.len(), 6);
    assert!(!directory.is_empty());
}

#[test]
fn test_search_smith_returns_single_record() {
    let directory = ClientDirectory::default();

    let results = directory.search("Smith");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].client_name, "John Smith");
}

#[test]
fn test_search_is_case_insensitive() {
    let directory = ClientDirectory::default();
    assert_eq!(directory.search("sMiTh").len(), 1);
}

#[test]
fn test_empty_query_returns_everything() {
    let directory = ClientDirectory::default();
    assert_eq!(directory.search("").len(), 6);
    assert_eq!(directory.search("   ").len(), 6);
}

#[test]
fn test_search_matches_property_address() {
    let directory = ClientDirectory::default();

    let results = directory.search("burr ridge");

    let names: Vec<&str> = results.iter().map(|r| r.client_name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Johnson", "Emily Davis", "Jennifer Martinez"]);
}

#[test]
fn test_search_without_match_is_empty() {
    let directory = ClientDirectory::default();
    assert!(directory.search("Springfield").is_empty());
}

#[test]
fn test_search_preserves_seed_order() {
    let directory = ClientDirectory::default();

    let ids: Vec<&str> = directory
        .search("chicago")
        .iter()
        .map(|r| r.id.as_str())
        .collect();

    assert_eq!(ids, vec!["1", "3", "5"]);
}
