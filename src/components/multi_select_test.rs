use super::*;

fn options() -> Vec<String> {
    vec!["Pending".into(), "Approved".into(), "Confirmed".into(), "Completed".into()]
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut selection = Selection::default();
    selection.toggle("Pending");
    assert!(selection.contains("Pending"));
    selection.toggle("Pending");
    assert!(!selection.contains("Pending"));
    assert!(selection.is_empty());
}

#[test]
fn toggle_preserves_pick_order() {
    let mut selection = Selection::default();
    selection.toggle("Confirmed");
    selection.toggle("Pending");
    assert_eq!(selection.values(), ["Confirmed".to_owned(), "Pending".to_owned()]);
}

#[test]
fn empty_selection_admits_everything() {
    let selection = Selection::default();
    assert!(selection.admits("Pending"));
    assert!(selection.admits("anything"));
}

#[test]
fn non_empty_selection_admits_only_members() {
    let mut selection = Selection::default();
    selection.toggle("Completed");
    assert!(selection.admits("Completed"));
    assert!(!selection.admits("Pending"));
}

#[test]
fn clear_resets_to_no_filter() {
    let mut selection = Selection::default();
    selection.toggle("Pending");
    selection.clear();
    assert!(selection.admits("Completed"));
}

// =============================================================
// filter_options
// =============================================================

#[test]
fn empty_query_keeps_all_options_in_order() {
    let opts = options();
    let filtered: Vec<&String> = filter_options(&opts, "");
    assert_eq!(filtered.len(), 4);
    assert_eq!(filtered[0], "Pending");
}

#[test]
fn query_filters_case_insensitively() {
    let opts = options();
    let filtered = filter_options(&opts, "conf");
    assert_eq!(filtered, vec!["Confirmed"]);
}

#[test]
fn query_with_no_match_yields_empty() {
    let opts = options();
    assert!(filter_options(&opts, "zzz").is_empty());
}
