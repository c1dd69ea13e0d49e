// tests/matcher.rs
//
// Key Matcher behavior: exact railway, fuzzy line with operator prefixes.
//
use rent_scout::dataset::{ColumnKey, Item};
use rent_scout::match_line::LineSelection;

fn key(railway: &str, line: &str) -> ColumnKey {
    ColumnKey {
        railway: railway.into(),
        line: line.into(),
        item: Item::Station,
    }
}

#[test]
fn prefix_stripped_selection_matches_bare_key_line() {
    let sel = LineSelection::new("JR", "JR山手線");
    assert!(sel.matches(&key("JR", "山手線")));

    let sel = LineSelection::new("東京メトロ", "東京メトロ日比谷線");
    assert!(sel.matches(&key("東京メトロ", "日比谷線")));
}

#[test]
fn unrelated_line_does_not_match() {
    let sel = LineSelection::new("JR", "JR山手線");
    assert!(!sel.matches(&key("JR", "中央線")));
}

#[test]
fn exact_line_matches_without_stripping() {
    let sel = LineSelection::new("西武鉄道", "池袋線");
    assert!(sel.matches(&key("西武鉄道", "池袋線")));
}

#[test]
fn railway_comparison_is_exact() {
    let sel = LineSelection::new("JR", "JR山手線");
    assert!(!sel.matches(&key("ＪＲ", "山手線")));
    assert!(!sel.matches(&key("JR東日本", "山手線")));
}

#[test]
fn key_line_containing_stripped_selection_matches() {
    // Rule 3: key carries a decorated form of the selected line.
    let sel = LineSelection::new("東京メトロ", "東京メトロ日比谷線");
    assert!(sel.matches(&key("東京メトロ", "日比谷線(直通)")));
}

#[test]
fn full_width_operator_prefix_is_stripped() {
    let sel = LineSelection::new("JR東日本", "ＪＲ山手線");
    assert_eq!(sel.clean_line(), "山手線");
}

#[test]
fn short_key_line_substring_false_positive_is_known_behavior() {
    // Documented limitation: a short key line contained in the selection
    // matches even when it denotes a different service.
    let sel = LineSelection::new("JR", "JR京浜東北線");
    assert!(sel.matches(&key("JR", "東北線")));
}

#[test]
fn first_rule_short_circuits() {
    // Equality satisfies rule 1; the substring rules never run.
    let sel = LineSelection::new("JR", "山手線");
    assert!(sel.matches(&key("JR", "山手線")));
    assert_eq!(sel.line(), "山手線");
    assert_eq!(sel.clean_line(), "山手線");
}
