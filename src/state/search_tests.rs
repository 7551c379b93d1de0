//! Tests for fragment search.

use super::*;

fn fragments(lines: &[&str]) -> Vec<Fragment> {
    lines.iter().map(|line| Fragment::from(*line)).collect()
}

// ===== SearchQuery =====

#[test]
fn search_query_rejects_empty() {
    assert!(SearchQuery::new("").is_none());
}

#[test]
fn search_query_keeps_text_as_typed() {
    let query = SearchQuery::new("Boss").unwrap();
    assert_eq!(query.as_str(), "Boss");
}

// ===== search =====

#[test]
fn search_is_case_insensitive() {
    let doc = fragments(&["hello boss", "nothing", "BOSS mode"]);
    assert_eq!(search(&doc, "boss"), vec![0, 2]);
    assert_eq!(search(&doc, "BOSS"), vec![0, 2]);
    assert_eq!(search(&doc, "bOsS"), vec![0, 2]);
}

#[test]
fn search_without_hits_is_empty() {
    let doc = fragments(&["alpha", "beta"]);
    assert!(search(&doc, "gamma").is_empty());
}

#[test]
fn search_reports_each_fragment_once() {
    let doc = fragments(&["boss boss boss"]);
    assert_eq!(search(&doc, "boss"), vec![0]);
}

#[test]
fn search_matches_multibyte_text() {
    let doc = fragments(&["老板来了", "继续摸鱼", "ÉCOLE"]);
    assert_eq!(search(&doc, "老板"), vec![0]);
    assert_eq!(search(&doc, "école"), vec![2]);
}

// ===== first_match_from =====

#[test]
fn first_match_from_prefers_match_at_current() {
    assert_eq!(first_match_from(&[2, 5, 9], 5), Some(1));
}

#[test]
fn first_match_from_scans_forward() {
    assert_eq!(first_match_from(&[2, 5, 9], 6), Some(2));
}

#[test]
fn first_match_from_wraps_to_document_start() {
    assert_eq!(first_match_from(&[2, 5, 9], 10), Some(0));
}

#[test]
fn first_match_from_none_without_matches() {
    assert_eq!(first_match_from(&[], 3), None);
}

// ===== CommittedSearch =====

#[test]
fn committed_search_starts_at_first_forward_match() {
    let doc = fragments(&["a boss", "x", "boss", "y", "boss again"]);
    let committed = CommittedSearch::run(SearchQuery::new("boss").unwrap(), &doc, 1);
    assert_eq!(committed.matches(), &[0, 2, 4]);
    assert_eq!(committed.current_fragment(), Some(2));
    assert_eq!(committed.position(), 2);
}

#[test]
fn committed_search_advance_wraps_around() {
    let doc = fragments(&["boss", "x", "boss"]);
    let mut committed = CommittedSearch::run(SearchQuery::new("boss").unwrap(), &doc, 2);
    assert_eq!(committed.current_fragment(), Some(2));
    assert_eq!(committed.advance(), Some(0));
    assert_eq!(committed.advance(), Some(2));
}

#[test]
fn committed_search_retreat_wraps_around() {
    let doc = fragments(&["boss", "x", "boss"]);
    let mut committed = CommittedSearch::run(SearchQuery::new("boss").unwrap(), &doc, 0);
    assert_eq!(committed.retreat(), Some(2));
    assert_eq!(committed.retreat(), Some(0));
}

#[test]
fn committed_search_without_matches_is_inert() {
    let doc = fragments(&["nothing here"]);
    let mut committed = CommittedSearch::run(SearchQuery::new("boss").unwrap(), &doc, 0);
    assert_eq!(committed.current_fragment(), None);
    assert_eq!(committed.position(), 0);
    assert_eq!(committed.advance(), None);
    assert_eq!(committed.retreat(), None);
}

#[test]
fn rerun_uses_new_fragments() {
    let before = fragments(&["the boss is here"]);
    let after = fragments(&["the", "boss", "is", "here"]);
    let committed = CommittedSearch::run(SearchQuery::new("boss").unwrap(), &before, 0);

    let rerun = committed.rerun(&after, 0);

    assert_eq!(rerun.matches(), &[1]);
    assert_eq!(rerun.query().as_str(), "boss");
}
