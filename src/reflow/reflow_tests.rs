//! Tests for the reflow engine.

use super::*;

fn texts(fragments: &[Fragment]) -> Vec<&str> {
    fragments.iter().map(Fragment::as_str).collect()
}

#[test]
fn empty_line_yields_one_empty_fragment() {
    let fragments = reflow(&[""], 10);
    assert_eq!(texts(&fragments), vec![""]);
}

#[test]
fn whitespace_only_line_counts_as_empty() {
    let fragments = reflow(&["   \t  "], 10);
    assert_eq!(texts(&fragments), vec![""]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let fragments = reflow(&["   hello world  "], 40);
    assert_eq!(texts(&fragments), vec!["hello world"]);
}

#[test]
fn long_line_wraps_at_exact_width() {
    let fragments = reflow(&["abcdefghij"], 4);
    assert_eq!(texts(&fragments), vec!["abcd", "efgh", "ij"]);
}

#[test]
fn line_exactly_max_width_is_one_fragment() {
    let fragments = reflow(&["abcd"], 4);
    assert_eq!(texts(&fragments), vec!["abcd"]);
}

#[test]
fn double_width_characters_count_two_columns() {
    // Each ideograph is 2 columns; 5 columns fit two of them.
    let fragments = reflow(&["一二三四五"], 5);
    assert_eq!(texts(&fragments), vec!["一二", "三四", "五"]);
}

#[test]
fn mixed_width_text_never_overflows() {
    let fragments = reflow(&["ab漢字cd"], 3);
    assert_eq!(texts(&fragments), vec!["ab", "漢", "字c", "d"]);
    assert!(fragments.iter().all(|f| f.width() <= 3));
}

#[test]
fn blank_lines_between_paragraphs_are_preserved() {
    let fragments = reflow(&["first", "", "second"], 20);
    assert_eq!(texts(&fragments), vec!["first", "", "second"]);
}

#[test]
fn zero_width_yields_one_fragment_per_character() {
    let fragments = reflow(&["abc"], 0);
    assert_eq!(texts(&fragments), vec!["a", "b", "c"]);
}

#[test]
fn zero_width_still_preserves_blank_lines() {
    let fragments = reflow(&["", "xy"], 0);
    assert_eq!(texts(&fragments), vec!["", "x", "y"]);
}

#[test]
fn character_wider_than_max_sits_alone() {
    let fragments = reflow(&["a漢b"], 1);
    assert_eq!(texts(&fragments), vec!["a", "漢", "b"]);
}

#[test]
fn reflow_is_deterministic() {
    let lines = ["The quick brown fox", "", "跳过懒狗 jumps over the lazy dog"];
    assert_eq!(reflow(&lines, 7), reflow(&lines, 7));
}

#[test]
fn no_lines_yields_no_fragments() {
    let lines: [&str; 0] = [];
    assert!(reflow(&lines, 10).is_empty());
}

#[test]
fn max_width_for_subtracts_margin() {
    assert_eq!(max_width_for(80), 72);
    assert_eq!(max_width_for(9), 1);
}

#[test]
fn max_width_for_saturates_on_narrow_terminal() {
    assert_eq!(max_width_for(8), 0);
    assert_eq!(max_width_for(3), 0);
    assert_eq!(max_width_for(0), 0);
}
