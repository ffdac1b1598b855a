use std::collections::HashMap;

use crate::stylesheet::matcher::{find_best_match, unmatched_suffix};
use crate::stylesheet::score::{AbbreviationScorer, Scorer};

/// Returns a fixed score per candidate
struct TableScorer(HashMap<&'static str, f64>);

impl TableScorer {
    fn new(scores: &[(&'static str, f64)]) -> Self {
        Self(scores.iter().copied().collect())
    }
}

impl Scorer for TableScorer {
    fn score(&self, _abbr: &str, candidate: &str, _partial: bool) -> f64 {
        self.0.get(candidate).copied().unwrap_or(0.0)
    }
}

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_first_perfect_match_wins() {
    let scorer = TableScorer::new(&[("a", 0.5), ("b", 1.0), ("c", 1.0)]);
    let candidates = items(&["a", "b", "c"]);
    let matched = find_best_match(&scorer, "q", &candidates, 0.0, false);
    assert_eq!(matched.map(String::as_str), Some("b"));
}

#[test]
fn test_exact_query_wins_over_later_items() {
    let scorer = AbbreviationScorer;
    let candidates = items(&["pos", "position", "post"]);
    let matched = find_best_match(&scorer, "pos", &candidates, 0.0, false);
    assert!(std::ptr::eq(matched.unwrap(), &candidates[0]));
}

#[test]
fn test_later_tie_wins() {
    let scorer = TableScorer::new(&[("a", 0.5), ("b", 0.7), ("c", 0.7), ("d", 0.2)]);
    let candidates = items(&["a", "b", "c", "d"]);
    let matched = find_best_match(&scorer, "q", &candidates, 0.0, false);
    assert_eq!(matched.map(String::as_str), Some("c"));
}

#[test]
fn test_min_score_threshold() {
    let scorer = TableScorer::new(&[("a", 0.4), ("b", 0.3)]);
    let candidates = items(&["a", "b"]);
    assert_eq!(find_best_match(&scorer, "q", &candidates, 0.5, false), None);
    assert_eq!(
        find_best_match(&scorer, "q", &candidates, 0.4, false).map(String::as_str),
        Some("a")
    );
}

#[test]
fn test_zero_scores_never_match() {
    let scorer = TableScorer::new(&[]);
    let candidates = items(&["a", "b"]);
    assert_eq!(find_best_match(&scorer, "q", &candidates, 0.0, false), None);

    let empty: Vec<String> = Vec::new();
    assert_eq!(find_best_match(&scorer, "q", &empty, 0.0, false), None);
}

#[test]
fn test_partial_matching_with_default_scorer() {
    let scorer = AbbreviationScorer;
    let keys = items(&["p", "pos", "m"]);
    assert_eq!(find_best_match(&scorer, "poas", &keys, 0.0, false), None);
    assert_eq!(
        find_best_match(&scorer, "poas", &keys, 0.0, true).map(String::as_str),
        Some("pos")
    );
}

#[test]
fn test_unmatched_suffix() {
    assert_eq!(unmatched_suffix("poas", "position"), "as");
    assert_eq!(unmatched_suffix("poas", "pos"), "as");
    assert_eq!(unmatched_suffix("abc", "abc"), "");
    assert_eq!(unmatched_suffix("xyz", "abc"), "xyz");
    assert_eq!(unmatched_suffix("", "abc"), "");
}

#[test]
fn test_unmatched_suffix_ignores_case() {
    assert_eq!(unmatched_suffix("POAS", "position"), "AS");
    assert_eq!(unmatched_suffix("poas", "POS"), "as");
}

#[test]
fn test_unmatched_suffix_never_searches_backwards() {
    // `b` exists in the candidate, but only before the `c` already consumed
    assert_eq!(unmatched_suffix("acb", "abc"), "b");
}
