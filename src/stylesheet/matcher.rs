//! Fuzzy matching of abbreviations against candidate lists

use crate::stylesheet::score::Scorer;

/// Anything the matcher can compare an abbreviation against
pub trait MatchKey {
    fn match_key(&self) -> &str;
}

impl MatchKey for str {
    fn match_key(&self) -> &str {
        self
    }
}

impl MatchKey for String {
    fn match_key(&self) -> &str {
        self
    }
}

/// Find the item whose key best matches `query`.
///
/// The first item scoring exactly 1 wins right away. Otherwise the highest
/// scoring item wins, later items winning ties, as long as it scores above 0
/// and at least `min_score`.
pub fn find_best_match<'a, T, I>(
    scorer: &dyn Scorer,
    query: &str,
    items: I,
    min_score: f64,
    partial: bool,
) -> Option<&'a T>
where
    T: MatchKey + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut max_score = 0.0;
    let mut matched = None;

    for item in items {
        let score = scorer.score(query, item.match_key(), partial);
        if score >= 1.0 {
            return Some(item);
        }
        if score > 0.0 && score >= max_score {
            max_score = score;
            matched = Some(item);
        }
    }

    if max_score >= min_score { matched } else { None }
}

/// Returns the part of `abbr` not consumed when matching it, in order, against `matched`.
///
/// `unmatched_suffix("poas", "position")` is `"as"`: `p` and `o` are found,
/// `a` does not occur after them. Characters compare case-insensitively, like
/// the default scorer.
pub fn unmatched_suffix<'a>(abbr: &'a str, matched: &str) -> &'a str {
    let mut rest = matched;
    for (offset, ch) in abbr.char_indices() {
        let found = rest
            .char_indices()
            .find(|&(_, candidate)| candidate.to_lowercase().eq(ch.to_lowercase()));
        match found {
            Some((pos, candidate)) => rest = &rest[pos + candidate.len_utf8()..],
            None => return &abbr[offset..],
        }
    }
    ""
}
