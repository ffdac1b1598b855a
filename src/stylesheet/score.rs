//! Abbreviation scoring
//!
//! Scores how well an abbreviation fits a candidate string as an ordered
//! subsequence. 1 is an ideal match, 0 means no usable similarity.

/// Scoring primitive used by the matcher
pub trait Scorer {
    /// Score `abbr` against `candidate`.
    ///
    /// With `partial`, an abbreviation character missing from the candidate stops
    /// matching instead of failing it, and the score reflects the consumed prefix.
    fn score(&self, abbr: &str, candidate: &str, partial: bool) -> f64;
}

/// Highest score a non-identical pair can reach
const NEAR_PERFECT: f64 = 0.999;

/// Default subsequence scorer.
///
/// Every matched character adds more the earlier it appears in the candidate,
/// and twice as much when it directly follows a skipped `-` (so `bs` prefers
/// `border-style` over `bottom-shadow`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AbbreviationScorer;

impl Scorer for AbbreviationScorer {
    fn score(&self, abbr: &str, candidate: &str, partial: bool) -> f64 {
        let abbr: Vec<char> = abbr.to_lowercase().chars().collect();
        let candidate: Vec<char> = candidate.to_lowercase().chars().collect();

        if abbr == candidate {
            return 1.0;
        }
        // the candidate must start with the same character
        if abbr.is_empty() || abbr.first() != candidate.first() {
            return 0.0;
        }

        let abbr_len = abbr.len();
        let len = candidate.len();
        let mut score = len as f64;
        let mut i = 1;
        let mut j = 1;

        while i < abbr_len {
            let ch = abbr[i];
            let mut found = false;
            let mut acronym = false;

            while j < len {
                if candidate[j] == ch {
                    found = true;
                    let weight = if acronym { 2 } else { 1 };
                    score += ((len - j) * weight) as f64;
                    j += 1;
                    break;
                }
                acronym = candidate[j] == '-';
                j += 1;
            }

            if !found {
                if !partial {
                    return 0.0;
                }
                break;
            }
            i += 1;
        }

        let match_ratio = i as f64 / abbr_len as f64;
        let delta = len as i64 - abbr_len as i64;
        let max_score = triangular(len as i64) - triangular(delta);
        if max_score <= 0.0 {
            return 0.0;
        }

        (score * match_ratio / max_score).clamp(0.0, NEAR_PERFECT)
    }
}

fn triangular(n: i64) -> f64 {
    (n * (n + 1)) as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_perfect() {
        let scorer = AbbreviationScorer;
        assert_eq!(scorer.score("pos", "pos", false), 1.0);
        assert_eq!(scorer.score("POS", "pos", false), 1.0);
    }

    #[test]
    fn test_first_character_must_match() {
        let scorer = AbbreviationScorer;
        assert_eq!(scorer.score("as", "static", false), 0.0);
        assert_eq!(scorer.score("", "static", false), 0.0);
    }

    #[test]
    fn test_missing_character_fails_full_match() {
        let scorer = AbbreviationScorer;
        assert_eq!(scorer.score("poas", "pos", false), 0.0);
        let partial = scorer.score("poas", "pos", true);
        assert!(partial > 0.0 && partial < 1.0);
    }

    #[test]
    fn test_prefix_stays_below_perfect() {
        let scorer = AbbreviationScorer;
        let score = scorer.score("po", "pos", false);
        assert!(score < 1.0);
        assert!(score > 0.9);
    }

    #[test]
    fn test_earlier_characters_score_higher() {
        let scorer = AbbreviationScorer;
        let absolute = scorer.score("as", "absolute", false);
        assert!(absolute > 0.0);
        assert!(scorer.score("ab", "absolute", false) > absolute);
    }

    #[test]
    fn test_acronym_bonus() {
        let scorer = AbbreviationScorer;
        assert!(scorer.score("bs", "border-style", false) > scorer.score("bs", "borders", false));
    }

    #[test]
    fn test_longer_abbreviation_than_candidate() {
        let scorer = AbbreviationScorer;
        assert_eq!(scorer.score("pos", "p", true), 0.0);
    }
}
