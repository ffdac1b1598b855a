//! Keyword resolution
//!
//! Expands a short keyword into a value token. Candidates are tried in a fixed
//! order and the first table with a match wins:
//! 1. the snippet's own keywords
//! 2. the keywords of each dependency snippet, in declared order
//! 3. the global keyword vocabulary

use crate::stylesheet::abbreviation::Value;
use crate::stylesheet::matcher::find_best_match;
use crate::stylesheet::score::Scorer;
use crate::stylesheet::snippets::{KeywordTable, PropertySnippet};

/// Resolves keywords for one resolution pass
#[derive(Clone, Copy)]
pub struct KeywordResolver<'a> {
    scorer: &'a dyn Scorer,
    vocabulary: &'a [String],
}

impl<'a> KeywordResolver<'a> {
    pub fn new(scorer: &'a dyn Scorer, vocabulary: &'a [String]) -> Self {
        Self { scorer, vocabulary }
    }

    /// Resolve `keyword`, optionally scoped to a property snippet
    pub fn resolve(&self, keyword: &str, snippet: Option<&PropertySnippet>, min_score: f64) -> Option<Value> {
        if let Some(snippet) = snippet {
            let tables = std::iter::once(snippet.keywords.as_ref())
                .chain(snippet.dependencies.iter().map(|dep| dep.keywords.as_ref()));
            for table in tables {
                if let Some(value) = self.match_table(keyword, table, min_score) {
                    log::trace!("Keyword '{}' resolved from '{}' snippet keywords", keyword, snippet.key);
                    return Some(value);
                }
            }
        }

        find_best_match(self.scorer, keyword, self.vocabulary, min_score, false)
            .map(|global| Value::Literal(global.clone()))
    }

    fn match_table(&self, keyword: &str, table: &KeywordTable, min_score: f64) -> Option<Value> {
        find_best_match(self.scorer, keyword, table.keys(), min_score, false)
            .and_then(|key| table.get(key))
            .cloned()
    }
}
