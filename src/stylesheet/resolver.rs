//! Stylesheet abbreviation resolver
//!
//! Decides what each abbreviation node means: expands partial property names,
//! partial keywords and shorthand functions into full declarations, fills in
//! default values as placeholder fields and picks units for bare numbers.
//!
//! A resolution pass only reads the snippet dictionary and configuration, so
//! one resolver can serve independent trees from several threads.

use crate::stylesheet::abbreviation::{CssAbbreviation, CssProperty, CssValue, Value};
use crate::stylesheet::color::{ColorFormatter, HexColorFormatter};
use crate::stylesheet::config::ResolverConfig;
use crate::stylesheet::error::ResolverResult;
use crate::stylesheet::field::{FieldIndex, FieldWrapper};
use crate::stylesheet::gradient::resolve_gradient;
use crate::stylesheet::keyword::KeywordResolver;
use crate::stylesheet::matcher::{find_best_match, unmatched_suffix};
use crate::stylesheet::numeric::resolve_numeric_value;
use crate::stylesheet::score::{AbbreviationScorer, Scorer};
use crate::stylesheet::snippets::{PropertySnippet, RawSnippet, Snippet, SnippetDictionary};
use crate::stylesheet::value_resolver::resolve_value_keywords;

/// Resolves abbreviation trees against a snippet dictionary
pub struct StylesheetResolver {
    config: ResolverConfig,
    scorer: Box<dyn Scorer + Send + Sync>,
    color_formatter: Box<dyn ColorFormatter + Send + Sync>,
}

impl StylesheetResolver {
    /// Create a resolver with the default scorer and color formatter.
    /// The configuration is validated here so resolution itself cannot fail.
    pub fn new(config: ResolverConfig) -> ResolverResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scorer: Box::new(AbbreviationScorer),
            color_formatter: Box::new(HexColorFormatter),
        })
    }

    pub fn with_scorer(mut self, scorer: impl Scorer + Send + Sync + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn with_color_formatter(mut self, formatter: impl ColorFormatter + Send + Sync + 'static) -> Self {
        self.color_formatter = Box::new(formatter);
        self
    }

    /// Resolve every node of the abbreviation, in document order
    pub fn resolve(&self, mut abbreviation: CssAbbreviation, snippets: &SnippetDictionary) -> CssAbbreviation {
        for node in &mut abbreviation {
            self.resolve_node(node, snippets);
        }
        abbreviation
    }

    /// Resolve a single node in place
    pub fn resolve_node(&self, node: &mut CssProperty, snippets: &SnippetDictionary) {
        let context = self.config.context.as_deref();

        if !resolve_gradient(node, context.is_some()) {
            if let Some(property) = context {
                // value fragment inside a known property: the name is not matched
                let snippet = snippets.find_property(property);
                log::debug!(
                    "Resolving value in context of '{}' (snippet found: {})",
                    property,
                    snippet.is_some()
                );
                resolve_value_keywords(
                    node,
                    &self.keywords(),
                    snippet,
                    self.config.fuzzy_search_min_score,
                );
            } else if let Some(name) = node.name.clone() {
                let matched = find_best_match(
                    &*self.scorer,
                    &name,
                    snippets.snippets(),
                    self.config.fuzzy_search_min_score,
                    true,
                );
                match matched {
                    Some(Snippet::Property(snippet)) => self.resolve_as_property(node, &name, snippet),
                    Some(Snippet::Raw(snippet)) => resolve_as_raw(node, snippet),
                    None => log::debug!("No snippet matches '{}'", name),
                }
            }
        }

        let property = context.or(node.name.as_deref()).map(str::to_string);
        resolve_numeric_value(node, property.as_deref(), &self.config);
    }

    fn resolve_as_property(&self, node: &mut CssProperty, abbr: &str, snippet: &PropertySnippet) {
        log::debug!("'{}' resolved to property '{}'", abbr, snippet.property);
        node.name = Some(snippet.property.clone());

        if !node.value.is_empty() {
            resolve_value_keywords(node, &self.keywords(), Some(snippet), 0.0);
            return;
        }

        // keyword written after the property abbreviation, like `a` in `poa`
        let inline = unmatched_suffix(abbr, &snippet.key);
        if !inline.is_empty() {
            if let Some(keyword) = self.keywords().resolve(inline, Some(snippet), 0.0) {
                log::trace!("Inline keyword '{}' resolved to {:?}", inline, keyword);
                node.value = vec![CssValue::single(keyword)];
                return;
            }
        }

        if let Some(default) = snippet.value.first() {
            node.value = if snippet.value.len() > 1 || default.iter().any(CssValue::has_field) {
                default.clone()
            } else {
                let wrapper = FieldWrapper::new(&*self.color_formatter, self.config.short_hex);
                wrapper.wrap_groups(default, &mut FieldIndex::default())
            };
        }
    }

    fn keywords(&self) -> KeywordResolver<'_> {
        KeywordResolver::new(&*self.scorer, &self.config.keywords)
    }
}

/// Replace the node with the snippet's text
fn resolve_as_raw(node: &mut CssProperty, snippet: &RawSnippet) {
    log::debug!("'{}' resolved to raw snippet", snippet.key);
    node.name = None;
    node.value = vec![CssValue::single(Value::Literal(snippet.value.clone()))];
}
