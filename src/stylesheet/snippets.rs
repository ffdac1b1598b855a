//! Snippet dictionary
//!
//! Typed snippets the resolver matches abbreviations against. A property
//! snippet maps a short key to a property, its default values and the
//! keywords those values use. A raw snippet maps a key to literal text.
//!
//! Property snippets are linked to the snippets of their sub-properties
//! (`border` to `border-style`, `border-width`, ...) so a property can borrow
//! keywords from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::stylesheet::abbreviation::{CssValue, Value};
use crate::stylesheet::matcher::MatchKey;

/// Keyword text to the token it resolves to, in declaration order
pub type KeywordTable = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Snippet {
    Property(PropertySnippet),
    Raw(RawSnippet),
}

impl Snippet {
    pub fn key(&self) -> &str {
        match self {
            Snippet::Property(snippet) => &snippet.key,
            Snippet::Raw(snippet) => &snippet.key,
        }
    }

    pub fn as_property(&self) -> Option<&PropertySnippet> {
        match self {
            Snippet::Property(snippet) => Some(snippet),
            Snippet::Raw(_) => None,
        }
    }
}

impl MatchKey for Snippet {
    fn match_key(&self) -> &str {
        self.key()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySnippet {
    pub key: String,
    /// Canonical property name
    pub property: String,
    /// Default value variants; the first one is used when the abbreviation has no value
    pub value: Vec<Vec<CssValue>>,
    pub keywords: Arc<KeywordTable>,
    /// Sub-property snippets whose keywords are used as fallback, in order
    pub dependencies: Vec<SnippetDependency>,
}

impl PropertySnippet {
    pub fn new(key: &str, property: &str, value: Vec<Vec<CssValue>>) -> Self {
        let keywords = collect_keywords(&value);
        Self {
            key: key.to_string(),
            property: property.to_string(),
            value,
            keywords: Arc::new(keywords),
            dependencies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnippetDependency {
    pub property: String,
    pub keywords: Arc<KeywordTable>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawSnippet {
    pub key: String,
    pub value: String,
}

/// Snippet as supplied by a caller, before keywords and dependencies are derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SnippetDefinition {
    Property {
        key: String,
        property: String,
        #[serde(default)]
        values: Vec<Vec<CssValue>>,
    },
    Raw {
        key: String,
        text: String,
    },
}

/// Collect the keywords used by a snippet's value variants.
///
/// Literals are keyed by their text, function calls by their name and
/// non-blank field labels become literals.
fn collect_keywords(variants: &[Vec<CssValue>]) -> KeywordTable {
    let mut keywords = KeywordTable::new();
    for token in variants.iter().flatten().flat_map(|group| &group.value) {
        match token {
            Value::Literal(text) => {
                keywords.insert(text.clone(), token.clone());
            }
            Value::Function(call) => {
                keywords.insert(call.name.clone(), token.clone());
            }
            Value::Field(field) => {
                let label = field.name.trim();
                if !label.is_empty() {
                    keywords.insert(label.to_string(), Value::literal(label));
                }
            }
            Value::Number(_) | Value::Color(_) | Value::String(_) => {}
        }
    }
    keywords
}

/// Whether `child` is a sub-property of `parent`, e.g. `border-style` of `border`
fn is_sub_property(parent: &str, child: &str) -> bool {
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('-'))
}

/// Read-only list of snippets, ordered by key
#[derive(Debug, Clone, Default)]
pub struct SnippetDictionary {
    snippets: Vec<Snippet>,
}

impl SnippetDictionary {
    /// Build a dictionary, deriving keywords and linking dependencies
    pub fn new(mut snippets: Vec<Snippet>) -> Self {
        snippets.sort_by(|a, b| a.key().cmp(b.key()));
        link_dependencies(&mut snippets);
        log::debug!("Built snippet dictionary with {} snippets", snippets.len());
        Self { snippets }
    }

    pub fn from_definitions(definitions: Vec<SnippetDefinition>) -> Self {
        let snippets = definitions
            .into_iter()
            .map(|definition| match definition {
                SnippetDefinition::Property { key, property, values } => {
                    Snippet::Property(PropertySnippet::new(&key, &property, values))
                }
                SnippetDefinition::Raw { key, text } => Snippet::Raw(RawSnippet { key, value: text }),
            })
            .collect();
        Self::new(snippets)
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Find the property snippet for an exact property name
    pub fn find_property(&self, property: &str) -> Option<&PropertySnippet> {
        self.snippets
            .iter()
            .filter_map(Snippet::as_property)
            .find(|snippet| snippet.property == property)
    }

    /// Get a snippet by its exact key
    pub fn get(&self, key: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|snippet| snippet.key() == key)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Walk property snippets in key order and link each one to the following
/// snippets that extend its property name
fn link_dependencies(snippets: &mut [Snippet]) {
    // (snippet index, property name) of every property snippet
    let properties: Vec<(usize, String)> = snippets
        .iter()
        .enumerate()
        .filter_map(|(index, snippet)| snippet.as_property().map(|p| (index, p.property.clone())))
        .collect();

    // positions in `properties`
    let mut stack: Vec<usize> = Vec::new();
    let mut links: Vec<(usize, usize)> = Vec::new();

    for (position, (index, property)) in properties.iter().enumerate() {
        while let Some(&top) = stack.last() {
            let (parent_index, parent) = &properties[top];
            if is_sub_property(parent, property) {
                links.push((*parent_index, *index));
                stack.push(position);
                break;
            }
            stack.pop();
        }
        if stack.is_empty() {
            stack.push(position);
        }
    }

    for (parent, child) in links {
        let dependency = match &snippets[child] {
            Snippet::Property(snippet) => SnippetDependency {
                property: snippet.property.clone(),
                keywords: Arc::clone(&snippet.keywords),
            },
            Snippet::Raw(_) => continue,
        };
        if let Snippet::Property(snippet) = &mut snippets[parent] {
            snippet.dependencies.push(dependency);
        }
    }
}

/// Builder for creating snippet dictionaries in code
#[derive(Debug, Default)]
pub struct SnippetDictionaryBuilder {
    snippets: Vec<Snippet>,
}

impl SnippetDictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property snippet without default values
    pub fn property(self, key: &str, property: &str) -> Self {
        self.property_with_values(key, property, Vec::new())
    }

    /// Add a property snippet with default value variants
    pub fn property_with_values(mut self, key: &str, property: &str, values: Vec<Vec<CssValue>>) -> Self {
        self.snippets
            .push(Snippet::Property(PropertySnippet::new(key, property, values)));
        self
    }

    /// Add a property snippet whose variants are single keywords, like `position: relative|absolute`
    pub fn property_with_keywords(self, key: &str, property: &str, keywords: &[&str]) -> Self {
        let values = keywords
            .iter()
            .map(|keyword| vec![CssValue::single(Value::literal(keyword))])
            .collect();
        self.property_with_values(key, property, values)
    }

    pub fn raw(mut self, key: &str, text: &str) -> Self {
        self.snippets.push(Snippet::Raw(RawSnippet {
            key: key.to_string(),
            value: text.to_string(),
        }));
        self
    }

    pub fn build(self) -> SnippetDictionary {
        SnippetDictionary::new(self.snippets)
    }
}
