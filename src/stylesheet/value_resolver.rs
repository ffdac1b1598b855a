//! Value keyword resolution
//!
//! Replaces abbreviated literals and function names in a property value with
//! the keywords they stand for.

use crate::stylesheet::abbreviation::{CssProperty, FunctionCall, Value};
use crate::stylesheet::keyword::KeywordResolver;
use crate::stylesheet::snippets::PropertySnippet;

/// Resolve every literal and function name in the node's value
pub fn resolve_value_keywords(
    node: &mut CssProperty,
    keywords: &KeywordResolver,
    snippet: Option<&PropertySnippet>,
    min_score: f64,
) {
    for group in &mut node.value {
        for token in &mut group.value {
            if let Some(resolved) = resolve_token(token, keywords, snippet, min_score) {
                *token = resolved;
            }
        }
    }
}

fn resolve_token(
    token: &Value,
    keywords: &KeywordResolver,
    snippet: Option<&PropertySnippet>,
    min_score: f64,
) -> Option<Value> {
    match token {
        Value::Literal(text) => keywords.resolve(text, snippet, min_score),
        Value::Function(call) => match keywords.resolve(&call.name, snippet, min_score)? {
            Value::Function(template) => Some(Value::Function(merge_arguments(call, template))),
            _ => None,
        },
        Value::Number(_) | Value::Color(_) | Value::String(_) | Value::Field(_) => None,
    }
}

/// Keep every argument the user wrote and append the template's arguments past that count
fn merge_arguments(call: &FunctionCall, template: FunctionCall) -> FunctionCall {
    let mut arguments = call.arguments.clone();
    arguments.extend(template.arguments.into_iter().skip(call.arguments.len()));
    FunctionCall {
        name: template.name,
        arguments,
    }
}
