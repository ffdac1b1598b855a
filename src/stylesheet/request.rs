//! Resolve requests
//!
//! A self-contained JSON document holding an abbreviation tree, the snippet
//! definitions to resolve it against and an optional configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::stylesheet::abbreviation::CssAbbreviation;
use crate::stylesheet::config::ResolverConfig;
use crate::stylesheet::error::{IoContext, JsonContext, ResolverResult};
use crate::stylesheet::resolver::StylesheetResolver;
use crate::stylesheet::snippets::{SnippetDefinition, SnippetDictionary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub abbreviation: CssAbbreviation,
    #[serde(default)]
    pub snippets: Vec<SnippetDefinition>,
    #[serde(default)]
    pub config: ResolverConfig,
}

impl ResolveRequest {
    pub fn from_json(json: &str) -> ResolverResult<Self> {
        serde_json::from_str(json).with_json_context("Invalid resolve request")
    }

    pub fn from_file(path: &Path) -> ResolverResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_io_context(&format!("Failed to read request {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Validate the configuration and resolve the abbreviation
    pub fn run(self) -> ResolverResult<CssAbbreviation> {
        let resolver = StylesheetResolver::new(self.config)?;
        let snippets = SnippetDictionary::from_definitions(self.snippets);
        log::info!(
            "Resolving {} nodes against {} snippets",
            self.abbreviation.len(),
            snippets.len()
        );
        Ok(resolver.resolve(self.abbreviation, &snippets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::abbreviation::{CssValue, Value};
    use crate::stylesheet::error::ResolverError;

    const REQUEST: &str = r#"{
        "abbreviation": [
            {"name": "poas"},
            {"name": "m", "value": [[{"type": "number", "value": {"value": 10}}]]}
        ],
        "snippets": [
            {"type": "property", "key": "pos", "property": "position",
             "values": [[[{"type": "literal", "value": "relative"}]], [[{"type": "literal", "value": "absolute"}]]]},
            {"type": "property", "key": "m", "property": "margin"}
        ],
        "config": {"intUnit": "rem"}
    }"#;

    #[test]
    fn test_run_request() {
        let resolved = ResolveRequest::from_json(REQUEST).unwrap().run().unwrap();
        assert_eq!(resolved[0].name.as_deref(), Some("position"));
        assert_eq!(resolved[0].value, vec![CssValue::single(Value::literal("absolute"))]);
        assert_eq!(resolved[1].name.as_deref(), Some("margin"));
        match &resolved[1].value[0].value[0] {
            Value::Number(number) => assert_eq!(number.unit, "rem"),
            other => panic!("Expected number, got {:?}", other),
        }
    }

    #[test]
    fn test_config_is_optional() {
        let request = ResolveRequest::from_json(r#"{"abbreviation": [{"name": "lg"}]}"#).unwrap();
        assert!(request.snippets.is_empty());
        let resolved = request.run().unwrap();
        assert_eq!(resolved[0].name.as_deref(), Some("background-image"));
    }

    #[test]
    fn test_invalid_config_fails_run() {
        let request = ResolveRequest::from_json(
            r#"{"abbreviation": [], "config": {"intUnit": ""}}"#,
        )
        .unwrap();
        assert!(matches!(request.run(), Err(ResolverError::EmptyUnit { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = ResolveRequest::from_file(Path::new("/nonexistent/request.json"));
        assert!(matches!(result, Err(ResolverError::Io { .. })));
    }
}
