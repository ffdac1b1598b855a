//! Resolver configuration
//!
//! Read-only options for one resolution pass. Every key is optional when
//! loaded from JSON; missing keys take the defaults from `constants`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::stylesheet::constants::*;
use crate::stylesheet::error::{JsonContext, ResolverError, ResolverResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Matches scoring below this value are ignored
    pub fuzzy_search_min_score: f64,
    /// Property whose value is being completed. When set, node names are not matched
    pub context: Option<String>,
    /// Keywords valid for every property, tried after snippet keywords
    pub keywords: Vec<String>,
    /// Short unit name to canonical unit
    pub unit_aliases: HashMap<String, String>,
    /// Properties that never receive an automatic unit
    pub unitless: Vec<String>,
    /// Unit for whole numbers
    pub int_unit: String,
    /// Unit for fractional numbers
    pub float_unit: String,
    /// Print colors as #rgb when possible
    pub short_hex: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_search_min_score: 0.0,
            context: None,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            unit_aliases: DEFAULT_UNIT_ALIASES
                .iter()
                .map(|(alias, unit)| (alias.to_string(), unit.to_string()))
                .collect(),
            unitless: DEFAULT_UNITLESS_PROPERTIES.iter().map(|p| p.to_string()).collect(),
            int_unit: DEFAULT_INT_UNIT.to_string(),
            float_unit: DEFAULT_FLOAT_UNIT.to_string(),
            short_hex: true,
        }
    }
}

impl ResolverConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> ResolverResult<Self> {
        let config: Self = serde_json::from_str(json).with_json_context("Invalid resolver configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject option values the resolver cannot work with
    pub fn validate(&self) -> ResolverResult<()> {
        let score = self.fuzzy_search_min_score;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ResolverError::InvalidMinScore { score });
        }
        if self.int_unit.is_empty() {
            return Err(ResolverError::EmptyUnit { option: "intUnit" });
        }
        if self.float_unit.is_empty() {
            return Err(ResolverError::EmptyUnit { option: "floatUnit" });
        }
        if let Some((alias, unit)) = self
            .unit_aliases
            .iter()
            .find(|(alias, unit)| alias.is_empty() || unit.is_empty())
        {
            return Err(ResolverError::InvalidUnitAlias {
                alias: alias.clone(),
                unit: unit.clone(),
            });
        }
        Ok(())
    }

    /// Set the property context, for resolving a value fragment inside a known property
    pub fn with_context(mut self, property: &str) -> Self {
        self.context = Some(property.to_string());
        self
    }

    pub fn is_unitless(&self, property: &str) -> bool {
        self.unitless.iter().any(|p| p == property)
    }
}
