//! Stylesheet abbreviation tree
//!
//! The typed tree produced by the abbreviation tokenizer and rewritten in place
//! by the resolver. One `CssProperty` per declaration candidate, each holding
//! comma separated value groups of tokens.

use serde::{Deserialize, Serialize};

use crate::stylesheet::color::ColorValue;

/// A parsed stylesheet abbreviation, one node per declaration
pub type CssAbbreviation = Vec<CssProperty>;

/// A single declaration candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssProperty {
    /// Raw or resolved property name. `None` once the node became a raw snippet
    #[serde(default)]
    pub name: Option<String>,
    /// Value groups, in argument order
    #[serde(default)]
    pub value: Vec<CssValue>,
}

impl CssProperty {
    /// Create a node with a name and no value
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            value: Vec::new(),
        }
    }

    /// Create a node with a name and the given value groups
    pub fn with_value(name: &str, value: Vec<CssValue>) -> Self {
        Self {
            name: Some(name.to_string()),
            value,
        }
    }
}

/// An ordered group of value tokens (one comma separated operand)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssValue {
    pub value: Vec<Value>,
}

impl CssValue {
    pub fn new(value: Vec<Value>) -> Self {
        Self { value }
    }

    /// A group holding exactly one token
    pub fn single(token: Value) -> Self {
        Self { value: vec![token] }
    }

    /// Check whether any token of this group, at any depth, is a placeholder field
    pub fn has_field(&self) -> bool {
        self.value.iter().any(Value::has_field)
    }
}

/// A value token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Bare identifier or keyword
    Literal(String),
    /// Numeric magnitude with an optional unit
    Number(NumberValue),
    /// Color literal
    Color(ColorValue),
    /// Quoted string
    String(StringValue),
    /// Function call with nested argument groups
    Function(FunctionCall),
    /// Interactive placeholder
    Field(Field),
}

impl Value {
    pub fn literal(value: &str) -> Self {
        Value::Literal(value.to_string())
    }

    pub fn number(value: f64, unit: &str) -> Self {
        Value::Number(NumberValue::new(value, unit))
    }

    pub fn field(index: usize, name: &str) -> Self {
        Value::Field(Field {
            index,
            name: name.to_string(),
        })
    }

    pub fn function(name: &str, arguments: Vec<CssValue>) -> Self {
        Value::Function(FunctionCall {
            name: name.to_string(),
            arguments,
        })
    }

    /// Check whether this token is, or contains, a placeholder field
    pub fn has_field(&self) -> bool {
        match self {
            Value::Field(_) => true,
            Value::Function(call) => call.arguments.iter().any(CssValue::has_field),
            Value::Literal(_) | Value::Number(_) | Value::Color(_) | Value::String(_) => false,
        }
    }
}

/// A number token. An empty unit means the unit is not decided yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberValue {
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    /// Number as it was authored, e.g. `1.0` or `.5`
    #[serde(default, rename = "rawValue")]
    pub raw_value: String,
}

impl NumberValue {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            raw_value: value.to_string(),
        }
    }

    /// Create a number keeping its authored text
    pub fn from_raw(raw_value: &str, unit: &str) -> Option<Self> {
        let value = raw_value.parse::<f64>().ok()?;
        Some(Self {
            value,
            unit: unit.to_string(),
            raw_value: raw_value.to_string(),
        })
    }

    /// The magnitude as text, preferring the authored form
    pub fn magnitude(&self) -> String {
        if self.raw_value.is_empty() {
            self.value.to_string()
        } else {
            self.raw_value.clone()
        }
    }

    /// Whether the number was written with a fractional part
    pub fn is_fractional(&self) -> bool {
        if self.raw_value.is_empty() {
            self.value.fract() != 0.0
        } else {
            self.raw_value.contains('.')
        }
    }
}

/// Quote style of a string token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quote {
    Single,
    #[default]
    Double,
}

impl Quote {
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringValue {
    pub value: String,
    #[serde(default)]
    pub quote: Quote,
}

impl StringValue {
    /// The string wrapped in its original quotes
    pub fn quoted(&self) -> String {
        let quote = self.quote.as_char();
        format!("{}{}{}", quote, self.value, quote)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<CssValue>,
}

/// Placeholder for interactive completion: `${index:name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub index: usize,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_fractional_uses_authored_text() {
        assert!(!NumberValue::new(10.0, "").is_fractional());
        assert!(NumberValue::new(1.5, "").is_fractional());
        assert!(NumberValue::from_raw("1.0", "").unwrap().is_fractional());
        assert_eq!(NumberValue::from_raw(".5", "em").unwrap().magnitude(), ".5");
        assert!(NumberValue::from_raw("abc", "").is_none());
    }

    #[test]
    fn test_has_field_looks_into_function_arguments() {
        let call = Value::function("rgba", vec![CssValue::single(Value::field(1, "0"))]);
        assert!(call.has_field());
        assert!(CssValue::new(vec![Value::literal("a"), call]).has_field());
        assert!(!Value::function("calc", vec![CssValue::single(Value::literal("a"))]).has_field());
    }

    #[test]
    fn test_string_quoted() {
        let single = StringValue { value: "a b".to_string(), quote: Quote::Single };
        assert_eq!(single.quoted(), "'a b'");
        let double = StringValue { value: "x".to_string(), quote: Quote::Double };
        assert_eq!(double.quoted(), "\"x\"");
    }

    #[test]
    fn test_tree_json_shape() {
        let json = r#"[{"name": "p", "value": [[{"type": "number", "value": {"value": 10, "unit": ""}}]]}]"#;
        let tree: CssAbbreviation = serde_json::from_str(json).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name.as_deref(), Some("p"));
        match &tree[0].value[0].value[0] {
            Value::Number(number) => {
                assert_eq!(number.value, 10.0);
                assert_eq!(number.unit, "");
                assert_eq!(number.magnitude(), "10");
            }
            other => panic!("Expected number, got {:?}", other),
        }
    }
}
