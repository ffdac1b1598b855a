//! Test utilities shared across the codebase

use crate::stylesheet::abbreviation::{CssProperty, CssValue, NumberValue, Value};
use crate::stylesheet::color::ColorValue;
use crate::stylesheet::snippets::{SnippetDictionary, SnippetDictionaryBuilder};

/// Group of literal tokens
pub fn literals(words: &[&str]) -> CssValue {
    CssValue::new(words.iter().map(|word| Value::literal(word)).collect())
}

pub fn color(hex: &str) -> Value {
    Value::Color(ColorValue::from_hex(hex).expect("valid hex color"))
}

/// Number token keeping its authored text, e.g. `.5`
pub fn raw_number(raw: &str, unit: &str) -> Value {
    Value::Number(NumberValue::from_raw(raw, unit).expect("valid number"))
}

/// `rgba(0, 0, 0, .5)`
pub fn rgba_template() -> Value {
    Value::function(
        "rgba",
        vec![
            CssValue::single(Value::number(0.0, "")),
            CssValue::single(Value::number(0.0, "")),
            CssValue::single(Value::number(0.0, "")),
            CssValue::single(raw_number(".5", "")),
        ],
    )
}

/// Node with a name and a single value group
pub fn node(name: &str, tokens: Vec<Value>) -> CssProperty {
    CssProperty::with_value(name, vec![CssValue::new(tokens)])
}

/// A small dictionary shaped like common stylesheet snippets
pub fn sample_snippets() -> SnippetDictionary {
    SnippetDictionaryBuilder::new()
        .raw("!", "!important")
        .property_with_keywords("pos", "position", &["relative", "absolute", "fixed", "static"])
        .property("m", "margin")
        .property("p", "padding")
        .property("lh", "line-height")
        .property("zi", "z-index")
        .property_with_values(
            "bd",
            "border",
            vec![vec![CssValue::new(vec![
                Value::field(1, "1px"),
                Value::field(2, "solid"),
                Value::field(3, "#000"),
            ])]],
        )
        .property_with_keywords(
            "bds",
            "border-style",
            &["none", "hidden", "dotted", "dashed", "solid", "double"],
        )
        .property_with_values("bgc", "background-color", vec![vec![CssValue::single(color("#fff"))]])
        .property_with_values(
            "c",
            "color",
            vec![
                vec![CssValue::single(color("#000"))],
                vec![CssValue::single(rgba_template())],
            ],
        )
        .property_with_values(
            "trf",
            "transform",
            vec![vec![CssValue::single(Value::function(
                "scale",
                vec![CssValue::single(Value::number(1.0, ""))],
            ))]],
        )
        .build()
}
