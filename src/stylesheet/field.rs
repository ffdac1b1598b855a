//! Placeholder field wrapping
//!
//! Turns a default value into editable fields: every color, literal, number
//! and string becomes `${n:label}`, and function calls become a field for the
//! name followed by their wrapped arguments. One `FieldIndex` is threaded
//! through a whole wrapping pass so indices are unique and ascending.

use crate::stylesheet::abbreviation::{CssValue, Value};
use crate::stylesheet::color::ColorFormatter;
use crate::stylesheet::constants::FIRST_FIELD_INDEX;

/// Running field index for one wrapping pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIndex(usize);

impl FieldIndex {
    pub fn new(base: usize) -> Self {
        Self(base)
    }

    /// Index for the next field
    pub fn allocate(&mut self) -> usize {
        let index = self.0;
        self.0 += 1;
        index
    }

    /// Index the next field will get
    pub fn peek(&self) -> usize {
        self.0
    }
}

impl Default for FieldIndex {
    fn default() -> Self {
        Self(FIRST_FIELD_INDEX)
    }
}

pub struct FieldWrapper<'a> {
    color_formatter: &'a dyn ColorFormatter,
    short_hex: bool,
}

impl<'a> FieldWrapper<'a> {
    pub fn new(color_formatter: &'a dyn ColorFormatter, short_hex: bool) -> Self {
        Self {
            color_formatter,
            short_hex,
        }
    }

    /// Wrap every token of every group, sharing `index` across all of them
    pub fn wrap_groups(&self, groups: &[CssValue], index: &mut FieldIndex) -> Vec<CssValue> {
        groups.iter().map(|group| self.wrap_group(group, index)).collect()
    }

    pub fn wrap_group(&self, group: &CssValue, index: &mut FieldIndex) -> CssValue {
        let mut value = Vec::with_capacity(group.value.len());
        for token in &group.value {
            value.extend(self.wrap_token(token, index));
        }
        CssValue::new(value)
    }

    /// Wrap a single token. Function calls expand into several tokens
    pub fn wrap_token(&self, token: &Value, index: &mut FieldIndex) -> Vec<Value> {
        match token {
            Value::Color(color) => {
                let label = self.color_formatter.format(color, self.short_hex);
                vec![Value::field(index.allocate(), &label)]
            }
            Value::Literal(text) => vec![Value::field(index.allocate(), text)],
            Value::Number(number) => {
                let label = format!("{}{}", number.magnitude(), number.unit);
                vec![Value::field(index.allocate(), &label)]
            }
            Value::String(string) => vec![Value::field(index.allocate(), &string.quoted())],
            Value::Function(call) => {
                let mut value = vec![Value::field(index.allocate(), &call.name), Value::literal("(")];
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        value.push(Value::literal(", "));
                    }
                    value.extend(self.wrap_group(argument, index).value);
                }
                value.push(Value::literal(")"));
                value
            }
            Value::Field(_) => vec![token.clone()],
        }
    }
}
