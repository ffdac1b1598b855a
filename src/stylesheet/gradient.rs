//! Linear gradient shorthand
//!
//! `lg` expands to `linear-gradient(...)`, either as a property name
//! (`lg` → `background-image: linear-gradient(${0})`) or as a function call in
//! the value (`lg(to right, red, blue)`).

use crate::stylesheet::abbreviation::{CssProperty, CssValue, FunctionCall, Value};
use crate::stylesheet::constants::{GRADIENT_FUNCTION, GRADIENT_PROPERTY, GRADIENT_SHORTHAND};

/// Rewrite a gradient shorthand in `node`. Returns true when the node was rewritten.
pub fn resolve_gradient(node: &mut CssProperty, has_context: bool) -> bool {
    let shorthand_call = match node.value.as_slice() {
        [group] => match group.value.as_slice() {
            [Value::Function(call)] if call.name == GRADIENT_SHORTHAND => Some(call),
            _ => None,
        },
        _ => None,
    };

    if shorthand_call.is_none() && node.name.as_deref() != Some(GRADIENT_SHORTHAND) {
        return false;
    }

    let arguments = match shorthand_call {
        Some(call) => call.arguments.clone(),
        None => vec![CssValue::single(Value::field(0, ""))],
    };
    let gradient = Value::Function(FunctionCall {
        name: GRADIENT_FUNCTION.to_string(),
        arguments,
    });

    if !has_context {
        node.name = Some(GRADIENT_PROPERTY.to_string());
    }
    node.value = vec![CssValue::single(gradient)];
    log::debug!("Expanded gradient shorthand into {}", GRADIENT_FUNCTION);
    true
}
