//! Unit resolution for numbers
//!
//! Expands unit aliases (`10p` → `10%`) and picks a default unit for numbers
//! written without one, unless the property is unitless or the number is zero.

use crate::stylesheet::abbreviation::{CssProperty, Value};
use crate::stylesheet::config::ResolverConfig;

/// Resolve units of the numbers at the top level of the node's value.
///
/// `property` is the property owning the value, used for the unitless check.
pub fn resolve_numeric_value(node: &mut CssProperty, property: Option<&str>, config: &ResolverConfig) {
    let unitless = property.is_some_and(|name| config.is_unitless(name));

    for token in node.value.iter_mut().flat_map(|group| group.value.iter_mut()) {
        let Value::Number(number) = token else {
            continue;
        };

        if !number.unit.is_empty() {
            if let Some(unit) = config.unit_aliases.get(&number.unit) {
                number.unit = unit.clone();
            }
        } else if number.value != 0.0 && !unitless {
            number.unit = if number.is_fractional() {
                config.float_unit.clone()
            } else {
                config.int_unit.clone()
            };
        }
    }
}
