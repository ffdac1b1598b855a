//! Stylesheet resolver constants
//!
//! Names the resolver rewrites to, and the default option values used when a
//! configuration does not override them.

/// Abbreviation for a linear gradient, usable both as a property and as a function name
pub const GRADIENT_SHORTHAND: &str = "lg";
/// Function the gradient shorthand expands to
pub const GRADIENT_FUNCTION: &str = "linear-gradient";
/// Property assigned to a bare gradient shorthand
pub const GRADIENT_PROPERTY: &str = "background-image";

/// Default unit for whole numbers without a unit
pub const DEFAULT_INT_UNIT: &str = "px";
/// Default unit for fractional numbers without a unit
pub const DEFAULT_FLOAT_UNIT: &str = "em";

/// Default short unit aliases
pub const DEFAULT_UNIT_ALIASES: &[(&str, &str)] = &[
    ("e", "em"),
    ("p", "%"),
    ("x", "ex"),
    ("r", "rem"),
];

/// Properties whose numbers never get a unit
pub const DEFAULT_UNITLESS_PROPERTIES: &[&str] = &[
    "z-index",
    "line-height",
    "opacity",
    "font-weight",
    "zoom",
    "flex",
    "flex-grow",
    "flex-shrink",
];

/// Keywords valid for any property
pub const DEFAULT_KEYWORDS: &[&str] = &["auto", "inherit", "unset", "none"];

/// First index handed out when wrapping default values in fields
pub const FIRST_FIELD_INDEX: usize = 1;
