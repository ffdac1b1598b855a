//! CSS Abbreviation Resolver Library
//!
//! This library expands tokenized stylesheet abbreviations into full CSS
//! declarations using a dictionary of property and value snippets.

pub mod logging;
pub mod stylesheet;
#[cfg(test)]
pub mod test_utils;
