//! Stylesheet abbreviation resolution
//!
//! Expands abbreviation trees like `poa`, `m10` or `lg(red, blue)` into full
//! CSS declarations using:
//! - a snippet dictionary for property names, default values and keywords
//! - fuzzy subsequence matching to pick snippets and keywords

pub mod abbreviation;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod gradient;
pub mod keyword;
pub mod matcher;
pub mod numeric;
pub mod request;
pub mod resolver;
pub mod score;
pub mod snippets;
pub mod value_resolver;

#[cfg(test)]
mod matcher_tests;
