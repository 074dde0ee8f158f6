//! Escaping rules for the Janet-style s-expression output

pub mod constants;
mod keywords;
mod numerals;
mod strings;

pub use keywords::{escape_keyword, is_simple_keyword};
pub use numerals::{Numeral, classify_numeral};
pub use strings::escape_string;

#[cfg(test)]
mod tests;
