//! Identifier casing helpers.

use std::sync::LazyLock;

use regex::Regex;

static UPPER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+[a-z0-9]+").expect("valid upper word pattern"));

/// Lower-case exactly the first character (e.g., "OrderLine" -> "orderLine").
///
/// Empty and whitespace-only input is returned unchanged.
pub fn to_lower_camel(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Split an identifier into its capitalized words joined by dashes
/// (e.g., "OrderLineDTO2" -> "Order-Line-DTO2").
///
/// Input without any capitalized word is returned unchanged.
pub fn to_dash_words(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    let words: Vec<&str> = UPPER_WORD.find_iter(s).map(|m| m.as_str()).collect();
    if words.is_empty() {
        s.to_string()
    } else {
        words.join("-")
    }
}
