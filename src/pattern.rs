//! Turns a typed URL into a reusable matching pattern.
//!
//! The form runs [`to_pattern`] over the whole URL input after every
//! keystroke and stores the result as the record's `url`. Records that are
//! already in the store are never re-transformed.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Regex metacharacters escaped in the first pass. `/` is handled last.
const SPECIAL: &[char] = &['.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\'];

/// A digit run that is not glued to a word character on either side, so
/// `/users/123` and `:8080` match but `v2` does not.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+\b").expect("digit-run regex is valid"));

const DIGIT_WILDCARD: &str = r"\d+";

pub fn to_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        if SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    DIGIT_RUN
        .replace_all(&escaped, NoExpand(DIGIT_WILDCARD))
        .replace('/', "\\/")
}
