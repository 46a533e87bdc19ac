// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

//! Splits an input line into tokens and classifies numeric literals.

use crate::value::Value;

/// The default delimiter set. Runs of delimiters never produce empty tokens.
pub const DELIMITERS: &[char] = &[' ', '\t', '\n'];

pub fn split(input: &str) -> Vec<&str> {
    split_with(input, DELIMITERS)
}

pub fn split_with<'a>(input: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    input
        .split(delimiters)
        .filter(|token| !token.is_empty())
        .collect()
}

/// True if the token parses fully as a signed decimal number: an optional
/// leading `-`, ASCII digits, at most one `.`. A lone `.` or `-` is not
/// numeric, and neither is anything with a second `.`.
pub fn is_number(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for char in digits.chars() {
        match char {
            c if c.is_ascii_digit() => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

pub fn parse_number(token: &str) -> Option<Value> {
    if is_number(token) {
        token.parse().ok()
    } else {
        None
    }
}
