// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use crate::value::{truncate, Value};
use smol_str::SmolStr;
use std::collections::BTreeMap;

// O P E R A T O R S

/// A binary operator. `a` is the value pushed earlier, `b` the one pushed
/// later: for `3 5 -` the evaluator computes `op(3.0, 5.0)`.
pub type Operator = fn(Value, Value) -> Value;

fn add(a: Value, b: Value) -> Value {
    a + b
}

fn subtract(a: Value, b: Value) -> Value {
    a - b
}

fn multiply(a: Value, b: Value) -> Value {
    a * b
}

// Division by zero follows IEEE semantics: infinity or NaN, never an error.
fn divide(a: Value, b: Value) -> Value {
    a / b
}

fn power(a: Value, b: Value) -> Value {
    a.powf(b)
}

fn equals(a: Value, b: Value) -> Value {
    if a == b {
        1.0
    } else {
        0.0
    }
}

// The modulo and bitwise operators truncate to integers, so they lose data.
// A zero divisor after truncation degrades to NaN, matching the permissive
// float semantics of `/`.
fn modulo(a: Value, b: Value) -> Value {
    truncate(a)
        .checked_rem(truncate(b))
        .map_or(Value::NAN, |r| r as Value)
}

fn bit_xor(a: Value, b: Value) -> Value {
    (truncate(a) ^ truncate(b)) as Value
}

fn bit_and(a: Value, b: Value) -> Value {
    (truncate(a) & truncate(b)) as Value
}

fn bit_or(a: Value, b: Value) -> Value {
    (truncate(a) | truncate(b)) as Value
}

const DEFAULT_OPERATORS: &[(&str, Operator)] = &[
    ("+", add),
    ("-", subtract),
    ("*", multiply),
    ("/", divide),
    ("**", power),
    ("=", equals),
    ("%", modulo),
    ("^", bit_xor),
    ("&", bit_and),
    ("|", bit_or),
];

/// The operator registry: symbol to pure binary function. Built once at
/// calculator construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Operators {
    table: BTreeMap<SmolStr, Operator>,
}

impl Default for Operators {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Operators {
    pub fn with_defaults() -> Self {
        let table = DEFAULT_OPERATORS
            .iter()
            .map(|(symbol, op)| (SmolStr::new(symbol), *op))
            .collect();
        Self { table }
    }

    pub fn get(&self, symbol: &str) -> Option<Operator> {
        self.table.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.table.contains_key(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(symbol: &str, a: Value, b: Value) -> Value {
        let operators = Operators::with_defaults();
        let op = operators.get(symbol).unwrap();
        op(a, b)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply("+", 3.0, 5.0), 8.0);
        assert_eq!(apply("-", 3.0, 5.0), -2.0);
        assert_eq!(apply("*", 3.0, 5.0), 15.0);
        assert_eq!(apply("/", 3.0, 5.0), 0.6);
        assert_eq!(apply("**", 2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(apply("/", 1.0, 0.0), Value::INFINITY);
        assert!(apply("/", 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_equality() {
        assert_eq!(apply("=", 5.0, 5.0), 1.0);
        assert_eq!(apply("=", 5.0, 3.0), 0.0);
    }

    #[test]
    fn test_modulo_truncates() {
        assert_eq!(apply("%", 7.9, 3.0), 1.0);
        assert_eq!(apply("%", -7.0, 3.0), -1.0);
        assert!(apply("%", 5.0, 0.2).is_nan());
    }

    #[test]
    fn test_bitwise_truncates() {
        assert_eq!(apply("^", 6.0, 3.0), 5.0);
        assert_eq!(apply("&", 6.0, 3.0), 2.0);
        assert_eq!(apply("|", 6.0, 3.0), 7.0);
        assert_eq!(apply("&", 6.9, 3.9), 2.0);
    }

    #[test]
    fn test_unknown_symbol() {
        let operators = Operators::with_defaults();
        assert!(operators.get("//").is_none());
        assert!(!operators.contains("sqrt"));
    }
}
