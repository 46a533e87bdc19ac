// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

//! The numeric type shared by the stack, the variable table and the
//! operators. There is no integer/float distinction at the surface; the
//! modulo and bitwise operators truncate internally and convert back.

pub type Value = f64;

/// Default for guarded reads: peeking or popping an empty stack yields this
/// instead of failing.
pub const DEFAULT: Value = 0.0;

/// Truncation used by the modulo and bitwise operators.
pub fn truncate(value: Value) -> i64 {
    value as i64
}
