// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use crate::value::{self, Value};

// S T A C K

/// A single value stack. All access is guarded: popping or peeking an empty
/// stack returns the default value instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    items: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Value {
        self.items.pop().unwrap_or(value::DEFAULT)
    }

    pub fn peek(&self) -> Value {
        self.items.last().copied().unwrap_or(value::DEFAULT)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the top of the stack downwards, the order the print
    /// commands display.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_round_trip() {
        let mut stack = Stack::new();
        stack.push(42.5);
        assert_eq!(stack.pop(), 42.5);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_guarded_empty_access() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), 0.0);
        assert_eq!(stack.peek(), 0.0);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_peek_leaves_stack_intact() {
        let mut stack = Stack::new();
        stack.push(1.0);
        stack.push(2.0);
        assert_eq!(stack.peek(), 2.0);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_iter_top_first() {
        let mut stack = Stack::new();
        stack.push(1.0);
        stack.push(2.0);
        stack.push(3.0);
        let values: Vec<Value> = stack.iter().copied().collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);
    }
}
