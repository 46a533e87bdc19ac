// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use crate::stack::Stack;
use crate::value::{self, Value};

// H I S T O R Y

/// An ordered sequence of stacks. The current stack is the most recent
/// level; the levels beneath it are saved snapshots.
///
/// The history is never empty once constructed: a fresh stack is created up
/// front and [`History::pop_level`] refuses to remove the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    levels: Vec<Stack>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            levels: vec![Stack::new()],
        }
    }

    pub fn has_current(&self) -> bool {
        !self.levels.is_empty()
    }

    pub fn current(&self) -> Option<&Stack> {
        self.levels.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Stack> {
        self.levels.last_mut()
    }

    /// Size of the current stack, or 0 if there is none.
    pub fn stack_size(&self) -> usize {
        self.current().map_or(0, Stack::len)
    }

    pub fn push(&mut self, value: Value) {
        if let Some(stack) = self.current_mut() {
            stack.push(value);
        }
    }

    pub fn pop(&mut self) -> Value {
        self.current_mut().map_or(value::DEFAULT, Stack::pop)
    }

    pub fn peek(&self) -> Value {
        self.current().map_or(value::DEFAULT, Stack::peek)
    }

    /// Duplicates the current stack and makes the copy the new current
    /// level; the old one becomes a snapshot beneath it.
    pub fn push_level(&mut self) {
        if let Some(copy) = self.current().cloned() {
            self.levels.push(copy);
        }
    }

    /// Discards the current stack and reveals the snapshot beneath, unless
    /// it is the only level left.
    pub fn pop_level(&mut self) {
        if self.levels.len() > 1 {
            self.levels.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates levels from the current stack down to the oldest snapshot.
    pub fn iter(&self) -> impl Iterator<Item = &Stack> {
        self.levels.iter().rev()
    }
}
