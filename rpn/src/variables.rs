// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use crate::value::Value;
use smol_str::SmolStr;
use std::collections::BTreeMap;
use std::f64::consts;

// V A R I A B L E S

/// The variable table: name to value, seeded with built-in constants and
/// mutable by assignment and `unset` thereafter. Iteration order is sorted
/// by name so the print commands are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    table: BTreeMap<SmolStr, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut variables = Self::new();

        // Mathematical constants.
        variables.set("PI", consts::PI);
        variables.set("E", consts::E);

        // Byte sizes.
        variables.set("KB", 1000.0);
        variables.set("MB", 1000.0 * 1000.0);
        variables.set("GB", 1000.0 * 1000.0 * 1000.0);
        variables.set("KiB", 1024.0);
        variables.set("MiB", 1024.0 * 1024.0);
        variables.set("GiB", 1024.0 * 1024.0 * 1024.0);

        // Time units, in seconds.
        variables.set("MINUTES", 60.0);
        variables.set("HOURS", 60.0 * 60.0);

        variables
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.table.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.table.insert(SmolStr::new(name), value);
    }

    pub fn unset(&mut self, name: &str) {
        self.table.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.table.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
