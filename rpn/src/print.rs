// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

//! The output seam between the calculator and its host. Commands decide
//! what to print; the host decides where it goes.

use crate::history::History;
use crate::stack::Stack;
use crate::value::Value;
use crate::variables::Variables;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Shortest natural representation, e.g. `5`.
    Plain,
    /// Fixed-point decimal notation, e.g. `5.000000`.
    Detailed,
}

pub fn format_value(value: Value, format: Format) -> String {
    match format {
        Format::Plain => format!("{value}"),
        Format::Detailed => format!("{value:.6}"),
    }
}

pub fn format_stack(stack: &Stack, format: Format) -> String {
    let items: Vec<String> = stack
        .iter()
        .map(|value| format_value(*value, format))
        .collect();
    format!("[ {} ]", items.join(", "))
}

pub fn format_history(history: &History, format: Format) -> String {
    let levels: Vec<String> = history
        .iter()
        .map(|stack| format_stack(stack, format))
        .collect();
    format!("[ {} ]", levels.join(", "))
}

pub fn format_variables(variables: &Variables, format: Format) -> String {
    let entries: Vec<String> = variables
        .iter()
        .map(|(name, value)| format!("{name} = {}", format_value(value, format)))
        .collect();
    format!("[ {} ]", entries.join(", "))
}

pub trait Printer {
    fn print(&mut self, text: &str);
}

/// Prints to stdout; the shell's printer.
#[derive(Debug, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print(&mut self, text: &str) {
        print!("{text}");
    }
}

/// Collects output in memory for inspection. Clones share the buffer, so a
/// host can keep one handle and give the other to the calculator.
#[derive(Debug, Clone, Default)]
pub struct BufferPrinter {
    buffer: Rc<RefCell<String>>,
}

impl BufferPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl Printer for BufferPrinter {
    fn print(&mut self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }
}
