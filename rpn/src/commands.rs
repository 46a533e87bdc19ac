// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use crate::eval::Calculator;
use crate::help;
use crate::print::{self, Format};
use smol_str::SmolStr;
use std::collections::BTreeMap;

// C O M M A N D S

/// A command mutates the calculator as a whole: stacks, history, variables
/// or running status. Its arguments are the trailing tokens the evaluator
/// collected for it, exactly `arity` of them.
pub type CommandFn = fn(&mut Calculator, &[SmolStr]);

#[derive(Clone, Copy)]
pub struct Command {
    func: CommandFn,
    arity: usize,
}

impl Command {
    pub fn new(func: CommandFn, arity: usize) -> Self {
        Self { func, arity }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn perform(&self, calculator: &mut Calculator, args: &[SmolStr]) {
        (self.func)(calculator, args)
    }
}

fn dup(calculator: &mut Calculator, _args: &[SmolStr]) {
    if calculator.stack_size() > 0 {
        let top = calculator.peek();
        calculator.push(top);
    }
}

fn pop(calculator: &mut Calculator, _args: &[SmolStr]) {
    calculator.pop();
}

fn swap(calculator: &mut Calculator, _args: &[SmolStr]) {
    if calculator.stack_size() >= 2 {
        let b = calculator.pop();
        let a = calculator.pop();
        calculator.push(b);
        calculator.push(a);
    }
}

fn sqrt(calculator: &mut Calculator, _args: &[SmolStr]) {
    if calculator.stack_size() > 0 {
        let top = calculator.pop();
        calculator.push(top.sqrt());
    }
}

fn push_history(calculator: &mut Calculator, _args: &[SmolStr]) {
    calculator.history_mut().push_level();
}

fn pop_history(calculator: &mut Calculator, _args: &[SmolStr]) {
    calculator.history_mut().pop_level();
}

fn unset(calculator: &mut Calculator, args: &[SmolStr]) {
    if let Some(name) = args.first() {
        calculator.variables_mut().unset(name);
    }
}

fn exit(calculator: &mut Calculator, _args: &[SmolStr]) {
    calculator.stop();
}

fn print_stack(calculator: &mut Calculator, format: Format) {
    let text = calculator
        .history()
        .current()
        .map(|stack| format!("{}\n", print::format_stack(stack, format)));
    if let Some(text) = text {
        calculator.print(&text);
    }
}

fn print_stack_plain(calculator: &mut Calculator, _args: &[SmolStr]) {
    print_stack(calculator, Format::Plain);
}

fn print_stack_detailed(calculator: &mut Calculator, _args: &[SmolStr]) {
    print_stack(calculator, Format::Detailed);
}

fn print_history(calculator: &mut Calculator, format: Format) {
    let text = format!("{}\n", print::format_history(calculator.history(), format));
    calculator.print(&text);
}

fn print_history_plain(calculator: &mut Calculator, _args: &[SmolStr]) {
    print_history(calculator, Format::Plain);
}

fn print_history_detailed(calculator: &mut Calculator, _args: &[SmolStr]) {
    print_history(calculator, Format::Detailed);
}

fn print_variables(calculator: &mut Calculator, format: Format) {
    let text = format!(
        "{}\n",
        print::format_variables(calculator.variables(), format)
    );
    calculator.print(&text);
}

fn print_variables_plain(calculator: &mut Calculator, _args: &[SmolStr]) {
    print_variables(calculator, Format::Plain);
}

fn print_variables_detailed(calculator: &mut Calculator, _args: &[SmolStr]) {
    print_variables(calculator, Format::Detailed);
}

fn print_help(calculator: &mut Calculator, _args: &[SmolStr]) {
    let text = help::render(help::HELP_ITEMS);
    calculator.print(&text);
}

const DEFAULT_COMMANDS: &[(&str, usize, CommandFn)] = &[
    ("dup", 0, dup),
    ("pop", 0, pop),
    ("swap", 0, swap),
    ("sqrt", 0, sqrt),
    ("pushh", 0, push_history),
    ("poph", 0, pop_history),
    ("unset", 1, unset),
    ("x", 0, exit),
    ("ps", 0, print_stack_plain),
    ("psd", 0, print_stack_detailed),
    ("ph", 0, print_history_plain),
    ("phd", 0, print_history_detailed),
    ("pv", 0, print_variables_plain),
    ("pvd", 0, print_variables_detailed),
    ("help", 0, print_help),
];

/// The command registry: name to descriptor. Built once at calculator
/// construction and immutable afterwards.
#[derive(Clone)]
pub struct Commands {
    table: BTreeMap<SmolStr, Command>,
}

impl Default for Commands {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Commands {
    pub fn with_defaults() -> Self {
        let table = DEFAULT_COMMANDS
            .iter()
            .map(|(name, arity, func)| (SmolStr::new(name), Command::new(*func, *arity)))
            .collect();
        Self { table }
    }

    pub fn get(&self, name: &str) -> Option<Command> {
        self.table.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}
