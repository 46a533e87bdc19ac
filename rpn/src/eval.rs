// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

use crate::commands::Commands;
use crate::history::History;
use crate::operators::Operators;
use crate::print::{Printer, StdoutPrinter};
use crate::tokens;
use crate::value::Value;
use crate::variables::Variables;
use smol_str::SmolStr;
use thiserror::Error;

/// Non-fatal evaluation diagnostics. Evaluation never halts and never
/// errors on malformed input; dropped tokens are reported as tracing debug
/// events and nothing else happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Diag {
    #[error("unknown token dropped, stack is empty: {0}")]
    UnknownToken(SmolStr),
    #[error("operator {0} skipped: stack holds {1} of 2 operands")]
    NotEnoughOperands(SmolStr, usize),
    #[error("command {0} skipped: expected {1} arguments, got {2}")]
    NotEnoughArgs(SmolStr, usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Stop,
}

// C A L C U L A T O R

/// The aggregate root: owns the stack history, the variable table, the
/// command and operator registries and the running status. One instance per
/// session; `eval` is the only state transition.
pub struct Calculator {
    commands: Commands,
    history: History,
    operators: Operators,
    status: Status,
    variables: Variables,
    printer: Box<dyn Printer>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_printer(Box::new(StdoutPrinter))
    }

    pub fn with_printer(printer: Box<dyn Printer>) -> Self {
        Self {
            commands: Commands::with_defaults(),
            history: History::new(),
            operators: Operators::with_defaults(),
            status: Status::Continue,
            variables: Variables::with_defaults(),
            printer,
        }
    }

    /// Evaluates one line of input. Tokens are processed left to right;
    /// evaluation stops early once the `x` command flips the status, so
    /// nothing after an exit on the same line runs.
    pub fn eval(&mut self, input: &str) {
        if !self.history.has_current() {
            return;
        }
        let tokens = tokens::split(input);
        let mut tokens = tokens.iter();
        while self.status == Status::Continue {
            let Some(&token) = tokens.next() else { break };
            self.eval_token(token, &mut tokens);
        }
    }

    /// Classifies one token. The precedence is load-bearing: numeric
    /// literal, then command, then operator, then variable reference, then
    /// variable definition.
    fn eval_token(&mut self, token: &str, rest: &mut std::slice::Iter<'_, &str>) {
        if let Some(value) = tokens::parse_number(token) {
            self.history.push(value);
            return;
        }

        if let Some(command) = self.commands.get(token) {
            let args: Vec<SmolStr> = rest
                .by_ref()
                .take(command.arity())
                .map(|&arg| SmolStr::new(arg))
                .collect();
            if args.len() == command.arity() {
                command.perform(self, &args);
            } else {
                self.report(Diag::NotEnoughArgs(
                    SmolStr::new(token),
                    command.arity(),
                    args.len(),
                ));
            }
            return;
        }

        // An operator without two operands is dropped here; it does not
        // fall through to the variable rules.
        if let Some(op) = self.operators.get(token) {
            if self.history.stack_size() >= 2 {
                let b = self.history.pop();
                let a = self.history.pop();
                self.history.push(op(a, b));
            } else {
                self.report(Diag::NotEnoughOperands(
                    SmolStr::new(token),
                    self.history.stack_size(),
                ));
            }
            return;
        }

        if let Some(value) = self.variables.get(token) {
            self.history.push(value);
            return;
        }

        if self.history.stack_size() > 0 {
            self.variables.set(token, self.history.peek());
        } else {
            self.report(Diag::UnknownToken(SmolStr::new(token)));
        }
    }

    fn report(&self, diag: Diag) {
        tracing::debug!("{diag}");
    }

    /// Top of the current stack, or 0 if it is empty. Never fails.
    pub fn peek(&self) -> Value {
        self.history.peek()
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Continue
    }

    pub fn stop(&mut self) {
        self.status = Status::Stop;
    }

    pub fn stack_size(&self) -> usize {
        self.history.stack_size()
    }

    pub fn push(&mut self, value: Value) {
        self.history.push(value);
    }

    pub fn pop(&mut self) -> Value {
        self.history.pop()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    pub fn print(&mut self, text: &str) {
        self.printer.print(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::BufferPrinter;

    fn stack_of(calculator: &Calculator) -> Vec<Value> {
        // bottom-first, the order things were pushed
        let mut values: Vec<Value> = calculator
            .history()
            .current()
            .map(|stack| stack.iter().copied().collect())
            .unwrap_or_default();
        values.reverse();
        values
    }

    #[test]
    fn test_push_literals() {
        let mut calculator = Calculator::new();
        calculator.eval("5 -5 5.2 -5.2");
        assert_eq!(stack_of(&calculator), vec![5.0, -5.0, 5.2, -5.2]);
    }

    #[test]
    fn test_operator_evaluation_order() {
        let mut calculator = Calculator::new();
        calculator.eval("3 5 -");
        assert_eq!(calculator.peek(), -2.0);
        assert_eq!(calculator.stack_size(), 1);
    }

    #[test]
    fn test_dup() {
        let mut calculator = Calculator::new();
        calculator.eval("5 dup");
        assert_eq!(stack_of(&calculator), vec![5.0, 5.0]);
        assert_eq!(calculator.peek(), 5.0);
    }

    #[test]
    fn test_swap() {
        let mut calculator = Calculator::new();
        calculator.eval("1 2 swap");
        assert_eq!(stack_of(&calculator), vec![2.0, 1.0]);
    }

    #[test]
    fn test_sqrt() {
        let mut calculator = Calculator::new();
        calculator.eval("9 sqrt");
        assert_eq!(calculator.peek(), 3.0);

        // sqrt of an empty stack is a no-op
        let mut calculator = Calculator::new();
        calculator.eval("sqrt");
        assert_eq!(calculator.stack_size(), 0);
    }

    #[test]
    fn test_history_isolation() {
        let mut calculator = Calculator::new();
        calculator.eval("5 pushh 3");
        assert_eq!(stack_of(&calculator), vec![5.0, 3.0]);
        calculator.eval("poph");
        assert_eq!(stack_of(&calculator), vec![5.0]);
    }

    #[test]
    fn test_poph_keeps_last_level() {
        let mut calculator = Calculator::new();
        calculator.eval("5 poph poph");
        assert_eq!(calculator.history().len(), 1);
        assert_eq!(calculator.peek(), 5.0);
    }

    #[test]
    fn test_variable_definition_fallback() {
        let mut calculator = Calculator::new();
        calculator.eval("5 foo");
        assert_eq!(calculator.variables().get("foo"), Some(5.0));
        assert_eq!(stack_of(&calculator), vec![5.0]);

        calculator.eval("foo");
        assert_eq!(stack_of(&calculator), vec![5.0, 5.0]);
    }

    #[test]
    fn test_variable_reference_wins_over_definition() {
        let mut calculator = Calculator::new();
        calculator.eval("3 PI");
        assert_eq!(calculator.peek(), std::f64::consts::PI);
        // PI was read, not redefined
        assert_eq!(calculator.variables().get("PI"), Some(std::f64::consts::PI));
    }

    #[test]
    fn test_no_variable_defined_on_empty_stack() {
        let mut calculator = Calculator::new();
        let before = calculator.variables().len();
        calculator.eval("bogus");
        assert_eq!(calculator.variables().len(), before);
        assert_eq!(calculator.stack_size(), 0);
    }

    #[test]
    fn test_insufficient_operands_are_dropped() {
        // "+" alone: no operands, nothing happens
        let mut calculator = Calculator::new();
        let before = calculator.variables().len();
        calculator.eval("+");
        assert_eq!(calculator.stack_size(), 0);
        assert_eq!(calculator.variables().len(), before);

        // one operand is still not enough; no "+" variable appears either
        calculator.eval("5 +");
        assert_eq!(stack_of(&calculator), vec![5.0]);
        assert!(!calculator.variables().contains("+"));
    }

    #[test]
    fn test_command_arity_gating() {
        let mut calculator = Calculator::new();
        calculator.eval("unset");
        assert!(calculator.variables().contains("PI"));

        calculator.eval("unset PI");
        assert!(!calculator.variables().contains("PI"));
    }

    #[test]
    fn test_command_args_are_consumed_from_the_line() {
        let mut calculator = Calculator::new();
        calculator.eval("unset E 3");
        assert!(!calculator.variables().contains("E"));
        // the argument token was consumed, the literal after it was not
        assert_eq!(stack_of(&calculator), vec![3.0]);
    }

    #[test]
    fn test_non_numeric_guard() {
        let mut calculator = Calculator::new();
        let before = calculator.variables().len();
        calculator.eval(". - 5.2.3");
        assert_eq!(calculator.stack_size(), 0);
        assert_eq!(calculator.variables().len(), before);
    }

    #[test]
    fn test_exit_truncates_the_line() {
        let mut calculator = Calculator::new();
        calculator.eval("x 5");
        assert!(!calculator.is_running());
        assert_eq!(calculator.stack_size(), 0);
    }

    #[test]
    fn test_delimiters() {
        let mut calculator = Calculator::new();
        calculator.eval("5\n3\t+");
        assert_eq!(calculator.peek(), 8.0);
    }

    #[test]
    fn test_print_stack() {
        let printer = BufferPrinter::new();
        let mut calculator = Calculator::with_printer(Box::new(printer.clone()));
        calculator.eval("5 3 ps");
        assert_eq!(printer.contents(), "[ 3, 5 ]\n");
    }

    #[test]
    fn test_print_stack_detailed() {
        let printer = BufferPrinter::new();
        let mut calculator = Calculator::with_printer(Box::new(printer.clone()));
        calculator.eval("5 psd");
        assert_eq!(printer.contents(), "[ 5.000000 ]\n");
    }

    #[test]
    fn test_print_history() {
        let printer = BufferPrinter::new();
        let mut calculator = Calculator::with_printer(Box::new(printer.clone()));
        calculator.eval("5 pushh 3 ph");
        assert_eq!(printer.contents(), "[ [ 3, 5 ], [ 5 ] ]\n");
    }

    #[test]
    fn test_print_variables() {
        let printer = BufferPrinter::new();
        let mut calculator = Calculator::with_printer(Box::new(printer.clone()));
        calculator.eval("pv");
        let output = printer.contents();
        assert!(output.contains("PI = 3.141592653589793"));
        assert!(output.contains("KiB = 1024"));
    }

    #[test]
    fn test_help_prints_something() {
        let printer = BufferPrinter::new();
        let mut calculator = Calculator::with_printer(Box::new(printer.clone()));
        calculator.eval("help");
        assert!(printer.contents().contains("pushh"));
    }

    #[test]
    fn test_session_stays_stopped() {
        let mut calculator = Calculator::new();
        calculator.eval("x");
        assert!(!calculator.is_running());
        calculator.eval("5");
        assert_eq!(calculator.stack_size(), 0);
    }
}
