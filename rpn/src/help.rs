// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

// H E L P

pub struct HelpItem {
    brief: &'static str,
    description: &'static str,
}

impl HelpItem {
    pub fn brief(&self) -> &str {
        self.brief
    }

    pub fn description(&self) -> &str {
        self.description
    }
}

const fn item(brief: &'static str, description: &'static str) -> HelpItem {
    HelpItem { brief, description }
}

pub const HELP_ITEMS: &[HelpItem] = &[
    item("+, -, *, /, **, =", "The basic math operators."),
    item(
        "%, ^, &, |",
        "Modulo and bitwise operators; operands truncate to integers.",
    ),
    item("dup", "Duplicates the topmost value of the stack."),
    item("pop", "Removes the topmost value of the stack."),
    item("swap", "Swaps the top two values of the stack."),
    item("sqrt", "Replaces the topmost value with its square root."),
    item("pushh", "Pushes a copy of the current stack onto the history."),
    item("poph", "Discards the current stack, revealing the one beneath."),
    item("unset <name>", "Removes a previously set variable."),
    item("ps, psd", "Prints the stack (plain / in detail)."),
    item("ph, phd", "Prints the history (plain / in detail)."),
    item("pv, pvd", "Prints the variables (plain / in detail)."),
    item("help", "Prints this list."),
    item("x", "Exits the calculator."),
];

pub fn render(items: &[HelpItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str("    ");
        out.push_str(item.brief());
        out.push_str("\n        ");
        out.push_str(item.description());
        out.push('\n');
    }
    out
}
