// RebelDB™ © 2025 Huly Labs • https://hulylabs.com • SPDX-License-Identifier: MIT

pub mod commands;
pub mod eval;
pub mod help;
pub mod history;
pub mod operators;
pub mod print;
pub mod stack;
pub mod tokens;
pub mod value;
pub mod variables;
