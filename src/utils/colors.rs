//! ANSI color helper utilities for terminal output.

use crate::models::{Priority, Status};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// done → green, skip → yellow, none → reset
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Done => GREEN,
        Status::Skip => YELLOW,
        Status::None => RESET,
    }
}

pub fn color_for_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => CYAN,
    }
}

/// Grey for empty values, plain otherwise.
///
/// Example:
/// `colorize_optional("")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
