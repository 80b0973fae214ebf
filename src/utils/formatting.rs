//! Formatting utilities used for CLI outputs.

use super::colors::{RESET, color_for_priority};
use crate::i18n::Texts;
use crate::models::Priority;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (accents and emoji aware).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut `s` to at most `width` columns, ending with "…" when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// Colored, localized priority label, e.g. "[ALTO]".
pub fn priority_badge(texts: &Texts, priority: Priority) -> String {
    format!(
        "{}[{}]{}",
        color_for_priority(priority),
        texts.priority(priority),
        RESET
    )
}
