//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        let header = header.into();
        let width = UnicodeWidthStr::width(header.as_str());
        Self { header, width }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

/// Remove ANSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Visible width of `s` in terminal columns.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = col.width.saturating_sub(visible_width(cell));
                out.push_str(cell);
                out.push_str(&" ".repeat(pad));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
