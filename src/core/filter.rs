//! Per-group display filtering. Pure and never persisted.

use crate::models::{Item, Priority};

#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring of the item name.
    pub search: Option<String>,
    /// Exact priority match.
    pub priority: Option<Priority>,
}

impl ItemFilter {
    pub fn new(search: Option<String>, priority: Option<Priority>) -> Self {
        Self { search, priority }
    }

    pub fn matches(&self, item: &Item) -> bool {
        let by_name = match &self.search {
            Some(needle) if !needle.trim().is_empty() => item
                .name
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            _ => true,
        };
        let by_priority = self.priority.is_none_or(|p| item.priority == p);
        by_name && by_priority
    }

    /// Matching items, stably sorted by priority rank.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut out: Vec<&Item> = items.iter().filter(|i| self.matches(i)).collect();
        out.sort_by_key(|i| i.priority.rank());
        out
    }

    pub fn is_active(&self) -> bool {
        self.priority.is_some() || self.search.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}
