use super::priority::Priority;
use serde::{Deserialize, Serialize};

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub link: String,
    pub priority: Priority,
}

/// Item fields as typed by the user, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub link: String,
    pub priority: Priority,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, link: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            priority,
        }
    }

    /// Trimmed copy, or `None` when the name is blank.
    pub fn normalized(&self) -> Option<ItemDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(ItemDraft {
            name: name.to_string(),
            link: self.link.trim().to_string(),
            priority: self.priority,
        })
    }

    pub fn into_item(self, id: String) -> Item {
        Item {
            id,
            name: self.name,
            link: self.link,
            priority: self.priority,
        }
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            link: item.link.clone(),
            priority: item.priority,
        }
    }
}
