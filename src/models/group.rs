use super::icon::IconType;
use super::item::Item;
use serde::{Deserialize, Serialize};

pub const PROGRAMS_ID: &str = "programs";
pub const DRIVERS_ID: &str = "drivers";
pub const EXTENSIONS_ID: &str = "extensions";

/// Reserved ids of the seeded groups, in display order.
pub const DEFAULT_GROUP_IDS: [&str; 3] = [PROGRAMS_ID, DRIVERS_ID, EXTENSIONS_ID];

/// A named, ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon_type: IconType,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub is_default: bool,
}

impl Group {
    /// A user-created (deletable) group with no items.
    pub fn new(id: String, name: String, icon_type: IconType) -> Self {
        Self {
            id,
            name,
            icon_type,
            items: Vec::new(),
            is_default: false,
        }
    }

    /// One of the three protected groups, `None` for an unknown id.
    pub fn default_for(id: &str, items: Vec<Item>) -> Option<Self> {
        let (name, icon_type) = match id {
            PROGRAMS_ID => ("Programs", IconType::Monitor),
            DRIVERS_ID => ("Drivers", IconType::HardDrive),
            EXTENSIONS_ID => ("Extensions", IconType::Puzzle),
            _ => return None,
        };
        Some(Self {
            id: id.to_string(),
            name: name.to_string(),
            icon_type,
            items,
            is_default: true,
        })
    }

    /// The three empty default groups seeded on first run.
    pub fn defaults() -> Vec<Group> {
        DEFAULT_GROUP_IDS
            .iter()
            .filter_map(|id| Group::default_for(id, Vec::new()))
            .collect()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.id == item_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == item_id)
    }
}
