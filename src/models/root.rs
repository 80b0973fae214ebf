use super::group::{DEFAULT_GROUP_IDS, DRIVERS_ID, EXTENSIONS_ID, Group, PROGRAMS_ID};
use super::item::Item;
use serde::{Deserialize, Serialize};

/// Persisted store root (current schema).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRoot {
    pub groups: Vec<Group>,
}

impl Default for StoreRoot {
    fn default() -> Self {
        Self {
            groups: Group::defaults(),
        }
    }
}

impl StoreRoot {
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn group_mut(&mut self, group_id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    /// First group holding `item_id`.
    pub fn owner_of(&self, item_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(item_id))
    }

    pub fn find_item(&self, item_id: &str) -> Option<(&Group, &Item)> {
        self.groups
            .iter()
            .find_map(|g| g.item(item_id).map(|i| (g, i)))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.groups.iter().any(|g| g.id == id || g.contains(id))
    }

    /// Append any default group missing from the root.
    pub fn ensure_defaults(&mut self) {
        for id in DEFAULT_GROUP_IDS {
            if self.group(id).is_none()
                && let Some(group) = Group::default_for(id, Vec::new())
            {
                self.groups.push(group);
            }
        }
    }
}

/// Flat three-category shape written by the first releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRoot {
    pub programs: Vec<Item>,
    pub drivers: Vec<Item>,
    pub extensions: Vec<Item>,
}

impl From<LegacyRoot> for StoreRoot {
    fn from(legacy: LegacyRoot) -> Self {
        let groups = [
            (PROGRAMS_ID, legacy.programs),
            (DRIVERS_ID, legacy.drivers),
            (EXTENSIONS_ID, legacy.extensions),
        ]
        .into_iter()
        .filter_map(|(id, items)| Group::default_for(id, items))
        .collect();

        StoreRoot { groups }
    }
}

/// Any document shape accepted on load or import.
///
/// Decoding tries the current schema first, then the legacy one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredDocument {
    Current(StoreRoot),
    Legacy(LegacyRoot),
}

impl StoredDocument {
    pub fn is_legacy(&self) -> bool {
        matches!(self, StoredDocument::Legacy(_))
    }

    pub fn into_root(self) -> StoreRoot {
        match self {
            StoredDocument::Current(root) => root,
            StoredDocument::Legacy(legacy) => legacy.into(),
        }
    }
}
