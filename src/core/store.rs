//! The checklist store: canonical groups, items and statuses.
//!
//! The store loads both persisted units once, then treats every operation as
//! a whole-value read-modify-write: the new value is computed on a copy,
//! written through the backend, and only then committed in memory. A failed
//! write therefore leaves the store exactly as it was.

use crate::core::dnd::{self, DropTarget, MoveOutcome};
use crate::core::ids::fresh_id;
use crate::core::migrate::{decode_document, decode_statuses};
use crate::errors::{AppError, AppResult};
use crate::models::{
    Group, IconType, Item, ItemDraft, ItemStatus, Language, Status, StoreRoot, StoredDocument,
};
use crate::storage::{KeyValueStore, LANGUAGE_KEY, ROOT_KEY, STATUSES_KEY};

/// How the store root was obtained on open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    /// Nothing stored yet; defaults seeded.
    Seeded,
    /// Current schema.
    Current,
    /// Legacy three-category shape, upgraded and written back.
    MigratedLegacy,
    /// Stored value could not be decoded; defaults used in memory.
    Unreadable(String),
}

/// How the status list was obtained on open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSource {
    /// Nothing stored, or every stored entry decoded.
    Clean,
    /// Unusable entries were left out; the stored value is kept until the next
    /// status write.
    Partial { dropped: usize },
    /// Stored value is not a status list; starting with no statuses in memory.
    Unreadable(String),
}

/// Done/skipped/total counts of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub done: usize,
    pub skipped: usize,
    pub total: usize,
}

impl Progress {
    pub fn pending(&self) -> usize {
        self.total - self.done - self.skipped
    }
}

/// What an import replaced the store with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub legacy: bool,
    pub groups: usize,
    pub items: usize,
}

pub struct ChecklistStore<B: KeyValueStore> {
    backend: B,
    root: StoreRoot,
    statuses: Vec<ItemStatus>,
    source: RootSource,
    status_source: StatusSource,
}

impl<B: KeyValueStore> ChecklistStore<B> {
    /// Load the store from `backend`, migrating or seeding as needed.
    pub fn open(mut backend: B) -> AppResult<Self> {
        let (root, source) = match backend.get(ROOT_KEY)? {
            None => (StoreRoot::default(), RootSource::Seeded),
            Some(raw) => match decode_document(&raw) {
                Ok(StoredDocument::Current(root)) => (root, RootSource::Current),
                Ok(doc @ StoredDocument::Legacy(_)) => (doc.into_root(), RootSource::MigratedLegacy),
                Err(e) => (StoreRoot::default(), RootSource::Unreadable(e.to_string())),
            },
        };

        if matches!(source, RootSource::Seeded | RootSource::MigratedLegacy) {
            backend.set(ROOT_KEY, &serde_json::to_string(&root)?)?;
        }

        let (statuses, status_source) = match backend.get(STATUSES_KEY)? {
            None => (Vec::new(), StatusSource::Clean),
            Some(raw) => match decode_statuses(&raw) {
                Ok(d) if d.dropped == 0 => (d.statuses, StatusSource::Clean),
                Ok(d) => (d.statuses, StatusSource::Partial { dropped: d.dropped }),
                Err(e) => (Vec::new(), StatusSource::Unreadable(e.to_string())),
            },
        };

        Ok(Self {
            backend,
            root,
            statuses,
            source,
            status_source,
        })
    }

    // ---------------------------
    // Read side
    // ---------------------------

    pub fn source(&self) -> &RootSource {
        &self.source
    }

    pub fn status_source(&self) -> &StatusSource {
        &self.status_source
    }

    pub fn root(&self) -> &StoreRoot {
        &self.root
    }

    pub fn groups(&self) -> &[Group] {
        &self.root.groups
    }

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.root.group(group_id)
    }

    pub fn statuses(&self) -> &[ItemStatus] {
        &self.statuses
    }

    /// Status of an item; `none` when no entry exists.
    pub fn status_of(&self, item_id: &str) -> Status {
        self.statuses
            .iter()
            .find(|s| s.id == item_id)
            .map(|s| s.status)
            .unwrap_or_default()
    }

    pub fn find_item(&self, item_id: &str) -> Option<(&Group, &Item)> {
        self.root.find_item(item_id)
    }

    pub fn total_items(&self) -> usize {
        self.root.total_items()
    }

    /// No items and no user-created groups: nothing worth exporting.
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0 && self.groups().iter().all(|g| g.is_default)
    }

    pub fn progress(&self, group: &Group) -> Progress {
        group
            .items
            .iter()
            .fold(Progress::default(), |mut acc, item| {
                acc.total += 1;
                match self.status_of(&item.id) {
                    Status::Done => acc.done += 1,
                    Status::Skip => acc.skipped += 1,
                    Status::None => {}
                }
                acc
            })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // ---------------------------
    // Groups
    // ---------------------------

    pub fn add_group(&mut self, name: &str, icon_type: IconType) -> AppResult<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let mut root = self.root.clone();
        let group = Group::new(fresh_id(&root), name.to_string(), icon_type);
        root.groups.push(group.clone());

        self.commit(Some(root), None)?;
        Ok(group)
    }

    /// Delete a user group once `confirm` agrees.
    ///
    /// Default groups are refused before `confirm` is consulted. Returns
    /// `Ok(None)` when the confirmation is declined.
    pub fn delete_group<F>(&mut self, group_id: &str, confirm: F) -> AppResult<Option<Group>>
    where
        F: FnOnce(&Group) -> bool,
    {
        let group = self
            .root
            .group(group_id)
            .ok_or_else(|| AppError::GroupNotFound(group_id.to_string()))?;

        if group.is_default {
            return Err(AppError::ProtectedGroup(group.id.clone()));
        }
        if !confirm(group) {
            return Ok(None);
        }

        let mut root = self.root.clone();
        let idx = root
            .groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| AppError::GroupNotFound(group_id.to_string()))?;
        let removed = root.groups.remove(idx);

        let statuses = self
            .statuses
            .iter()
            .filter(|s| !removed.contains(&s.id))
            .cloned()
            .collect();

        self.commit(Some(root), Some(statuses))?;
        Ok(Some(removed))
    }

    // ---------------------------
    // Items
    // ---------------------------

    pub fn add_item(&mut self, group_id: &str, draft: &ItemDraft) -> AppResult<Item> {
        let draft = draft.normalized().ok_or(AppError::EmptyName)?;

        let mut root = self.root.clone();
        let id = fresh_id(&root);
        let group = root
            .group_mut(group_id)
            .ok_or_else(|| AppError::GroupNotFound(group_id.to_string()))?;

        let item = draft.into_item(id);
        group.items.push(item.clone());

        self.commit(Some(root), None)?;
        Ok(item)
    }

    /// Replace an item in place, keeping its id and position.
    pub fn edit_item(&mut self, group_id: &str, item_id: &str, draft: &ItemDraft) -> AppResult<Item> {
        let draft = draft.normalized().ok_or(AppError::EmptyName)?;

        let mut root = self.root.clone();
        let group = root
            .group_mut(group_id)
            .ok_or_else(|| AppError::GroupNotFound(group_id.to_string()))?;
        let slot = group
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

        *slot = draft.into_item(item_id.to_string());
        let updated = slot.clone();

        self.commit(Some(root), None)?;
        Ok(updated)
    }

    pub fn delete_item(&mut self, group_id: &str, item_id: &str) -> AppResult<Item> {
        let mut root = self.root.clone();
        let group = root
            .group_mut(group_id)
            .ok_or_else(|| AppError::GroupNotFound(group_id.to_string()))?;
        let pos = group
            .position_of(item_id)
            .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;
        let removed = group.items.remove(pos);

        let statuses = self
            .statuses
            .iter()
            .filter(|s| s.id != item_id)
            .cloned()
            .collect();

        self.commit(Some(root), Some(statuses))?;
        Ok(removed)
    }

    /// Reassign an item to the group resolved from `target`.
    pub fn move_item(&mut self, item_id: &str, target: &DropTarget) -> AppResult<MoveOutcome> {
        let mut root = self.root.clone();
        let outcome = dnd::move_item(&mut root.groups, item_id, target);

        if outcome.is_moved() {
            self.commit(Some(root), None)?;
        }
        Ok(outcome)
    }

    // ---------------------------
    // Statuses
    // ---------------------------

    /// Upsert the status entry of an existing item.
    pub fn set_status(&mut self, item_id: &str, status: Status) -> AppResult<()> {
        if self.root.owner_of(item_id).is_none() {
            return Err(AppError::ItemNotFound(item_id.to_string()));
        }

        let mut statuses = self.statuses.clone();
        match statuses.iter_mut().find(|s| s.id == item_id) {
            Some(entry) => entry.status = status,
            None => statuses.push(ItemStatus {
                id: item_id.to_string(),
                status,
            }),
        }

        self.commit(None, Some(statuses))
    }

    /// Advance none → done → skip → none and return the new status.
    pub fn cycle_status(&mut self, item_id: &str) -> AppResult<Status> {
        let next = self.status_of(item_id).next();
        self.set_status(item_id, next)?;
        Ok(next)
    }

    // ---------------------------
    // Whole-store operations
    // ---------------------------

    /// Pretty-printed JSON of the store root (statuses excluded).
    pub fn export_snapshot(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Replace the store root with a current or legacy document.
    pub fn import_snapshot(&mut self, raw: &str) -> AppResult<ImportSummary> {
        let doc = decode_document(raw)?;
        let legacy = doc.is_legacy();
        let root = doc.into_root();

        let summary = ImportSummary {
            legacy,
            groups: root.groups.len(),
            items: root.total_items(),
        };

        self.commit(Some(root), None)?;
        Ok(summary)
    }

    /// Empty every group and drop all statuses once `confirm` agrees.
    pub fn clear_all<F>(&mut self, confirm: F) -> AppResult<bool>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return Ok(false);
        }

        let mut root = self.root.clone();
        for group in &mut root.groups {
            group.items.clear();
        }
        root.ensure_defaults();

        self.commit(Some(root), Some(Vec::new()))?;
        Ok(true)
    }

    // ---------------------------
    // Language
    // ---------------------------

    /// Stored language, `pt` when unset or unreadable.
    pub fn language(&self) -> AppResult<Language> {
        Ok(self
            .backend
            .get(LANGUAGE_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default())
    }

    pub fn set_language(&mut self, language: Language) -> AppResult<()> {
        self.backend
            .set(LANGUAGE_KEY, &serde_json::to_string(&language)?)
    }

    fn commit(&mut self, root: Option<StoreRoot>, statuses: Option<Vec<ItemStatus>>) -> AppResult<()> {
        let mut entries = Vec::with_capacity(2);
        if let Some(r) = &root {
            entries.push((ROOT_KEY, serde_json::to_string(r)?));
        }
        if let Some(s) = &statuses {
            entries.push((STATUSES_KEY, serde_json::to_string(s)?));
        }

        match entries.as_slice() {
            [] => {}
            [(key, value)] => self.backend.set(key, value)?,
            _ => self.backend.set_many(&entries)?,
        }

        if let Some(r) = root {
            self.root = r;
        }
        if let Some(s) = statuses {
            self.statuses = s;
        }
        Ok(())
    }
}
