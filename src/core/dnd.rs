//! Group reassignment by drag-and-drop, independent of any gesture library.

use crate::models::Group;

/// Where an item was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Directly on a group container.
    Group(String),
    /// On another item; resolves to that item's owning group.
    Item(String),
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: String, to: String },
    SameGroup,
    TargetNotFound,
    ItemNotFound,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Id of the group a drop lands in, if any.
pub fn resolve_target<'a>(target: &DropTarget, groups: &'a [Group]) -> Option<&'a str> {
    match target {
        DropTarget::Group(id) => groups.iter().find(|g| &g.id == id).map(|g| g.id.as_str()),
        DropTarget::Item(id) => groups
            .iter()
            .find(|g| g.contains(id))
            .map(|g| g.id.as_str()),
    }
}

/// Move `item_id` to the end of the resolved target group.
///
/// The source is the first group holding the item. Nothing changes unless the
/// outcome is [`MoveOutcome::Moved`].
pub fn move_item(groups: &mut [Group], item_id: &str, target: &DropTarget) -> MoveOutcome {
    let Some(source_idx) = groups.iter().position(|g| g.contains(item_id)) else {
        return MoveOutcome::ItemNotFound;
    };
    let Some(target_id) = resolve_target(target, groups).map(str::to_string) else {
        return MoveOutcome::TargetNotFound;
    };
    let Some(target_idx) = groups.iter().position(|g| g.id == target_id) else {
        return MoveOutcome::TargetNotFound;
    };
    if source_idx == target_idx {
        return MoveOutcome::SameGroup;
    }

    let source = &mut groups[source_idx];
    let Some(pos) = source.position_of(item_id) else {
        return MoveOutcome::ItemNotFound;
    };
    let item = source.items.remove(pos);
    let from = source.id.clone();

    groups[target_idx].items.push(item);

    MoveOutcome::Moved {
        from,
        to: target_id,
    }
}
