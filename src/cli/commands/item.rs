use crate::cli::commands::texts_for;
use crate::cli::parser::{Commands, ItemAction};
use crate::config::Config;
use crate::core::{open_store, record};
use crate::errors::{AppError, AppResult};
use crate::models::{ItemDraft, Priority};
use crate::ui::messages::{success, warning};

fn parse_priority(code: Option<&str>, fallback: Priority) -> AppResult<Priority> {
    match code {
        Some(c) => Priority::from_code(c).ok_or_else(|| AppError::InvalidPriority(c.to_string())),
        None => Ok(fallback),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Item { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(&cfg.database)?;
    let t = texts_for(&store)?;

    let result = match action {
        ItemAction::Add {
            group,
            name,
            link,
            priority,
        } => {
            let priority = parse_priority(priority.as_deref(), cfg.default_priority)?;
            let draft = ItemDraft::new(name.as_str(), link.as_str(), priority);

            store.add_item(group, &draft).map(|item| {
                record(&store, "add", &item.id, &format!("Added '{}' to {}", item.name, group));
                success(format!("{}: '{}' → {} (id {})", t.item_added, item.name, group, item.id));
            })
        }

        ItemAction::Edit {
            group,
            id,
            name,
            link,
            priority,
        } => {
            let current = store
                .group(group)
                .ok_or_else(|| AppError::GroupNotFound(group.clone()))?
                .item(id)
                .ok_or_else(|| AppError::ItemNotFound(id.clone()))?;

            let mut draft = ItemDraft::from(current);
            if let Some(n) = name {
                draft.name = n.clone();
            }
            if let Some(l) = link {
                draft.link = l.clone();
            }
            draft.priority = parse_priority(priority.as_deref(), draft.priority)?;

            store.edit_item(group, id, &draft).map(|item| {
                record(&store, "edit", &item.id, &format!("Edited '{}'", item.name));
                success(format!("{}: '{}'", t.item_updated, item.name));
            })
        }

        ItemAction::Del { group, id } => store.delete_item(group, id).map(|item| {
            record(&store, "del", &item.id, &format!("Deleted '{}' from {}", item.name, group));
            success(format!("{}: '{}'", t.item_deleted, item.name));
        }),
    };

    match result {
        Err(e) if e.is_validation() => {
            warning(t.empty_name);
            Ok(())
        }
        other => other,
    }
}
