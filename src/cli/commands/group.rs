use crate::cli::commands::texts_for;
use crate::cli::parser::{Commands, GroupAction};
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::{open_store, record};
use crate::errors::{AppError, AppResult};
use crate::models::IconType;
use crate::ui::messages::{info, success, warning};
use crate::utils::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Group { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(&cfg.database)?;
    let t = texts_for(&store)?;

    match action {
        GroupAction::Add { name, icon } => {
            let icon = match icon {
                Some(code) => {
                    IconType::from_code(code).ok_or_else(|| AppError::InvalidIcon(code.clone()))?
                }
                None => cfg.default_icon,
            };

            match store.add_group(name, icon) {
                Ok(group) => {
                    record(&store, "add_group", &group.id, &format!("Created group '{}'", group.name));
                    success(format!("{}: '{}' (id {})", t.group_created, group.name, group.id));
                }
                Err(e) if e.is_validation() => warning(t.empty_name),
                Err(e) => return Err(e),
            }
        }

        GroupAction::Del { id, yes } => {
            let result = store.delete_group(id, |group| {
                *yes || ask_confirmation(&format!(
                    "{} ({}: {})",
                    t.delete_group_confirm,
                    t.group_name(group),
                    t.items_count(group.items.len())
                ))
            });

            match result {
                Ok(Some(group)) => {
                    record(
                        &store,
                        "del_group",
                        &group.id,
                        &format!("Deleted group '{}' with {} items", group.name, group.items.len()),
                    );
                    success(format!("{}: '{}'", t.group_deleted, group.name));
                }
                Ok(None) => info(t.cancelled),
                Err(e @ AppError::ProtectedGroup(_)) => {
                    warning(t.protected_group);
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        GroupAction::List => {
            print!("{}", ListLogic::render_groups(&store, t));
        }
    }

    Ok(())
}
