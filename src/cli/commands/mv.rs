use crate::cli::commands::texts_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DropTarget, MoveOutcome, open_store, record};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { item, group, onto } = cmd {
        let target = match (group, onto) {
            (Some(g), _) => DropTarget::Group(g.clone()),
            (None, Some(i)) => DropTarget::Item(i.clone()),
            (None, None) => return Err(AppError::Other("missing --group or --onto".into())),
        };

        let mut store = open_store(&cfg.database)?;
        let t = texts_for(&store)?;

        match store.move_item(item, &target)? {
            MoveOutcome::Moved { from, to } => {
                record(&store, "move", item, &format!("{} → {}", from, to));
                let to_name = store
                    .group(&to)
                    .map(|g| t.group_name(g).to_string())
                    .unwrap_or(to);
                success(format!("{} '{}'", t.item_moved, to_name));
            }
            MoveOutcome::SameGroup => info(t.same_group),
            MoveOutcome::TargetNotFound => warning(t.target_not_found),
            MoveOutcome::ItemNotFound => return Err(AppError::ItemNotFound(item.clone())),
        }
    }
    Ok(())
}
