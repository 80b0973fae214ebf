use crate::cli::commands::texts_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::core::transfer::TransferLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, toast};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut store = open_store(&cfg.database)?;
        let t = texts_for(&store)?;

        match TransferLogic::import(&mut store, file) {
            Ok(summary) => {
                if summary.legacy {
                    info(t.import_legacy);
                }
                toast(
                    t.import_success,
                    format!("{} groups, {}", summary.groups, t.items_count(summary.items)),
                );
            }
            Err(e @ AppError::Import(_)) => {
                error(t.import_error);
                return Err(e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
