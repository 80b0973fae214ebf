use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{open_store, record};
use crate::errors::{AppError, AppResult};
use crate::models::Status;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_status};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { item, status } = cmd {
        let mut store = open_store(&cfg.database)?;

        let new_status = match status {
            Some(code) => {
                let s = Status::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.clone()))?;
                store.set_status(item, s)?;
                s
            }
            None => store.cycle_status(item)?,
        };

        let name = store
            .find_item(item)
            .map(|(_, i)| i.name.clone())
            .unwrap_or_else(|| item.clone());

        record(&store, "status", item, new_status.as_str());
        success(format!(
            "{}{} {}{} → {}",
            color_for_status(new_status),
            new_status.mark(),
            name,
            RESET,
            new_status.as_str()
        ));
    }
    Ok(())
}
