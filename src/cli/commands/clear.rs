use crate::cli::commands::texts_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{open_store, record};
use crate::errors::AppResult;
use crate::ui::messages::{info, toast};
use crate::utils::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_store(&cfg.database)?;
        let t = texts_for(&store)?;
        let removed = store.total_items();

        if store.clear_all(|| *yes || ask_confirmation(t.clear_confirm))? {
            record(
                &store,
                "clear",
                "all",
                &format!("Cleared {} items and all statuses", removed),
            );
            toast(t.clear_done, t.items_count(0));
        } else {
            info(t.cancelled);
        }
    }
    Ok(())
}
