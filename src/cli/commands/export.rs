use crate::cli::commands::texts_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::core::transfer::TransferLogic;
use crate::errors::AppResult;
use crate::ui::messages::{toast, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = open_store(&cfg.database)?;
        let t = texts_for(&store)?;
        let file = file.as_deref().unwrap_or(cfg.export_file.as_str());

        match TransferLogic::export(&store, file, *force)? {
            Some(path) => toast(t.export_success, path.display()),
            None => warning(t.export_empty),
        }
    }
    Ok(())
}
