use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::open_store;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = open_store(&cfg.database)?;
        BackupLogic::backup(&store, &cfg.database, file, *compress)?;
    }

    Ok(())
}
