use crate::cli::commands::texts_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::{ItemFilter, open_store};
use crate::errors::{AppError, AppResult};
use crate::models::Priority;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        group,
        search,
        priority,
    } = cmd
    {
        let priority = priority
            .as_deref()
            .map(|p| Priority::from_code(p).ok_or_else(|| AppError::InvalidPriority(p.into())))
            .transpose()?;

        let store = open_store(&cfg.database)?;
        let t = texts_for(&store)?;
        let filter = ItemFilter::new(search.clone(), priority);

        let out = ListLogic::render(&store, t, group.as_deref(), &filter, &cfg.separator_char)?;
        print!("{out}");
    }
    Ok(())
}
