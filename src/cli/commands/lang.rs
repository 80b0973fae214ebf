use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{open_store, record};
use crate::errors::{AppError, AppResult};
use crate::i18n::texts;
use crate::models::Language;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lang { code } = cmd {
        let mut store = open_store(&cfg.database)?;

        match code {
            None => {
                let lang = store.language()?;
                info(format!("{}: {}", texts(lang).language_current, lang.code()));
            }
            Some(code) => {
                let lang = Language::from_code(code)
                    .ok_or_else(|| AppError::InvalidLanguage(code.clone()))?;
                store.set_language(lang)?;
                record(&store, "lang", lang.code(), "Language changed");
                success(format!("{} {}", texts(lang).language_set, lang.code()));
            }
        }
    }
    Ok(())
}
