pub mod backup;
pub mod clear;
pub mod config;
pub mod export;
pub mod group;
pub mod import;
pub mod init;
pub mod item;
pub mod lang;
pub mod list;
pub mod log;
pub mod mv;
pub mod status;

use crate::core::SqliteStore;
use crate::errors::AppResult;
use crate::i18n::{Texts, texts};

/// Interface text in the language stored alongside the checklist.
pub(crate) fn texts_for(store: &SqliteStore) -> AppResult<&'static Texts> {
    Ok(texts(store.language()?))
}
