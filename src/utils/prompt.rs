//! Interactive yes/no prompts.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(
            s.trim().to_lowercase().as_str(),
            "y" | "yes" | "s" | "sim"
        )
    } else {
        false
    }
}

/// Check whether a file can be created or overwritten.
///
/// - File does NOT exist → Ok
/// - File exists and `force` is set → Ok
/// - File exists and `force == false` → ask the user.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if ask_confirmation(&format!(
        "The file '{}' already exists. Overwrite?",
        path.display()
    )) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
