use crate::core::{SqliteStore, record};
use crate::errors::{AppError, AppResult};
use crate::i18n::texts;
use crate::ui::messages::{info, success};
use crate::utils::ask_confirmation;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipped.
    ///
    /// Returns the path actually written, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn backup(
        store: &SqliteStore,
        db_path: &str,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<Option<PathBuf>> {
        let t = texts(store.language()?);
        let src = Path::new(db_path);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        if target.exists()
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            ))
        {
            info(t.cancelled);
            return Ok(None);
        }

        let final_path = if compress {
            compress_backup(src, &target)?
        } else {
            fs::copy(src, &target)?;
            target
        };

        success(format!("{}: {}", t.backup_created, final_path.display()));

        record(
            store,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Write `src` as the single entry of a deflated zip at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "pcdeath.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
