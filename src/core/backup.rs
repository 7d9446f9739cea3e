use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::fs::ensure_writable;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store (snapshot + log) to `dest_file`, optionally zipped.
    pub fn backup(
        pool: &mut DbPool,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<()> {
        let src = PathBuf::from(&pool.path);
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if !dest.is_absolute() {
            return Err(AppError::Other(format!(
                "Backup path must be absolute: {dest_file}"
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Confirm overwrite
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        ensure_writable(&final_target, force)?;

        // 4️⃣ Flush WAL pages (if any) so the copy is complete
        pool.conn.execute_batch("PRAGMA wal_checkpoint(FULL);").ok();

        // 5️⃣ Copy database, zipped or plain
        let final_path = if compress {
            compress_into(&src, &final_target)?
        } else {
            fs::copy(&src, &dest)?;
            dest.clone()
        };

        success(format!("Backup created: {}", final_path.display()));

        // 6️⃣ Log in DB
        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }
}

/// Write `src` as the single entry of a new zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rtaboard.sqlite".to_string());

    if let Err(e) = zip.start_file(entry, options) {
        warning(format!("Failed to start zip entry: {e}"));
        return Err(AppError::Io(std::io::Error::other(e)));
    }

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
