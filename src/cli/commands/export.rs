use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        all,
        force,
    } = cmd
    {
        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_config(&cfg.default_export_format).ok_or_else(|| {
                AppError::Config(format!(
                    "unknown default_export_format '{}'",
                    cfg.default_export_format
                ))
            })?,
        };

        let mut pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&mut pool, format, file, *all, *force)?;
    }
    Ok(())
}
