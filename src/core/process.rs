use crate::config::Config;
use crate::core::metrics::{MetricPolicy, build_dataset};
use crate::core::state::AppState;
use crate::db::lock::RunLock;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::input::reader::read_grid;
use crate::input::validate::{ReportKind, validate_file_name};
use std::path::Path;

pub struct ProcessLogic;

impl ProcessLogic {
    /// One processing run: validate → read → derive → rank → persist.
    ///
    /// Nothing is written to the store unless every step before persistence
    /// succeeded, so a failed run leaves the previous snapshot untouched.
    pub fn run(
        pool: &mut DbPool,
        cfg: &Config,
        performance: &Path,
        status: &Path,
        skip_name_check: bool,
    ) -> AppResult<AppState> {
        // 1️⃣ file selection check
        if !skip_name_check {
            validate_file_name(performance, ReportKind::Performance, &cfg.performance_marker)?;
            validate_file_name(status, ReportKind::Status, &cfg.status_marker)?;
        }

        // 2️⃣ one run per store at a time
        let _lock = RunLock::acquire(&pool.path)?;

        // 3️⃣ keep the stored leave set across runs
        let mut state = AppState::load(pool)?;

        // 4️⃣ decode both reports
        let perf_grid = read_grid(performance)?;
        let status_grid = read_grid(status)?;

        // 5️⃣ derive + rank
        let policy = MetricPolicy::from_config(cfg);
        let dataset = build_dataset(&perf_grid, &status_grid, &policy);
        let agents = dataset.len();
        state.replace_dataset(dataset);

        // 6️⃣ persist the full dataset (not the filtered view)
        state.persist(pool)?;

        ttlog_quiet(
            &pool.conn,
            "process",
            &file_label(performance),
            &format!(
                "Processed {} agents ({} on leave) with status report '{}'",
                agents,
                state.leave().len(),
                file_label(status)
            ),
        );

        Ok(state)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
