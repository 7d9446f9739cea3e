//! Cross-process guard: at most one writer per store.
//!
//! The lock is a `<database>.lock` file created exclusively, holding the PID
//! of its owner, and removed when the guard is dropped. A lock left behind by
//! a process that no longer runs (killed, crashed) is reclaimed on the next
//! acquire; `db --unlock` removes it unconditionally.

use crate::errors::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    pub fn lock_path(db_path: &str) -> PathBuf {
        let mut name = Path::new(db_path).as_os_str().to_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Acquire the lock or fail with [`AppError::Busy`] if a live process
    /// holds it.
    pub fn acquire(db_path: &str) -> AppResult<Self> {
        let path = Self::lock_path(db_path);

        match Self::create(&path) {
            Err(AppError::Busy(_)) if Self::reclaim_stale(&path)? => Self::create(&path),
            other => other,
        }
    }

    /// Remove the lock file whatever its owner. Returns `true` if there was one.
    pub fn force_release(db_path: &str) -> AppResult<bool> {
        match fs::remove_file(Self::lock_path(db_path)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// PID recorded in an existing lock file.
    pub fn owner(db_path: &str) -> Option<u32> {
        read_owner(&Self::lock_path(db_path))
    }

    fn create(path: &Path) -> AppResult<Self> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(AppError::Busy(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(file, "{}", std::process::id())?;
        file.sync_all()?;
        log::debug!("run lock acquired: {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Delete the lock if its owner is gone. A lock without a readable PID
    /// is left alone: its owner may not have written it yet.
    fn reclaim_stale(path: &Path) -> AppResult<bool> {
        let Some(pid) = read_owner(path) else {
            return Ok(false);
        };

        if pid == std::process::id() || process_alive(pid) {
            return Ok(false);
        }

        log::warn!(
            "removing stale run lock {} (process {} is gone)",
            path.display(),
            pid
        );
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            log::warn!("failed to release run lock {}: {}", self.path.display(), e);
        }
    }
}

fn read_owner(path: &Path) -> Option<u32> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };

    // signal 0 only checks existence and permissions
    if unsafe { libc::kill(pid, 0) } == 0 {
        return true;
    }
    std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}

// Liveness is unknown here: keep the lock, `db --unlock` clears it.
#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}
