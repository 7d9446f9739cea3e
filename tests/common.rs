#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PERF_HEADER: &str = "Agent Name,Answered,Outbound,Handle,Alert - No Answer,Total Handle,Total Talk,Total Hold,Total ACW";
pub const STATUS_HEADER: &str = "Agent Name,Logged In,Idle,Busy,Away,Break,Meal,Meeting,Training,Busy: Mentoring / Coaching";

/// Alice and Bob appear in both reports, Dave only in performance, Carol
/// only in status.
pub const PERF_ROWS: &[&str] = &[
    "Alice,12,3,00:30:00,1,00:45:00,00:25:00,00:05:00,00:10:00",
    "Bob,8,0,00:20:00,0,00:30:00,00:20:00,00:00:00,00:05:00",
    "Dave,5,1,00:10:00,2,00:12:00,00:10:00,00:01:00,00:01:00",
];

pub const STATUS_ROWS: &[&str] = &[
    "Alice,08:00:00,00:10:00,00:05:00,00:10:00,00:20:00,00:10:00,,,",
    "Bob,08:00:00,00:30:00,00:10:00,00:30:00,00:45:00,00:30:00,00:15:00,01:00:00,00:00:00",
    "Carol,02:00:00,00:30:00,,,,,,,",
];

pub fn rti() -> Command {
    cargo_bin_cmd!("rtaboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtaboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{db_path}.lock")).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn csv_text(header: &str, rows: &[&str]) -> String {
    let mut out = String::from(header);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

/// Write both reports under a per-test directory, named the way the export
/// tool names them. Returns (performance, status) paths.
pub fn write_reports(name: &str, perf_rows: &[&str], status_rows: &[&str]) -> (String, String) {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_rtaboard_reports", name));
    fs::create_dir_all(&dir).expect("create report dir");

    let perf = dir.join("Agent Performance Summary - 2025-11-03.csv");
    let status = dir.join("Agent Status Summary - 2025-11-03.csv");

    fs::write(&perf, csv_text(PERF_HEADER, perf_rows)).expect("write performance report");
    fs::write(&status, csv_text(STATUS_HEADER, status_rows)).expect("write status report");

    (
        perf.to_string_lossy().to_string(),
        status.to_string_lossy().to_string(),
    )
}

/// Initialize the DB and process the default reports into it
pub fn init_db_with_data(name: &str, db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let (perf, status) = write_reports(name, PERF_ROWS, STATUS_ROWS);

    rti()
        .args(["--db", db_path, "process", &perf, &status, "--quiet"])
        .assert()
        .success();
}
