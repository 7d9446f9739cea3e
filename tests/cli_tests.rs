use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    PERF_ROWS, STATUS_ROWS, init_db_with_data, rti, setup_test_db, temp_out, write_reports,
};
use rtaboard::db::lock::RunLock;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_process_prints_ranked_table() {
    let db_path = setup_test_db("cli_process");
    let (perf, status) = write_reports("cli_process", PERF_ROWS, STATUS_ROWS);

    rti()
        .args(["--db", &db_path, "process", &perf, &status])
        .assert()
        .success()
        .stdout(contains("Processed 4 agent(s)"))
        .stdout(contains("Non Productive"))
        .stdout(contains("Alice"))
        .stdout(contains("06:40:00"))
        .stdout(contains("Most non-productive: Alice (6h 40m)"));
}

#[test]
fn test_process_rejects_swapped_files() {
    let db_path = setup_test_db("cli_swapped");
    let (perf, status) = write_reports("cli_swapped", PERF_ROWS, STATUS_ROWS);

    rti()
        .args(["--db", &db_path, "process", &status, &perf])
        .assert()
        .failure()
        .stderr(contains("Invalid Performance file"));

    // nothing was stored
    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("No data stored yet"));
}

#[test]
fn test_process_skip_name_check() {
    let db_path = setup_test_db("cli_skip_check");
    let (perf, status) = write_reports("cli_skip_check", PERF_ROWS, STATUS_ROWS);
    let renamed = temp_out("cli_skip_check_perf", "csv");
    fs::copy(&perf, &renamed).expect("copy report");

    rti()
        .args([
            "--db",
            &db_path,
            "process",
            &renamed,
            &status,
            "--skip-name-check",
            "-q",
        ])
        .assert()
        .success()
        .stdout(contains("Processed 4 agent(s)"));
}

#[test]
fn test_process_fails_while_another_run_holds_the_lock() {
    let db_path = setup_test_db("cli_busy");
    let (perf, status) = write_reports("cli_busy", PERF_ROWS, STATUS_ROWS);

    let lock = RunLock::acquire(&db_path).expect("hold lock");

    rti()
        .args(["--db", &db_path, "process", &perf, &status, "-q"])
        .assert()
        .failure()
        .stderr(contains("already in progress"));

    drop(lock);

    rti()
        .args(["--db", &db_path, "process", &perf, &status, "-q"])
        .assert()
        .success();
}

#[test]
fn test_show_respects_leave_list() {
    let db_path = setup_test_db("cli_show_leave");
    init_db_with_data("cli_show_leave", &db_path);

    rti()
        .args(["--db", &db_path, "leave", "--add", "Alice"])
        .assert()
        .success()
        .stdout(contains("Leave list saved"));

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Alice").not())
        .stdout(contains("1 agent(s) on leave hidden"));

    rti()
        .args(["--db", &db_path, "show", "--all"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob"));
}

#[test]
fn test_show_top() {
    let db_path = setup_test_db("cli_show_top");
    init_db_with_data("cli_show_top", &db_path);

    rti()
        .args(["--db", &db_path, "show", "--top", "1"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob").not());
}

#[test]
fn test_leave_survives_new_processing_run() {
    let db_path = setup_test_db("cli_leave_persist");
    init_db_with_data("cli_leave_persist", &db_path);

    rti()
        .args(["--db", &db_path, "leave", "--add", "Bob", "Carol"])
        .assert()
        .success();

    let (perf, status) = write_reports("cli_leave_persist", PERF_ROWS, STATUS_ROWS);
    rti()
        .args(["--db", &db_path, "process", &perf, &status])
        .assert()
        .success()
        .stdout(contains("2 on leave"))
        .stdout(contains("Carol").not());

    rti()
        .args(["--db", &db_path, "leave", "--list"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Carol"));
}

#[test]
fn test_leave_remove_and_candidates() {
    let db_path = setup_test_db("cli_leave_candidates");
    init_db_with_data("cli_leave_candidates", &db_path);

    rti()
        .args(["--db", &db_path, "leave", "--add", "Dave", "--candidates"])
        .assert()
        .success()
        .stdout(contains("[x]"))
        .stdout(contains("[ ] Alice"));

    rti()
        .args(["--db", &db_path, "leave", "--remove", "Dave", "--list"])
        .assert()
        .success()
        .stdout(contains("Nobody is on leave"));
}

#[test]
fn test_leave_unknown_agent_warns() {
    let db_path = setup_test_db("cli_leave_unknown");
    init_db_with_data("cli_leave_unknown", &db_path);

    rti()
        .args(["--db", &db_path, "leave", "--add", "Ghost", "--list"])
        .assert()
        .success()
        .stdout(contains("not in the current dataset"))
        .stdout(contains("Ghost"));
}

#[test]
fn test_export_csv_excludes_agents_on_leave() {
    let db_path = setup_test_db("cli_export_csv");
    init_db_with_data("cli_export_csv", &db_path);
    let out = temp_out("cli_export_csv", "csv");

    rti()
        .args(["--db", &db_path, "leave", "--add", "Alice"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header line");

    assert!(header.starts_with("Agent Name,Answered,Outbound,Handle,Alert - No Answer,Non Productive"));
    assert!(header.ends_with("Dispatch,Productive"));
    assert!(content.contains("Bob"));
    assert!(!content.contains("Alice"));
}

#[test]
fn test_export_json_all() {
    let db_path = setup_test_db("cli_export_json");
    init_db_with_data("cli_export_json", &db_path);
    let out = temp_out("cli_export_json", "json");

    rti()
        .args(["--db", &db_path, "leave", "--add", "Alice"])
        .assert()
        .success();

    rti()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--all",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).expect("valid json");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["Agent Name"], "Alice");
    assert_eq!(rows[0]["Non Productive"], "06:40:00");
    assert_eq!(rows[0]["Total Break"], "00:40:00");
}

#[test]
fn test_export_xlsx_and_pdf() {
    let db_path = setup_test_db("cli_export_binary");
    init_db_with_data("cli_export_binary", &db_path);

    for ext in ["xlsx", "pdf"] {
        let out = temp_out("cli_export_binary", ext);
        rti()
            .args(["--db", &db_path, "export", "--format", ext, "--file", &out])
            .assert()
            .success();

        let size = fs::metadata(&out).expect("exported file").len();
        assert!(size > 0);
    }
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_data("cli_export_relative", &db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data("cli_log", &db_path);

    rti()
        .args(["--db", &db_path, "leave", "--add", "Bob"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("process"))
        .stdout(contains("leave"))
        .stdout(contains("init"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data("cli_backup", &db_path);

    let plain = temp_out("cli_backup", "sqlite");
    rti()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).is_ok());

    let zipped = temp_out("cli_backup_zip", "zip");
    rti()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(fs::metadata(&zipped).is_ok());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data("cli_db_info", &db_path);

    rti()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Agents stored:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_unlock_clears_a_left_over_lock() {
    let db_path = setup_test_db("cli_unlock");
    let (perf, status) = write_reports("cli_unlock", PERF_ROWS, STATUS_ROWS);

    // owned by a live process, so it is never reclaimed on its own
    fs::write(
        RunLock::lock_path(&db_path),
        format!("{}\n", std::process::id()),
    )
    .expect("write lock");

    rti()
        .args(["--db", &db_path, "process", &perf, &status, "-q"])
        .assert()
        .failure()
        .stderr(contains("already in progress"));

    rti()
        .args(["--db", &db_path, "db", "--unlock"])
        .assert()
        .success()
        .stdout(contains("Run lock removed"));

    rti()
        .args(["--db", &db_path, "process", &perf, &status, "-q"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "db", "--unlock"])
        .assert()
        .success()
        .stdout(contains("No run lock present"));
}

#[test]
fn test_failed_run_keeps_previous_snapshot_and_leave() {
    let db_path = setup_test_db("cli_failed_run");
    init_db_with_data("cli_failed_run", &db_path);

    rti()
        .args(["--db", &db_path, "leave", "--add", "Bob"])
        .assert()
        .success();

    let (perf, _) = write_reports("cli_failed_run", PERF_ROWS, STATUS_ROWS);
    let dir = std::path::Path::new(&perf).parent().expect("report dir");

    let missing = dir.join("Agent Status Summary - missing.csv");
    fs::remove_file(&missing).ok();

    let unreadable = dir.join("Agent Status Summary - folder.csv");
    fs::create_dir_all(&unreadable).expect("create dir");

    for status in [&missing, &unreadable] {
        rti()
            .args(["--db", &db_path, "process", &perf])
            .arg(status)
            .assert()
            .failure();
    }

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Carol"))
        .stdout(contains("1 agent(s) on leave hidden"));

    rti()
        .args(["--db", &db_path, "show", "--all"])
        .assert()
        .success()
        .stdout(contains("Bob"));

    rti()
        .args(["--db", &db_path, "leave", "--list"])
        .assert()
        .success()
        .stdout(contains("Bob"));
}
