//! E2E tests for the schedule command
//!
//! Spawns the real binary against YAML fixtures in a temp directory and
//! checks the rendered output in each format.

use std::path::{Path, PathBuf};
use std::process::Command;

const WORKERS_YAML: &str = "
- name: anna
  periods:
    - start_date: 2025-08-01
      end_date: 2025-12-20
      work_hours: 8.0
      work_days: [Mon, Tue, Wed, Thu, Fri]
";

// 2025-09-01 is a Monday; 20h at 8h/day ends Wednesday noon
const TASKS_YAML: &str = "
- Field: north-3
  Variety Group: hauptsorte
  total_hours: 20.0
";

const PLAN_YAML: &str = "start_date: 2025-09-01\n";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        fixture.write("workers.yaml", WORKERS_YAML);
        fixture.write("tasks.yaml", TASKS_YAML);
        fixture.write("plan.yaml", PLAN_YAML);
        fixture
    }

    fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path(name), contents).unwrap();
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Run the binary and return (exit_code, stdout, stderr)
fn run(args: &[&Path]) -> (i32, String, String) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_harvestplan"));
    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("failed to execute harvestplan");
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (exit_code, stdout, stderr)
}

fn run_schedule(fixture: &Fixture, extra: &[&str]) -> (i32, String, String) {
    let config = fixture.path("plan.yaml");
    let workers = fixture.path("workers.yaml");
    let tasks = fixture.path("tasks.yaml");
    let mut args: Vec<&Path> = vec![
        "schedule".as_ref(),
        "--config".as_ref(),
        &config,
        "--workers".as_ref(),
        &workers,
        "--tasks".as_ref(),
        &tasks,
    ];
    for arg in extra {
        args.push(arg.as_ref());
    }
    run(&args)
}

// =============================================================================
// Schedule output formats
// =============================================================================

#[test]
fn schedule_text_output() {
    let fixture = Fixture::new();
    let (code, stdout, _) = run_schedule(&fixture, &[]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("Field"), "table should start with header");
    assert!(stdout.contains("north-3"));
    assert!(stdout.contains("2025-09-01 08:00"));
    assert!(stdout.contains("2025-09-03 12:00"));
}

#[test]
fn schedule_json_output() {
    let fixture = Fixture::new();
    let (code, stdout, _) = run_schedule(&fixture, &["--format", "json"]);
    assert_eq!(code, 0);

    let entries: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    let entry = &entries[0];
    assert_eq!(entry["field"], "north-3");
    assert_eq!(entry["variety_group"], "hauptsorte");
    assert_eq!(entry["harvest_round"], 1);
    assert_eq!(entry["start_date"], "2025-09-01T08:00:00");
    assert_eq!(entry["end_date"], "2025-09-03T12:00:00");
    assert_eq!(entry["total_hours"], 20.0);
}

#[test]
fn schedule_mermaid_output() {
    let fixture = Fixture::new();
    let (code, stdout, _) = run_schedule(&fixture, &["--format", "mermaid"]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("gantt\n"));
    assert!(stdout.contains("section hauptsorte"));
    assert!(stdout.contains("north-3 (round 1)"));
}

#[test]
fn schedule_unknown_format_fails() {
    let fixture = Fixture::new();
    let (code, _, stderr) = run_schedule(&fixture, &["--format", "csv"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown format"));
}

#[test]
fn schedule_writes_output_file() {
    let fixture = Fixture::new();
    let out = fixture.path("plan.txt");
    let (code, stdout, _) = run_schedule(&fixture, &["--output", out.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(stdout.is_empty(), "output file mode should not print to stdout");
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("north-3"));
}

// =============================================================================
// Harvest-round expansion and warnings
// =============================================================================

#[test]
fn schedule_expands_harvest_rounds_from_config() {
    let fixture = Fixture::new();
    fixture.write(
        "plan.yaml",
        "start_date: 2025-09-01\nfield_order: [north-3]\nharvest_rounds:\n  north-3: 2\n",
    );
    let (code, stdout, _) = run_schedule(&fixture, &["--format", "json"]);
    assert_eq!(code, 0);

    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["harvest_round"], 1);
    assert_eq!(entries[1]["harvest_round"], 2);
    // second pass starts where the first ended
    assert_eq!(entries[1]["start_date"], entries[0]["end_date"]);
}

#[test]
fn schedule_without_start_date_fails() {
    let fixture = Fixture::new();
    fixture.write("plan.yaml", "field_order: [north-3]\n");
    let (code, _, stderr) = run_schedule(&fixture, &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no start date configured"));
}

#[test]
fn schedule_warns_on_group_without_start_date() {
    let fixture = Fixture::new();
    fixture.write("plan.yaml", "start_dates:\n  fruehsorte: 2025-09-01\n");
    let (code, stdout, stderr) = run_schedule(&fixture, &[]);

    // the hauptsorte row has no start date: dropped with a warning
    assert_eq!(code, 0);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("hauptsorte"));
    assert!(!stdout.contains("north-3"));
}

// =============================================================================
// Check and capacity commands
// =============================================================================

#[test]
fn check_reports_worker_count() {
    let fixture = Fixture::new();
    let (code, stdout, _) = run(&[
        "check".as_ref(),
        "--workers".as_ref(),
        &fixture.path("workers.yaml"),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1 workers"));
}

#[test]
fn check_rejects_invalid_worker_file() {
    let fixture = Fixture::new();
    fixture.write("workers.yaml", "- name: anna\n- name: anna\n");
    let (code, _, stderr) = run(&[
        "check".as_ref(),
        "--workers".as_ref(),
        &fixture.path("workers.yaml"),
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid worker file"));
}

#[test]
fn capacity_prints_daily_table() {
    let fixture = Fixture::new();
    let (code, stdout, _) = run(&[
        "capacity".as_ref(),
        "--workers".as_ref(),
        &fixture.path("workers.yaml"),
        "--from".as_ref(),
        "2025-09-01".as_ref(),
        "--to".as_ref(),
        "2025-09-07".as_ref(),
    ]);

    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("Date"));
    // header plus one row per day, Monday through Sunday
    assert_eq!(lines.len(), 8);
    assert!(lines[1].contains("2025-09-01"));
    assert!(lines[1].contains("8.0"));
    // Saturday has no coverage
    assert!(lines[6].contains("0.0"));
}

#[test]
fn capacity_rejects_inverted_range() {
    let fixture = Fixture::new();
    let (code, _, stderr) = run(&[
        "capacity".as_ref(),
        "--workers".as_ref(),
        &fixture.path("workers.yaml"),
        "--from".as_ref(),
        "2025-09-07".as_ref(),
        "--to".as_ref(),
        "2025-09-01".as_ref(),
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("after"));
}
