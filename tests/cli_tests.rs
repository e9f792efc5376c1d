//! Integration tests for the dsalgo CLI

mod support;

use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

use support::{dsalgo, stdout_json};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    dsalgo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: dsalgo"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("mst"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("sort"));
}

#[test]
fn test_version_flag() {
    dsalgo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dsalgo"));
}

// ============================================================================
// Demo
// ============================================================================

#[test]
fn test_demo_simple() {
    dsalgo()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph (simple)"))
        .stdout(predicate::str::contains(
            "Minimum spanning tree (total weight 9)\nA:\n  C 2\n  B 4\nC:\n  A 2\n  D 3\nB:\n  A 4\nD:\n  C 3\n",
        ))
        .stdout(predicate::str::contains(
            "Shortest paths from A\nA: A, 0\nB: A, 4\nC: A, 2\nD: C, 5\n",
        ));
}

#[test]
fn test_demo_cities() {
    dsalgo()
        .args(["demo", "cities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 3143"))
        .stdout(predicate::str::contains("Shortest paths from Dublin"))
        .stdout(predicate::str::contains("Paris: Dublin, 783"))
        .stdout(predicate::str::contains("Prague: Brussels, 1504"));
}

#[test]
fn test_demo_json() {
    let output = dsalgo()
        .args(["--format", "json", "demo"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["sample"], "simple");
    assert_eq!(report["graph"]["edges"].as_array().unwrap().len(), 4);
    assert_eq!(report["mst"]["total_weight"], 9);
    assert_eq!(report["paths"]["origin"], "A");
    assert_eq!(report["paths"]["entries"][3]["predecessor"], "C");
    assert_eq!(report["paths"]["entries"][3]["cost"], 5);
}

#[test]
fn test_demo_unknown_sample() {
    dsalgo().args(["demo", "atlas"]).assert().code(2);
}

// ============================================================================
// Minimum spanning tree
// ============================================================================

#[test]
fn test_mst_from_edges() {
    dsalgo()
        .args([
            "mst", "--edge", "A:B:1", "--edge", "B:C:2", "--edge", "A:C:5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A:\n  B 1\n"))
        .stdout(predicate::str::contains("Total weight: 3"))
        .stdout(predicate::str::contains("C 5").not());
}

#[test]
fn test_mst_frontier_strategy() {
    dsalgo()
        .args(["mst", "--sample", "cities", "--strategy", "frontier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: 3143"));
}

#[test]
fn test_mst_quiet_omits_summary() {
    dsalgo()
        .args(["-q", "mst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight").not());
}

#[test]
fn test_mst_json() {
    let output = dsalgo()
        .args(["--format", "json", "mst", "--sample", "cities"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["strategy"], "reference");
    assert_eq!(report["tree"]["total_weight"], 3143);
    assert_eq!(report["tree"]["edges"].as_array().unwrap().len(), 6);
}

#[test]
fn test_mst_edge_to_unlisted_vertex() {
    dsalgo()
        .args(["mst", "--vertex", "A", "--vertex", "B", "--edge", "A:Z:3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Z"));
}

#[test]
fn test_mst_malformed_edge_is_usage_error() {
    dsalgo().args(["mst", "--edge", "A-B"]).assert().code(2);
    dsalgo().args(["mst", "--edge", "A:B:-4"]).assert().code(2);
}

#[test]
fn test_malformed_edge_json_envelope() {
    dsalgo()
        .args(["--format", "json", "mst", "--edge", "A-B"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("\"usage_error\""))
        .stderr(predicate::str::contains("expected A:B:WEIGHT"));
}

#[test]
fn test_mst_sample_conflicts_with_edges() {
    dsalgo()
        .args(["mst", "--sample", "simple", "--edge", "A:B:1"])
        .assert()
        .code(2);
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_paths_default_origin() {
    dsalgo()
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest paths from A"))
        .stdout(predicate::str::contains("D: C, 5"));
}

#[test]
fn test_paths_from_other_vertex() {
    dsalgo()
        .args(["paths", "--from", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A: C, 5\nB: A, 9\nC: D, 3\nD: D, 0\n",
        ));
}

#[test]
fn test_paths_route() {
    dsalgo()
        .args([
            "paths", "--sample", "cities", "--from", "Dublin", "--to", "Prague",
        ])
        .assert()
        .success()
        .stdout("Dublin -> London -> Brussels -> Prague (1504)\n");
}

#[test]
fn test_paths_unreachable_vertex() {
    dsalgo()
        .args([
            "paths", "--vertex", "A", "--vertex", "B", "--vertex", "C", "--edge", "A:B:2",
            "--from", "A",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("C: none, unreachable"));

    dsalgo()
        .args([
            "paths", "--vertex", "A", "--vertex", "C", "--edge", "A:A:1", "--to", "C",
        ])
        .assert()
        .success()
        .stdout("C is unreachable from A\n");
}

#[test]
fn test_paths_missing_origin() {
    dsalgo()
        .args(["paths", "--from", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Z"));
}

#[test]
fn test_paths_missing_origin_json() {
    dsalgo()
        .args(["--format", "json", "paths", "--from", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"vertex_not_found\""));
}

#[test]
fn test_paths_route_json() {
    let output = dsalgo()
        .args(["--format", "json", "paths", "--to", "D"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["from"], "A");
    assert_eq!(report["route"], serde_json::json!(["A", "C", "D"]));
    assert_eq!(report["cost"], 5);
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_sort() {
    dsalgo()
        .args(["sort", "5", "-2", "9", "0", "5"])
        .assert()
        .success()
        .stdout("-2 0 5 5 9\n");
}

#[test]
fn test_sort_requires_values() {
    dsalgo().arg("sort").assert().code(2);
}

#[test]
fn test_sort_json() {
    let output = dsalgo()
        .args(["--format=json", "sort", "3", "1", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["sorted"], serde_json::json!([1, 2, 3]));
}

// ============================================================================
// Configuration and logging
// ============================================================================

#[test]
fn test_config_file_sets_format_and_strategy() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "version = 1\n\n[mst]\nstrategy = \"frontier\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = dsalgo()
        .arg("--config")
        .arg(&path)
        .arg("mst")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["strategy"], "frontier");
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("dsalgo");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "version = 1\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = dsalgo()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["sort", "2", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["sorted"], serde_json::json!([1, 2]));
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "version = 1\n\n[output]\nformat = \"json\"\n").unwrap();

    dsalgo()
        .env("DSALGO_CONFIG", &path)
        .args(["--format", "human", "sort", "2", "1"])
        .assert()
        .success()
        .stdout("1 2\n");
}

#[test]
fn test_config_with_unknown_version() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "version = 7\n").unwrap();

    dsalgo()
        .arg("--config")
        .arg(&path)
        .args(["sort", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config version: 7"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    dsalgo()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["sort", "1"])
        .assert()
        .code(1);
}

#[test]
fn test_verbose_logs_timings_to_stderr() {
    dsalgo()
        .args(["--verbose", "sort", "3", "1"])
        .assert()
        .success()
        .stdout("1 3\n")
        .stderr(predicate::str::contains("heap_sort"));
}

#[test]
fn test_log_json() {
    dsalgo()
        .args(["--log-level", "debug", "--log-json", "mst"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"elapsed\""));
}
