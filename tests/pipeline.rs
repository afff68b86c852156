//! End-to-end pipeline tests: dump file in, artifacts out.

use pretty_assertions::assert_eq;
use repo_minify::export::save_all::{GRAPHML_FILE, JSON_FILE, STATS_FILE, TEXT_FILE};
use repo_minify::{Error, run::run};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SAMPLE_DUMP: &str = "\
File: sample.py
import json
class Widget:
    def render(self):
        pass
================
";

fn write_dump(dir: &Path, text: &str) -> std::path::PathBuf {
    let input = dir.join("dump.txt");
    fs::write(&input, text).unwrap();
    input
}

#[test]
fn sample_dump_produces_expected_graph_and_artifacts() {
    let dir = tempdir().unwrap();
    let input = write_dump(dir.path(), SAMPLE_DUMP);
    let out = dir.path().join("out");

    let report = run(&input, &out).unwrap();
    assert_eq!(report.units, 1);
    assert_eq!(report.nodes, 4);
    assert_eq!(report.edges, 3);

    for name in [GRAPHML_FILE, JSON_FILE, STATS_FILE, TEXT_FILE] {
        assert!(out.join(name).is_file(), "missing artifact {name}");
    }

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join(JSON_FILE)).unwrap()).unwrap();
    let ids: Vec<&str> = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"sample"));
    assert!(ids.contains(&"json"));
    assert!(ids.contains(&"sample.Widget"));
    assert!(ids.contains(&"sample.render"));
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);

    let stats: serde_json::Value =
        serde_yml::from_str(&fs::read_to_string(out.join(STATS_FILE)).unwrap()).unwrap();
    assert_eq!(stats["total_nodes"], 4);
    assert_eq!(stats["total_edges"], 3);
    assert_eq!(stats["node_types"]["module"], 1);
    assert_eq!(stats["node_types"]["class"], 1);
    assert_eq!(stats["node_types"]["function"], 1);
    assert_eq!(stats["node_types"]["import"], 1);

    let summary = fs::read_to_string(out.join(TEXT_FILE)).unwrap();
    assert!(summary.contains("### Module: sample"));
    assert!(summary.contains("Path: sample.py"));
    assert!(summary.contains("- json"));
    assert!(summary.contains("- Widget"));
    assert!(summary.contains("- render"));
}

#[test]
fn headerless_dump_yields_empty_graph_not_an_error() {
    let dir = tempdir().unwrap();
    let input = write_dump(dir.path(), "no headers here\njust text\n");
    let out = dir.path().join("out");

    let report = run(&input, &out).unwrap();
    assert_eq!(report.units, 0);
    assert_eq!(report.nodes, 0);
    assert_eq!(report.edges, 0);

    let stats: serde_json::Value =
        serde_yml::from_str(&fs::read_to_string(out.join(STATS_FILE)).unwrap()).unwrap();
    assert_eq!(stats["total_nodes"], 0);
    assert_eq!(stats["node_types"]["module"], 0);
}

#[test]
fn identical_input_produces_byte_identical_artifacts() {
    let dir = tempdir().unwrap();
    let input = write_dump(dir.path(), SAMPLE_DUMP);
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");

    run(&input, &out_a).unwrap();
    run(&input, &out_b).unwrap();

    for name in [GRAPHML_FILE, JSON_FILE, STATS_FILE, TEXT_FILE] {
        let a = fs::read(out_a.join(name)).unwrap();
        let b = fs::read(out_b.join(name)).unwrap();
        assert_eq!(a, b, "artifact {name} differs between runs");
    }
}

#[test]
fn missing_input_reports_file_access_with_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = run(&missing, &dir.path().join("out")).unwrap_err();
    match err {
        Error::FileAccess { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
