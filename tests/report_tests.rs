//! Report and trace wire-shape tests

use std::fs;

use puyo_chain::core::{resolve_chain, ChainResolver, Grid, NoopObserver};
use puyo_chain::report::{
    load_score_table, parse_moves, run_session, ChainReport, ChainTraceLog, SessionReport,
};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("puyo-chain-{}-{}", std::process::id(), name))
}

#[test]
fn chain_report_json_shape() {
    let grid = Grid::parse("R....B\nR....B\nR....B\nR....B").unwrap();
    let report = ChainReport::from(&resolve_chain(grid));
    let json = serde_json::to_string(&report).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["chain_count"], 1);
    assert_eq!(v["total_score"], 560 + 2100);
    assert_eq!(v["all_clear"], true);
    assert_eq!(v["all_clear_bonus"], 2100);
    assert_eq!(v["steps"][0]["groups"][0]["color"], "red");
    assert_eq!(v["steps"][0]["groups"][1]["color"], "blue");
    assert_eq!(v["steps"][0]["groups"][0]["positions"].as_array().unwrap().len(), 4);
    assert_eq!(v["board"]["width"], 6);
    assert_eq!(v["board"]["rows"].as_array().unwrap().len(), 12);

    // Reports read back
    let back: ChainReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn session_report_json_shape() {
    let moves = parse_moves("0:north,0:north,4:east").unwrap();
    let report = run_session(3, 1, Default::default(), &moves, &mut NoopObserver).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["seed"], 3);
    assert_eq!(v["colors"], 1);
    assert_eq!(v["pieces"], 3);
    assert_eq!(v["moves"][1]["chain_count"], 1);
    assert_eq!(v["moves"][2]["rotation"], "east");
    assert_eq!(v["moves"][2]["axis"], "red");
    assert_eq!(v["game_over"], false);
    assert_eq!(v["board"]["rows"][11], "....RR");

    let back: SessionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn score_table_file_round_trip() {
    let path = temp_path("score.json");
    fs::write(&path, r#"{"chain_bonus": [0, 4, 12], "all_clear_bonus": 1000}"#).unwrap();
    let table = load_score_table(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(table.chain_bonus(2), 12);
    assert_eq!(table.chain_bonus(9), 12);
    assert_eq!(table.all_clear_bonus, 1000);

    assert!(load_score_table(temp_path("missing.json")).is_err());
}

#[test]
fn trace_log_file_has_one_record_per_line() {
    let path = temp_path("trace.jsonl");
    let _ = fs::remove_file(&path);
    {
        let mut trace = ChainTraceLog::open(&path).unwrap();
        let grid = Grid::parse("B.....\nR.....\nR.....\nR.....\nRBBB..").unwrap();
        ChainResolver::default().resolve_with(grid, &mut trace);
    }
    let text = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    let types: Vec<String> = text
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            v["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(types, vec!["step", "step", "all_clear", "finish"]);
}
