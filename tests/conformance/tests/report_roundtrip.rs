//! Run reports must survive a trip through the filesystem and reparse
//! into the same values the driver returned.

use std::fs;

use pathwise_engine::digest::{StateDigest, DOMAIN_PATH_STATE};
use pathwise_engine::driver::{flood_costs, shortest_path};
use pathwise_engine::policy::SearchPolicy;
use pathwise_engine::report::{flood_report, run_report};
use pathwise_worlds::grid::Position;
use pathwise_worlds::hill::HillMap;

const HILL_EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

fn fingerprint(pos: &Position) -> StateDigest {
    let mut bytes = Vec::with_capacity(8);
    bytes.extend_from_slice(&pos.row.to_le_bytes());
    bytes.extend_from_slice(&pos.col.to_le_bytes());
    StateDigest::of(DOMAIN_PATH_STATE, &bytes)
}

#[test]
fn run_report_round_trips_through_a_file() {
    let map = HillMap::parse(HILL_EXAMPLE).unwrap();
    let run = shortest_path(&map, &[map.start()], &SearchPolicy::default()).unwrap();
    let solution = run.outcome.solution().unwrap();

    let report = run_report(&run, fingerprint);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run_report.json");
    fs::write(&path, serde_json::to_string_pretty(&report).unwrap()).unwrap();

    let reparsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(reparsed["outcome"], "goal_found");
    assert_eq!(reparsed["cost"], 31);
    assert_eq!(
        reparsed["path"].as_array().unwrap().len(),
        solution.path.len()
    );
    assert_eq!(
        reparsed["path"][0].as_str().unwrap(),
        fingerprint(&solution.path[0]).as_str()
    );
    assert_eq!(
        reparsed["stats"]["expansions"].as_u64().unwrap(),
        run.stats.expansions
    );
}

#[test]
fn flood_report_round_trips_through_a_file() {
    let map = HillMap::parse(HILL_EXAMPLE).unwrap();
    let flood = flood_costs(&map, &[map.start()], &SearchPolicy::default()).unwrap();

    let report = flood_report(&flood, |pos| format!("r{}c{}", pos.row, pos.col));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flood_report.json");
    fs::write(&path, serde_json::to_string(&report).unwrap()).unwrap();

    let reparsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(
        reparsed["reached"].as_u64().unwrap() as usize,
        flood.costs.len()
    );
    assert!(reparsed["truncated"].is_null());
    // Every cell of the 5×8 example map is reachable from the start.
    assert_eq!(flood.costs.len(), 40);
}
