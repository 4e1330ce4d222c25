//! JSON rendering of a finished run.
//!
//! The engine returns plain values; callers that want an inspectable
//! artifact — golden files, debugging dumps — render one here. Path states
//! appear as content digests so the artifact shape is independent of the
//! domain's state type.

use serde_json::{json, Value};

use crate::digest::StateDigest;
use crate::driver::{Budget, Flood, Outcome, SearchRun, SearchStats};

/// Render a [`SearchRun`] as a JSON value.
///
/// `fingerprint` maps each path state to its digest; it is only invoked
/// when the run carries a solution.
pub fn run_report<S>(run: &SearchRun<S>, fingerprint: impl Fn(&S) -> StateDigest) -> Value {
    let mut report = json!({
        "outcome": outcome_tag(&run.outcome),
        "stats": stats_json(&run.stats),
    });

    match &run.outcome {
        Outcome::GoalFound(solution) => {
            let path: Vec<Value> = solution
                .path
                .iter()
                .map(|state| Value::String(fingerprint(state).as_str().to_string()))
                .collect();
            report["cost"] = json!(solution.cost);
            report["path"] = Value::Array(path);
        }
        Outcome::OutOfBudget(budget) => {
            report["budget"] = Value::String(budget_tag(*budget).to_string());
        }
        Outcome::Exhausted => {}
    }

    report
}

/// Render a [`Flood`] as a JSON value. Keys are rendered through `label`
/// (domains choose how a canonical key prints).
pub fn flood_report<K>(flood: &Flood<K>, label: impl Fn(&K) -> String) -> Value {
    let costs: Vec<Value> = flood
        .costs
        .iter()
        .map(|(key, cost)| json!({ "key": label(key), "cost": cost }))
        .collect();
    json!({
        "reached": costs.len(),
        "truncated": flood.truncated.map(budget_tag),
        "costs": costs,
        "stats": stats_json(&flood.stats),
    })
}

fn outcome_tag<S>(outcome: &Outcome<S>) -> &'static str {
    match outcome {
        Outcome::GoalFound(_) => "goal_found",
        Outcome::Exhausted => "exhausted",
        Outcome::OutOfBudget(_) => "out_of_budget",
    }
}

fn budget_tag(budget: Budget) -> &'static str {
    match budget {
        Budget::Expansions => "expansions",
        Budget::Frontier => "frontier",
    }
}

fn stats_json(stats: &SearchStats) -> Value {
    json!({
        "expansions": stats.expansions,
        "generated": stats.generated,
        "suppressed": stats.suppressed,
        "stale_skips": stats.stale_skips,
        "depth_clipped": stats.depth_clipped,
        "frontier_high_water": stats.frontier_high_water,
        "distinct_keys": stats.distinct_keys,
    })
}
