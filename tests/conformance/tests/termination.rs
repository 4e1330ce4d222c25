//! The three ways to stop must stay distinguishable: solved, exhausted,
//! and out of budget — plus hard errors for configurations that could
//! never search at all.

use conformance_tests::{disconnected, fixtures};
use pathwise_engine::driver::{shortest_path, Budget, Outcome};
use pathwise_engine::error::SearchError;
use pathwise_engine::policy::SearchPolicy;
use pathwise_worlds::hill::HillMap;

#[test]
fn zero_budget_policy_is_a_preflight_error() {
    let fixture = disconnected();
    let policy = SearchPolicy {
        max_expansions: 0,
        ..SearchPolicy::default()
    };
    let err = shortest_path(&fixture.graph.toward(fixture.goal), &[fixture.start], &policy)
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidPolicy { .. }));
}

#[test]
fn tight_expansion_budget_reports_out_of_budget_not_exhausted() {
    let suite = fixtures();
    let fixture = &suite[2];
    assert_eq!(fixture.name, "lattice");

    let policy = SearchPolicy {
        max_expansions: 2,
        ..SearchPolicy::default()
    };
    let run = shortest_path(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &policy,
    )
    .unwrap();
    assert_eq!(run.outcome, Outcome::OutOfBudget(Budget::Expansions));
}

#[test]
fn tight_frontier_budget_reports_its_own_budget() {
    let map = HillMap::parse("Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi").unwrap();
    let policy = SearchPolicy {
        max_frontier: 2,
        ..SearchPolicy::default()
    };
    let run = shortest_path(&map, &[map.start()], &policy).unwrap();
    assert_eq!(run.outcome, Outcome::OutOfBudget(Budget::Frontier));
}

#[test]
fn generous_budget_solves_what_tight_budget_could_not() {
    let suite = fixtures();
    let fixture = &suite[2];

    let tight = SearchPolicy {
        max_expansions: 2,
        ..SearchPolicy::default()
    };
    let generous = SearchPolicy::default();

    let starved = shortest_path(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &tight,
    )
    .unwrap();
    let solved = shortest_path(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &generous,
    )
    .unwrap();

    assert!(matches!(starved.outcome, Outcome::OutOfBudget(_)));
    assert!(solved.outcome.solution().is_some());
}

#[test]
fn depth_cutoff_clips_but_still_terminates_normally() {
    let suite = fixtures();
    let fixture = &suite[0];
    assert_eq!(fixture.name, "corridor");

    let policy = SearchPolicy {
        max_depth: 2,
        ..SearchPolicy::default()
    };
    let run = shortest_path(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &policy,
    )
    .unwrap();
    // The goal sits at depth 5, beyond the cutoff.
    assert_eq!(run.outcome, Outcome::Exhausted);
    assert!(run.stats.depth_clipped > 0, "clipping must be visible in stats");
}

#[test]
fn determinism_covers_cost_path_and_stats() {
    for fixture in fixtures() {
        let first = shortest_path(
            &fixture.graph.toward(fixture.goal),
            &[fixture.start],
            &SearchPolicy::default(),
        )
        .unwrap();
        let second = shortest_path(
            &fixture.graph.toward(fixture.goal),
            &[fixture.start],
            &SearchPolicy::default(),
        )
        .unwrap();
        assert_eq!(first, second, "fixture {} must replay identically", fixture.name);
    }
}
