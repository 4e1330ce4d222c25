//! Driver answers must match a brute-force all-paths oracle on graphs
//! small enough to enumerate.

use conformance_tests::{disconnected, fixtures};
use pathwise_engine::driver::{flood_costs, shortest_path, Outcome};
use pathwise_engine::policy::SearchPolicy;

#[test]
fn driver_agrees_with_brute_force_on_every_fixture() {
    for fixture in fixtures() {
        let oracle = fixture
            .graph
            .brute_force_cheapest(fixture.start, fixture.goal)
            .unwrap_or_else(|| panic!("fixture {} should be solvable", fixture.name));
        let run = shortest_path(
            &fixture.graph.toward(fixture.goal),
            &[fixture.start],
            &SearchPolicy::default(),
        )
        .unwrap();
        let solution = run
            .outcome
            .solution()
            .unwrap_or_else(|| panic!("fixture {} should solve", fixture.name));
        assert_eq!(solution.cost, oracle, "wrong cost on fixture {}", fixture.name);
    }
}

#[test]
fn corridor_costs_five() {
    let suite = fixtures();
    let fixture = &suite[0];
    assert_eq!(fixture.name, "corridor");
    let run = shortest_path(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(run.outcome.solution().unwrap().cost, 5);
}

#[test]
fn shorter_of_two_routes_wins() {
    let suite = fixtures();
    let fixture = &suite[1];
    assert_eq!(fixture.name, "two_routes");
    let run = shortest_path(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &SearchPolicy::default(),
    )
    .unwrap();
    let solution = run.outcome.solution().unwrap();
    assert_eq!(solution.cost, 3, "the three-step route must win over the five-step one");
    assert_eq!(solution.path, vec![0, 5, 7, 6]);
}

#[test]
fn disconnected_goal_exhausts_with_finite_stats() {
    let fixture = disconnected();
    let run = shortest_path(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(run.outcome, Outcome::Exhausted);
    assert!(run.stats.expansions <= 4, "tiny component must stay tiny");
}

#[test]
fn flood_covers_exactly_the_reachable_component() {
    let fixture = disconnected();
    let flood = flood_costs(
        &fixture.graph.toward(fixture.goal),
        &[fixture.start],
        &SearchPolicy::default(),
    )
    .unwrap();
    // Only nodes 0 and 1 are reachable from the start.
    assert_eq!(flood.costs, vec![(0, 0), (1, 1)]);
    assert_eq!(flood.truncated, None);
}

#[test]
fn paths_replay_their_reported_cost() {
    // The reconstructed path must itself cost what the driver claims.
    for fixture in fixtures() {
        let run = shortest_path(
            &fixture.graph.toward(fixture.goal),
            &[fixture.start],
            &SearchPolicy::default(),
        )
        .unwrap();
        let solution = run.outcome.solution().unwrap();

        let mut replayed = 0;
        for pair in solution.path.windows(2) {
            let cost = fixture
                .graph
                .edges(pair[0])
                .iter()
                .filter(|&&(to, _)| to == pair[1])
                .map(|&(_, cost)| cost)
                .min()
                .unwrap_or_else(|| panic!("path edge {}→{} missing", pair[0], pair[1]));
            replayed += cost;
        }
        assert_eq!(replayed, solution.cost, "fixture {}", fixture.name);
    }
}
