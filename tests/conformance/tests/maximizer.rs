//! The maximizing driver's bound pruning must never change an answer,
//! only the work done to reach it.

use conformance_tests::NoBound;
use pathwise_engine::driver::best_terminal;
use pathwise_engine::policy::SearchPolicy;
use pathwise_worlds::factory::{parse_blueprints, FactoryWorld};

const EXAMPLE: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. \
Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. \
Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.";

#[test]
fn bound_pruning_preserves_the_exact_answer() {
    // A shortened shift keeps the exhaustive run cheap; the pruned and
    // unpruned searches must land on the same geode count.
    for blueprint in parse_blueprints(EXAMPLE).unwrap() {
        let world = FactoryWorld::new(blueprint, 18);
        let starts = [world.opening()];

        let pruned = best_terminal(&world, &starts, &SearchPolicy::default()).unwrap();
        let exhaustive = best_terminal(&NoBound(&world), &starts, &SearchPolicy::default()).unwrap();

        assert_eq!(
            pruned.outcome.solution().unwrap().cost,
            exhaustive.outcome.solution().unwrap().cost,
            "blueprint {} pruning changed the answer",
            blueprint.id
        );
        assert!(
            pruned.stats.expansions <= exhaustive.stats.expansions,
            "blueprint {} pruning did not reduce work",
            blueprint.id
        );
    }
}

#[test]
fn independent_blueprint_searches_share_nothing() {
    // One search per blueprint, each with its own frontier and visited
    // set; interleaving them cannot change their answers.
    let blueprints = parse_blueprints(EXAMPLE).unwrap();
    let worlds: Vec<FactoryWorld> = blueprints
        .iter()
        .map(|&blueprint| FactoryWorld::new(blueprint, 12))
        .collect();

    let solo: Vec<i64> = worlds
        .iter()
        .map(|world| {
            best_terminal(world, &[world.opening()], &SearchPolicy::default())
                .unwrap()
                .outcome
                .solution()
                .unwrap()
                .cost
        })
        .collect();

    let replayed: Vec<i64> = worlds
        .iter()
        .map(|world| {
            best_terminal(world, &[world.opening()], &SearchPolicy::default())
                .unwrap()
                .outcome
                .solution()
                .unwrap()
                .cost
        })
        .collect();

    assert_eq!(solo, replayed);
}
