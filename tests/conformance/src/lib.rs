//! Shared fixtures and wrappers for the conformance suites.

#![forbid(unsafe_code)]

use pathwise_engine::space::{Cost, SearchSpace, Step};
use pathwise_worlds::graph::ArenaGraph;

/// Wrap a space and discard its remaining-cost estimate, turning any
/// A*-style search into plain Dijkstra ordering for comparison runs.
pub struct NoEstimate<W>(pub W);

impl<W: SearchSpace> SearchSpace for NoEstimate<W> {
    type State = W::State;
    type Key = W::Key;

    fn canonical_key(&self, state: &Self::State) -> Self::Key {
        self.0.canonical_key(state)
    }

    fn successors(&self, state: &Self::State, out: &mut Vec<Step<Self::State>>) {
        self.0.successors(state, out);
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.0.is_goal(state)
    }

    // estimate: default zero.
}

/// Wrap a space and discard its gain bound, turning a pruned maximizing
/// search into an exhaustive one for comparison runs.
pub struct NoBound<W>(pub W);

impl<W: SearchSpace> SearchSpace for NoBound<W> {
    type State = W::State;
    type Key = W::Key;

    fn canonical_key(&self, state: &Self::State) -> Self::Key {
        self.0.canonical_key(state)
    }

    fn successors(&self, state: &Self::State, out: &mut Vec<Step<Self::State>>) {
        self.0.successors(state, out);
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.0.is_goal(state)
    }

    // gain_bound: default None.
}

/// A small graph fixture with chosen start and goal nodes.
pub struct Fixture {
    pub name: &'static str,
    pub graph: ArenaGraph,
    pub start: usize,
    pub goal: usize,
}

/// Small weighted digraphs for brute-force agreement checks. Every fixture
/// is acyclic or simple enough that the all-paths oracle stays fast.
///
/// # Panics
///
/// Panics if a fixture wires an edge to a nonexistent node, which is a bug
/// in the fixture itself.
#[must_use]
pub fn fixtures() -> Vec<Fixture> {
    let mut suite = Vec::new();

    // A straight five-edge corridor.
    let mut corridor = ArenaGraph::with_nodes(6);
    for i in 0..5 {
        corridor.add_edge(i, i + 1, 1).unwrap();
    }
    suite.push(Fixture {
        name: "corridor",
        graph: corridor,
        start: 0,
        goal: 5,
    });

    // Two routes between the same endpoints: five unit steps one way,
    // three the other.
    let mut two_routes = ArenaGraph::with_nodes(8);
    for (from, to) in [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 6),
        (0, 5),
        (5, 7),
        (7, 6),
    ] {
        two_routes.add_edge(from, to, 1).unwrap();
    }
    suite.push(Fixture {
        name: "two_routes",
        graph: two_routes,
        start: 0,
        goal: 6,
    });

    // A dense diamond lattice with uneven weights.
    let mut lattice = ArenaGraph::with_nodes(8);
    for (from, to, cost) in [
        (0, 1, 4),
        (0, 2, 1),
        (1, 3, 1),
        (2, 3, 5),
        (1, 4, 7),
        (2, 5, 2),
        (3, 6, 1),
        (4, 6, 1),
        (5, 6, 8),
        (5, 3, 1),
        (6, 7, 2),
        (4, 7, 9),
    ] {
        lattice.add_edge(from, to, cost).unwrap();
    }
    suite.push(Fixture {
        name: "lattice",
        graph: lattice,
        start: 0,
        goal: 7,
    });

    // Zero-cost edges mixed in: still non-negative, still optimal.
    let mut freebies = ArenaGraph::with_nodes(5);
    for (from, to, cost) in [(0, 1, 0), (1, 2, 3), (0, 3, 2), (3, 2, 0), (2, 4, 1)] {
        freebies.add_edge(from, to, cost).unwrap();
    }
    suite.push(Fixture {
        name: "freebies",
        graph: freebies,
        start: 0,
        goal: 4,
    });

    suite
}

/// A graph whose goal node is disconnected from the start.
///
/// # Panics
///
/// Panics if the fixture wires an edge to a nonexistent node.
#[must_use]
pub fn disconnected() -> Fixture {
    let mut graph = ArenaGraph::with_nodes(4);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 0, 1).unwrap();
    graph.add_edge(3, 2, 1).unwrap();
    Fixture {
        name: "disconnected",
        graph,
        start: 0,
        goal: 2,
    }
}

/// An exact heuristic table for `goal`: the true remaining cost per node,
/// taken from the brute-force oracle. Nodes that cannot reach the goal get
/// zero, which is trivially admissible.
#[must_use]
pub fn exact_heuristic(graph: &ArenaGraph, goal: usize) -> Vec<Cost> {
    (0..graph.node_count())
        .map(|node| graph.brute_force_cheapest(node, goal).unwrap_or(0))
        .collect()
}
