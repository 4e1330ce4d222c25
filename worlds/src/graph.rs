//! Arena weighted digraph with index-based adjacency.
//!
//! Nodes live in a flat collection and edges refer to them by index — no
//! cyclic owning references anywhere. This is the decoded structure a
//! parser hands to the engine for edge-list puzzles, and also the
//! workbench for the conformance suite: small enough graphs admit a
//! brute-force all-paths oracle to compare driver answers against.

use pathwise_engine::space::{Cost, SearchSpace, Step};

/// Graph construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint does not name an existing node.
    UnknownNode { index: usize, nodes: usize },
    /// The heuristic table does not cover every node exactly once.
    HeuristicLengthMismatch { expected: usize, got: usize },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode { index, nodes } => {
                write!(f, "edge endpoint {index} out of range for {nodes} nodes")
            }
            Self::HeuristicLengthMismatch { expected, got } => {
                write!(f, "heuristic table has {got} entries, graph has {expected} nodes")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// A weighted digraph over nodes `0..n`.
#[derive(Debug, Clone, Default)]
pub struct ArenaGraph {
    adjacency: Vec<Vec<(usize, Cost)>>,
    heuristic: Option<Vec<Cost>>,
}

impl ArenaGraph {
    /// A graph with `nodes` nodes and no edges.
    #[must_use]
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
            heuristic: None,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Add a directed edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize, cost: Cost) -> Result<(), GraphError> {
        let nodes = self.node_count();
        for endpoint in [from, to] {
            if endpoint >= nodes {
                return Err(GraphError::UnknownNode {
                    index: endpoint,
                    nodes,
                });
            }
        }
        self.adjacency[from].push((to, cost));
        Ok(())
    }

    /// Attach a per-node remaining-cost estimate table.
    ///
    /// # Errors
    ///
    /// [`GraphError::HeuristicLengthMismatch`] unless the table has one
    /// entry per node.
    pub fn set_heuristic(&mut self, table: Vec<Cost>) -> Result<(), GraphError> {
        if table.len() != self.node_count() {
            return Err(GraphError::HeuristicLengthMismatch {
                expected: self.node_count(),
                got: table.len(),
            });
        }
        self.heuristic = Some(table);
        Ok(())
    }

    /// Outgoing edges of `node`.
    #[must_use]
    pub fn edges(&self, node: usize) -> &[(usize, Cost)] {
        &self.adjacency[node]
    }

    /// View this graph as a search space with `goal` as the target node.
    #[must_use]
    pub fn toward(&self, goal: usize) -> GraphSearch<'_> {
        GraphSearch { graph: self, goal }
    }

    /// Brute-force cheapest-path oracle: enumerate every simple path from
    /// `start` to `goal` and take the minimum cost. Exponential — for
    /// conformance checks on small graphs only.
    #[must_use]
    pub fn brute_force_cheapest(&self, start: usize, goal: usize) -> Option<Cost> {
        let mut on_path = vec![false; self.node_count()];
        self.cheapest_from(start, goal, &mut on_path)
    }

    fn cheapest_from(&self, node: usize, goal: usize, on_path: &mut Vec<bool>) -> Option<Cost> {
        if node == goal {
            return Some(0);
        }
        on_path[node] = true;
        let mut best: Option<Cost> = None;
        for &(next, cost) in &self.adjacency[node] {
            if on_path[next] {
                continue;
            }
            if let Some(rest) = self.cheapest_from(next, goal, on_path) {
                let total = cost + rest;
                if best.map_or(true, |b| total < b) {
                    best = Some(total);
                }
            }
        }
        on_path[node] = false;
        best
    }
}

/// An [`ArenaGraph`] bound to a goal node.
#[derive(Debug, Clone, Copy)]
pub struct GraphSearch<'a> {
    graph: &'a ArenaGraph,
    goal: usize,
}

impl SearchSpace for GraphSearch<'_> {
    type State = usize;
    type Key = usize;

    fn canonical_key(&self, state: &usize) -> usize {
        *state
    }

    fn successors(&self, state: &usize, out: &mut Vec<Step<usize>>) {
        for &(next, cost) in self.graph.edges(*state) {
            out.push(Step { state: next, cost });
        }
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }

    fn estimate(&self, state: &usize) -> Cost {
        self.graph
            .heuristic
            .as_ref()
            .map_or(0, |table| table[*state])
    }
}
