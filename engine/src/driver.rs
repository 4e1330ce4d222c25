//! Search drivers: the expansion loops and their terminal outcomes.
//!
//! Three operations share one node arena, frontier, and visited-set model:
//!
//! - [`shortest_path`] — minimizing best-first; terminal when a goal state
//!   is popped (with an admissible estimate this is A*, with the default
//!   zero estimate it is Dijkstra);
//! - [`flood_costs`] — no goal; exhausts the frontier and returns the best
//!   cost for every reachable canonical key;
//! - [`best_terminal`] — maximizing; states with no successors are terminal
//!   candidates and the highest-gain one wins.
//!
//! Every driver distinguishes three ways to stop: a solution, a normal
//! exhaustion with no solution, and a blown budget ("did not converge").
//! Only configuration mistakes and negative step costs are `Err`.

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{Arena, Node};
use crate::policy::SearchPolicy;
use crate::space::{Cost, SearchSpace, Step};
use crate::trace::{Expansion, NullObserver, Observer};
use crate::visited::Visited;

/// Which budget ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Expansions,
    Frontier,
}

/// Aggregate counters for one invocation, returned with every outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Live nodes popped and expanded.
    pub expansions: u64,
    /// Successors generated, before dedup.
    pub generated: u64,
    /// Successors dropped because a dominating cost was already recorded.
    pub suppressed: u64,
    /// Frontier entries discarded at pop time (lazy deletion).
    pub stale_skips: u64,
    /// Successors clipped by the depth cutoff.
    pub depth_clipped: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: u64,
    /// Distinct canonical keys discovered.
    pub distinct_keys: u64,
}

/// A goal (or best-terminal) state with its cost and reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    /// The terminal state.
    pub state: S,
    /// Accumulated cost (minimizing) or gain (maximizing).
    pub cost: Cost,
    /// States from a start to the terminal, inclusive.
    pub path: Vec<S>,
}

/// Terminal result of a driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S> {
    /// A popped state satisfied the goal predicate (or won the maximizing
    /// search).
    GoalFound(Solution<S>),
    /// The frontier emptied without reaching a goal. A normal result, not
    /// an error.
    Exhausted,
    /// A budget ran out first. Distinct from `Exhausted`: the state space
    /// was not fully explored and absence of a solution proves nothing.
    OutOfBudget(Budget),
}

impl<S> Outcome<S> {
    /// The solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            Outcome::GoalFound(solution) => Some(solution),
            _ => None,
        }
    }
}

/// A finished search: outcome plus counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRun<S> {
    pub outcome: Outcome<S>,
    pub stats: SearchStats,
}

/// Result of a [`flood_costs`] run: every reached canonical key with its
/// best cost, sorted by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flood<K> {
    pub costs: Vec<(K, Cost)>,
    /// `Some` if a budget cut the flood short; the cost map is then a
    /// lower bound on reachability, not the full closure.
    pub truncated: Option<Budget>,
    pub stats: SearchStats,
}

/// How the shared minimizing loop ended.
enum LoopEnd {
    Goal(usize),
    Empty,
    Blown(Budget),
}

/// Minimizing best-first search from `starts` to the first popped goal.
///
/// # Errors
///
/// [`SearchError::InvalidPolicy`] pre-flight, or
/// [`SearchError::NegativeStepCost`] if the space generates one.
pub fn shortest_path<W: SearchSpace>(
    space: &W,
    starts: &[W::State],
    policy: &SearchPolicy,
) -> Result<SearchRun<W::State>, SearchError> {
    shortest_path_observed(space, starts, policy, &mut NullObserver)
}

/// [`shortest_path`] with an [`Observer`] attached.
///
/// # Errors
///
/// Same as [`shortest_path`].
pub fn shortest_path_observed<W: SearchSpace>(
    space: &W,
    starts: &[W::State],
    policy: &SearchPolicy,
    observer: &mut impl Observer<W::State>,
) -> Result<SearchRun<W::State>, SearchError> {
    policy.validate()?;

    let mut arena = Arena::new();
    let mut visited = Visited::minimizing();
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();

    seed(space, starts, &mut arena, &mut visited, &mut frontier);

    let end = expand_min(
        space,
        policy,
        &mut arena,
        &mut visited,
        &mut frontier,
        &mut stats,
        true,
        observer,
    )?;

    finish_stats(&mut stats, &frontier, &visited);
    let outcome = match end {
        LoopEnd::Goal(index) => Outcome::GoalFound(solution_at(&arena, index)),
        LoopEnd::Empty => Outcome::Exhausted,
        LoopEnd::Blown(budget) => Outcome::OutOfBudget(budget),
    };
    Ok(SearchRun { outcome, stats })
}

/// Minimizing search with no goal: run to exhaustion and return the best
/// cost for every reachable canonical key.
///
/// # Errors
///
/// Same as [`shortest_path`].
pub fn flood_costs<W: SearchSpace>(
    space: &W,
    starts: &[W::State],
    policy: &SearchPolicy,
) -> Result<Flood<W::Key>, SearchError> {
    policy.validate()?;

    let mut arena = Arena::new();
    let mut visited = Visited::minimizing();
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();

    seed(space, starts, &mut arena, &mut visited, &mut frontier);

    let end = expand_min(
        space,
        policy,
        &mut arena,
        &mut visited,
        &mut frontier,
        &mut stats,
        false,
        &mut NullObserver,
    )?;

    finish_stats(&mut stats, &frontier, &visited);
    let truncated = match end {
        LoopEnd::Blown(budget) => Some(budget),
        LoopEnd::Empty => None,
        LoopEnd::Goal(_) => unreachable!("flood never consults the goal predicate"),
    };
    Ok(Flood {
        costs: visited.sorted_costs(),
        truncated,
        stats,
    })
}

/// Maximizing search: dominance keeps the higher gain per canonical key,
/// states with no successors are terminal candidates, and the best terminal
/// wins once the frontier is exhausted.
///
/// If the space provides a [`SearchSpace::gain_bound`], the driver orders
/// the frontier by optimistic completion value and stops early as soon as
/// no remaining entry can beat the best terminal found — without a bound
/// the search runs to exhaustion.
///
/// # Errors
///
/// Same as [`shortest_path`].
pub fn best_terminal<W: SearchSpace>(
    space: &W,
    starts: &[W::State],
    policy: &SearchPolicy,
) -> Result<SearchRun<W::State>, SearchError> {
    best_terminal_observed(space, starts, policy, &mut NullObserver)
}

/// [`best_terminal`] with an [`Observer`] attached.
///
/// # Errors
///
/// Same as [`shortest_path`].
#[allow(clippy::too_many_lines)]
pub fn best_terminal_observed<W: SearchSpace>(
    space: &W,
    starts: &[W::State],
    policy: &SearchPolicy,
    observer: &mut impl Observer<W::State>,
) -> Result<SearchRun<W::State>, SearchError> {
    policy.validate()?;

    let mut arena = Arena::new();
    let mut visited = Visited::maximizing();
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();
    let mut successors: Vec<Step<W::State>> = Vec::new();
    let mut best: Option<(usize, Cost)> = None;

    for start in starts {
        let key = space.canonical_key(start);
        if !visited.improves(&key, 0) {
            continue;
        }
        visited.record(key.clone(), 0);
        // One comparison direction serves both searches: maximizing runs
        // order the min-heap by negated optimistic completion value.
        let priority = space.gain_bound(start).unwrap_or(0);
        let index = arena.push(Node {
            state: start.clone(),
            key,
            parent: None,
            g: 0,
            depth: 0,
        });
        frontier.push(-priority, 0, index);
    }

    let blown = loop {
        let Some((popped, index)) = frontier.pop() else {
            break None;
        };

        let (g, depth, generated, suppressed_before);
        {
            let node = arena.get(index);
            if !visited.is_live(&node.key, node.g) {
                stats.stale_skips += 1;
                continue;
            }
            // Bound-prune: the frontier is ordered by optimistic completion
            // value, so once the best entry cannot beat the incumbent,
            // nothing can.
            if let (Some(bound), Some((_, incumbent))) = (space.gain_bound(&node.state), best) {
                if node.g.saturating_add(bound) <= incumbent {
                    break None;
                }
            }
            if stats.expansions >= policy.max_expansions {
                break Some(Budget::Expansions);
            }
            successors.clear();
            space.successors(&node.state, &mut successors);
            g = node.g;
            depth = node.depth;
            generated = successors.len();
            suppressed_before = stats.suppressed;
        }
        stats.expansions += 1;
        stats.generated += generated as u64;

        if successors.is_empty() {
            // Terminal state: a candidate for the maximizing answer.
            if best.map_or(true, |(_, incumbent)| g > incumbent) {
                best = Some((index, g));
            }
        }

        for step in successors.drain(..) {
            if step.cost < 0 {
                return Err(SearchError::NegativeStepCost { cost: step.cost });
            }
            let child_depth = depth + 1;
            if child_depth > policy.max_depth {
                stats.depth_clipped += 1;
                continue;
            }
            let child_g = g + step.cost;
            let child_key = space.canonical_key(&step.state);
            if !visited.improves(&child_key, child_g) {
                stats.suppressed += 1;
                continue;
            }
            visited.record(child_key.clone(), child_g);
            let priority = child_g.saturating_add(space.gain_bound(&step.state).unwrap_or(0));
            let child = arena.push(Node {
                state: step.state,
                key: child_key,
                parent: Some(index),
                g: child_g,
                depth: child_depth,
            });
            frontier.push(-priority, child_depth, child);
        }

        observer.expanded(
            &arena.get(index).state,
            &Expansion {
                seq: stats.expansions - 1,
                node: index,
                depth,
                g,
                f: popped.f,
                generated,
                suppressed: (stats.suppressed - suppressed_before) as usize,
            },
        );

        if frontier.len() as u64 > policy.max_frontier {
            break Some(Budget::Frontier);
        }
    };

    finish_stats(&mut stats, &frontier, &visited);
    let outcome = match (blown, best) {
        (Some(budget), _) => Outcome::OutOfBudget(budget),
        (None, Some((index, g))) => {
            observer.goal_found(&arena.get(index).state, g);
            Outcome::GoalFound(solution_at(&arena, index))
        }
        (None, None) => Outcome::Exhausted,
    };
    Ok(SearchRun { outcome, stats })
}

/// Seed arena, visited set, and frontier with the start states.
fn seed<W: SearchSpace>(
    space: &W,
    starts: &[W::State],
    arena: &mut Arena<W::State, W::Key>,
    visited: &mut Visited<W::Key>,
    frontier: &mut Frontier,
) {
    for start in starts {
        let key = space.canonical_key(start);
        if !visited.improves(&key, 0) {
            continue;
        }
        visited.record(key.clone(), 0);
        let estimate = space.estimate(start);
        let index = arena.push(Node {
            state: start.clone(),
            key,
            parent: None,
            g: 0,
            depth: 0,
        });
        frontier.push(estimate, 0, index);
    }
}

/// The shared minimizing loop. Pops until a goal (when `stop_at_goal`), an
/// empty frontier, or a blown budget.
#[allow(clippy::too_many_arguments)]
fn expand_min<W: SearchSpace>(
    space: &W,
    policy: &SearchPolicy,
    arena: &mut Arena<W::State, W::Key>,
    visited: &mut Visited<W::Key>,
    frontier: &mut Frontier,
    stats: &mut SearchStats,
    stop_at_goal: bool,
    observer: &mut impl Observer<W::State>,
) -> Result<LoopEnd, SearchError> {
    let mut successors: Vec<Step<W::State>> = Vec::new();

    loop {
        let Some((popped, index)) = frontier.pop() else {
            return Ok(LoopEnd::Empty);
        };

        let (g, depth, generated, suppressed_before);
        {
            let node = arena.get(index);
            if !visited.is_live(&node.key, node.g) {
                // Lazy deletion: a better route to this key was recorded
                // after this entry was pushed.
                stats.stale_skips += 1;
                continue;
            }
            if stop_at_goal && space.is_goal(&node.state) {
                observer.goal_found(&node.state, node.g);
                return Ok(LoopEnd::Goal(index));
            }
            if stats.expansions >= policy.max_expansions {
                return Ok(LoopEnd::Blown(Budget::Expansions));
            }
            successors.clear();
            space.successors(&node.state, &mut successors);
            g = node.g;
            depth = node.depth;
            generated = successors.len();
            suppressed_before = stats.suppressed;
        }
        stats.expansions += 1;
        stats.generated += generated as u64;

        for step in successors.drain(..) {
            if step.cost < 0 {
                return Err(SearchError::NegativeStepCost { cost: step.cost });
            }
            let child_depth = depth + 1;
            if child_depth > policy.max_depth {
                stats.depth_clipped += 1;
                continue;
            }
            let child_g = g + step.cost;
            let child_key = space.canonical_key(&step.state);
            if !visited.improves(&child_key, child_g) {
                stats.suppressed += 1;
                continue;
            }
            visited.record(child_key.clone(), child_g);
            let estimate = space.estimate(&step.state);
            let child = arena.push(Node {
                state: step.state,
                key: child_key,
                parent: Some(index),
                g: child_g,
                depth: child_depth,
            });
            frontier.push(child_g.saturating_add(estimate), child_depth, child);
        }

        observer.expanded(
            &arena.get(index).state,
            &Expansion {
                seq: stats.expansions - 1,
                node: index,
                depth,
                g,
                f: popped.f,
                generated,
                suppressed: (stats.suppressed - suppressed_before) as usize,
            },
        );

        if frontier.len() as u64 > policy.max_frontier {
            return Ok(LoopEnd::Blown(Budget::Frontier));
        }
    }
}

fn solution_at<S: Clone, K>(arena: &Arena<S, K>, index: usize) -> Solution<S> {
    let node = arena.get(index);
    Solution {
        state: node.state.clone(),
        cost: node.g,
        path: arena.path_to(index),
    }
}

fn finish_stats<K: Eq + std::hash::Hash + Clone>(
    stats: &mut SearchStats,
    frontier: &Frontier,
    visited: &Visited<K>,
) {
    stats.frontier_high_water = frontier.high_water();
    stats.distinct_keys = visited.len() as u64;
}
