//! The domain contract: what a state space must provide to be searched.

use std::hash::Hash;

/// Accumulated path cost or score. Integer on purpose: every puzzle domain
/// in scope has integral step costs, and integer ordering keeps frontier
/// comparisons total and reproducible.
pub type Cost = i64;

/// One candidate transition out of a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S> {
    /// The successor state.
    pub state: S,
    /// Non-negative step cost (minimizing searches) or step gain
    /// (maximizing searches). Negative values fail the search fast.
    pub cost: Cost,
}

/// A searchable state space.
///
/// Implementations must be pure with respect to search state: `successors`
/// and `canonical_key` may read static domain configuration (the grid, the
/// cost tables) but must not mutate anything shared between calls. All
/// search bookkeeping — frontier, visited set, node arena — is owned by the
/// driver invocation, never by the space.
///
/// # Contract
///
/// - `successors` must enforce domain constraints at generation time: no
///   out-of-bounds moves, no negative resource counts. An empty output is a
///   dead end, which the driver treats as normal, not as a failure.
/// - Enumeration must be deterministic: same state → same steps in the same
///   order.
/// - Two states with equal canonical keys must be interchangeable for
///   pruning purposes; only the better-cost one stays live.
pub trait SearchSpace {
    /// A snapshot of a search position. Cloned into the node arena; keep it
    /// cheap to copy or copy-on-write.
    type State: Clone;

    /// Canonical identity of a state, used for dedup. `Ord` is required so
    /// reachable-set output can be emitted in a deterministic order at
    /// serialization boundaries.
    type Key: Clone + Eq + Hash + Ord;

    /// The canonical key of `state`.
    fn canonical_key(&self, state: &Self::State) -> Self::Key;

    /// Append every legal transition out of `state` to `out`.
    ///
    /// `out` is cleared by the driver before each call; appending to it
    /// (rather than returning a fresh `Vec`) lets the hot loop reuse one
    /// allocation.
    fn successors(&self, state: &Self::State, out: &mut Vec<Step<Self::State>>);

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Admissible estimate of the remaining cost to a goal, for informed
    /// (A*-style) shortest-path search. Must never overestimate the true
    /// remaining cost, or optimality is silently lost — the conformance
    /// suite checks this per world, the driver does not.
    ///
    /// The default of `0` degrades gracefully to plain Dijkstra ordering.
    fn estimate(&self, state: &Self::State) -> Cost {
        let _ = state;
        0
    }

    /// Optimistic upper bound on the gain still attainable from `state`,
    /// for maximizing ([`crate::driver::best_terminal`]) searches.
    ///
    /// `Some(b)` enables bound pruning: the driver stops as soon as no
    /// frontier entry can beat the best terminal found. The bound must
    /// never underestimate the attainable remaining gain. `None` (the
    /// default) disables pruning and the search runs to exhaustion.
    fn gain_bound(&self, state: &Self::State) -> Option<Cost> {
        let _ = state;
        None
    }
}

/// Shared references search the same space, so wrappers and drivers can
/// borrow a domain without taking it.
impl<W: SearchSpace + ?Sized> SearchSpace for &W {
    type State = W::State;
    type Key = W::Key;

    fn canonical_key(&self, state: &Self::State) -> Self::Key {
        (**self).canonical_key(state)
    }

    fn successors(&self, state: &Self::State, out: &mut Vec<Step<Self::State>>) {
        (**self).successors(state, out);
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn estimate(&self, state: &Self::State) -> Cost {
        (**self).estimate(state)
    }

    fn gain_bound(&self, state: &Self::State) -> Option<Cost> {
        (**self).gain_bound(state)
    }
}
