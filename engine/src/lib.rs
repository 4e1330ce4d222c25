//! Pathwise engine: deterministic best-first search over caller-defined
//! state spaces.
//!
//! This crate is the reusable core that the puzzle worlds instantiate. It
//! knows nothing about grids, valves, or robots — domains plug in through
//! the [`space::SearchSpace`] contract and get back plain values.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathwise_engine  ←  pathwise_worlds  ←  conformance-tests, benchmarks
//! (drivers, frontier)  (grids, graphs,      (properties, goldens,
//!                       blueprints)          criterion)
//! ```
//!
//! # Key pieces
//!
//! - [`space::SearchSpace`] — the domain contract: states, canonical keys,
//!   successor generation, goal predicate, cost estimates
//! - [`driver`] — the three search operations: [`driver::shortest_path`],
//!   [`driver::flood_costs`], [`driver::best_terminal`]
//! - [`frontier::Frontier`] — min-heap with lazy deletion and a high-water mark
//! - [`visited::Visited`] — canonical-key → best-cost dedup map
//! - [`policy::SearchPolicy`] — per-invocation budgets, validated pre-flight
//! - [`trace::Observer`] — expansion/goal hooks, decoupled from control flow
//! - [`report`] — JSON rendering of a finished run for inspection and goldens

#![forbid(unsafe_code)]

pub mod digest;
pub mod driver;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod space;
pub mod trace;
pub mod visited;
