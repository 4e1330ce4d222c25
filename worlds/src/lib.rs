//! Pathwise worlds: the domains that exercise the engine.
//!
//! Each module is one puzzle family from the archive, rebuilt as a
//! [`pathwise_engine::space::SearchSpace`] instantiation plus the parser
//! for its text input. The engine stays domain-blind; everything a domain
//! knows — movement rules, resource recipes, automaton evolution — lives
//! here.
//!
//! - [`grid`] — shared 2-D grid, positions, and headings
//! - [`graph`] — arena weighted digraph with index adjacency
//! - [`hill`] — elevation-grid climb (uniform cost, admissible estimate)
//! - [`crucible`] — inertia-constrained weighted grid walk
//! - [`basin`] — walk through an evolving cellular automaton
//! - [`factory`] — robot-blueprint resource maximization

#![forbid(unsafe_code)]

pub mod basin;
pub mod crucible;
pub mod factory;
pub mod graph;
pub mod grid;
pub mod hill;
