//! Generalized graph search algorithms.
//!
//! To use these search algorithms, implement [SearchProblem], which
//! provides a start state, a goal test and the successors of a state.
//! Each algorithm returns the sequence of actions leading to a goal,
//! which is empty when no goal can be reached.
//!
//! - [dfs] and [bfs] are uninformed, and ignore transition costs.
//! - [ucs] finds the cheapest path.
//! - [astar] finds the cheapest path using a [Heuristic] to explore
//!   fewer states.

pub mod algorithm;
mod errors;
pub mod frontier;
mod registry;
mod replay;
mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use registry::Algorithm;
pub use replay::replay;
pub use traits::null_heuristic;
pub use traits::Cost;
pub use traits::Heuristic;
pub use traits::NullHeuristic;
pub use traits::SearchProblem;
pub use traits::Successor;

pub use algorithm::astar::astar;
pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::ucs::ucs;
pub use algorithm::Search;
pub use algorithm::SearchOptions;
