//! Estimates of the remaining cost for grid problems.
//!
//! Each heuristic is a plain function, so it can be handed straight to
//! [searcher::astar] or stored in a registry as a function pointer.
use num::{NumCast, ToPrimitive, Zero};

use geometry::coord2d::Point;
use searcher::SearchProblem;

use crate::problems::SurvivorState;

pub use searcher::{null_heuristic, NullHeuristic};

/// A problem whose states are points, with a single goal point.
pub trait PointGoal: SearchProblem<State = Point> {
    fn goal(&self) -> Point;
}

/// Convert a distance into a cost, truncating towards zero.
///
/// Distances which can't be represented as a cost estimate nothing.
fn estimate<C, D>(distance: D) -> C
where
    C: NumCast + Zero,
    D: ToPrimitive,
{
    C::from(distance).unwrap_or_else(C::zero)
}

/// Sum of the horizontal and vertical distance to the goal.
pub fn manhattan_heuristic<P>(state: &Point, problem: &P) -> P::Cost
where
    P: PointGoal,
    P::Cost: NumCast,
{
    estimate(state.manhattan_distance(problem.goal()))
}

/// Straight line distance to the goal.
pub fn euclidean_heuristic<P>(state: &Point, problem: &P) -> P::Cost
where
    P: PointGoal,
    P::Cost: NumCast,
{
    estimate(state.euclidean_distance(problem.goal()))
}

/// Manhattan distance to the closest survivor still waiting.
///
/// This only accounts for the first rescue, so it badly underestimates
/// long tours, but it never overestimates one.
pub fn survivor_heuristic<P>(state: &SurvivorState, _problem: &P) -> P::Cost
where
    P: SearchProblem<State = SurvivorState>,
    P::Cost: NumCast,
{
    let position = state.position();
    match state
        .remaining()
        .iter()
        .map(|survivor| position.manhattan_distance(*survivor))
        .min()
    {
        Some(distance) => estimate(distance),
        None => P::Cost::zero(),
    }
}
