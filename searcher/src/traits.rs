use std::convert::From;
use std::fmt::Debug;
use std::hash::Hash;

use num::Zero;

/// Numeric cost of a transition, or of a whole path.
///
/// Any copyable, partially ordered number with a zero works,
/// so both integer and floating point costs are supported.
pub trait Cost: Copy + Debug + PartialOrd + Zero {}

impl<T> Cost for T where T: Copy + Debug + PartialOrd + Zero {}

/// A single transition out of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A, C> {
    pub state: S,
    pub action: A,
    pub cost: C,
}

impl<S, A, C> Successor<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A, C> From<(S, A, C)> for Successor<S, A, C> {
    fn from(transition: (S, A, C)) -> Self {
        Successor::new(transition.0, transition.1, transition.2)
    }
}

/// Provides the state space explored by the search algorithms.
///
/// The algorithms only ever see a problem through this interface:
/// a start state, a goal test and a successor function. States
/// are compared and hashed to avoid exploring cycles.
pub trait SearchProblem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone + PartialEq;
    type Cost: Cost;

    /// The state the search begins from.
    fn start_state(&self) -> Self::State;

    /// Indicates that this state satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Transitions available from this state. Costs must not be
    /// negative, and the order should be stable between calls for
    /// searches to be reproducible.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Vec<Successor<Self::State, Self::Action, Self::Cost>>;
}

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// To preserve the optimality of A*, estimates must be admissible
/// (never above the true remaining cost), and should be zero at goal
/// states.
pub trait Heuristic<P>
where
    P: SearchProblem + ?Sized,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// The trivial heuristic, which turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: SearchProblem + ?Sized,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}

/// Function form of [NullHeuristic].
pub fn null_heuristic<P>(_state: &P::State, _problem: &P) -> P::Cost
where
    P: SearchProblem + ?Sized,
{
    P::Cost::zero()
}
