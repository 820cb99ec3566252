//! Rescuing every survivor on a map.
use std::cell::Cell;
use std::collections::BTreeSet;

use geometry::coord2d::map::{Grid, Map};
use geometry::coord2d::{Direction, Point};
use searcher::{SearchProblem, Successor};

use crate::PathsearchError;

/// Where the rescuer stands, and which survivors are still waiting.
///
/// A survivor is rescued as soon as the rescuer steps onto their
/// square, including the square the rescue starts from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurvivorState {
    position: Point,
    remaining: BTreeSet<Point>,
}

impl SurvivorState {
    pub fn new<I>(position: Point, survivors: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut remaining: BTreeSet<Point> = survivors.into_iter().collect();
        remaining.remove(&position);
        Self {
            position,
            remaining,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Survivors not yet rescued, in reading order.
    pub fn remaining(&self) -> &BTreeSet<Point> {
        &self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    fn step(&self, position: Point) -> Self {
        let mut remaining = self.remaining.clone();
        remaining.remove(&position);
        Self {
            position,
            remaining,
        }
    }
}

/// Search for the cheapest route which visits every survivor.
#[derive(Debug, Clone)]
pub struct SurvivorProblem<M = Grid> {
    map: M,
    start: SurvivorState,
    expanded: Cell<usize>,
}

impl<M> SurvivorProblem<M>
where
    M: Map,
{
    pub fn new<I>(map: M, start: Point, survivors: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self {
            map,
            start: SurvivorState::new(start, survivors),
            expanded: Cell::new(0),
        }
    }

    /// The same map, resuming the rescue from another state.
    pub fn starting_at(&self, start: SurvivorState) -> Self
    where
        M: Clone,
    {
        Self {
            map: self.map.clone(),
            start,
            expanded: Cell::new(0),
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Number of states whose successors have been requested.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }
}

impl SurvivorProblem<Grid> {
    /// Build a problem from the `S` on a grid, with a survivor
    /// at every `G`.
    pub fn from_grid(grid: Grid) -> Result<Self, PathsearchError> {
        let start = grid.start().ok_or(PathsearchError::MissingStart)?;
        let survivors: Vec<Point> = grid.goals().iter().copied().collect();
        Ok(Self::new(grid, start, survivors))
    }
}

impl<M> SearchProblem for SurvivorProblem<M>
where
    M: Map,
{
    type State = SurvivorState;
    type Action = Direction;
    type Cost = u32;

    fn start_state(&self) -> Self::State {
        self.start.clone()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        state.is_complete()
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<SurvivorState, Direction, u32>> {
        self.expanded.set(self.expanded.get() + 1);

        state
            .position
            .adjacent()
            .filter_map(|(direction, next)| {
                self.map
                    .step_cost(next)
                    .map(|cost| Successor::new(state.step(next), direction, cost))
            })
            .collect()
    }
}
