//! Finding a path from one point to another.
use std::cell::Cell;

use geometry::coord2d::map::{Grid, Map};
use geometry::coord2d::{Direction, Point};
use searcher::{SearchProblem, Successor};

use crate::heuristics::PointGoal;
use crate::PathsearchError;

/// Search for a path between two points on a map.
#[derive(Debug, Clone)]
pub struct PositionProblem<M = Grid> {
    map: M,
    start: Point,
    goal: Point,
    expanded: Cell<usize>,
}

impl<M> PositionProblem<M>
where
    M: Map,
{
    pub fn new(map: M, start: Point, goal: Point) -> Self {
        Self {
            map,
            start,
            goal,
            expanded: Cell::new(0),
        }
    }

    /// The same problem, starting from somewhere else.
    pub fn starting_at(&self, start: Point) -> Self
    where
        M: Clone,
    {
        Self::new(self.map.clone(), start, self.goal)
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Number of states whose successors have been requested.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }
}

impl PositionProblem<Grid> {
    /// Build a problem from the `S` and first `G` marked on a grid.
    pub fn from_grid(grid: Grid) -> Result<Self, PathsearchError> {
        let start = grid.start().ok_or(PathsearchError::MissingStart)?;
        let goal = grid.goal().ok_or(PathsearchError::MissingGoal)?;
        Ok(Self::new(grid, start, goal))
    }
}

impl<M> SearchProblem for PositionProblem<M>
where
    M: Map,
{
    type State = Point;
    type Action = Direction;
    type Cost = u32;

    fn start_state(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<Point, Direction, u32>> {
        self.expanded.set(self.expanded.get() + 1);

        state
            .adjacent()
            .filter_map(|(direction, next)| {
                self.map
                    .step_cost(next)
                    .map(|cost| Successor::new(next, direction, cost))
            })
            .collect()
    }
}

impl<M> PointGoal for PositionProblem<M>
where
    M: Map,
{
    fn goal(&self) -> Point {
        self.goal
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use searcher::{astar, bfs, dfs, replay, ucs, Algorithm, NullHeuristic, Search};

    use crate::heuristics::{euclidean_heuristic, manhattan_heuristic};

    fn problem(map: &str) -> PositionProblem {
        PositionProblem::from_grid(map.parse().unwrap()).unwrap()
    }

    #[test]
    fn successors() {
        let problem = problem(include_str!("../../maps/weighted.txt"));

        let successors = problem.successors(&Point::new(0, 0));
        assert_eq!(
            successors,
            vec![
                Successor::new(Point::new(0, 1), Direction::South, 1),
                Successor::new(Point::new(1, 0), Direction::East, 9),
            ]
        );
        assert_eq!(problem.expanded(), 1);
        assert_eq!(problem.goal(), Point::new(2, 0));
    }

    #[test]
    fn open_grid() {
        let problem = problem(include_str!("../../maps/open.txt"));
        assert_eq!(problem.goal(), Point::new(3, 3));

        let informed = astar(&problem, &manhattan_heuristic::<PositionProblem>).unwrap();
        let (state, cost) = replay(&problem, &informed).unwrap();
        assert_eq!(state, Point::new(3, 3));
        assert_eq!(informed.len(), 6);
        assert_eq!(cost, 6);

        let uniform = ucs(&problem).unwrap();
        assert_eq!(uniform.len(), 6);
        assert_eq!(replay(&problem, &uniform).unwrap().1, 6);
    }

    #[test]
    fn maze() {
        let problem = problem(include_str!("../../maps/maze.txt"));

        let path = bfs(&problem).unwrap();
        assert_eq!(path.len(), 10);
        assert_eq!(
            path,
            vec![
                Direction::South,
                Direction::South,
                Direction::South,
                Direction::South,
                Direction::East,
                Direction::East,
                Direction::East,
                Direction::East,
                Direction::East,
                Direction::East,
            ]
        );

        assert_eq!(ucs(&problem).unwrap(), path);
        assert_eq!(astar(&problem, &manhattan_heuristic::<PositionProblem>).unwrap(), path);
        assert_eq!(astar(&problem, &euclidean_heuristic::<PositionProblem>).unwrap().len(), 10);

        // DFS heads east first, and takes the long way round.
        let deep = dfs(&problem).unwrap();
        let (state, cost) = replay(&problem, &deep).unwrap();
        assert!(problem.is_goal(&state));
        assert_eq!(deep.len(), 14);
        assert_eq!(cost, 14);
    }

    #[test]
    fn weighted() {
        let problem = problem(include_str!("../../maps/weighted.txt"));

        let shallow = bfs(&problem).unwrap();
        assert_eq!(shallow, vec![Direction::East, Direction::East]);
        assert_eq!(replay(&problem, &shallow).unwrap().1, 10);

        let cheapest = ucs(&problem).unwrap();
        assert_eq!(
            cheapest,
            vec![
                Direction::South,
                Direction::East,
                Direction::East,
                Direction::North
            ]
        );
        assert_eq!(replay(&problem, &cheapest).unwrap().1, 4);
        assert_eq!(
            astar(&problem, &manhattan_heuristic::<PositionProblem>).unwrap(),
            cheapest
        );
    }

    #[test]
    fn unreachable() {
        let problem = problem(include_str!("../../maps/walled.txt"));
        for algorithm in Algorithm::all() {
            let path = Search::new(&problem)
                .run(algorithm, &manhattan_heuristic::<PositionProblem>)
                .unwrap();
            assert!(path.is_empty(), "{} found a path through a wall", algorithm);
        }
    }

    #[test]
    fn start_is_goal() {
        let problem = problem(include_str!("../../maps/open.txt")).starting_at(Point::new(3, 3));
        for algorithm in Algorithm::all() {
            let path = Search::new(&problem).run(algorithm, &NullHeuristic).unwrap();
            assert!(path.is_empty());
        }
    }

    #[test]
    fn missing_markers() {
        match PositionProblem::from_grid("...\n.G.".parse().unwrap()) {
            Err(PathsearchError::MissingStart) => {}
            other => panic!("Expected a missing start, got {:?}", other),
        }
        match PositionProblem::from_grid("S..\n...".parse().unwrap()) {
            Err(PathsearchError::MissingGoal) => {}
            other => panic!("Expected a missing goal, got {:?}", other),
        }
    }
}
