//! Provides the building blocks for search algorithms

use std::default::Default;

use crate::errors::{Result, SearchError};
use crate::frontier::{Queue, Stack};
use crate::registry::Algorithm;
use crate::traits::{Cost, Heuristic, SearchProblem, Successor};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod ucs;

/// Options which apply to any search algorithm.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Print a progress line to stderr every this many expansions.
    pub verbose: Option<usize>,

    /// Give up with [SearchError::StepLimitExhausted] after this
    /// many expansions.
    pub limit: Option<usize>,
}

/// A state along with the actions taken to reach it
/// and what those actions cost.
#[derive(Debug)]
pub(crate) struct Node<S, A, C> {
    pub(crate) state: S,
    pub(crate) path: Vec<A>,
    pub(crate) cost: C,
}

pub(crate) type ProblemNode<P> =
    Node<<P as SearchProblem>::State, <P as SearchProblem>::Action, <P as SearchProblem>::Cost>;

impl<S, A, C> Node<S, A, C>
where
    A: Clone,
    C: Cost,
{
    pub(crate) fn start(state: S) -> Self {
        Node {
            state,
            path: Vec::new(),
            cost: C::zero(),
        }
    }

    /// The node reached by taking this transition. The parent's
    /// path is copied so that each node owns its own history.
    pub(crate) fn child(&self, successor: Successor<S, A, C>) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(successor.action);
        Node {
            state: successor.state,
            path,
            cost: self.cost + successor.cost,
        }
    }
}

/// Tracks expansions for step limits and progress reports.
#[derive(Debug)]
pub(crate) struct Progress {
    expanded: usize,
    limit: Option<usize>,
    verbose: Option<usize>,
}

impl Progress {
    pub(crate) fn new(options: &SearchOptions) -> Self {
        Self {
            expanded: 0,
            limit: options.limit,
            verbose: options.verbose,
        }
    }

    /// Record one expansion, given the current size of the frontier
    /// and of the visited records.
    pub(crate) fn expand(&mut self, frontier: usize, visited: usize) -> Result<()> {
        self.expanded += 1;

        if let Some(limit) = self.limit {
            if self.expanded > limit {
                return Err(SearchError::StepLimitExhausted(limit));
            }
        }

        if let Some(every) = self.verbose {
            if every > 0 && self.expanded % every == 0 {
                eprintln!("Q{} V{} E{}", frontier, visited, self.expanded);
            }
        }
        Ok(())
    }
}

/// Runs searches over a single problem with a common set of options.
///
/// Every algorithm returns the actions leading from the start state
/// to a goal. An empty sequence means either that no goal is reachable
/// or that the start state is already a goal.
#[derive(Debug)]
pub struct Search<'p, P> {
    problem: &'p P,
    options: SearchOptions,
}

impl<'p, P> Search<'p, P>
where
    P: SearchProblem,
{
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search.
    ///
    /// When more than this many states have been expanded,
    /// the search will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit);
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Depth-first graph search.
    pub fn dfs(&self) -> Result<Vec<P::Action>> {
        basic::graph_search(self.problem, Stack::new(), &self.options)
    }

    /// Breadth-first graph search.
    pub fn bfs(&self) -> Result<Vec<P::Action>> {
        basic::graph_search(self.problem, Queue::new(), &self.options)
    }

    /// Uniform-cost search.
    pub fn ucs(&self) -> Result<Vec<P::Action>> {
        ucs::run(self.problem, &self.options)
    }

    /// A* search guided by the given heuristic.
    pub fn astar<H>(&self, heuristic: &H) -> Result<Vec<P::Action>>
    where
        H: Heuristic<P> + ?Sized,
    {
        astar::run(self.problem, heuristic, &self.options)
    }

    /// Run the named algorithm. The heuristic is ignored
    /// by uninformed algorithms.
    pub fn run<H>(&self, algorithm: Algorithm, heuristic: &H) -> Result<Vec<P::Action>>
    where
        H: Heuristic<P> + ?Sized,
    {
        match algorithm {
            Algorithm::DepthFirst => self.dfs(),
            Algorithm::BreadthFirst => self.bfs(),
            Algorithm::UniformCost => self.ucs(),
            Algorithm::AStar => self.astar(heuristic),
        }
    }
}
