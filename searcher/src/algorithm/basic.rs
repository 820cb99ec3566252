//! Uninformed graph search, where the order of exploration
//! is decided entirely by the frontier.

use std::collections::HashSet;

use crate::algorithm::{Node, ProblemNode, Progress, Search, SearchOptions};
use crate::errors::Result;
use crate::frontier::SearchQueue;
use crate::traits::SearchProblem;

/// Graph search with a visited set.
///
/// Nodes are goal-tested as they leave the frontier, and a state is
/// expanded at most once. Any queue discipline can be used; the first
/// goal popped is returned.
pub(crate) fn graph_search<P, Q>(
    problem: &P,
    mut frontier: Q,
    options: &SearchOptions,
) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    Q: SearchQueue<Item = ProblemNode<P>>,
{
    let mut progress = Progress::new(options);
    let mut visited: HashSet<P::State> = HashSet::new();

    frontier.push(Node::start(problem.start_state()));

    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            return Ok(node.path);
        }

        if visited.contains(&node.state) {
            continue;
        }
        visited.insert(node.state.clone());
        progress.expand(frontier.len(), visited.len())?;

        for successor in problem.successors(&node.state) {
            frontier.push(node.child(successor));
        }
    }

    Ok(Vec::new())
}

/// Depth-first search.
///
/// Always explores the most recently discovered state first. The path
/// returned is valid, but need not be the shortest.
pub fn dfs<P>(problem: &P) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
{
    Search::new(problem).dfs()
}

/// Breadth-first search.
///
/// Explores states in the order they were discovered, so the path
/// returned has the fewest actions. When transitions have different
/// costs, it need not be the cheapest.
pub fn bfs<P>(problem: &P) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
{
    Search::new(problem).bfs()
}
