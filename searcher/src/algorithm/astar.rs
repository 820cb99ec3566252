//! A* search

use std::collections::HashMap;

use crate::algorithm::{Node, ProblemNode, Progress, Search, SearchOptions};
use crate::errors::Result;
use crate::frontier::PriorityQueue;
use crate::traits::{Heuristic, SearchProblem};

pub(crate) fn run<P, H>(
    problem: &P,
    heuristic: &H,
    options: &SearchOptions,
) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let mut progress = Progress::new(options);
    let mut frontier = PriorityQueue::new();
    let mut best: HashMap<P::State, P::Cost> = HashMap::new();

    let start: ProblemNode<P> = Node::start(problem.start_state());
    let priority = start.cost + heuristic.estimate(&start.state, problem);
    best.insert(start.state.clone(), start.cost);
    frontier.push(start, priority);

    while let Some(node) = frontier.pop() {
        // Superseded by a cheaper path to the same state.
        if let Some(known) = best.get(&node.state) {
            if *known < node.cost {
                continue;
            }
        }

        if problem.is_goal(&node.state) {
            return Ok(node.path);
        }
        progress.expand(frontier.len(), best.len())?;

        for successor in problem.successors(&node.state) {
            let g = node.cost + successor.cost;

            // A cheaper path reopens a state even after it has been
            // expanded, which an inconsistent heuristic can cause.
            let improved = match best.get(&successor.state) {
                Some(known) => g < *known,
                None => true,
            };
            if !improved {
                continue;
            }

            best.insert(successor.state.clone(), g);
            let priority = g + heuristic.estimate(&successor.state, problem);
            frontier.push(node.child(successor), priority);
        }
    }

    Ok(Vec::new())
}

/// A* search.
///
/// Explores states in order of the cost so far plus the heuristic's
/// estimate of the remaining cost. The path returned is of minimum cost
/// when the heuristic is admissible. A consistent heuristic also
/// expands each state at most once.
///
/// For an uninformed search, pass `&NullHeuristic`:
/// `astar(&problem, &NullHeuristic)` is uniform-cost search.
pub fn astar<P, H>(problem: &P, heuristic: &H) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    Search::new(problem).astar(heuristic)
}
