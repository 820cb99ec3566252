//! Uniform-cost search (Dijkstra's algorithm)

use std::collections::HashMap;

use crate::algorithm::{Node, ProblemNode, Progress, Search, SearchOptions};
use crate::errors::Result;
use crate::frontier::PriorityQueue;
use crate::traits::SearchProblem;

pub(crate) fn run<P>(problem: &P, options: &SearchOptions) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
{
    let mut progress = Progress::new(options);
    let mut finalized: HashMap<P::State, P::Cost> = HashMap::new();
    let mut frontier = PriorityQueue::new();

    let start: ProblemNode<P> = Node::start(problem.start_state());
    let cost = start.cost;
    frontier.push(start, cost);

    while let Some(node) = frontier.pop() {
        // A state may be queued several times through different paths,
        // only the cheapest one is honored.
        if let Some(best) = finalized.get(&node.state) {
            if *best <= node.cost {
                continue;
            }
        }
        finalized.insert(node.state.clone(), node.cost);

        if problem.is_goal(&node.state) {
            return Ok(node.path);
        }
        progress.expand(frontier.len(), finalized.len())?;

        for successor in problem.successors(&node.state) {
            let child = node.child(successor);
            let cost = child.cost;
            frontier.push(child, cost);
        }
    }

    Ok(Vec::new())
}

/// Uniform-cost search.
///
/// Always explores the cheapest path found so far, so the first goal
/// reached is at the minimum cumulative cost, provided no transition
/// has a negative cost.
pub fn ucs<P>(problem: &P) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
{
    Search::new(problem).ucs()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::replay;
    use crate::testing::{diamond, line, Graph};

    #[test]
    fn diamond_takes_cheapest() {
        let graph = diamond();
        let path = ucs(&graph).unwrap();
        assert_eq!(path, vec!["A->B", "B->D"]);
        assert_eq!(replay(&graph, &path).unwrap().1, 2);
    }

    #[test]
    fn cheaper_longer_path() {
        let graph = Graph::new("S")
            .edge("S", "G", 10)
            .edge("S", "A", 2)
            .edge("A", "B", 2)
            .edge("B", "G", 2)
            .goal("G");

        assert_eq!(ucs(&graph).unwrap(), vec!["S->A", "A->B", "B->G"]);
    }

    #[test]
    fn stale_entries_are_skipped() {
        // B is first queued at cost 5, then again at cost 2 via A.
        let graph = Graph::new("S")
            .edge("S", "B", 5)
            .edge("S", "A", 1)
            .edge("A", "B", 1)
            .edge("B", "G", 1)
            .goal("G");

        let path = ucs(&graph).unwrap();
        assert_eq!(path, vec!["S->A", "A->B", "B->G"]);
        assert_eq!(replay(&graph, &path).unwrap().1, 3);
    }

    #[test]
    fn zero_cost_edges() {
        let graph = Graph::new("S")
            .edge("S", "A", 0)
            .edge("A", "S", 0)
            .edge("A", "G", 0)
            .edge("S", "G", 1)
            .goal("G");

        assert_eq!(ucs(&graph).unwrap(), vec!["S->A", "A->G"]);
    }

    #[test]
    fn start_is_goal() {
        let graph = diamond().goal("A");
        assert!(ucs(&graph).unwrap().is_empty());
    }

    #[test]
    fn unreachable() {
        let graph = Graph::new("A").edge("A", "B", 1).goal("Z");
        assert!(ucs(&graph).unwrap().is_empty());
    }

    #[test]
    fn unit_costs_match_bfs() {
        let graph = line(12).edge("0", "5", 1).edge("5", "11", 1).edge("3", "9", 1);
        assert_eq!(
            ucs(&graph).unwrap().len(),
            crate::bfs(&graph).unwrap().len()
        );
        assert_eq!(ucs(&graph).unwrap().len(), 2);
    }
}
