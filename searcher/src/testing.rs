//! Small explicit graphs used as search problems in tests.

use std::collections::{HashMap, HashSet};

use crate::traits::{SearchProblem, Successor};

/// A directed graph given by its edge list.
///
/// Actions are named `"from->to"`, and successors are returned
/// in the order edges were added.
#[derive(Debug, Clone, Default)]
pub(crate) struct Graph {
    start: String,
    edges: HashMap<String, Vec<(String, u32)>>,
    goals: HashSet<String>,
}

impl Graph {
    pub(crate) fn new(start: &str) -> Self {
        Self {
            start: start.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn edge(mut self, from: &str, to: &str, cost: u32) -> Self {
        self.edges
            .entry(from.to_string())
            .or_insert_with(Vec::new)
            .push((to.to_string(), cost));
        self
    }

    pub(crate) fn goal(mut self, goal: &str) -> Self {
        self.goals.insert(goal.to_string());
        self
    }

    pub(crate) fn states(&self) -> Vec<String> {
        let mut states: HashSet<String> = self.edges.keys().cloned().collect();
        for targets in self.edges.values() {
            states.extend(targets.iter().map(|(t, _)| t.clone()));
        }
        states.insert(self.start.clone());
        let mut states: Vec<String> = states.into_iter().collect();
        states.sort();
        states
    }

    pub(crate) fn starting_at(&self, start: &str) -> Self {
        let mut graph = self.clone();
        graph.start = start.to_string();
        graph
    }
}

impl SearchProblem for Graph {
    type State = String;
    type Action = String;
    type Cost = u32;

    fn start_state(&self) -> Self::State {
        self.start.clone()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<String, String, u32>> {
        self.edges
            .get(state)
            .map(|targets| {
                targets
                    .iter()
                    .map(|(to, cost)| Successor::new(to.clone(), format!("{}->{}", state, to), *cost))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// States `0..n` in a line, connected in both directions with
/// unit costs, searching from `0` to `n - 1`.
pub(crate) fn line(n: usize) -> Graph {
    let mut graph = Graph::new("0").goal(&(n - 1).to_string());
    for i in 0..(n - 1) {
        let (a, b) = (i.to_string(), (i + 1).to_string());
        graph = graph.edge(&a, &b, 1).edge(&b, &a, 1);
    }
    graph
}

/// The diamond from A to D, where the route through B costs 2
/// and the route through C costs 6.
pub(crate) fn diamond() -> Graph {
    Graph::new("A")
        .edge("A", "B", 1)
        .edge("A", "C", 1)
        .edge("B", "D", 1)
        .edge("C", "D", 5)
        .goal("D")
}
