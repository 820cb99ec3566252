//! Names for the search algorithms, for selecting one at runtime.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::errors::SearchError;

/// The search algorithms provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::DepthFirst,
    Algorithm::BreadthFirst,
    Algorithm::UniformCost,
    Algorithm::AStar,
];

lazy_static! {
    static ref ALIASES: HashMap<&'static str, Algorithm> = {
        let mut a = HashMap::new();
        for algorithm in ALGORITHMS.iter() {
            a.insert(algorithm.short_name(), *algorithm);
            a.insert(algorithm.long_name(), *algorithm);
        }
        a
    };
}

impl Algorithm {
    /// Every algorithm, uninformed first.
    pub fn all() -> impl Iterator<Item = Self> {
        ALGORITHMS.iter().cloned()
    }

    /// Look up an algorithm by any of its names.
    pub fn lookup(name: &str) -> Option<Self> {
        ALIASES.get(name).copied()
    }

    /// All known names, sorted.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = ALIASES.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::AStar => "astar",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "depth_first_search",
            Algorithm::BreadthFirst => "breadth_first_search",
            Algorithm::UniformCost => "uniform_cost_search",
            Algorithm::AStar => "a_star_search",
        }
    }

    /// Does this algorithm make use of a heuristic?
    pub fn is_informed(&self) -> bool {
        matches!(self, Algorithm::AStar)
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::lookup(s).ok_or_else(|| SearchError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!("dfs".parse::<Algorithm>().unwrap(), Algorithm::DepthFirst);
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::BreadthFirst);
        assert_eq!("ucs".parse::<Algorithm>().unwrap(), Algorithm::UniformCost);
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!(
            "uniform_cost_search".parse::<Algorithm>().unwrap(),
            Algorithm::UniformCost
        );

        for algorithm in Algorithm::all() {
            assert_eq!(Algorithm::lookup(algorithm.short_name()), Some(algorithm));
            assert_eq!(Algorithm::lookup(algorithm.long_name()), Some(algorithm));
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn unknown() {
        match "greedy".parse::<Algorithm>() {
            Err(SearchError::UnknownAlgorithm(name)) => assert_eq!(name, "greedy"),
            other => panic!("Expected an unknown algorithm, got {:?}", other),
        }
    }

    #[test]
    fn names() {
        let names = Algorithm::names();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "a_star_search");
        assert!(names.contains(&"bfs"));
    }

    #[test]
    fn informed() {
        let informed: Vec<Algorithm> = Algorithm::all().filter(|a| a.is_informed()).collect();
        assert_eq!(informed, vec![Algorithm::AStar]);
    }
}
