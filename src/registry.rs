//! Heuristics by name, for each kind of problem.
use std::collections::HashMap;

use lazy_static::lazy_static;

use geometry::coord2d::Point;

use crate::heuristics;
use crate::problems::{PositionProblem, SurvivorProblem, SurvivorState};
use crate::PathsearchError;

pub type PositionHeuristic = fn(&Point, &PositionProblem) -> u32;
pub type SurvivorHeuristic = fn(&SurvivorState, &SurvivorProblem) -> u32;

lazy_static! {
    static ref POSITION_HEURISTICS: HashMap<&'static str, PositionHeuristic> = {
        let mut h: HashMap<&'static str, PositionHeuristic> = HashMap::new();
        h.insert("null", heuristics::null_heuristic::<PositionProblem>);
        h.insert("manhattan", heuristics::manhattan_heuristic::<PositionProblem>);
        h.insert("euclidean", heuristics::euclidean_heuristic::<PositionProblem>);
        h
    };
    static ref SURVIVOR_HEURISTICS: HashMap<&'static str, SurvivorHeuristic> = {
        let mut h: HashMap<&'static str, SurvivorHeuristic> = HashMap::new();
        h.insert("null", heuristics::null_heuristic::<SurvivorProblem>);
        h.insert("survivor", heuristics::survivor_heuristic::<SurvivorProblem>);
        h
    };
}

/// The kinds of problem which can be posed on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// Reach the first goal marked on the map.
    Position,

    /// Visit every goal marked on the map.
    Survivors,
}

impl ProblemKind {
    pub fn names() -> &'static [&'static str] {
        &["position", "survivors"]
    }

    pub fn lookup(name: &str) -> Result<Self, PathsearchError> {
        match name {
            "position" => Ok(ProblemKind::Position),
            "survivors" => Ok(ProblemKind::Survivors),
            _ => Err(PathsearchError::UnknownProblem(name.to_string())),
        }
    }

    /// Names of the heuristics which apply to this kind of problem, sorted.
    pub fn heuristics(self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = match self {
            ProblemKind::Position => POSITION_HEURISTICS.keys().copied().collect(),
            ProblemKind::Survivors => SURVIVOR_HEURISTICS.keys().copied().collect(),
        };
        names.sort_unstable();
        names
    }
}

pub fn position_heuristic(name: &str) -> Result<PositionHeuristic, PathsearchError> {
    POSITION_HEURISTICS
        .get(name)
        .copied()
        .ok_or_else(|| PathsearchError::UnknownHeuristic(name.to_string(), "position"))
}

pub fn survivor_heuristic(name: &str) -> Result<SurvivorHeuristic, PathsearchError> {
    SURVIVOR_HEURISTICS
        .get(name)
        .copied()
        .ok_or_else(|| PathsearchError::UnknownHeuristic(name.to_string(), "survivors"))
}
