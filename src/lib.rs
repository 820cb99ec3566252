#![deny(clippy::all)]

use clap::{App, Arg};

use itertools::Itertools;
use thiserror::Error;

use std::fmt;
use std::fs::File;
use std::io;
use std::io::Read;
use std::time::Instant;

use geometry::coord2d::map::{Grid, Map};
use geometry::coord2d::{Direction, Point};
use searcher::{replay, Algorithm, Search, SearchOptions, SearchProblem};

pub mod heuristics;
pub mod problems;
pub mod registry;

use problems::{PositionProblem, SurvivorProblem};
use registry::ProblemKind;

type Error = anyhow::Error;

/// The outcome of a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub actions: Vec<Direction>,
    pub cost: u32,
    pub expanded: usize,
    pub reached_goal: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.reached_goal {
            writeln!(
                f,
                "Path found with total cost of {} in {} steps",
                self.cost,
                self.actions.len()
            )?;
        } else {
            writeln!(f, "No path found")?;
        }
        writeln!(f, "Search nodes expanded: {}", self.expanded)?;
        if !self.actions.is_empty() {
            writeln!(f, "Actions: {}", self.actions.iter().join(", "))?;
        }
        Ok(())
    }
}

/// Search a grid, and report on the path found.
///
/// The heuristic is looked up by name for the given kind of problem,
/// and is ignored by uninformed algorithms.
pub fn solve_grid(
    grid: Grid,
    kind: ProblemKind,
    algorithm: Algorithm,
    heuristic: &str,
    options: SearchOptions,
) -> Result<Report, Error> {
    match kind {
        ProblemKind::Position => {
            let heuristic = registry::position_heuristic(heuristic)?;
            let problem = PositionProblem::from_grid(grid)?;
            let actions = Search::new(&problem)
                .with_options(options)
                .run(algorithm, &heuristic)?;
            let expanded = problem.expanded();
            let (state, cost) = replay(&problem, &actions)?;
            Ok(Report {
                actions,
                cost,
                expanded,
                reached_goal: problem.is_goal(&state),
            })
        }
        ProblemKind::Survivors => {
            let heuristic = registry::survivor_heuristic(heuristic)?;
            let problem = SurvivorProblem::from_grid(grid)?;
            let actions = Search::new(&problem)
                .with_options(options)
                .run(algorithm, &heuristic)?;
            let expanded = problem.expanded();
            let (state, cost) = replay(&problem, &actions)?;
            Ok(Report {
                actions,
                cost,
                expanded,
                reached_goal: problem.is_goal(&state),
            })
        }
    }
}

/// Override the start and goal marked on a grid.
///
/// A goal given here replaces every goal on the map, so a survivor
/// problem is left with just one survivor.
pub fn place_markers(
    grid: &mut Grid,
    start: Option<Point>,
    goal: Option<Point>,
) -> Result<(), PathsearchError> {
    for location in start.iter().chain(goal.iter()) {
        if !grid.is_traversable(*location) {
            return Err(PathsearchError::Blocked(*location));
        }
    }

    if let Some(location) = start {
        grid.set_start(location);
    }
    if let Some(location) = goal {
        grid.set_goal(location);
    }
    Ok(())
}

pub fn solver() -> Result<(), Error> {
    let algorithms = Algorithm::names();

    let matches = App::new("pathsearch")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Search for paths across grid maps")
        .arg(
            Arg::with_name("map")
                .value_name("MAP")
                .help("Map file to search, or - to read from stdin")
                .required_unless("list")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fn")
                .short("f")
                .long("fn")
                .value_name("ALGORITHM")
                .takes_value(true)
                .default_value("dfs")
                .possible_values(&algorithms),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .value_name("NAME")
                .takes_value(true)
                .default_value("null"),
        )
        .arg(
            Arg::with_name("problem")
                .short("p")
                .long("problem")
                .value_name("KIND")
                .takes_value(true)
                .default_value("position")
                .possible_values(ProblemKind::names()),
        )
        .arg(
            Arg::with_name("start")
                .short("s")
                .long("start")
                .value_name("X,Y")
                .help("Start here instead of at the S on the map")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .value_name("X,Y")
                .help("Search for this goal instead of the G on the map")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .value_name("N")
                .help("Report progress every N expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("N")
                .help("Give up after N expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("list")
                .long("list")
                .help("List the known algorithms and heuristics"),
        )
        .get_matches();

    if matches.is_present("list") {
        print_registry();
        return Ok(());
    }

    let kind = ProblemKind::lookup(matches.value_of("problem").unwrap_or("position"))?;
    let algorithm: Algorithm = matches.value_of("fn").unwrap_or("dfs").parse()?;
    let heuristic = matches.value_of("heuristic").unwrap_or("null");
    let options = SearchOptions {
        verbose: matches.value_of("verbose").map(str::parse).transpose()?,
        limit: matches.value_of("limit").map(str::parse).transpose()?,
    };

    let start: Option<Point> = matches.value_of("start").map(str::parse).transpose()?;
    let goal: Option<Point> = matches.value_of("goal").map(str::parse).transpose()?;

    let mut grid = read_map(matches.value_of("map").unwrap_or("-"))?;
    place_markers(&mut grid, start, goal)?;

    let timer = Instant::now();
    let report = solve_grid(grid, kind, algorithm, heuristic, options)?;
    print!("{}", report);
    println!("Search ran for {:.3}s", timer.elapsed().as_secs_f64());

    Ok(())
}

fn print_registry() {
    println!("Algorithms:");
    for algorithm in Algorithm::all() {
        println!("  {:<6} {}", algorithm.short_name(), algorithm.long_name());
    }

    for name in ProblemKind::names() {
        if let Ok(kind) = ProblemKind::lookup(name) {
            println!("Heuristics for {}: {}", name, kind.heuristics().join(", "));
        }
    }
}

/// Read a grid from a file, or from stdin when the path is `-`.
pub fn read_map(path: &str) -> Result<Grid, Error> {
    let mut reader: Box<dyn Read + 'static> = match path {
        "-" => Box::new(io::stdin()),
        path => {
            let f = File::open(path).map_err(|e| PathsearchError::MapNotFound(path.into(), e))?;
            Box::new(f)
        }
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.parse()?)
}

#[derive(Debug, Error)]
pub enum PathsearchError {
    #[error("No heuristic named {0} for {1} problems")]
    UnknownHeuristic(String, &'static str),

    #[error("No problem kind named {0}")]
    UnknownProblem(String),

    #[error("Map has no start marked")]
    MissingStart,

    #[error("Map has no goal marked")]
    MissingGoal,

    #[error("Can't place a marker on the wall at {0}")]
    Blocked(Point),

    #[error("Map not found: {0}")]
    MapNotFound(String, #[source] io::Error),
}
