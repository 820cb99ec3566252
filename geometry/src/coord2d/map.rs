//! Maps of traversable locations on a 2D coordinate grid.
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{BoundingBox, Point};

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return what it costs to step onto a given location.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: fmt::Debug {
    /// Cost of stepping onto this location, or `None` when
    /// it can't be entered at all.
    fn step_cost(&self, location: Point) -> Option<u32>;

    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool {
        self.step_cost(location).is_some()
    }
}

/// A single square of a [Grid].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open(u32),
}

/// Error returned when a grid can't be parsed.
#[derive(Debug, Error)]
pub enum ParseMapError {
    #[error("Unexpected map character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Map has more than one start: {0} and {1}")]
    DuplicateStart(Point, Point),
}

/// A finite map read from text.
///
/// Each character is one square:
///
/// - `#` is a wall
/// - `.` is open ground with a step cost of 1
/// - `1` to `9` is open ground with that step cost
/// - `S` marks the start, `G` marks a goal, both on open ground
///
/// Anything outside the squares given is impassable. Leading and
/// trailing whitespace on each line is ignored, as are blank lines.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: HashMap<Point, Tile>,
    start: Option<Point>,
    goals: BTreeSet<Point>,
    bbox: BoundingBox,
}

impl Grid {
    /// The location marked `S`, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The first location marked `G` in reading order, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goals.iter().next().copied()
    }

    /// Every location marked `G`.
    pub fn goals(&self) -> &BTreeSet<Point> {
        &self.goals
    }

    /// Move the start marker.
    pub fn set_start(&mut self, location: Point) {
        self.start = Some(location);
    }

    /// Replace every goal marker with a single goal.
    pub fn set_goal(&mut self, location: Point) {
        self.goals.clear();
        self.goals.insert(location);
    }

    pub fn tile(&self, location: Point) -> Option<Tile> {
        self.tiles.get(&location).copied()
    }

    /// Iterate over every open location, in reading order.
    pub fn open(&self) -> impl Iterator<Item = Point> + '_ {
        self.bbox.points().filter(move |p| self.is_traversable(*p))
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }
}

impl Map for Grid {
    fn step_cost(&self, location: Point) -> Option<u32> {
        match self.tiles.get(&location) {
            Some(Tile::Open(cost)) => Some(*cost),
            _ => None,
        }
    }
}

impl FromStr for Grid {
    type Err = ParseMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = HashMap::new();
        let mut start: Option<Point> = None;
        let mut goals = BTreeSet::new();

        let lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        for (y, line) in lines.enumerate() {
            for (x, c) in line.chars().enumerate() {
                let point: Point = (x, y).into();
                let tile = match c {
                    '#' => Tile::Wall,
                    '.' => Tile::Open(1),
                    '1'..='9' => Tile::Open(c.to_digit(10).unwrap_or(1)),
                    'S' => {
                        if let Some(other) = start {
                            return Err(ParseMapError::DuplicateStart(other, point));
                        }
                        start = Some(point);
                        Tile::Open(1)
                    }
                    'G' => {
                        goals.insert(point);
                        Tile::Open(1)
                    }
                    _ => return Err(ParseMapError::UnexpectedCharacter(c, point)),
                };
                tiles.insert(point, tile);
            }
        }

        let bbox = BoundingBox::from_points(tiles.keys());
        Ok(Grid {
            tiles,
            start,
            goals,
            bbox,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.bbox.printer(f, |f, point| {
            if self.start == Some(*point) {
                return write!(f, "S");
            }
            if self.goals.contains(point) {
                return write!(f, "G");
            }
            match self.tiles.get(point) {
                Some(Tile::Wall) => write!(f, "#"),
                Some(Tile::Open(1)) => write!(f, "."),
                Some(Tile::Open(cost)) => write!(f, "{}", cost),
                None => write!(f, " "),
            }
        })
    }
}
