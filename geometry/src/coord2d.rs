//! Coordinate work in two dimensions.

use std::cmp;
use std::default::Default;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use itertools::iproduct;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod map;

/// A compass direction of movement in two dimensions.
///
/// North points towards smaller `y`, matching the rows of a
/// map read from text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    /// Enumerates all directions of movement, in a fixed order
    /// (north, south, east, west).
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        };
        write!(f, "{}", name)
    }
}

/// A location in 2D space.
///
/// Essentially a 2-tuple of x and y position,
/// but with a lot of provided methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Returns a point at (0, 0)
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }

    /// Iterate over all adjacent points, paired with the
    /// direction that reaches them.
    pub fn adjacent(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::all().map(move |d| (d, self.step(d)))
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Straight-line distance between two points.
    pub fn euclidean_distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Points are ordered in "reading order",
/// which is y then x.
impl cmp::Ord for Point {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl cmp::PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}

impl From<(usize, usize)> for Point {
    fn from(coordinates: (usize, usize)) -> Self {
        Self {
            x: coordinates.0 as Position,
            y: coordinates.1 as Position,
        }
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {0}")]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\(?(?P<x>-?\d+),\s*(?P<y>-?\d+)\)?$").unwrap();
        };

        let cap = match RE.captures(s.trim()) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

/// A rectangle which encloses points and is aligned
/// with the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    left: Position,
    right: Position,
    top: Position,
    bottom: Position,
}

impl BoundingBox {
    /// Create a bounding box which covers no points.
    pub fn empty() -> Self {
        Self {
            left: Position::MAX,
            right: Position::MIN,
            top: Position::MAX,
            bottom: Position::MIN,
        }
    }

    /// Modify this bounding box to include a given point.
    pub fn include(&mut self, point: Point) -> bool {
        let mut updated = false;
        if point.x < self.left {
            self.left = point.x;
            updated = true;
        }
        if point.x > self.right {
            self.right = point.x;
            updated = true;
        }
        if point.y < self.top {
            self.top = point.y;
            updated = true;
        }
        if point.y > self.bottom {
            self.bottom = point.y;
            updated = true;
        }
        updated
    }

    /// Construct a bounding box from an iterator of points.
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point>) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.include(*point);
        }
        bbox
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Range of vertical positions
    pub fn vertical(&self) -> RangeInclusive<Position> {
        self.top..=self.bottom
    }

    /// Range of horizontal positions
    pub fn horizontal(&self) -> RangeInclusive<Position> {
        self.left..=self.right
    }

    /// Width for this box.
    pub fn width(&self) -> Position {
        if self.is_empty() {
            return 0;
        }
        self.right - self.left + 1
    }

    /// Height for this box.
    pub fn height(&self) -> Position {
        if self.is_empty() {
            return 0;
        }
        self.bottom - self.top + 1
    }

    /// Iterate through all the points contained in this
    /// bounding box, in reading order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(self.vertical(), self.horizontal()).map(|(y, x)| Point::new(x, y))
    }

    /// Call a function which should write a single character at every position
    /// in this bounding box.
    ///
    /// This function will handle newlines. The callback should print
    /// a single character for each point.
    pub fn printer<F>(&self, f: &mut fmt::Formatter, cb: F) -> fmt::Result
    where
        F: Fn(&mut fmt::Formatter, &Point) -> fmt::Result,
    {
        for y in self.vertical() {
            for x in self.horizontal() {
                let point = (x, y).into();
                cb(f, &point)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point() {
        let point = Point::new(1, 1);

        assert_eq!(point.step(Direction::North), Point::new(1, 0));
        assert_eq!(point.step(Direction::South), Point::new(1, 2));
        assert_eq!(point.step(Direction::West), Point::new(0, 1));
        assert_eq!(point.step(Direction::East), Point::new(2, 1));

        assert_eq!(&point.to_string(), "1,1");

        assert_eq!(
            point.adjacent().collect::<Vec<_>>(),
            vec![
                (Direction::North, Point::new(1, 0)),
                (Direction::South, Point::new(1, 2)),
                (Direction::East, Point::new(2, 1)),
                (Direction::West, Point::new(0, 1)),
            ]
        );
    }

    #[test]
    fn direction() {
        let origin = Point::origin();

        for direction in Direction::all() {
            assert_ne!(origin.step(direction), origin);
            assert_eq!(origin.step(direction).manhattan_distance(origin), 1);
        }

        assert_eq!(Direction::West.to_string(), "West");
    }

    #[test]
    fn distances() {
        let origin = Point::origin();
        let other = Point::new(3, 4);

        assert_eq!(origin.manhattan_distance(other), 7);
        assert_eq!(other.manhattan_distance(origin), 7);
        assert_eq!(origin.euclidean_distance(other), 5.0);
        assert_eq!(Point::new(-3, -4).euclidean_distance(origin), 5.0);
    }

    #[test]
    fn parse() {
        assert_eq!("3,4".parse::<Point>().unwrap(), Point::new(3, 4));
        assert_eq!(" (0, -2) ".parse::<Point>().unwrap(), Point::new(0, -2));
        assert!("3;4".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
        assert!("99999999999,1".parse::<Point>().is_err());
    }

    #[test]
    fn ordering() {
        let mut points = vec![Point::new(1, 1), Point::new(0, 1), Point::new(5, 0)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(5, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn bbox() {
        let mut bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        assert_eq!(bbox.width(), 0);

        let point = Point::new(1, 2);

        bbox.include(point);
        assert_eq!(bbox.width(), 1);
        assert_eq!(bbox.height(), 1);

        assert_eq!(bbox.horizontal(), 1..=1);
        assert_eq!(bbox.vertical(), 2..=2);

        assert!(bbox.include(Point::new(2, 3)));
        assert!(!bbox.include(Point::new(2, 2)));

        assert_eq!(bbox.width(), 2);
        assert_eq!(bbox.height(), 2);
        assert_eq!(bbox.horizontal(), 1..=2);
        assert_eq!(bbox.vertical(), 2..=3);

        assert_eq!(
            bbox.points().collect::<Vec<_>>(),
            vec![
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(1, 3),
                Point::new(2, 3)
            ]
        );
    }
}
