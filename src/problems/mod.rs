//! Search problems over grid maps.
//!
//! Both problems move one square at a time in the four compass
//! directions, paying the map's cost for the square stepped onto.
//! Successors are always listed north, south, east, west.

pub mod position;
pub mod survivors;

pub use position::PositionProblem;
pub use survivors::{SurvivorProblem, SurvivorState};
