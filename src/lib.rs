//! route-directions core
//!
//! Immutable route geometry on a flat local map and turn-by-turn direction
//! text generated from it.

pub mod error;
pub mod point;
pub mod segment;
pub mod feature;
pub mod route;
pub mod traits;
pub mod formatter;
pub mod builder;

pub use builder::RouteBuilder;
pub use error::{GeoError, Result};
pub use feature::Feature;
pub use formatter::{
    compute_directions, compute_directions_from_degrees, turn_description, DrivingFormatter, Side,
    Turn, WalkingFormatter,
};
pub use point::{FlatEarth, Heading, Point};
pub use route::Route;
pub use segment::Segment;
pub use traits::{RouteFormatter, SegmentCatalog};
