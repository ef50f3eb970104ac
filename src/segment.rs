//! Named, directed segments between two points.

use std::fmt;

use serde::Serialize;

use crate::error::{GeoError, Result};
use crate::point::{Heading, Point};

/// A straight piece of a named road or path, travelled from `p1` to `p2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    name: String,
    p1: Point,
    p2: Point,
}

impl Segment {
    /// Creates a segment. The name must not be empty or blank.
    pub fn new(name: impl Into<String>, p1: Point, p2: Point) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GeoError::invalid("segment name is empty"));
        }
        Ok(Self { name, p1, p2 })
    }

    /// The same segment travelled in the opposite direction.
    pub fn reverse(&self) -> Self {
        Self {
            name: self.name.clone(),
            p1: self.p2,
            p2: self.p1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Origin point.
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Destination point.
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Length in kilometers; zero for a degenerate segment.
    pub fn length(&self) -> f64 {
        if self.p1 == self.p2 {
            0.0
        } else {
            self.p1.distance_to(&self.p2)
        }
    }

    /// Direction of travel; north for a degenerate segment.
    pub fn heading(&self) -> Heading {
        self.p1.heading_to(&self.p2).unwrap_or(Heading::NORTH)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} --> {}", self.name, self.p1, self.p2)
    }
}
