//! Features: maximal runs of contiguous, same-named segments.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{GeoError, Result};
use crate::point::{Heading, Point};
use crate::segment::Segment;

/// An ordered, non-empty chain of segments sharing one name.
///
/// Each segment starts where the previous one ends. A feature never changes
/// once built; [`Feature::append`] returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Feature {
    segments: Vec<Segment>,
}

impl Feature {
    /// Wraps a single segment.
    pub fn new(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    /// Builds a feature from an ordered chain of segments.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self> {
        check_chain(&segments)?;
        Ok(Self { segments })
    }

    /// Returns a feature extended by `segment`.
    ///
    /// The segment must carry this feature's name and start at its end.
    pub fn append(&self, segment: Segment) -> Result<Self> {
        if segment.name() != self.name() {
            debug!(feature = self.name(), segment = segment.name(), "rejected append: name mismatch");
            return Err(GeoError::invalid(format!(
                "segment '{}' cannot extend feature '{}'",
                segment.name(),
                self.name()
            )));
        }
        if segment.p1() != self.end() {
            debug!(feature = self.name(), "rejected append: not contiguous");
            return Err(GeoError::invalid(format!(
                "segment starts at {} but feature '{}' ends at {}",
                segment.p1(),
                self.name(),
                self.end()
            )));
        }

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Ok(Self { segments })
    }

    pub fn name(&self) -> &str {
        self.first().name()
    }

    pub fn start(&self) -> Point {
        self.first().p1()
    }

    pub fn end(&self) -> Point {
        self.last().p2()
    }

    pub fn start_heading(&self) -> Heading {
        self.first().heading()
    }

    pub fn end_heading(&self) -> Heading {
        self.last().heading()
    }

    /// Total length in kilometers.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Segments in travel order.
    pub fn segments(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn first(&self) -> &Segment {
        &self.segments[0]
    }

    fn last(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.start())?;
        for segment in &self.segments {
            write!(f, " ==> {}", segment.p2())?;
        }
        Ok(())
    }
}

/// Checks that `segments` is non-empty, single-named and contiguous.
fn check_chain(segments: &[Segment]) -> Result<()> {
    let Some(first) = segments.first() else {
        return Err(GeoError::invalid("feature needs at least one segment"));
    };

    for (index, pair) in segments.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.name() != first.name() {
            return Err(GeoError::invalid(format!(
                "segment {} is named '{}', expected '{}'",
                index + 1,
                next.name(),
                first.name()
            )));
        }
        if prev.p2() != next.p1() {
            return Err(GeoError::invalid(format!(
                "segment {} starts at {} but segment {} ends at {}",
                index + 1,
                next.p1(),
                index,
                prev.p2()
            )));
        }
    }

    Ok(())
}
