//! Seams between the route model and its callers.
//!
//! These are intentionally minimal. Applications implement them for their
//! own phrasing and their own segment sources.

use crate::feature::Feature;
use crate::point::Heading;
use crate::segment::Segment;

/// Phrasing strategy for turn-by-turn directions.
///
/// Implementors render one line per feature; the loop that walks a route and
/// carries the heading forward lives in
/// [`compute_directions`](crate::formatter::compute_directions).
pub trait RouteFormatter {
    /// Renders the line for `feature`, reached while travelling at
    /// `orig_heading`. The returned text must end with a newline.
    fn compute_line(&self, feature: &Feature, orig_heading: Heading) -> String;
}

/// Supplies candidate segments for a user to choose from.
pub trait SegmentCatalog {
    fn segments(&self) -> &[Segment];
}

impl SegmentCatalog for Vec<Segment> {
    fn segments(&self) -> &[Segment] {
        self
    }
}

impl SegmentCatalog for [Segment] {
    fn segments(&self) -> &[Segment] {
        self
    }
}
