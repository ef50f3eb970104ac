//! Incremental route construction for interactive segment pickers.

use tracing::debug;

use crate::error::Result;
use crate::formatter::compute_directions;
use crate::point::{Heading, Point};
use crate::route::Route;
use crate::segment::Segment;
use crate::traits::{RouteFormatter, SegmentCatalog};

/// Holds the route a user is assembling one confirmed segment at a time.
///
/// The first segment starts the route; later ones must begin where the route
/// currently ends. A rejected segment leaves the builder as it was.
#[derive(Debug, Clone, Default)]
pub struct RouteBuilder {
    route: Option<Route>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Where the next segment has to start, once a route exists.
    pub fn end(&self) -> Option<Point> {
        self.route.as_ref().map(Route::end)
    }

    /// Whether `segment` would be accepted by [`RouteBuilder::add_segment`].
    pub fn accepts(&self, segment: &Segment) -> bool {
        self.end().is_none_or(|end| end == segment.p1())
    }

    /// Catalog entries that continue the current route.
    pub fn candidates<'a, C>(&self, catalog: &'a C) -> Vec<&'a Segment>
    where
        C: SegmentCatalog + ?Sized,
    {
        catalog
            .segments()
            .iter()
            .filter(|segment| self.accepts(segment))
            .collect()
    }

    /// Appends a confirmed segment, starting the route if there is none yet.
    pub fn add_segment(&mut self, segment: Segment) -> Result<&Route> {
        let next = match &self.route {
            None => {
                debug!(segment = %segment, "starting route");
                Route::new(segment)
            }
            Some(route) => route.append(segment)?,
        };
        let route: &Route = self.route.insert(next);
        Ok(route)
    }

    /// Drops the route in progress.
    pub fn clear(&mut self) {
        self.route = None;
    }

    /// Directions for the route so far, or `None` before the first segment.
    pub fn directions<F>(&self, formatter: &F, heading: Heading) -> Option<String>
    where
        F: RouteFormatter + ?Sized,
    {
        self.route
            .as_ref()
            .map(|route| compute_directions(formatter, route, heading))
    }
}
