//! Routes: complete paths made of consecutive features.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{GeoError, Result};
use crate::feature::Feature;
use crate::point::{Heading, Point};
use crate::segment::Segment;

/// An ordered, non-empty sequence of features forming one path.
///
/// Neighbouring features always have different names and meet end to start.
/// Appending a segment whose name matches the last feature extends that
/// feature instead of starting a new one, so the naming rule holds after
/// every append.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    features: Vec<Feature>,
}

impl Route {
    /// Starts a route from a single segment.
    pub fn new(segment: Segment) -> Self {
        Self {
            features: vec![Feature::new(segment)],
        }
    }

    /// Builds a route from an ordered list of features.
    pub fn from_features(features: Vec<Feature>) -> Result<Self> {
        check_features(&features)?;
        Ok(Self { features })
    }

    /// Returns this route extended by `segment`.
    ///
    /// The segment must start at [`Route::end`]. If it shares the last
    /// feature's name it is absorbed into that feature, otherwise it opens a
    /// new one.
    pub fn append(&self, segment: Segment) -> Result<Self> {
        if segment.p1() != self.end() {
            debug!(segment = %segment, end = %self.end(), "rejected append: not contiguous");
            return Err(GeoError::invalid(format!(
                "segment starts at {} but route ends at {}",
                segment.p1(),
                self.end()
            )));
        }

        let (last, head) = self.split_last();
        let mut features = Vec::with_capacity(self.features.len() + 1);
        features.extend_from_slice(head);

        if segment.name() == last.name() {
            debug!(feature = last.name(), "absorbing segment into last feature");
            features.push(last.append(segment)?);
        } else {
            debug!(from = last.name(), to = segment.name(), "starting new feature");
            features.push(last.clone());
            features.push(Feature::new(segment));
        }

        Ok(Self { features })
    }

    pub fn start(&self) -> Point {
        self.first_feature().start()
    }

    pub fn end(&self) -> Point {
        self.last_feature().end()
    }

    pub fn start_heading(&self) -> Heading {
        self.first_feature().start_heading()
    }

    pub fn end_heading(&self) -> Heading {
        self.last_feature().end_heading()
    }

    /// Total length in kilometers.
    pub fn length(&self) -> f64 {
        self.features.iter().map(Feature::length).sum()
    }

    /// Name of the feature currently at the tail.
    pub fn last_feature_name(&self) -> &str {
        self.last_feature().name()
    }

    pub fn last_feature(&self) -> &Feature {
        self.split_last().0
    }

    /// Features in travel order.
    pub fn features(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Every segment of every feature, in travel order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.features.iter().flat_map(Feature::segments)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn segment_count(&self) -> usize {
        self.features.iter().map(Feature::segment_count).sum()
    }

    fn first_feature(&self) -> &Feature {
        &self.features[0]
    }

    fn split_last(&self) -> (&Feature, &[Feature]) {
        let n = self.features.len();
        (&self.features[n - 1], &self.features[..n - 1])
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feature in &self.features {
            writeln!(f, "{}", feature)?;
        }
        Ok(())
    }
}

fn check_features(features: &[Feature]) -> Result<()> {
    if features.is_empty() {
        return Err(GeoError::invalid("route needs at least one feature"));
    }

    for (index, pair) in features.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.name() == next.name() {
            return Err(GeoError::invalid(format!(
                "features {} and {} are both named '{}'",
                index,
                index + 1,
                prev.name()
            )));
        }
        if prev.end() != next.start() {
            return Err(GeoError::invalid(format!(
                "feature '{}' starts at {} but '{}' ends at {}",
                next.name(),
                next.start(),
                prev.name(),
                prev.end()
            )));
        }
    }

    Ok(())
}
