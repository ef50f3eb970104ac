//! Points, headings and the flat-earth distance approximation.
//!
//! Coordinates are stored as integer millionths of a degree so that equality
//! and hashing are exact. Distances and headings are derived in floating
//! point using fixed kilometer-per-degree scale factors, which is only
//! accurate over a small local area.

use std::fmt;

use serde::Serialize;

use crate::error::{GeoError, Result};

/// Number of stored units per degree.
pub const MICRO_DEGREES: i32 = 1_000_000;

pub const MIN_LATITUDE: i32 = -90 * MICRO_DEGREES;
pub const MAX_LATITUDE: i32 = 90 * MICRO_DEGREES;
pub const MIN_LONGITUDE: i32 = -180 * MICRO_DEGREES;
pub const MAX_LONGITUDE: i32 = 180 * MICRO_DEGREES;

/// Kilometers per degree of latitude in the reference region.
const DEFAULT_KM_PER_DEGREE_LATITUDE: f64 = 110.901;

/// Kilometers per degree of longitude in the reference region.
const DEFAULT_KM_PER_DEGREE_LONGITUDE: f64 = 93.681;

/// A location given in millionths of a degree.
///
/// North latitudes and east longitudes are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    latitude: i32,
    longitude: i32,
}

impl Point {
    /// Creates a point, rejecting coordinates outside the legal ranges.
    pub fn new(latitude: i32, longitude: i32) -> Result<Self> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(GeoError::invalid(format!(
                "latitude {} is outside [{}, {}]",
                latitude, MIN_LATITUDE, MAX_LATITUDE
            )));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(GeoError::invalid(format!(
                "longitude {} is outside [{}, {}]",
                longitude, MIN_LONGITUDE, MAX_LONGITUDE
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> i32 {
        self.latitude
    }

    pub fn longitude(&self) -> i32 {
        self.longitude
    }

    /// Distance in kilometers using the reference-region scale.
    pub fn distance_to(&self, other: &Point) -> f64 {
        FlatEarth::default().distance(self, other)
    }

    /// Compass heading from this point towards `other`.
    ///
    /// Fails with [`GeoError::UndefinedHeading`] when the points coincide.
    pub fn heading_to(&self, other: &Point) -> Result<Heading> {
        FlatEarth::default().heading(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Planar scale used to turn coordinate deltas into kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatEarth {
    pub km_per_degree_latitude: f64,
    pub km_per_degree_longitude: f64,
}

impl Default for FlatEarth {
    fn default() -> Self {
        Self {
            km_per_degree_latitude: DEFAULT_KM_PER_DEGREE_LATITUDE,
            km_per_degree_longitude: DEFAULT_KM_PER_DEGREE_LONGITUDE,
        }
    }
}

impl FlatEarth {
    pub fn new(km_per_degree_latitude: f64, km_per_degree_longitude: f64) -> Self {
        Self {
            km_per_degree_latitude,
            km_per_degree_longitude,
        }
    }

    /// Scaled (latitude, longitude) deltas of `from - to`, still multiplied
    /// by [`MICRO_DEGREES`].
    fn scaled_delta(&self, from: &Point, to: &Point) -> (f64, f64) {
        let delta_lat = i64::from(from.latitude) - i64::from(to.latitude);
        let delta_lng = i64::from(from.longitude) - i64::from(to.longitude);

        (
            delta_lat as f64 * self.km_per_degree_latitude,
            delta_lng as f64 * self.km_per_degree_longitude,
        )
    }

    /// Distance in kilometers between two points.
    pub fn distance(&self, from: &Point, to: &Point) -> f64 {
        let (y, x) = self.scaled_delta(from, to);
        y.hypot(x) / f64::from(MICRO_DEGREES)
    }

    /// Compass heading (north = 0, clockwise) from `from` towards `to`.
    pub fn heading(&self, from: &Point, to: &Point) -> Result<Heading> {
        if from == to {
            return Err(GeoError::UndefinedHeading { point: *from });
        }

        // atan2 is east-zero counter-clockwise; remap to north-zero clockwise.
        let (y, x) = self.scaled_delta(from, to);
        let degrees = -y.atan2(x).to_degrees() + 270.0;
        Ok(Heading::wrapped(degrees))
    }
}

/// A compass direction in degrees: 0 is north, increasing clockwise.
///
/// Always within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Heading(f64);

impl Heading {
    pub const NORTH: Heading = Heading(0.0);
    pub const EAST: Heading = Heading(90.0);
    pub const SOUTH: Heading = Heading(180.0);
    pub const WEST: Heading = Heading(270.0);

    /// Validates a heading given in degrees.
    pub fn new(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() || !(0.0..360.0).contains(&degrees) {
            return Err(GeoError::invalid(format!(
                "heading {} is outside [0, 360)",
                degrees
            )));
        }
        // folds -0.0 into 0.0
        Ok(Self(degrees + 0.0))
    }

    /// Folds any finite angle into `[0, 360)`.
    pub(crate) fn wrapped(degrees: f64) -> Self {
        let folded = degrees.rem_euclid(360.0);
        // rem_euclid may round up to exactly 360 for tiny negative inputs
        if folded >= 360.0 {
            Self(0.0)
        } else {
            Self(folded)
        }
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Clockwise rotation needed to get from `self` to `other`, in `[0, 360)`.
    pub fn clockwise_to(&self, other: Heading) -> f64 {
        Self::wrapped(other.0 - self.0).0
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl TryFrom<f64> for Heading {
    type Error = GeoError;

    fn try_from(degrees: f64) -> Result<Self> {
        Heading::new(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Angular gap that treats 0 and 360 as the same direction.
    fn angular_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    fn ziv() -> Point {
        Point::new(32_783_098, 35_014_528).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Point::new(MAX_LATITUDE, MAX_LONGITUDE).is_ok());
        assert!(Point::new(MIN_LATITUDE, MIN_LONGITUDE).is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let err = Point::new(MAX_LATITUDE + 1, 0).unwrap_err();
        assert!(matches!(err, GeoError::InvalidInput { .. }));
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn test_out_of_range_longitude_rejected() {
        let err = Point::new(0, MIN_LONGITUDE - 1).unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        assert_eq!(ziv().distance_to(&ziv()), 0.0);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        let a = Point::new(32_000_000, 35_000_000).unwrap();
        let b = Point::new(33_000_000, 35_000_000).unwrap();
        let dist = a.distance_to(&b);
        assert!((dist - 110.901).abs() < 1e-9, "got {}", dist);
    }

    #[test]
    fn test_distance_one_degree_longitude() {
        let a = Point::new(32_000_000, 35_000_000).unwrap();
        let b = Point::new(32_000_000, 36_000_000).unwrap();
        let dist = a.distance_to(&b);
        assert!((dist - 93.681).abs() < 1e-9, "got {}", dist);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = ziv();
        let b = Point::new(32_778_000, 35_021_000).unwrap();
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_distance_is_euclidean_combination() {
        let a = Point::new(0, 0).unwrap();
        let b = Point::new(3_000, 4_000).unwrap();
        let expected = ((3_000.0 * 110.901_f64).powi(2) + (4_000.0 * 93.681_f64).powi(2)).sqrt()
            / 1_000_000.0;
        assert!((a.distance_to(&b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_custom_scale() {
        let flat = FlatEarth::new(100.0, 50.0);
        let a = Point::new(0, 0).unwrap();
        let b = Point::new(0, 2_000_000).unwrap();
        assert!((flat.distance(&a, &b) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading_cardinal_directions() {
        let origin = ziv();
        let north = Point::new(origin.latitude() + 1_000, origin.longitude()).unwrap();
        let east = Point::new(origin.latitude(), origin.longitude() + 1_000).unwrap();
        let south = Point::new(origin.latitude() - 1_000, origin.longitude()).unwrap();
        let west = Point::new(origin.latitude(), origin.longitude() - 1_000).unwrap();

        let cases = [(north, 0.0), (east, 90.0), (south, 180.0), (west, 270.0)];
        for (target, expected) in cases {
            let heading = origin.heading_to(&target).unwrap().degrees();
            assert!((0.0..360.0).contains(&heading));
            assert!(
                angular_gap(heading, expected) < 1e-9,
                "expected {} got {}",
                expected,
                heading
            );
        }
    }

    #[test]
    fn test_heading_quadrant() {
        let origin = ziv();
        let north_east = Point::new(origin.latitude() + 1_000, origin.longitude() + 1_000).unwrap();
        let heading = origin.heading_to(&north_east).unwrap().degrees();
        assert!(heading > 0.0 && heading < 90.0, "got {}", heading);

        let south_west = Point::new(origin.latitude() - 1_000, origin.longitude() - 1_000).unwrap();
        let heading = origin.heading_to(&south_west).unwrap().degrees();
        assert!(heading > 180.0 && heading < 270.0, "got {}", heading);
    }

    #[test]
    fn test_heading_to_same_point_is_undefined() {
        let err = ziv().heading_to(&ziv()).unwrap_err();
        assert_eq!(err, GeoError::UndefinedHeading { point: ziv() });
    }

    #[test]
    fn test_heading_validation() {
        assert!(Heading::new(0.0).is_ok());
        assert!(Heading::new(359.999).is_ok());
        assert!(Heading::new(360.0).is_err());
        assert!(Heading::new(-0.5).is_err());
        assert!(Heading::new(f64::NAN).is_err());
    }

    #[test]
    fn test_negative_zero_heading_is_north() {
        let heading = Heading::new(-0.0).unwrap();
        assert!(heading.degrees().is_sign_positive());
        assert_eq!(heading.to_string(), "0°");
    }

    #[test]
    fn test_wrapped_never_reaches_360() {
        assert_eq!(Heading::wrapped(360.0).degrees(), 0.0);
        assert_eq!(Heading::wrapped(450.0).degrees(), 90.0);
        assert_eq!(Heading::wrapped(-90.0).degrees(), 270.0);
        assert!(Heading::wrapped(-1e-20).degrees() < 360.0);
    }

    #[test]
    fn test_clockwise_to_wraps() {
        let a = Heading::new(350.0).unwrap();
        let b = Heading::new(10.0).unwrap();
        assert!((a.clockwise_to(b) - 20.0).abs() < 1e-9);
        assert!((b.clockwise_to(a) - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(ziv().to_string(), "(32783098, 35014528)");
    }
}
