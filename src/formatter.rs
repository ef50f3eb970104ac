//! Turn-by-turn direction text.
//!
//! [`compute_directions`] walks a route feature by feature and asks a
//! [`RouteFormatter`] for each line. Turns are bucketed by the size of the
//! shortest rotation between the previous heading and the new one:
//!
//! | angle           | wording             |
//! |-----------------|---------------------|
//! | `< 10`          | Continue            |
//! | `10 ..< 60`     | Turn slight *side*  |
//! | `60 ..< 120`    | Turn *side*         |
//! | `120 ..< 179`   | Turn sharp *side*   |
//! | `>= 179`        | U-turn              |

use std::fmt;

use tracing::trace;

use crate::error::{GeoError, Result};
use crate::feature::Feature;
use crate::point::Heading;
use crate::route::Route;
use crate::traits::RouteFormatter;

const CONTINUE_BELOW: f64 = 10.0;
const SLIGHT_BELOW: f64 = 60.0;
const NORMAL_BELOW: f64 = 120.0;
const SHARP_BELOW: f64 = 179.0;

/// Average walking speed used by [`WalkingFormatter::default`].
const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// Renders directions for `route`, starting out at `heading`.
///
/// Produces one newline-terminated line per feature. After each line the
/// reference heading becomes the start heading of the feature just rendered.
pub fn compute_directions<F>(formatter: &F, route: &Route, heading: Heading) -> String
where
    F: RouteFormatter + ?Sized,
{
    let mut directions = String::new();
    let mut current = heading;

    for feature in route.features() {
        let line = formatter.compute_line(feature, current);
        trace!(feature = feature.name(), heading = current.degrees(), line = line.trim_end());
        directions.push_str(&line);
        current = feature.start_heading();
    }

    directions
}

/// Like [`compute_directions`], validating a raw heading in degrees first.
pub fn compute_directions_from_degrees<F>(formatter: &F, route: &Route, degrees: f64) -> Result<String>
where
    F: RouteFormatter + ?Sized,
{
    let heading = Heading::new(degrees)?;
    Ok(compute_directions(formatter, route, heading))
}

/// Wording for the turn from `orig_heading` onto `new_heading`.
pub fn turn_description(orig_heading: Heading, new_heading: Heading) -> String {
    Turn::between(orig_heading, new_heading).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A classified change of heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Continue,
    Slight(Side),
    Normal(Side),
    Sharp(Side),
    UTurn,
}

impl Turn {
    /// Classifies the shortest rotation from `orig` to `new`.
    ///
    /// Clockwise rotations turn right, counter-clockwise ones turn left.
    pub fn between(orig: Heading, new: Heading) -> Self {
        let clockwise = orig.clockwise_to(new);
        let counter_clockwise = new.clockwise_to(orig);
        let angle = clockwise.min(counter_clockwise);
        let side = if clockwise <= counter_clockwise {
            Side::Right
        } else {
            Side::Left
        };

        if angle < CONTINUE_BELOW {
            Turn::Continue
        } else if angle < SLIGHT_BELOW {
            Turn::Slight(side)
        } else if angle < NORMAL_BELOW {
            Turn::Normal(side)
        } else if angle < SHARP_BELOW {
            Turn::Sharp(side)
        } else {
            Turn::UTurn
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Turn::Slight(side) | Turn::Normal(side) | Turn::Sharp(side) => Some(*side),
            Turn::Continue | Turn::UTurn => None,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Continue => f.write_str("Continue"),
            Turn::Slight(side) => write!(f, "Turn slight {}", side),
            Turn::Normal(side) => write!(f, "Turn {}", side),
            Turn::Sharp(side) => write!(f, "Turn sharp {}", side),
            Turn::UTurn => f.write_str("U-turn"),
        }
    }
}

/// Directions for someone on foot, with durations in minutes.
#[derive(Debug, Clone)]
pub struct WalkingFormatter {
    speed_kmh: f64,
}

impl Default for WalkingFormatter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_WALKING_SPEED_KMH,
        }
    }
}

impl WalkingFormatter {
    /// Creates a formatter for a walking speed in km/h, which must be a
    /// positive finite number.
    pub fn new(speed_kmh: f64) -> Result<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(GeoError::invalid(format!(
                "walking speed {} km/h must be positive",
                speed_kmh
            )));
        }
        Ok(Self { speed_kmh })
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Whole minutes needed to walk `km`.
    fn km_to_minutes(&self, km: f64) -> u64 {
        (km / self.speed_kmh * 60.0).round() as u64
    }
}

impl RouteFormatter for WalkingFormatter {
    fn compute_line(&self, feature: &Feature, orig_heading: Heading) -> String {
        let minutes = self.km_to_minutes(feature.length());
        format!(
            "{} onto {} and walk for {} {}.\n",
            turn_description(orig_heading, feature.start_heading()),
            feature.name(),
            minutes,
            if minutes == 1 { "minute" } else { "minutes" }
        )
    }
}

/// Directions for a driver, with distances in kilometers.
#[derive(Debug, Clone)]
pub struct DrivingFormatter {
    /// Decimal places shown for distances.
    pub decimals: usize,
}

impl Default for DrivingFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl RouteFormatter for DrivingFormatter {
    fn compute_line(&self, feature: &Feature, orig_heading: Heading) -> String {
        format!(
            "{} onto {} and go {:.*} kilometers.\n",
            turn_description(orig_heading, feature.start_heading()),
            feature.name(),
            self.decimals,
            feature.length()
        )
    }
}
