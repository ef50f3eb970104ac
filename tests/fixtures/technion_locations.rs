//! Named campus locations for route fixtures.
//!
//! Coordinates are in millionths of a degree and sit on a small grid so that
//! segment headings are exact compass directions.

use route_directions::{Point, Segment};

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: i32,
    pub lng: i32,
}

impl Location {
    pub const fn new(name: &'static str, lat: i32, lng: i32) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng).expect("fixture coordinates are in range")
    }
}

pub const ZIV_SQUARE: Location = Location::new("Ziv Square", 32_783_098, 35_014_528);
pub const MAIN_GATE: Location = Location::new("Main Gate", 32_776_000, 35_018_000);
pub const LIBRARY: Location = Location::new("Library", 32_777_500, 35_018_000);
pub const SENATE: Location = Location::new("Senate", 32_779_000, 35_018_000);
pub const SPORTS_CENTER: Location = Location::new("Sports Center", 32_779_000, 35_021_000);
pub const DORMS: Location = Location::new("Dorms", 32_781_000, 35_021_000);

pub fn segment(name: &str, from: Location, to: Location) -> Segment {
    Segment::new(name, from.point(), to.point()).expect("fixture segment names are non-empty")
}

/// Gate to dorms: north on Hashalom Rd, east on Senate Path, north on Dorms Way.
pub fn gate_to_dorms() -> Vec<Segment> {
    vec![
        segment("Hashalom Rd", MAIN_GATE, LIBRARY),
        segment("Hashalom Rd", LIBRARY, SENATE),
        segment("Senate Path", SENATE, SPORTS_CENTER),
        segment("Dorms Way", SPORTS_CENTER, DORMS),
    ]
}

/// Everything a picker could offer, including dead ends and reversed pieces.
pub fn campus_catalog() -> Vec<Segment> {
    let mut catalog = gate_to_dorms();
    catalog.push(segment("Hashalom Rd", SENATE, LIBRARY));
    catalog.push(segment("Senate Path", SPORTS_CENTER, SENATE));
    catalog.push(segment("Ziv Rd", SENATE, ZIV_SQUARE));
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segments_chain() {
        let segments = gate_to_dorms();
        for pair in segments.windows(2) {
            assert_eq!(pair[0].p2(), pair[1].p1());
        }
    }
}
