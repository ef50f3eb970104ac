//! Test fixtures for route-directions.
//!
//! Provides named points around the Technion campus (the region the default
//! flat-earth scale is calibrated for) and a small catalog of segments that
//! chain into a walkable route.

#![allow(dead_code)]

pub mod technion_locations;

pub use technion_locations::*;
