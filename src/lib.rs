// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! sphere-geo
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for performing geometric calculations on a spherical model of
//! the Earth with the
//! [mean radius](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
//! of 6371 km.
//!
//! ## Great circle navigation
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle).  
//! This library calculates:
//!
//! - the distance and initial bearing between two positions;
//! - the destination from a position along a bearing at a given distance;
//! - the mid point between two positions;
//! - the across track distance of a position from a great circle or from a
//!   great circle arc segment, and the closest position on the segment;
//! - and the intersection points of two great circle arc segments.
//!
//! The formulae are from Chris Veness's
//! [Calculate distance, bearing and more between Latitude/Longitude points](https://www.movable-type.co.uk/scripts/latlong.html).
//!
//! ## Examples
//!
//! ```
//! use sphere_geo::{calculate_bearing, calculate_distance, GeoPoint};
//!
//! let istanbul = GeoPoint::from_degrees(42.0, 29.0);
//! let washington = GeoPoint::from_degrees(39.0, -77.0);
//!
//! let distance = calculate_distance(&istanbul, &washington);
//! assert_eq!(8319, distance.kilometres() as i32);
//!
//! let bearing = calculate_bearing(&istanbul, &washington);
//! assert_eq!(-50, bearing.degrees() as i32);
//! ```
//!
//! ```
//! use sphere_geo::{calculate_arc_segment_intersection, GeoPoint, DEFAULT_ACCURACY};
//!
//! let istanbul = GeoPoint::from_degrees(42.0, 29.0);
//! let washington = GeoPoint::from_degrees(39.0, -77.0);
//! let reykjavik = GeoPoint::from_degrees(64.0, -22.0);
//! let accra = GeoPoint::from_degrees(6.0, 0.0);
//!
//! let result = calculate_arc_segment_intersection(
//!     &istanbul,
//!     &washington,
//!     &reykjavik,
//!     &accra,
//!     DEFAULT_ACCURACY,
//! );
//! let point = result.first().unwrap();
//! assert_eq!(54, point.lat().degrees() as i32);
//! assert_eq!(-14, point.lon().degrees() as i32);
//! assert!(result.second().is_none());
//! ```
//!
//! ## Design
//!
//! Positions are passed to the calculation functions through the `Coordinate`
//! trait. It is implemented by this library's `GeoPoint` and by the
//! [unit-sphere](https://crates.io/crates/unit-sphere) `LatLong`, so either
//! may be used.
//!
//! The unit types `Angle`, `Length` and `Speed` are distinct, so an `Angle`
//! cannot be added to a `Length` by mistake.  
//! Longitudes returned by the functions are not normalised, they may lie
//! outside the range [-180°, 180°].
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`,
//!   `Radians` and `Validate` and clamp trigonometric values;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [libm](https://crates.io/crates/libm) - to perform trigonometric
//!   calculations without the standard library.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod angle;
pub mod coordinate;
pub mod earth;
pub mod great_circle;
pub mod intersection;
pub mod length;
pub mod speed;
mod vector;

pub use angle::Angle;
pub use coordinate::{Coordinate, GeoPoint};
pub use earth::MEAN_RADIUS;
pub use great_circle::{
    calculate_bearing, calculate_central_angle, calculate_destination, calculate_distance,
    calculate_distance_and_nearest_point_to_arc_segment, calculate_distance_to_arc,
    calculate_distance_to_arc_segment, calculate_mid_point,
};
pub use intersection::{
    calculate_arc_intersection, calculate_arc_segment_intersection, SegmentIntersection,
    DEFAULT_ACCURACY,
};
pub use length::Length;
pub use speed::Speed;

pub use angle_sc::{Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
