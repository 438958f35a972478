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

//! The coordinate module contains the `Coordinate` trait accepted by every
//! calculator function and `GeoPoint`, the position type they return.
//!
//! Any type that can provide a latitude and a longitude as `Angle`s can be
//! used with the calculator functions, including `unit_sphere::LatLong`.
//! Coordinates are not validated: the calculator functions accept any
//! values and NaN or infinite inputs propagate to their results.

use crate::Angle;
use angle_sc::{Degrees, Validate};
use core::fmt;
use unit_sphere::LatLong;

/// A position on the surface of the sphere.
pub trait Coordinate {
    /// The latitude, conventionally in [-π/2, π/2].
    fn latitude(&self) -> Angle;
    /// The longitude, conventionally in (-π, π].
    fn longitude(&self) -> Angle;
}

/// A latitude and longitude pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    lat: Angle,
    lon: Angle,
}

impl GeoPoint {
    /// Construct a `GeoPoint`.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    #[must_use]
    pub const fn new(lat: Angle, lon: Angle) -> Self {
        Self { lat, lon }
    }

    /// Construct a `GeoPoint` from a latitude and longitude in degrees.
    #[must_use]
    pub const fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(Angle::from_degrees(lat), Angle::from_degrees(lon))
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Angle {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Angle {
        self.lon
    }

    /// The diametrically opposite position.  
    /// Note: the longitude is shifted by π and not wrapped.
    #[must_use]
    pub fn antipode(&self) -> Self {
        Self::new(-self.lat, self.lon + Angle::PI)
    }
}

impl Coordinate for GeoPoint {
    fn latitude(&self) -> Angle {
        self.lat
    }

    fn longitude(&self) -> Angle {
        self.lon
    }
}

impl Validate for GeoPoint {
    /// Test whether a `GeoPoint` is valid.  
    /// Whether |`latitude`| <= 90° and `longitude` is finite.
    fn is_valid(&self) -> bool {
        self.lat.abs() <= Angle::from_degrees(90.0) && self.lon.radians().is_finite()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl Coordinate for LatLong {
    fn latitude(&self) -> Angle {
        Angle::from(self.lat())
    }

    fn longitude(&self) -> Angle {
        Angle::from(self.lon())
    }
}

impl From<&LatLong> for GeoPoint {
    fn from(a: &LatLong) -> Self {
        Self::new(a.latitude(), a.longitude())
    }
}

impl From<GeoPoint> for LatLong {
    fn from(a: GeoPoint) -> Self {
        Self::new(Degrees::from(a.lat), Degrees::from(a.lon))
    }
}
