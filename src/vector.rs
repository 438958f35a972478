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

//! The vector module calculates great circle poles and converts points on
//! the unit sphere back to positions for the intersection calculation.
//!
//! Points are represented on the unit sphere with the x axis through the
//! Equator at the Greenwich meridian, the y axis through the Equator at 90°E
//! and the z axis through the North pole.

#![allow(clippy::suboptimal_flops)]

use crate::{Angle, Coordinate, GeoPoint};
use unit_sphere::Vector3d;

/// Calculate the pole of the great circle through a pair of positions,
/// i.e. the cross product of their points on the unit sphere.
///
/// It is calculated directly from the latitudes and longitudes.
/// The products are ordered so that the pole of a zero length arc is
/// exactly the zero vector.
/// * `a`, `b` - the positions.
#[must_use]
pub fn calculate_pole(a: &impl Coordinate, b: &impl Coordinate) -> Vector3d {
    let (a_lat, a_lon) = (a.latitude(), a.longitude());
    let (b_lat, b_lon) = (b.latitude(), b.longitude());

    let a_lat_cos = a_lat.cos();
    let a_lat_sin = a_lat.sin();
    let b_lat_cos = b_lat.cos();
    let b_lat_sin = b_lat.sin();

    let x = (a_lat_cos * a_lon.sin()) * b_lat_sin - a_lat_sin * (b_lat_cos * b_lon.sin());
    let y = a_lat_sin * (b_lat_cos * b_lon.cos()) - (a_lat_cos * a_lon.cos()) * b_lat_sin;
    let z = a_lat_cos * b_lat_cos * (b_lon - a_lon).sin();

    Vector3d::new(x, y, z)
}

/// Convert the direction of a non-zero vector to the position where it
/// meets the unit sphere.
#[must_use]
pub fn to_geo_point(v: &Vector3d) -> GeoPoint {
    let point = v.normalize();
    GeoPoint::new(
        Angle::from(unit_sphere::vector::latitude(&point)),
        Angle::from(unit_sphere::vector::longitude(&point)),
    )
}
