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

//! The `great_circle` module contains functions for calculating distances,
//! bearings and positions along great circles on the spherical Earth.
//!
//! The formulae are described by Chris Veness in
//! [Calculate distance, bearing and more between Latitude/Longitude points](https://www.movable-type.co.uk/scripts/latlong.html).
//! The point to arc segment algorithm is from
//! [Distance from Lat/Lng point to Minor Arc Segment](http://stackoverflow.com/questions/32771458/distance-from-lat-lng-point-to-minor-arc-segment).

#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::earth::MEAN_RADIUS;
use crate::{Angle, Coordinate, GeoPoint, Length};
use angle_sc::trig::UnitNegRange;
use core::f64::consts::FRAC_PI_2;

/// Calculate the great circle (central) angle between a pair of positions.
///
/// It uses the atan2 (Vincenty) form of the great circle distance formula,
/// which is well conditioned for both very short and nearly antipodal arcs.  
/// The positions are put into a canonical order first, so that swapping
/// `a` and `b` performs exactly the same floating point operations.
/// * `a`, `b` - the positions.
///
/// returns the angle between the positions, in [0, π].
#[must_use]
pub fn calculate_central_angle(a: &impl Coordinate, b: &impl Coordinate) -> Angle {
    let (lat1, lon1) = (a.latitude().radians(), a.longitude().radians());
    let (lat2, lon2) = (b.latitude().radians(), b.longitude().radians());
    let ((phi1, lambda1), (phi2, lambda2)) = if lat1
        .total_cmp(&lat2)
        .then_with(|| lon1.total_cmp(&lon2))
        .is_gt()
    {
        ((lat2, lon2), (lat1, lon1))
    } else {
        ((lat1, lon1), (lat2, lon2))
    };

    let delta_lambda = libm::fabs(lambda1 - lambda2);

    let sin_phi1 = libm::sin(phi1);
    let cos_phi1 = libm::cos(phi1);
    let sin_phi2 = libm::sin(phi2);
    let cos_phi2 = libm::cos(phi2);
    let cos_delta_lambda = libm::cos(delta_lambda);

    let y1 = cos_phi2 * libm::sin(delta_lambda);
    let y2 = cos_phi1 * sin_phi2 - sin_phi1 * cos_phi2 * cos_delta_lambda;
    let x = sin_phi1 * sin_phi2 + cos_phi1 * cos_phi2 * cos_delta_lambda;

    Angle::from_radians(libm::fabs(libm::atan2(libm::sqrt(y1 * y1 + y2 * y2), x)))
}

/// Calculate the great circle distance between a pair of positions.
/// * `a`, `b` - the positions.
///
/// returns the distance along the surface of the Earth.  
/// The result is identical if `a` and `b` are swapped.
#[must_use]
pub fn calculate_distance(a: &impl Coordinate, b: &impl Coordinate) -> Length {
    MEAN_RADIUS * calculate_central_angle(a, b).radians()
}

/// Calculate the initial bearing of the great circle from `start` to `end`.
/// * `start`, `end` - the positions.
///
/// returns the bearing clockwise from North, in [-π, π].
#[must_use]
pub fn calculate_bearing(start: &impl Coordinate, end: &impl Coordinate) -> Angle {
    let lat_a = start.latitude();
    let lat_b = end.latitude();
    let delta_lon = end.longitude() - start.longitude();

    let cos_lat_b = lat_b.cos();
    let y = delta_lon.sin() * cos_lat_b;
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * cos_lat_b * delta_lon.cos();

    Angle::from_radians(libm::atan2(y, x))
}

/// Calculate the position at `distance` along the great circle from `point`
/// with initial `bearing`.
/// * `point` - the start position.
/// * `bearing` - the initial bearing.
/// * `distance` - the distance along the great circle.
///
/// returns the destination position, its longitude is not wrapped.
#[must_use]
pub fn calculate_destination(
    point: &impl Coordinate,
    bearing: Angle,
    distance: Length,
) -> GeoPoint {
    let lat1 = point.latitude();
    let delta = distance / MEAN_RADIUS;
    let cos_delta = libm::cos(delta);
    let sin_delta = libm::sin(delta);
    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();

    let lat2 = Angle::from_radians(libm::asin(
        UnitNegRange::clamp(sin_lat1 * cos_delta + cos_lat1 * sin_delta * bearing.cos()).0,
    ));
    let lon2 = point.longitude()
        + Angle::from_radians(libm::atan2(
            bearing.sin() * sin_delta * cos_lat1,
            cos_delta - sin_lat1 * lat2.sin(),
        ));

    GeoPoint::new(lat2, lon2)
}

/// Calculate the position half way along the great circle arc between a
/// pair of positions.
/// * `a`, `b` - the positions.
///
/// returns the mid point, its longitude is not wrapped.
#[must_use]
pub fn calculate_mid_point(a: &impl Coordinate, b: &impl Coordinate) -> GeoPoint {
    let lat1 = a.latitude();
    let lat2 = b.latitude();
    let delta_lon = b.longitude() - a.longitude();

    let bx = lat2.cos() * delta_lon.cos();
    let by = lat2.cos() * delta_lon.sin();
    let cos_lat1_bx = lat1.cos() + bx;

    let lat3 = libm::atan2(
        lat1.sin() + lat2.sin(),
        libm::sqrt(cos_lat1_bx * cos_lat1_bx + by * by),
    );
    let lon3 = a.longitude() + Angle::from_radians(libm::atan2(by, cos_lat1_bx));

    GeoPoint::new(Angle::from_radians(lat3), lon3)
}

/// Calculate the signed across track distance, in radians, of a position
/// from the great circle with the given start bearing.
/// * `distance13` - the distance from the start to the position.
/// * `bearing13` - the bearing from the start to the position.
/// * `bearing12` - the bearing of the great circle.
fn calculate_xtd_radians(distance13: Length, bearing13: Angle, bearing12: Angle) -> f64 {
    let sin_xtd = libm::sin(distance13 / MEAN_RADIUS) * (bearing13 - bearing12).sin();
    libm::asin(UnitNegRange::clamp(sin_xtd).0)
}

/// Calculate the across track distance of a position from the great circle
/// through `arc_a` and `arc_b`.
///
/// Note: the great circle is not limited to the arc between `arc_a` and
/// `arc_b`, see `calculate_distance_to_arc_segment`.  
/// The calculation is made from `arc_a`, so swapping `arc_a` and `arc_b` can
/// give a slightly different result for long or nearly antipodal arcs.
/// * `point` - the position.
/// * `arc_a`, `arc_b` - positions defining the great circle.
///
/// returns the absolute across track distance.
#[must_use]
pub fn calculate_distance_to_arc(
    point: &impl Coordinate,
    arc_a: &impl Coordinate,
    arc_b: &impl Coordinate,
) -> Length {
    let bearing12 = calculate_bearing(arc_a, arc_b);
    let bearing13 = calculate_bearing(arc_a, point);
    let distance13 = calculate_distance(arc_a, point);

    let xtd = calculate_xtd_radians(distance13, bearing13, bearing12);
    MEAN_RADIUS * libm::fabs(xtd)
}

/// The position on an arc segment closest to a point.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ClosestPosition {
    /// The start of the segment.
    Start,
    /// The end of the segment.
    End,
    /// The position at the distance along the segment's initial bearing.
    Alongside(Angle, Length),
}

/// Calculate the distance from a position to an arc segment and where on
/// the segment the closest position lies.
fn calculate_segment_distance_and_closest(
    point: &impl Coordinate,
    start: &impl Coordinate,
    end: &impl Coordinate,
) -> (Length, ClosestPosition) {
    let distance13 = calculate_distance(start, point);
    let distance12 = calculate_distance(start, end);

    // a zero length segment is a single position
    if distance12.is_zero() {
        return (distance13, ClosestPosition::Start);
    }

    let bearing12 = calculate_bearing(start, end);
    let bearing13 = calculate_bearing(start, point);

    // Is the relative bearing obtuse?
    if (bearing13 - bearing12).abs() > Angle::from_radians(FRAC_PI_2) {
        (distance13, ClosestPosition::Start)
    } else {
        let xtd = calculate_xtd_radians(distance13, bearing13, bearing12);

        let cos_atd = libm::cos(distance13 / MEAN_RADIUS) / libm::cos(xtd);
        let distance14 = MEAN_RADIUS * libm::acos(UnitNegRange::clamp(cos_atd).0);

        // Is the closest position beyond the end of the segment?
        if distance14 > distance12 {
            (calculate_distance(end, point), ClosestPosition::End)
        } else {
            (
                MEAN_RADIUS * libm::fabs(xtd),
                ClosestPosition::Alongside(bearing12, distance14),
            )
        }
    }
}

/// Calculate the shortest distance from a position to the great circle arc
/// segment between `start` and `end`.
/// * `point` - the position.
/// * `start`, `end` - the start and end positions of the segment.
///
/// returns the distance to the across track position if it lies within the
/// segment, otherwise the distance to the nearer end of the segment.
#[must_use]
pub fn calculate_distance_to_arc_segment(
    point: &impl Coordinate,
    start: &impl Coordinate,
    end: &impl Coordinate,
) -> Length {
    calculate_segment_distance_and_closest(point, start, end).0
}

/// Calculate the shortest distance from a position to the great circle arc
/// segment between `start` and `end` and the closest position on the segment.
/// * `point` - the position.
/// * `start`, `end` - the start and end positions of the segment.
///
/// returns the distance and the closest position on the segment.
#[must_use]
pub fn calculate_distance_and_nearest_point_to_arc_segment(
    point: &impl Coordinate,
    start: &impl Coordinate,
    end: &impl Coordinate,
) -> (Length, GeoPoint) {
    let (distance, closest) = calculate_segment_distance_and_closest(point, start, end);
    let nearest = match closest {
        ClosestPosition::Start => GeoPoint::new(start.latitude(), start.longitude()),
        ClosestPosition::End => GeoPoint::new(end.latitude(), end.longitude()),
        ClosestPosition::Alongside(bearing, atd) => calculate_destination(start, bearing, atd),
    };
    (distance, nearest)
}
