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

//! The `intersection` module contains functions for calculating the
//! intersections of great circles and great circle arc segments.
//!
//! The great circle through a pair of positions is represented by its pole:
//! the normal to the plane of the great circle.  
//! A pair of distinct great circles intersect at two antipodal points which
//! lie along the cross product of their poles.
//!
//! An intersection point lies on an arc segment if the sum of the central
//! angles from the point to the ends of the segment equals the central angle
//! of the segment, within an accuracy.

#![allow(clippy::suboptimal_flops)]

use crate::vector::{calculate_pole, to_geo_point};
use crate::{Angle, Coordinate, GeoPoint};
use angle_sc::trig::UnitNegRange;
use unit_sphere::Vector3d;

/// The default accuracy of `calculate_arc_segment_intersection`, in radians.
pub const DEFAULT_ACCURACY: f64 = 1e-12;

/// The intersection points of a pair of great circle arc segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not intersect.
    None,
    /// The segments intersect at a single point.
    Single(GeoPoint),
    /// Both intersection points of the great circles lie on the segments.
    Double(GeoPoint, GeoPoint),
}

impl SegmentIntersection {
    /// The first intersection point, if any.
    #[must_use]
    pub const fn first(&self) -> Option<GeoPoint> {
        match *self {
            Self::None => None,
            Self::Single(p) | Self::Double(p, _) => Some(p),
        }
    }

    /// The second intersection point, only present if there is a first.
    #[must_use]
    pub const fn second(&self) -> Option<GeoPoint> {
        match *self {
            Self::Double(_, p) => Some(p),
            _ => None,
        }
    }

    /// Whether the segments do not intersect.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Calculate the intersection points of the great circles through a pair of
/// arcs.
/// * `start_a`, `end_a` - positions on the first great circle.
/// * `start_b`, `end_b` - positions on the second great circle.
///
/// returns the intersection point and its antipode, or None if the great
/// circles coincide or either arc has zero length.
#[must_use]
pub fn calculate_arc_intersection(
    start_a: &impl Coordinate,
    end_a: &impl Coordinate,
    start_b: &impl Coordinate,
    end_b: &impl Coordinate,
) -> Option<(GeoPoint, GeoPoint)> {
    let pole_a = calculate_pole(start_a, end_a);
    let pole_b = calculate_pole(start_b, end_b);

    let direction = pole_a.cross(&pole_b);
    if direction == Vector3d::zeros() {
        None
    } else {
        let point = to_geo_point(&direction);
        Some((point, point.antipode()))
    }
}

/// Calculate the central angle between a pair of positions from the dot
/// product of their points on the unit sphere.
///
/// The cosine of the angle is expressed in terms of the cosines of the sum
/// and difference of the latitudes to reduce the number of trigonometric
/// functions.
fn calculate_angle_between(a: &impl Coordinate, b: &impl Coordinate) -> Angle {
    let lon_cos = (a.longitude() - b.longitude()).cos();
    let lat_sub_cos = (a.latitude() - b.latitude()).cos();
    let lat_add_cos = (a.latitude() + b.latitude()).cos();

    let cos_angle = (lon_cos * (lat_sub_cos + lat_add_cos) + (lat_sub_cos - lat_add_cos)) / 2.0;
    Angle::from_radians(libm::acos(UnitNegRange::clamp(cos_angle).0))
}

/// Whether a position lies on the arc segment between `start` and `end`.
fn is_within_segment(
    point: &GeoPoint,
    start: &impl Coordinate,
    end: &impl Coordinate,
    accuracy: f64,
) -> bool {
    let to_start = calculate_angle_between(point, start);
    let to_end = calculate_angle_between(point, end);
    let length = calculate_angle_between(start, end);
    libm::fabs((to_start + to_end - length).radians()) < accuracy
}

/// Calculate the intersection points of a pair of great circle arc segments.
/// * `start_a`, `end_a` - the start and end positions of the first segment.
/// * `start_b`, `end_b` - the start and end positions of the second segment.
/// * `accuracy` - the accuracy of the point on segment test in radians,
///   see `DEFAULT_ACCURACY`.
///
/// returns the intersection points of the great circles that lie on both
/// segments.
#[must_use]
pub fn calculate_arc_segment_intersection(
    start_a: &impl Coordinate,
    end_a: &impl Coordinate,
    start_b: &impl Coordinate,
    end_b: &impl Coordinate,
    accuracy: f64,
) -> SegmentIntersection {
    let Some((p1, p2)) = calculate_arc_intersection(start_a, end_a, start_b, end_b) else {
        return SegmentIntersection::None;
    };

    let is_on_segments = |p: &GeoPoint| {
        is_within_segment(p, start_a, end_a, accuracy)
            && is_within_segment(p, start_b, end_b, accuracy)
    };

    match (is_on_segments(&p1), is_on_segments(&p2)) {
        (true, true) => SegmentIntersection::Double(p1, p2),
        (true, false) => SegmentIntersection::Single(p1),
        (false, true) => SegmentIntersection::Single(p2),
        (false, false) => SegmentIntersection::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_segment_intersection_accessors() {
        let a = GeoPoint::from_degrees(1.0, 2.0);
        let b = a.antipode();

        let none = SegmentIntersection::None;
        assert!(none.is_none());
        assert_eq!(None, none.first());
        assert_eq!(None, none.second());

        let single = SegmentIntersection::Single(a);
        assert!(!single.is_none());
        assert_eq!(Some(a), single.first());
        assert_eq!(None, single.second());

        let double = SegmentIntersection::Double(a, b);
        assert_eq!(Some(a), double.first());
        assert_eq!(Some(b), double.second());
    }

    #[test]
    fn test_calculate_arc_intersection() {
        let equator_a = GeoPoint::from_degrees(0.0, -1.0);
        let equator_b = GeoPoint::from_degrees(0.0, 1.0);
        let meridian_a = GeoPoint::from_degrees(-1.0, 0.0);
        let meridian_b = GeoPoint::from_degrees(1.0, 0.0);

        let (p1, p2) =
            calculate_arc_intersection(&equator_a, &equator_b, &meridian_a, &meridian_b)
                .expect("great circles should intersect");
        assert!(is_within_tolerance(0.0, p1.lat().degrees(), 1e-12));
        assert!(is_within_tolerance(0.0, p1.lon().degrees(), 1e-12));
        assert!(is_within_tolerance(0.0, p2.lat().degrees(), 1e-12));
        assert!(is_within_tolerance(180.0, p2.lon().degrees(), 1e-12));
        assert_eq!(p1.antipode(), p2);

        let istanbul = GeoPoint::from_degrees(42.0, 29.0);
        let washington = GeoPoint::from_degrees(39.0, -77.0);
        let reykjavik = GeoPoint::from_degrees(64.0, -22.0);
        let accra = GeoPoint::from_degrees(6.0, 0.0);

        let (p1, p2) = calculate_arc_intersection(&istanbul, &washington, &reykjavik, &accra)
            .expect("great circles should intersect");
        assert!(is_within_tolerance(54.671_715_907_183_2, p1.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(-14.544_131_677_976, p1.lon().degrees(), 1e-9));
        assert!(is_within_tolerance(-54.671_715_907_183_2, p2.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(165.455_868_322_024, p2.lon().degrees(), 1e-9));
    }

    #[test]
    fn test_calculate_arc_intersection_degenerate() {
        let a = GeoPoint::from_degrees(50.0, 18.0);
        let b = GeoPoint::from_degrees(50.0, 18.01);
        let c = GeoPoint::from_degrees(50.01, 18.0);

        // coincident great circles
        assert_eq!(None, calculate_arc_intersection(&a, &b, &a, &b));
        assert_eq!(None, calculate_arc_intersection(&a, &b, &b, &a));

        // zero length arcs
        assert_eq!(None, calculate_arc_intersection(&a, &a, &a, &c));
        assert_eq!(None, calculate_arc_intersection(&a, &c, &c, &c));
    }

    #[test]
    fn test_calculate_arc_segment_intersection() {
        let istanbul = GeoPoint::from_degrees(42.0, 29.0);
        let washington = GeoPoint::from_degrees(39.0, -77.0);
        let reykjavik = GeoPoint::from_degrees(64.0, -22.0);
        let accra = GeoPoint::from_degrees(6.0, 0.0);

        let result = calculate_arc_segment_intersection(
            &istanbul,
            &washington,
            &reykjavik,
            &accra,
            DEFAULT_ACCURACY,
        );
        let p = result.first().expect("segments should intersect");
        assert!(is_within_tolerance(54.671_715_907_183_2, p.lat().degrees(), 1e-9));
        assert!(is_within_tolerance(-14.544_131_677_976, p.lon().degrees(), 1e-9));
        assert_eq!(None, result.second());
    }

    #[test]
    fn test_calculate_arc_segment_intersection_crossing() {
        let equator_a = GeoPoint::from_degrees(0.0, -1.0);
        let equator_b = GeoPoint::from_degrees(0.0, 1.0);
        let meridian_a = GeoPoint::from_degrees(-1.0, 0.0);
        let meridian_b = GeoPoint::from_degrees(1.0, 0.0);

        let result = calculate_arc_segment_intersection(
            &equator_a,
            &equator_b,
            &meridian_a,
            &meridian_b,
            DEFAULT_ACCURACY,
        );
        let p = result.first().expect("segments should intersect");
        assert!(is_within_tolerance(0.0, p.lat().degrees(), 1e-12));
        assert!(is_within_tolerance(0.0, p.lon().degrees(), 1e-12));
        assert_eq!(None, result.second());

        // the reversed meridian finds the other intersection point first
        let result = calculate_arc_segment_intersection(
            &equator_a,
            &equator_b,
            &meridian_b,
            &meridian_a,
            DEFAULT_ACCURACY,
        );
        let (_, antipode) =
            calculate_arc_intersection(&equator_a, &equator_b, &meridian_b, &meridian_a)
                .expect("great circles should intersect");
        assert_eq!(SegmentIntersection::Single(antipode), result);
        assert!(is_within_tolerance(0.0, antipode.lat().degrees(), 1e-12));
        assert!(Angle::distance(antipode.lon(), Angle::ZERO).degrees() < 1e-12);

        // a meridian segment wholly North of the Equator
        let north = GeoPoint::from_degrees(2.0, 0.0);
        let result = calculate_arc_segment_intersection(
            &equator_a,
            &equator_b,
            &north,
            &meridian_b,
            DEFAULT_ACCURACY,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_calculate_arc_segment_intersection_both_points() {
        let istanbul = GeoPoint::from_degrees(42.0, 29.0);
        let washington = GeoPoint::from_degrees(39.0, -77.0);
        let reykjavik = GeoPoint::from_degrees(64.0, -22.0);
        let accra = GeoPoint::from_degrees(6.0, 0.0);

        // an accuracy wider than any segment accepts both points
        let (p1, p2) = calculate_arc_intersection(&istanbul, &washington, &reykjavik, &accra)
            .expect("great circles should intersect");
        let result =
            calculate_arc_segment_intersection(&istanbul, &washington, &reykjavik, &accra, 10.0);
        assert_eq!(SegmentIntersection::Double(p1, p2), result);
        assert_eq!(Some(p1), result.first());
        assert_eq!(Some(p1.antipode()), result.second());

        let equator_a = GeoPoint::from_degrees(0.0, -1.0);
        let equator_b = GeoPoint::from_degrees(0.0, 1.0);
        let meridian_a = GeoPoint::from_degrees(-1.0, 0.0);
        let meridian_b = GeoPoint::from_degrees(1.0, 0.0);

        let (p1, p2) =
            calculate_arc_intersection(&equator_a, &equator_b, &meridian_a, &meridian_b)
                .expect("great circles should intersect");
        let result = calculate_arc_segment_intersection(
            &equator_a,
            &equator_b,
            &meridian_a,
            &meridian_b,
            10.0,
        );
        assert_eq!(SegmentIntersection::Double(p1, p2), result);
        assert_eq!(p1.antipode(), p2);
    }

    #[test]
    fn test_calculate_angle_between() {
        let a = GeoPoint::from_degrees(0.0, 0.0);
        assert_eq!(Angle::ZERO, calculate_angle_between(&a, &a));

        let b = GeoPoint::from_degrees(0.0, 90.0);
        assert!(is_within_tolerance(90.0, calculate_angle_between(&a, &b).degrees(), 1e-12));

        let north = GeoPoint::from_degrees(90.0, 45.0);
        let angle = calculate_angle_between(&a, &north);
        assert!(is_within_tolerance(90.0, angle.degrees(), 1e-12));

        // an antipodal pair is clamped to π
        let c = GeoPoint::from_degrees(10.0, 20.0);
        let angle = calculate_angle_between(&c, &c.antipode());
        assert!(is_within_tolerance(180.0, angle.degrees(), 1e-5));

        let istanbul = GeoPoint::from_degrees(42.0, 29.0);
        let washington = GeoPoint::from_degrees(39.0, -77.0);
        assert!(is_within_tolerance(
            crate::calculate_central_angle(&istanbul, &washington).radians(),
            calculate_angle_between(&istanbul, &washington).radians(),
            1e-12
        ));
    }

    #[test]
    fn test_calculate_arc_segment_intersection_identical_segments() {
        let a = GeoPoint::from_degrees(50.0, 18.0);
        let b = GeoPoint::from_degrees(50.0, 18.01);

        assert_eq!(
            SegmentIntersection::None,
            calculate_arc_segment_intersection(&a, &b, &a, &b, DEFAULT_ACCURACY)
        );
        assert_eq!(
            SegmentIntersection::None,
            calculate_arc_segment_intersection(&a, &a, &a, &a, DEFAULT_ACCURACY)
        );
    }

    #[test]
    fn test_calculate_arc_segment_intersection_shared_end_points() {
        let start = GeoPoint::from_degrees(50.0, 18.0);
        let east = GeoPoint::from_degrees(50.0, 18.01);
        let north = GeoPoint::from_degrees(50.01, 18.0);

        let orderings = [
            (start, east, start, north),
            (east, start, start, north),
            (start, east, north, start),
            (east, start, north, start),
        ];
        for (a1, a2, b1, b2) in orderings {
            let result = calculate_arc_segment_intersection(&a1, &a2, &b1, &b2, DEFAULT_ACCURACY);
            let p = result.first().expect("segments should share a point");
            assert!(is_within_tolerance(50.0, p.lat().degrees(), 1e-9));
            assert!(is_within_tolerance(18.0, p.lon().degrees(), 1e-9));
            assert_eq!(None, result.second());
        }

        let a = GeoPoint::from_degrees(0.0, 0.0);
        let b = GeoPoint::from_degrees(0.0, 0.01);
        let c = GeoPoint::from_degrees(0.01, 0.0);
        let result = calculate_arc_segment_intersection(&a, &b, &a, &c, DEFAULT_ACCURACY);
        let p = result.first().expect("segments should share a point");
        assert!(is_within_tolerance(0.0, p.lat().degrees(), 1e-12));
        assert!(is_within_tolerance(0.0, p.lon().degrees(), 1e-12));
    }
}
