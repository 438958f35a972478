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

//! The angle module contains the `Angle` type: a plane angle stored in
//! radians.
//!
//! An `Angle` has no canonical range, e.g. a bearing may be negative and a
//! longitude may exceed π after a destination calculation.
//! Use `normalise` to map it into [0, 2π).

#![allow(clippy::float_cmp)]

use angle_sc::{Degrees, Radians};
use core::f64::consts::{PI, TAU};
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// The number of radians in a degree.
const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// A plane angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// A zero `Angle`.
    pub const ZERO: Self = Self(0.0);
    /// A half turn, π radians.
    pub const PI: Self = Self(PI);
    /// A full turn, 2π radians.
    pub const FULL_CIRCLE: Self = Self(TAU);

    /// Construct an `Angle` from a value in radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Construct an `Angle` from a value in degrees.
    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees * RADIANS_PER_DEGREE)
    }

    /// Construct an `Angle` from degrees, minutes and seconds.  
    /// The components are summed, so a negative angle requires all three
    /// components to be negative.
    /// * `degrees`, `minutes` - whole degrees and minutes of arc.
    /// * `seconds` - seconds of arc.
    ///
    /// # Examples
    /// ```
    /// use sphere_geo::Angle;
    /// use angle_sc::is_within_tolerance;
    ///
    /// let angle = Angle::from_dms(53, 19, 14.0);
    /// assert!(is_within_tolerance(53.320555555555556, angle.degrees(), 1e-12));
    /// ```
    #[must_use]
    pub fn from_dms(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self::from_degrees(f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0)
    }

    /// The value of the `Angle` in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// The value of the `Angle` in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0 / RADIANS_PER_DEGREE
    }

    /// The sine of the `Angle`.
    #[must_use]
    pub fn sin(self) -> f64 {
        libm::sin(self.0)
    }

    /// The cosine of the `Angle`.
    #[must_use]
    pub fn cos(self) -> f64 {
        libm::cos(self.0)
    }

    /// The `Angle` mapped into [0, 2π).
    ///
    /// Uses a floored modulo, so negative angles wrap up from 2π.
    ///
    /// # Examples
    /// ```
    /// use sphere_geo::Angle;
    /// use angle_sc::is_within_tolerance;
    ///
    /// let angle = Angle::from_degrees(-2.0).normalise();
    /// assert!(is_within_tolerance(358.0, angle.degrees(), 1e-12));
    /// ```
    #[must_use]
    pub fn normalise(self) -> Self {
        let remainder = libm::fmod(self.0, TAU);
        if remainder < 0.0 {
            let wrapped = remainder + TAU;
            // a tiny negative remainder rounds up to a full turn
            Self(if wrapped < TAU { wrapped } else { 0.0 })
        } else {
            Self(remainder)
        }
    }

    /// The absolute value of the `Angle`.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }

    /// The sign of the `Angle`: -1, 0 or 1.  
    /// Zero and NaN angles return 0.
    #[must_use]
    pub fn sign(self) -> i32 {
        if self.0 > 0.0 {
            1
        } else if self.0 < 0.0 {
            -1
        } else {
            0
        }
    }

    /// The smaller of two angles.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// The larger of two angles.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    /// The angular separation between a pair of directions, in [0, π].
    /// * `a`, `b` - the directions.
    ///
    /// # Examples
    /// ```
    /// use sphere_geo::Angle;
    /// use angle_sc::is_within_tolerance;
    ///
    /// let a = Angle::from_degrees(1.0);
    /// let b = Angle::from_degrees(359.0);
    /// assert!(is_within_tolerance(2.0, Angle::distance(a, b).degrees(), 1e-10));
    /// ```
    #[must_use]
    pub fn distance(a: Self, b: Self) -> Self {
        let delta = (a - b).normalise();
        if delta <= Self::PI {
            delta
        } else {
            Self::FULL_CIRCLE - delta
        }
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, angle: Angle) -> Self::Output {
        Angle(angle.0 * self)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        Self(self.0 / scalar)
    }
}

impl Div for Angle {
    type Output = f64;

    /// The ratio of two angles.
    fn div(self, other: Self) -> Self::Output {
        self.0 / other.0
    }
}

impl From<Degrees> for Angle {
    fn from(degrees: Degrees) -> Self {
        Self::from_degrees(degrees.0)
    }
}

impl From<Radians> for Angle {
    fn from(radians: Radians) -> Self {
        Self(radians.0)
    }
}

impl From<Angle> for Degrees {
    fn from(angle: Angle) -> Self {
        Self(angle.degrees())
    }
}

impl From<Angle> for Radians {
    fn from(angle: Angle) -> Self {
        Self(angle.0)
    }
}

impl From<Angle> for angle_sc::Angle {
    fn from(angle: Angle) -> Self {
        Self::from(Radians(angle.0))
    }
}

impl From<angle_sc::Angle> for Angle {
    /// The `Angle` in (-π, π] of an `angle_sc::Angle`.
    fn from(angle: angle_sc::Angle) -> Self {
        Self(libm::atan2(angle.sin().0, angle.cos().0))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
