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

//! The length module contains the `Length` type: a signed distance stored in
//! metres.
//!
//! Every distance returned by the calculator functions is a `Length`, so
//! values in different units cannot be mixed by accident.

#![allow(clippy::float_cmp)]

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use icao_units::non_si::NauticalMiles;
use icao_units::si::Metres;

/// A distance in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    /// A zero `Length`.
    pub const ZERO: Self = Self(0.0);
    /// The most negative finite `Length`.
    pub const MIN: Self = Self(f64::MIN);
    /// The largest finite `Length`.
    pub const MAX: Self = Self(f64::MAX);
    /// An infinite `Length`.
    pub const INFINITY: Self = Self(f64::INFINITY);

    /// Construct a `Length` from a value in metres.
    #[must_use]
    pub const fn from_metres(metres: f64) -> Self {
        Self(metres)
    }

    /// Construct a `Length` from a value in kilometres.
    #[must_use]
    pub const fn from_kilometres(kilometres: f64) -> Self {
        Self(kilometres * 1000.0)
    }

    /// Construct a `Length` from a value in centimetres.
    #[must_use]
    pub const fn from_centimetres(centimetres: f64) -> Self {
        Self(centimetres / 100.0)
    }

    /// Construct a `Length` from a value in millimetres.
    #[must_use]
    pub const fn from_millimetres(millimetres: f64) -> Self {
        Self(millimetres / 1000.0)
    }

    /// The `Length` in metres.
    #[must_use]
    pub const fn metres(self) -> f64 {
        self.0
    }

    /// The `Length` in kilometres.
    #[must_use]
    pub const fn kilometres(self) -> f64 {
        self.0 / 1000.0
    }

    /// The `Length` in centimetres.
    #[must_use]
    pub const fn centimetres(self) -> f64 {
        self.0 * 100.0
    }

    /// The `Length` in millimetres.
    #[must_use]
    pub const fn millimetres(self) -> f64 {
        self.0 * 1000.0
    }

    /// The `Length` in international nautical miles.
    #[must_use]
    pub fn nautical_miles(self) -> f64 {
        NauticalMiles::from(Metres(self.0)).0
    }

    /// Whether the `Length` is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Whether the `Length` is positive infinity.
    #[must_use]
    pub fn is_positive_infinity(self) -> bool {
        self.0 == f64::INFINITY
    }

    /// The sign of the `Length`: -1, 0 or 1.  
    /// Zero and NaN lengths return 0.
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

    /// The absolute value of the `Length`.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }

    /// The shorter of two lengths.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// The longer of two lengths.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Length {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Length {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, length: Length) -> Self::Output {
        Length(length.0 * self)
    }
}

impl Div<f64> for Length {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        Self(self.0 / scalar)
    }
}

impl Div for Length {
    type Output = f64;

    /// The ratio of two lengths.
    fn div(self, other: Self) -> Self::Output {
        self.0 / other.0
    }
}

impl From<Metres> for Length {
    fn from(metres: Metres) -> Self {
        Self(metres.0)
    }
}

impl From<Length> for Metres {
    fn from(length: Length) -> Self {
        Self(length.0)
    }
}

impl From<Length> for NauticalMiles {
    fn from(length: Length) -> Self {
        Self::from(Metres(length.0))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
