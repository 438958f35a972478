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

//! The speed module contains the `Speed` type, the rate of travel over a
//! `Length`, together with the `Length`/`Duration` conversions that produce
//! and consume it.

#![allow(clippy::float_cmp)]

use crate::Length;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::time::Duration;

/// A speed in metres per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    /// A zero `Speed`.
    pub const ZERO: Self = Self(0.0);
    /// The most negative finite `Speed`.
    pub const MIN: Self = Self(f64::MIN);
    /// The largest finite `Speed`.
    pub const MAX: Self = Self(f64::MAX);
    /// An infinite `Speed`.
    pub const INFINITY: Self = Self(f64::INFINITY);

    /// Construct a `Speed` from a value in metres per second.
    #[must_use]
    pub const fn from_metres_per_second(metres_per_second: f64) -> Self {
        Self(metres_per_second)
    }

    /// Construct a `Speed` from a value in kilometres per second.
    #[must_use]
    pub const fn from_kilometres_per_second(kilometres_per_second: f64) -> Self {
        Self(kilometres_per_second * 1000.0)
    }

    /// Construct a `Speed` from a value in kilometres per hour.
    #[must_use]
    pub const fn from_kilometres_per_hour(kilometres_per_hour: f64) -> Self {
        Self(kilometres_per_hour * 1000.0 / 3600.0)
    }

    /// The `Speed` in metres per second.
    #[must_use]
    pub const fn metres_per_second(self) -> f64 {
        self.0
    }

    /// The `Speed` in kilometres per second.
    #[must_use]
    pub const fn kilometres_per_second(self) -> f64 {
        self.0 / 1000.0
    }

    /// The `Speed` in kilometres per hour.
    #[must_use]
    pub const fn kilometres_per_hour(self) -> f64 {
        self.0 * 3600.0 / 1000.0
    }

    /// Whether the `Speed` is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// The absolute value of the `Speed`.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }

    /// The slower of two speeds.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// The faster of two speeds.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }
}

impl Add for Speed {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl Sub for Speed {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Neg for Speed {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f64> for Speed {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

impl Div<f64> for Speed {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        Self(self.0 / scalar)
    }
}

impl Div for Speed {
    type Output = f64;

    /// The ratio of two speeds.
    fn div(self, other: Self) -> Self::Output {
        self.0 / other.0
    }
}

impl Mul<Duration> for Speed {
    type Output = Length;

    /// The distance travelled at this `Speed` over `time`.
    fn mul(self, time: Duration) -> Self::Output {
        Length::from_metres(self.0 * time.as_secs_f64())
    }
}

impl Div<Duration> for Length {
    type Output = Speed;

    /// The average `Speed` needed to travel this `Length` in `time`.
    fn div(self, time: Duration) -> Self::Output {
        Speed(self.metres() / time.as_secs_f64())
    }
}

impl Length {
    /// The time taken to travel this `Length` at `speed`.
    /// * `speed` - the speed of travel.
    ///
    /// returns None if the time is negative, infinite or NaN.
    #[must_use]
    pub fn duration_at(self, speed: Speed) -> Option<Duration> {
        Duration::try_from_secs_f64(self.metres() / speed.0).ok()
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m/s", self.0)
    }
}
