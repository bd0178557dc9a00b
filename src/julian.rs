// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day instant.
//!
//! [`JulianDay`] stores a single [`Days`] quantity counted from the start of
//! the Julian Period. It is the uniform input of the solar-position formulas:
//! civil dates enter through [`JulianDay::from_gregorian`] and the rest of the
//! crate only shifts it by fractional days (longitude correction, next-day
//! evaluation, the half-day offset used for solar noon).

use chrono::{Datelike, NaiveDate};
use qtty::Days;
use std::ops::{Add, Sub};

/// A point on the Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the start of the Julian Period).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Day at 0h of a Gregorian calendar date.
    ///
    /// January and February count as months 13 and 14 of the previous year,
    /// and the Gregorian century correction `2 − A + ⌊A/4⌋` is applied.
    /// The date is not validated; use [`JulianDay::from_date`] for that.
    ///
    /// ```
    /// use miqat::JulianDay;
    ///
    /// // 2000-01-01 0h is half a day before J2000.0
    /// let jd = JulianDay::from_gregorian(2000, 1, 1);
    /// assert_eq!(jd.value(), 2_451_544.5);
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Self {
        let (mut y, mut m) = (f64::from(year), f64::from(month));
        if month <= 2 {
            y -= 1.0;
            m += 12.0;
        }
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day)
            + b
            - 1524.5;
        Self::new(jd)
    }

    /// Julian Day at 0h of a validated civil date.
    #[inline]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_gregorian(date.year(), date.month(), date.day())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since J2000.0 (negative before it).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.quantity)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<NaiveDate> for JulianDay {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
