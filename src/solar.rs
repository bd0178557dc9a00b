// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar position.
//!
//! The algorithm is the U.S. Naval Observatory approximation: mean anomaly and
//! mean longitude grow linearly from J2000.0, two harmonic terms give the
//! ecliptic longitude, and the mean obliquity drifts linearly. Accuracy is
//! about one arcminute between 1950 and 2050, which is well below the
//! one-minute resolution of the schedules built on top of it.

use crate::angle::{darcsin, darctan2, dcos, dsin, fixangle, fixhour};
use crate::julian::JulianDay;

/// Declination and equation of time for one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPosition {
    /// Angular distance of the Sun north (+) or south (−) of the celestial
    /// equator, in degrees.
    pub declination: f64,
    /// Apparent minus mean solar time, in hours.
    pub equation_of_time: f64,
}

impl SolarPosition {
    /// Solar position at `jd`.
    pub fn at(jd: JulianDay) -> Self {
        let d = jd.days_since_j2000().value();

        let g = fixangle(357.529 + 0.985_600_28 * d);
        let q = fixangle(280.459 + 0.985_647_36 * d);
        let l = fixangle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));

        let e = 23.439 - 0.000_000_36 * d;

        let ra = darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0;
        // q and RA wrap at different instants around the March equinox.
        let eqt = q / 15.0 - fixhour(ra);
        let equation_of_time = eqt - 24.0 * (eqt / 24.0).round();
        let declination = darcsin(dsin(e) * dsin(l));

        log::trace!("sun at {jd}: decl={declination:.4}°, eqt={equation_of_time:.4}h");

        Self {
            declination,
            equation_of_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Days;

    fn noon(year: i32, month: u32, day: u32) -> JulianDay {
        JulianDay::from_gregorian(year, month, day) + Days::new(0.5)
    }

    #[test]
    fn declination_near_zero_at_march_equinox() {
        let sun = SolarPosition::at(noon(2024, 3, 20));
        assert!(sun.declination.abs() < 0.5, "decl = {}", sun.declination);
    }

    #[test]
    fn declination_extremes_at_solstices() {
        let june = SolarPosition::at(noon(2024, 6, 21));
        let december = SolarPosition::at(noon(2024, 12, 21));
        assert!((june.declination - 23.44).abs() < 0.1, "{}", june.declination);
        assert!((december.declination + 23.44).abs() < 0.1, "{}", december.declination);
    }

    #[test]
    fn equation_of_time_known_extremes() {
        // Early November the sundial runs ~16.4 minutes fast; mid-February ~14.2 slow.
        let nov = SolarPosition::at(noon(2024, 11, 3));
        let feb = SolarPosition::at(noon(2024, 2, 11));
        assert!((nov.equation_of_time * 60.0 - 16.4).abs() < 0.5);
        assert!((feb.equation_of_time * 60.0 + 14.2).abs() < 0.5);
    }

    #[test]
    fn equation_of_time_stays_small() {
        for day in 0..366 {
            let sun = SolarPosition::at(noon(2024, 1, 1) + Days::new(f64::from(day)));
            assert!(sun.equation_of_time.abs() < 0.3, "day {day}: {}", sun.equation_of_time);
            assert!(sun.declination.abs() < 23.5);
        }
    }
}
