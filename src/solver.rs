// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour-angle solving.
//!
//! Every landmark except solar noon is the instant the Sun's centre crosses
//! some altitude. For declination `δ` and latitude `φ`, the hour angle `H`
//! at which the Sun sits `α` degrees below the horizon satisfies
//!
//! ```text
//! cos H = (−sin α − sin δ · sin φ) / (cos δ · cos φ)
//! ```
//!
//! and the event happens `H / 15` hours before (morning) or after (evening)
//! solar noon. When the right-hand side leaves `[-1, 1]` the Sun never
//! reaches that altitude on that day and the solver returns `None`.
//!
//! All results are decimal hours of local apparent solar time on the
//! meridian already folded into the Julian Day; the caller converts them
//! to clock time.

use crate::angle::{darccos, darctan, dcos, dsin, dtan, fixhour};
use crate::config::AsrJuristic;
use crate::julian::JulianDay;
use crate::solar::SolarPosition;
use qtty::Days;

/// Depression of the Sun's centre at sunrise and sunset: 34′ of refraction
/// plus a 16′ semi-diameter, rounded as published.
pub const SUNRISE_ANGLE: f64 = 0.833;

const HALF_DAY: Days = Days::new(0.5);

/// Which side of solar noon an event falls on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HalfDay {
    Morning,
    Evening,
}

/// Local apparent noon, in hours: `12 − equation of time`.
pub fn compute_mid_day(jd: JulianDay) -> f64 {
    let eqt = SolarPosition::at(jd + HALF_DAY).equation_of_time;
    fixhour(12.0 - eqt)
}

/// Hour angle, in hours, at which the Sun is `angle` degrees below the
/// horizon.
pub fn hour_angle(declination: f64, angle: f64, latitude: f64) -> Option<f64> {
    let cos_h = (-dsin(angle) - dsin(declination) * dsin(latitude))
        / (dcos(declination) * dcos(latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(darccos(cos_h) / 15.0)
}

/// Time at which the Sun is `angle` degrees below the horizon.
///
/// Negative angles mean *above* the horizon (used by Asr).
pub fn compute_time(jd: JulianDay, angle: f64, latitude: f64, side: HalfDay) -> Option<f64> {
    let decl = SolarPosition::at(jd).declination;
    let noon = compute_mid_day(jd);
    let t = hour_angle(decl, angle, latitude)?;
    Some(match side {
        HalfDay::Morning => noon - t,
        HalfDay::Evening => noon + t,
    })
}

/// Sun altitude, in degrees, at which a vertical gnomon's shadow equals
/// `factor` times its length plus the noon shadow.
pub fn asr_altitude(declination: f64, latitude: f64, factor: f64) -> f64 {
    darctan(1.0 / (factor + dtan((latitude - declination).abs())))
}

/// Afternoon time at which the Asr shadow condition is met.
pub fn compute_asr(jd: JulianDay, juristic: AsrJuristic, latitude: f64) -> Option<f64> {
    let decl = SolarPosition::at(jd + HALF_DAY).declination;
    let altitude = asr_altitude(decl, latitude, juristic.shadow_factor());
    compute_time(jd, -altitude, latitude, HalfDay::Evening)
}

/// Sunrise (morning) or sunset (evening).
#[inline]
pub fn compute_day_portion(jd: JulianDay, latitude: f64, side: HalfDay) -> Option<f64> {
    compute_time(jd, SUNRISE_ANGLE, latitude, side)
}
