// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer Times
//!
//! Offline computation of the daily Islamic prayer schedule from a date, a
//! geographic position and a timezone offset, using a low-precision solar
//! ephemeris and the classical hour-angle construction.
//!
//! # Core types
//!
//! - [`GeoQuery`]: validated date, latitude, longitude and UTC offset.
//! - [`CalculationConfig`]: method, Asr juristic rule, output format and
//!   per-prayer minute adjustments.
//! - [`CalculationMethod`]: twilight angles of a published convention,
//!   selected by [`MethodId`].
//! - [`PrayerTimes`]: the nine landmarks of one day, each a [`PrayerTime`].
//! - [`JulianDay`]: continuous day count driving the solar model.
//! - [`SolarPosition`]: declination and equation of time.
//!
//! # Quick start
//!
//! ```
//! use miqat::{compute, AsrJuristic, CalculationConfig, GeoQuery, MethodId, Prayer};
//!
//! let query = GeoQuery::from_ymd(2024, 3, 20, 21.4225, 39.8262, 3.0).unwrap();
//! let config = CalculationConfig::default()
//!     .with_method(MethodId::Makkah)
//!     .with_asr(AsrJuristic::Standard);
//! let times = compute(&query, &config);
//!
//! for (prayer, _) in times.iter() {
//!     println!("{prayer:<9}{}", times.formatted(prayer));
//! }
//! assert_eq!(times.get(Prayer::Maghrib), times.get(Prayer::Sunset));
//! ```
//!
//! # Methods
//!
//! | Id | Fajr | Isha | Maghrib |
//! |----|------|------|---------|
//! | [`MethodId::Mwl`] | 18° | 17° | sunset |
//! | [`MethodId::Isna`] | 15° | 15° | sunset |
//! | [`MethodId::Egypt`] | 19.5° | 17.5° | sunset |
//! | [`MethodId::Makkah`] | 18.5° | 90 min | sunset |
//! | [`MethodId::Karachi`] | 18° | 18° | sunset |
//! | [`MethodId::Tehran`] | 17.7° | 14° | 4.5° |
//! | [`MethodId::Jafari`] | 16° | 14° | 4° |
//!
//! [`CalculationMethod::all`] lists the full catalogue.
//!
//! # Unsolvable landmarks
//!
//! Near the poles the Sun may never reach a twilight depression, or never
//! set at all. Such landmarks come back as [`PrayerTime::Unavailable`] and
//! format as [`INVALID_TIME`]; a [`HighLatitudeRule`] can substitute a
//! portion of the night instead.

mod angle;
mod calculator;
mod config;
mod error;
mod julian;
mod method;
mod prayer;
mod solar;
pub mod solver;
mod times;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{darccos, darcsin, darctan, darctan2, dcos, dsin, dtan, fixangle, fixhour};
pub use calculator::{compute, compute_for};
pub use config::{
    Adjustments, AsrJuristic, CalculationConfig, GeoQuery, HighLatitudeRule, TimeFormat,
};
pub use error::{PrayerError, Result};
pub use julian::JulianDay;
pub use method::{CalculationMethod, MethodId, MidnightConvention, Twilight};
pub use prayer::Prayer;
pub use solar::SolarPosition;
pub use times::{
    adjust_time_str, format_time, parse_time, PrayerTime, PrayerTimes, Upcoming, INVALID_TIME,
};
