// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation configuration and query input.
//!
//! [`CalculationConfig`] is a plain value owned by the caller and passed to
//! every [`compute`](crate::compute) call; the engine never mutates it and
//! keeps no configuration of its own. Every selector parses from text and
//! rejects unknown input instead of falling back to a default.

use crate::error::{PrayerError, Result};
use crate::method::{CalculationMethod, MethodId, Twilight};
use crate::prayer::Prayer;
use crate::times::PrayerTimes;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Selectors
// ═══════════════════════════════════════════════════════════════════════════

/// Juristic convention for the Asr shadow length.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AsrJuristic {
    /// Shafi'i, Maliki, Hanbali: shadow equals object length plus noon shadow.
    #[default]
    Standard,
    /// Hanafi: shadow equals twice the object length plus noon shadow.
    Hanafi,
}

impl AsrJuristic {
    /// Shadow length factor (1 or 2).
    #[inline]
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

impl FromStr for AsrJuristic {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Standard" | "Shafii" => Ok(Self::Standard),
            "Hanafi" => Ok(Self::Hanafi),
            _ => Err(PrayerError::InvalidAsrJuristic(s.to_owned())),
        }
    }
}

/// Numeric selector used by settings stores: `0` Standard, `1` Hanafi.
impl TryFrom<u8> for AsrJuristic {
    type Error = PrayerError;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Hanafi),
            _ => Err(PrayerError::InvalidAsrJuristic(v.to_string())),
        }
    }
}

/// Clock rendering of formatted times.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeFormat {
    /// `H:MM AM` / `H:MM PM`.
    #[cfg_attr(feature = "serde", serde(rename = "12h"))]
    TwelveHour,
    /// `HH:MM`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    TwentyFourHour,
}

impl FromStr for TimeFormat {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "12h" => Ok(Self::TwelveHour),
            "24h" => Ok(Self::TwentyFourHour),
            _ => Err(PrayerError::InvalidTimeFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TwelveHour => "12h",
            Self::TwentyFourHour => "24h",
        })
    }
}

/// Correction applied when twilight never ends or never begins.
///
/// With [`HighLatitudeRule::None`] a landmark the Sun cannot reach stays
/// [`Unavailable`](crate::PrayerTime::Unavailable). The other rules bound the
/// twilight to a portion of the night (sunset to next sunrise).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HighLatitudeRule {
    #[default]
    None,
    /// Twilight never exceeds half of the night.
    MiddleOfNight,
    /// Twilight never exceeds a seventh of the night.
    OneSeventh,
    /// Twilight never exceeds `angle / 60` of the night.
    AngleBased,
}

impl HighLatitudeRule {
    /// Fraction of the night allotted to a twilight of `angle` degrees, or
    /// `None` when no correction applies.
    pub fn night_portion(self, angle: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::MiddleOfNight => Some(1.0 / 2.0),
            Self::OneSeventh => Some(1.0 / 7.0),
            Self::AngleBased => Some(angle / 60.0),
        }
    }
}

impl FromStr for HighLatitudeRule {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "None" => Ok(Self::None),
            "MiddleOfNight" | "NightMiddle" => Ok(Self::MiddleOfNight),
            "OneSeventh" => Ok(Self::OneSeventh),
            "AngleBased" => Ok(Self::AngleBased),
            _ => Err(PrayerError::InvalidHighLatitudeRule(s.to_owned())),
        }
    }
}

/// Numeric selector used by settings stores: `0` none, `1` middle of night,
/// `2` one-seventh, `3` angle-based.
impl TryFrom<u8> for HighLatitudeRule {
    type Error = PrayerError;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::None),
            1 => Ok(Self::MiddleOfNight),
            2 => Ok(Self::OneSeventh),
            3 => Ok(Self::AngleBased),
            _ => Err(PrayerError::InvalidHighLatitudeRule(v.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Adjustments
// ═══════════════════════════════════════════════════════════════════════════

/// Signed minute offsets added to each adjustable landmark after all
/// astronomical and timezone computation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Adjustments {
    pub imsak: i32,
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
}

impl Adjustments {
    /// Minutes for `prayer`; always zero for sunset and midnight.
    pub fn get(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Sunset | Prayer::Midnight => 0,
        }
    }

    /// Set minutes for `prayer`. Ignored for sunset and midnight.
    pub fn set(&mut self, prayer: Prayer, minutes: i32) {
        let slot = match prayer {
            Prayer::Imsak => &mut self.imsak,
            Prayer::Fajr => &mut self.fajr,
            Prayer::Sunrise => &mut self.sunrise,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
            Prayer::Sunset | Prayer::Midnight => return,
        };
        *slot = minutes;
    }

    /// Builder form of [`Adjustments::set`].
    pub fn with(mut self, prayer: Prayer, minutes: i32) -> Self {
        self.set(prayer, minutes);
        self
    }

    /// `true` when every offset is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Shift a computed schedule in place, see
    /// [`PrayerTimes::apply_adjustments`].
    pub fn apply(&self, times: &mut PrayerTimes) {
        times.apply_adjustments(self);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalculationConfig
// ═══════════════════════════════════════════════════════════════════════════

/// Everything a calculation needs besides date and place.
///
/// ```
/// use miqat::{AsrJuristic, CalculationConfig, MethodId, TimeFormat};
///
/// let config = CalculationConfig::default()
///     .with_method("ISNA".parse().unwrap())
///     .with_asr(AsrJuristic::Hanafi)
///     .with_time_format(TimeFormat::TwelveHour);
/// assert_eq!(config.method, MethodId::Isna);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculationConfig {
    pub method: MethodId,
    pub asr: AsrJuristic,
    pub time_format: TimeFormat,
    pub adjustments: Adjustments,
    /// Angle, or minutes before Fajr. Default: 10 minutes.
    pub imsak: Twilight,
    /// Minutes added to solar noon for Dhuhr. Default: 0.
    pub dhuhr_minutes: i32,
    pub high_latitude: HighLatitudeRule,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            method: MethodId::default(),
            asr: AsrJuristic::default(),
            time_format: TimeFormat::default(),
            adjustments: Adjustments::default(),
            imsak: Twilight::minutes(10.0),
            dhuhr_minutes: 0,
            high_latitude: HighLatitudeRule::default(),
        }
    }
}

impl CalculationConfig {
    /// Default configuration for a method given by registry name.
    pub fn for_method(name: &str) -> Result<Self> {
        Ok(Self::default().with_method(name.parse()?))
    }

    /// Registered parameters of the selected method.
    #[inline]
    pub fn calculation_method(&self) -> &'static CalculationMethod {
        self.method.method()
    }

    pub fn with_method(mut self, method: MethodId) -> Self {
        self.method = method;
        self
    }

    pub fn with_asr(mut self, asr: AsrJuristic) -> Self {
        self.asr = asr;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_adjustments(mut self, adjustments: Adjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    pub fn with_imsak(mut self, imsak: Twilight) -> Self {
        self.imsak = imsak;
        self
    }

    pub fn with_dhuhr_minutes(mut self, minutes: i32) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    pub fn with_high_latitude(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude = rule;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GeoQuery
// ═══════════════════════════════════════════════════════════════════════════

/// Validated date, place and timezone of one calculation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GeoQuery {
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    timezone: f64,
}

impl GeoQuery {
    /// Largest timezone offset in use (Line Islands, UTC+14).
    pub const MAX_TIMEZONE_HOURS: f64 = 14.0;

    /// Validate coordinates and timezone offset (hours east of UTC).
    pub fn new(date: NaiveDate, latitude: f64, longitude: f64, timezone: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PrayerError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PrayerError::LongitudeOutOfRange(longitude));
        }
        if !(-Self::MAX_TIMEZONE_HOURS..=Self::MAX_TIMEZONE_HOURS).contains(&timezone) {
            return Err(PrayerError::InvalidTimezone(timezone));
        }
        Ok(Self {
            date,
            latitude,
            longitude,
            timezone,
        })
    }

    /// Like [`GeoQuery::new`] but from calendar components, rejecting dates
    /// that do not exist.
    pub fn from_ymd(
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        timezone: f64,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(PrayerError::InvalidDate { year, month, day })?;
        Self::new(date, latitude, longitude, timezone)
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Offset from UTC in hours.
    #[inline]
    pub fn timezone(&self) -> f64 {
        self.timezone
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeoQuery {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            date: NaiveDate,
            latitude: f64,
            longitude: f64,
            timezone: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        GeoQuery::new(raw.date, raw.latitude, raw.longitude, raw.timezone)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_parse_and_reject_unknown() {
        assert_eq!("Hanafi".parse::<AsrJuristic>(), Ok(AsrJuristic::Hanafi));
        assert_eq!("Shafii".parse::<AsrJuristic>(), Ok(AsrJuristic::Standard));
        assert_eq!(
            "hanafi".parse::<AsrJuristic>(),
            Err(PrayerError::InvalidAsrJuristic("hanafi".into()))
        );
        assert_eq!(AsrJuristic::try_from(1), Ok(AsrJuristic::Hanafi));
        assert!(AsrJuristic::try_from(2).is_err());

        assert_eq!("12h".parse::<TimeFormat>(), Ok(TimeFormat::TwelveHour));
        assert!("12".parse::<TimeFormat>().is_err());
        assert_eq!(TimeFormat::TwelveHour.to_string(), "12h");

        assert_eq!(
            "NightMiddle".parse::<HighLatitudeRule>(),
            Ok(HighLatitudeRule::MiddleOfNight)
        );
        assert_eq!(HighLatitudeRule::try_from(3), Ok(HighLatitudeRule::AngleBased));
        assert!(HighLatitudeRule::try_from(4).unwrap_err().is_configuration());
    }

    #[test]
    fn shadow_factors() {
        assert_eq!(AsrJuristic::Standard.shadow_factor(), 1.0);
        assert_eq!(AsrJuristic::Hanafi.shadow_factor(), 2.0);
    }

    #[test]
    fn night_portions() {
        assert_eq!(HighLatitudeRule::None.night_portion(18.0), None);
        assert_eq!(HighLatitudeRule::MiddleOfNight.night_portion(18.0), Some(0.5));
        assert_eq!(HighLatitudeRule::AngleBased.night_portion(18.0), Some(0.3));
    }

    #[test]
    fn adjustments_ignore_derived_landmarks() {
        let mut adj = Adjustments::default().with(Prayer::Fajr, 10);
        adj.set(Prayer::Sunset, 5);
        adj.set(Prayer::Midnight, 5);
        assert_eq!(adj.get(Prayer::Fajr), 10);
        assert_eq!(adj.get(Prayer::Sunset), 0);
        assert_eq!(adj.get(Prayer::Midnight), 0);
        assert!(!adj.is_zero());
        assert!(Adjustments::default().is_zero());
    }

    #[test]
    fn default_config() {
        let c = CalculationConfig::default();
        assert_eq!(c.method, MethodId::Mwl);
        assert_eq!(c.asr, AsrJuristic::Standard);
        assert_eq!(c.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(c.imsak, Twilight::minutes(10.0));
        assert_eq!(c.dhuhr_minutes, 0);
        assert_eq!(c.high_latitude, HighLatitudeRule::None);
    }

    #[test]
    fn config_for_unknown_method_fails() {
        assert!(CalculationConfig::for_method("Makkah").is_ok());
        let err = CalculationConfig::for_method("Atlantis").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn query_validation() {
        assert!(GeoQuery::from_ymd(2024, 3, 20, 21.4225, 39.8262, 3.0).is_ok());
        assert_eq!(
            GeoQuery::from_ymd(2024, 3, 20, 91.0, 0.0, 0.0),
            Err(PrayerError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            GeoQuery::from_ymd(2024, 3, 20, 0.0, -180.5, 0.0),
            Err(PrayerError::LongitudeOutOfRange(-180.5))
        );
        assert_eq!(
            GeoQuery::from_ymd(2024, 4, 31, 0.0, 0.0, 0.0),
            Err(PrayerError::InvalidDate { year: 2024, month: 4, day: 31 })
        );
        assert!(GeoQuery::from_ymd(2024, 1, 1, f64::NAN, 0.0, 0.0).is_err());
        assert!(GeoQuery::from_ymd(2024, 1, 1, 0.0, 0.0, 15.0).is_err());
        assert!(GeoQuery::from_ymd(2024, 1, 1, 90.0, 180.0, -14.0).is_ok());
    }
}
