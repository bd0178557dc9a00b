// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Computed schedules and clock-time text.
//!
//! A [`PrayerTimes`] value holds the decimal-hour time of every landmark of
//! one day. Rendering is separate from the values: the same schedule can be
//! printed in 12- or 24-hour form without touching the numbers. Landmarks the
//! Sun never reaches are [`PrayerTime::Unavailable`] and render as
//! [`INVALID_TIME`].

use crate::angle::fixhour;
use crate::config::{Adjustments, TimeFormat};
use crate::error::{PrayerError, Result};
use crate::prayer::Prayer;
use chrono::{NaiveTime, Timelike};
use qtty::Hours;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text rendered for a landmark that cannot be computed.
pub const INVALID_TIME: &str = "-----";

/// Alternate sentinel used by some remote sources; accepted when parsing.
const ALT_INVALID_TIME: &str = "--:--";

const MINUTES_PER_DAY: i64 = 24 * 60;

// ═══════════════════════════════════════════════════════════════════════════
// PrayerTime
// ═══════════════════════════════════════════════════════════════════════════

/// Time of one landmark: a decimal hour in `[0, 24)`, or unavailable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PrayerTime {
    At(Hours),
    /// The Sun never reaches the required altitude on this day.
    Unavailable,
}

impl PrayerTime {
    /// Wrap a decimal hour, reducing it into `[0, 24)`. Non-finite input
    /// becomes [`PrayerTime::Unavailable`].
    pub fn from_hours(hours: f64) -> Self {
        if hours.is_finite() {
            Self::At(Hours::new(fixhour(hours)))
        } else {
            Self::Unavailable
        }
    }

    /// Decimal hour, if available.
    #[inline]
    pub fn hours(&self) -> Option<f64> {
        match self {
            Self::At(h) => Some(h.value()),
            Self::Unavailable => None,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Shift by a signed number of minutes, wrapping around midnight.
    pub fn shifted(self, minutes: f64) -> Self {
        match self {
            Self::At(h) => Self::from_hours(h.value() + minutes / 60.0),
            Self::Unavailable => Self::Unavailable,
        }
    }

    /// Render as clock text, or [`INVALID_TIME`].
    pub fn format(&self, format: TimeFormat) -> String {
        match self.clock() {
            Some((h, m)) => format_clock(h, m, format),
            None => INVALID_TIME.to_owned(),
        }
    }

    /// Clock time rounded to the minute.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let (h, m) = self.clock()?;
        NaiveTime::from_hms_opt(h, m, 0)
    }

    // Half a minute is added before truncating so 12:29:59.9 renders as 12:30.
    fn clock(&self) -> Option<(u32, u32)> {
        let t = fixhour(self.hours()? + 0.5 / 60.0);
        let h = t.floor();
        let m = ((t - h) * 60.0).floor().min(59.0);
        Some((h as u32, m as u32))
    }
}

impl From<Option<f64>> for PrayerTime {
    fn from(hours: Option<f64>) -> Self {
        hours.map_or(Self::Unavailable, Self::from_hours)
    }
}

impl fmt::Display for PrayerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(TimeFormat::TwentyFourHour))
    }
}

// Serialised as the decimal hour, or `null` when unavailable.
#[cfg(feature = "serde")]
impl Serialize for PrayerTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.hours().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PrayerTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.into())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Clock text
// ═══════════════════════════════════════════════════════════════════════════

/// Format a decimal hour as clock text.
///
/// ```
/// use miqat::{format_time, TimeFormat};
///
/// assert_eq!(format_time(14.5, TimeFormat::TwentyFourHour), "14:30");
/// assert_eq!(format_time(14.5, TimeFormat::TwelveHour), "2:30 PM");
/// assert_eq!(format_time(-0.25, TimeFormat::TwentyFourHour), "23:45");
/// assert_eq!(format_time(f64::NAN, TimeFormat::TwelveHour), "-----");
/// ```
pub fn format_time(hours: f64, format: TimeFormat) -> String {
    PrayerTime::from_hours(hours).format(format)
}

fn format_clock(hours: u32, minutes: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwelveHour => {
            let suffix = if hours >= 12 { "PM" } else { "AM" };
            let h12 = (hours + 11) % 12 + 1;
            format!("{h12}:{minutes:02} {suffix}")
        }
        TimeFormat::TwentyFourHour => format!("{hours:02}:{minutes:02}"),
    }
}

/// Parse `HH:MM`, `H:MM AM` or `H:MM PM` into hours and minutes.
/// `Ok(None)` for the unavailable sentinels.
fn parse_clock(text: &str) -> Result<Option<(u32, u32)>> {
    let text = text.trim();
    if text == INVALID_TIME || text == ALT_INVALID_TIME {
        return Ok(None);
    }
    let invalid = || PrayerError::InvalidTimeString(text.to_owned());

    let (clock, pm) = match text.rsplit_once(' ') {
        Some((clock, suffix)) if suffix.eq_ignore_ascii_case("AM") => (clock.trim(), Some(false)),
        Some((clock, suffix)) if suffix.eq_ignore_ascii_case("PM") => (clock.trim(), Some(true)),
        Some(_) => return Err(invalid()),
        None => (text, None),
    };

    let (h, m) = clock.split_once(':').ok_or_else(invalid)?;
    if m.len() != 2 || h.is_empty() || h.len() > 2 {
        return Err(invalid());
    }
    let h: u32 = h.parse().map_err(|_| invalid())?;
    let m: u32 = m.parse().map_err(|_| invalid())?;
    if m > 59 {
        return Err(invalid());
    }

    let h = match pm {
        Some(pm) if (1..=12).contains(&h) => h % 12 + if pm { 12 } else { 0 },
        Some(_) => return Err(invalid()),
        None if h < 24 => h,
        None => return Err(invalid()),
    };
    Ok(Some((h, m)))
}

/// Parse clock text produced by [`format_time`] (either format) back into a
/// [`PrayerTime`].
///
/// ```
/// use miqat::{parse_time, PrayerTime};
///
/// assert_eq!(parse_time("2:30 PM").unwrap().hours(), Some(14.5));
/// assert_eq!(parse_time("00:15").unwrap().hours(), Some(0.25));
/// assert_eq!(parse_time("-----").unwrap(), PrayerTime::Unavailable);
/// assert!(parse_time("25:00").is_err());
/// ```
pub fn parse_time(text: &str) -> Result<PrayerTime> {
    Ok(match parse_clock(text)? {
        Some((h, m)) => PrayerTime::from_hours(f64::from(h) + f64::from(m) / 60.0),
        None => PrayerTime::Unavailable,
    })
}

/// Shift already formatted clock text by `minutes`, wrapping around
/// midnight, and render it in `format`.
///
/// Intended for times that come from a remote authority rather than from
/// [`compute`](crate::compute), so user adjustments apply uniformly. The
/// unavailable sentinels are returned unchanged.
///
/// ```
/// use miqat::{adjust_time_str, TimeFormat};
///
/// assert_eq!(adjust_time_str("05:12", 10, TimeFormat::TwentyFourHour).unwrap(), "05:22");
/// assert_eq!(adjust_time_str("11:55 PM", 10, TimeFormat::TwentyFourHour).unwrap(), "00:05");
/// assert_eq!(adjust_time_str("00:05", -10, TimeFormat::TwelveHour).unwrap(), "11:55 PM");
/// ```
pub fn adjust_time_str(text: &str, minutes: i32, format: TimeFormat) -> Result<String> {
    let Some((h, m)) = parse_clock(text)? else {
        return Ok(text.trim().to_owned());
    };
    let total = (i64::from(h * 60 + m) + i64::from(minutes)).rem_euclid(MINUTES_PER_DAY);
    Ok(format_clock(
        (total / 60) as u32,
        (total % 60) as u32,
        format,
    ))
}

// ═══════════════════════════════════════════════════════════════════════════
// PrayerTimes
// ═══════════════════════════════════════════════════════════════════════════

/// The landmark of a day that comes next, see [`PrayerTimes::next_prayer`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Upcoming {
    pub prayer: Prayer,
    pub time: PrayerTime,
    /// The landmark falls after the coming midnight. Past Isha, tomorrow's
    /// Fajr is approximated by today's.
    pub is_tomorrow: bool,
}

/// Times of the nine landmarks of one day.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerTimes {
    pub imsak: PrayerTime,
    pub fajr: PrayerTime,
    pub sunrise: PrayerTime,
    pub dhuhr: PrayerTime,
    pub asr: PrayerTime,
    pub sunset: PrayerTime,
    pub maghrib: PrayerTime,
    pub isha: PrayerTime,
    pub midnight: PrayerTime,
    /// Rendering used by [`PrayerTimes::formatted`] and `Display`.
    pub time_format: TimeFormat,
}

impl PrayerTimes {
    /// Build a schedule from a per-landmark function.
    pub fn from_fn(time_format: TimeFormat, mut f: impl FnMut(Prayer) -> PrayerTime) -> Self {
        Self {
            imsak: f(Prayer::Imsak),
            fajr: f(Prayer::Fajr),
            sunrise: f(Prayer::Sunrise),
            dhuhr: f(Prayer::Dhuhr),
            asr: f(Prayer::Asr),
            sunset: f(Prayer::Sunset),
            maghrib: f(Prayer::Maghrib),
            isha: f(Prayer::Isha),
            midnight: f(Prayer::Midnight),
            time_format,
        }
    }

    pub fn get(&self, prayer: Prayer) -> PrayerTime {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Midnight => self.midnight,
        }
    }

    fn slot_mut(&mut self, prayer: Prayer) -> &mut PrayerTime {
        match prayer {
            Prayer::Imsak => &mut self.imsak,
            Prayer::Fajr => &mut self.fajr,
            Prayer::Sunrise => &mut self.sunrise,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Sunset => &mut self.sunset,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
            Prayer::Midnight => &mut self.midnight,
        }
    }

    /// `(landmark, time)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, PrayerTime)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Same values, different rendering.
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Clock text of one landmark in this schedule's format.
    pub fn formatted(&self, prayer: Prayer) -> String {
        self.get(prayer).format(self.time_format)
    }

    /// Add each adjustable landmark's minute offset. Sunset, midnight and
    /// unavailable landmarks are left untouched.
    pub fn apply_adjustments(&mut self, adjustments: &Adjustments) {
        for prayer in Prayer::ALL {
            let minutes = adjustments.get(prayer);
            if minutes != 0 {
                let slot = self.slot_mut(prayer);
                *slot = slot.shifted(f64::from(minutes));
            }
        }
    }

    /// Builder form of [`PrayerTimes::apply_adjustments`].
    pub fn adjusted(mut self, adjustments: &Adjustments) -> Self {
        self.apply_adjustments(adjustments);
        self
    }

    /// First of Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha strictly after
    /// `now`; after Isha, tomorrow's Fajr (approximated by today's).
    pub fn next_prayer(&self, now: NaiveTime) -> Option<Upcoming> {
        let clock = hours_of(now);
        let now = self.day_position(clock)?;
        let (prayer, time, ahead) = match self.daily().find(|&(_, _, pos)| pos > now) {
            Some((prayer, time, pos)) => (prayer, time, pos - now),
            None => {
                let (prayer, time, pos) = self.daily().next()?;
                (prayer, time, pos + 24.0 - now)
            }
        };
        Some(Upcoming {
            prayer,
            time,
            is_tomorrow: clock + ahead >= 24.0,
        })
    }

    /// Last of Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha at or before `now`;
    /// before Fajr, yesterday's Isha (approximated by today's).
    pub fn current_prayer(&self, now: NaiveTime) -> Option<Prayer> {
        let now = self.day_position(hours_of(now))?;
        self.daily()
            .filter(|&(_, _, pos)| pos <= now)
            .last()
            .map(|(p, _, _)| p)
    }

    /// Available daily landmarks on one continuous axis: morning ones before
    /// Dhuhr, the rest after it, so an Isha past 00:00 still comes last.
    fn daily(&self) -> impl Iterator<Item = (Prayer, PrayerTime, f64)> + '_ {
        let noon = self.dhuhr.hours().unwrap_or(12.0);
        Prayer::DAILY.into_iter().filter_map(move |p| {
            let time = self.get(p);
            let h = time.hours()?;
            let pos = if p.is_morning() {
                noon - (noon - h).rem_euclid(24.0)
            } else {
                noon + (h - noon).rem_euclid(24.0)
            };
            Some((p, time, pos))
        })
    }

    /// `clock` on the axis of [`PrayerTimes::daily`], within the 24 hours
    /// starting at the first available landmark.
    fn day_position(&self, clock: f64) -> Option<f64> {
        let (_, _, start) = self.daily().next()?;
        Some(start + (clock - start).rem_euclid(24.0))
    }
}

fn hours_of(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) / 3600.0
}

impl fmt::Display for PrayerTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (prayer, time) in self.iter() {
            writeln!(f, "{:<9}{}", prayer, time.format(self.time_format))?;
        }
        Ok(())
    }
}
