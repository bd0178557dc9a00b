// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! Only fatal conditions are errors. A landmark the Sun never reaches is a
//! value ([`PrayerTime::Unavailable`](crate::PrayerTime::Unavailable)), not an
//! error, so the remaining landmarks of the day are still returned.

use thiserror::Error;

/// Errors reported by configuration parsing, input validation and time
/// parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PrayerError {
    // ── configuration ─────────────────────────────────────────────────
    /// No calculation method is registered under this name.
    #[error("unknown calculation method `{0}`")]
    UnknownMethod(String),
    /// Asr juristic selector is neither Standard nor Hanafi.
    #[error("unknown Asr juristic method `{0}` (expected `Standard` or `Hanafi`)")]
    InvalidAsrJuristic(String),
    /// Time format selector is neither 12-hour nor 24-hour.
    #[error("unknown time format `{0}` (expected `12h` or `24h`)")]
    InvalidTimeFormat(String),
    /// High-latitude rule selector is not one of the named rules.
    #[error("unknown high-latitude rule `{0}`")]
    InvalidHighLatitudeRule(String),

    // ── input range ───────────────────────────────────────────────────
    /// Latitude outside `[-90, 90]` or not finite.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude outside `[-180, 180]` or not finite.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Timezone offset outside `[-14, 14]` hours or not finite.
    #[error("timezone offset {0} h is outside [-14, 14]")]
    InvalidTimezone(f64),
    /// The civil date does not exist.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    // ── parsing ───────────────────────────────────────────────────────
    /// A time-of-day string is neither `HH:MM` nor `H:MM AM|PM`.
    #[error("cannot parse `{0}` as a time of day")]
    InvalidTimeString(String),
}

impl PrayerError {
    /// `true` for unknown or malformed configuration selectors.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownMethod(_)
                | Self::InvalidAsrJuristic(_)
                | Self::InvalidTimeFormat(_)
                | Self::InvalidHighLatitudeRule(_)
        )
    }

    /// `true` for coordinates, dates or offsets outside their valid range.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::LatitudeOutOfRange(_)
                | Self::LongitudeOutOfRange(_)
                | Self::InvalidTimezone(_)
                | Self::InvalidDate { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrayerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(PrayerError::UnknownMethod("Foo".into()).is_configuration());
        assert!(!PrayerError::UnknownMethod("Foo".into()).is_input());
        assert!(PrayerError::LatitudeOutOfRange(91.0).is_input());
        assert!(PrayerError::InvalidDate { year: 2024, month: 4, day: 31 }.is_input());
        assert!(!PrayerError::InvalidTimeString("x".into()).is_configuration());
        assert!(!PrayerError::InvalidTimeString("x".into()).is_input());
    }

    #[test]
    fn messages() {
        assert_eq!(
            PrayerError::UnknownMethod("Foo".into()).to_string(),
            "unknown calculation method `Foo`"
        );
        assert_eq!(
            PrayerError::InvalidDate { year: 2023, month: 2, day: 29 }.to_string(),
            "2023-02-29 is not a valid calendar date"
        );
    }
}
