// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daily landmarks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the nine daily landmarks, in chronological order for temperate
/// latitudes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Prayer {
    /// Pre-dawn cutoff for fasting.
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    /// Middle of the night.
    Midnight,
}

impl Prayer {
    /// All landmarks in chronological order.
    pub const ALL: [Prayer; 9] = [
        Prayer::Imsak,
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Midnight,
    ];

    /// The landmarks a day is divided by when looking for the current or
    /// next prayer: the five prayers and sunrise.
    pub const DAILY: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Lower-case key (`"fajr"`, `"maghrib"`, …).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Imsak => "imsak",
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Sunset => "sunset",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
            Self::Midnight => "midnight",
        }
    }

    /// Whether a user minute adjustment applies to this landmark.
    ///
    /// Sunset and midnight are derived values and cannot be nudged on their
    /// own.
    pub const fn is_adjustable(self) -> bool {
        !matches!(self, Self::Sunset | Self::Midnight)
    }

    /// Morning landmarks are solved before solar noon.
    pub const fn is_morning(self) -> bool {
        matches!(self, Self::Imsak | Self::Fajr | Self::Sunrise)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Imsak => "Imsak",
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Midnight => "Midnight",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted() {
        let mut sorted = Prayer::ALL;
        sorted.sort();
        assert_eq!(sorted, Prayer::ALL);
    }

    #[test]
    fn adjustable_set() {
        let adjustable: Vec<_> = Prayer::ALL.iter().filter(|p| p.is_adjustable()).collect();
        assert_eq!(adjustable.len(), 7);
        assert!(!Prayer::Sunset.is_adjustable());
        assert!(!Prayer::Midnight.is_adjustable());
    }

    #[test]
    fn keys_and_names() {
        assert_eq!(Prayer::Maghrib.key(), "maghrib");
        assert_eq!(Prayer::Maghrib.to_string(), "Maghrib");
        assert!(Prayer::Imsak.is_morning());
        assert!(!Prayer::Asr.is_morning());
    }
}
