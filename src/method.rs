// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation methods.
//!
//! A calculation method is the convention an authority uses to turn solar
//! geometry into prayer times: the twilight depression angle for Fajr, an
//! angle or a fixed delay after sunset for Isha (and optionally Maghrib), and
//! the definition of midnight.
//!
//! # Registry
//!
//! | Id | Authority | Fajr | Isha | Maghrib | Midnight |
//! |----|-----------|------|------|---------|----------|
//! | `MWL` | Muslim World League | 18° | 17° | sunset | Standard |
//! | `ISNA` | Islamic Society of North America | 15° | 15° | sunset | Standard |
//! | `Egypt` | Egyptian General Authority of Survey | 19.5° | 17.5° | sunset | Standard |
//! | `Makkah` | Umm Al-Qura University, Makkah | 18.5° | 90 min | sunset | Standard |
//! | `Karachi` | University of Islamic Sciences, Karachi | 18° | 18° | sunset | Standard |
//! | `Tehran` | Institute of Geophysics, University of Tehran | 17.7° | 14° | 4.5° | Jafari |
//! | `Jafari` | Shia Ithna-Ashari, Leva Institute, Qum | 16° | 14° | 4° | Jafari |
//! | `Gulf` | Gulf Region | 19.5° | 90 min | sunset | Standard |
//! | `Kuwait` | Kuwait | 18° | 17.5° | sunset | Standard |
//! | `Qatar` | Qatar | 18° | 90 min | sunset | Standard |
//! | `Singapore` | Majlis Ugama Islam Singapura | 20° | 18° | sunset | Standard |
//! | `France` | Union Organization Islamic de France | 12° | 12° | sunset | Standard |
//! | `Turkey` | Diyanet İşleri Başkanlığı | 18° | 17° | sunset | Standard |
//! | `Russia` | Spiritual Administration of Muslims of Russia | 16° | 15° | sunset | Standard |
//!
//! The table is a `static` array: built at compile time, never mutated, and
//! shared by every thread without synchronisation.

use crate::error::{PrayerError, Result};
use qtty::{Degrees, Minutes};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Either a solar depression angle or a fixed delay from a reference event.
///
/// The reference event depends on the landmark: sunset for Maghrib and Isha,
/// Fajr for Imsak (where the minutes count *before* it).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Twilight {
    /// Sun's depression below the horizon, in degrees.
    Angle(Degrees),
    /// Fixed number of minutes from the reference event.
    FixedMinutes(Minutes),
}

impl Twilight {
    /// Depression angle in degrees.
    #[inline]
    pub const fn angle(degrees: f64) -> Self {
        Self::Angle(Degrees::new(degrees))
    }

    /// Fixed offset in minutes.
    #[inline]
    pub const fn minutes(minutes: f64) -> Self {
        Self::FixedMinutes(Minutes::new(minutes))
    }

    /// Zero-minute offset, i.e. the reference event itself.
    pub const AT_REFERENCE: Self = Self::minutes(0.0);

    /// The angle in degrees, if this is an angle specification.
    #[inline]
    pub fn as_angle(&self) -> Option<f64> {
        match self {
            Self::Angle(a) => Some(a.value()),
            Self::FixedMinutes(_) => None,
        }
    }
}

impl fmt::Display for Twilight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(a) => write!(f, "{}°", a.value()),
            Self::FixedMinutes(m) => write!(f, "{} min", m.value()),
        }
    }
}

// Serialised as `{"angle": 18.0}` or `{"minutes": 90.0}`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawTwilight {
    Angle(f64),
    Minutes(f64),
}

#[cfg(feature = "serde")]
impl Serialize for Twilight {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Self::Angle(a) => RawTwilight::Angle(a.value()),
            Self::FixedMinutes(m) => RawTwilight::Minutes(m.value()),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Twilight {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawTwilight::deserialize(deserializer)? {
            RawTwilight::Angle(a) => Self::angle(a),
            RawTwilight::Minutes(m) => Self::minutes(m),
        })
    }
}

/// How the middle of the night is defined.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MidnightConvention {
    /// Midpoint of sunset and the next sunrise.
    #[default]
    Standard,
    /// Midpoint of sunset and the next Fajr.
    Jafari,
}

/// Identifier of a registered calculation method.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MethodId {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "MWL"))]
    Mwl,
    #[cfg_attr(feature = "serde", serde(rename = "ISNA"))]
    Isna,
    Egypt,
    Makkah,
    Karachi,
    Tehran,
    Jafari,
    Gulf,
    Kuwait,
    Qatar,
    Singapore,
    France,
    Turkey,
    Russia,
}

impl MethodId {
    /// Short registry name (`"MWL"`, `"Makkah"`, …).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mwl => "MWL",
            Self::Isna => "ISNA",
            Self::Egypt => "Egypt",
            Self::Makkah => "Makkah",
            Self::Karachi => "Karachi",
            Self::Tehran => "Tehran",
            Self::Jafari => "Jafari",
            Self::Gulf => "Gulf",
            Self::Kuwait => "Kuwait",
            Self::Qatar => "Qatar",
            Self::Singapore => "Singapore",
            Self::France => "France",
            Self::Turkey => "Turkey",
            Self::Russia => "Russia",
        }
    }

    /// Registered parameters for this method.
    #[inline]
    pub fn method(self) -> &'static CalculationMethod {
        &METHODS[self as usize]
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MethodId {
    type Err = PrayerError;

    /// Exact, case-sensitive match on the registry name. `"Umm Al-Qura"`
    /// and `"UmmAlQura"` also select [`MethodId::Makkah`].
    fn from_str(s: &str) -> Result<Self> {
        if matches!(s, "Umm Al-Qura" | "UmmAlQura") {
            return Ok(Self::Makkah);
        }
        METHODS
            .iter()
            .find(|m| m.id.as_str() == s)
            .map(|m| m.id)
            .ok_or_else(|| PrayerError::UnknownMethod(s.to_owned()))
    }
}

/// Parameters of one calculation convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalculationMethod {
    pub id: MethodId,
    /// Human-readable authority name.
    pub name: &'static str,
    /// Fajr depression angle.
    pub fajr: Degrees,
    pub isha: Twilight,
    /// Defaults to sunset itself.
    pub maghrib: Twilight,
    pub midnight: MidnightConvention,
}

impl CalculationMethod {
    const fn new(id: MethodId, name: &'static str, fajr: f64, isha: Twilight) -> Self {
        Self {
            id,
            name,
            fajr: Degrees::new(fajr),
            isha,
            maghrib: Twilight::AT_REFERENCE,
            midnight: MidnightConvention::Standard,
        }
    }

    const fn with_maghrib(mut self, maghrib: Twilight) -> Self {
        self.maghrib = maghrib;
        self
    }

    const fn with_midnight(mut self, midnight: MidnightConvention) -> Self {
        self.midnight = midnight;
        self
    }

    /// Look a method up by its registry name.
    ///
    /// ```
    /// use miqat::CalculationMethod;
    ///
    /// let makkah = CalculationMethod::by_name("Makkah").unwrap();
    /// assert_eq!(makkah.fajr.value(), 18.5);
    /// assert!(CalculationMethod::by_name("Nowhere").is_err());
    /// ```
    pub fn by_name(name: &str) -> Result<&'static Self> {
        name.parse::<MethodId>().map(MethodId::method)
    }

    /// Every registered method, in registry order.
    #[inline]
    pub fn all() -> &'static [Self] {
        &METHODS
    }
}

use MethodId as M;

// Indexed by `MethodId as usize`.
static METHODS: [CalculationMethod; 14] = [
    CalculationMethod::new(M::Mwl, "Muslim World League", 18.0, Twilight::angle(17.0)),
    CalculationMethod::new(
        M::Isna,
        "Islamic Society of North America (ISNA)",
        15.0,
        Twilight::angle(15.0),
    ),
    CalculationMethod::new(
        M::Egypt,
        "Egyptian General Authority of Survey",
        19.5,
        Twilight::angle(17.5),
    ),
    CalculationMethod::new(
        M::Makkah,
        "Umm Al-Qura University, Makkah",
        18.5,
        Twilight::minutes(90.0),
    ),
    CalculationMethod::new(
        M::Karachi,
        "University of Islamic Sciences, Karachi",
        18.0,
        Twilight::angle(18.0),
    ),
    CalculationMethod::new(
        M::Tehran,
        "Institute of Geophysics, University of Tehran",
        17.7,
        Twilight::angle(14.0),
    )
    .with_maghrib(Twilight::angle(4.5))
    .with_midnight(MidnightConvention::Jafari),
    CalculationMethod::new(
        M::Jafari,
        "Shia Ithna-Ashari, Leva Institute, Qum",
        16.0,
        Twilight::angle(14.0),
    )
    .with_maghrib(Twilight::angle(4.0))
    .with_midnight(MidnightConvention::Jafari),
    CalculationMethod::new(M::Gulf, "Gulf Region", 19.5, Twilight::minutes(90.0)),
    CalculationMethod::new(M::Kuwait, "Kuwait", 18.0, Twilight::angle(17.5)),
    CalculationMethod::new(M::Qatar, "Qatar", 18.0, Twilight::minutes(90.0)),
    CalculationMethod::new(
        M::Singapore,
        "Majlis Ugama Islam Singapura, Singapore",
        20.0,
        Twilight::angle(18.0),
    ),
    CalculationMethod::new(
        M::France,
        "Union Organization Islamic de France",
        12.0,
        Twilight::angle(12.0),
    ),
    CalculationMethod::new(
        M::Turkey,
        "Diyanet İşleri Başkanlığı, Turkey",
        18.0,
        Twilight::angle(17.0),
    ),
    CalculationMethod::new(
        M::Russia,
        "Spiritual Administration of Muslims of Russia",
        16.0,
        Twilight::angle(15.0),
    ),
];
