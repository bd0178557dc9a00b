// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daily schedule computation.
//!
//! [`compute`] derives all nine landmarks for one civil date:
//!
//! 1. The Julian Day at 0h is shifted by `longitude / 360` days so the
//!    solver works in local apparent solar time.
//! 2. Each landmark is solved from the method's angles or offsets.
//! 3. An optional [`HighLatitudeRule`] bounds twilight by a portion of the
//!    night.
//! 4. Local solar time becomes clock time (`− longitude / 15` to UTC, then
//!    the timezone offset), the values are reduced into `[0, 24)`, and the
//!    user's minute adjustments are applied.
//!
//! A landmark the Sun never reaches becomes
//! [`PrayerTime::Unavailable`]; the call itself cannot fail once the query
//! has been validated.

use crate::config::{CalculationConfig, GeoQuery, HighLatitudeRule};
use crate::error::Result;
use crate::julian::JulianDay;
use crate::method::{MidnightConvention, Twilight};
use crate::prayer::Prayer;
use crate::solver::{compute_asr, compute_day_portion, compute_mid_day, compute_time, HalfDay};
use crate::times::{PrayerTime, PrayerTimes};
use chrono::NaiveDate;
use qtty::{Days, Hour};

/// Raw decimal-hour landmarks in local apparent solar time.
#[derive(Debug, Copy, Clone)]
struct SolarDay {
    imsak: Option<f64>,
    fajr: Option<f64>,
    sunrise: Option<f64>,
    dhuhr: Option<f64>,
    asr: Option<f64>,
    sunset: Option<f64>,
    maghrib: Option<f64>,
    isha: Option<f64>,
    midnight: Option<f64>,
}

impl SolarDay {
    fn get(&self, prayer: Prayer) -> Option<f64> {
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
}

/// Compute the schedule for a validated query.
///
/// ```
/// use miqat::{compute, CalculationConfig, GeoQuery, Prayer};
///
/// let query = GeoQuery::from_ymd(2024, 3, 20, 21.4225, 39.8262, 3.0).unwrap();
/// let config = CalculationConfig::for_method("Makkah").unwrap();
/// let times = compute(&query, &config);
/// assert!(times.get(Prayer::Fajr).is_available());
/// ```
pub fn compute(query: &GeoQuery, config: &CalculationConfig) -> PrayerTimes {
    log::debug!(
        "computing {} at ({:.4}, {:.4}) UTC{:+} with {}",
        query.date(),
        query.latitude(),
        query.longitude(),
        query.timezone(),
        config.method
    );

    let jd = JulianDay::from(query.date()) - Days::new(query.longitude() / (15.0 * 24.0));
    let day = solve_day(jd, query.latitude(), config);
    let offset = query.timezone() - query.longitude() / 15.0;

    let times = PrayerTimes::from_fn(config.time_format, |prayer| {
        let time = day.get(prayer).map(|h| h + offset);
        if time.is_none() {
            log::debug!("{prayer} unavailable on {} at latitude {}", query.date(), query.latitude());
        }
        PrayerTime::from(time)
    });

    times.adjusted(&config.adjustments)
}

/// Validate raw inputs, then [`compute`].
///
/// Coordinates outside their geographic range are reported before any
/// computation happens.
pub fn compute_for(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    timezone: f64,
    config: &CalculationConfig,
) -> Result<PrayerTimes> {
    let query = GeoQuery::new(date, latitude, longitude, timezone)?;
    Ok(compute(&query, config))
}

fn minutes_to_hours(minutes: qtty::Minutes) -> f64 {
    minutes.to::<Hour>().value()
}

/// Landmark defined relative to sunset: an angle, or minutes after it.
fn after_sunset(jd: JulianDay, twilight: Twilight, sunset: Option<f64>, latitude: f64) -> Option<f64> {
    match twilight {
        Twilight::Angle(a) => compute_time(jd, a.value(), latitude, HalfDay::Evening),
        Twilight::FixedMinutes(m) => sunset.map(|s| s + minutes_to_hours(m)),
    }
}

fn solve_day(jd: JulianDay, latitude: f64, config: &CalculationConfig) -> SolarDay {
    let method = config.calculation_method();
    let tomorrow = jd + Days::new(1.0);

    let sunrise = compute_day_portion(jd, latitude, HalfDay::Morning);
    let sunset = compute_day_portion(jd, latitude, HalfDay::Evening);
    let next_sunrise = compute_day_portion(tomorrow, latitude, HalfDay::Morning).map(|h| h + 24.0);

    let mut fajr = compute_time(jd, method.fajr.value(), latitude, HalfDay::Morning);
    let mut maghrib = after_sunset(jd, method.maghrib, sunset, latitude);
    let mut isha = after_sunset(jd, method.isha, sunset, latitude);
    let mut imsak = match config.imsak {
        Twilight::Angle(a) => compute_time(jd, a.value(), latitude, HalfDay::Morning),
        Twilight::FixedMinutes(_) => None,
    };

    let rule = config.high_latitude;
    let bounds = match (sunset, next_sunrise) {
        (Some(set), Some(rise)) if rule != HighLatitudeRule::None => Some((set, rise, rise - set)),
        _ => None,
    };

    if let Some((set, rise, night)) = bounds {
        let rise_today = sunrise.unwrap_or(rise - 24.0);

        fajr = bound_twilight(fajr, method.fajr.value(), rise_today, night, rule, HalfDay::Morning);
        if let Twilight::Angle(a) = config.imsak {
            imsak = bound_twilight(imsak, a.value(), rise_today, night, rule, HalfDay::Morning);
        }
        if let Twilight::Angle(a) = method.maghrib {
            maghrib = bound_twilight(maghrib, a.value(), set, night, rule, HalfDay::Evening);
        }
        if let Twilight::Angle(a) = method.isha {
            isha = bound_twilight(isha, a.value(), set, night, rule, HalfDay::Evening);
        }
    }

    if let Twilight::FixedMinutes(m) = config.imsak {
        imsak = fajr.map(|f| f - minutes_to_hours(m));
    }

    let next = match method.midnight {
        MidnightConvention::Standard => next_sunrise,
        MidnightConvention::Jafari => {
            let angle = method.fajr.value();
            let next_fajr =
                compute_time(tomorrow, angle, latitude, HalfDay::Morning).map(|h| h + 24.0);
            match bounds {
                Some((_, rise, night)) => {
                    bound_twilight(next_fajr, angle, rise, night, rule, HalfDay::Morning)
                }
                None => next_fajr,
            }
        }
    };
    let midnight = sunset.zip(next).map(|(s, n)| s + (n - s) / 2.0);

    SolarDay {
        imsak,
        fajr,
        sunrise,
        dhuhr: Some(compute_mid_day(jd) + f64::from(config.dhuhr_minutes) / 60.0),
        asr: compute_asr(jd, config.asr, latitude),
        sunset,
        maghrib,
        isha,
        midnight,
    }
}

/// Keep a twilight landmark within `portion × night` of its base event
/// (sunrise before, sunset after). Unsolvable values take the bound.
fn bound_twilight(
    time: Option<f64>,
    angle: f64,
    base: f64,
    night: f64,
    rule: HighLatitudeRule,
    side: HalfDay,
) -> Option<f64> {
    let Some(portion) = rule.night_portion(angle).map(|p| p * night) else {
        return time;
    };
    let (bound, excess) = match side {
        HalfDay::Morning => (base - portion, time.map(|t| base - t)),
        HalfDay::Evening => (base + portion, time.map(|t| t - base)),
    };
    match excess {
        Some(e) if e <= portion => time,
        _ => Some(bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Adjustments, AsrJuristic};
    use crate::method::MethodId;

    fn query(y: i32, m: u32, d: u32, lat: f64, lon: f64, tz: f64) -> GeoQuery {
        GeoQuery::from_ymd(y, m, d, lat, lon, tz).unwrap()
    }

    fn hours(times: &PrayerTimes, prayer: Prayer) -> f64 {
        times.get(prayer).hours().unwrap()
    }

    #[test]
    fn mecca_equinox_reference_times() {
        let q = query(2024, 3, 20, 21.4225, 39.8262, 3.0);
        let config = CalculationConfig::default().with_method(MethodId::Makkah);
        let t = compute(&q, &config);

        // Within a couple of minutes of the Umm Al-Qura timetable.
        let expect = [
            (Prayer::Fajr, 5.0 + 8.0 / 60.0),
            (Prayer::Sunrise, 6.0 + 25.0 / 60.0),
            (Prayer::Dhuhr, 12.0 + 28.0 / 60.0),
            (Prayer::Asr, 15.0 + 52.0 / 60.0),
            (Prayer::Maghrib, 18.0 + 31.0 / 60.0),
        ];
        for (prayer, want) in expect {
            let got = hours(&t, prayer);
            assert!((got - want).abs() < 2.0 / 60.0, "{prayer}: got {got}, want {want}");
        }
    }

    #[test]
    fn fixed_isha_and_default_maghrib() {
        let q = query(2024, 3, 20, 21.4225, 39.8262, 3.0);
        let t = compute(&q, &CalculationConfig::default().with_method(MethodId::Makkah));
        assert_eq!(t.maghrib, t.sunset);
        assert!((hours(&t, Prayer::Isha) - hours(&t, Prayer::Maghrib) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn imsak_defaults_to_ten_minutes_before_fajr() {
        let q = query(2024, 3, 20, 33.5, 36.3, 2.0);
        let t = compute(&q, &CalculationConfig::default());
        let gap = hours(&t, Prayer::Fajr) - hours(&t, Prayer::Imsak);
        assert!((gap - 10.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn imsak_by_angle_precedes_fajr() {
        let q = query(2024, 3, 20, 33.5, 36.3, 2.0);
        let config = CalculationConfig::default().with_imsak(Twilight::angle(19.5));
        let t = compute(&q, &config);
        assert!(hours(&t, Prayer::Imsak) < hours(&t, Prayer::Fajr));
    }

    #[test]
    fn dhuhr_offset_moves_only_dhuhr() {
        let q = query(2024, 3, 20, 33.5, 36.3, 2.0);
        let base = compute(&q, &CalculationConfig::default());
        let late = compute(&q, &CalculationConfig::default().with_dhuhr_minutes(3));
        assert!((hours(&late, Prayer::Dhuhr) - hours(&base, Prayer::Dhuhr) - 0.05).abs() < 1e-9);
        assert_eq!(late.asr, base.asr);
        assert_eq!(late.fajr, base.fajr);
    }

    #[test]
    fn adjustments_are_applied_last() {
        let q = query(2024, 3, 20, 33.5, 36.3, 2.0);
        let adj = Adjustments::default().with(Prayer::Asr, -5);
        let base = compute(&q, &CalculationConfig::default());
        let t = compute(&q, &CalculationConfig::default().with_adjustments(adj));
        assert!((hours(&base, Prayer::Asr) - hours(&t, Prayer::Asr) - 5.0 / 60.0).abs() < 1e-9);
        assert_eq!(t.dhuhr, base.dhuhr);
    }

    #[test]
    fn hanafi_asr_is_later() {
        let q = query(2024, 1, 15, 24.86, 67.0, 5.0);
        let std = compute(&q, &CalculationConfig::default());
        let han = compute(&q, &CalculationConfig::default().with_asr(AsrJuristic::Hanafi));
        assert!(hours(&han, Prayer::Asr) > hours(&std, Prayer::Asr));
    }

    #[test]
    fn midnight_between_sunset_and_next_sunrise() {
        let q = query(2024, 3, 20, 51.5, -0.13, 0.0);
        let t = compute(&q, &CalculationConfig::default());
        let m = hours(&t, Prayer::Midnight);
        // equinox: ~18:10 to ~06:00, midnight near 00:05
        assert!(!(6.0..18.0).contains(&m), "midnight = {m}");
    }

    #[test]
    fn high_latitude_rules_fill_missing_twilight() {
        // Edinburgh at the June solstice: the Sun never gets 18° below the
        // horizon, so Fajr and Isha have no angle solution.
        let q = query(2024, 6, 21, 55.95, -3.19, 1.0);
        let plain = compute(&q, &CalculationConfig::default());
        assert_eq!(plain.fajr, PrayerTime::Unavailable);
        assert_eq!(plain.isha, PrayerTime::Unavailable);
        assert!(plain.maghrib.is_available());

        for rule in [
            HighLatitudeRule::MiddleOfNight,
            HighLatitudeRule::OneSeventh,
            HighLatitudeRule::AngleBased,
        ] {
            let t = compute(&q, &CalculationConfig::default().with_high_latitude(rule));
            let fajr = hours(&t, Prayer::Fajr);
            let isha = hours(&t, Prayer::Isha);
            // Isha under the middle-of-night rule lands after 00:00.
            let before_sunrise = (hours(&t, Prayer::Sunrise) - fajr).rem_euclid(24.0);
            let after_sunset = (isha - hours(&t, Prayer::Sunset)).rem_euclid(24.0);
            assert!(before_sunrise > 0.0 && before_sunrise < 6.0, "{rule:?}: fajr {fajr}");
            assert!(after_sunset > 0.0 && after_sunset < 6.0, "{rule:?}: isha {isha}");
            assert!((fajr - hours(&t, Prayer::Imsak) - 10.0 / 60.0).abs() < 1e-9);
        }
    }

    #[test]
    fn jafari_midnight_uses_bounded_fajr() {
        let q = query(2024, 6, 21, 55.95, -3.19, 1.0);
        let config = CalculationConfig::default().with_method(MethodId::Tehran);
        assert_eq!(compute(&q, &config).midnight, PrayerTime::Unavailable);

        let t = compute(&q, &config.with_high_latitude(HighLatitudeRule::AngleBased));
        let sunset = hours(&t, Prayer::Sunset);
        let to_midnight = (hours(&t, Prayer::Midnight) - sunset).rem_euclid(24.0);
        let to_fajr = (hours(&t, Prayer::Fajr) - sunset).rem_euclid(24.0);
        assert!(to_midnight > 0.0 && to_midnight < to_fajr, "midnight {to_midnight} fajr {to_fajr}");
    }

    #[test]
    fn high_latitude_rule_keeps_solvable_twilight() {
        let q = query(2024, 3, 20, 21.4225, 39.8262, 3.0);
        let plain = compute(&q, &CalculationConfig::default());
        let ruled = compute(
            &q,
            &CalculationConfig::default().with_high_latitude(HighLatitudeRule::AngleBased),
        );
        assert_eq!(plain, ruled);
    }

    #[test]
    fn bound_twilight_clamps_long_twilight() {
        let rule = HighLatitudeRule::MiddleOfNight;
        // night of 8 h: Fajr may be at most 4 h before sunrise
        assert_eq!(bound_twilight(Some(1.0), 18.0, 6.0, 8.0, rule, HalfDay::Morning), Some(2.0));
        assert_eq!(bound_twilight(Some(3.0), 18.0, 6.0, 8.0, rule, HalfDay::Morning), Some(3.0));
        assert_eq!(bound_twilight(None, 18.0, 20.0, 8.0, rule, HalfDay::Evening), Some(24.0));
        assert_eq!(
            bound_twilight(None, 18.0, 20.0, 8.0, HighLatitudeRule::None, HalfDay::Evening),
            None
        );
    }

    #[test]
    fn compute_for_rejects_bad_coordinates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let config = CalculationConfig::default();
        assert!(compute_for(date, 95.0, 0.0, 0.0, &config).unwrap_err().is_input());
        assert!(compute_for(date, 0.0, 200.0, 0.0, &config).unwrap_err().is_input());
        assert!(compute_for(date, 0.0, 0.0, 0.0, &config).is_ok());
    }
}
