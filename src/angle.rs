// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry and range reduction.
//!
//! Every solar formula in this crate is written in degrees. These helpers
//! wrap the radian-based `f64` methods so the formulas read the way they are
//! published, and the two reducers keep angles in `[0, 360)` and decimal
//! hours in `[0, 24)`.
//!
//! The inverse functions return `NaN` for arguments outside their domain,
//! exactly like the `f64` methods they wrap. The angle solver relies on
//! this to detect a sun that never reaches the requested altitude.

/// Sine of an angle given in degrees.
#[inline]
pub fn dsin(d: f64) -> f64 {
    d.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn dcos(d: f64) -> f64 {
    d.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn dtan(d: f64) -> f64 {
    d.to_radians().tan()
}

/// Arc sine in degrees. `NaN` outside `[-1, 1]`.
#[inline]
pub fn darcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arc cosine in degrees. `NaN` outside `[-1, 1]`.
#[inline]
pub fn darccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arc tangent in degrees.
#[inline]
pub fn darctan(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Four-quadrant arc tangent of `y / x` in degrees.
#[inline]
pub fn darctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Reduce an angle into `[0, 360)`.
#[inline]
pub fn fixangle(a: f64) -> f64 {
    wrap(a, 360.0)
}

/// Reduce a decimal hour into `[0, 24)`.
///
/// ```
/// assert_eq!(miqat::fixhour(-1.0), 23.0);
/// assert_eq!(miqat::fixhour(25.5), 1.5);
/// ```
#[inline]
pub fn fixhour(a: f64) -> f64 {
    wrap(a, 24.0)
}

// `rem_euclid` can round up to exactly `modulus` for tiny negative inputs.
#[inline]
fn wrap(a: f64, modulus: f64) -> f64 {
    let r = a.rem_euclid(modulus);
    if r >= modulus {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn trig_helpers_use_degrees() {
        assert!((dsin(30.0) - 0.5).abs() < EPS);
        assert!((dcos(60.0) - 0.5).abs() < EPS);
        assert!((dtan(45.0) - 1.0).abs() < EPS);
        assert!((darcsin(0.5) - 30.0).abs() < 1e-9);
        assert!((darccos(0.5) - 60.0).abs() < 1e-9);
        assert!((darctan(1.0) - 45.0).abs() < 1e-9);
        assert!((darctan2(1.0, -1.0) - 135.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_trig_outside_domain_is_nan() {
        assert!(darccos(1.5).is_nan());
        assert!(darccos(-1.0001).is_nan());
        assert!(darcsin(2.0).is_nan());
    }

    #[test]
    fn fixhour_wraps_negative_and_overflowing_hours() {
        assert_eq!(fixhour(-1.0), 23.0);
        assert_eq!(fixhour(24.0), 0.0);
        assert_eq!(fixhour(49.25), 1.25);
        assert_eq!(fixhour(-1e-18), 0.0);
    }

    #[test]
    fn fixangle_wraps_into_full_turn() {
        assert_eq!(fixangle(-90.0), 270.0);
        assert_eq!(fixangle(720.0), 0.0);
        assert_eq!(fixangle(361.5), 1.5);
    }

    #[test]
    fn reducers_are_idempotent() {
        for &x in &[-1000.3, -24.0, -0.5, 0.0, 13.7, 359.99, 4567.8] {
            let h = fixhour(x);
            assert_eq!(fixhour(h), h);
            assert!((0.0..24.0).contains(&h));

            let a = fixangle(x);
            assert_eq!(fixangle(a), a);
            assert!((0.0..360.0).contains(&a));
        }
    }

    #[test]
    fn nan_passes_through_reducers() {
        assert!(fixhour(f64::NAN).is_nan());
        assert!(fixangle(f64::NAN).is_nan());
    }
}
