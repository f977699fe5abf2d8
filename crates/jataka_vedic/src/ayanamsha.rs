//! Lahiri ayanamsha, linear model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (anchored to the moving equinox) and the sidereal zodiac (anchored to
//! the fixed stars). This engine uses the Lahiri (Chitrapaksha) value with
//! a linear precession rate from J2000. The linear model drifts from the
//! true (mildly non-linear) precession by arc-seconds per decade.

use jataka_time::J2000_JD;

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0, degrees.
pub const AYANAMSHA_J2000_DEG: f64 = 23.85;

/// Precession rate: 50.27 arc-seconds per year, in degrees.
pub const AYANAMSHA_RATE_DEG_PER_YEAR: f64 = 50.27 / 3600.0;

/// Lahiri ayanamsha in degrees at a given JD.
///
/// Monotonically increasing with time.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    let years_from_j2000 = (jd - J2000_JD) / 365.25;
    AYANAMSHA_J2000_DEG + years_from_j2000 * AYANAMSHA_RATE_DEG_PER_YEAR
}

/// Convert a tropical longitude to sidereal: `(tropical − ayanamsha) mod 360`.
///
/// Always returns a value in [0, 360).
pub fn to_sidereal(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ayanamsha_at_j2000() {
        assert!((lahiri_ayanamsha_deg(J2000_JD) - 23.85).abs() < 1e-12);
    }

    #[test]
    fn ayanamsha_one_year_later() {
        let a = lahiri_ayanamsha_deg(J2000_JD + 365.25);
        assert!((a - (23.85 + 50.27 / 3600.0)).abs() < 1e-12);
    }

    #[test]
    fn ayanamsha_monotonic() {
        let mut prev = lahiri_ayanamsha_deg(2_430_000.0);
        for i in 1..40 {
            let a = lahiri_ayanamsha_deg(2_430_000.0 + i as f64 * 1000.0);
            assert!(a > prev);
            prev = a;
        }
    }

    #[test]
    fn sidereal_always_in_range() {
        for lon in [0.0, 10.0, 200.0, 359.9] {
            for aya in [0.0, 23.85, 24.2, 400.0] {
                let s = to_sidereal(lon, aya);
                assert!((0.0..360.0).contains(&s), "lon={lon} aya={aya} -> {s}");
            }
        }
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        let s = to_sidereal(10.0, 23.85);
        assert!((s - (10.0 - 23.85 + 360.0)).abs() < 1e-12);
    }
}
