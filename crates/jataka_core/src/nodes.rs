//! Mean lunar node (Rahu/Ketu) longitude.
//!
//! Rahu is the Moon's mean ascending node: a single polynomial in T that
//! regresses through the zodiac with an ~18.6-year cycle. Ketu is the
//! descending node and is *defined* as Rahu + 180°; it must never be
//! computed independently.

use jataka_time::julian_centuries;

use crate::normalize_360;

/// Tropical longitude of Rahu (mean ascending node) in degrees [0, 360).
pub fn rahu_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let omega = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0;
    normalize_360(omega)
}

/// Tropical longitude of Ketu: always `(rahu + 180) mod 360`.
pub fn ketu_longitude_deg(jd: f64) -> f64 {
    normalize_360(rahu_longitude_deg(jd) + 180.0)
}
