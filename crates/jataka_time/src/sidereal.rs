//! Greenwich Mean Sidereal Time, degree-valued.
//!
//! GMST polynomial referenced to J2000 (Meeus Ch. 12). The engine works in
//! ecliptic degrees everywhere, so unlike observatory-grade pipelines these
//! functions return degrees in [0, 360) rather than radians, and take JD UT
//! directly (UT1−UTC is far below this engine's precision floor).

use crate::julian::{J2000_JD, julian_centuries};

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees at a given JD UT.
///
/// `GMST = 280.46061837 + 360.98564736629·(JD − J2000)
///         + 0.000387933·T² − T³/38710000`
///
/// Returns degrees in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let gmst = 280.460_618_37
        + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(gmst)
}

/// Local Sidereal Time in degrees: GMST plus observer east longitude.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst_deg(jd_ut) + longitude_east_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 51s ≈ 99.97 deg
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.97).abs() < 0.1, "GMST = {g}, expected ~99.97");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_440_000.5, 2_460_000.5, 2_420_000.25] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn gmst_advances_daily() {
        // One solar day advances GMST ~0.9856 deg beyond a full turn
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let advance = (g2 - g1).rem_euclid(360.0);
        assert!((advance - 0.9856).abs() < 0.01, "advance = {advance}");
    }

    #[test]
    fn lst_east_observer() {
        let jd = 2_451_545.0;
        let lst = local_sidereal_time_deg(jd, 90.0);
        let expected = (gmst_deg(jd) + 90.0).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-12);
    }

    #[test]
    fn lst_west_wraps() {
        let jd = 2_451_544.5; // GMST ~99.97
        let lst = local_sidereal_time_deg(jd, -120.0);
        assert!((0.0..360.0).contains(&lst));
    }
}
