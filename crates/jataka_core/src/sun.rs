//! Geocentric solar longitude, closed form.
//!
//! Truncated solar theory (Meeus Ch. 25): mean longitude plus a three-term
//! equation of center in the solar mean anomaly. The Sun–Earth relation is
//! modeled directly; no Keplerian iteration is involved.

use jataka_time::julian_centuries;

use crate::normalize_360;

/// Tropical ecliptic longitude of the Sun in degrees [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    // Geometric mean longitude
    let l0 = normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t);

    // Solar mean anomaly
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t) % 360.0;
    let m_rad = m.to_radians();

    // Equation of center, three harmonics
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    normalize_360(l0 + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_in_range() {
        for &jd in &[2_451_545.0, 2_440_000.5, 2_460_000.5] {
            let lon = sun_longitude_deg(jd);
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }

    #[test]
    fn sun_near_capricorn_at_j2000() {
        // Early January: Sun near 280 deg tropical
        let lon = sun_longitude_deg(2_451_545.0);
        assert!((lon - 280.0).abs() < 1.5, "Sun at J2000 = {lon}");
    }

    #[test]
    fn sun_near_equinox_in_march() {
        // 2000-03-20 ~07:35 UT (JD 2451623.816): Sun crosses 0 deg
        let lon = sun_longitude_deg(2_451_623.816);
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.5, "Sun at equinox = {lon}");
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let l1 = sun_longitude_deg(2_451_545.0);
        let l2 = sun_longitude_deg(2_451_546.0);
        let advance = (l2 - l1).rem_euclid(360.0);
        assert!((advance - 1.0).abs() < 0.1, "advance = {advance}");
    }

    #[test]
    fn sun_full_year_returns() {
        // One tropical year later the Sun is back within ~0.1 deg
        let l1 = sun_longitude_deg(2_451_545.0);
        let l2 = sun_longitude_deg(2_451_545.0 + 365.2422);
        let diff = (l2 - l1).rem_euclid(360.0);
        assert!(diff < 0.1 || diff > 359.9, "diff = {diff}");
    }
}
