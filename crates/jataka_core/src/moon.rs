//! Geocentric lunar position, truncated ELP-style series.
//!
//! Mean elements as polynomials in T (Meeus Ch. 47) with the six dominant
//! longitude terms and three dominant latitude terms. The principal term
//! alone contributes ~6.29° of longitude; the full ~60-term series is
//! deliberately not carried, leaving arc-minute truncation error inside
//! this engine's stated precision envelope.

use jataka_time::julian_centuries;

use crate::normalize_360;

/// Geocentric lunar position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Tropical ecliptic longitude, degrees in [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees (within ±5.3).
    pub latitude_deg: f64,
}

/// Tropical longitude and latitude of the Moon at a JD.
pub fn moon_position(jd: f64) -> MoonPosition {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;

    // Mean elongation from the Sun
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;

    // Solar mean anomaly
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;

    // Lunar mean anomaly
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;

    // Argument of latitude
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let d_rad = (d % 360.0).to_radians();
    let m_rad = (m % 360.0).to_radians();
    let mp_rad = (mp % 360.0).to_radians();
    let f_rad = (f % 360.0).to_radians();

    // Dominant longitude terms, amplitudes in 1e-6 degrees
    let dl = 6_288_774.0 * mp_rad.sin()
        + 1_274_027.0 * (2.0 * d_rad - mp_rad).sin()
        + 658_314.0 * (2.0 * d_rad).sin()
        + 213_618.0 * (2.0 * mp_rad).sin()
        - 185_116.0 * m_rad.sin()
        - 114_332.0 * (2.0 * f_rad).sin();

    // Dominant latitude terms
    let db = 5_128_122.0 * f_rad.sin()
        + 280_602.0 * (mp_rad + f_rad).sin()
        + 277_693.0 * (mp_rad - f_rad).sin();

    MoonPosition {
        longitude_deg: normalize_360(lp + dl / 1_000_000.0),
        latitude_deg: db / 1_000_000.0,
    }
}
