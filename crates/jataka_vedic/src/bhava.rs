//! Ascendant and whole-sign houses.
//!
//! The ascendant (lagna) is the ecliptic degree rising on the eastern
//! horizon, computed from local sidereal time, the mean obliquity of the
//! ecliptic, and the observer's latitude. Houses follow the whole-sign
//! system: the sign holding the lagna is the whole first house, the next
//! sign the second, and so on.

use jataka_time::{julian_centuries, local_sidereal_time_deg};

use crate::util::normalize_360;

/// Mean obliquity of the ecliptic in degrees, linear model.
pub fn obliquity_deg(centuries_from_j2000: f64) -> f64 {
    23.4393 - 0.013 * centuries_from_j2000
}

/// Tropical ascendant in degrees for an instant and place.
///
/// `latitude_deg` is geographic latitude north-positive, `longitude_deg`
/// east-positive.
pub fn ascendant_tropical_deg(jd: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let lst = local_sidereal_time_deg(jd, longitude_deg).to_radians();
    let eps = obliquity_deg(julian_centuries(jd)).to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(lst.cos(), -(lst.sin()) * eps.cos() - phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

/// Whole-sign house cusps as sign indices.
///
/// Element `i` is the zero-based sign index of house `i + 1`; element 0 is
/// the lagna's own sign.
pub fn whole_sign_houses(lagna_sidereal_deg: f64) -> [u8; 12] {
    let lagna_sign = (normalize_360(lagna_sidereal_deg) / 30.0) as usize;
    let mut houses = [0u8; 12];
    for (i, slot) in houses.iter_mut().enumerate() {
        *slot = ((lagna_sign + i) % 12) as u8;
    }
    houses
}

/// House number (1..=12) occupied by a planet, given its sign and the
/// lagna sign, both as zero-based indices.
pub fn house_of(planet_sign: usize, lagna_sign: usize) -> u8 {
    ((planet_sign % 12 + 12 - lagna_sign % 12) % 12) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        assert!((obliquity_deg(0.0) - 23.4393).abs() < 1e-12);
    }

    #[test]
    fn obliquity_decreases() {
        assert!(obliquity_deg(1.0) < obliquity_deg(0.0));
    }

    #[test]
    fn ascendant_in_range() {
        for jd in [2_451_545.0, 2_455_000.25, 2_460_000.75] {
            for lat in [-45.0, 0.0, 28.6] {
                let asc = ascendant_tropical_deg(jd, lat, 77.2);
                assert!((0.0..360.0).contains(&asc), "jd={jd} lat={lat} -> {asc}");
            }
        }
    }

    #[test]
    fn ascendant_changes_with_time() {
        let a = ascendant_tropical_deg(2_451_545.0, 28.6, 77.2);
        let b = ascendant_tropical_deg(2_451_545.0 + 2.0 / 24.0, 28.6, 77.2);
        assert!((a - b).abs() > 1.0);
    }

    #[test]
    fn houses_rotate_from_lagna() {
        let houses = whole_sign_houses(95.0);
        assert_eq!(houses[0], 3);
        assert_eq!(houses[1], 4);
        assert_eq!(houses[11], 2);
    }

    #[test]
    fn houses_from_mesha_lagna() {
        let houses = whole_sign_houses(12.0);
        for (i, sign) in houses.iter().enumerate() {
            assert_eq!(*sign as usize, i);
        }
    }

    #[test]
    fn house_of_planet() {
        assert_eq!(house_of(3, 3), 1);
        assert_eq!(house_of(4, 3), 2);
        assert_eq!(house_of(2, 3), 12);
        assert_eq!(house_of(0, 11), 2);
    }
}
