//! Sunrise and sunset via the hour-angle method.
//!
//! Uses the standard refraction-corrected altitude of -0.833 degrees and
//! the Sun's declination at local noon. Returned hours are in UT and may
//! fall outside [0, 24); callers add the zone offset and normalize when
//! formatting.

use jataka_core::sun_longitude_deg;
use jataka_time::julian_centuries;

use crate::bhava::obliquity_deg;

/// Altitude of the Sun's center at rise and set, degrees.
pub const RISE_SET_ALTITUDE_DEG: f64 = -0.833;

/// Outcome of a sunrise/sunset computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSet {
    /// The Sun crosses the horizon; hours are UT on the given day.
    Event {
        sunrise_hours: f64,
        sunset_hours: f64,
    },
    /// Polar night: the Sun stays below the horizon all day.
    NeverRises,
    /// Midnight sun: the Sun stays above the horizon all day.
    NeverSets,
}

/// Sunrise and sunset in UT hours for the day of `jd` at a place.
///
/// `latitude_deg` is north-positive, `longitude_deg` east-positive.
pub fn sunrise_sunset(jd: f64, latitude_deg: f64, longitude_deg: f64) -> RiseSet {
    let sun_lon = sun_longitude_deg(jd).to_radians();
    let eps = obliquity_deg(julian_centuries(jd)).to_radians();
    let declination = (eps.sin() * sun_lon.sin()).asin();

    let phi = latitude_deg.to_radians();
    let h0 = RISE_SET_ALTITUDE_DEG.to_radians();
    let cos_hour_angle =
        (h0.sin() - phi.sin() * declination.sin()) / (phi.cos() * declination.cos());

    if cos_hour_angle > 1.0 {
        return RiseSet::NeverRises;
    }
    if cos_hour_angle < -1.0 {
        return RiseSet::NeverSets;
    }

    let hour_angle_hours = cos_hour_angle.acos().to_degrees() / 15.0;
    let transit_hours = 12.0 - longitude_deg / 15.0;
    RiseSet::Event {
        sunrise_hours: transit_hours - hour_angle_hours,
        sunset_hours: transit_hours + hour_angle_hours,
    }
}
