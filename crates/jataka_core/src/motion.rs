//! Geocentric longitudes and apparent-motion (retrograde) detection for
//! the five visible Keplerian planets.
//!
//! Retrograde status comes from comparing today's geocentric longitude to
//! yesterday's. A raw difference beyond ±300° is a 0°/360° wrap, not real
//! motion: a jump above +300 is backward motion that wrapped, and below
//! −300 is forward motion that wrapped.

use crate::elements::KeplerianBody;
use crate::kepler::{helio_to_geo, heliocentric};

/// Geocentric tropical longitude of a visible planet at a JD.
///
/// Returns `None` for Earth, which has no geocentric longitude: it is the
/// observer.
pub fn geocentric_longitude(body: KeplerianBody, jd: f64) -> Option<f64> {
    if matches!(body, KeplerianBody::Earth) {
        return None;
    }
    let planet = heliocentric(body, jd);
    let earth = heliocentric(KeplerianBody::Earth, jd);
    Some(helio_to_geo(
        planet.longitude_deg,
        planet.distance_au,
        earth.longitude_deg,
        earth.distance_au,
    ))
}

/// Whether the apparent motion from `previous_deg` to `current_deg`
/// (one day apart) is retrograde.
///
/// Both longitudes must be in [0, 360).
pub fn apparent_motion_retrograde(current_deg: f64, previous_deg: f64) -> bool {
    let movement = current_deg - previous_deg;
    if movement < -300.0 {
        // Forward motion across the 360 -> 0 wrap
        false
    } else if movement > 300.0 {
        // Backward motion across the 0 -> 360 wrap
        true
    } else {
        movement < 0.0
    }
}

/// Retrograde status of a visible planet at a JD, by one-day comparison.
///
/// Returns `None` for Earth.
pub fn is_retrograde(body: KeplerianBody, jd: f64) -> Option<bool> {
    let today = geocentric_longitude(body, jd)?;
    let yesterday = geocentric_longitude(body, jd - 1.0)?;
    Some(apparent_motion_retrograde(today, yesterday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::VISIBLE_PLANETS;

    #[test]
    fn earth_has_no_geocentric_longitude() {
        assert!(geocentric_longitude(KeplerianBody::Earth, 2_451_545.0).is_none());
        assert!(is_retrograde(KeplerianBody::Earth, 2_451_545.0).is_none());
    }

    #[test]
    fn visible_planets_have_longitudes() {
        for body in VISIBLE_PLANETS {
            let lon = geocentric_longitude(body, 2_451_545.0);
            assert!(lon.is_some(), "{}", body.name());
            assert!((0.0..360.0).contains(&lon.unwrap()));
        }
    }

    #[test]
    fn plain_forward_motion() {
        assert!(!apparent_motion_retrograde(101.0, 100.0));
    }

    #[test]
    fn plain_backward_motion() {
        assert!(apparent_motion_retrograde(99.8, 100.0));
    }

    #[test]
    fn forward_across_wrap() {
        // 359.9 -> 0.2 is forward: raw difference -359.7 < -300
        assert!(!apparent_motion_retrograde(0.2, 359.9));
    }

    #[test]
    fn backward_across_wrap() {
        // 0.1 -> 359.8 is backward: raw difference +359.7 > 300
        assert!(apparent_motion_retrograde(359.8, 0.1));
    }

    #[test]
    fn outer_planets_spend_time_retrograde() {
        // Jupiter is retrograde roughly 4 months of the year; scanning a
        // full year must find both states.
        let mut any_retro = false;
        let mut any_direct = false;
        for i in 0..73 {
            let jd = 2_451_545.0 + i as f64 * 5.0;
            match is_retrograde(KeplerianBody::Jupiter, jd) {
                Some(true) => any_retro = true,
                Some(false) => any_direct = true,
                None => unreachable!(),
            }
        }
        assert!(any_retro, "Jupiter never retrograde over a year");
        assert!(any_direct, "Jupiter never direct over a year");
    }
}
