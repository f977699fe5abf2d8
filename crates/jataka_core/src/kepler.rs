//! Kepler's equation and the heliocentric → geocentric transform.
//!
//! Element evaluation at time T, fixed-point solution of `E = M + e·sin E`,
//! true anomaly, and the planar Cartesian subtraction that converts a
//! Sun-centered longitude into an Earth-observed one.

use jataka_time::julian_centuries;

use crate::elements::KeplerianBody;
use crate::normalize_360;

/// Fixed iteration count for the Kepler solver. For the eccentricities in
/// the element table (< 0.21) the fixed-point map converges well below
/// chart precision in 10 steps, so no convergence check is carried.
const KEPLER_ITERATIONS: usize = 10;

/// Heliocentric position of a Keplerian body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelioPosition {
    /// Heliocentric ecliptic longitude, degrees in [0, 360).
    pub longitude_deg: f64,
    /// Approximate ecliptic latitude, degrees. Zero for Earth.
    pub latitude_deg: f64,
    /// Distance from the Sun, AU.
    pub distance_au: f64,
}

/// Solve Kepler's equation `E = M + e·sin E` by fixed-point iteration.
///
/// `mean_anomaly_rad` seeds the iteration; returns the eccentric anomaly
/// in radians.
fn eccentric_anomaly(mean_anomaly_rad: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly_rad;
    for _ in 0..KEPLER_ITERATIONS {
        ecc = mean_anomaly_rad + e * ecc.sin();
    }
    ecc
}

/// Heliocentric longitude, latitude, and distance of a body at a JD.
///
/// Evaluates the J2000 elements at T (linear extrapolation), solves
/// Kepler's equation, and forms the true longitude `v + ω`.
///
/// For Earth the latitude is zero by definition and the distance is the
/// semi-major axis; the slight radial error cancels in the geocentric
/// subtraction at this engine's precision.
pub fn heliocentric(body: KeplerianBody, jd: f64) -> HelioPosition {
    let t = julian_centuries(jd);
    let el = body.elements();

    let l = (el.l0 + el.l1 * t) % 360.0;
    let e = el.e0 + el.e1 * t;
    let incl = el.i0 + el.i1 * t;
    let omega = el.omega0 + el.omega1 * t;
    let w = el.w0 + el.w1 * t;

    let m_rad = ((l - w) % 360.0).to_radians();
    let ecc = eccentric_anomaly(m_rad, e);

    let v = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ecc / 2.0).tan()).atan();
    let helio_long = normalize_360(v.to_degrees() + w);

    if matches!(body, KeplerianBody::Earth) {
        return HelioPosition {
            longitude_deg: helio_long,
            latitude_deg: 0.0,
            distance_au: el.a,
        };
    }

    let r = el.a * (1.0 - e * ecc.cos());
    let lat = incl * (helio_long - omega).to_radians().sin();

    HelioPosition {
        longitude_deg: helio_long,
        latitude_deg: lat,
        distance_au: r,
    }
}

/// Convert a heliocentric longitude/distance pair to a geocentric
/// longitude, given Earth's own heliocentric position.
///
/// Planar vector subtraction in the ecliptic: both positions go to
/// Cartesian, the Earth vector is subtracted, and `atan2` recovers the
/// observed longitude in [0, 360).
pub fn helio_to_geo(
    body_long_deg: f64,
    body_dist_au: f64,
    earth_long_deg: f64,
    earth_dist_au: f64,
) -> f64 {
    let (body_sin, body_cos) = body_long_deg.to_radians().sin_cos();
    let (earth_sin, earth_cos) = earth_long_deg.to_radians().sin_cos();

    let geo_x = body_dist_au * body_cos - earth_dist_au * earth_cos;
    let geo_y = body_dist_au * body_sin - earth_dist_au * earth_sin;

    normalize_360(geo_y.atan2(geo_x).to_degrees())
}
