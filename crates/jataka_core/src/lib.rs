//! Simplified planetary position engine for the jataka chart calculator.
//!
//! This crate computes tropical ecliptic longitudes for the nine bodies of
//! the Vedic chart from low-order series and J2000 Keplerian elements:
//! - Mercury–Saturn: element evaluation + Kepler's equation + helio→geo
//! - Sun: 3-term equation-of-center closed form
//! - Moon: truncated lunar theory (6 longitude / 3 latitude terms)
//! - Rahu: mean lunar ascending node polynomial; Ketu = Rahu + 180°
//!
//! Accuracy is deliberately consumer-grade (arc-minute scale, not
//! arc-second): the truncations are part of the engine's frozen behavior,
//! not bugs to fix.

pub mod elements;
pub mod kepler;
pub mod moon;
pub mod motion;
pub mod nodes;
pub mod sun;

pub use elements::{ALL_KEPLERIAN_BODIES, KeplerianBody, OrbitalElements, VISIBLE_PLANETS};
pub use kepler::{HelioPosition, helio_to_geo, heliocentric};
pub use moon::{MoonPosition, moon_position};
pub use motion::{geocentric_longitude, is_retrograde};
pub use nodes::{ketu_longitude_deg, rahu_longitude_deg};
pub use sun::sun_longitude_deg;

/// Normalize an angle to [0, 360) degrees.
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
