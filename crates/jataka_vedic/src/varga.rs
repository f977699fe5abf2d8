//! Divisional chart positions.
//!
//! The rashi chart (D1) places a body by its sidereal sign directly. The
//! navamsa chart (D9) divides each sign into nine parts of 3°20′ and maps
//! them onto signs starting from the sign of the element's cardinal
//! member (fire from Mesha, earth from Makara, air from Tula, water from
//! Karka).

use crate::rashi::{RASHI_SPAN, Rashi, rashi_from_longitude};

/// Width of one navamsa division in degrees (3°20′).
pub const NAVAMSA_SPAN: f64 = RASHI_SPAN / 9.0;

/// A body's placement within one divisional chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaPosition {
    /// Sign the body occupies in this chart.
    pub rashi: Rashi,
    /// Degrees into that sign, [0, 30).
    pub degree_in_sign: f64,
}

/// D1 placement: the sidereal sign and degree as-is.
pub fn rashi_chart_position(sidereal_deg: f64) -> VargaPosition {
    let info = rashi_from_longitude(sidereal_deg);
    VargaPosition {
        rashi: info.rashi,
        degree_in_sign: info.degree_in_sign,
    }
}

/// D9 placement from a sidereal longitude.
///
/// Signs of the same element count their navamsas from the same starting
/// sign, so the mapping depends only on `sign % 4` and the division index.
pub fn navamsa_position(sidereal_deg: f64) -> VargaPosition {
    let info = rashi_from_longitude(sidereal_deg);
    let sign = info.rashi.index();
    let division = ((info.degree_in_sign / NAVAMSA_SPAN) as usize).min(8);

    let element = sign % 4;
    let start = element * 3;
    let navamsa_sign = (start + division) % 12;

    let degree_in_division = info.degree_in_sign - division as f64 * NAVAMSA_SPAN;
    VargaPosition {
        rashi: Rashi::from_index(navamsa_sign),
        degree_in_sign: degree_in_division * 9.0,
    }
}
