//! Vimshottari dasha timeline.
//!
//! The 120-year cycle assigns each graha a fixed allocation of years.
//! The opening mahadasha is ruled by the lord of the Moon's birth
//! nakshatra, truncated by however much of the nakshatra the Moon had
//! already traversed. Antardashas subdivide each mahadasha in the same
//! sequence, starting from the mahadasha lord itself.

use crate::graha::{DASHA_SEQUENCE, Graha};
use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};

/// Calendar-free year length used for dasha arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Full Vimshottari cycle in years.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// A single dasha span in Julian days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    pub graha: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// A mahadasha with its nine antardashas.
#[derive(Debug, Clone, PartialEq)]
pub struct Mahadasha {
    pub graha: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
    pub antardashas: Vec<DashaPeriod>,
}

impl Mahadasha {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Dasha balance at birth: the Moon's nakshatra and the fraction of it
/// already elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaBalance {
    /// The Moon's birth nakshatra.
    pub nakshatra: Nakshatra,
    /// Lord of the opening mahadasha.
    pub lord: Graha,
    /// Fraction of the nakshatra traversed, [0, 1).
    pub elapsed_fraction: f64,
}

/// Balance of the opening mahadasha from the Moon's sidereal longitude.
pub fn birth_balance(moon_sidereal_deg: f64) -> DashaBalance {
    let info = nakshatra_from_longitude(moon_sidereal_deg);
    DashaBalance {
        nakshatra: info.nakshatra,
        lord: info.nakshatra.lord(),
        elapsed_fraction: info.degree_in_nakshatra / NAKSHATRA_SPAN,
    }
}

fn antardashas_for(lord: Graha, start_jd: f64, maha_days: f64) -> Vec<DashaPeriod> {
    let offset = DASHA_SEQUENCE
        .iter()
        .position(|g| *g == lord)
        .unwrap_or(0);
    let mut cursor = start_jd;
    (0..9)
        .map(|i| {
            let graha = DASHA_SEQUENCE[(offset + i) % 9];
            let span = maha_days * graha.dasha_years() / TOTAL_CYCLE_YEARS;
            let period = DashaPeriod {
                graha,
                start_jd: cursor,
                end_jd: cursor + span,
            };
            cursor = period.end_jd;
            period
        })
        .collect()
}

/// Full nine-mahadasha timeline starting at birth.
///
/// The first mahadasha is shortened by the elapsed nakshatra fraction;
/// the remaining eight follow at their full allocations in sequence
/// order, each carrying its nine antardashas.
pub fn vimshottari_mahadashas(birth_jd: f64, moon_sidereal_deg: f64) -> Vec<Mahadasha> {
    let balance = birth_balance(moon_sidereal_deg);
    let offset = DASHA_SEQUENCE
        .iter()
        .position(|g| *g == balance.lord)
        .unwrap_or(0);

    let mut cursor = birth_jd;
    (0..9)
        .map(|i| {
            let graha = DASHA_SEQUENCE[(offset + i) % 9];
            let full_days = graha.dasha_years() * DAYS_PER_YEAR;
            let days = if i == 0 {
                full_days * (1.0 - balance.elapsed_fraction)
            } else {
                full_days
            };
            let maha = Mahadasha {
                graha,
                start_jd: cursor,
                end_jd: cursor + days,
                antardashas: antardashas_for(graha, cursor, days),
            };
            cursor = maha.end_jd;
            maha
        })
        .collect()
}

/// The mahadasha and antardasha in effect at `query_jd`, if the instant
/// falls inside the timeline.
pub fn active_dasha_at(
    mahadashas: &[Mahadasha],
    query_jd: f64,
) -> Option<(&Mahadasha, &DashaPeriod)> {
    let maha = mahadashas
        .iter()
        .find(|m| query_jd >= m.start_jd && query_jd < m.end_jd)?;
    let antar = maha
        .antardashas
        .iter()
        .find(|a| query_jd >= a.start_jd && query_jd < a.end_jd)?;
    Some((maha, antar))
}
