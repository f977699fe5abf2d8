//! Vedic (jyotish) derived calculations over tropical longitudes.
//!
//! This crate provides:
//! - Lahiri ayanamsha and tropical → sidereal conversion
//! - Rashi (sign), nakshatra (lunar mansion), and pada classification
//! - Lagna (ascendant) and whole-sign bhava (house) assignment
//! - Panchang elements: tithi, yoga, karana, moon phase, sunrise/sunset
//! - Vimshottari dasha generation
//! - Varga (divisional) chart mapping for D1 and D9
//!
//! All placements derive from sidereal longitudes; the tropical values feed
//! in only through [`ayanamsha::to_sidereal`].

pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod graha;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod riseset;
pub mod util;
pub mod varga;

pub use ayanamsha::{lahiri_ayanamsha_deg, to_sidereal};
pub use bhava::{ascendant_tropical_deg, house_of, obliquity_deg, whole_sign_houses};
pub use dasha::{
    DAYS_PER_YEAR, DashaBalance, DashaPeriod, Mahadasha, TOTAL_CYCLE_YEARS, active_dasha_at,
    birth_balance, vimshottari_mahadashas,
};
pub use graha::{ALL_GRAHAS, DASHA_SEQUENCE, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use panchang::{
    KaranaInfo, MoonPhase, Paksha, TithiInfo, YogaInfo, karana_from_elongation, moon_phase,
    tithi_from_elongation, yoga_from_sum,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use riseset::{RiseSet, sunrise_sunset};
pub use varga::{VargaPosition, navamsa_position, rashi_chart_position};
