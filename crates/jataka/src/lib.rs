//! Sidereal (Vedic) birth chart engine.
//!
//! The top-level crate ties the lower layers together into the four
//! public query paths:
//! - [`compute_kundali`]: full birth chart (lagna, houses, nine planets,
//!   panchang, Vimshottari dashas, D1/D9 charts)
//! - [`daily_panchang`]: the five angas, sunrise/sunset, and sign
//!   summaries for a calendar date at a place
//! - [`dasha_report`]: the dasha timeline with the running mahadasha and
//!   antardasha at an instant
//! - [`transits_at`]: the nine grahas' current sidereal positions
//!
//! All paths are pure given their inputs; "now" is always an explicit JD
//! supplied by the caller. Results serialize to camelCase JSON.

pub mod error;
pub mod input;
pub mod kundali;
pub mod reports;
pub mod transits;

pub use error::KundaliError;
pub use input::{BirthInput, BirthMoment};
pub use kundali::{
    AngaRecord, AntardashaData, ChartPlanet, Charts, DashaData, DivisionalChart, HouseRecord,
    KundaliResult, LagnaData, MoonNakshatra, PanchangData, PlanetPosition, SignSummary,
    compute_kundali,
};
pub use reports::{DashaReport, PanchangReport, daily_panchang, dasha_report};
pub use transits::{TransitRecord, transits_at};
