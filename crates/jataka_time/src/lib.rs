//! Time utilities for the jataka chart engine.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion and Julian centuries
//! - Greenwich/local mean sidereal time (degree-valued polynomial)
//! - IANA timezone resolution (via chrono-tz) with a logged IST fallback

pub mod julian;
pub mod sidereal;
pub mod zone;

pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar, julian_centuries};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use zone::{ZoneResolution, resolve_offset_hours};
